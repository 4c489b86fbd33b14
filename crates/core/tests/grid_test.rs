use chrono::{NaiveDate, Utc};
use pretty_assertions::assert_eq;
use tidyslot_core::grid::{AvailabilityGrid, Cell};
use tidyslot_core::models::{Days, Slot, Week, WeekSchedule, Weekday};
use uuid::Uuid;

fn schedule(date: &str) -> WeekSchedule {
    let week = Week {
        id: Uuid::new_v4(),
        date: date.to_string(),
        booking_id: None,
        created_at: Utc::now(),
    };
    let days = Days::open(week.id);
    WeekSchedule { week, days }
}

#[test]
fn test_empty_week_is_all_open() {
    let grid = AvailabilityGrid::from_week(&schedule("2021-03-01"));

    assert_eq!(grid.open_count(), 25);
    assert_eq!(grid.booked_count(), 0);
    assert!(grid.cells.iter().flatten().all(|cell| *cell == Cell::Open));
}

#[test]
fn test_grid_cells_follow_slots_and_weekdays() {
    let mut week = schedule("2021-03-01");
    week.days.get_mut(Weekday::Wednesday).slots.set(Slot::TwelveTwo, true);
    week.days.get_mut(Weekday::Monday).slots.set(Slot::FourSix, true);

    let grid = AvailabilityGrid::from_week(&week);

    assert_eq!(grid.cell(Slot::TwelveTwo, Weekday::Wednesday), Cell::Booked);
    assert_eq!(grid.cell(Slot::FourSix, Weekday::Monday), Cell::Booked);
    assert_eq!(grid.cell(Slot::FourSix, Weekday::Tuesday), Cell::Open);
    assert_eq!(grid.cells[2][2], Cell::Booked);
    assert_eq!(grid.booked_count(), 2);
}

#[test]
fn test_grid_dates_from_parsable_anchor() {
    let grid = AvailabilityGrid::from_week(&schedule("2021-03-03"));

    let dates = grid.dates.expect("anchor should parse");
    assert_eq!(dates[0], NaiveDate::from_ymd_opt(2021, 3, 1).unwrap());
    assert_eq!(dates[4], NaiveDate::from_ymd_opt(2021, 3, 5).unwrap());
}

#[test]
fn test_render_with_dates() {
    let mut week = schedule("2021-03-01");
    week.days.get_mut(Weekday::Friday).slots.set(Slot::EightTen, true);

    let rendered = AvailabilityGrid::from_week(&week).render();
    let lines: Vec<&str> = rendered.lines().collect();

    assert_eq!(lines.len(), 7);
    assert_eq!(lines[0], "Week of 2021-03-01");
    assert!(lines[1].contains("Mon 03/01"));
    assert!(lines[1].contains("Fri 03/05"));
    assert!(lines[2].starts_with("8-10"));
    assert!(lines[2].trim_end().ends_with("booked"));
    assert!(lines[6].starts_with("4-6"));
    assert!(!lines[6].contains("booked"));
}

#[test]
fn test_render_without_dates() {
    let rendered = AvailabilityGrid::from_week(&schedule("spring clean")).render();
    let header = rendered.lines().nth(1).unwrap();

    assert!(header.contains("Mon"));
    assert!(!header.contains('/'));
}

#[test]
fn test_week_past_date_range_has_no_dates() {
    let grid = AvailabilityGrid::from_week(&schedule("+262142-12-29"));

    assert_eq!(grid.dates, None);
    assert_eq!(grid.open_count(), 25);
    assert!(grid.render().starts_with("Week of +262142-12-29\n"));
}

#[test]
fn test_render_pads_columns() {
    let rendered = AvailabilityGrid::from_week(&schedule("spring clean")).render();
    let lines: Vec<&str> = rendered.lines().collect();

    assert_eq!(
        lines[1],
        format!("{:7}{:<10}{:<10}{:<10}{:<10}{:<10}", "", "Mon", "Tue", "Wed", "Thu", "Fri")
    );
    assert_eq!(lines[4], format!("{:<7}{}", "2-4", "open      ".repeat(5)));
}
