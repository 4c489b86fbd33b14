//! The 5x5 availability grid: slots down the side, weekdays across the top.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calendar;
use crate::models::{Slot, Weekday, WeekSchedule};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cell {
    Open,
    Booked,
}

impl Cell {
    fn label(self) -> &'static str {
        match self {
            Cell::Open => "open",
            Cell::Booked => "booked",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityGrid {
    pub anchor: String,
    pub dates: Option<[NaiveDate; 5]>,
    /// Indexed `[slot][weekday]`.
    pub cells: [[Cell; 5]; 5],
}

impl AvailabilityGrid {
    pub fn from_week(schedule: &WeekSchedule) -> Self {
        let cells = Slot::ALL.map(|slot| {
            Weekday::ALL.map(|weekday| {
                if schedule.is_booked(weekday, slot) {
                    Cell::Booked
                } else {
                    Cell::Open
                }
            })
        });

        let dates = calendar::parse_anchor_date(&schedule.week.date)
            .and_then(calendar::week_dates)
            .map(|dates| dates.map(|(_, date)| date));

        Self {
            anchor: schedule.week.date.clone(),
            dates,
            cells,
        }
    }

    pub fn cell(&self, slot: Slot, weekday: Weekday) -> Cell {
        self.cells[slot.index()][weekday.days_from_monday() as usize]
    }

    pub fn open_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| **cell == Cell::Open)
            .count()
    }

    pub fn booked_count(&self) -> usize {
        self.cells.len() * Weekday::ALL.len() - self.open_count()
    }

    /// Plain-text table of the week.
    pub fn render(&self) -> String {
        let mut out = format!("Week of {}\n", self.anchor);

        let headers = Weekday::ALL.map(|weekday| match &self.dates {
            Some(dates) => format!(
                "{} {}",
                weekday.short_name(),
                dates[weekday.days_from_monday() as usize].format("%m/%d")
            ),
            None => weekday.short_name().to_string(),
        });
        out.push_str(&render_row("", headers.iter().map(String::as_str)));

        for (slot, row) in Slot::ALL.iter().zip(self.cells.iter()) {
            out.push_str(&render_row(slot.label(), row.iter().map(|cell| cell.label())));
        }

        out
    }
}

fn render_row<'a>(label: &str, columns: impl Iterator<Item = &'a str>) -> String {
    let mut line = format!("{:<7}", label);
    for column in columns {
        line.push_str(&format!("{:<10}", column));
    }
    line.push('\n');
    line
}
