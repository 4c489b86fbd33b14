use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use rstest::rstest;
use tidyslot_core::calendar::{
    anchor_weekday_date, parse_anchor_date, week_dates, week_monday, weekday_offset,
};
use tidyslot_core::models::Weekday;

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

#[rstest]
#[case("2021-03-01", Some(ymd(2021, 3, 1)))]
#[case("  2021-03-01 ", Some(ymd(2021, 3, 1)))]
#[case("03/01/2021", Some(ymd(2021, 3, 1)))]
#[case("2021-03-01T09:30:00Z", Some(ymd(2021, 3, 1)))]
#[case("2021-03-01T23:30:00-05:00", Some(ymd(2021, 3, 1)))]
#[case("first week of March", None)]
#[case("", None)]
fn test_parse_anchor_date(#[case] anchor: &str, #[case] expected: Option<NaiveDate>) {
    assert_eq!(parse_anchor_date(anchor), expected);
}

#[rstest]
// Monday through Friday stay in their own week
#[case(ymd(2021, 3, 1), ymd(2021, 3, 1))]
#[case(ymd(2021, 3, 3), ymd(2021, 3, 1))]
#[case(ymd(2021, 3, 5), ymd(2021, 3, 1))]
// Weekends roll forward
#[case(ymd(2021, 3, 6), ymd(2021, 3, 8))]
#[case(ymd(2021, 3, 7), ymd(2021, 3, 8))]
// Across a month boundary
#[case(ymd(2021, 4, 1), ymd(2021, 3, 29))]
fn test_week_monday(#[case] date: NaiveDate, #[case] monday: NaiveDate) {
    assert_eq!(week_monday(date), Some(monday));
}

#[rstest]
#[case(ymd(2021, 3, 1), Weekday::Monday, 0)]
#[case(ymd(2021, 3, 1), Weekday::Friday, 4)]
#[case(ymd(2021, 3, 4), Weekday::Monday, -3)]
#[case(ymd(2021, 3, 4), Weekday::Friday, 1)]
#[case(ymd(2021, 3, 6), Weekday::Monday, 2)]
#[case(ymd(2021, 3, 7), Weekday::Wednesday, 3)]
fn test_weekday_offset(#[case] anchor: NaiveDate, #[case] weekday: Weekday, #[case] offset: i64) {
    assert_eq!(weekday_offset(anchor, weekday), offset);
}

#[test]
fn test_week_dates_are_consecutive() {
    let dates = week_dates(ymd(2021, 12, 30));

    assert_eq!(
        dates,
        Some([
            (Weekday::Monday, ymd(2021, 12, 27)),
            (Weekday::Tuesday, ymd(2021, 12, 28)),
            (Weekday::Wednesday, ymd(2021, 12, 29)),
            (Weekday::Thursday, ymd(2021, 12, 30)),
            (Weekday::Friday, ymd(2021, 12, 31)),
        ])
    );
}

#[test]
fn test_anchor_weekday_date() {
    assert_eq!(
        anchor_weekday_date("2021-03-03", Weekday::Friday),
        Some(ymd(2021, 3, 5))
    );
    assert_eq!(anchor_weekday_date("next week", Weekday::Friday), None);
}

#[rstest]
#[case(NaiveDate::MIN, None)]
#[case(ymd(262142, 12, 29), Some(NaiveDate::MAX))]
fn test_week_monday_at_range_limits(#[case] date: NaiveDate, #[case] monday: Option<NaiveDate>) {
    assert_eq!(week_monday(date), monday);
}

#[rstest]
// Saturday two days before the last representable date, a Monday
#[case("+262142-12-29", Weekday::Monday, Some(ymd(262142, 12, 31)))]
#[case("+262142-12-29", Weekday::Tuesday, None)]
#[case("+262142-12-29", Weekday::Friday, None)]
// Thursday on the first representable date; its Monday is before it
#[case("-262143-01-01", Weekday::Monday, None)]
#[case("-262143-01-01", Weekday::Thursday, Some(ymd(-262143, 1, 1)))]
#[case("-262143-01-01", Weekday::Friday, Some(ymd(-262143, 1, 2)))]
fn test_anchor_weekday_date_at_range_limits(
    #[case] anchor: &str,
    #[case] weekday: Weekday,
    #[case] expected: Option<NaiveDate>,
) {
    assert_eq!(anchor_weekday_date(anchor, weekday), expected);
}

#[rstest]
#[case(ymd(262142, 12, 29))]
#[case(ymd(-262143, 1, 1))]
fn test_week_dates_at_range_limits_are_none(#[case] anchor: NaiveDate) {
    assert_eq!(week_dates(anchor), None);
}
