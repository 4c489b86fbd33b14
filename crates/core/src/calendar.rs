//! Date arithmetic for laying a week out on a calendar.
//!
//! Anchor dates are free-form strings. The formats below are recognised; any
//! other anchor is still a valid key for a week but has no calendar dates.

use chrono::{DateTime, Datelike, Duration, NaiveDate};

use crate::models::Weekday;

const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%m/%d/%Y"];

pub fn parse_anchor_date(anchor: &str) -> Option<NaiveDate> {
    let anchor = anchor.trim();

    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(anchor, format).ok())
        .or_else(|| {
            DateTime::parse_from_rfc3339(anchor)
                .ok()
                .map(|timestamp| timestamp.date_naive())
        })
}

/// Monday of the week displayed for `date`. Saturdays and Sundays roll
/// forward to the following Monday. `None` when that Monday falls outside
/// the representable date range.
pub fn week_monday(date: NaiveDate) -> Option<NaiveDate> {
    date.checked_add_signed(Duration::days(monday_offset(date)))
}

/// Days from `anchor` to the given weekday of its displayed week.
pub fn weekday_offset(anchor: NaiveDate, weekday: Weekday) -> i64 {
    monday_offset(anchor) + i64::from(weekday.days_from_monday())
}

pub fn weekday_date(anchor: NaiveDate, weekday: Weekday) -> Option<NaiveDate> {
    anchor.checked_add_signed(Duration::days(weekday_offset(anchor, weekday)))
}

/// All five dates of the displayed week, or `None` if any of them is out of
/// range.
pub fn week_dates(anchor: NaiveDate) -> Option<[(Weekday, NaiveDate); 5]> {
    let mut dates = [(Weekday::Monday, anchor); 5];
    for (entry, weekday) in dates.iter_mut().zip(Weekday::ALL) {
        *entry = (weekday, weekday_date(anchor, weekday)?);
    }
    Some(dates)
}

/// Calendar date of a weekday for a raw anchor string, if the anchor parses
/// and the date is in range.
pub fn anchor_weekday_date(anchor: &str, weekday: Weekday) -> Option<NaiveDate> {
    parse_anchor_date(anchor).and_then(|date| weekday_date(date, weekday))
}

fn monday_offset(date: NaiveDate) -> i64 {
    let from_monday = i64::from(date.weekday().num_days_from_monday());
    if from_monday >= 5 {
        7 - from_monday
    } else {
        -from_monday
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_cover_one_contiguous_week() {
        let anchor = NaiveDate::from_ymd_opt(2021, 3, 3).unwrap();
        let offsets: Vec<i64> = Weekday::ALL
            .into_iter()
            .map(|weekday| weekday_offset(anchor, weekday))
            .collect();
        assert_eq!(offsets, vec![-2, -1, 0, 1, 2]);
    }
}
