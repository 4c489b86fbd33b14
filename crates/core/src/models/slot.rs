use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::BookingError;

/// A working day on the cleaning schedule. Weekends are never booked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl Weekday {
    pub const ALL: [Weekday; 5] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
    ];

    /// Days after Monday, so Monday is 0 and Friday is 4.
    pub fn days_from_monday(self) -> u32 {
        match self {
            Weekday::Monday => 0,
            Weekday::Tuesday => 1,
            Weekday::Wednesday => 2,
            Weekday::Thursday => 3,
            Weekday::Friday => 4,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Weekday::Monday => "monday",
            Weekday::Tuesday => "tuesday",
            Weekday::Wednesday => "wednesday",
            Weekday::Thursday => "thursday",
            Weekday::Friday => "friday",
        }
    }

    pub fn short_name(self) -> &'static str {
        match self {
            Weekday::Monday => "Mon",
            Weekday::Tuesday => "Tue",
            Weekday::Wednesday => "Wed",
            Weekday::Thursday => "Thu",
            Weekday::Friday => "Fri",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Weekday {
    type Err = BookingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "monday" | "mon" => Ok(Weekday::Monday),
            "tuesday" | "tue" => Ok(Weekday::Tuesday),
            "wednesday" | "wed" => Ok(Weekday::Wednesday),
            "thursday" | "thu" => Ok(Weekday::Thursday),
            "friday" | "fri" => Ok(Weekday::Friday),
            other => Err(BookingError::Validation(format!(
                "Unknown weekday: {}",
                other
            ))),
        }
    }
}

/// One of the five two-hour windows offered each weekday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Slot {
    EightTen,
    TenTwelve,
    TwelveTwo,
    TwoFour,
    FourSix,
}

impl Slot {
    pub const ALL: [Slot; 5] = [
        Slot::EightTen,
        Slot::TenTwelve,
        Slot::TwelveTwo,
        Slot::TwoFour,
        Slot::FourSix,
    ];

    /// Row of this slot in the day, earliest first.
    pub fn index(self) -> usize {
        match self {
            Slot::EightTen => 0,
            Slot::TenTwelve => 1,
            Slot::TwelveTwo => 2,
            Slot::TwoFour => 3,
            Slot::FourSix => 4,
        }
    }

    /// Start and end hour on a 24-hour clock.
    pub fn hours(self) -> (u32, u32) {
        match self {
            Slot::EightTen => (8, 10),
            Slot::TenTwelve => (10, 12),
            Slot::TwelveTwo => (12, 14),
            Slot::TwoFour => (14, 16),
            Slot::FourSix => (16, 18),
        }
    }

    /// Label as shown on the schedule, e.g. `12-2`.
    pub fn label(self) -> &'static str {
        match self {
            Slot::EightTen => "8-10",
            Slot::TenTwelve => "10-12",
            Slot::TwelveTwo => "12-2",
            Slot::TwoFour => "2-4",
            Slot::FourSix => "4-6",
        }
    }

    /// Column holding this slot in the `weekday_slots` table.
    pub fn column(self) -> &'static str {
        match self {
            Slot::EightTen => "eight_ten",
            Slot::TenTwelve => "ten_twelve",
            Slot::TwelveTwo => "twelve_two",
            Slot::TwoFour => "two_four",
            Slot::FourSix => "four_six",
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Slot {
    type Err = BookingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Slot::ALL
            .into_iter()
            .find(|slot| slot.label() == s || slot.column().eq_ignore_ascii_case(s))
            .ok_or_else(|| BookingError::Validation(format!("Unknown slot: {}", s)))
    }
}

/// Booked flags for the five slots of one weekday. `true` means booked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotSet {
    pub eight_ten: bool,
    pub ten_twelve: bool,
    pub twelve_two: bool,
    pub two_four: bool,
    pub four_six: bool,
}

impl SlotSet {
    pub fn is_booked(&self, slot: Slot) -> bool {
        match slot {
            Slot::EightTen => self.eight_ten,
            Slot::TenTwelve => self.ten_twelve,
            Slot::TwelveTwo => self.twelve_two,
            Slot::TwoFour => self.two_four,
            Slot::FourSix => self.four_six,
        }
    }

    pub fn set(&mut self, slot: Slot, booked: bool) {
        let flag = match slot {
            Slot::EightTen => &mut self.eight_ten,
            Slot::TenTwelve => &mut self.ten_twelve,
            Slot::TwelveTwo => &mut self.twelve_two,
            Slot::TwoFour => &mut self.two_four,
            Slot::FourSix => &mut self.four_six,
        };
        *flag = booked;
    }

    pub fn open_slots(&self) -> impl Iterator<Item = Slot> + '_ {
        Slot::ALL.into_iter().filter(move |slot| !self.is_booked(*slot))
    }

    pub fn booked_count(&self) -> usize {
        Slot::ALL.into_iter().filter(|slot| self.is_booked(*slot)).count()
    }

    pub fn open_count(&self) -> usize {
        Slot::ALL.len() - self.booked_count()
    }
}
