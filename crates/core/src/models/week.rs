use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{BookingError, BookingResult};
use crate::models::slot::{Slot, SlotSet, Weekday};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
}

/// A calendar week, keyed by the anchor date string it was first requested with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Week {
    pub id: Uuid,
    pub date: String,
    pub booking_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DaySlots {
    pub id: Uuid,
    pub weekday: Weekday,
    pub slots: SlotSet,
}

impl DaySlots {
    /// A weekday row with every slot open.
    pub fn open(weekday: Weekday) -> Self {
        Self {
            id: Uuid::new_v4(),
            weekday,
            slots: SlotSet::default(),
        }
    }
}

/// The Monday-to-Friday grouping of a week, one row per weekday.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Days {
    pub id: Uuid,
    pub week_id: Uuid,
    pub monday: DaySlots,
    pub tuesday: DaySlots,
    pub wednesday: DaySlots,
    pub thursday: DaySlots,
    pub friday: DaySlots,
}

impl Days {
    /// Days for a freshly created week: five rows, all slots open.
    pub fn open(week_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            week_id,
            monday: DaySlots::open(Weekday::Monday),
            tuesday: DaySlots::open(Weekday::Tuesday),
            wednesday: DaySlots::open(Weekday::Wednesday),
            thursday: DaySlots::open(Weekday::Thursday),
            friday: DaySlots::open(Weekday::Friday),
        }
    }

    /// Assembles a grouping from stored weekday rows. Fails unless every
    /// weekday appears exactly once.
    pub fn from_rows(id: Uuid, week_id: Uuid, rows: Vec<DaySlots>) -> BookingResult<Self> {
        let mut slots: [Option<DaySlots>; 5] = Default::default();

        for row in rows {
            let index = row.weekday.days_from_monday() as usize;
            if slots[index].is_some() {
                return Err(BookingError::Validation(format!(
                    "Days {} has more than one {} row",
                    id, row.weekday
                )));
            }
            slots[index] = Some(row);
        }

        let [monday, tuesday, wednesday, thursday, friday] = slots;
        let missing = |weekday: Weekday| {
            BookingError::Validation(format!("Days {} has no {} row", id, weekday))
        };

        Ok(Self {
            id,
            week_id,
            monday: monday.ok_or_else(|| missing(Weekday::Monday))?,
            tuesday: tuesday.ok_or_else(|| missing(Weekday::Tuesday))?,
            wednesday: wednesday.ok_or_else(|| missing(Weekday::Wednesday))?,
            thursday: thursday.ok_or_else(|| missing(Weekday::Thursday))?,
            friday: friday.ok_or_else(|| missing(Weekday::Friday))?,
        })
    }

    pub fn get(&self, weekday: Weekday) -> &DaySlots {
        match weekday {
            Weekday::Monday => &self.monday,
            Weekday::Tuesday => &self.tuesday,
            Weekday::Wednesday => &self.wednesday,
            Weekday::Thursday => &self.thursday,
            Weekday::Friday => &self.friday,
        }
    }

    pub fn get_mut(&mut self, weekday: Weekday) -> &mut DaySlots {
        match weekday {
            Weekday::Monday => &mut self.monday,
            Weekday::Tuesday => &mut self.tuesday,
            Weekday::Wednesday => &mut self.wednesday,
            Weekday::Thursday => &mut self.thursday,
            Weekday::Friday => &mut self.friday,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &DaySlots> {
        Weekday::ALL.into_iter().map(move |weekday| self.get(weekday))
    }
}

/// A week together with its slot grid, as returned to clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekSchedule {
    pub week: Week,
    pub days: Days,
}

impl WeekSchedule {
    pub fn is_booked(&self, weekday: Weekday, slot: Slot) -> bool {
        self.days.get(weekday).slots.is_booked(slot)
    }

    pub fn booked_count(&self) -> usize {
        self.days.iter().map(|day| day.slots.booked_count()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.booked_count() == 0
    }
}

/// Outcome of a get-or-create lookup by anchor date.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchedWeeks {
    pub weeks: Vec<WeekSchedule>,
    pub created: bool,
}
