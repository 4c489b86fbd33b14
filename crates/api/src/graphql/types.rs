use std::sync::Arc;

use async_graphql::{ComplexObject, Context, Enum, Result, SimpleObject};
use chrono::{DateTime, Utc};
use tidyslot_core::calendar;
use tidyslot_core::models::{Booking, DaySlots, Days, Slot, WeekSchedule, Weekday};
use tidyslot_db::BookingStore;
use uuid::Uuid;

use crate::handlers;
use crate::middleware::error_handling::graphql_error;

#[derive(Enum, Copy, Clone, Debug, Eq, PartialEq)]
#[graphql(name = "Weekday")]
pub enum WeekdayValue {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl From<WeekdayValue> for Weekday {
    fn from(value: WeekdayValue) -> Self {
        match value {
            WeekdayValue::Monday => Weekday::Monday,
            WeekdayValue::Tuesday => Weekday::Tuesday,
            WeekdayValue::Wednesday => Weekday::Wednesday,
            WeekdayValue::Thursday => Weekday::Thursday,
            WeekdayValue::Friday => Weekday::Friday,
        }
    }
}

impl From<Weekday> for WeekdayValue {
    fn from(weekday: Weekday) -> Self {
        match weekday {
            Weekday::Monday => WeekdayValue::Monday,
            Weekday::Tuesday => WeekdayValue::Tuesday,
            Weekday::Wednesday => WeekdayValue::Wednesday,
            Weekday::Thursday => WeekdayValue::Thursday,
            Weekday::Friday => WeekdayValue::Friday,
        }
    }
}

/// Exposed as `EIGHT_TEN`, `TEN_TWELVE`, `TWELVE_TWO`, `TWO_FOUR`, `FOUR_SIX`.
#[derive(Enum, Copy, Clone, Debug, Eq, PartialEq)]
#[graphql(name = "Slot")]
pub enum SlotValue {
    EightTen,
    TenTwelve,
    TwelveTwo,
    TwoFour,
    FourSix,
}

impl From<SlotValue> for Slot {
    fn from(value: SlotValue) -> Self {
        match value {
            SlotValue::EightTen => Slot::EightTen,
            SlotValue::TenTwelve => Slot::TenTwelve,
            SlotValue::TwelveTwo => Slot::TwelveTwo,
            SlotValue::TwoFour => Slot::TwoFour,
            SlotValue::FourSix => Slot::FourSix,
        }
    }
}

#[derive(SimpleObject, Clone, Debug)]
#[graphql(name = "WeekdaySlots")]
pub struct WeekdaySlotsObject {
    pub id: Uuid,
    pub weekday: WeekdayValue,
    /// Calendar date of this weekday, when the week's anchor date parses.
    pub date: Option<String>,
    pub eight_ten: bool,
    pub ten_twelve: bool,
    pub twelve_two: bool,
    pub two_four: bool,
    pub four_six: bool,
    pub open_slots: i32,
}

impl WeekdaySlotsObject {
    fn new(row: &DaySlots, anchor: &str) -> Self {
        Self {
            id: row.id,
            weekday: row.weekday.into(),
            date: calendar::anchor_weekday_date(anchor, row.weekday)
                .map(|date| date.format("%Y-%m-%d").to_string()),
            eight_ten: row.slots.eight_ten,
            ten_twelve: row.slots.ten_twelve,
            twelve_two: row.slots.twelve_two,
            two_four: row.slots.two_four,
            four_six: row.slots.four_six,
            open_slots: row.slots.open_count() as i32,
        }
    }
}

#[derive(SimpleObject, Clone, Debug)]
#[graphql(name = "Days")]
pub struct DaysObject {
    pub id: Uuid,
    pub monday: WeekdaySlotsObject,
    pub tuesday: WeekdaySlotsObject,
    pub wednesday: WeekdaySlotsObject,
    pub thursday: WeekdaySlotsObject,
    pub friday: WeekdaySlotsObject,
}

impl DaysObject {
    fn new(days: &Days, anchor: &str) -> Self {
        Self {
            id: days.id,
            monday: WeekdaySlotsObject::new(&days.monday, anchor),
            tuesday: WeekdaySlotsObject::new(&days.tuesday, anchor),
            wednesday: WeekdaySlotsObject::new(&days.wednesday, anchor),
            thursday: WeekdaySlotsObject::new(&days.thursday, anchor),
            friday: WeekdaySlotsObject::new(&days.friday, anchor),
        }
    }
}

#[derive(SimpleObject, Clone, Debug)]
#[graphql(name = "Week")]
pub struct WeekObject {
    pub id: Uuid,
    /// The anchor date this week was requested with.
    pub date: String,
    pub booking_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub days: DaysObject,
}

impl From<WeekSchedule> for WeekObject {
    fn from(schedule: WeekSchedule) -> Self {
        let days = DaysObject::new(&schedule.days, &schedule.week.date);
        Self {
            id: schedule.week.id,
            date: schedule.week.date,
            booking_id: schedule.week.booking_id,
            created_at: schedule.week.created_at,
            days,
        }
    }
}

#[derive(SimpleObject, Clone, Debug)]
#[graphql(name = "Booking", complex)]
pub struct BookingObject {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
}

#[ComplexObject]
impl BookingObject {
    async fn weeks(&self, ctx: &Context<'_>) -> Result<Vec<WeekObject>> {
        let store = ctx.data::<Arc<dyn BookingStore>>()?;
        let weeks = handlers::week::list_weeks(store.as_ref(), Some(self.id))
            .await
            .map_err(graphql_error)?;

        Ok(weeks.into_iter().map(WeekObject::from).collect())
    }
}

impl From<Booking> for BookingObject {
    fn from(booking: Booking) -> Self {
        Self {
            id: booking.id,
            created_at: booking.created_at,
        }
    }
}
