use chrono::{DateTime, Utc};
use eyre::{Result, WrapErr};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tidyslot_core::models::{Booking, DaySlots, SlotSet, Week, Weekday};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbBooking {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbWeek {
    pub id: Uuid,
    pub anchor_date: String,
    pub booking_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbDays {
    pub id: Uuid,
    pub week_id: Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbWeekdaySlots {
    pub id: Uuid,
    pub days_id: Uuid,
    pub weekday: String,
    pub eight_ten: bool,
    pub ten_twelve: bool,
    pub twelve_two: bool,
    pub two_four: bool,
    pub four_six: bool,
}

impl From<DbBooking> for Booking {
    fn from(row: DbBooking) -> Self {
        Booking {
            id: row.id,
            created_at: row.created_at,
        }
    }
}

impl From<DbWeek> for Week {
    fn from(row: DbWeek) -> Self {
        Week {
            id: row.id,
            date: row.anchor_date,
            booking_id: row.booking_id,
            created_at: row.created_at,
        }
    }
}

impl TryFrom<DbWeekdaySlots> for DaySlots {
    type Error = eyre::Report;

    fn try_from(row: DbWeekdaySlots) -> Result<Self> {
        let weekday = row
            .weekday
            .parse::<Weekday>()
            .wrap_err_with(|| format!("Weekday row {} has an invalid weekday", row.id))?;

        Ok(DaySlots {
            id: row.id,
            weekday,
            slots: SlotSet {
                eight_ten: row.eight_ten,
                ten_twelve: row.ten_twelve,
                twelve_two: row.twelve_two,
                two_four: row.two_four,
                four_six: row.four_six,
            },
        })
    }
}
