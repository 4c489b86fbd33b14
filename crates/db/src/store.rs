//! # Booking Store
//!
//! The persistence seam between the API and the database. Resolvers talk to a
//! `dyn BookingStore`; [`PgBookingStore`] backs it with Postgres, while
//! [`crate::memory::MemoryBookingStore`] and the `mockall` mock in
//! [`crate::mock`] stand in for it elsewhere.

use async_trait::async_trait;
use eyre::Result;
use tidyslot_core::models::{Booking, FetchedWeeks, Slot, WeekSchedule, Weekday};
use uuid::Uuid;

use crate::repositories::{booking, days, week};
use crate::DbPool;

#[async_trait]
pub trait BookingStore: Send + Sync {
    async fn create_booking(&self) -> Result<Booking>;

    async fn get_booking(&self, id: Uuid) -> Result<Option<Booking>>;

    async fn list_bookings(&self) -> Result<Vec<Booking>>;

    /// Deletes a booking and detaches its weeks. Returns false if it did not exist.
    async fn delete_booking(&self, id: Uuid) -> Result<bool>;

    /// Returns the weeks stored under `anchor_date`, oldest first, creating a
    /// week with all slots open when there are none. Atomic per anchor date.
    async fn fetch_or_create_week(&self, anchor_date: &str) -> Result<FetchedWeeks>;

    async fn get_week(&self, id: Uuid) -> Result<Option<WeekSchedule>>;

    /// All weeks, or only those of one booking.
    async fn list_weeks(&self, booking_id: Option<Uuid>) -> Result<Vec<WeekSchedule>>;

    /// Attaches a week to a booking, or detaches it with `None`.
    /// Returns `None` when the week does not exist.
    async fn assign_week(
        &self,
        week_id: Uuid,
        booking_id: Option<Uuid>,
    ) -> Result<Option<WeekSchedule>>;

    /// Returns `None` when the week does not exist.
    async fn set_slot(
        &self,
        week_id: Uuid,
        weekday: Weekday,
        slot: Slot,
        booked: bool,
    ) -> Result<Option<WeekSchedule>>;
}

#[derive(Clone)]
pub struct PgBookingStore {
    pool: DbPool,
}

impl PgBookingStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

#[async_trait]
impl BookingStore for PgBookingStore {
    async fn create_booking(&self) -> Result<Booking> {
        Ok(booking::create_booking(&self.pool).await?.into())
    }

    async fn get_booking(&self, id: Uuid) -> Result<Option<Booking>> {
        Ok(booking::get_booking_by_id(&self.pool, id)
            .await?
            .map(Booking::from))
    }

    async fn list_bookings(&self) -> Result<Vec<Booking>> {
        Ok(booking::list_bookings(&self.pool)
            .await?
            .into_iter()
            .map(Booking::from)
            .collect())
    }

    async fn delete_booking(&self, id: Uuid) -> Result<bool> {
        booking::delete_booking(&self.pool, id).await
    }

    async fn fetch_or_create_week(&self, anchor_date: &str) -> Result<FetchedWeeks> {
        let (rows, created) = week::fetch_or_create_week(&self.pool, anchor_date).await?;

        let mut weeks = Vec::with_capacity(rows.len());
        for row in rows {
            weeks.push(days::load_schedule(&self.pool, row).await?);
        }

        Ok(FetchedWeeks { weeks, created })
    }

    async fn get_week(&self, id: Uuid) -> Result<Option<WeekSchedule>> {
        match week::get_week_by_id(&self.pool, id).await? {
            Some(row) => Ok(Some(days::load_schedule(&self.pool, row).await?)),
            None => Ok(None),
        }
    }

    async fn list_weeks(&self, booking_id: Option<Uuid>) -> Result<Vec<WeekSchedule>> {
        let rows = week::list_weeks(&self.pool, booking_id).await?;

        let mut weeks = Vec::with_capacity(rows.len());
        for row in rows {
            weeks.push(days::load_schedule(&self.pool, row).await?);
        }

        Ok(weeks)
    }

    async fn assign_week(
        &self,
        week_id: Uuid,
        booking_id: Option<Uuid>,
    ) -> Result<Option<WeekSchedule>> {
        match week::set_week_booking(&self.pool, week_id, booking_id).await? {
            Some(row) => Ok(Some(days::load_schedule(&self.pool, row).await?)),
            None => Ok(None),
        }
    }

    async fn set_slot(
        &self,
        week_id: Uuid,
        weekday: Weekday,
        slot: Slot,
        booked: bool,
    ) -> Result<Option<WeekSchedule>> {
        if !days::set_slot(&self.pool, week_id, weekday, slot, booked).await? {
            return Ok(None);
        }

        self.get_week(week_id).await
    }
}
