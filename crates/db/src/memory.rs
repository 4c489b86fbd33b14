//! In-process [`BookingStore`] used for tests and local runs without Postgres.

use async_trait::async_trait;
use chrono::Utc;
use eyre::Result;
use tidyslot_core::models::{Booking, Days, FetchedWeeks, Slot, Week, WeekSchedule, Weekday};
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::store::BookingStore;

#[derive(Default)]
struct MemoryState {
    bookings: Vec<Booking>,
    weeks: Vec<WeekSchedule>,
}

#[derive(Default)]
pub struct MemoryBookingStore {
    state: Mutex<MemoryState>,
}

impl MemoryBookingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a week as-is, bypassing get-or-create. Lets callers reproduce
    /// duplicate anchor dates left behind by older writers.
    pub async fn insert_week(&self, schedule: WeekSchedule) {
        self.state.lock().await.weeks.push(schedule);
    }
}

#[async_trait]
impl BookingStore for MemoryBookingStore {
    async fn create_booking(&self) -> Result<Booking> {
        let booking = Booking {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
        };
        self.state.lock().await.bookings.push(booking.clone());
        Ok(booking)
    }

    async fn get_booking(&self, id: Uuid) -> Result<Option<Booking>> {
        let state = self.state.lock().await;
        Ok(state.bookings.iter().find(|b| b.id == id).cloned())
    }

    async fn list_bookings(&self) -> Result<Vec<Booking>> {
        Ok(self.state.lock().await.bookings.clone())
    }

    async fn delete_booking(&self, id: Uuid) -> Result<bool> {
        let mut state = self.state.lock().await;
        let before = state.bookings.len();
        state.bookings.retain(|b| b.id != id);
        if state.bookings.len() == before {
            return Ok(false);
        }

        for schedule in state.weeks.iter_mut() {
            if schedule.week.booking_id == Some(id) {
                schedule.week.booking_id = None;
            }
        }
        Ok(true)
    }

    async fn fetch_or_create_week(&self, anchor_date: &str) -> Result<FetchedWeeks> {
        // The lock is held across the lookup and the insert.
        let mut state = self.state.lock().await;

        let mut existing: Vec<WeekSchedule> = state
            .weeks
            .iter()
            .filter(|schedule| schedule.week.date == anchor_date)
            .cloned()
            .collect();
        existing.sort_by_key(|schedule| schedule.week.created_at);
        if !existing.is_empty() {
            return Ok(FetchedWeeks {
                weeks: existing,
                created: false,
            });
        }

        let week = Week {
            id: Uuid::new_v4(),
            date: anchor_date.to_string(),
            booking_id: None,
            created_at: Utc::now(),
        };
        let schedule = WeekSchedule {
            days: Days::open(week.id),
            week,
        };
        state.weeks.push(schedule.clone());

        Ok(FetchedWeeks {
            weeks: vec![schedule],
            created: true,
        })
    }

    async fn get_week(&self, id: Uuid) -> Result<Option<WeekSchedule>> {
        let state = self.state.lock().await;
        Ok(state.weeks.iter().find(|s| s.week.id == id).cloned())
    }

    async fn list_weeks(&self, booking_id: Option<Uuid>) -> Result<Vec<WeekSchedule>> {
        let state = self.state.lock().await;
        let mut weeks: Vec<WeekSchedule> = state
            .weeks
            .iter()
            .filter(|s| booking_id.is_none() || s.week.booking_id == booking_id)
            .cloned()
            .collect();
        weeks.sort_by_key(|s| s.week.created_at);
        Ok(weeks)
    }

    async fn assign_week(
        &self,
        week_id: Uuid,
        booking_id: Option<Uuid>,
    ) -> Result<Option<WeekSchedule>> {
        let mut state = self.state.lock().await;
        if let Some(id) = booking_id {
            if !state.bookings.iter().any(|b| b.id == id) {
                eyre::bail!("Booking {} does not exist", id);
            }
        }

        Ok(state
            .weeks
            .iter_mut()
            .find(|s| s.week.id == week_id)
            .map(|schedule| {
                schedule.week.booking_id = booking_id;
                schedule.clone()
            }))
    }

    async fn set_slot(
        &self,
        week_id: Uuid,
        weekday: Weekday,
        slot: Slot,
        booked: bool,
    ) -> Result<Option<WeekSchedule>> {
        let mut state = self.state.lock().await;
        Ok(state
            .weeks
            .iter_mut()
            .find(|s| s.week.id == week_id)
            .map(|schedule| {
                schedule.days.get_mut(weekday).slots.set(slot, booked);
                schedule.clone()
            }))
    }
}
