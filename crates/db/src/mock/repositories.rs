use async_trait::async_trait;
use mockall::mock;
use tidyslot_core::models::{Booking, FetchedWeeks, Slot, WeekSchedule, Weekday};
use uuid::Uuid;

use crate::store::BookingStore;

// Mock store for testing resolvers without a database
mock! {
    pub BookingStore {}

    #[async_trait]
    impl BookingStore for BookingStore {
        async fn create_booking(&self) -> eyre::Result<Booking>;

        async fn get_booking(&self, id: Uuid) -> eyre::Result<Option<Booking>>;

        async fn list_bookings(&self) -> eyre::Result<Vec<Booking>>;

        async fn delete_booking(&self, id: Uuid) -> eyre::Result<bool>;

        async fn fetch_or_create_week(&self, anchor_date: &str) -> eyre::Result<FetchedWeeks>;

        async fn get_week(&self, id: Uuid) -> eyre::Result<Option<WeekSchedule>>;

        async fn list_weeks(&self, booking_id: Option<Uuid>) -> eyre::Result<Vec<WeekSchedule>>;

        async fn assign_week(
            &self,
            week_id: Uuid,
            booking_id: Option<Uuid>,
        ) -> eyre::Result<Option<WeekSchedule>>;

        async fn set_slot(
            &self,
            week_id: Uuid,
            weekday: Weekday,
            slot: Slot,
            booked: bool,
        ) -> eyre::Result<Option<WeekSchedule>>;
    }
}
