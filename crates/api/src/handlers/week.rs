use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;
use tidyslot_core::{
    errors::{BookingError, BookingResult},
    models::{Slot, WeekSchedule, Weekday},
};
use tidyslot_db::BookingStore;
use tracing::{info, warn};
use uuid::Uuid;

use crate::{middleware::error_handling::AppError, ApiState};

/// Get-or-create by anchor date: returns every week stored under `date`, or a
/// newly created week with all slots open when there is none.
pub async fn fetch_week(store: &dyn BookingStore, date: &str) -> BookingResult<Vec<WeekSchedule>> {
    let date = date.trim();
    if date.is_empty() {
        warn!("Rejected fetchWeek with an empty anchor date");
        return Err(BookingError::Validation(
            "Anchor date must not be empty".to_string(),
        ));
    }

    let fetched = store
        .fetch_or_create_week(date)
        .await
        .map_err(BookingError::Database)?;

    if fetched.created {
        info!("Created week for anchor date {}", date);
    } else if fetched.weeks.len() > 1 {
        warn!(
            "Anchor date {} matches {} weeks",
            date,
            fetched.weeks.len()
        );
    }

    Ok(fetched.weeks)
}

pub async fn find_week(store: &dyn BookingStore, id: Uuid) -> BookingResult<Option<WeekSchedule>> {
    store.get_week(id).await.map_err(BookingError::Database)
}

/// All weeks, or the weeks of one booking. An unknown booking is an error
/// rather than an empty list.
pub async fn list_weeks(
    store: &dyn BookingStore,
    booking_id: Option<Uuid>,
) -> BookingResult<Vec<WeekSchedule>> {
    if let Some(id) = booking_id {
        require_booking(store, id).await?;
    }

    store
        .list_weeks(booking_id)
        .await
        .map_err(BookingError::Database)
}

pub async fn assign_week(
    store: &dyn BookingStore,
    week_id: Uuid,
    booking_id: Option<Uuid>,
) -> BookingResult<WeekSchedule> {
    if let Some(id) = booking_id {
        require_booking(store, id).await?;
    }

    let schedule = store
        .assign_week(week_id, booking_id)
        .await
        .map_err(BookingError::Database)?
        .ok_or_else(|| week_not_found(week_id))?;

    info!("Week {} assigned to booking {:?}", week_id, booking_id);
    Ok(schedule)
}

pub async fn set_slot(
    store: &dyn BookingStore,
    week_id: Uuid,
    weekday: Weekday,
    slot: Slot,
    booked: bool,
) -> BookingResult<WeekSchedule> {
    let schedule = store
        .set_slot(week_id, weekday, slot, booked)
        .await
        .map_err(BookingError::Database)?
        .ok_or_else(|| week_not_found(week_id))?;

    info!(
        "Week {} {} {} marked {}",
        week_id,
        weekday,
        slot,
        if booked { "booked" } else { "open" }
    );
    Ok(schedule)
}

async fn require_booking(store: &dyn BookingStore, id: Uuid) -> BookingResult<()> {
    store
        .get_booking(id)
        .await
        .map_err(BookingError::Database)?
        .map(|_| ())
        .ok_or_else(|| BookingError::NotFound(format!("Booking with ID {} not found", id)))
}

fn week_not_found(id: Uuid) -> BookingError {
    BookingError::NotFound(format!("Week with ID {} not found", id))
}

#[axum::debug_handler]
pub async fn get_weeks_by_date(
    State(state): State<Arc<ApiState>>,
    Path(date): Path<String>,
) -> Result<Json<Vec<WeekSchedule>>, AppError> {
    let weeks = fetch_week(state.store.as_ref(), &date).await?;
    Ok(Json(weeks))
}
