use tidyslot_core::{
    errors::{BookingError, BookingResult},
    models::Booking,
};
use tidyslot_db::BookingStore;
use tracing::info;
use uuid::Uuid;

pub async fn create_booking(store: &dyn BookingStore) -> BookingResult<Booking> {
    let booking = store
        .create_booking()
        .await
        .map_err(BookingError::Database)?;

    info!("Created booking {}", booking.id);
    Ok(booking)
}

pub async fn find_booking(store: &dyn BookingStore, id: Uuid) -> BookingResult<Option<Booking>> {
    store.get_booking(id).await.map_err(BookingError::Database)
}

pub async fn list_bookings(store: &dyn BookingStore) -> BookingResult<Vec<Booking>> {
    store.list_bookings().await.map_err(BookingError::Database)
}

/// Deletes a booking; its weeks survive, detached. Returns false when the
/// booking did not exist.
pub async fn delete_booking(store: &dyn BookingStore, id: Uuid) -> BookingResult<bool> {
    let deleted = store
        .delete_booking(id)
        .await
        .map_err(BookingError::Database)?;

    if deleted {
        info!("Deleted booking {}", id);
    }
    Ok(deleted)
}
