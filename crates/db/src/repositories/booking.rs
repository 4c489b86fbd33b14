use crate::models::DbBooking;
use chrono::Utc;
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn create_booking(pool: &Pool<Postgres>) -> Result<DbBooking> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    let booking = sqlx::query_as::<_, DbBooking>(
        r#"
        INSERT INTO bookings (id, created_at)
        VALUES ($1, $2)
        RETURNING id, created_at
        "#,
    )
    .bind(id)
    .bind(now)
    .fetch_one(pool)
    .await?;

    tracing::debug!("Booking created: id={}", id);
    Ok(booking)
}

pub async fn get_booking_by_id(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<DbBooking>> {
    let booking = sqlx::query_as::<_, DbBooking>(
        r#"
        SELECT id, created_at
        FROM bookings
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(booking)
}

pub async fn list_bookings(pool: &Pool<Postgres>) -> Result<Vec<DbBooking>> {
    let bookings = sqlx::query_as::<_, DbBooking>(
        r#"
        SELECT id, created_at
        FROM bookings
        ORDER BY created_at ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(bookings)
}

/// Deletes a booking. Its weeks are kept and detached by the
/// `ON DELETE SET NULL` foreign key.
pub async fn delete_booking(pool: &Pool<Postgres>, id: Uuid) -> Result<bool> {
    let result = sqlx::query(
        r#"
        DELETE FROM bookings
        WHERE id = $1
        "#,
    )
    .bind(id)
    .execute(pool)
    .await?;

    tracing::debug!("Deleted booking {}: rows={}", id, result.rows_affected());
    Ok(result.rows_affected() > 0)
}
