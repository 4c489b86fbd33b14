use crate::models::DbWeek;
use crate::repositories::days::insert_open_days;
use chrono::Utc;
use eyre::Result;
use sqlx::{PgConnection, PgExecutor, Pool, Postgres};
use uuid::Uuid;

/// Inserts a week together with its days and five open weekday rows.
pub async fn insert_week(conn: &mut PgConnection, anchor_date: &str) -> Result<DbWeek> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    let week = sqlx::query_as::<_, DbWeek>(
        r#"
        INSERT INTO weeks (id, anchor_date, booking_id, created_at)
        VALUES ($1, $2, NULL, $3)
        RETURNING id, anchor_date, booking_id, created_at
        "#,
    )
    .bind(id)
    .bind(anchor_date)
    .bind(now)
    .fetch_one(&mut *conn)
    .await?;

    insert_open_days(&mut *conn, week.id).await?;

    tracing::debug!("Week created: id={}, anchor_date={}", id, anchor_date);
    Ok(week)
}

pub async fn find_weeks_by_anchor_date<'e, E>(executor: E, anchor_date: &str) -> Result<Vec<DbWeek>>
where
    E: PgExecutor<'e>,
{
    let weeks = sqlx::query_as::<_, DbWeek>(
        r#"
        SELECT id, anchor_date, booking_id, created_at
        FROM weeks
        WHERE anchor_date = $1
        ORDER BY created_at ASC
        "#,
    )
    .bind(anchor_date)
    .fetch_all(executor)
    .await?;

    Ok(weeks)
}

/// Returns every week stored under `anchor_date`, creating one first if there
/// is none. A transaction-scoped advisory lock on the date serializes
/// concurrent callers, so a missing date is only ever created once.
pub async fn fetch_or_create_week(
    pool: &Pool<Postgres>,
    anchor_date: &str,
) -> Result<(Vec<DbWeek>, bool)> {
    let mut tx = pool.begin().await?;

    sqlx::query("SELECT pg_advisory_xact_lock(hashtext($1))")
        .bind(anchor_date)
        .execute(&mut *tx)
        .await?;

    let existing = find_weeks_by_anchor_date(&mut *tx, anchor_date).await?;
    if !existing.is_empty() {
        tx.commit().await?;
        tracing::debug!(
            "Found {} week(s) for anchor_date={}",
            existing.len(),
            anchor_date
        );
        return Ok((existing, false));
    }

    let week = insert_week(&mut tx, anchor_date).await?;
    tx.commit().await?;

    Ok((vec![week], true))
}

pub async fn get_week_by_id(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<DbWeek>> {
    let week = sqlx::query_as::<_, DbWeek>(
        r#"
        SELECT id, anchor_date, booking_id, created_at
        FROM weeks
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(week)
}

pub async fn list_weeks(pool: &Pool<Postgres>, booking_id: Option<Uuid>) -> Result<Vec<DbWeek>> {
    let weeks = match booking_id {
        Some(booking_id) => {
            sqlx::query_as::<_, DbWeek>(
                r#"
                SELECT id, anchor_date, booking_id, created_at
                FROM weeks
                WHERE booking_id = $1
                ORDER BY created_at ASC
                "#,
            )
            .bind(booking_id)
            .fetch_all(pool)
            .await?
        }
        None => {
            sqlx::query_as::<_, DbWeek>(
                r#"
                SELECT id, anchor_date, booking_id, created_at
                FROM weeks
                ORDER BY created_at ASC
                "#,
            )
            .fetch_all(pool)
            .await?
        }
    };

    Ok(weeks)
}

pub async fn set_week_booking(
    pool: &Pool<Postgres>,
    week_id: Uuid,
    booking_id: Option<Uuid>,
) -> Result<Option<DbWeek>> {
    let week = sqlx::query_as::<_, DbWeek>(
        r#"
        UPDATE weeks
        SET booking_id = $2
        WHERE id = $1
        RETURNING id, anchor_date, booking_id, created_at
        "#,
    )
    .bind(week_id)
    .bind(booking_id)
    .fetch_optional(pool)
    .await?;

    Ok(week)
}
