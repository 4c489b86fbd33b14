use crate::models::{DbDays, DbWeek, DbWeekdaySlots};
use eyre::{eyre, Result};
use sqlx::{PgConnection, Pool, Postgres};
use tidyslot_core::models::{DaySlots, Days, Slot, WeekSchedule, Weekday};
use uuid::Uuid;

/// Inserts the days grouping for a week and one open row per weekday.
pub async fn insert_open_days(conn: &mut PgConnection, week_id: Uuid) -> Result<DbDays> {
    let days = sqlx::query_as::<_, DbDays>(
        r#"
        INSERT INTO days (id, week_id)
        VALUES ($1, $2)
        RETURNING id, week_id
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(week_id)
    .fetch_one(&mut *conn)
    .await?;

    for weekday in Weekday::ALL {
        sqlx::query(
            r#"
            INSERT INTO weekday_slots (id, days_id, weekday)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(days.id)
        .bind(weekday.as_str())
        .execute(&mut *conn)
        .await?;
    }

    Ok(days)
}

pub async fn get_days_by_week_id(pool: &Pool<Postgres>, week_id: Uuid) -> Result<Option<DbDays>> {
    let days = sqlx::query_as::<_, DbDays>(
        r#"
        SELECT id, week_id
        FROM days
        WHERE week_id = $1
        "#,
    )
    .bind(week_id)
    .fetch_optional(pool)
    .await?;

    Ok(days)
}

pub async fn get_weekday_slots_by_days_id(
    pool: &Pool<Postgres>,
    days_id: Uuid,
) -> Result<Vec<DbWeekdaySlots>> {
    let rows = sqlx::query_as::<_, DbWeekdaySlots>(
        r#"
        SELECT id, days_id, weekday, eight_ten, ten_twelve, twelve_two, two_four, four_six
        FROM weekday_slots
        WHERE days_id = $1
        "#,
    )
    .bind(days_id)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// Marks one slot of one weekday booked or open. Returns false when the week
/// has no row for that weekday.
pub async fn set_slot(
    pool: &Pool<Postgres>,
    week_id: Uuid,
    weekday: Weekday,
    slot: Slot,
    booked: bool,
) -> Result<bool> {
    // The column name comes from a closed enum, never from input.
    let statement = format!(
        r#"
        UPDATE weekday_slots
        SET {} = $1
        FROM days
        WHERE weekday_slots.days_id = days.id
          AND days.week_id = $2
          AND weekday_slots.weekday = $3
        "#,
        slot.column()
    );

    let result = sqlx::query(&statement)
        .bind(booked)
        .bind(week_id)
        .bind(weekday.as_str())
        .execute(pool)
        .await?;

    tracing::debug!(
        "Set slot: week_id={}, weekday={}, slot={}, booked={}, rows={}",
        week_id,
        weekday,
        slot,
        booked,
        result.rows_affected()
    );
    Ok(result.rows_affected() > 0)
}

/// Loads the days and weekday rows of a week into a schedule.
pub async fn load_schedule(pool: &Pool<Postgres>, week: DbWeek) -> Result<WeekSchedule> {
    let days = get_days_by_week_id(pool, week.id)
        .await?
        .ok_or_else(|| eyre!("Week {} has no days", week.id))?;

    let rows = get_weekday_slots_by_days_id(pool, days.id)
        .await?
        .into_iter()
        .map(DaySlots::try_from)
        .collect::<Result<Vec<_>>>()?;

    let days = Days::from_rows(days.id, days.week_id, rows)?;

    Ok(WeekSchedule {
        week: week.into(),
        days,
    })
}
