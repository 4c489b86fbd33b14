use eyre::Result;
use sqlx::{Pool, Postgres};
use tracing::info;

pub async fn initialize_database(pool: &Pool<Postgres>) -> Result<()> {
    info!("Initializing database schema...");

    // Create bookings table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS bookings (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create weeks table. anchor_date is not unique; older rows may share one.
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS weeks (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            anchor_date TEXT NOT NULL,
            booking_id UUID NULL REFERENCES bookings(id) ON DELETE SET NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Widen anchor_date on databases created with VARCHAR(255)
    sqlx::query("ALTER TABLE weeks ALTER COLUMN anchor_date TYPE TEXT")
        .execute(pool)
        .await?;

    // Create days table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS days (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            week_id UUID NOT NULL UNIQUE REFERENCES weeks(id) ON DELETE CASCADE
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create weekday_slots table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS weekday_slots (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            days_id UUID NOT NULL REFERENCES days(id) ON DELETE CASCADE,
            weekday VARCHAR(16) NOT NULL,
            eight_ten BOOLEAN NOT NULL DEFAULT FALSE,
            ten_twelve BOOLEAN NOT NULL DEFAULT FALSE,
            twelve_two BOOLEAN NOT NULL DEFAULT FALSE,
            two_four BOOLEAN NOT NULL DEFAULT FALSE,
            four_six BOOLEAN NOT NULL DEFAULT FALSE,
            CONSTRAINT valid_weekday CHECK (
                weekday IN ('monday', 'tuesday', 'wednesday', 'thursday', 'friday')
            ),
            CONSTRAINT one_row_per_weekday UNIQUE (days_id, weekday)
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create indexes
    for statement in [
        "CREATE INDEX IF NOT EXISTS idx_weeks_anchor_date ON weeks(anchor_date)",
        "CREATE INDEX IF NOT EXISTS idx_weeks_booking_id ON weeks(booking_id)",
        "CREATE INDEX IF NOT EXISTS idx_weekday_slots_days_id ON weekday_slots(days_id)",
    ] {
        sqlx::query(statement).execute(pool).await?;
    }

    info!("Database schema initialized successfully.");
    Ok(())
}
