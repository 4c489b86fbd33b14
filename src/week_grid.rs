use chrono::Local;
use color_eyre::eyre::Result;
use dotenv::dotenv;
use tidyslot_api::client::WeekClient;
use tidyslot_core::grid::AvailabilityGrid;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// Prints the availability grid for a week: `week-grid [DATE]`.
#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::WARN)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Load environment variables
    dotenv().ok();

    let base_url = std::env::var("TIDYSLOT_API_URL")
        .unwrap_or_else(|_| "http://localhost:3000".to_string());
    let date = std::env::args()
        .nth(1)
        .unwrap_or_else(|| Local::now().date_naive().format("%Y-%m-%d").to_string());

    let client = WeekClient::new(&base_url);
    info!("Requesting week {} from {}", date, client.endpoint());
    let schedule = client.fetch_week(&date).await?;

    let grid = AvailabilityGrid::from_week(&schedule);
    print!("{}", grid.render());
    println!("{} open, {} booked", grid.open_count(), grid.booked_count());

    Ok(())
}
