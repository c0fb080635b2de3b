//! livestock-summary - print the dashboard headline numbers.
//!
//! Reads the API base URL from `LIVESTOCK_API_BASE_URL` and logs through
//! `RUST_LOG`.

use anyhow::{Context, Result};
use chrono::Local;
use livestock_client::{DashboardLoader, HttpSource};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    let source = HttpSource::from_env().context("failed to build HTTP client")?;
    let base_url = source.config().base_url.clone();
    let loader = DashboardLoader::new(source);

    let metrics = loader
        .load_metrics(&Local::now())
        .await
        .with_context(|| format!("failed to load dashboard from {}", base_url))?;

    println!("Animals:        {}", metrics.total);
    println!("  females:      {}", metrics.females);
    println!("  males:        {}", metrics.males);
    println!("  producing:    {}", metrics.producing);
    println!("Avg liters:     {}", metrics.avg_liters_display());
    println!("Health records: {}", metrics.total_health);
    println!("Next 7 days:    {}", metrics.next_7_days_count);

    if !metrics.upcoming_dates.is_empty() {
        println!("Upcoming checks:");
        for bucket in &metrics.upcoming_dates {
            println!("  {}  {}", bucket.display_date(), bucket.count);
        }
    }

    if let Some(last) = &metrics.last_health {
        println!("Last record:    {} ({})", last.headline(), last.subject());
    }

    Ok(())
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false))
        .init();
}
