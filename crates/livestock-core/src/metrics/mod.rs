//! Dashboard metrics.
//!
//! A pure aggregation over the animal and health snapshots: head counts,
//! average production, upcoming checks grouped by day, and the latest health
//! activity. Calling it twice with the same inputs gives the same output.

mod history;
mod liters;
mod upcoming;

pub use history::*;
pub use liters::*;
pub use upcoming::*;

use chrono::{DateTime, Duration, NaiveTime, Offset, TimeZone, Utc};
use serde::Serialize;

use crate::config::DashboardConfig;
use crate::models::{AnimalRecord, HealthRecord, Sex};

/// Everything the dashboard cards display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Metrics {
    pub total: usize,
    pub females: usize,
    pub males: usize,
    pub producing: usize,
    /// Unrounded mean of the parsable `liters_produce` values
    pub avg_liters: f64,
    /// First upcoming-check days, ascending
    pub upcoming_dates: Vec<DayBucket>,
    /// Checks due between the start of today and the end of the window
    pub next_7_days_count: usize,
    pub last_health: Option<HealthRecord>,
    pub total_health: usize,
}

impl Metrics {
    /// Average liters rounded to one decimal (`"3.9"`).
    pub fn avg_liters_display(&self) -> String {
        format_one_decimal(self.avg_liters)
    }
}

/// Compute metrics with the default configuration.
pub fn compute_metrics<Tz: TimeZone>(
    animals: &[AnimalRecord],
    health_records: &[HealthRecord],
    now: &DateTime<Tz>,
) -> Metrics {
    compute_metrics_with(animals, health_records, now, &DashboardConfig::default())
}

/// Compute metrics. `now`'s own time zone defines "today".
pub fn compute_metrics_with<Tz: TimeZone>(
    animals: &[AnimalRecord],
    health_records: &[HealthRecord],
    now: &DateTime<Tz>,
    config: &DashboardConfig,
) -> Metrics {
    let count_sex = |sex: Sex| animals.iter().filter(|a| a.sex == Some(sex)).count();

    let start_of_today = start_of_local_day(now);
    // A window too wide to represent has no upper bound.
    let window_end = Duration::try_days(config.upcoming_window_days)
        .and_then(|window| start_of_today.checked_add_signed(window));

    let buckets = bucket_upcoming(health_records, start_of_today);
    let next_7_days_count = buckets
        .iter()
        .filter(|b| window_end.map_or(true, |end| b.starts_at() <= end))
        .map(|b| b.count)
        .sum();

    Metrics {
        total: animals.len(),
        females: count_sex(Sex::Female),
        males: count_sex(Sex::Male),
        producing: animals.iter().filter(|a| a.is_producing()).count(),
        avg_liters: average_liters(animals.iter().map(|a| a.liters_produce.as_str())),
        upcoming_dates: buckets.into_iter().take(config.upcoming_limit).collect(),
        next_7_days_count,
        last_health: latest_record(health_records).cloned(),
        total_health: health_records.len(),
    }
}

/// Midnight at the start of `now`'s calendar day, in `now`'s zone, as UTC.
pub fn start_of_local_day<Tz: TimeZone>(now: &DateTime<Tz>) -> DateTime<Utc> {
    let midnight = now.date_naive().and_time(NaiveTime::MIN);
    match now.timezone().from_local_datetime(&midnight).earliest() {
        Some(start) => start.with_timezone(&Utc),
        // Midnight skipped by a DST jump: fall back to today's offset.
        None => {
            let offset = now.offset().fix().local_minus_utc();
            (midnight - Duration::seconds(i64::from(offset))).and_utc()
        }
    }
}
