//! Grouping of scheduled checks by calendar day.
//!
//! Two different day notions meet here. The cutoff ("nothing before today")
//! is the start of the caller's local day, while the bucket key is the UTC
//! calendar date of `next_check`. Near midnight in non-UTC zones this can put
//! a check in a neighbouring day's bucket; the behaviour is kept as the
//! dashboard has always shown it.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::Serialize;

use crate::models::HealthRecord;

/// Health records whose next check falls on the same UTC calendar day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayBucket {
    pub day: NaiveDate,
    pub count: usize,
    /// Contributing records in snapshot order
    pub records: Vec<HealthRecord>,
}

impl DayBucket {
    /// Canonical `YYYY-MM-DD` key.
    pub fn key(&self) -> String {
        self.day.format("%Y-%m-%d").to_string()
    }

    /// `dd/mm/yyyy` as shown on the dashboard card.
    pub fn display_date(&self) -> String {
        self.day.format("%d/%m/%Y").to_string()
    }

    /// UTC midnight of the bucket's day.
    pub fn starts_at(&self) -> DateTime<Utc> {
        self.day.and_time(NaiveTime::MIN).and_utc()
    }
}

/// Bucket every record with a `next_check` at or after `not_before`,
/// ascending by day.
pub fn bucket_upcoming(records: &[HealthRecord], not_before: DateTime<Utc>) -> Vec<DayBucket> {
    let mut buckets: BTreeMap<NaiveDate, DayBucket> = BTreeMap::new();

    for record in records {
        let Some(next_check) = record.next_check else {
            continue;
        };
        if next_check < not_before {
            continue;
        }

        let day = next_check.date_naive();
        let bucket = buckets.entry(day).or_insert_with(|| DayBucket {
            day,
            count: 0,
            records: Vec::new(),
        });
        bucket.count += 1;
        bucket.records.push(record.clone());
    }

    buckets.into_values().collect()
}
