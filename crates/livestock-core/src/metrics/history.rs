//! Per-animal health history and the most recent health activity.

use std::cmp::Ordering;

use crate::models::HealthRecord;

/// Health events of one animal from the full snapshot, newest first.
pub fn health_history<'a>(records: &'a [HealthRecord], animal_id: &str) -> Vec<&'a HealthRecord> {
    let mut history: Vec<&HealthRecord> = records
        .iter()
        .filter(|r| r.animal_id == animal_id)
        .collect();
    history.sort_by(|a, b| newest_first(a, b));
    history
}

/// Sort records that are already scoped to one animal, newest first.
pub fn sort_newest_first(records: &mut [HealthRecord]) {
    records.sort_by(newest_first);
}

/// Descending by `date`; undated records go last and keep their order.
pub fn newest_first(a: &HealthRecord, b: &HealthRecord) -> Ordering {
    match (a.date, b.date) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// The record with the latest `date`. On ties the earliest in the snapshot wins.
pub fn latest_record(records: &[HealthRecord]) -> Option<&HealthRecord> {
    records
        .iter()
        .filter(|r| r.date.is_some())
        .fold(None, |best: Option<&HealthRecord>, record| match best {
            Some(best) if best.date >= record.date => Some(best),
            _ => Some(record),
        })
}
