//! Dashboard tuning knobs.

use serde::{Deserialize, Serialize};

/// Sizes and windows used by the list view and the metrics cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Animals per list page
    pub page_size: usize,
    /// Number of upcoming-check days shown on the dashboard
    pub upcoming_limit: usize,
    /// Width of the "checks due soon" window, in days from the start of today
    pub upcoming_window_days: i64,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            page_size: 8,
            upcoming_limit: 5,
            upcoming_window_days: 7,
        }
    }
}
