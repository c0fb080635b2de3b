//! Livestock Dashboard Core Library
//!
//! Client-side view logic for a herd management dashboard backed by a remote
//! REST service.
//!
//! # Architecture
//!
//! ```text
//!     /animals payload          /health payload
//!            │                         │
//!            ▼                         ▼
//!     ┌─────────────────────────────────────────┐
//!     │  Ingest: coerce loose JSON once          │
//!     │  (codes, ids, dates) → typed snapshots   │
//!     └───────┬─────────────────────────┬───────┘
//!             │                         │
//!             ▼                         ▼
//!     Search → Type → Sex        Counts, avg liters,
//!     filters → Page slice       upcoming checks by day,
//!     (AnimalBrowser)            latest health activity
//!             │                         │
//!             └────────────┬────────────┘
//!                          ▼
//!                  Presentation layer
//! ```
//!
//! # Core Principle
//!
//! **Snapshots are immutable.** Views are recomputed from scratch whenever a
//! snapshot or a list control changes; nothing is patched incrementally and
//! no derived result is cached.
//!
//! # Modules
//!
//! - [`models`]: Domain types (AnimalRecord, HealthRecord) and boundary coercion
//! - [`ingest`]: Payload → snapshot conversion
//! - [`view`]: Search, filters, pagination and list state
//! - [`metrics`]: Dashboard aggregation
//! - [`validation`]: Pre-submit checks for create/update forms
//! - [`config`]: Page size and metrics windows

pub mod config;
pub mod ingest;
pub mod metrics;
pub mod models;
pub mod validation;
pub mod view;

// Re-export commonly used types
pub use config::DashboardConfig;
pub use ingest::{collection_from_value, parse_collection, IngestError};
pub use metrics::{compute_metrics, compute_metrics_with, DayBucket, Metrics};
pub use models::{AnimalRecord, AnimalType, Caravan, HealthRecord, HealthStatus, Production, Sex};
pub use validation::{validate_animal, validate_health_record, ValidationError};
pub use view::{paginate, AnimalBrowser, AnimalFilters, AnimalPage, ListState, SexFilter, TypeFilter};

// UniFFI setup - using proc macros
uniffi::setup_scaffolding!();

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Local};
use models::coerce::Coded;
use tracing::debug;

// =========================================================================
// FFI Error Type
// =========================================================================

#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum LivestockError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Validation failed: {0}")]
    ValidationFailed(String),

    #[error("State error: {0}")]
    StateError(String),
}

impl From<IngestError> for LivestockError {
    fn from(e: IngestError) -> Self {
        LivestockError::SerializationError(e.to_string())
    }
}

impl From<serde_json::Error> for LivestockError {
    fn from(e: serde_json::Error) -> Self {
        LivestockError::SerializationError(e.to_string())
    }
}

impl From<ValidationError> for LivestockError {
    fn from(e: ValidationError) -> Self {
        LivestockError::ValidationFailed(e.to_string())
    }
}

impl<T> From<std::sync::PoisonError<T>> for LivestockError {
    fn from(e: std::sync::PoisonError<T>) -> Self {
        LivestockError::StateError(format!("Lock poisoned: {}", e))
    }
}

// =========================================================================
// Factory Functions (exported to FFI)
// =========================================================================

/// Open a session with the default configuration.
#[uniffi::export]
pub fn open_session() -> Arc<DashboardSession> {
    Arc::new(DashboardSession::new(DashboardConfig::default()))
}

/// Open a session with an explicit page size.
#[uniffi::export]
pub fn open_session_with_page_size(page_size: u32) -> Arc<DashboardSession> {
    Arc::new(DashboardSession::new(DashboardConfig {
        page_size: page_size as usize,
        ..DashboardConfig::default()
    }))
}

/// Check an animal form payload before it is sent to the API.
#[uniffi::export]
pub fn validate_animal_json(json: String) -> Result<(), LivestockError> {
    let animal: AnimalRecord = serde_json::from_str(&json)?;
    validate_animal(&animal)?;
    Ok(())
}

/// Check a health record form payload before it is sent to the API.
#[uniffi::export]
pub fn validate_health_record_json(json: String) -> Result<(), LivestockError> {
    let record: HealthRecord = serde_json::from_str(&json)?;
    validate_health_record(&record)?;
    Ok(())
}

// =========================================================================
// Main API Object
// =========================================================================

/// The dashboard's snapshots and list selections, owned by one host view.
#[derive(uniffi::Object)]
pub struct DashboardSession {
    config: DashboardConfig,
    browser: Mutex<AnimalBrowser>,
    health: Mutex<Vec<HealthRecord>>,
}

impl DashboardSession {
    pub fn new(config: DashboardConfig) -> Self {
        Self {
            browser: Mutex::new(AnimalBrowser::with_config(&config)),
            health: Mutex::new(Vec::new()),
            config,
        }
    }

    fn metrics_for<Tz: chrono::TimeZone>(
        &self,
        now: &DateTime<Tz>,
    ) -> Result<FfiMetrics, LivestockError> {
        let browser = self.browser.lock()?;
        let health = self.health.lock()?;
        let metrics = compute_metrics_with(browser.animals(), &health, now, &self.config);
        Ok(metrics.into())
    }
}

#[uniffi::export]
impl DashboardSession {
    // =========================================================================
    // Snapshot Operations
    // =========================================================================

    /// Install a fetched `/animals` payload. Returns the number of records kept.
    pub fn load_animals(&self, json: String) -> Result<u32, LivestockError> {
        let animals: Vec<AnimalRecord> = parse_collection(&json)?;
        let count = animals.len() as u32;
        self.browser.lock()?.replace_snapshot(animals);
        Ok(count)
    }

    /// Install a fetched `/health` payload. Returns the number of records kept.
    pub fn load_health_records(&self, json: String) -> Result<u32, LivestockError> {
        let records: Vec<HealthRecord> = parse_collection(&json)?;
        let count = records.len() as u32;
        debug!(count, "health snapshot replaced");
        *self.health.lock()? = records;
        Ok(count)
    }

    /// Patch the animal snapshot after a successful update call.
    pub fn apply_animal_update(&self, json: String) -> Result<bool, LivestockError> {
        let animal: AnimalRecord = serde_json::from_str(&json)?;
        if !animal.is_stored() {
            return Err(LivestockError::InvalidInput("animal has no id".into()));
        }
        Ok(self.browser.lock()?.apply_update(animal))
    }

    /// Patch the animal snapshot after a successful delete call.
    pub fn apply_animal_removal(&self, id: String) -> Result<bool, LivestockError> {
        Ok(self.browser.lock()?.apply_removal(&id))
    }

    // =========================================================================
    // List Operations
    // =========================================================================

    pub fn set_search(&self, term: String) -> Result<(), LivestockError> {
        self.browser.lock()?.set_search(term);
        Ok(())
    }

    /// Set the type (`all`/`production`/`replacement`) and sex (`all`/`male`/`female`) filters.
    pub fn set_filters(&self, kind: String, sex: String) -> Result<(), LivestockError> {
        self.browser
            .lock()?
            .set_filters(AnimalFilters::parse(&kind, &sex));
        Ok(())
    }

    pub fn set_page(&self, page: u32) -> Result<(), LivestockError> {
        self.browser.lock()?.go_to_page(page as usize);
        Ok(())
    }

    /// Clear search and filters.
    pub fn reset_view(&self) -> Result<(), LivestockError> {
        self.browser.lock()?.reset();
        Ok(())
    }

    pub fn current_page(&self) -> Result<FfiAnimalPage, LivestockError> {
        let browser = self.browser.lock()?;
        let state = browser.state();
        let page = browser.current_page();
        Ok(FfiAnimalPage {
            items: page.items.iter().map(|a| FfiAnimal::from(*a)).collect(),
            page: page.page as u32,
            total_pages: page.total_pages as u32,
            total_count: page.total_count as u32,
            search: state.search().to_string(),
            type_filter: state.filters().kind.as_str().to_string(),
            sex_filter: state.filters().sex.as_str().to_string(),
        })
    }

    /// Search by name or caravan without the list filters.
    pub fn search_animals(&self, term: String) -> Result<Vec<FfiAnimal>, LivestockError> {
        let browser = self.browser.lock()?;
        Ok(browser.search(&term).into_iter().map(FfiAnimal::from).collect())
    }

    // =========================================================================
    // Health Operations
    // =========================================================================

    /// Health events of one animal, newest first.
    pub fn health_history(&self, animal_id: String) -> Result<Vec<FfiHealthRecord>, LivestockError> {
        let health = self.health.lock()?;
        Ok(metrics::health_history(&health, &animal_id)
            .into_iter()
            .map(FfiHealthRecord::from)
            .collect())
    }

    // =========================================================================
    // Metrics Operations
    // =========================================================================

    /// Metrics as of an RFC 3339 instant; its offset defines "today".
    pub fn metrics_at(&self, now: String) -> Result<FfiMetrics, LivestockError> {
        let now = DateTime::parse_from_rfc3339(&now)
            .map_err(|e| LivestockError::InvalidInput(format!("{}: {}", now, e)))?;
        self.metrics_for(&now)
    }

    /// Metrics as of the host's current local time.
    pub fn metrics_now(&self) -> Result<FfiMetrics, LivestockError> {
        self.metrics_for(&Local::now())
    }
}

// =========================================================================
// FFI Types
// =========================================================================

/// FFI-safe animal.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiAnimal {
    pub id: String,
    pub name: String,
    /// Numeric tag, `None` for text tags
    pub caravan: Option<i64>,
    /// Tag as displayed and searched
    pub caravan_text: String,
    pub sex: Option<u8>,
    pub tipe: Option<u8>,
    pub productive: Option<u8>,
    pub liters_produce: String,
    pub cant_children: u32,
    pub age: u32,
}

impl From<&AnimalRecord> for FfiAnimal {
    fn from(animal: &AnimalRecord) -> Self {
        Self {
            id: animal.id.clone(),
            name: animal.name.clone(),
            caravan: animal.caravan.as_ref().and_then(Caravan::number),
            caravan_text: animal.caravan_text(),
            sex: animal.sex.map(Coded::code),
            tipe: animal.tipe.map(Coded::code),
            productive: animal.productive.map(Coded::code),
            liters_produce: animal.liters_produce.clone(),
            cant_children: animal.cant_children,
            age: animal.age,
        }
    }
}

/// FFI-safe animal list page.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiAnimalPage {
    pub items: Vec<FfiAnimal>,
    pub page: u32,
    pub total_pages: u32,
    pub total_count: u32,
    pub search: String,
    pub type_filter: String,
    pub sex_filter: String,
}

/// FFI-safe health record.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiHealthRecord {
    pub id: String,
    pub animal_id: String,
    pub subject: String,
    pub headline: String,
    pub date: Option<String>,
    pub next_check: Option<String>,
    pub health_status: String,
    pub status_label: String,
    pub vaccine_name: Option<String>,
    pub disease: Option<String>,
    pub treatment: Option<String>,
    pub observations: Option<String>,
    pub veterinarian: Option<String>,
}

impl From<&HealthRecord> for FfiHealthRecord {
    fn from(record: &HealthRecord) -> Self {
        Self {
            id: record.id.clone(),
            animal_id: record.animal_id.clone(),
            subject: record.subject(),
            headline: record.headline(),
            date: record.date.map(|d| d.to_rfc3339()),
            next_check: record.next_check.map(|d| d.to_rfc3339()),
            health_status: record.health_status.as_str().to_string(),
            status_label: record.health_status.label().to_string(),
            vaccine_name: record.vaccine_name.clone(),
            disease: record.disease.clone(),
            treatment: record.treatment.clone(),
            observations: record.observations.clone(),
            veterinarian: record.veterinarian.clone(),
        }
    }
}

/// FFI-safe upcoming-check day.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiDayBucket {
    pub key: String,
    pub display_date: String,
    pub count: u32,
    pub animal_ids: Vec<String>,
}

impl From<DayBucket> for FfiDayBucket {
    fn from(bucket: DayBucket) -> Self {
        Self {
            key: bucket.key(),
            display_date: bucket.display_date(),
            count: bucket.count as u32,
            animal_ids: bucket.records.into_iter().map(|r| r.animal_id).collect(),
        }
    }
}

/// FFI-safe dashboard metrics.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiMetrics {
    pub total: u32,
    pub females: u32,
    pub males: u32,
    pub producing: u32,
    pub avg_liters: f64,
    pub avg_liters_display: String,
    pub upcoming_dates: Vec<FfiDayBucket>,
    pub next_7_days_count: u32,
    pub last_health: Option<FfiHealthRecord>,
    pub total_health: u32,
}

impl From<Metrics> for FfiMetrics {
    fn from(metrics: Metrics) -> Self {
        Self {
            avg_liters_display: metrics.avg_liters_display(),
            total: metrics.total as u32,
            females: metrics.females as u32,
            males: metrics.males as u32,
            producing: metrics.producing as u32,
            avg_liters: metrics.avg_liters,
            upcoming_dates: metrics.upcoming_dates.into_iter().map(Into::into).collect(),
            next_7_days_count: metrics.next_7_days_count as u32,
            last_health: metrics.last_health.as_ref().map(FfiHealthRecord::from),
            total_health: metrics.total_health as u32,
        }
    }
}
