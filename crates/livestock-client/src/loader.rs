//! Dashboard loading.
//!
//! Fetches both collections concurrently, runs them through ingestion and
//! keeps the newest snapshot of each. Metrics are always computed from the
//! committed snapshots, never from a partially applied refresh.

use std::sync::Arc;

use chrono::{DateTime, TimeZone};
use livestock_core::metrics::sort_newest_first;
use livestock_core::{
    collection_from_value, compute_metrics_with, AnimalRecord, DashboardConfig, HealthRecord,
    Metrics,
};
use tracing::{debug, instrument};

use crate::resources;
use crate::snapshot::SnapshotSlot;
use crate::source::{CollectionSource, FetchResult};

/// Both collections as of the last successful refresh.
#[derive(Debug, Clone, Default)]
pub struct DashboardSnapshot {
    pub animals: Arc<Vec<AnimalRecord>>,
    pub health_records: Arc<Vec<HealthRecord>>,
}

impl DashboardSnapshot {
    pub fn metrics<Tz: TimeZone>(&self, now: &DateTime<Tz>, config: &DashboardConfig) -> Metrics {
        compute_metrics_with(&self.animals, &self.health_records, now, config)
    }
}

/// Loads dashboard data from a [`CollectionSource`].
pub struct DashboardLoader<S> {
    source: S,
    config: DashboardConfig,
    animals: SnapshotSlot<AnimalRecord>,
    health_records: SnapshotSlot<HealthRecord>,
}

impl<S: CollectionSource> DashboardLoader<S> {
    pub fn new(source: S) -> Self {
        Self::with_config(source, DashboardConfig::default())
    }

    pub fn with_config(source: S, config: DashboardConfig) -> Self {
        Self {
            source,
            config,
            animals: SnapshotSlot::new(),
            health_records: SnapshotSlot::new(),
        }
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Fetch `/animals` and `/health` together.
    ///
    /// If either fetch fails nothing is committed and the previous
    /// snapshots stay in place.
    #[instrument(skip(self))]
    pub async fn refresh(&self) -> FetchResult<DashboardSnapshot> {
        let animals_ticket = self.animals.begin();
        let health_ticket = self.health_records.begin();

        let (animals_payload, health_payload) = tokio::try_join!(
            self.source.fetch_collection(resources::ANIMALS),
            self.source.fetch_collection(resources::HEALTH),
        )?;

        let animals: Vec<AnimalRecord> = collection_from_value(animals_payload);
        let health_records: Vec<HealthRecord> = collection_from_value(health_payload);
        debug!(
            animals = animals.len(),
            health_records = health_records.len(),
            "refreshed dashboard collections"
        );

        self.animals.commit(animals_ticket, animals);
        self.health_records.commit(health_ticket, health_records);
        Ok(self.snapshot())
    }

    /// Refetch only `/animals` (after a create, update or delete).
    #[instrument(skip(self))]
    pub async fn refresh_animals(&self) -> FetchResult<Arc<Vec<AnimalRecord>>> {
        let ticket = self.animals.begin();
        let payload = self.source.fetch_collection(resources::ANIMALS).await?;
        self.animals.commit(ticket, collection_from_value(payload));
        Ok(self.animals.current())
    }

    /// Refresh, then compute metrics for `now`.
    pub async fn load_metrics<Tz: TimeZone>(
        &self,
        now: &DateTime<Tz>,
    ) -> FetchResult<Metrics> {
        let snapshot = self.refresh().await?;
        Ok(snapshot.metrics(now, &self.config))
    }

    /// One animal's health history, newest first.
    #[instrument(skip(self))]
    pub async fn health_for_animal(&self, animal_id: &str) -> FetchResult<Vec<HealthRecord>> {
        let payload = self
            .source
            .fetch_collection(&resources::health_for_animal(animal_id))
            .await?;
        // Already scoped by the endpoint; records without an `animal_id` still belong here.
        let mut records: Vec<HealthRecord> = collection_from_value(payload);
        sort_newest_first(&mut records);
        Ok(records)
    }

    /// The committed snapshots.
    pub fn snapshot(&self) -> DashboardSnapshot {
        DashboardSnapshot {
            animals: self.animals.current(),
            health_records: self.health_records.current(),
        }
    }

    /// Metrics over the committed snapshots, without fetching.
    pub fn metrics<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> Metrics {
        self.snapshot().metrics(now, &self.config)
    }
}
