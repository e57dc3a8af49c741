//! Seeding service: stats, clear, seed, and seed-all over a profile store.
//!
//! One invocation runs to completion sequentially. Concurrent invocations
//! against the same store may both observe the same shortfall and
//! over-insert under the randomized strategy; the deterministic strategy
//! converges because its writes are keyed upserts.

use std::sync::Arc;

use chrono::SecondsFormat;
use demo_identity::{TargetPolicy, random_identity, synthesize_identity};
use mockable::Clock;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{info, warn};

use super::error::SeedingError;
use super::options::{Mode, SeedOptions};
use super::outcome::SeedReport;
use super::planner::{ExistingCounts, PlanEntry, plan_partitions, planned_insert};
use super::records::{
    deterministic_profile_row, entity_keys, photo_metadata_rows, randomized_rows,
};
use super::schema_drift::{is_capability_gap, is_missing_column};
use super::strategy::{PROFILES_TABLE, SeedStrategy};
use super::writer::{BatchWriter, WriteTarget};
use crate::domain::ports::{Filter, ProfileStore, StoreRow};

/// Chunk sizes for profile and photo writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriteLimits {
    /// Profile rows per request.
    pub batch_size: usize,
    /// Photo rows per request.
    pub photo_batch_size: usize,
}

impl Default for WriteLimits {
    fn default() -> Self {
        Self {
            batch_size: 250,
            photo_batch_size: 500,
        }
    }
}

/// Rows produced for one seed run.
#[derive(Debug, Default)]
struct Records {
    profiles: Vec<StoreRow>,
    photos: Vec<StoreRow>,
}

/// Runs one seeding strategy against a store.
#[derive(Clone)]
pub struct SeedingService {
    store: Arc<dyn ProfileStore>,
    strategy: SeedStrategy,
    limits: WriteLimits,
    clock: Arc<dyn Clock>,
    rng_seed: Option<u64>,
}

impl SeedingService {
    /// Create a service for `strategy`.
    pub fn new(
        store: Arc<dyn ProfileStore>,
        strategy: SeedStrategy,
        limits: WriteLimits,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            store,
            strategy,
            limits,
            clock,
            rng_seed: None,
        }
    }

    /// Fix the seed of the randomness used for size-banded targets and
    /// randomized identities.
    pub fn with_rng_seed(mut self, seed: Option<u64>) -> Self {
        self.rng_seed = seed;
        self
    }

    /// Strategy this service runs.
    pub fn strategy(&self) -> SeedStrategy {
        self.strategy
    }

    /// Execute the mode selected in `options`.
    ///
    /// # Errors
    ///
    /// Returns a [`SeedingError`] when a required count, delete, or profile
    /// write fails. Auxiliary photo failures never fail the run.
    pub async fn execute(&self, options: &SeedOptions) -> Result<SeedReport, SeedingError> {
        info!(
            strategy = self.strategy.name(),
            mode = options.mode.as_str(),
            dry_run = options.dry_run,
            "seeding invocation started"
        );
        match options.mode {
            Mode::Stats => self.stats(options).await,
            Mode::Clear => self.clear(options).await,
            Mode::Seed => {
                self.seed(options, ExistingCounts::Query, SeedReport::new(Mode::Seed))
                    .await
            }
            Mode::SeedAll => self.seed_all(options).await,
        }
    }

    async fn stats(&self, options: &SeedOptions) -> Result<SeedReport, SeedingError> {
        let marker = self.strategy.marker();
        let discoverable = self
            .store
            .count_where(PROFILES_TABLE, &self.strategy.discoverable_filters())
            .await
            .map_err(SeedingError::Stats)?;
        let seeded = match self.store.count_where(PROFILES_TABLE, &[marker.filter()]).await {
            Ok(count) => Some(count),
            Err(error) if is_missing_column(error.message(), marker.column) => {
                info!(column = marker.column, "marker column missing; seeded count unknown");
                None
            }
            Err(error) => return Err(SeedingError::Stats(error)),
        };

        let mut report = SeedReport::new(Mode::Stats);
        report.discoverable_profiles = Some(discoverable);
        report.seeded_profiles = Some(seeded);
        report.countries = Some(self.strategy.partitions().len());
        report.per_city = Some(options.per_city);
        Ok(report)
    }

    async fn clear(&self, options: &SeedOptions) -> Result<SeedReport, SeedingError> {
        let mut report = SeedReport::new(Mode::Clear);
        if options.dry_run {
            report.dry_run = Some(true);
            report.planned_delete = Some(self.tagged_count().await?);
            return Ok(report);
        }
        let (deleted, deleted_photos) = self.delete_tagged().await?;
        report.deleted = Some(deleted);
        report.deleted_photos = Some(deleted_photos);
        Ok(report)
    }

    async fn seed_all(&self, options: &SeedOptions) -> Result<SeedReport, SeedingError> {
        let mut report = SeedReport::new(Mode::SeedAll);
        if options.dry_run {
            report.planned_delete = Some(self.tagged_count().await?);
            return self
                .seed(options, ExistingCounts::AssumeEmpty, report)
                .await;
        }
        let (deleted, deleted_photos) = self.delete_tagged().await?;
        report.deleted = Some(deleted);
        report.deleted_photos = Some(deleted_photos);
        self.seed(options, ExistingCounts::Query, report)
            .await
            .map_err(|source| SeedingError::AfterClear {
                deleted,
                deleted_photos,
                source: Box::new(source),
            })
    }

    async fn tagged_count(&self) -> Result<u64, SeedingError> {
        self.store
            .count_where(PROFILES_TABLE, &[self.strategy.marker().filter()])
            .await
            .map_err(SeedingError::Clear)
    }

    /// Delete tagged profiles, then tagged photo rows best-effort.
    async fn delete_tagged(&self) -> Result<(u64, Option<u64>), SeedingError> {
        let marker = self.strategy.marker();
        let deleted = self
            .store
            .delete_where(PROFILES_TABLE, &[marker.filter()])
            .await
            .map_err(SeedingError::Clear)?;

        let photo_table = self.strategy.photo_table();
        let deleted_photos = match self.store.delete_where(photo_table, &[marker.filter()]).await {
            Ok(count) => Some(count),
            Err(error) if is_capability_gap(&error, photo_table, marker.column) => {
                info!(table = photo_table, error = %error, "photo table cannot be cleared");
                None
            }
            Err(error) => {
                warn!(table = photo_table, error = %error, "photo clear failed");
                None
            }
        };
        info!(deleted, deleted_photos, "tagged rows cleared");
        Ok((deleted, deleted_photos))
    }

    async fn seed(
        &self,
        options: &SeedOptions,
        existing_counts: ExistingCounts,
        mut report: SeedReport,
    ) -> Result<SeedReport, SeedingError> {
        let mut rng = self.rng();
        let policy = options
            .per_city
            .map_or(TargetPolicy::SizeBanded, TargetPolicy::PerCity);
        let plan = plan_partitions(
            self.store.as_ref(),
            self.strategy.marker(),
            self.strategy.partitions(),
            policy,
            existing_counts,
            &mut rng,
        )
        .await?;

        if self.strategy == SeedStrategy::Deterministic {
            report.seed = Some(options.seed.clone());
            report.photos_per_profile = Some(options.photos_per_profile);
            report.overwrite_photos = Some(options.overwrite_photos);
        }

        if options.dry_run {
            report.dry_run = Some(true);
            report.planned_insert = Some(planned_insert(&plan));
            report.plan = Some(plan);
            return Ok(report);
        }

        let now = self.clock.utc().to_rfc3339_opts(SecondsFormat::Millis, true);
        let mut records = self.build_records(options, &plan, &mut rng, &now)?;
        if self.strategy == SeedStrategy::Deterministic && !options.overwrite_photos {
            self.preserve_stored_photos(&mut records.profiles).await;
        }

        let writer = BatchWriter::new(self.store.as_ref(), self.limits.batch_size);
        let written = writer
            .write(
                WriteTarget {
                    table: PROFILES_TABLE,
                    mode: self.strategy.write_mode(),
                    optional_columns: self.strategy.optional_profile_columns(),
                },
                &records.profiles,
            )
            .await?;

        if self.strategy == SeedStrategy::Deterministic {
            records.photos =
                photo_metadata_rows(&written.stored, &options.seed, self.strategy.marker(), &now);
        }
        let inserted_photos = if records.photos.is_empty() {
            Some(0)
        } else {
            BatchWriter::new(self.store.as_ref(), self.limits.photo_batch_size)
                .write_best_effort(
                    WriteTarget {
                        table: self.strategy.photo_table(),
                        mode: self.strategy.photo_write_mode(),
                        optional_columns: self.strategy.optional_photo_columns(),
                    },
                    self.strategy.marker().column,
                    &records.photos,
                )
                .await
        };

        info!(
            strategy = self.strategy.name(),
            inserted = written.written,
            inserted_photos,
            "seed written"
        );
        report.inserted = Some(written.written);
        report.inserted_photos = Some(inserted_photos);
        report.plan = Some(plan);
        Ok(report)
    }

    fn build_records(
        &self,
        options: &SeedOptions,
        plan: &[PlanEntry],
        rng: &mut ChaCha8Rng,
        now: &str,
    ) -> Result<Records, SeedingError> {
        let marker = self.strategy.marker();
        let mut records = Records::default();
        for (partition, entry) in self.strategy.partitions().iter().zip(plan) {
            if entry.to_insert == 0 {
                continue;
            }
            let to_insert = usize::try_from(entry.to_insert).unwrap_or(usize::MAX);
            match self.strategy {
                SeedStrategy::Randomized => {
                    for _ in 0..to_insert {
                        let generated = random_identity(rng, partition)?;
                        let (profile, photos) = randomized_rows(&generated, marker, rng, now);
                        records.profiles.push(profile);
                        records.photos.extend(photos);
                    }
                }
                SeedStrategy::Deterministic => {
                    let per_city = options.per_city.unwrap_or(entry.target);
                    let skip = usize::try_from(entry.existing).unwrap_or(usize::MAX);
                    for key in entity_keys(partition, per_city).skip(skip).take(to_insert) {
                        let generated = synthesize_identity(&options.seed, &key)?;
                        records.profiles.push(deterministic_profile_row(
                            &generated,
                            marker,
                            options.photos_per_profile,
                            now,
                        ));
                    }
                }
            }
        }
        Ok(records)
    }

    /// Drop `photos` from rows whose stored counterpart already has photos.
    async fn preserve_stored_photos(&self, rows: &mut [StoreRow]) {
        for row in rows.iter_mut() {
            let Some(id) = row.get("id").cloned() else {
                continue;
            };
            let filters = [Filter::eq("id", id), Filter::non_empty("photos")];
            match self.store.count_where(PROFILES_TABLE, &filters).await {
                Ok(count) if count > 0 => {
                    row.remove("photos");
                }
                Ok(_) => {}
                Err(error) => {
                    warn!(error = %error, "stored photo lookup failed; writing generated photos");
                }
            }
        }
    }

    fn rng(&self) -> ChaCha8Rng {
        match self.rng_seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_rng(&mut rand::rng()),
        }
    }
}
