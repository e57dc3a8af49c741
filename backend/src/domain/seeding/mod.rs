//! Demo-profile seeding.
//!
//! Purpose: reconcile the population of generator-owned profiles in the
//! store with a per-partition target, and remove that population again on
//! request. Rows are tagged with a strategy-specific seed marker; counting
//! and deletion are always scoped to it.
//!
//! Public surface:
//! - `SeedingService` runs one mode for one strategy.
//! - `SeedOptions` / `RawSeedOptions` normalise request bodies.
//! - `SeedReport` is the success payload; `SeedingError` the failure.

mod error;
mod options;
mod outcome;
mod planner;
mod records;
mod schema_drift;
mod service;
mod strategy;
mod writer;

pub use error::SeedingError;
pub use options::{Mode, RawSeedOptions, SeedOptions};
pub use outcome::SeedReport;
pub use planner::{ExistingCounts, PlanEntry, plan_partitions, planned_insert};
pub use records::{
    PHOTO_SOURCE, deterministic_profile_row, entity_keys, photo_metadata_rows, randomized_rows,
};
pub use schema_drift::{is_missing_column, is_missing_table};
pub use service::{SeedingService, WriteLimits};
pub use strategy::{PROFILES_TABLE, PerCityBounds, SeedMarker, SeedStrategy, WriteMode};
pub use writer::{BatchFailure, BatchWriter, WriteReport, WriteTarget};
