//! Reconciliation planner.
//!
//! For each partition, compare the target population with the number of
//! marker-tagged rows already stored and produce the shortfall. Counts are
//! read immediately before planning; a failed count aborts the run with the
//! partition named rather than being read as zero.

use demo_identity::{Partition, TargetPolicy};
use rand::Rng;
use serde::Serialize;
use tracing::info;

use super::error::SeedingError;
use super::strategy::{PROFILES_TABLE, SeedMarker};
use crate::domain::ports::{Filter, ProfileStore};

/// Computed delta between target and existing population for one partition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanEntry {
    /// Partition name.
    pub country: String,
    /// Target population.
    pub target: u32,
    /// Tagged rows already stored.
    pub existing: u64,
    /// `max(0, target - existing)`.
    pub to_insert: u32,
}

impl PlanEntry {
    /// Build an entry, saturating the shortfall at zero.
    pub fn new(country: impl Into<String>, target: u32, existing: u64) -> Self {
        let shortfall = u64::from(target).saturating_sub(existing);
        Self {
            country: country.into(),
            target,
            existing,
            to_insert: u32::try_from(shortfall).unwrap_or(target),
        }
    }
}

/// Where existing counts come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExistingCounts {
    /// Query the store per partition.
    Query,
    /// Plan as if the store held no tagged rows.
    AssumeEmpty,
}

/// Plans every partition in order.
///
/// # Errors
///
/// Returns [`SeedingError::PartitionCount`] naming the first partition whose
/// count query fails.
pub async fn plan_partitions<R: Rng + Send + ?Sized>(
    store: &dyn ProfileStore,
    marker: SeedMarker,
    partitions: &[Partition],
    policy: TargetPolicy,
    existing_counts: ExistingCounts,
    rng: &mut R,
) -> Result<Vec<PlanEntry>, SeedingError> {
    let mut plan = Vec::with_capacity(partitions.len());
    for partition in partitions {
        let target = policy.target(partition, rng);
        let existing = match existing_counts {
            ExistingCounts::AssumeEmpty => 0,
            ExistingCounts::Query => {
                let filters = [marker.filter(), Filter::eq("country", partition.name)];
                store
                    .count_where(PROFILES_TABLE, &filters)
                    .await
                    .map_err(|source| SeedingError::PartitionCount {
                        country: partition.name.to_owned(),
                        source,
                    })?
            }
        };
        let entry = PlanEntry::new(partition.name, target, existing);
        info!(
            country = partition.name,
            target,
            existing,
            to_insert = entry.to_insert,
            "partition planned"
        );
        plan.push(entry);
    }
    Ok(plan)
}

/// Total rows a plan inserts.
pub fn planned_insert(plan: &[PlanEntry]) -> u64 {
    plan.iter().map(|entry| u64::from(entry.to_insert)).sum()
}
