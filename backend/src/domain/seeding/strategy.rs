//! The two seeding strategies and everything that differs between them.
//!
//! Both strategies share the planner, writer, and clear path. They differ in
//! catalogue, seed marker, target policy, write mode, and the auxiliary photo
//! table they maintain.

use demo_identity::{DETERMINISTIC_PARTITIONS, LEGACY_PARTITIONS, Partition};
use serde_json::Value;

use crate::domain::ports::Filter;

/// Table holding profile rows.
pub const PROFILES_TABLE: &str = "profiles";

/// Column/value pair tagging generator-owned rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedMarker {
    /// Column holding the tag.
    pub column: &'static str,
    /// Tag value.
    pub value: &'static str,
}

impl SeedMarker {
    /// Equality filter selecting tagged rows.
    pub fn filter(self) -> Filter {
        Filter::eq(self.column, self.value)
    }
}

/// How primary rows are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    /// Plain inserts.
    Insert,
    /// Upserts resolving conflicts on the given columns.
    Upsert {
        /// Comma-separated conflict columns.
        on_conflict: &'static str,
    },
}

/// Inclusive clamp for `perCity` plus the value used when it is absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PerCityBounds {
    /// Smallest accepted value.
    pub min: u32,
    /// Largest accepted value.
    pub max: u32,
    /// Value used when the request omits `perCity`; `None` selects the
    /// size-banded target.
    pub default: Option<u32>,
}

/// A named seeding strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedStrategy {
    /// Random identities with size-banded targets, tagged `label = DEMO_SEED`.
    Randomized,
    /// Identities derived from `(seed, entity key)`, tagged
    /// `seed_source = seed_demo_profiles_v2`.
    Deterministic,
}

impl SeedStrategy {
    /// Short name used in logs.
    pub fn name(self) -> &'static str {
        match self {
            Self::Randomized => "randomized",
            Self::Deterministic => "deterministic",
        }
    }

    /// Marker tagging rows this strategy owns.
    pub fn marker(self) -> SeedMarker {
        match self {
            Self::Randomized => SeedMarker {
                column: "label",
                value: "DEMO_SEED",
            },
            Self::Deterministic => SeedMarker {
                column: "seed_source",
                value: "seed_demo_profiles_v2",
            },
        }
    }

    /// Partitions in planning order.
    pub fn partitions(self) -> &'static [Partition] {
        match self {
            Self::Randomized => LEGACY_PARTITIONS,
            Self::Deterministic => DETERMINISTIC_PARTITIONS,
        }
    }

    /// `perCity` clamp and default.
    pub fn per_city_bounds(self) -> PerCityBounds {
        match self {
            Self::Randomized => PerCityBounds {
                min: 1,
                max: 200,
                default: None,
            },
            Self::Deterministic => PerCityBounds {
                min: 1,
                max: 50,
                default: Some(16),
            },
        }
    }

    /// Write mode for profile rows.
    pub fn write_mode(self) -> WriteMode {
        match self {
            Self::Randomized => WriteMode::Insert,
            Self::Deterministic => WriteMode::Upsert { on_conflict: "id" },
        }
    }

    /// Profile columns the store may lack; a write that fails on one of these
    /// is retried without it.
    pub fn optional_profile_columns(self) -> &'static [&'static str] {
        match self {
            Self::Randomized => &["tagline"],
            Self::Deterministic => &["seed", "person_id"],
        }
    }

    /// Auxiliary photo table.
    pub fn photo_table(self) -> &'static str {
        match self {
            Self::Randomized => "photos",
            Self::Deterministic => "profile_photos",
        }
    }

    /// Photo-table columns the store may lack.
    pub fn optional_photo_columns(self) -> &'static [&'static str] {
        match self {
            Self::Randomized => &["label"],
            Self::Deterministic => &["seed_source"],
        }
    }

    /// Photo-table write mode.
    pub fn photo_write_mode(self) -> WriteMode {
        match self {
            Self::Randomized => WriteMode::Insert,
            Self::Deterministic => WriteMode::Upsert {
                on_conflict: "profile_id,idx",
            },
        }
    }

    /// Filters selecting profiles visible to the consuming app.
    pub fn discoverable_filters(self) -> Vec<Filter> {
        let discoverable = Filter::eq("is_discoverable", Value::Bool(true));
        match self {
            Self::Randomized => vec![discoverable],
            Self::Deterministic => vec![Filter::eq("is_active", Value::Bool(true)), discoverable],
        }
    }
}

#[cfg(test)]
mod tests {
    //! Strategy tables.

    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(SeedStrategy::Randomized, "label", "DEMO_SEED", 35)]
    #[case(SeedStrategy::Deterministic, "seed_source", "seed_demo_profiles_v2", 4)]
    fn strategies_have_distinct_markers_and_catalogues(
        #[case] strategy: SeedStrategy,
        #[case] column: &str,
        #[case] value: &str,
        #[case] partitions: usize,
    ) {
        let marker = strategy.marker();
        assert_eq!(marker.column, column);
        assert_eq!(marker.value, value);
        assert_eq!(strategy.partitions().len(), partitions);
    }

    #[rstest]
    fn only_deterministic_upserts() {
        assert_eq!(SeedStrategy::Randomized.write_mode(), WriteMode::Insert);
        assert_eq!(
            SeedStrategy::Deterministic.write_mode(),
            WriteMode::Upsert { on_conflict: "id" }
        );
    }

    #[rstest]
    fn deterministic_stats_require_active_and_discoverable() {
        let filters = SeedStrategy::Deterministic.discoverable_filters();
        let columns: Vec<_> = filters.iter().map(Filter::column).collect();
        assert_eq!(columns, vec!["is_active", "is_discoverable"]);
    }
}
