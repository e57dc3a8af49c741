//! Partition catalogues.
//!
//! A partition is a country with a size band and the local pools its
//! profiles draw from. Two catalogues exist: a small fixed one for the
//! deterministic generator and a broad one for the randomized generator.

mod deterministic;
mod legacy;

use std::ops::RangeInclusive;

pub use deterministic::DETERMINISTIC_PARTITIONS;
pub(crate) use deterministic::{
    BIO_TEMPLATES, FEMALE_NAMES, INTERESTS, LOOKING_FOR, MALE_NAMES, PROFESSIONS,
};
pub use legacy::LEGACY_PARTITIONS;
pub(crate) use legacy::{
    LEGACY_GENDERS, LEGACY_INTERESTS, LEGACY_LOOKING_FOR, LEGACY_PROFESSIONS, TAGLINES, VIBES,
};

const FALLBACK_CITIES: &[&str] = &["Capital", "Downtown", "Uptown"];
const FALLBACK_NAMES: &[&str] = &["Alex", "Jordan", "Sam", "Taylor", "Casey", "Riley"];

/// Population band of a partition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartitionSize {
    /// 50 to 60 profiles.
    Large,
    /// 45 to 50 profiles.
    Medium,
    /// 40 to 45 profiles.
    Small,
}

impl PartitionSize {
    /// Returns the inclusive target-population band.
    #[must_use]
    pub const fn band(self) -> RangeInclusive<u32> {
        match self {
            Self::Large => 50..=60,
            Self::Medium => 45..=50,
            Self::Small => 40..=45,
        }
    }
}

/// Localized pools a partition's profiles draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalPools {
    /// Sub-locations profiles are distributed across.
    pub cities: &'static [&'static str],
    /// Optional community labels; may be empty.
    pub tribes: &'static [&'static str],
    /// First names.
    pub names: &'static [&'static str],
}

impl LocalPools {
    /// Pools with no local data; every accessor falls back.
    pub const EMPTY: Self = Self {
        cities: &[],
        tribes: &[],
        names: &[],
    };
}

/// A grouping key with its size band and local pools.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Partition {
    /// Country name; also the partition key stored on rows.
    pub name: &'static str,
    /// Population band used by size-banded targets.
    pub size: PartitionSize,
    /// Local pools.
    pub pools: LocalPools,
}

impl Partition {
    /// Returns the partition's cities, or generic ones when none are declared.
    #[must_use]
    pub const fn cities(&self) -> &'static [&'static str] {
        if self.pools.cities.is_empty() {
            FALLBACK_CITIES
        } else {
            self.pools.cities
        }
    }

    /// Returns the partition's names, or generic ones when none are declared.
    #[must_use]
    pub const fn names(&self) -> &'static [&'static str] {
        if self.pools.names.is_empty() {
            FALLBACK_NAMES
        } else {
            self.pools.names
        }
    }

    /// Returns the partition's tribes; empty means "no tribe".
    #[must_use]
    pub const fn tribes(&self) -> &'static [&'static str] {
        self.pools.tribes
    }

    /// Number of sub-locations used for per-city targets.
    #[must_use]
    pub const fn city_count(&self) -> usize {
        self.cities().len()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(PartitionSize::Large, 50, 60)]
    #[case(PartitionSize::Medium, 45, 50)]
    #[case(PartitionSize::Small, 40, 45)]
    fn size_bands_match_policy(#[case] size: PartitionSize, #[case] lo: u32, #[case] hi: u32) {
        assert_eq!(size.band(), lo..=hi);
    }

    #[test]
    fn undeclared_pools_fall_back() {
        let partition = Partition {
            name: "Atlantis",
            size: PartitionSize::Small,
            pools: LocalPools::EMPTY,
        };
        assert_eq!(partition.cities(), FALLBACK_CITIES);
        assert_eq!(partition.names(), FALLBACK_NAMES);
        assert!(partition.tribes().is_empty());
        assert_eq!(partition.city_count(), 3);
    }

    #[test]
    fn catalogues_have_unique_names_and_cities() {
        for catalogue in [DETERMINISTIC_PARTITIONS, LEGACY_PARTITIONS] {
            let names: HashSet<_> = catalogue.iter().map(|p| p.name).collect();
            assert_eq!(names.len(), catalogue.len());
            assert!(catalogue.iter().all(|p| p.city_count() > 0));
        }
    }

    #[test]
    fn legacy_catalogue_covers_all_bands() {
        let count = |size| LEGACY_PARTITIONS.iter().filter(|p| p.size == size).count();
        assert_eq!(LEGACY_PARTITIONS.len(), 35);
        assert_eq!(count(PartitionSize::Large), 4);
        assert_eq!(count(PartitionSize::Medium), 13);
        assert_eq!(count(PartitionSize::Small), 18);
    }
}
