//! Target-population policies.

use rand::Rng;

use crate::catalogue::Partition;

/// How many seeded entities a partition should hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetPolicy {
    /// A fixed count per sub-location: `per_city * city_count`.
    PerCity(u32),
    /// A fresh draw from the partition's size band on every call.
    SizeBanded,
}

impl TargetPolicy {
    /// Computes the target for `partition`.
    ///
    /// `rng` is only consulted by [`TargetPolicy::SizeBanded`].
    pub fn target<R: Rng + ?Sized>(self, partition: &Partition, rng: &mut R) -> u32 {
        match self {
            Self::PerCity(per_city) => {
                let cities = u32::try_from(partition.city_count()).unwrap_or(u32::MAX);
                per_city.saturating_mul(cities)
            }
            Self::SizeBanded => rng.random_range(partition.size.band()),
        }
    }

    /// Returns the per-city count, if fixed.
    #[must_use]
    pub const fn per_city(self) -> Option<u32> {
        match self {
            Self::PerCity(per_city) => Some(per_city),
            Self::SizeBanded => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use rstest::rstest;

    use super::*;
    use crate::catalogue::{DETERMINISTIC_PARTITIONS, LEGACY_PARTITIONS};

    #[rstest]
    #[case("Nigeria", 16, 64)]
    #[case("Kenya", 16, 48)]
    #[case("Ghana", 1, 2)]
    #[case("South Africa", 50, 150)]
    fn per_city_multiplies_by_city_count(
        #[case] name: &str,
        #[case] per_city: u32,
        #[case] expected: u32,
    ) {
        let partition = DETERMINISTIC_PARTITIONS
            .iter()
            .find(|p| p.name == name)
            .expect("partition exists");
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert_eq!(
            TargetPolicy::PerCity(per_city).target(partition, &mut rng),
            expected
        );
    }

    #[test]
    fn size_banded_targets_stay_in_band() {
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        for partition in LEGACY_PARTITIONS {
            for _ in 0..20 {
                let target = TargetPolicy::SizeBanded.target(partition, &mut rng);
                assert!(partition.size.band().contains(&target));
            }
        }
    }

    #[test]
    fn per_city_echo() {
        assert_eq!(TargetPolicy::PerCity(5).per_city(), Some(5));
        assert_eq!(TargetPolicy::SizeBanded.per_city(), None);
    }
}
