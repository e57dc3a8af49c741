//! Fixed catalogue and pools for the deterministic generator.
//!
//! Pool order is part of the output contract: reordering any entry changes
//! every identity derived from an existing seed.

use super::{LocalPools, Partition, PartitionSize};

/// Partitions seeded by the deterministic generator, in planning order.
pub const DETERMINISTIC_PARTITIONS: &[Partition] = &[
    Partition {
        name: "Nigeria",
        size: PartitionSize::Large,
        pools: LocalPools {
            cities: &["Lagos", "Abuja", "Ibadan", "Port Harcourt"],
            tribes: &[],
            names: &[],
        },
    },
    Partition {
        name: "Kenya",
        size: PartitionSize::Medium,
        pools: LocalPools {
            cities: &["Nairobi", "Mombasa", "Kisumu"],
            tribes: &[],
            names: &[],
        },
    },
    Partition {
        name: "Ghana",
        size: PartitionSize::Small,
        pools: LocalPools {
            cities: &["Accra", "Kumasi"],
            tribes: &[],
            names: &[],
        },
    },
    Partition {
        name: "South Africa",
        size: PartitionSize::Medium,
        pools: LocalPools {
            cities: &["Cape Town", "Johannesburg", "Durban"],
            tribes: &[],
            names: &[],
        },
    },
];

pub(crate) const FEMALE_NAMES: &[&str] = &[
    "Amina", "Zara", "Nia", "Tola", "Imani", "Sade", "Lerato", "Nandi", "Amara", "Chioma", "Asha",
    "Ayana",
];

pub(crate) const MALE_NAMES: &[&str] = &[
    "Noah",
    "Ethan",
    "Kofi",
    "Tunde",
    "Malik",
    "Kwame",
    "Ade",
    "Siyabonga",
    "Emeka",
    "Jabari",
    "Sefu",
    "Thabo",
];

pub(crate) const PROFESSIONS: &[&str] = &[
    "Software Engineer",
    "Product Designer",
    "Nurse",
    "Teacher",
    "Analyst",
    "Entrepreneur",
    "Marketing",
    "Photographer",
    "Lawyer",
    "Chef",
];

pub(crate) const INTERESTS: &[&str] = &[
    "Coffee",
    "Travel",
    "Afrobeats",
    "Movies",
    "Fitness",
    "Food",
    "Museums",
    "Hiking",
    "Books",
    "Gaming",
    "Photography",
    "Live music",
];

pub(crate) const LOOKING_FOR: &[&str] = &["Dating", "Relationship", "Friends"];

pub(crate) const BIO_TEMPLATES: &[&str] = &[
    "Coffee dates, good playlists, and spontaneous weekend plans.",
    "Quiet confidence, big laughs. Ask me about my latest obsession.",
    "Gym sometimes, food always. Looking for someone kind and curious.",
    "Bookstore afternoons + live music nights. Let\u{2019}s make it fun.",
];
