//! Synthetic identities for demo profile seeding.
//!
//! This crate holds the pure, I/O-free half of the demo seeder. It is kept
//! independent of the backend so the generators can be exercised and pinned
//! with golden values without a store or a runtime.
//!
//! # Overview
//!
//! The crate supports:
//!
//! - A 32-bit FNV-1a hash for turning seed material into stream seeds
//! - A xorshift32 stream generator with float, range and pick helpers
//! - Deterministic identities addressed by `(seed, entity key)`
//! - Randomized identities drawn from per-country local pools
//! - Partition catalogues and target-population policies
//!
//! # Example
//!
//! ```
//! use demo_identity::{EntityKey, synthesize_identity};
//!
//! let key = EntityKey::new("Nigeria", "Lagos", 0);
//! let first = synthesize_identity("847392", &key).expect("pools are populated");
//! let second = synthesize_identity("847392", &key).expect("pools are populated");
//!
//! assert_eq!(first, second);
//! assert_eq!(first.profile_id(), "seedv2_403a64d5");
//! ```

mod catalogue;
mod error;
mod hash;
mod identity;
mod randomized;
mod stream;
mod synthesizer;
mod target;

pub use catalogue::{
    DETERMINISTIC_PARTITIONS, LEGACY_PARTITIONS, LocalPools, Partition, PartitionSize,
};
pub use error::GenerationError;
pub use hash::fnv1a32;
pub use identity::{Gender, Identity, PhotoRef, Scene};
pub use randomized::{RandomIdentity, random_identity, random_uuid, scene_photo_url};
pub use stream::XorShift32;
pub use synthesizer::{
    DEFAULT_SEED, DeterministicIdentity, EntityKey, MAX_PHOTO_SLOTS, synthesize_identity,
};
pub use target::TargetPolicy;
