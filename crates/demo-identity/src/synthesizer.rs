//! Deterministic identity synthesis.
//!
//! Every field of a synthesized identity is a pure function of the seed and
//! the entity key: the pair is hashed, the hash seeds a fresh xorshift
//! stream, and the fields are drawn from that stream in a fixed order.

use std::fmt;

use crate::catalogue::{
    BIO_TEMPLATES, FEMALE_NAMES, INTERESTS, LOOKING_FOR, MALE_NAMES, PROFESSIONS,
};
use crate::error::GenerationError;
use crate::hash::fnv1a32;
use crate::identity::{Gender, Identity, PhotoRef};
use crate::stream::XorShift32;

/// Seed used when a caller supplies none.
pub const DEFAULT_SEED: &str = "847392";

/// Number of photo slots derived per identity.
pub const MAX_PHOTO_SLOTS: usize = 6;

const WOMAN_THRESHOLD: f64 = 0.52;
const MIN_AGE: u32 = 19;
const MAX_AGE: u32 = 42;
const INTEREST_COUNT: usize = 4;
const PHOTO_SLOT_SUFFIXES: [char; MAX_PHOTO_SLOTS] = ['a', 'b', 'c', 'd', 'e', 'f'];

/// Stable address of one synthetic entity within a seed.
///
/// Renders as `"<country>:<city>:<ordinal>"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EntityKey {
    country: String,
    city: String,
    ordinal: usize,
}

impl EntityKey {
    /// Builds the key for the `ordinal`-th entity in `city`.
    #[must_use]
    pub fn new(country: impl Into<String>, city: impl Into<String>, ordinal: usize) -> Self {
        Self {
            country: country.into(),
            city: city.into(),
            ordinal,
        }
    }

    /// Partition name.
    #[must_use]
    pub fn country(&self) -> &str {
        &self.country
    }

    /// Sub-location name.
    #[must_use]
    pub fn city(&self) -> &str {
        &self.city
    }

    /// Position within the sub-location.
    #[must_use]
    pub const fn ordinal(&self) -> usize {
        self.ordinal
    }
}

impl fmt::Display for EntityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.country, self.city, self.ordinal)
    }
}

/// An identity together with the hash it was derived from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeterministicIdentity {
    /// The generated identity; `person_id` is the rendered entity key.
    pub identity: Identity,
    seed: String,
    seed_hash: u32,
}

impl DeterministicIdentity {
    /// Seed the identity was derived under.
    #[must_use]
    pub fn seed(&self) -> &str {
        &self.seed
    }

    /// FNV-1a hash of `"<seed>|<entity key>"`.
    #[must_use]
    pub const fn seed_hash(&self) -> u32 {
        self.seed_hash
    }

    /// Stable profile id, `seedv2_<hex hash>`.
    #[must_use]
    pub fn profile_id(&self) -> String {
        format!("seedv2_{:x}", self.seed_hash)
    }

    /// Base of the per-slot photo keys, `panda-<hex hash>`.
    #[must_use]
    pub fn seed_key_base(&self) -> String {
        seed_key_base(self.seed_hash)
    }

    /// Returns up to `count` photo URLs in slot order.
    #[must_use]
    pub fn photo_urls(&self, count: usize) -> Vec<String> {
        self.identity
            .photos
            .iter()
            .take(count)
            .map(|photo| photo.url.clone())
            .collect()
    }
}

/// Synthesizes the identity addressed by `key` under `seed`.
///
/// # Errors
///
/// Returns [`GenerationError::EmptyPool`] if a built-in pool is empty.
///
/// # Example
///
/// ```
/// use demo_identity::{EntityKey, Gender, synthesize_identity};
///
/// let key = EntityKey::new("Nigeria", "Lagos", 0);
/// let generated = synthesize_identity("847392", &key).expect("pools are populated");
///
/// assert_eq!(generated.identity.gender, Gender::Man);
/// assert_eq!(generated.identity.name, "Sefu");
/// assert_eq!(generated.identity.age, 36);
/// ```
pub fn synthesize_identity(
    seed: &str,
    key: &EntityKey,
) -> Result<DeterministicIdentity, GenerationError> {
    let seed_hash = fnv1a32(&format!("{seed}|{key}"));
    let mut stream = XorShift32::new(seed_hash);

    let gender = if stream.next_float() < WOMAN_THRESHOLD {
        Gender::Woman
    } else {
        Gender::Man
    };
    let names = match gender {
        Gender::Woman => FEMALE_NAMES,
        Gender::Man | Gender::NonBinary => MALE_NAMES,
    };
    let name = draw(&mut stream, names, "names")?;
    let age = u8::try_from(stream.int_in_range(MIN_AGE, MAX_AGE)).unwrap_or(u8::MAX);
    let profession = draw(&mut stream, PROFESSIONS, "professions")?;
    let looking_for = draw(&mut stream, LOOKING_FOR, "looking-for")?;
    let interests = draw_unique(&mut stream, INTERESTS, INTEREST_COUNT)?;
    let template = draw(&mut stream, BIO_TEMPLATES, "bio templates")?;
    let bio = format!("{template}\n\n{profession} \u{2022} {}", key.city());

    let base = seed_key_base(seed_hash);
    let photos = PHOTO_SLOT_SUFFIXES
        .iter()
        .map(|suffix| PhotoRef {
            url: format!("https://picsum.photos/seed/{base}-{suffix}/900/1200"),
            scene: None,
        })
        .collect();

    Ok(DeterministicIdentity {
        identity: Identity {
            person_id: key.to_string(),
            name: name.to_owned(),
            age,
            gender,
            profession: profession.to_owned(),
            looking_for: looking_for.to_owned(),
            interests,
            bio,
            country: key.country().to_owned(),
            city: key.city().to_owned(),
            tribe: None,
            tagline: None,
            photos,
        },
        seed: seed.to_owned(),
        seed_hash,
    })
}

fn seed_key_base(seed_hash: u32) -> String {
    format!("panda-{seed_hash:x}")
}

fn draw<'a>(
    stream: &mut XorShift32,
    pool: &'a [&'a str],
    name: &'static str,
) -> Result<&'a str, GenerationError> {
    stream
        .pick(pool)
        .copied()
        .ok_or(GenerationError::EmptyPool { pool: name })
}

/// Draws until `count` distinct values are collected, skipping repeats.
fn draw_unique(
    stream: &mut XorShift32,
    pool: &[&str],
    count: usize,
) -> Result<Vec<String>, GenerationError> {
    let wanted = count.min(pool.len());
    let mut picked: Vec<String> = Vec::with_capacity(wanted);
    while picked.len() < wanted {
        let value = draw(stream, pool, "interests")?;
        if !picked.iter().any(|existing| existing == value) {
            picked.push(value.to_owned());
        }
    }
    Ok(picked)
}
