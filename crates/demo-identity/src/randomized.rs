//! Randomized identity generation.
//!
//! Draws come from a caller-supplied [`Rng`], so a seeded generator yields
//! reproducible output in tests while production callers pass an
//! entropy-seeded one.

use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};
use url::form_urlencoded::byte_serialize;
use uuid::{Builder, Uuid};

use crate::catalogue::{
    LEGACY_GENDERS, LEGACY_INTERESTS, LEGACY_LOOKING_FOR, LEGACY_PROFESSIONS, Partition, TAGLINES,
    VIBES,
};
use crate::error::GenerationError;
use crate::identity::{Identity, PhotoRef, Scene};

const MIN_AGE: u8 = 18;
const MAX_AGE: u8 = 90;
const MIN_INTERESTS: usize = 3;
const MAX_INTERESTS: usize = 6;
const MIN_PHOTOS: usize = 3;

/// A randomized identity and the profile id it will be stored under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RandomIdentity {
    /// Random profile id; written to both `id` and `profile_id`.
    pub profile_id: Uuid,
    /// The generated identity; `person_id` is a second random UUID.
    pub identity: Identity,
}

/// Draws a fresh identity located in `partition`.
///
/// # Errors
///
/// Returns [`GenerationError::EmptyPool`] if a pool without a fallback is
/// empty.
pub fn random_identity<R: Rng + ?Sized>(
    rng: &mut R,
    partition: &Partition,
) -> Result<RandomIdentity, GenerationError> {
    let person_id = random_uuid(rng);
    let profile_id = random_uuid(rng);

    let name = choose(rng, partition.names(), "names")?;
    let age = rng.random_range(MIN_AGE..=MAX_AGE);
    let city = choose(rng, partition.cities(), "cities")?;
    let tribe = partition.tribes().choose(rng).map(|t| (*t).to_owned());

    let interest_count = rng.random_range(MIN_INTERESTS..=MAX_INTERESTS);
    let mut interests: Vec<String> = LEGACY_INTERESTS.iter().map(|i| (*i).to_owned()).collect();
    interests.shuffle(rng);
    interests.truncate(interest_count);

    let profession = choose(rng, LEGACY_PROFESSIONS, "professions")?;
    let gender = *LEGACY_GENDERS
        .choose(rng)
        .ok_or(GenerationError::EmptyPool { pool: "genders" })?;
    let looking_for = choose(rng, LEGACY_LOOKING_FOR, "looking-for")?;
    let tagline = choose(rng, TAGLINES, "taglines")?;

    let bio = compose_bio(
        rng,
        &BioContext {
            name,
            city,
            country: partition.name,
            interests: &interests,
            profession,
        },
    )?;

    let person_key = person_id.to_string();
    let photo_count = rng.random_range(MIN_PHOTOS..=Scene::ALL.len());
    let photos = Scene::ALL
        .iter()
        .take(photo_count)
        .map(|scene| PhotoRef {
            url: scene_photo_url(&person_key, *scene),
            scene: Some(*scene),
        })
        .collect();

    Ok(RandomIdentity {
        profile_id,
        identity: Identity {
            person_id: person_key,
            name: name.to_owned(),
            age,
            gender,
            profession: profession.to_owned(),
            looking_for: looking_for.to_owned(),
            interests,
            bio,
            country: partition.name.to_owned(),
            city: city.to_owned(),
            tribe,
            tagline: Some(tagline.to_owned()),
            photos,
        },
    })
}

/// Builds a v4 UUID from `rng` output.
#[must_use]
pub fn random_uuid<R: Rng + ?Sized>(rng: &mut R) -> Uuid {
    Builder::from_random_bytes(rng.random()).into_uuid()
}

/// Returns the scene-specific image URL for a person.
///
/// The URL depends only on the person id and scene, so the same person
/// keeps the same face across reseeds.
#[must_use]
pub fn scene_photo_url(person_id: &str, scene: Scene) -> String {
    let seed: String = byte_serialize(format!("{person_id}-{}", scene.as_str()).as_bytes()).collect();
    format!("https://picsum.photos/seed/{seed}/600/800")
}

struct BioContext<'a> {
    name: &'a str,
    city: &'a str,
    country: &'a str,
    interests: &'a [String],
    profession: &'a str,
}

fn compose_bio<R: Rng + ?Sized>(
    rng: &mut R,
    ctx: &BioContext<'_>,
) -> Result<String, GenerationError> {
    let vibe = choose(rng, VIBES, "vibes")?;
    let first = ctx
        .interests
        .first()
        .map_or("good conversations", String::as_str);
    let second = ctx.interests.get(1).map_or("coffee", String::as_str);
    let leading = ctx
        .interests
        .iter()
        .take(3)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    let BioContext {
        name,
        city,
        country,
        profession,
        ..
    } = ctx;

    let templates = [
        format!(
            "{name} here \u{2014} {profession} in {city}. I\u{2019}m feeling {vibe} lately. Let\u{2019}s swap {first} spots and try {second} together."
        ),
        format!(
            "New connections in {city}, {country}. Into {leading}. Bonus points if you can recommend a hidden gem."
        ),
        format!(
            "If you\u{2019}re down for {first} and a great playlist, we\u{2019}ll get along. {city} is better with good company."
        ),
        format!(
            "I\u{2019}m a {profession} who loves {second} and spontaneous plans. Say hi if you\u{2019}re in {city}!"
        ),
    ];
    templates
        .choose(rng)
        .cloned()
        .ok_or(GenerationError::EmptyPool { pool: "bio templates" })
}

fn choose<'a, R: Rng + ?Sized>(
    rng: &mut R,
    pool: &'a [&'a str],
    name: &'static str,
) -> Result<&'a str, GenerationError> {
    pool.choose(rng)
        .copied()
        .ok_or(GenerationError::EmptyPool { pool: name })
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use rstest::{fixture, rstest};

    use super::*;
    use crate::catalogue::{LEGACY_PARTITIONS, LocalPools, PartitionSize};

    #[fixture]
    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(17)
    }

    fn nigeria() -> &'static Partition {
        LEGACY_PARTITIONS
            .iter()
            .find(|p| p.name == "Nigeria")
            .expect("Nigeria is catalogued")
    }

    #[rstest]
    fn identity_fields_respect_pools(mut rng: ChaCha8Rng) {
        let partition = nigeria();
        for _ in 0..100 {
            let generated = random_identity(&mut rng, partition).expect("generated");
            let identity = generated.identity;

            assert!((18..=90).contains(&identity.age));
            assert!(partition.names().contains(&identity.name.as_str()));
            assert!(partition.cities().contains(&identity.city.as_str()));
            let tribe = identity.tribe.expect("Nigeria declares tribes");
            assert!(partition.tribes().contains(&tribe.as_str()));
            assert!((3..=6).contains(&identity.interests.len()));
            let unique: HashSet<_> = identity.interests.iter().collect();
            assert_eq!(unique.len(), identity.interests.len());
            assert!(LEGACY_PROFESSIONS.contains(&identity.profession.as_str()));
            assert!(LEGACY_LOOKING_FOR.contains(&identity.looking_for.as_str()));
            assert!(TAGLINES.contains(&identity.tagline.as_deref().expect("tagline")));
            assert_eq!(identity.country, "Nigeria");
        }
    }

    #[rstest]
    fn photos_follow_scene_order(mut rng: ChaCha8Rng) {
        for _ in 0..50 {
            let generated = random_identity(&mut rng, nigeria()).expect("generated");
            let photos = generated.identity.photos;
            assert!((3..=5).contains(&photos.len()));
            for (photo, scene) in photos.iter().zip(Scene::ALL) {
                assert_eq!(photo.scene, Some(scene));
                assert_eq!(
                    photo.url,
                    scene_photo_url(&generated.identity.person_id, scene)
                );
            }
        }
    }

    #[rstest]
    fn profile_and_person_ids_differ(mut rng: ChaCha8Rng) {
        let generated = random_identity(&mut rng, nigeria()).expect("generated");
        assert_ne!(
            generated.profile_id.to_string(),
            generated.identity.person_id
        );
        assert_eq!(generated.profile_id.get_version_num(), 4);
    }

    #[test]
    fn seeded_rngs_reproduce_identities() {
        let mut a = ChaCha8Rng::seed_from_u64(3);
        let mut b = ChaCha8Rng::seed_from_u64(3);
        assert_eq!(
            random_identity(&mut a, nigeria()).expect("generated"),
            random_identity(&mut b, nigeria()).expect("generated")
        );
    }

    #[rstest]
    fn undeclared_partition_uses_fallbacks(mut rng: ChaCha8Rng) {
        let partition = Partition {
            name: "Atlantis",
            size: PartitionSize::Small,
            pools: LocalPools::EMPTY,
        };
        let generated = random_identity(&mut rng, &partition).expect("generated");
        assert!(generated.identity.tribe.is_none());
        assert!(partition.cities().contains(&generated.identity.city.as_str()));
    }

    #[test]
    fn scene_url_is_percent_encoded() {
        assert_eq!(
            scene_photo_url("a b", Scene::Outdoor),
            "https://picsum.photos/seed/a+b-outdoor/600/800"
        );
        assert_eq!(
            scene_photo_url("5f0c", Scene::Portrait),
            "https://picsum.photos/seed/5f0c-portrait/600/800"
        );
    }
}
