//! Mapping generated identities onto store rows.

use demo_identity::{DeterministicIdentity, EntityKey, Partition, RandomIdentity, random_uuid};
use rand::Rng;
use serde_json::{Value, json};

use super::strategy::SeedMarker;
use crate::domain::ports::StoreRow;

/// Source label recorded on deterministic photo metadata.
pub const PHOTO_SOURCE: &str = "picsum";

fn into_row(value: Value) -> StoreRow {
    match value {
        Value::Object(row) => row,
        _ => StoreRow::new(),
    }
}

/// Entity keys of a partition in ordinal-major order.
///
/// Every ordinal is emitted for each city before the next ordinal starts, so
/// the keys for a smaller `per_city` are always a prefix of the keys for a
/// larger one. A deterministic run writes keys `[existing, existing +
/// to_insert)` of this sequence.
pub fn entity_keys(partition: &Partition, per_city: u32) -> impl Iterator<Item = EntityKey> + '_ {
    let per_city = usize::try_from(per_city).unwrap_or(usize::MAX);
    let cities = partition.cities();
    (0..per_city).flat_map(move |ordinal| {
        cities
            .iter()
            .map(move |city| EntityKey::new(partition.name, *city, ordinal))
    })
}

/// Profile row for a deterministic identity.
///
/// `photos` holds the first `photos_per_profile` slot URLs; the caller strips
/// it when stored photos must be preserved.
pub fn deterministic_profile_row(
    generated: &DeterministicIdentity,
    marker: SeedMarker,
    photos_per_profile: usize,
    now: &str,
) -> StoreRow {
    let identity = &generated.identity;
    let mut row = into_row(json!({
        "id": generated.profile_id(),
        "name": identity.name,
        "age": identity.age,
        "bio": identity.bio,
        "location": identity.location(),
        "city": identity.city,
        "country": identity.country,
        "profession": identity.profession,
        "tribe": Value::Null,
        "phone": Value::Null,
        "date_of_birth": Value::Null,
        "photos": generated.photo_urls(photos_per_profile),
        "interests": identity.interests,
        "gender": identity.gender.as_str(),
        "looking_for": identity.looking_for,
        "is_active": true,
        "is_discoverable": true,
        "seed": generated.seed(),
        "person_id": identity.person_id,
        "created_at": now,
        "updated_at": now,
    }));
    row.insert(marker.column.to_owned(), Value::from(marker.value));
    row
}

/// Profile row plus one photo row per scene for a randomized identity.
pub fn randomized_rows<R: Rng + ?Sized>(
    generated: &RandomIdentity,
    marker: SeedMarker,
    rng: &mut R,
    now: &str,
) -> (StoreRow, Vec<StoreRow>) {
    let identity = &generated.identity;
    let profile_id = generated.profile_id.to_string();
    let urls: Vec<&str> = identity.photos.iter().map(|photo| photo.url.as_str()).collect();

    let mut profile = into_row(json!({
        "id": profile_id,
        "profile_id": profile_id,
        "person_id": identity.person_id,
        "name": identity.name,
        "age": identity.age,
        "country": identity.country,
        "city": identity.city,
        "tribe": identity.tribe,
        "interests": identity.interests,
        "bio": identity.bio,
        "location": identity.location(),
        "profession": identity.profession,
        "gender": identity.gender.as_str(),
        "looking_for": identity.looking_for,
        "photos": urls,
        "phone": Value::Null,
        "date_of_birth": Value::Null,
        "tagline": identity.tagline,
        "is_active": true,
        "is_discoverable": true,
        "created_at": now,
        "updated_at": now,
    }));
    profile.insert(marker.column.to_owned(), Value::from(marker.value));

    let photos = identity
        .photos
        .iter()
        .map(|photo| {
            let mut row = into_row(json!({
                "photo_id": random_uuid(rng).to_string(),
                "profile_id": profile_id,
                "person_id": identity.person_id,
                "image_url": photo.url,
                "scene_type": photo.scene.map(|scene| scene.as_str()),
                "created_at": now,
                "updated_at": now,
            }));
            row.insert(marker.column.to_owned(), Value::from(marker.value));
            row
        })
        .collect();

    (profile, photos)
}

/// Per-slot photo metadata derived from upserted profile rows.
///
/// Rows without an id or a photo array contribute nothing. The stored `seed`
/// wins over `default_seed` when present.
pub fn photo_metadata_rows(
    stored: &[StoreRow],
    default_seed: &str,
    marker: SeedMarker,
    now: &str,
) -> Vec<StoreRow> {
    stored
        .iter()
        .filter_map(|row| {
            let id = row.get("id").and_then(Value::as_str)?;
            let urls = row.get("photos").and_then(Value::as_array)?;
            let seed = row
                .get("seed")
                .and_then(Value::as_str)
                .unwrap_or(default_seed);
            Some(urls.iter().filter_map(Value::as_str).enumerate().map(
                move |(idx, url)| {
                    let mut meta = into_row(json!({
                        "profile_id": id,
                        "idx": idx,
                        "seed": seed,
                        "url": url,
                        "source": PHOTO_SOURCE,
                        "created_at": now,
                    }));
                    meta.insert(marker.column.to_owned(), Value::from(marker.value));
                    meta
                },
            ))
        })
        .flatten()
        .collect()
}
