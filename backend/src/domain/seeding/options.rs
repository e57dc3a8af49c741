//! Request options and their normalisation.
//!
//! Request bodies are loosely typed: numbers may arrive as strings, flags
//! are only honoured when literally `true`, and an unparseable body means
//! "all defaults". Normalisation happens here so the service only sees
//! clamped, typed values.

use demo_identity::{DEFAULT_SEED, MAX_PHOTO_SLOTS};
use serde::Deserialize;
use serde_json::Value;

use super::strategy::{PerCityBounds, SeedStrategy};
use crate::domain::Error;

const PHOTOS_PER_PROFILE_DEFAULT: usize = 3;

/// Operation selected by the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Report counts without writing.
    Stats,
    /// Plan and insert the missing profiles.
    Seed,
    /// Delete tagged profiles and photo rows.
    Clear,
    /// Clear, then seed.
    SeedAll,
}

impl Mode {
    /// Wire name of the mode.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Stats => "stats",
            Self::Seed => "seed",
            Self::Clear => "clear",
            Self::SeedAll => "seedAll",
        }
    }

    fn parse(raw: &str) -> Option<Self> {
        match raw {
            "stats" => Some(Self::Stats),
            "seed" => Some(Self::Seed),
            "clear" => Some(Self::Clear),
            "seedAll" => Some(Self::SeedAll),
            _ => None,
        }
    }
}

/// Request body as received, before normalisation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSeedOptions {
    /// Requested mode.
    #[serde(default)]
    pub mode: Option<Value>,
    /// Per-city target override.
    #[serde(default)]
    pub per_city: Option<Value>,
    /// Plan only when `true`.
    #[serde(default)]
    pub dry_run: Option<Value>,
    /// Determinism root.
    #[serde(default)]
    pub seed: Option<Value>,
    /// Number of photo URLs kept per profile.
    #[serde(default)]
    pub photos_per_profile: Option<Value>,
    /// Replace stored photo lists when `true`.
    #[serde(default)]
    pub overwrite_photos: Option<Value>,
}

impl RawSeedOptions {
    /// Parse a request body, falling back to all defaults when it is not a
    /// JSON object.
    pub fn from_body(body: &[u8]) -> Self {
        serde_json::from_slice(body).unwrap_or_default()
    }
}

/// Normalised options for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedOptions {
    /// Selected operation.
    pub mode: Mode,
    /// Plan only.
    pub dry_run: bool,
    /// Fixed per-city target, or `None` for size-banded targets.
    pub per_city: Option<u32>,
    /// Trimmed seed; the default when blank.
    pub seed: String,
    /// Photo URLs kept per profile.
    pub photos_per_profile: usize,
    /// Replace stored photo lists on upsert.
    pub overwrite_photos: bool,
}

impl SeedOptions {
    /// Normalise `raw` for `strategy`.
    ///
    /// # Errors
    ///
    /// Returns an invalid-request [`Error`] when `mode` names no known mode.
    pub fn resolve(strategy: SeedStrategy, raw: &RawSeedOptions) -> Result<Self, Error> {
        let mode = match raw.mode.as_ref() {
            None | Some(Value::Null) => Mode::Seed,
            Some(Value::String(name)) => Mode::parse(name)
                .ok_or_else(|| Error::invalid_request(format!("Unknown mode: {name}")))?,
            Some(other) => return Err(Error::invalid_request(format!("Unknown mode: {other}"))),
        };

        let photo_bounds = PerCityBounds {
            min: 1,
            max: u32::try_from(MAX_PHOTO_SLOTS).unwrap_or(u32::MAX),
            default: u32::try_from(PHOTOS_PER_PROFILE_DEFAULT).ok(),
        };
        let photos_per_profile = clamp_count(raw.photos_per_profile.as_ref(), photo_bounds)
            .and_then(|n| usize::try_from(n).ok())
            .unwrap_or(PHOTOS_PER_PROFILE_DEFAULT);

        Ok(Self {
            mode,
            dry_run: is_true(raw.dry_run.as_ref()),
            per_city: clamp_count(raw.per_city.as_ref(), strategy.per_city_bounds()),
            seed: normalise_seed(raw.seed.as_ref()),
            photos_per_profile,
            overwrite_photos: is_true(raw.overwrite_photos.as_ref()),
        })
    }
}

fn is_true(value: Option<&Value>) -> bool {
    matches!(value, Some(Value::Bool(true)))
}

fn normalise_seed(value: Option<&Value>) -> String {
    let text = match value {
        Some(Value::String(text)) => text.trim().to_owned(),
        Some(Value::Number(number)) => number.to_string(),
        _ => String::new(),
    };
    if text.is_empty() {
        DEFAULT_SEED.to_owned()
    } else {
        text
    }
}

/// Numeric reading of a loosely typed value: numbers, numeric strings, and
/// booleans. A blank string reads as zero.
fn numeric(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) if text.trim().is_empty() => Some(0.0),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        Value::Bool(flag) => Some(if *flag { 1.0 } else { 0.0 }),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    };
    number.filter(|n| n.is_finite())
}

/// Truncate and clamp `value` into `bounds`, or fall back to the default.
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "the value is clamped into a u32 range before the cast"
)]
fn clamp_count(value: Option<&Value>, bounds: PerCityBounds) -> Option<u32> {
    match value.and_then(numeric) {
        Some(number) => {
            let clamped = number
                .trunc()
                .clamp(f64::from(bounds.min), f64::from(bounds.max));
            Some(clamped as u32)
        }
        None => bounds.default,
    }
}
