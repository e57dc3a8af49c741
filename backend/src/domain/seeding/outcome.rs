//! Success payloads returned by a seeding run.

use serde::Serialize;

use super::options::Mode;
use super::planner::PlanEntry;

/// JSON body of a successful invocation.
///
/// Fields absent for a mode are omitted. Fields typed `Option<Option<_>>`
/// are present-but-null when the inner value is unknown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedReport {
    /// Always `true`.
    pub ok: bool,
    /// Wire name of the mode that ran.
    pub mode: &'static str,
    /// Set on dry runs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    /// Active profiles visible to the app.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discoverable_profiles: Option<u64>,
    /// Marker-tagged profiles; null when the marker column is missing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seeded_profiles: Option<Option<u64>>,
    /// Number of partitions in the catalogue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub countries: Option<usize>,
    /// Effective `perCity`; null when targets are size-banded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_city: Option<Option<u32>>,
    /// Determinism root used for the run.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<String>,
    /// Photo URLs kept per profile.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photos_per_profile: Option<usize>,
    /// Whether stored photo lists were replaced.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overwrite_photos: Option<bool>,
    /// Tagged profiles a clear would delete.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub planned_delete: Option<u64>,
    /// Profiles a seed would insert.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub planned_insert: Option<u64>,
    /// Tagged profiles deleted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted: Option<u64>,
    /// Tagged photo rows deleted; null when the photo table is unavailable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_photos: Option<Option<u64>>,
    /// Profiles written.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inserted: Option<u64>,
    /// Photo rows written; null when the photo write failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inserted_photos: Option<Option<u64>>,
    /// Per-partition plan.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan: Option<Vec<PlanEntry>>,
}

impl SeedReport {
    /// Empty report for `mode`.
    pub fn new(mode: Mode) -> Self {
        Self {
            ok: true,
            mode: mode.as_str(),
            dry_run: None,
            discoverable_profiles: None,
            seeded_profiles: None,
            countries: None,
            per_city: None,
            seed: None,
            photos_per_profile: None,
            overwrite_photos: None,
            planned_delete: None,
            planned_insert: None,
            deleted: None,
            deleted_photos: None,
            inserted: None,
            inserted_photos: None,
            plan: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    fn absent_fields_are_omitted_and_unknown_ones_are_null() {
        let mut report = SeedReport::new(Mode::Clear);
        report.deleted = Some(12);
        report.deleted_photos = Some(None);
        let body = serde_json::to_value(&report).expect("serialise report");
        assert_eq!(
            body,
            json!({ "ok": true, "mode": "clear", "deleted": 12, "deletedPhotos": null })
        );
    }

    #[rstest]
    fn plan_entries_use_camel_case() {
        let mut report = SeedReport::new(Mode::Seed);
        report.dry_run = Some(true);
        report.planned_insert = Some(54);
        report.plan = Some(vec![PlanEntry::new("Nigeria", 64, 10)]);
        let body = serde_json::to_value(&report).expect("serialise report");
        assert_eq!(body["dryRun"], json!(true));
        assert_eq!(body["plannedInsert"], json!(54));
        assert_eq!(
            body["plan"],
            json!([{ "country": "Nigeria", "target": 64, "existing": 10, "toInsert": 54 }])
        );
    }
}
