//! Failures of a seeding run and their mapping onto the domain error.

use demo_identity::GenerationError;
use serde_json::json;
use thiserror::Error;

use super::writer::BatchFailure;
use crate::domain::Error;
use crate::domain::ports::StoreError;

/// Errors that abort a seeding run.
#[derive(Debug, Error)]
pub enum SeedingError {
    /// Counting existing rows for a partition failed.
    #[error("{source}")]
    PartitionCount {
        /// Partition being planned.
        country: String,
        /// Store failure.
        #[source]
        source: StoreError,
    },
    /// The discoverable-profile count failed.
    #[error("{0}")]
    Stats(#[source] StoreError),
    /// Counting or deleting tagged rows failed.
    #[error("{0}")]
    Clear(#[source] StoreError),
    /// The profile write stopped part-way.
    #[error(transparent)]
    PartiallyWritten(#[from] BatchFailure),
    /// A catalogue pool was empty.
    #[error("identity generation failed: {0}")]
    Generation(#[from] GenerationError),
    /// Reseeding failed after tagged rows had already been deleted.
    #[error("{source}")]
    AfterClear {
        /// Profiles deleted before the failure.
        deleted: u64,
        /// Photo rows deleted, when known.
        deleted_photos: Option<u64>,
        /// Failure of the reseed.
        #[source]
        source: Box<SeedingError>,
    },
}

impl From<SeedingError> for Error {
    fn from(error: SeedingError) -> Self {
        match error {
            SeedingError::PartitionCount { country, source } => {
                Self::internal(source.message()).with_detail("country", json!(country))
            }
            SeedingError::Stats(source) | SeedingError::Clear(source) => {
                Self::internal(source.message())
            }
            SeedingError::PartiallyWritten(failure) => failure.into(),
            SeedingError::Generation(source) => Self::internal(source.to_string()),
            SeedingError::AfterClear {
                deleted,
                deleted_photos,
                source,
            } => Self::from(*source)
                .with_detail("deleted", json!(deleted))
                .with_detail("deletedPhotos", json!(deleted_photos)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn partition_count_names_the_country() {
        let error: Error = SeedingError::PartitionCount {
            country: "Ghana".to_owned(),
            source: StoreError::rejected(503_u16, "service unavailable"),
        }
        .into();
        let body = error.to_body();
        assert_eq!(body["error"], json!("service unavailable"));
        assert_eq!(body["country"], json!("Ghana"));
    }

    #[rstest]
    fn reseed_failures_report_what_was_cleared() {
        let error: Error = SeedingError::AfterClear {
            deleted: 12,
            deleted_photos: None,
            source: Box::new(SeedingError::PartitionCount {
                country: "Kenya".to_owned(),
                source: StoreError::transport("count failed for Kenya"),
            }),
        }
        .into();
        let body = error.to_body();
        assert_eq!(body["error"], json!("count failed for Kenya"));
        assert_eq!(body["country"], json!("Kenya"));
        assert_eq!(body["deleted"], json!(12));
        assert_eq!(body["deletedPhotos"], json!(null));
    }

    #[rstest]
    fn clear_failures_carry_the_store_text() {
        let error: Error = SeedingError::Clear(StoreError::transport("connection reset")).into();
        assert_eq!(error.message(), "connection reset");
        assert!(error.details().is_empty());
    }
}
