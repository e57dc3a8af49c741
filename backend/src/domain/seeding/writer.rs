//! Batched writes with optional-column negotiation.
//!
//! Rows are submitted in fixed-size chunks. Rows of a chunk with differing
//! column sets go out as separate requests, and every committed request counts
//! towards `inserted` even when a later one in the same chunk fails. When the
//! store rejects a request because an optional column is missing, the column
//! is dropped for the rest of the write and the request is retried; a chunk
//! gets at most one such retry.

use serde_json::json;
use thiserror::Error;
use tracing::{debug, info, warn};

use super::schema_drift::{is_capability_gap, missing_optional_column};
use super::strategy::WriteMode;
use crate::domain::Error;
use crate::domain::ports::{ProfileStore, StoreError, StoreRow};

/// Destination of a batched write.
#[derive(Debug, Clone, Copy)]
pub struct WriteTarget<'a> {
    /// Table receiving the rows.
    pub table: &'a str,
    /// Insert or upsert.
    pub mode: WriteMode,
    /// Columns that may be dropped when the store lacks them.
    pub optional_columns: &'a [&'static str],
}

/// Result of a fully successful write.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WriteReport {
    /// Rows the store accepted.
    pub written: u64,
    /// Rows returned by upserts; empty for inserts.
    pub stored: Vec<StoreRow>,
    /// Optional columns dropped along the way.
    pub dropped_columns: Vec<&'static str>,
}

/// A write that stopped part-way.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{error}")]
pub struct BatchFailure {
    /// Rows written before the failing chunk.
    pub inserted: u64,
    /// Zero-based index of the failing chunk.
    pub batch: usize,
    /// Offset of the failing chunk's first row.
    pub offset: usize,
    /// Configured chunk size.
    pub chunk_size: usize,
    /// `without_<column>` when the failure happened on the retry.
    pub retry: Option<String>,
    /// Store error that ended the write.
    #[source]
    pub error: StoreError,
}

impl From<BatchFailure> for Error {
    fn from(failure: BatchFailure) -> Self {
        let mut error = Self::internal(failure.error.message())
            .with_detail("inserted", json!(failure.inserted))
            .with_detail(
                "at",
                json!({
                    "batch": failure.batch,
                    "offset": failure.offset,
                    "chunkSize": failure.chunk_size,
                }),
            );
        if let Some(retry) = failure.retry {
            error = error.with_detail("retry", json!(retry));
        }
        error
    }
}

/// Chunked writer over a [`ProfileStore`].
#[derive(Clone, Copy)]
pub struct BatchWriter<'a> {
    store: &'a dyn ProfileStore,
    batch_size: usize,
}

impl<'a> BatchWriter<'a> {
    /// Create a writer; a zero batch size is raised to one.
    pub fn new(store: &'a dyn ProfileStore, batch_size: usize) -> Self {
        Self {
            store,
            batch_size: batch_size.max(1),
        }
    }

    /// Effective chunk size.
    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Write `rows` in chunks, stopping at the first unrecoverable failure.
    ///
    /// # Errors
    ///
    /// Returns [`BatchFailure`] describing where the write stopped and how
    /// many rows had already been accepted.
    pub async fn write(
        &self,
        target: WriteTarget<'_>,
        rows: &[StoreRow],
    ) -> Result<WriteReport, BatchFailure> {
        let mut report = WriteReport::default();
        for (batch, chunk) in rows.chunks(self.batch_size).enumerate() {
            let offset = batch * self.batch_size;
            let fail = |written: u64, retry: Option<String>, error: StoreError| BatchFailure {
                inserted: written,
                batch,
                offset,
                chunk_size: self.batch_size,
                retry,
                error,
            };

            let mut retried = false;
            for group in column_groups(chunk) {
                let prepared = without_columns(&group, &report.dropped_columns);
                let outcome = match self.submit(target, &prepared).await {
                    Ok(stored) => stored,
                    Err(error) => {
                        let negotiable = if retried {
                            None
                        } else {
                            missing_optional_column(
                                &error,
                                target.optional_columns,
                                &report.dropped_columns,
                            )
                        };
                        let Some(column) = negotiable else {
                            return Err(fail(report.written, None, error));
                        };
                        warn!(
                            table = target.table,
                            column,
                            batch,
                            "optional column missing; retrying without it"
                        );
                        retried = true;
                        report.dropped_columns.push(column);
                        let without = without_columns(&group, &report.dropped_columns);
                        self.submit(target, &without).await.map_err(|error| {
                            fail(report.written, Some(format!("without_{column}")), error)
                        })?
                    }
                };

                report.written += match target.mode {
                    WriteMode::Insert => group.len() as u64,
                    WriteMode::Upsert { .. } => outcome.len() as u64,
                };
                report.stored.extend(outcome);
            }
            debug!(table = target.table, batch, offset, rows = chunk.len(), "batch written");
        }
        Ok(report)
    }

    /// Write auxiliary rows whose failure must not fail the run.
    ///
    /// Returns `None` when the write failed; a missing table or column is
    /// logged at info level, anything else as a warning.
    pub async fn write_best_effort(
        &self,
        target: WriteTarget<'_>,
        marker_column: &str,
        rows: &[StoreRow],
    ) -> Option<u64> {
        match self.write(target, rows).await {
            Ok(report) => Some(report.written),
            Err(failure) if is_capability_gap(&failure.error, target.table, marker_column) => {
                info!(table = target.table, error = %failure.error, "auxiliary table unavailable");
                None
            }
            Err(failure) => {
                warn!(
                    table = target.table,
                    inserted = failure.inserted,
                    error = %failure.error,
                    "auxiliary write failed"
                );
                None
            }
        }
    }

    async fn submit(
        &self,
        target: WriteTarget<'_>,
        rows: &[StoreRow],
    ) -> Result<Vec<StoreRow>, StoreError> {
        match target.mode {
            WriteMode::Insert => self
                .store
                .insert_batch(target.table, rows)
                .await
                .map(|()| Vec::new()),
            WriteMode::Upsert { on_conflict } => {
                self.store.upsert_batch(target.table, rows, on_conflict).await
            }
        }
    }
}

/// Split a chunk into runs sharing one column set, preserving first-seen order.
///
/// PostgREST derives the column list of a bulk write from its payload, so a
/// row that omits a column must not share a request with rows that carry it.
fn column_groups(rows: &[StoreRow]) -> Vec<Vec<StoreRow>> {
    let mut groups: Vec<(Vec<&str>, Vec<StoreRow>)> = Vec::new();
    for row in rows {
        let mut columns: Vec<&str> = row.keys().map(String::as_str).collect();
        columns.sort_unstable();
        match groups.iter_mut().find(|(key, _)| *key == columns) {
            Some((_, members)) => members.push(row.clone()),
            None => groups.push((columns, vec![row.clone()])),
        }
    }
    groups.into_iter().map(|(_, members)| members).collect()
}

fn without_columns(rows: &[StoreRow], dropped: &[&'static str]) -> Vec<StoreRow> {
    rows.iter()
        .map(|row| {
            let mut row = row.clone();
            for column in dropped {
                row.remove(*column);
            }
            row
        })
        .collect()
}

#[cfg(test)]
mod tests {
    //! Chunking, negotiation, and partial-failure reporting.

    use super::*;
    use crate::domain::ports::MockProfileStore;
    use rstest::rstest;
    use serde_json::Value;
    use std::sync::{Arc, Mutex};

    const PROFILES: WriteTarget<'static> = WriteTarget {
        table: "profiles",
        mode: WriteMode::Insert,
        optional_columns: &["tagline"],
    };

    fn rows(count: usize) -> Vec<StoreRow> {
        (0..count)
            .map(|i| {
                json!({ "id": i, "tagline": "hi" })
                    .as_object()
                    .cloned()
                    .expect("object row")
            })
            .collect()
    }

    #[rstest]
    #[tokio::test]
    async fn rows_are_chunked_by_batch_size() {
        let sizes = Arc::new(Mutex::new(Vec::new()));
        let seen = Arc::clone(&sizes);
        let mut store = MockProfileStore::new();
        store.expect_insert_batch().times(2).returning(move |_, rows| {
            seen.lock().expect("sizes lock").push(rows.len());
            Ok(())
        });

        let report = BatchWriter::new(&store, 250)
            .write(PROFILES, &rows(260))
            .await
            .expect("write succeeds");

        assert_eq!(report.written, 260);
        assert_eq!(*sizes.lock().expect("sizes lock"), vec![250, 10]);
    }

    #[rstest]
    #[tokio::test]
    async fn missing_optional_column_is_dropped_for_later_batches() {
        let taglines = Arc::new(Mutex::new(Vec::new()));
        let seen = Arc::clone(&taglines);
        let mut store = MockProfileStore::new();
        store.expect_insert_batch().times(3).returning(move |_, rows| {
            let has_tagline = rows.iter().any(|row| row.contains_key("tagline"));
            seen.lock().expect("tagline lock").push(has_tagline);
            if has_tagline {
                Err(StoreError::rejected(400_u16, "column profiles.tagline does not exist"))
            } else {
                Ok(())
            }
        });

        let report = BatchWriter::new(&store, 2)
            .write(PROFILES, &rows(4))
            .await
            .expect("write succeeds after negotiation");

        assert_eq!(report.written, 4);
        assert_eq!(report.dropped_columns, vec!["tagline"]);
        assert_eq!(*taglines.lock().expect("tagline lock"), vec![true, false, false]);
    }

    #[rstest]
    #[tokio::test]
    async fn failed_retry_reports_position_and_retry_label() {
        let mut store = MockProfileStore::new();
        let mut calls = 0_usize;
        store.expect_insert_batch().returning(move |_, _| {
            calls += 1;
            match calls {
                1 => Ok(()),
                2 => Err(StoreError::rejected(400_u16, "column profiles.tagline does not exist")),
                _ => Err(StoreError::rejected(409_u16, "duplicate key value")),
            }
        });

        let failure = BatchWriter::new(&store, 2)
            .write(PROFILES, &rows(5))
            .await
            .expect_err("second batch fails");

        assert_eq!(failure.inserted, 2);
        assert_eq!(failure.batch, 1);
        assert_eq!(failure.offset, 2);
        assert_eq!(failure.chunk_size, 2);
        assert_eq!(failure.retry.as_deref(), Some("without_tagline"));
        assert_eq!(failure.to_string(), "duplicate key value");
    }

    #[rstest]
    #[tokio::test]
    async fn non_drift_failure_is_not_retried() {
        let mut store = MockProfileStore::new();
        store
            .expect_insert_batch()
            .times(1)
            .returning(|_, _| Err(StoreError::timeout("deadline exceeded")));

        let failure = BatchWriter::new(&store, 10)
            .write(PROFILES, &rows(3))
            .await
            .expect_err("write fails");
        assert_eq!(failure.inserted, 0);
        assert_eq!(failure.retry, None);
    }

    #[rstest]
    #[tokio::test]
    async fn upserts_count_returned_rows() {
        let mut store = MockProfileStore::new();
        store
            .expect_upsert_batch()
            .withf(|table, _, on_conflict| table == "profiles" && on_conflict == "id")
            .returning(|_, rows, _| Ok(rows.to_vec()));

        let target = WriteTarget {
            table: "profiles",
            mode: WriteMode::Upsert { on_conflict: "id" },
            optional_columns: &[],
        };
        let report = BatchWriter::new(&store, 250)
            .write(target, &rows(3))
            .await
            .expect("upsert succeeds");
        assert_eq!(report.written, 3);
        assert_eq!(report.stored.len(), 3);
    }

    #[rstest]
    #[tokio::test]
    async fn best_effort_swallows_missing_tables() {
        let mut store = MockProfileStore::new();
        store.expect_insert_batch().returning(|_, _| {
            Err(StoreError::rejected(404_u16, "relation \"public.photos\" does not exist"))
        });
        let target = WriteTarget {
            table: "photos",
            mode: WriteMode::Insert,
            optional_columns: &["label"],
        };
        let written = BatchWriter::new(&store, 500)
            .write_best_effort(target, "label", &rows(2))
            .await;
        assert_eq!(written, None);
    }

    #[rstest]
    fn batch_failure_maps_to_envelope_details() {
        let failure = BatchFailure {
            inserted: 250,
            batch: 1,
            offset: 250,
            chunk_size: 250,
            retry: Some("without_tagline".to_owned()),
            error: StoreError::rejected(400_u16, "boom"),
        };
        let body = Error::from(failure).to_body();
        assert_eq!(body["error"], Value::from("boom"));
        assert_eq!(body["inserted"], Value::from(250));
        assert_eq!(body["at"], json!({ "batch": 1, "offset": 250, "chunkSize": 250 }));
        assert_eq!(body["retry"], Value::from("without_tagline"));
    }

    #[rstest]
    #[tokio::test]
    async fn committed_column_groups_count_towards_a_failed_chunk() {
        let mut store = MockProfileStore::new();
        let mut calls = 0_usize;
        store.expect_upsert_batch().times(2).returning(move |_, rows, _| {
            calls += 1;
            if calls == 1 {
                Ok(rows.to_vec())
            } else {
                Err(StoreError::rejected(400_u16, "null value in column \"name\""))
            }
        });
        let target = WriteTarget {
            table: "profiles",
            mode: WriteMode::Upsert { on_conflict: "id" },
            optional_columns: &[],
        };
        let chunk = [
            json!({ "id": "a", "photos": ["x"] }),
            json!({ "id": "b" }),
            json!({ "id": "c", "photos": ["y"] }),
        ]
        .map(|value| value.as_object().cloned().expect("object row"));

        let failure = BatchWriter::new(&store, 250)
            .write(target, &chunk)
            .await
            .expect_err("second group fails");

        assert_eq!(failure.inserted, 2);
        assert_eq!(failure.batch, 0);
        assert_eq!(failure.offset, 0);
    }

    #[rstest]
    fn rows_are_grouped_by_column_set() {
        let rows = [
            json!({ "id": "a", "photos": [] }),
            json!({ "id": "b" }),
            json!({ "photos": ["x"], "id": "c" }),
        ]
        .map(|value| value.as_object().cloned().expect("object row"));
        let groups = column_groups(&rows);
        let ids: Vec<Vec<&str>> = groups
            .iter()
            .map(|group| {
                group
                    .iter()
                    .filter_map(|row| row.get("id").and_then(Value::as_str))
                    .collect()
            })
            .collect();
        assert_eq!(ids, vec![vec!["a", "c"], vec!["b"]]);
    }

    #[rstest]
    fn zero_batch_size_is_raised() {
        let store = MockProfileStore::new();
        assert_eq!(BatchWriter::new(&store, 0).batch_size(), 1);
    }
}
