//! Port abstraction for the remote profile store.
//!
//! The seeding engine only ever needs four capabilities: counting rows that
//! match equality filters, inserting a batch, upserting a batch, and deleting
//! rows that match filters. Adapters translate these into the store's wire
//! protocol and surface the store's own error text verbatim so schema-drift
//! classification can inspect it.

use async_trait::async_trait;
use serde_json::{Map, Value};

use super::define_port_error;

/// A row as sent to or returned by the store.
pub type StoreRow = Map<String, Value>;

define_port_error! {
    /// Errors raised by profile store adapters.
    pub enum StoreError {
        /// The request never produced a response.
        Transport { message: String } => "store request failed: {message}",
        /// The request exceeded the transport timeout.
        Timeout { message: String } => "store request timed out: {message}",
        /// The store answered with an error; `message` is the store's own text.
        Rejected { status: u16, message: String } => "{message}",
        /// The store answered with a body that could not be decoded.
        Decode { message: String } => "store response could not be decoded: {message}",
    }
}

impl StoreError {
    /// Raw message text, without any adapter prefix.
    pub fn message(&self) -> &str {
        match self {
            Self::Transport { message }
            | Self::Timeout { message }
            | Self::Rejected { message, .. }
            | Self::Decode { message } => message,
        }
    }
}

/// Row predicate understood by every adapter.
#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    /// `column = value`.
    Eq {
        /// Column name.
        column: String,
        /// Expected value.
        value: Value,
    },
    /// `column` holds a non-empty array.
    NonEmpty {
        /// Column name.
        column: String,
    },
}

impl Filter {
    /// Equality predicate.
    pub fn eq(column: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::Eq {
            column: column.into(),
            value: value.into(),
        }
    }

    /// Non-empty array predicate.
    pub fn non_empty(column: impl Into<String>) -> Self {
        Self::NonEmpty {
            column: column.into(),
        }
    }

    /// Column the predicate reads.
    pub fn column(&self) -> &str {
        match self {
            Self::Eq { column, .. } | Self::NonEmpty { column } => column,
        }
    }

    /// Evaluate the predicate against an in-memory row.
    pub fn matches(&self, row: &StoreRow) -> bool {
        match self {
            Self::Eq { column, value } => row.get(column) == Some(value),
            Self::NonEmpty { column } => row
                .get(column)
                .and_then(Value::as_array)
                .is_some_and(|items| !items.is_empty()),
        }
    }
}

/// Port for the remote relational store.
///
/// Calls are issued sequentially by the seeding engine; adapters need not
/// coordinate concurrent callers.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Count rows in `table` matching every filter.
    async fn count_where(&self, table: &str, filters: &[Filter]) -> Result<u64, StoreError>;

    /// Insert `rows` into `table` as one request.
    ///
    /// Callers pass rows sharing one column set; the request either commits
    /// every row or none.
    async fn insert_batch(&self, table: &str, rows: &[StoreRow]) -> Result<(), StoreError>;

    /// Insert or merge `rows` into `table`, resolving conflicts on the
    /// comma-separated `on_conflict` columns.
    ///
    /// Rows share one column set and go out as one request. Returns the
    /// stored rows. A column absent from the payload keeps its stored value.
    async fn upsert_batch(
        &self,
        table: &str,
        rows: &[StoreRow],
        on_conflict: &str,
    ) -> Result<Vec<StoreRow>, StoreError>;

    /// Delete rows in `table` matching every filter and return how many went.
    async fn delete_where(&self, table: &str, filters: &[Filter]) -> Result<u64, StoreError>;
}
