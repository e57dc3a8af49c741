//! Test utilities for the seeder crate.
//!
//! Shared by unit tests (in `src/`) and integration tests (in `tests/`) via
//! the `test-support` feature. The in-memory store mimics the PostgREST
//! adapter closely enough for schema-drift negotiation: missing tables and
//! columns fail with the same message shapes PostgreSQL produces.

use std::collections::{HashMap, HashSet};
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::ports::{Filter, ProfileStore, StoreError, StoreRow};

#[derive(Default)]
struct StoreState {
    tables: HashMap<String, Vec<StoreRow>>,
    missing_tables: HashSet<String>,
    missing_columns: HashSet<(String, String)>,
    failing_counts: HashSet<String>,
    failing_writes: HashSet<(String, usize)>,
    write_calls: HashMap<String, usize>,
    batch_sizes: HashMap<String, Vec<usize>>,
}

impl StoreState {
    fn check_table(&self, table: &str) -> Result<(), StoreError> {
        if self.missing_tables.contains(table) {
            return Err(StoreError::rejected(
                404_u16,
                format!("relation \"public.{table}\" does not exist"),
            ));
        }
        Ok(())
    }

    fn check_column(&self, table: &str, column: &str) -> Result<(), StoreError> {
        if self
            .missing_columns
            .contains(&(table.to_owned(), column.to_owned()))
        {
            return Err(StoreError::rejected(
                400_u16,
                format!("column {table}.{column} does not exist"),
            ));
        }
        Ok(())
    }

    fn check_filters(&self, table: &str, filters: &[Filter]) -> Result<(), StoreError> {
        self.check_table(table)?;
        filters
            .iter()
            .try_for_each(|filter| self.check_column(table, filter.column()))
    }

    fn begin_write(&mut self, table: &str, rows: &[StoreRow]) -> Result<(), StoreError> {
        let call = {
            let calls = self.write_calls.entry(table.to_owned()).or_default();
            let call = *calls;
            *calls += 1;
            call
        };
        self.check_table(table)?;
        for row in rows {
            for column in row.keys() {
                self.check_column(table, column)?;
            }
        }
        if self.failing_writes.contains(&(table.to_owned(), call)) {
            return Err(StoreError::rejected(
                500_u16,
                format!("write {call} to {table} rejected"),
            ));
        }
        self.batch_sizes
            .entry(table.to_owned())
            .or_default()
            .push(rows.len());
        Ok(())
    }
}

fn matches_all(row: &StoreRow, filters: &[Filter]) -> bool {
    filters.iter().all(|filter| filter.matches(row))
}

fn same_key(stored: &StoreRow, incoming: &StoreRow, conflict: &[&str]) -> bool {
    conflict
        .iter()
        .all(|column| stored.get(*column).is_some() && stored.get(*column) == incoming.get(*column))
}

/// In-memory [`ProfileStore`] with failure injection.
#[derive(Default)]
pub struct InMemoryProfileStore {
    state: Mutex<StoreState>,
}

impl InMemoryProfileStore {
    /// Empty store with every table and column available.
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, StoreState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Make `table` report as nonexistent.
    pub fn with_missing_table(self, table: &str) -> Self {
        self.state().missing_tables.insert(table.to_owned());
        self
    }

    /// Make `table.column` report as nonexistent.
    pub fn with_missing_column(self, table: &str, column: &str) -> Self {
        self.state()
            .missing_columns
            .insert((table.to_owned(), column.to_owned()));
        self
    }

    /// Fail counts filtered on `country`.
    pub fn with_failing_count(self, country: &str) -> Self {
        self.state().failing_counts.insert(country.to_owned());
        self
    }

    /// Fail the zero-based `call`-th write request to `table`.
    pub fn with_failing_write(self, table: &str, call: usize) -> Self {
        self.state()
            .failing_writes
            .insert((table.to_owned(), call));
        self
    }

    /// Place rows directly, bypassing failure injection.
    pub fn preload(&self, table: &str, rows: impl IntoIterator<Item = StoreRow>) {
        self.state()
            .tables
            .entry(table.to_owned())
            .or_default()
            .extend(rows);
    }

    /// Snapshot of the rows in `table`.
    pub fn rows(&self, table: &str) -> Vec<StoreRow> {
        self.state().tables.get(table).cloned().unwrap_or_default()
    }

    /// Rows in `table` matching every filter.
    pub fn count(&self, table: &str, filters: &[Filter]) -> usize {
        self.state()
            .tables
            .get(table)
            .map_or(0, |rows| rows.iter().filter(|row| matches_all(row, filters)).count())
    }

    /// Sizes of the successful write requests made to `table`, in order.
    pub fn batch_sizes(&self, table: &str) -> Vec<usize> {
        self.state()
            .batch_sizes
            .get(table)
            .cloned()
            .unwrap_or_default()
    }
}

#[async_trait]
impl ProfileStore for InMemoryProfileStore {
    async fn count_where(&self, table: &str, filters: &[Filter]) -> Result<u64, StoreError> {
        let state = self.state();
        state.check_filters(table, filters)?;
        let failing_country = filters.iter().find_map(|filter| match filter {
            Filter::Eq { column, value } if column == "country" => value
                .as_str()
                .filter(|country| state.failing_counts.contains(*country)),
            _ => None,
        });
        if let Some(country) = failing_country {
            return Err(StoreError::transport(format!("count failed for {country}")));
        }
        let count = state
            .tables
            .get(table)
            .map_or(0, |rows| rows.iter().filter(|row| matches_all(row, filters)).count());
        Ok(count as u64)
    }

    async fn insert_batch(&self, table: &str, rows: &[StoreRow]) -> Result<(), StoreError> {
        let mut state = self.state();
        state.begin_write(table, rows)?;
        state
            .tables
            .entry(table.to_owned())
            .or_default()
            .extend(rows.iter().cloned());
        Ok(())
    }

    async fn upsert_batch(
        &self,
        table: &str,
        rows: &[StoreRow],
        on_conflict: &str,
    ) -> Result<Vec<StoreRow>, StoreError> {
        let mut state = self.state();
        state.begin_write(table, rows)?;
        let conflict: Vec<&str> = on_conflict.split(',').map(str::trim).collect();
        let stored_rows = state.tables.entry(table.to_owned()).or_default();
        let mut returned = Vec::with_capacity(rows.len());
        for incoming in rows {
            match stored_rows
                .iter_mut()
                .find(|stored| same_key(stored, incoming, &conflict))
            {
                Some(stored) => {
                    for (column, value) in incoming {
                        stored.insert(column.clone(), value.clone());
                    }
                    returned.push(stored.clone());
                }
                None => {
                    stored_rows.push(incoming.clone());
                    returned.push(incoming.clone());
                }
            }
        }
        Ok(returned)
    }

    async fn delete_where(&self, table: &str, filters: &[Filter]) -> Result<u64, StoreError> {
        let mut state = self.state();
        state.check_filters(table, filters)?;
        let Some(rows) = state.tables.get_mut(table) else {
            return Ok(0);
        };
        let before = rows.len();
        rows.retain(|row| !matches_all(row, filters));
        Ok((before - rows.len()) as u64)
    }
}

/// Build a row from a JSON object literal; non-objects yield an empty row.
pub fn row(value: Value) -> StoreRow {
    match value {
        Value::Object(row) => row,
        _ => StoreRow::new(),
    }
}
