//! Schema-drift classification.
//!
//! The store reports a missing column or table only through its error text,
//! so detection inspects the lowercased message. Names are matched as whole
//! identifier tokens: `seed` does not match `seed_source`.

use crate::domain::ports::StoreError;

const ABSENCE_PHRASES: [&str; 2] = ["does not exist", "could not find"];

fn tokens(message: &str) -> impl Iterator<Item = &str> {
    message
        .split(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .filter(|token| !token.is_empty())
}

fn names_identifier(message: &str, name: &str) -> bool {
    tokens(message).any(|token| token == name)
}

fn reports_absence(message: &str) -> bool {
    ABSENCE_PHRASES.iter().any(|phrase| message.contains(phrase))
}

/// Whether `message` says `column` is absent.
pub fn is_missing_column(message: &str, column: &str) -> bool {
    let lowered = message.to_lowercase();
    lowered.contains("column")
        && names_identifier(&lowered, &column.to_lowercase())
        && reports_absence(&lowered)
}

/// Whether `message` says `table` is absent.
pub fn is_missing_table(message: &str, table: &str) -> bool {
    let lowered = message.to_lowercase();
    (lowered.contains("relation") || lowered.contains("table"))
        && !lowered.contains("column")
        && names_identifier(&lowered, &table.to_lowercase())
        && reports_absence(&lowered)
}

/// First optional column, not yet dropped, that `error` reports missing.
pub fn missing_optional_column(
    error: &StoreError,
    optional: &[&'static str],
    dropped: &[&'static str],
) -> Option<&'static str> {
    optional
        .iter()
        .copied()
        .filter(|column| !dropped.contains(column))
        .find(|column| is_missing_column(error.message(), column))
}

/// Whether `error` reports that `table` or a `column` on it is missing.
pub fn is_capability_gap(error: &StoreError, table: &str, column: &str) -> bool {
    is_missing_table(error.message(), table) || is_missing_column(error.message(), column)
}
