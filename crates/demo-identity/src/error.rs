//! Error types for the demo-identity crate.

use thiserror::Error;

/// Errors that can occur while synthesizing an identity.
///
/// Every pool the generators draw from is a compile-time constant, so these
/// only surface when a partition is declared with an empty pool and no
/// fallback applies.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// A pool that must supply a value was empty.
    #[error("cannot draw from empty {pool} pool")]
    EmptyPool {
        /// Name of the pool that was empty.
        pool: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_pool_formats_correctly() {
        let err = GenerationError::EmptyPool { pool: "names" };
        assert_eq!(err.to_string(), "cannot draw from empty names pool");
    }
}
