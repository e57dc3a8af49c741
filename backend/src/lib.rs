//! Demo-profile seeding service.
//!
//! Seeds and clears synthetic dating-app profiles in a PostgREST store over
//! two HTTP endpoints: a randomized legacy strategy and a deterministic one
//! whose identities derive from a seed string.

pub mod config;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use inbound::http::seed_profiles::configure;
pub use middleware::Cors;
