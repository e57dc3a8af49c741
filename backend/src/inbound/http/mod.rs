//! HTTP inbound adapter exposing the seeding endpoints.

pub mod auth;
pub mod error;
pub mod seed_profiles;
pub mod state;

pub use error::ApiResult;
