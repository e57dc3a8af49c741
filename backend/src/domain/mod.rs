//! Domain services and types.
//!
//! Purpose: hold the seeding engine behind a transport-agnostic boundary.
//! Adapters under `inbound` and `outbound` depend on this module, never the
//! other way round.
//!
//! Public surface:
//! - Error (alias to `error::Error`): API error response payload.
//! - ErrorCode (alias to `error::ErrorCode`): stable error identifier.
//! - `ports`: the profile store port.
//! - `seeding`: planning, writing, and clearing demo profiles.

pub mod error;
pub mod ports;
pub mod seeding;

pub use self::error::{Error, ErrorCode};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use demo_seeder::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::unauthorized("Missing bearer token"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
