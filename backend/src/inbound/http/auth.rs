//! Bearer credential checks for the seeding endpoints.
//!
//! Keep the HTTP modules focused on request/response mapping by concentrating
//! credential checks here.

use actix_web::HttpRequest;
use actix_web::http::header::AUTHORIZATION;

use crate::domain::Error;

use super::ApiResult;

const BEARER_PREFIX: &str = "bearer ";

/// Token carried by an `Authorization: Bearer <token>` value, if any.
fn bearer_token(header: &str) -> Option<&str> {
    let prefix = header.get(..BEARER_PREFIX.len())?;
    if !prefix.eq_ignore_ascii_case(BEARER_PREFIX) {
        return None;
    }
    header
        .get(BEARER_PREFIX.len()..)
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// Check a raw `Authorization` header value.
///
/// Any non-empty bearer token passes unless `expected` is set, in which case
/// the token must match it exactly.
pub fn authorize(header: Option<&str>, expected: Option<&str>) -> ApiResult<()> {
    let token = header
        .and_then(bearer_token)
        .ok_or_else(|| Error::unauthorized("Missing bearer token"))?;
    match expected {
        Some(expected) if token != expected => Err(Error::unauthorized("Invalid bearer token")),
        _ => Ok(()),
    }
}

/// Check the `Authorization` header of `req`.
pub fn authorize_request(req: &HttpRequest, expected: Option<&str>) -> ApiResult<()> {
    let header = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok());
    authorize(header, expected)
}
