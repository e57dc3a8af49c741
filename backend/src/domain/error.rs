//! Domain-level error types.
//!
//! These errors are transport agnostic. The HTTP adapter maps them to
//! status codes and flattens `details` into the JSON envelope.

use serde::Serialize;
use serde_json::{Map, Value};

/// Stable machine-readable error code describing the failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[non_exhaustive]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The request is malformed or names an unknown mode.
    InvalidRequest,
    /// The bearer credential is absent or does not match.
    Unauthorized,
    /// The endpoint only accepts `POST`.
    MethodNotAllowed,
    /// Configuration, store, or write failure.
    InternalError,
}

/// Domain error payload.
///
/// `details` carries extra top-level fields for the response envelope, such
/// as the failing `country` or the `at` position of a failed batch.
///
/// # Examples
/// ```
/// use demo_seeder::domain::{Error, ErrorCode};
/// use serde_json::json;
///
/// let err = Error::internal("count failed").with_detail("country", json!("Kenya"));
/// assert_eq!(err.code(), ErrorCode::InternalError);
/// assert_eq!(err.details().get("country"), Some(&json!("Kenya")));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    code: ErrorCode,
    message: String,
    details: Map<String, Value>,
}

impl Error {
    /// Create a new error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: Map::new(),
        }
    }

    /// Stable machine-readable error code.
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Human-readable message returned to adapters.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Supplementary top-level fields.
    pub fn details(&self) -> &Map<String, Value> {
        &self.details
    }

    /// Attach one supplementary field, replacing any previous value.
    pub fn with_detail(mut self, key: impl Into<String>, value: Value) -> Self {
        self.details.insert(key.into(), value);
        self
    }

    /// Convenience constructor for [`ErrorCode::InvalidRequest`].
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidRequest, message)
    }

    /// Convenience constructor for [`ErrorCode::Unauthorized`].
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Unauthorized, message)
    }

    /// Convenience constructor for [`ErrorCode::MethodNotAllowed`].
    pub fn method_not_allowed(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::MethodNotAllowed, message)
    }

    /// Convenience constructor for [`ErrorCode::InternalError`].
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    /// Render the response envelope `{ ok: false, error, code, ...details }`.
    ///
    /// Detail keys never override the envelope keys.
    pub fn to_body(&self) -> Value {
        let mut body = self.details.clone();
        body.insert("ok".to_owned(), Value::Bool(false));
        body.insert("error".to_owned(), Value::String(self.message.clone()));
        body.insert(
            "code".to_owned(),
            serde_json::to_value(self.code).unwrap_or(Value::Null),
        );
        Value::Object(body)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}
