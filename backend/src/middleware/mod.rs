//! Request middleware.
//!
//! Purpose: Define middleware components for cross-cutting request concerns
//! such as CORS.

pub mod cors;

pub use cors::Cors;
