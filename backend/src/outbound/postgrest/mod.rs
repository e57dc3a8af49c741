//! PostgREST outbound adapter.
//!
//! This module provides a thin HTTP implementation of the `ProfileStore`
//! port against a Supabase-style `/rest/v1` endpoint.

mod http_store;

pub use http_store::PostgrestProfileStore;
