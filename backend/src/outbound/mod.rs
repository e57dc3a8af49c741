//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **postgrest**: reqwest-backed profile store speaking the PostgREST
//!   dialect used by Supabase.
//!
//! Adapters are thin translators between domain types and wire formats.
//! They contain no business logic.

pub mod postgrest;
