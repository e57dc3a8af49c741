//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
mod profile_store;

pub(crate) use macros::define_port_error;

#[cfg(test)]
pub use profile_store::MockProfileStore;
pub use profile_store::{Filter, ProfileStore, StoreError, StoreRow};
