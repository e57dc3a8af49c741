//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports and remain testable without I/O.

use std::sync::Arc;

use mockable::Clock;

use crate::domain::Error;
use crate::domain::ports::ProfileStore;
use crate::domain::seeding::{SeedStrategy, SeedingService, WriteLimits};

/// Message returned on every request when store credentials are absent.
pub const MISSING_STORE_CONFIG: &str = "Missing SUPABASE_URL or SUPABASE_SERVICE_ROLE_KEY";

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Store adapter; `None` when credentials are not configured.
    pub store: Option<Arc<dyn ProfileStore>>,
    /// Write chunk sizes.
    pub limits: WriteLimits,
    /// Exact bearer token required, when configured.
    pub admin_token: Option<String>,
    /// Time source for row timestamps.
    pub clock: Arc<dyn Clock>,
    /// Fixed randomness seed; tests only.
    pub rng_seed: Option<u64>,
}

impl HttpState {
    /// Construct state with default limits and no admin token.
    pub fn new(store: Option<Arc<dyn ProfileStore>>, clock: Arc<dyn Clock>) -> Self {
        Self {
            store,
            limits: WriteLimits::default(),
            admin_token: None,
            clock,
            rng_seed: None,
        }
    }

    /// Replace the write limits.
    pub fn with_limits(mut self, limits: WriteLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Require `token` as the exact bearer credential.
    pub fn with_admin_token(mut self, token: Option<String>) -> Self {
        self.admin_token = token;
        self
    }

    /// Fix the randomness seed used by seeding runs.
    pub fn with_rng_seed(mut self, seed: Option<u64>) -> Self {
        self.rng_seed = seed;
        self
    }

    /// Build the seeding service for `strategy`.
    ///
    /// # Errors
    ///
    /// Returns an internal [`Error`] when the store is not configured.
    pub fn seeding_service(&self, strategy: SeedStrategy) -> Result<SeedingService, Error> {
        let store = self
            .store
            .clone()
            .ok_or_else(|| Error::internal(MISSING_STORE_CONFIG))?;
        Ok(
            SeedingService::new(store, strategy, self.limits, Arc::clone(&self.clock))
                .with_rng_seed(self.rng_seed),
        )
    }
}
