//! HTTP server configuration object and helpers.

use producer_registry::outbound::persistence::DbPool;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: String,
    pub(crate) db_pool: Option<DbPool>,
    pub(crate) mock_seed: Option<u64>,
}

impl ServerConfig {
    /// Configuration serving from the in-memory store.
    #[must_use]
    pub fn new(bind_addr: impl Into<String>) -> Self {
        Self {
            bind_addr: bind_addr.into(),
            db_pool: None,
            mock_seed: None,
        }
    }

    /// Serve from Postgres through `pool` instead of the in-memory store.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }

    /// Seed the synthetic producer generator for reproducible mock batches.
    #[must_use]
    pub fn with_mock_seed(mut self, seed: Option<u64>) -> Self {
        self.mock_seed = seed;
        self
    }
}
