//! Driving port for producer reads.

use async_trait::async_trait;

use crate::domain::{Error, PageRequest, ProducerId, ProducerRecord};

/// Driving port for producer lookups and listings.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProducerQuery: Send + Sync {
    /// Fetch one producer, or `not_found`.
    async fn get(&self, id: ProducerId) -> Result<ProducerRecord, Error>;

    /// Producers in ascending identifier order.
    async fn list(&self, page: PageRequest) -> Result<Vec<ProducerRecord>, Error>;
}
