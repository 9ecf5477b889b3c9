//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{ProducerCommand, ProducerQuery};

/// Dependency bundle for HTTP handlers.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use producer_registry::domain::ProducerRegistryService;
/// use producer_registry::inbound::http::state::HttpState;
/// use producer_registry::outbound::memory::InMemoryProducerRepository;
/// use producer_registry::outbound::mock_data::GeneratedProducerSource;
///
/// let service = Arc::new(ProducerRegistryService::new(
///     Arc::new(InMemoryProducerRepository::new()),
///     Arc::new(GeneratedProducerSource::from_seed(1)),
/// ));
/// let state = HttpState::new(service.clone(), service);
/// let _commands = state.producers.clone();
/// ```
#[derive(Clone)]
pub struct HttpState {
    pub producers: Arc<dyn ProducerCommand>,
    pub producers_query: Arc<dyn ProducerQuery>,
}

impl HttpState {
    pub fn new(
        producers: Arc<dyn ProducerCommand>,
        producers_query: Arc<dyn ProducerQuery>,
    ) -> Self {
        Self {
            producers,
            producers_query,
        }
    }
}
