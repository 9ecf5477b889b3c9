//! Synthetic producer source backed by the `mock-producers` generator.

use std::sync::{Mutex, PoisonError};

use mock_producers::{ProducerGenerator, ProducerSeed};

use crate::domain::ProducerPayload;
use crate::domain::ports::SyntheticProducerSource;

/// Adapts [`ProducerGenerator`] to the [`SyntheticProducerSource`] port.
///
/// The generator is stateful, so calls are serialised behind a mutex. A
/// poisoned lock still yields the generator; its state is a plain RNG and
/// remains usable.
#[derive(Debug)]
pub struct GeneratedProducerSource {
    generator: Mutex<ProducerGenerator>,
}

impl GeneratedProducerSource {
    /// Source seeded from operating-system entropy.
    pub fn from_entropy() -> Self {
        Self::new(ProducerGenerator::from_entropy())
    }

    /// Deterministic source; the same seed yields the same producers.
    pub fn from_seed(seed: u64) -> Self {
        Self::new(ProducerGenerator::from_seed(seed))
    }

    fn new(generator: ProducerGenerator) -> Self {
        Self {
            generator: Mutex::new(generator),
        }
    }
}

fn to_payload(seed: ProducerSeed) -> ProducerPayload {
    ProducerPayload {
        document_number: seed.document_number,
        producer_name: seed.producer_name,
        farm_name: seed.farm_name,
        city: seed.city,
        state: seed.state,
        total_area: seed.total_area,
        farmable_area: seed.farmable_area,
        vegetation_area: seed.vegetation_area,
        crops: seed.crops,
    }
}

impl SyntheticProducerSource for GeneratedProducerSource {
    fn generate(&self, count: usize) -> Vec<ProducerPayload> {
        let mut generator = self
            .generator
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        generator
            .generate(count)
            .into_iter()
            .map(to_payload)
            .collect()
    }
}
