//! Port for synthetic producer generation.
//!
//! The registry service draws raw payloads from a [`SyntheticProducerSource`] and
//! validates them like any caller input before storing them.

use crate::domain::ProducerPayload;

/// Source of plausible random producers.
#[cfg_attr(test, mockall::automock)]
pub trait SyntheticProducerSource: Send + Sync {
    /// Draw `count` producers.
    fn generate(&self, count: usize) -> Vec<ProducerPayload>;
}
