//! Domain ports for the hexagonal boundary.
//!
//! Driving ports ([`ProducerCommand`], [`ProducerQuery`]) are what inbound
//! adapters call. Driven ports ([`ProducerRepository`],
//! [`SyntheticProducerSource`]) are what the registry service depends on.

mod macros;
pub(crate) use macros::define_port_error;

mod producer_command;
mod producer_query;
mod producer_repository;
mod synthetic_producer_source;

#[cfg(test)]
pub use producer_command::MockProducerCommand;
pub use producer_command::{
    DEFAULT_MOCK_QUANTITY, MAX_MOCK_QUANTITY, MIN_MOCK_QUANTITY, ProducerCommand,
};
#[cfg(test)]
pub use producer_query::MockProducerQuery;
pub use producer_query::ProducerQuery;
#[cfg(test)]
pub use producer_repository::MockProducerRepository;
pub use producer_repository::{ProducerRepository, ProducerRepositoryError};
#[cfg(test)]
pub use synthetic_producer_source::MockSyntheticProducerSource;
pub use synthetic_producer_source::SyntheticProducerSource;
