//! Domain types, rules, and services for the producer registry.
//!
//! Purpose: keep the registry's behaviour independent of HTTP and Postgres.
//! Inbound adapters call the driving ports in [`ports`]; outbound adapters
//! implement the driven ones.
//!
//! Public surface:
//! - [`Error`] / [`ErrorCode`]: transport-agnostic failure payload.
//! - [`ProducerPayload`], [`ProducerDetails`], [`ProducerRecord`]: the
//!   producer before validation, after validation, and once stored.
//! - [`validate_payload`]: field and cross-field rules.
//! - [`ProducerRegistryService`]: the driving-port implementation.

pub mod error;
pub mod ports;
pub mod producer;
pub mod registry_service;
pub mod trace_id;
pub mod validation;

pub use self::error::{Error, ErrorCode, TRACE_ID_HEADER};
pub use self::producer::{
    DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT, PageRequest, ProducerDetails, ProducerId, ProducerPayload,
    ProducerRecord,
};
pub use self::registry_service::ProducerRegistryService;
pub use self::trace_id::TraceId;
pub use self::validation::validate_payload;
