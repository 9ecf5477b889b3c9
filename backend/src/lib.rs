//! Producer registry service library.
//!
//! Hexagonal layout: [`domain`] holds the rules and ports, [`inbound`] the
//! HTTP adapter, and [`outbound`] the Postgres, in-memory, and synthetic data
//! adapters.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
