//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Concrete implementation of the producer repository port backed by
//! PostgreSQL via `diesel-async` and `bb8` connection pooling.
//!
//! # Architecture
//!
//! - **Thin adapter**: the repository only translates between Diesel rows
//!   and domain types. Validation lives in the domain.
//! - **Internal models**: row structs (`models.rs`) and the table definition
//!   (`schema.rs`) never leave this module.
//! - **Database-enforced invariants**: the unique document number and the
//!   land-use `CHECK` back up the domain rules under concurrent writers.
//! - **Strongly typed errors**: Diesel and pool failures map onto
//!   [`ProducerRepositoryError`](crate::domain::ports::ProducerRepositoryError).
//!
//! # Example
//!
//! ```rust,no_run
//! use producer_registry::outbound::persistence::{
//!     DbPool, DieselProducerRepository, PoolConfig, run_pending_migrations,
//! };
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let url = "postgres://localhost/producer_registry";
//! run_pending_migrations(url)?;
//! let pool = DbPool::new(PoolConfig::new(url)).await?;
//! let repository = DieselProducerRepository::new(pool);
//! # let _ = repository;
//! # Ok(())
//! # }
//! ```

mod diesel_producer_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_producer_repository::DieselProducerRepository;
pub use migrations::{MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
