//! Driving port for producer mutations.
//!
//! HTTP handlers call [`ProducerCommand`] to create, replace, delete, and
//! bulk-generate producers. Implementations validate every payload before
//! it reaches the record store.

use async_trait::async_trait;

use crate::domain::{Error, ProducerId, ProducerPayload, ProducerRecord};

/// Smallest accepted mock batch.
pub const MIN_MOCK_QUANTITY: u32 = 1;

/// Largest accepted mock batch.
pub const MAX_MOCK_QUANTITY: u32 = 1000;

/// Batch size used when the caller does not name one.
pub const DEFAULT_MOCK_QUANTITY: u32 = 10;

/// Driving port for producer mutations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProducerCommand: Send + Sync {
    /// Validate and store a new producer.
    ///
    /// # Errors
    ///
    /// `invalid_request`, `invalid_document_format`, `area_constraint_violation`
    /// or `duplicate_document` when the payload is rejected.
    async fn create(&self, payload: ProducerPayload) -> Result<ProducerRecord, Error>;

    /// Validate and replace every field of an existing producer.
    ///
    /// # Errors
    ///
    /// `not_found` when `id` is unknown, otherwise the same rejections as
    /// [`ProducerCommand::create`]. A rejected update leaves the stored
    /// record untouched.
    async fn update(&self, id: ProducerId, payload: ProducerPayload)
    -> Result<ProducerRecord, Error>;

    /// Permanently remove a producer.
    ///
    /// # Errors
    ///
    /// `not_found` when `id` is unknown.
    async fn delete(&self, id: ProducerId) -> Result<(), Error>;

    /// Generate and store `quantity` synthetic producers in one transaction.
    ///
    /// Generated records whose document number is already stored are
    /// skipped. Returns the number of records inserted.
    ///
    /// # Errors
    ///
    /// `invalid_request` when `quantity` is outside
    /// [`MIN_MOCK_QUANTITY`]`..=`[`MAX_MOCK_QUANTITY`].
    async fn generate_mock(&self, quantity: u32) -> Result<usize, Error>;
}
