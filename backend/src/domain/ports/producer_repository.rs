//! Port for producer persistence.
//!
//! The [`ProducerRepository`] trait is the record store: it assigns
//! identifiers, enforces document-number uniqueness, and applies each write
//! atomically. It accepts only validated [`ProducerDetails`]; the registry
//! service owns every other rule.

use async_trait::async_trait;

use crate::domain::{PageRequest, ProducerDetails, ProducerId, ProducerRecord};

use super::define_port_error;

define_port_error! {
    /// Errors raised by producer repository adapters.
    pub enum ProducerRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "producer repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "producer repository query failed: {message}",
        /// Another record already holds the document number.
        DuplicateDocument { document_number: String } =>
            "document number {document_number} is already registered",
    }
}

/// Port for producer storage and retrieval.
///
/// # Identifiers
///
/// Identifiers are assigned by the store on insert, grow monotonically, and
/// are never reissued after a delete.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProducerRepository: Send + Sync {
    /// Store a new producer under a fresh identifier.
    ///
    /// Fails with [`ProducerRepositoryError::DuplicateDocument`] when the
    /// document number is taken.
    async fn insert(
        &self,
        details: &ProducerDetails,
    ) -> Result<ProducerRecord, ProducerRepositoryError>;

    /// Store many producers in one transaction, skipping any whose document
    /// number is already stored. Returns how many rows were inserted.
    async fn insert_batch(
        &self,
        batch: &[ProducerDetails],
    ) -> Result<usize, ProducerRepositoryError>;

    async fn find_by_id(
        &self,
        id: ProducerId,
    ) -> Result<Option<ProducerRecord>, ProducerRepositoryError>;

    async fn find_by_document(
        &self,
        document_number: &str,
    ) -> Result<Option<ProducerRecord>, ProducerRepositoryError>;

    /// Records in ascending identifier order.
    async fn list(&self, page: PageRequest) -> Result<Vec<ProducerRecord>, ProducerRepositoryError>;

    /// Replace every field of an existing producer.
    ///
    /// Returns `None` when no record has `id`.
    async fn replace(
        &self,
        id: ProducerId,
        details: &ProducerDetails,
    ) -> Result<Option<ProducerRecord>, ProducerRepositoryError>;

    /// Remove a producer. Returns `false` when no record has `id`.
    async fn delete(&self, id: ProducerId) -> Result<bool, ProducerRepositoryError>;
}
