//! Producer registry service.
//!
//! Implements the driving ports on top of a [`ProducerRepository`] and a
//! [`SyntheticProducerSource`]. Every mutating call validates its payload
//! before touching the store, and document-number uniqueness is checked by
//! lookup first so the common case gets a precise error. The store's unique
//! constraint still catches concurrent writers.

use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::{info, warn};

use crate::domain::ports::{
    MAX_MOCK_QUANTITY, MIN_MOCK_QUANTITY, ProducerCommand, ProducerQuery, ProducerRepository,
    ProducerRepositoryError, SyntheticProducerSource,
};
use crate::domain::{
    Error, PageRequest, ProducerDetails, ProducerId, ProducerPayload, ProducerRecord,
    validate_payload,
};

/// Registry service implementing [`ProducerCommand`] and [`ProducerQuery`].
#[derive(Clone)]
pub struct ProducerRegistryService<R, G> {
    repository: Arc<R>,
    generator: Arc<G>,
}

impl<R, G> ProducerRegistryService<R, G> {
    /// Create a service over the given store and generator.
    pub fn new(repository: Arc<R>, generator: Arc<G>) -> Self {
        Self {
            repository,
            generator,
        }
    }
}

fn producer_not_found(id: ProducerId) -> Error {
    Error::not_found("producer not found").with_context(json!({ "id": id.get() }))
}

fn map_repository_error(error: ProducerRepositoryError) -> Error {
    match error {
        ProducerRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("producer repository unavailable: {message}"))
        }
        ProducerRepositoryError::Query { message } => {
            Error::internal(format!("producer repository error: {message}"))
        }
        ProducerRepositoryError::DuplicateDocument { document_number } => {
            Error::duplicate_document(document_number)
        }
    }
}

fn validated(payload: &ProducerPayload) -> Result<ProducerDetails, Error> {
    validate_payload(payload).inspect_err(|err| {
        warn!(code = ?err.code(), message = err.message(), "producer payload rejected");
    })
}

impl<R, G> ProducerRegistryService<R, G>
where
    R: ProducerRepository,
    G: SyntheticProducerSource,
{
    /// Fails when a producer other than `owner` holds `document_number`.
    async fn ensure_document_available(
        &self,
        document_number: &str,
        owner: Option<ProducerId>,
    ) -> Result<(), Error> {
        let existing = self
            .repository
            .find_by_document(document_number)
            .await
            .map_err(map_repository_error)?;
        match existing {
            Some(record) if Some(record.id()) != owner => {
                warn!(existing_id = %record.id(), "duplicate document number rejected");
                Err(Error::duplicate_document(document_number))
            }
            _ => Ok(()),
        }
    }

    fn mock_batch(&self, quantity: u32) -> Result<Vec<ProducerDetails>, Error> {
        let count = usize::try_from(quantity)
            .map_err(|_| Error::internal("mock quantity exceeds addressable memory"))?;
        let mut seen = HashSet::with_capacity(count);
        let mut batch = Vec::with_capacity(count);
        for payload in self.generator.generate(count) {
            let details = validate_payload(&payload).map_err(|err| {
                Error::internal(format!(
                    "generated producer failed validation: {}",
                    err.message()
                ))
            })?;
            if seen.insert(details.document_number().to_owned()) {
                batch.push(details);
            }
        }
        Ok(batch)
    }
}

#[async_trait]
impl<R, G> ProducerCommand for ProducerRegistryService<R, G>
where
    R: ProducerRepository,
    G: SyntheticProducerSource,
{
    async fn create(&self, payload: ProducerPayload) -> Result<ProducerRecord, Error> {
        let details = validated(&payload)?;
        self.ensure_document_available(details.document_number(), None)
            .await?;
        let record = self
            .repository
            .insert(&details)
            .await
            .map_err(map_repository_error)?;
        info!(producer_id = %record.id(), "producer created");
        Ok(record)
    }

    async fn update(
        &self,
        id: ProducerId,
        payload: ProducerPayload,
    ) -> Result<ProducerRecord, Error> {
        let existing = self
            .repository
            .find_by_id(id)
            .await
            .map_err(map_repository_error)?;
        if existing.is_none() {
            return Err(producer_not_found(id));
        }

        let details = validated(&payload)?;
        self.ensure_document_available(details.document_number(), Some(id))
            .await?;
        let record = self
            .repository
            .replace(id, &details)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| producer_not_found(id))?;
        info!(producer_id = %id, "producer updated");
        Ok(record)
    }

    async fn delete(&self, id: ProducerId) -> Result<(), Error> {
        let removed = self
            .repository
            .delete(id)
            .await
            .map_err(map_repository_error)?;
        if !removed {
            return Err(producer_not_found(id));
        }
        info!(producer_id = %id, "producer deleted");
        Ok(())
    }

    async fn generate_mock(&self, quantity: u32) -> Result<usize, Error> {
        if !(MIN_MOCK_QUANTITY..=MAX_MOCK_QUANTITY).contains(&quantity) {
            warn!(quantity, "mock quantity out of range");
            return Err(Error::invalid_request(format!(
                "qty must be between {MIN_MOCK_QUANTITY} and {MAX_MOCK_QUANTITY}"
            ))
            .with_context(json!({
                "field": "qty",
                "code": "out_of_range",
                "min": MIN_MOCK_QUANTITY,
                "max": MAX_MOCK_QUANTITY,
            })));
        }

        let batch = self.mock_batch(quantity)?;
        let inserted = self
            .repository
            .insert_batch(&batch)
            .await
            .map_err(map_repository_error)?;
        info!(requested = quantity, inserted, "mock producers generated");
        Ok(inserted)
    }
}

#[async_trait]
impl<R, G> ProducerQuery for ProducerRegistryService<R, G>
where
    R: ProducerRepository,
    G: SyntheticProducerSource,
{
    async fn get(&self, id: ProducerId) -> Result<ProducerRecord, Error> {
        self.repository
            .find_by_id(id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| producer_not_found(id))
    }

    async fn list(&self, page: PageRequest) -> Result<Vec<ProducerRecord>, Error> {
        self.repository
            .list(page)
            .await
            .map_err(map_repository_error)
    }
}

#[cfg(test)]
#[path = "registry_service_tests.rs"]
mod tests;
