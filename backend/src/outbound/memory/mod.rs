//! In-process producer store.
//!
//! Backs the service when it runs with `in_memory = true` and drives the HTTP
//! integration tests without Postgres. It honours the same contract as the
//! Diesel adapter: monotonic identifiers that are never reused, unique
//! document numbers, and all-or-nothing writes.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::ports::{ProducerRepository, ProducerRepositoryError};
use crate::domain::{PageRequest, ProducerDetails, ProducerId, ProducerRecord};

#[derive(Debug, Default)]
struct Store {
    last_id: i64,
    records: BTreeMap<i64, ProducerDetails>,
}

impl Store {
    fn document_owner(&self, document_number: &str) -> Option<i64> {
        self.records
            .iter()
            .find(|(_, details)| details.document_number() == document_number)
            .map(|(id, _)| *id)
    }

    fn next_id(&mut self) -> Result<i64, ProducerRepositoryError> {
        let id = self
            .last_id
            .checked_add(1)
            .ok_or_else(|| ProducerRepositoryError::query("identifier sequence exhausted"))?;
        self.last_id = id;
        Ok(id)
    }

    fn record(id: i64, details: &ProducerDetails) -> ProducerRecord {
        ProducerRecord::new(ProducerId::new(id), details.clone())
    }
}

/// `Mutex`-guarded in-memory implementation of [`ProducerRepository`].
#[derive(Debug, Default)]
pub struct InMemoryProducerRepository {
    store: Mutex<Store>,
}

impl InMemoryProducerRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Store>, ProducerRepositoryError> {
        self.store
            .lock()
            .map_err(|_| ProducerRepositoryError::query("in-memory store lock poisoned"))
    }
}

#[async_trait]
impl ProducerRepository for InMemoryProducerRepository {
    async fn insert(
        &self,
        details: &ProducerDetails,
    ) -> Result<ProducerRecord, ProducerRepositoryError> {
        let mut store = self.lock()?;
        if store.document_owner(details.document_number()).is_some() {
            return Err(ProducerRepositoryError::duplicate_document(
                details.document_number(),
            ));
        }
        let id = store.next_id()?;
        store.records.insert(id, details.clone());
        Ok(Store::record(id, details))
    }

    async fn insert_batch(
        &self,
        batch: &[ProducerDetails],
    ) -> Result<usize, ProducerRepositoryError> {
        let mut store = self.lock()?;
        let mut inserted = 0;
        for details in batch {
            if store.document_owner(details.document_number()).is_some() {
                continue;
            }
            let id = store.next_id()?;
            store.records.insert(id, details.clone());
            inserted += 1;
        }
        Ok(inserted)
    }

    async fn find_by_id(
        &self,
        id: ProducerId,
    ) -> Result<Option<ProducerRecord>, ProducerRepositoryError> {
        let store = self.lock()?;
        Ok(store
            .records
            .get(&id.get())
            .map(|details| Store::record(id.get(), details)))
    }

    async fn find_by_document(
        &self,
        document_number: &str,
    ) -> Result<Option<ProducerRecord>, ProducerRepositoryError> {
        let store = self.lock()?;
        Ok(store.document_owner(document_number).and_then(|id| {
            store
                .records
                .get(&id)
                .map(|details| Store::record(id, details))
        }))
    }

    async fn list(&self, page: PageRequest) -> Result<Vec<ProducerRecord>, ProducerRepositoryError> {
        let store = self.lock()?;
        let offset = usize::try_from(page.offset()).unwrap_or(usize::MAX);
        let limit = usize::try_from(page.limit()).unwrap_or(0);
        Ok(store
            .records
            .iter()
            .skip(offset)
            .take(limit)
            .map(|(id, details)| Store::record(*id, details))
            .collect())
    }

    async fn replace(
        &self,
        id: ProducerId,
        details: &ProducerDetails,
    ) -> Result<Option<ProducerRecord>, ProducerRepositoryError> {
        let mut store = self.lock()?;
        if !store.records.contains_key(&id.get()) {
            return Ok(None);
        }
        if store
            .document_owner(details.document_number())
            .is_some_and(|owner| owner != id.get())
        {
            return Err(ProducerRepositoryError::duplicate_document(
                details.document_number(),
            ));
        }
        store.records.insert(id.get(), details.clone());
        Ok(Some(Store::record(id.get(), details)))
    }

    async fn delete(&self, id: ProducerId) -> Result<bool, ProducerRepositoryError> {
        let mut store = self.lock()?;
        Ok(store.records.remove(&id.get()).is_some())
    }
}
