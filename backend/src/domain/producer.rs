//! Producer records and the payloads that create or replace them.
//!
//! A [`ProducerPayload`] carries raw caller input. It only becomes
//! [`ProducerDetails`] by passing [`validate_payload`](super::validate_payload),
//! so every [`ProducerRecord`] handed to or returned from a repository
//! satisfies the registry invariants:
//!
//! - `farmable_area + vegetation_area <= total_area`, all finite and >= 0;
//! - the document number is a digits-only CPF or CNPJ with valid check digits;
//! - names and city are trimmed and non-blank, the state is two uppercase
//!   letters, and the crop list is non-empty.

use serde::{Deserialize, Serialize};

/// Store-assigned producer identifier. Never reused after deletion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProducerId(i64);

impl ProducerId {
    /// Wrap a raw identifier.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Raw identifier value.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for ProducerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unvalidated producer fields as submitted by a caller.
#[derive(Debug, Clone, PartialEq)]
pub struct ProducerPayload {
    pub document_number: String,
    pub producer_name: String,
    pub farm_name: String,
    pub city: String,
    pub state: String,
    pub total_area: f64,
    pub farmable_area: f64,
    pub vegetation_area: f64,
    pub crops: Vec<String>,
}

/// Validated producer fields, ready to be stored.
#[derive(Debug, Clone, PartialEq)]
pub struct ProducerDetails {
    pub(crate) document_number: String,
    pub(crate) producer_name: String,
    pub(crate) farm_name: String,
    pub(crate) city: String,
    pub(crate) state: String,
    pub(crate) total_area: f64,
    pub(crate) farmable_area: f64,
    pub(crate) vegetation_area: f64,
    pub(crate) crops: Vec<String>,
}

impl ProducerDetails {
    /// Digits-only CPF or CNPJ.
    pub fn document_number(&self) -> &str {
        &self.document_number
    }

    pub fn producer_name(&self) -> &str {
        &self.producer_name
    }

    pub fn farm_name(&self) -> &str {
        &self.farm_name
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    /// Uppercase two-letter state code.
    pub fn state(&self) -> &str {
        &self.state
    }

    /// Total area in hectares.
    pub fn total_area(&self) -> f64 {
        self.total_area
    }

    /// Farmable area in hectares.
    pub fn farmable_area(&self) -> f64 {
        self.farmable_area
    }

    /// Native vegetation area in hectares.
    pub fn vegetation_area(&self) -> f64 {
        self.vegetation_area
    }

    /// Crops in the order they were submitted.
    pub fn crops(&self) -> &[String] {
        &self.crops
    }
}

/// A stored producer.
#[derive(Debug, Clone, PartialEq)]
pub struct ProducerRecord {
    id: ProducerId,
    details: ProducerDetails,
}

impl ProducerRecord {
    /// Pair an identifier with the fields stored under it.
    pub fn new(id: ProducerId, details: ProducerDetails) -> Self {
        Self { id, details }
    }

    pub fn id(&self) -> ProducerId {
        self.id
    }

    pub fn details(&self) -> &ProducerDetails {
        &self.details
    }

    /// Split into identifier and fields.
    pub fn into_parts(self) -> (ProducerId, ProducerDetails) {
        (self.id, self.details)
    }
}

/// Default number of records returned by a listing.
pub const DEFAULT_PAGE_LIMIT: i64 = 10;

/// Largest number of records a single listing may return.
pub const MAX_PAGE_LIMIT: i64 = 100;

/// Offset and limit of a listing, already clamped to the accepted range.
///
/// # Examples
/// ```
/// use producer_registry::domain::PageRequest;
///
/// let page = PageRequest::new(Some(-5), Some(500));
/// assert_eq!((page.offset(), page.limit()), (0, 100));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    offset: i64,
    limit: i64,
}

impl PageRequest {
    /// Negative offsets become 0; the limit is clamped to `0..=100`.
    #[must_use]
    pub fn new(skip: Option<i64>, limit: Option<i64>) -> Self {
        Self {
            offset: skip.unwrap_or(0).max(0),
            limit: limit.unwrap_or(DEFAULT_PAGE_LIMIT).clamp(0, MAX_PAGE_LIMIT),
        }
    }

    pub fn offset(&self) -> i64 {
        self.offset
    }

    pub fn limit(&self) -> i64 {
        self.limit
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(None, None)
    }
}
