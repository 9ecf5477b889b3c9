//! Wire types exchanged with the registry service.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Fields a client submits when creating or replacing a producer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProducerPayload {
    /// CPF or CNPJ, digits only.
    pub document_number: String,
    /// Person responsible for the farm.
    pub producer_name: String,
    /// Farm name.
    pub farm_name: String,
    /// City where the farm is located.
    pub city: String,
    /// Two-letter state code.
    pub state: String,
    /// Total area in hectares.
    pub total_area: f64,
    /// Farmable area in hectares.
    pub farmable_area: f64,
    /// Vegetation area in hectares.
    pub vegetation_area: f64,
    /// Planted crops.
    pub crops: Vec<String>,
}

/// A stored producer as returned by the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Producer {
    /// Store-assigned identifier.
    pub id: i64,
    /// Record fields.
    #[serde(flatten)]
    pub fields: ProducerPayload,
}

/// `{"detail": ...}` acknowledgement returned by delete and mock generation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Acknowledgement {
    /// Human-readable outcome.
    pub detail: String,
}

/// Error envelope produced by the service for rejected requests.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiErrorBody {
    /// Stable snake_case error code.
    pub code: String,
    /// Human-readable message.
    pub detail: String,
    /// Correlation identifier echoed by the service.
    #[serde(default)]
    pub trace_id: Option<String>,
    /// Optional structured details, such as the offending field.
    #[serde(default)]
    pub context: Option<Value>,
}
