//! Generated producer type.

use serde::{Deserialize, Serialize};

/// A generated producer record without a store identifier.
///
/// Field names serialise in camelCase so the JSON matches the registry's
/// request bodies.
///
/// # Example
///
/// ```
/// use mock_producers::ProducerSeed;
///
/// let seed = ProducerSeed {
///     document_number: "11144477735".to_owned(),
///     producer_name: "Ana Souza".to_owned(),
///     farm_name: "Souza Agro".to_owned(),
///     city: "Chapecó".to_owned(),
///     state: "SC".to_owned(),
///     total_area: 100.0,
///     farmable_area: 60.0,
///     vegetation_area: 30.0,
///     crops: vec!["Soja".to_owned()],
/// };
///
/// assert_eq!(seed.state, "SC");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProducerSeed {
    /// CPF or CNPJ, digits only.
    pub document_number: String,
    /// Person responsible for the farm.
    pub producer_name: String,
    /// Farm or company name.
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
    /// Planted crops, at least one.
    pub crops: Vec<String>,
}
