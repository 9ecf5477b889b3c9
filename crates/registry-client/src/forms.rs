//! Producer form handling and pre-submission validation.
//!
//! Forms carry optional fields so the same type serves creation, where
//! every field is required, and updates, where supplied fields override the
//! stored record.

use std::fmt;

use clap::Args;
use producer_rules::{check_land_use, normalize_document, validate_document};
use thiserror::Error;

use crate::dto::ProducerPayload;

/// A single rejected form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldIssue {
    /// Wire name of the field.
    pub field: &'static str,
    /// What is wrong with it.
    pub message: String,
}

impl FieldIssue {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Every problem found in a form, reported together.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", render_issues(.issues))]
pub struct FormErrors {
    /// Individual field problems in form order.
    pub issues: Vec<FieldIssue>,
}

fn render_issues(issues: &[FieldIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Producer fields as entered on the command line.
#[derive(Debug, Clone, Default, PartialEq, Args)]
pub struct ProducerForm {
    /// CPF or CNPJ; punctuation is accepted.
    #[arg(long = "document")]
    pub document_number: Option<String>,
    /// Person responsible for the farm.
    #[arg(long = "producer")]
    pub producer_name: Option<String>,
    /// Farm name.
    #[arg(long = "farm")]
    pub farm_name: Option<String>,
    /// City where the farm is located.
    #[arg(long)]
    pub city: Option<String>,
    /// Two-letter state code.
    #[arg(long)]
    pub state: Option<String>,
    /// Total area in hectares.
    #[arg(long)]
    pub total_area: Option<f64>,
    /// Farmable area in hectares.
    #[arg(long)]
    pub farmable_area: Option<f64>,
    /// Vegetation area in hectares.
    #[arg(long)]
    pub vegetation_area: Option<f64>,
    /// Comma-separated crops, e.g. `Soja,Milho`.
    #[arg(long, value_delimiter = ',')]
    pub crops: Vec<String>,
}

impl ProducerForm {
    /// Builds a creation payload; every field is required.
    ///
    /// # Errors
    ///
    /// Returns [`FormErrors`] listing missing fields, or the validation
    /// problems of the assembled payload.
    pub fn into_new_payload(self) -> Result<ProducerPayload, FormErrors> {
        let mut missing = Vec::new();
        let mut require = |value: Option<String>, field: &'static str| {
            value.unwrap_or_else(|| {
                missing.push(FieldIssue::new(field, "is required"));
                String::new()
            })
        };
        let document_number = require(self.document_number, "documentNumber");
        let producer_name = require(self.producer_name, "producerName");
        let farm_name = require(self.farm_name, "farmName");
        let city = require(self.city, "city");
        let state = require(self.state, "state");

        let mut area = |value: Option<f64>, field: &'static str| {
            value.unwrap_or_else(|| {
                missing.push(FieldIssue::new(field, "is required"));
                0.0
            })
        };
        let total_area = area(self.total_area, "totalArea");
        let farmable_area = area(self.farmable_area, "farmableArea");
        let vegetation_area = area(self.vegetation_area, "vegetationArea");

        if self.crops.is_empty() {
            missing.push(FieldIssue::new("crops", "is required"));
        }
        if !missing.is_empty() {
            return Err(FormErrors { issues: missing });
        }

        prepare_payload(ProducerPayload {
            document_number,
            producer_name,
            farm_name,
            city,
            state,
            total_area,
            farmable_area,
            vegetation_area,
            crops: self.crops,
        })
    }

    /// Overrides the supplied fields of `current` and validates the result.
    ///
    /// # Errors
    ///
    /// Returns [`FormErrors`] when the merged payload fails validation.
    pub fn apply_to(self, current: ProducerPayload) -> Result<ProducerPayload, FormErrors> {
        let merged = ProducerPayload {
            document_number: self.document_number.unwrap_or(current.document_number),
            producer_name: self.producer_name.unwrap_or(current.producer_name),
            farm_name: self.farm_name.unwrap_or(current.farm_name),
            city: self.city.unwrap_or(current.city),
            state: self.state.unwrap_or(current.state),
            total_area: self.total_area.unwrap_or(current.total_area),
            farmable_area: self.farmable_area.unwrap_or(current.farmable_area),
            vegetation_area: self.vegetation_area.unwrap_or(current.vegetation_area),
            crops: if self.crops.is_empty() {
                current.crops
            } else {
                self.crops
            },
        };
        prepare_payload(merged)
    }
}

/// Normalises a payload and checks it against the registry's rules.
///
/// The document number is reduced to digits, the state code is upper-cased,
/// and text fields and crops are trimmed before checking.
///
/// # Errors
///
/// Returns [`FormErrors`] with one entry per violated rule.
pub fn prepare_payload(payload: ProducerPayload) -> Result<ProducerPayload, FormErrors> {
    let mut issues = Vec::new();

    let document_number = match normalize_document(&payload.document_number)
        .map_err(|err| err.to_string())
        .and_then(|digits| {
            validate_document(&digits)
                .map(|_| digits)
                .map_err(|err| err.to_string())
        }) {
        Ok(digits) => digits,
        Err(message) => {
            issues.push(FieldIssue::new("documentNumber", message));
            payload.document_number
        }
    };

    let mut text = |value: String, field: &'static str| {
        let trimmed = value.trim().to_owned();
        if trimmed.is_empty() {
            issues.push(FieldIssue::new(field, "must not be blank"));
        }
        trimmed
    };
    let producer_name = text(payload.producer_name, "producerName");
    let farm_name = text(payload.farm_name, "farmName");
    let city = text(payload.city, "city");

    let state = payload.state.trim().to_ascii_uppercase();
    if state.len() != 2 || !state.bytes().all(|byte| byte.is_ascii_uppercase()) {
        issues.push(FieldIssue::new("state", "must be a two-letter code"));
    }

    if let Err(err) = check_land_use(
        payload.total_area,
        payload.farmable_area,
        payload.vegetation_area,
    ) {
        issues.push(FieldIssue::new("area", err.to_string()));
    }

    let crops: Vec<String> = payload
        .crops
        .iter()
        .map(|crop| crop.trim().to_owned())
        .collect();
    if crops.is_empty() {
        issues.push(FieldIssue::new("crops", "at least one crop is required"));
    } else if crops.iter().any(String::is_empty) {
        issues.push(FieldIssue::new("crops", "crop labels must not be blank"));
    }

    if !issues.is_empty() {
        return Err(FormErrors { issues });
    }

    Ok(ProducerPayload {
        document_number,
        producer_name,
        farm_name,
        city,
        state,
        total_area: payload.total_area,
        farmable_area: payload.farmable_area,
        vegetation_area: payload.vegetation_area,
        crops,
    })
}
