//! Field and cross-field rules applied before every write.
//!
//! Rules run in a fixed order so callers get a predictable first failure:
//! text fields, state code and crops, then the area figures, then the
//! document number, and finally the land-use invariant.

use producer_rules::{AreaError, AreaField, check_land_use, normalize_document, validate_document};
use serde_json::json;

use super::Error;
use super::producer::{ProducerDetails, ProducerPayload};

/// Field-rule codes reported in the `context` of an invalid request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RuleCode {
    Blank,
    InvalidState,
    MissingCrops,
    NotFinite,
    Negative,
}

impl RuleCode {
    fn as_str(self) -> &'static str {
        match self {
            RuleCode::Blank => "blank",
            RuleCode::InvalidState => "invalid_state",
            RuleCode::MissingCrops => "missing_crops",
            RuleCode::NotFinite => "not_finite",
            RuleCode::Negative => "negative",
        }
    }
}

fn field_error(field: &str, code: RuleCode, message: impl Into<String>) -> Error {
    Error::invalid_request(message).with_context(json!({
        "field": field,
        "code": code.as_str(),
    }))
}

fn required_text(value: &str, field: &'static str) -> Result<String, Error> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(field_error(
            field,
            RuleCode::Blank,
            format!("{field} must not be blank"),
        ));
    }
    Ok(trimmed.to_owned())
}

fn state_code(value: &str) -> Result<String, Error> {
    let state = value.trim().to_ascii_uppercase();
    if state.len() == 2 && state.bytes().all(|byte| byte.is_ascii_uppercase()) {
        Ok(state)
    } else {
        Err(field_error(
            "state",
            RuleCode::InvalidState,
            "state must be a two-letter code",
        ))
    }
}

fn crop_list(crops: &[String]) -> Result<Vec<String>, Error> {
    if crops.is_empty() {
        return Err(field_error(
            "crops",
            RuleCode::MissingCrops,
            "at least one crop is required",
        ));
    }
    crops
        .iter()
        .map(|crop| required_text(crop, "crops"))
        .collect()
}

fn area_field_name(field: AreaField) -> &'static str {
    match field {
        AreaField::Total => "totalArea",
        AreaField::Farmable => "farmableArea",
        AreaField::Vegetation => "vegetationArea",
    }
}

fn document_digits(raw: &str) -> Result<String, Error> {
    let digits = normalize_document(raw)
        .map_err(|err| Error::invalid_document_format(err.to_string()))?;
    validate_document(&digits).map_err(|err| Error::invalid_document_format(err.to_string()))?;
    Ok(digits)
}

/// Checks `payload` and returns its normalised, storable form.
///
/// The document number is reduced to digits, text is trimmed and the state
/// is upper-cased. Uniqueness of the document number needs the store and is
/// checked by the registry service.
///
/// # Errors
///
/// - [`ErrorCode::InvalidRequest`](super::ErrorCode::InvalidRequest) with
///   `{field, code}` context for blank text, a malformed state, an empty
///   crop list, or a negative or non-finite area;
/// - [`ErrorCode::InvalidDocumentFormat`](super::ErrorCode::InvalidDocumentFormat)
///   when the number is not a valid CPF or CNPJ;
/// - [`ErrorCode::AreaConstraintViolation`](super::ErrorCode::AreaConstraintViolation)
///   when farmable plus vegetation area exceeds the total.
///
/// # Examples
/// ```
/// use producer_registry::domain::{ErrorCode, ProducerPayload, validate_payload};
///
/// let payload = ProducerPayload {
///     document_number: "111.444.777-35".into(),
///     producer_name: "Ana Souza".into(),
///     farm_name: "Boa Vista".into(),
///     city: "Sorriso".into(),
///     state: "mt".into(),
///     total_area: 100.0,
///     farmable_area: 60.0,
///     vegetation_area: 30.0,
///     crops: vec!["Soja".into()],
/// };
/// let details = validate_payload(&payload).expect("valid producer");
/// assert_eq!(details.document_number(), "11144477735");
/// assert_eq!(details.state(), "MT");
///
/// let oversized = ProducerPayload { vegetation_area: 50.0, ..payload };
/// let err = validate_payload(&oversized).expect_err("60 + 50 > 100");
/// assert_eq!(err.code(), ErrorCode::AreaConstraintViolation);
/// ```
pub fn validate_payload(payload: &ProducerPayload) -> Result<ProducerDetails, Error> {
    let producer_name = required_text(&payload.producer_name, "producerName")?;
    let farm_name = required_text(&payload.farm_name, "farmName")?;
    let city = required_text(&payload.city, "city")?;
    let state = state_code(&payload.state)?;
    let crops = crop_list(&payload.crops)?;

    let area_check = check_land_use(
        payload.total_area,
        payload.farmable_area,
        payload.vegetation_area,
    );
    match area_check {
        Err(AreaError::NotFinite { field }) => {
            let name = area_field_name(field);
            return Err(field_error(
                name,
                RuleCode::NotFinite,
                format!("{name} must be a finite number"),
            ));
        }
        Err(AreaError::Negative { field }) => {
            let name = area_field_name(field);
            return Err(field_error(
                name,
                RuleCode::Negative,
                format!("{name} must not be negative"),
            ));
        }
        Err(AreaError::ExceedsTotal { .. }) | Ok(()) => {}
    }

    let document_number = document_digits(&payload.document_number)?;

    if let Err(AreaError::ExceedsTotal { total, used }) = area_check {
        return Err(Error::area_constraint_violated(total, used));
    }

    Ok(ProducerDetails {
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
