//! Domain-level error types.
//!
//! These errors are transport agnostic. Inbound adapters map them to HTTP
//! responses; the wire shape is `{code, detail, traceId?, context?}`.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use utoipa::ToSchema;

use super::trace_id::TraceId;

/// Header carrying the request trace identifier on every response.
pub const TRACE_ID_HEADER: &str = "trace-id";

/// Stable machine-readable error code describing the failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[non_exhaustive]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The request is malformed or a field fails validation.
    InvalidRequest,
    /// The document number fails the CPF/CNPJ check-digit rules.
    InvalidDocumentFormat,
    /// Another producer already holds the document number.
    DuplicateDocument,
    /// Farmable plus vegetation area exceeds the total area.
    AreaConstraintViolation,
    /// The requested producer does not exist.
    NotFound,
    /// A backing service, such as the database, is unreachable.
    ServiceUnavailable,
    /// An unexpected error occurred inside the service.
    InternalError,
}

/// Error payload returned by every fallible operation.
///
/// # Examples
/// ```
/// use producer_registry::domain::{Error, ErrorCode};
///
/// let err = Error::not_found("producer not found");
/// assert_eq!(err.code(), ErrorCode::NotFound);
/// assert_eq!(err.message(), "producer not found");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Error {
    /// Stable machine-readable error code.
    #[schema(example = "duplicate_document")]
    code: ErrorCode,
    /// Human-readable error message.
    #[serde(rename = "detail")]
    #[schema(example = "duplicate document")]
    message: String,
    /// Correlation identifier for the request that failed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    /// Structured context, such as the offending field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    context: Option<Value>,
}

impl Error {
    /// Create a new error.
    ///
    /// Captures the current trace identifier if one is in scope so the error
    /// payload is correlated automatically.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            trace_id: TraceId::current().map(|id| id.to_string()),
            context: None,
        }
    }

    /// Stable machine-readable error code.
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Human-readable message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Trace identifier captured when the error was raised.
    pub fn trace_id(&self) -> Option<&str> {
        self.trace_id.as_deref()
    }

    /// Structured context attached to the error.
    pub fn context(&self) -> Option<&Value> {
        self.context.as_ref()
    }

    /// Attach a trace identifier to the error.
    pub fn with_trace_id(mut self, id: impl Into<String>) -> Self {
        self.trace_id = Some(id.into());
        self
    }

    /// Attach structured context to the error.
    ///
    /// # Examples
    /// ```
    /// use producer_registry::domain::Error;
    /// use serde_json::json;
    ///
    /// let err = Error::invalid_request("bad").with_context(json!({ "field": "city" }));
    /// assert!(err.context().is_some());
    /// ```
    pub fn with_context(mut self, context: Value) -> Self {
        self.context = Some(context);
        self
    }

    /// Convenience constructor for [`ErrorCode::InvalidRequest`].
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidRequest, message)
    }

    /// Rejects a document number, recording why it failed.
    pub fn invalid_document_format(reason: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidDocumentFormat, "invalid document format").with_context(
            json!({ "field": "documentNumber", "reason": reason.into() }),
        )
    }

    /// Rejects a document number that another producer already holds.
    pub fn duplicate_document(document_number: impl Into<String>) -> Self {
        Self::new(ErrorCode::DuplicateDocument, "duplicate document")
            .with_context(json!({ "documentNumber": document_number.into() }))
    }

    /// Rejects areas whose farmable and vegetation parts exceed the total.
    pub fn area_constraint_violated(total_area: f64, used_area: f64) -> Self {
        Self::new(ErrorCode::AreaConstraintViolation, "area constraint violated")
            .with_context(json!({ "totalArea": total_area, "usedArea": used_area }))
    }

    /// Convenience constructor for [`ErrorCode::NotFound`].
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotFound, message)
    }

    /// Convenience constructor for [`ErrorCode::ServiceUnavailable`].
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ServiceUnavailable, message)
    }

    /// Convenience constructor for [`ErrorCode::InternalError`].
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}
