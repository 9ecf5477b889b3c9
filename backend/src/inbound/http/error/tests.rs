//! Tests for HTTP error mapping.

use super::*;
use actix_web::body::to_bytes;
use rstest::{fixture, rstest};
use serde_json::json;

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

#[fixture]
fn expected_trace_id() -> String {
    TRACE_ID.to_owned()
}

#[rstest]
#[case(Error::invalid_request("bad"), StatusCode::BAD_REQUEST)]
#[case(Error::invalid_document_format("wrong check digits"), StatusCode::BAD_REQUEST)]
#[case(Error::duplicate_document("11144477735"), StatusCode::BAD_REQUEST)]
#[case(Error::area_constraint_violated(100.0, 110.0), StatusCode::BAD_REQUEST)]
#[case(Error::not_found("producer not found"), StatusCode::NOT_FOUND)]
#[case(Error::service_unavailable("database down"), StatusCode::SERVICE_UNAVAILABLE)]
#[case(Error::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR)]
fn status_code_matches_error_code(#[case] err: Error, #[case] status: StatusCode) {
    assert_eq!(ResponseError::status_code(&err), status);
}

async fn read_error_response(error: &Error) -> (StatusCode, Option<String>, Error) {
    let response = ResponseError::error_response(error);
    let status = response.status();
    let header = response
        .headers()
        .get(TRACE_ID_HEADER)
        .map(|value| value.to_str().expect("trace id is ascii").to_owned());
    let bytes = to_bytes(response.into_body())
        .await
        .expect("reading response body succeeds");
    let body = serde_json::from_slice(&bytes).expect("Error JSON deserialisation succeeds");
    (status, header, body)
}

#[rstest]
#[actix_web::test]
async fn internal_errors_are_redacted_but_keep_the_trace_id(expected_trace_id: String) {
    let error = Error::internal("connection string leaked")
        .with_trace_id(expected_trace_id.clone())
        .with_context(json!({"secret": "x"}));

    let (status, header, body) = read_error_response(&error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(header.as_deref(), Some(expected_trace_id.as_str()));
    assert_eq!(body.code(), ErrorCode::InternalError);
    assert_eq!(body.message(), "Internal server error");
    assert!(body.context().is_none());
    assert_eq!(body.trace_id(), Some(expected_trace_id.as_str()));
}

#[rstest]
#[actix_web::test]
async fn client_errors_keep_their_context(expected_trace_id: String) {
    let error = Error::duplicate_document("11144477735").with_trace_id(expected_trace_id);

    let (status, _, body) = read_error_response(&error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body.code(), ErrorCode::DuplicateDocument);
    assert_eq!(
        body.context(),
        Some(&json!({"documentNumber": "11144477735"}))
    );
}

#[rstest]
#[actix_web::test]
async fn error_without_trace_id_omits_trace_header() {
    let error = Error::invalid_request("bad").with_context(json!({"field": "city"}));

    let (status, header, body) = read_error_response(&error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(header.is_none());
    assert_eq!(body.trace_id(), None);
    assert_eq!(body.context(), Some(&json!({"field": "city"})));
}

#[rstest]
fn wire_shape_uses_detail_and_camel_case() {
    let error = Error::not_found("producer not found").with_trace_id(TRACE_ID);
    let value = serde_json::to_value(&error).expect("serialise error");
    assert_eq!(
        value,
        json!({
            "code": "not_found",
            "detail": "producer not found",
            "traceId": TRACE_ID,
        })
    );
}

#[rstest]
fn actix_errors_become_redacted_internal_errors() {
    let actix = actix_web::error::ErrorBadGateway("upstream said no");
    let error = Error::from(actix);
    assert_eq!(error.code(), ErrorCode::InternalError);
    assert_eq!(error.message(), "Internal server error");
}
