//! Tests for producer HTTP handlers.

use super::*;
use crate::Trace;
use crate::domain::ports::{MockProducerCommand, MockProducerQuery};
use crate::domain::{ErrorCode, validate_payload};
use actix_web::http::StatusCode;
use actix_web::{App, test as actix_test};
use mockall::predicate::eq;
use rstest::rstest;
use serde_json::{Value, json};
use std::sync::Arc;

fn request_body() -> Value {
    json!({
        "documentNumber": "111.444.777-35",
        "producerName": "Ana Souza",
        "farmName": "Fazenda Boa Vista",
        "city": "Sorriso",
        "state": "mt",
        "totalArea": 100.0,
        "farmableArea": 60.0,
        "vegetationArea": 30.0,
        "crops": ["Soja", "Milho"]
    })
}

fn record(id: i64) -> ProducerRecord {
    let payload: ProducerRequest =
        serde_json::from_value(request_body()).expect("request body deserialises");
    let details = validate_payload(&payload.into()).expect("valid payload");
    ProducerRecord::new(ProducerId::new(id), details)
}

fn test_app(
    command: MockProducerCommand,
    query: MockProducerQuery,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let state = HttpState::new(Arc::new(command), Arc::new(query));
    App::new()
        .app_data(web::Data::new(state))
        .wrap(Trace)
        .configure(configure)
}

#[rstest]
#[actix_web::test]
async fn create_returns_the_stored_record() {
    let mut command = MockProducerCommand::new();
    command
        .expect_create()
        .withf(|payload| payload.document_number == "111.444.777-35" && payload.state == "mt")
        .return_once(|_| Ok(record(1)));
    let app = actix_test::init_service(test_app(command, MockProducerQuery::new())).await;

    let req = actix_test::TestRequest::post()
        .uri("/producers")
        .set_json(request_body())
        .to_request();
    let res = actix_test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body["id"], json!(1));
    assert_eq!(body["documentNumber"], json!("11144477735"));
    assert_eq!(body["state"], json!("MT"));
    assert_eq!(body["crops"], json!(["Soja", "Milho"]));
}

#[rstest]
#[actix_web::test]
async fn domain_rejections_become_400_envelopes() {
    let mut command = MockProducerCommand::new();
    command
        .expect_create()
        .return_once(|_| Err(Error::area_constraint_violated(100.0, 110.0)));
    let app = actix_test::init_service(test_app(command, MockProducerQuery::new())).await;

    let req = actix_test::TestRequest::post()
        .uri("/producers")
        .set_json(request_body())
        .to_request();
    let res = actix_test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let header = res
        .headers()
        .get("trace-id")
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body["code"], json!("area_constraint_violation"));
    assert_eq!(body["detail"], json!("area constraint violated"));
    assert_eq!(body["traceId"].as_str(), header.as_deref());
}

#[rstest]
#[actix_web::test]
async fn malformed_bodies_are_invalid_requests() {
    let mut command = MockProducerCommand::new();
    command.expect_create().never();
    let app = actix_test::init_service(test_app(command, MockProducerQuery::new())).await;

    let mut body = request_body();
    if let Some(map) = body.as_object_mut() {
        map.remove("crops");
    }
    let req = actix_test::TestRequest::post()
        .uri("/producers")
        .set_json(body)
        .to_request();
    let res = actix_test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body["code"], json!("invalid_request"));
    assert_eq!(body["context"]["code"], json!("invalid_body"));
    assert!(body["traceId"].is_string());
}

#[rstest]
#[case("/producers/mock", 10)]
#[case("/producers/mock?qty=3", 3)]
#[actix_web::test]
async fn mock_generation_reports_inserted_count(#[case] uri: &str, #[case] quantity: u32) {
    let mut command = MockProducerCommand::new();
    command
        .expect_generate_mock()
        .with(eq(quantity))
        .return_once(|requested| Ok(usize::try_from(requested).unwrap_or_default()));
    let app = actix_test::init_service(test_app(command, MockProducerQuery::new())).await;

    let req = actix_test::TestRequest::post().uri(uri).to_request();
    let res = actix_test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::OK);
    let body: DetailResponse = actix_test::read_body_json(res).await;
    assert_eq!(body.detail, format!("{quantity} mock producers created"));
}

#[rstest]
#[actix_web::test]
async fn negative_mock_quantity_is_an_invalid_request() {
    let mut command = MockProducerCommand::new();
    command.expect_generate_mock().never();
    let app = actix_test::init_service(test_app(command, MockProducerQuery::new())).await;

    let req = actix_test::TestRequest::post()
        .uri("/producers/mock?qty=-4")
        .to_request();
    let res = actix_test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body["context"]["code"], json!("invalid_query"));
}

#[rstest]
#[case("/producers", 0, 10)]
#[case("/producers?skip=-3&limit=500", 0, 100)]
#[case("/producers?skip=20&limit=5", 20, 5)]
#[actix_web::test]
async fn list_clamps_paging(#[case] uri: &str, #[case] offset: i64, #[case] limit: i64) {
    let mut query = MockProducerQuery::new();
    query
        .expect_list()
        .withf(move |page| page.offset() == offset && page.limit() == limit)
        .return_once(|_| Ok(vec![record(1), record(2)]));
    let app = actix_test::init_service(test_app(MockProducerCommand::new(), query)).await;

    let req = actix_test::TestRequest::get().uri(uri).to_request();
    let res = actix_test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::OK);
    let body: Vec<ProducerResponse> = actix_test::read_body_json(res).await;
    let ids: Vec<i64> = body.iter().map(|producer| producer.id).collect();
    assert_eq!(ids, vec![1, 2]);
}

#[rstest]
#[actix_web::test]
async fn missing_producer_is_404() {
    let mut query = MockProducerQuery::new();
    query
        .expect_get()
        .with(eq(ProducerId::new(42)))
        .return_once(|_| Err(Error::not_found("producer not found")));
    let app = actix_test::init_service(test_app(MockProducerCommand::new(), query)).await;

    let req = actix_test::TestRequest::get()
        .uri("/producers/42")
        .to_request();
    let res = actix_test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: Error = actix_test::read_body_json(res).await;
    assert_eq!(body.code(), ErrorCode::NotFound);
    assert_eq!(body.message(), "producer not found");
}

#[rstest]
#[actix_web::test]
async fn non_numeric_identifier_is_an_invalid_request() {
    let mut query = MockProducerQuery::new();
    query.expect_get().never();
    let app = actix_test::init_service(test_app(MockProducerCommand::new(), query)).await;

    let req = actix_test::TestRequest::get()
        .uri("/producers/abc")
        .to_request();
    let res = actix_test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[rstest]
#[actix_web::test]
async fn update_forwards_the_identifier() {
    let mut command = MockProducerCommand::new();
    command
        .expect_update()
        .withf(|id, _| *id == ProducerId::new(7))
        .return_once(|id, _| Ok(record(id.get())));
    let app = actix_test::init_service(test_app(command, MockProducerQuery::new())).await;

    let req = actix_test::TestRequest::put()
        .uri("/producers/7")
        .set_json(request_body())
        .to_request();
    let res = actix_test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::OK);
    let body: ProducerResponse = actix_test::read_body_json(res).await;
    assert_eq!(body.id, 7);
}

#[rstest]
#[actix_web::test]
async fn delete_acknowledges() {
    let mut command = MockProducerCommand::new();
    command
        .expect_delete()
        .with(eq(ProducerId::new(3)))
        .return_once(|_| Ok(()));
    let app = actix_test::init_service(test_app(command, MockProducerQuery::new())).await;

    let req = actix_test::TestRequest::delete()
        .uri("/producers/3")
        .to_request();
    let res = actix_test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::OK);
    let body: DetailResponse = actix_test::read_body_json(res).await;
    assert_eq!(body.detail, "deleted");
}
