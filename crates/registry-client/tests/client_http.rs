//! HTTP-level tests for `RegistryClient` against a mock registry.

use httpmock::prelude::*;
use registry_client::{ClientError, PAGE_SIZE, ProducerPayload, RegistryClient};
use rstest::{fixture, rstest};
use serde_json::{Value, json};

#[fixture]
fn payload() -> ProducerPayload {
    ProducerPayload {
        document_number: "11144477735".to_owned(),
        producer_name: "Ana Souza".to_owned(),
        farm_name: "Boa Vista".to_owned(),
        city: "Sorriso".to_owned(),
        state: "MT".to_owned(),
        total_area: 100.0,
        farmable_area: 60.0,
        vegetation_area: 30.0,
        crops: vec!["Soja".to_owned()],
    }
}

fn producer_json(id: i64) -> Value {
    json!({
        "id": id,
        "documentNumber": "11144477735",
        "producerName": format!("Producer {id}"),
        "farmName": "Boa Vista",
        "city": "Sorriso",
        "state": "MT",
        "totalArea": 100.0,
        "farmableArea": 60.0,
        "vegetationArea": 30.0,
        "crops": ["Soja"]
    })
}

fn client_for(server: &MockServer) -> RegistryClient {
    RegistryClient::new(server.base_url()).expect("client builds")
}

#[rstest]
#[tokio::test]
async fn create_posts_camel_case_payload(payload: ProducerPayload) {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/producers").json_body(json!({
                "documentNumber": "11144477735",
                "producerName": "Ana Souza",
                "farmName": "Boa Vista",
                "city": "Sorriso",
                "state": "MT",
                "totalArea": 100.0,
                "farmableArea": 60.0,
                "vegetationArea": 30.0,
                "crops": ["Soja"]
            }));
            then.status(200).json_body(producer_json(1));
        })
        .await;

    let created = client_for(&server)
        .create(&payload)
        .await
        .expect("create succeeds");

    mock.assert_async().await;
    assert_eq!(created.id, 1);
}

#[rstest]
#[tokio::test]
async fn duplicate_document_surfaces_error_code(payload: ProducerPayload) {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/producers");
            then.status(400).json_body(json!({
                "code": "duplicate_document",
                "detail": "duplicate document",
                "traceId": "00000000-0000-0000-0000-000000000000"
            }));
        })
        .await;

    let err = client_for(&server)
        .create(&payload)
        .await
        .expect_err("duplicate rejected");

    assert!(matches!(
        err,
        ClientError::Api { status: 400, ref code, ref detail }
            if code == "duplicate_document" && detail == "duplicate document"
    ));
}

#[tokio::test]
async fn list_sends_skip_and_limit() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/producers")
                .query_param("skip", "20")
                .query_param("limit", "5");
            then.status(200).json_body(json!([producer_json(21)]));
        })
        .await;

    let page = client_for(&server).list(20, 5).await.expect("list succeeds");

    mock.assert_async().await;
    assert_eq!(page.len(), 1);
    assert_eq!(page.first().map(|producer| producer.id), Some(21));
}

#[tokio::test]
async fn list_all_walks_every_page() {
    let server = MockServer::start_async().await;
    let full_page: Vec<Value> = (1..=i64::from(PAGE_SIZE)).map(producer_json).collect();
    let first = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/producers")
                .query_param("skip", "0")
                .query_param("limit", "100");
            then.status(200).json_body(Value::Array(full_page));
        })
        .await;
    let second = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/producers")
                .query_param("skip", "100")
                .query_param("limit", "100");
            then.status(200).json_body(json!([producer_json(101)]));
        })
        .await;

    let producers = client_for(&server).list_all().await.expect("list succeeds");

    first.assert_async().await;
    second.assert_async().await;
    assert_eq!(producers.len(), 101);
    assert_eq!(producers.last().map(|producer| producer.id), Some(101));
}

#[tokio::test]
async fn get_missing_producer_reports_not_found() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/producers/9");
            then.status(404).json_body(json!({
                "code": "not_found",
                "detail": "producer not found"
            }));
        })
        .await;

    let err = client_for(&server).get(9).await.expect_err("missing");
    assert_eq!(err.code(), Some("not_found"));
}

#[rstest]
#[tokio::test]
async fn update_puts_to_the_record_path(payload: ProducerPayload) {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(PUT).path("/producers/3");
            then.status(200).json_body(producer_json(3));
        })
        .await;

    let updated = client_for(&server)
        .update(3, &payload)
        .await
        .expect("update succeeds");

    mock.assert_async().await;
    assert_eq!(updated.id, 3);
}

#[tokio::test]
async fn delete_and_mock_return_acknowledgements() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(DELETE).path("/producers/4");
            then.status(200).json_body(json!({"detail": "deleted"}));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/producers/mock")
                .query_param("qty", "25");
            then.status(200)
                .json_body(json!({"detail": "25 mock producers created"}));
        })
        .await;

    let client = client_for(&server);
    assert_eq!(client.delete(4).await.expect("delete"), "deleted");
    assert_eq!(
        client.generate_mock(25).await.expect("mock"),
        "25 mock producers created"
    );
}

#[tokio::test]
async fn unstructured_failures_keep_the_body() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/producers/1");
            then.status(502).body("bad gateway");
        })
        .await;

    let err = client_for(&server).get(1).await.expect_err("gateway error");
    assert!(matches!(
        err,
        ClientError::UnexpectedStatus { status: 502, ref body } if body == "bad gateway"
    ));
}

#[tokio::test]
async fn unreachable_service_is_a_connection_error() {
    // Port 9 (discard) is not expected to accept HTTP connections.
    let client = RegistryClient::new("http://127.0.0.1:9").expect("client builds");
    let err = client.get(1).await.expect_err("nothing listening");
    assert!(matches!(err, ClientError::Connection { .. }));
}
