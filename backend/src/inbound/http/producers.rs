//! Producer registry API handlers.
//!
//! ```text
//! POST   /producers              {"documentNumber":"11144477735",...}
//! POST   /producers/mock?qty=25
//! GET    /producers?skip=0&limit=10
//! GET    /producers/{id}
//! PUT    /producers/{id}         {"documentNumber":"11144477735",...}
//! DELETE /producers/{id}
//! ```

use actix_web::{HttpRequest, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::{IntoParams, ToSchema};

use crate::domain::ports::DEFAULT_MOCK_QUANTITY;
use crate::domain::{Error, PageRequest, ProducerId, ProducerPayload, ProducerRecord};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// Body accepted by create and update.
///
/// Every field is required; update replaces the whole record.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProducerRequest {
    /// CPF or CNPJ, with or without punctuation.
    #[schema(example = "111.444.777-35")]
    pub document_number: String,
    #[schema(example = "Ana Souza")]
    pub producer_name: String,
    #[schema(example = "Fazenda Boa Vista")]
    pub farm_name: String,
    #[schema(example = "Sorriso")]
    pub city: String,
    /// Two-letter state code, case-insensitive.
    #[schema(example = "MT")]
    pub state: String,
    /// Hectares.
    #[schema(example = 100.0)]
    pub total_area: f64,
    /// Hectares.
    #[schema(example = 60.0)]
    pub farmable_area: f64,
    /// Hectares.
    #[schema(example = 30.0)]
    pub vegetation_area: f64,
    #[schema(example = json!(["Soja", "Milho"]))]
    pub crops: Vec<String>,
}

impl From<ProducerRequest> for ProducerPayload {
    fn from(value: ProducerRequest) -> Self {
        Self {
            document_number: value.document_number,
            producer_name: value.producer_name,
            farm_name: value.farm_name,
            city: value.city,
            state: value.state,
            total_area: value.total_area,
            farmable_area: value.farmable_area,
            vegetation_area: value.vegetation_area,
            crops: value.crops,
        }
    }
}

/// A stored producer.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProducerResponse {
    #[schema(example = 1)]
    pub id: i64,
    /// Digits-only CPF or CNPJ.
    #[schema(example = "11144477735")]
    pub document_number: String,
    pub producer_name: String,
    pub farm_name: String,
    pub city: String,
    #[schema(example = "MT")]
    pub state: String,
    pub total_area: f64,
    pub farmable_area: f64,
    pub vegetation_area: f64,
    pub crops: Vec<String>,
}

impl From<ProducerRecord> for ProducerResponse {
    fn from(record: ProducerRecord) -> Self {
        let (id, details) = record.into_parts();
        Self {
            id: id.get(),
            document_number: details.document_number().to_owned(),
            producer_name: details.producer_name().to_owned(),
            farm_name: details.farm_name().to_owned(),
            city: details.city().to_owned(),
            state: details.state().to_owned(),
            total_area: details.total_area(),
            farmable_area: details.farmable_area(),
            vegetation_area: details.vegetation_area(),
            crops: details.crops().to_vec(),
        }
    }
}

/// `{"detail": ...}` acknowledgement for delete and mock generation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct DetailResponse {
    #[schema(example = "deleted")]
    pub detail: String,
}

impl DetailResponse {
    fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}

/// Paging parameters for `GET /producers`.
#[derive(Debug, Clone, Copy, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListQuery {
    /// Records to skip; negative values count as 0.
    pub skip: Option<i64>,
    /// Page size, clamped to `0..=100`; defaults to 10.
    pub limit: Option<i64>,
}

/// Batch size for `POST /producers/mock`.
#[derive(Debug, Clone, Copy, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct MockQuery {
    /// Producers to generate, `1..=1000`; defaults to 10.
    pub qty: Option<u32>,
}

fn rejected_input(kind: &'static str, err: &dyn std::fmt::Display) -> actix_web::Error {
    Error::invalid_request(format!("malformed {kind}"))
        .with_context(json!({ "code": format!("invalid_{kind}"), "reason": err.to_string() }))
        .into()
}

/// Register the producer routes and map extractor failures to `invalid_request`.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use producer_registry::inbound::http::producers;
///
/// let app = App::new().configure(producers::configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req: &HttpRequest| rejected_input("body", &err)),
    )
    .app_data(
        web::QueryConfig::default()
            .error_handler(|err, _req: &HttpRequest| rejected_input("query", &err)),
    )
    .app_data(
        web::PathConfig::default()
            .error_handler(|err, _req: &HttpRequest| rejected_input("path", &err)),
    )
    .service(create_producer)
    .service(generate_mock_producers)
    .service(list_producers)
    .service(get_producer)
    .service(update_producer)
    .service(delete_producer);
}

/// Register a producer.
#[utoipa::path(
    post,
    path = "/producers",
    request_body = ProducerRequest,
    responses(
        (status = 200, description = "Producer created", body = ProducerResponse),
        (status = 400, description = "Invalid fields, invalid document, duplicate document, or area constraint violated", body = Error),
        (status = 503, description = "Store unavailable", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["producers"],
    operation_id = "createProducer"
)]
#[post("/producers")]
pub async fn create_producer(
    state: web::Data<HttpState>,
    payload: web::Json<ProducerRequest>,
) -> ApiResult<web::Json<ProducerResponse>> {
    let record = state.producers.create(payload.into_inner().into()).await?;
    Ok(web::Json(record.into()))
}

/// Generate and store synthetic producers.
#[utoipa::path(
    post,
    path = "/producers/mock",
    params(MockQuery),
    responses(
        (status = 200, description = "Producers generated", body = DetailResponse),
        (status = 400, description = "Quantity out of range", body = Error),
        (status = 503, description = "Store unavailable", body = Error)
    ),
    tags = ["producers"],
    operation_id = "generateMockProducers"
)]
#[post("/producers/mock")]
pub async fn generate_mock_producers(
    state: web::Data<HttpState>,
    query: web::Query<MockQuery>,
) -> ApiResult<web::Json<DetailResponse>> {
    let quantity = query.qty.unwrap_or(DEFAULT_MOCK_QUANTITY);
    let inserted = state.producers.generate_mock(quantity).await?;
    Ok(web::Json(DetailResponse::new(format!(
        "{inserted} mock producers created"
    ))))
}

/// List producers in ascending identifier order.
#[utoipa::path(
    get,
    path = "/producers",
    params(ListQuery),
    responses(
        (status = 200, description = "One page of producers", body = [ProducerResponse]),
        (status = 503, description = "Store unavailable", body = Error)
    ),
    tags = ["producers"],
    operation_id = "listProducers"
)]
#[get("/producers")]
pub async fn list_producers(
    state: web::Data<HttpState>,
    query: web::Query<ListQuery>,
) -> ApiResult<web::Json<Vec<ProducerResponse>>> {
    let page = PageRequest::new(query.skip, query.limit);
    let records = state.producers_query.list(page).await?;
    Ok(web::Json(records.into_iter().map(Into::into).collect()))
}

/// Fetch one producer.
#[utoipa::path(
    get,
    path = "/producers/{id}",
    params(("id" = i64, Path, description = "Producer identifier")),
    responses(
        (status = 200, description = "Producer", body = ProducerResponse),
        (status = 404, description = "Producer not found", body = Error)
    ),
    tags = ["producers"],
    operation_id = "getProducer"
)]
#[get("/producers/{id}")]
pub async fn get_producer(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<web::Json<ProducerResponse>> {
    let record = state
        .producers_query
        .get(ProducerId::new(path.into_inner()))
        .await?;
    Ok(web::Json(record.into()))
}

/// Replace every field of a producer.
#[utoipa::path(
    put,
    path = "/producers/{id}",
    params(("id" = i64, Path, description = "Producer identifier")),
    request_body = ProducerRequest,
    responses(
        (status = 200, description = "Producer updated", body = ProducerResponse),
        (status = 400, description = "Invalid fields, invalid document, duplicate document, or area constraint violated", body = Error),
        (status = 404, description = "Producer not found", body = Error)
    ),
    tags = ["producers"],
    operation_id = "updateProducer"
)]
#[put("/producers/{id}")]
pub async fn update_producer(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
    payload: web::Json<ProducerRequest>,
) -> ApiResult<web::Json<ProducerResponse>> {
    let record = state
        .producers
        .update(
            ProducerId::new(path.into_inner()),
            payload.into_inner().into(),
        )
        .await?;
    Ok(web::Json(record.into()))
}

/// Permanently remove a producer.
#[utoipa::path(
    delete,
    path = "/producers/{id}",
    params(("id" = i64, Path, description = "Producer identifier")),
    responses(
        (status = 200, description = "Producer deleted", body = DetailResponse),
        (status = 404, description = "Producer not found", body = Error)
    ),
    tags = ["producers"],
    operation_id = "deleteProducer"
)]
#[delete("/producers/{id}")]
pub async fn delete_producer(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<web::Json<DetailResponse>> {
    state
        .producers
        .delete(ProducerId::new(path.into_inner()))
        .await?;
    Ok(web::Json(DetailResponse::new("deleted")))
}

#[cfg(test)]
#[path = "producers_tests.rs"]
mod tests;
