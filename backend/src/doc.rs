//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] collects the producer and health endpoints together with the
//! request, response, and error schemas. Swagger UI serves it in debug
//! builds and `cargo run --bin openapi-dump` prints it for external tooling.

use utoipa::OpenApi;

use crate::domain::{Error, ErrorCode};
use crate::inbound::http::producers::{DetailResponse, ProducerRequest, ProducerResponse};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Producer registry API",
        description = "Register rural producers, validate CPF/CNPJ and land use, and generate demo data.",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::producers::create_producer,
        crate::inbound::http::producers::generate_mock_producers,
        crate::inbound::http::producers::list_producers,
        crate::inbound::http::producers::get_producer,
        crate::inbound::http::producers::update_producer,
        crate::inbound::http::producers::delete_producer,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(ProducerRequest, ProducerResponse, DetailResponse, Error, ErrorCode)),
    tags(
        (name = "producers", description = "Producer registry operations"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    //! Tests verifying the generated OpenAPI document.

    use super::*;
    use rstest::rstest;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    /// Assert that an Object schema contains a field with the given name.
    fn assert_object_schema_has_field(schema: &RefOr<Schema>, field: &str) {
        match schema {
            RefOr::T(Schema::Object(obj)) => {
                assert!(
                    obj.properties.contains_key(field),
                    "schema should have field '{field}'"
                );
            }
            _ => panic!("expected Object schema"),
        }
    }

    #[rstest]
    fn error_schema_uses_wire_field_names() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let error_schema = schemas.get("Error").expect("Error schema");

        assert_object_schema_has_field(error_schema, "code");
        assert_object_schema_has_field(error_schema, "detail");
        assert_object_schema_has_field(error_schema, "traceId");
    }

    #[rstest]
    fn producer_schemas_are_camel_case() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;

        let request = schemas.get("ProducerRequest").expect("request schema");
        assert_object_schema_has_field(request, "documentNumber");
        assert_object_schema_has_field(request, "vegetationArea");

        let response = schemas.get("ProducerResponse").expect("response schema");
        assert_object_schema_has_field(response, "id");
        assert_object_schema_has_field(response, "farmableArea");
    }

    #[rstest]
    #[case("/producers")]
    #[case("/producers/mock")]
    #[case("/producers/{id}")]
    #[case("/health/ready")]
    #[case("/health/live")]
    fn every_route_is_documented(#[case] path: &str) {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key(path), "missing path {path}");
    }
}
