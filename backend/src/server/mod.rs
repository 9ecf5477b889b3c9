//! Server construction and middleware wiring.

mod config;

pub use config::ServerConfig;

use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::info;

use producer_registry::Trace;
#[cfg(debug_assertions)]
use producer_registry::doc::ApiDoc;
use producer_registry::domain::ProducerRegistryService;
use producer_registry::domain::ports::ProducerRepository;
use producer_registry::inbound::http::health::{HealthState, live, ready};
use producer_registry::inbound::http::producers;
use producer_registry::inbound::http::state::HttpState;
use producer_registry::outbound::memory::InMemoryProducerRepository;
use producer_registry::outbound::mock_data::GeneratedProducerSource;
use producer_registry::outbound::persistence::DieselProducerRepository;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

fn registry_state<R>(repository: R, generator: GeneratedProducerSource) -> HttpState
where
    R: ProducerRepository + 'static,
{
    let service = Arc::new(ProducerRegistryService::new(
        Arc::new(repository),
        Arc::new(generator),
    ));
    HttpState::new(service.clone(), service)
}

/// Wire the registry service onto Postgres when a pool is configured,
/// otherwise onto the in-memory store.
fn build_http_state(config: &ServerConfig) -> HttpState {
    let generator = match config.mock_seed {
        Some(seed) => GeneratedProducerSource::from_seed(seed),
        None => GeneratedProducerSource::from_entropy(),
    };
    match &config.db_pool {
        Some(pool) => {
            info!("serving producers from Postgres");
            registry_state(DieselProducerRepository::new(pool.clone()), generator)
        }
        None => {
            info!("serving producers from the in-memory store");
            registry_state(InMemoryProducerRepository::new(), generator)
        }
    }
}

#[derive(Clone)]
struct AppDependencies {
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
}

fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        health_state,
        http_state,
    } = deps;

    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .configure(producers::configure)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Construct an Actix HTTP server using the provided health state and configuration.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let server_health_state = health_state.clone();
    let http_state = web::Data::new(build_http_state(&config));

    let server = HttpServer::new(move || {
        build_app(AppDependencies {
            health_state: server_health_state.clone(),
            http_state: http_state.clone(),
        })
    })
    .bind(config.bind_addr.as_str())?
    .run();

    info!(bind_addr = %config.bind_addr, "producer registry listening");
    health_state.mark_ready();
    Ok(server)
}
