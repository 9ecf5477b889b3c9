//! Registry entry-point: loads settings, prepares the store, and serves HTTP.

mod server;

use std::ffi::OsString;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use producer_registry::inbound::http::health::HealthState;
use producer_registry::outbound::persistence::{DbPool, PoolConfig, run_pending_migrations};
use producer_registry::settings::RegistrySettings;
use server::{ServerConfig, create_server};

/// Apply migrations and open the connection pool.
async fn connect_store(settings: &RegistrySettings) -> std::io::Result<DbPool> {
    let database_url = settings.database_url();

    let migration_url = database_url.clone();
    let applied = tokio::task::spawn_blocking(move || run_pending_migrations(&migration_url))
        .await
        .map_err(|err| std::io::Error::other(format!("migration task failed: {err}")))?
        .map_err(|err| std::io::Error::other(err.to_string()))?;
    info!(applied, "schema up to date");

    let mut pool_config = PoolConfig::new(database_url);
    if let Some(max_size) = settings.pool_max_size {
        pool_config = pool_config.with_max_size(max_size);
    }
    DbPool::new(pool_config)
        .await
        .map_err(|err| std::io::Error::other(err.to_string()))
}

/// Resolve settings from command-line arguments and `REGISTRY_*` variables.
fn load_settings<I>(args: I) -> std::io::Result<RegistrySettings>
where
    I: IntoIterator<Item = OsString>,
{
    RegistrySettings::load_from_iter(args)
        .map_err(|err| std::io::Error::other(format!("invalid configuration: {err}")))
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = load_settings(std::env::args_os())?;

    let mut config =
        ServerConfig::new(settings.bind_addr()).with_mock_seed(settings.mock_seed);
    if settings.in_memory {
        warn!("REGISTRY_IN_MEMORY is set; records are lost on restart");
    } else {
        config = config.with_db_pool(connect_store(&settings).await?);
    }

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, config)?;
    server.await
}
