//! Transient state used by the service.
//!
//! This is initialized on startup.

use std::sync::Arc;
use std::time::Duration;

use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use thiserror::Error;
use tracing::{info_span, Instrument};

use query_engine_execution::{database, metrics};
use sales_query_configuration::Configuration;

/// State shared by every request handler.
#[derive(Clone)]
pub struct ServerState {
    pub configuration: Arc<Configuration>,
    pub pool: SqlitePool,
    pub metrics: metrics::Metrics,
    pub metrics_registry: prometheus::Registry,
}

/// Create a connection pool, seed it if configured, and wrap it inside a server State.
pub async fn create_state(configuration: Configuration) -> Result<ServerState, InitializationError> {
    let mut metrics_registry = prometheus::Registry::new();
    let metrics = metrics::Metrics::initialize(&mut metrics_registry)
        .map_err(InitializationError::MetricsError)?;

    let pool = create_pool(&configuration)
        .instrument(info_span!("Create connection pool"))
        .await
        .map_err(InitializationError::UnableToCreatePool)?;

    if configuration.seed_database {
        database::seed(&pool, &configuration.metadata.table)
            .await
            .map_err(InitializationError::UnableToSeedDatabase)?;
    }

    Ok(ServerState {
        configuration: Arc::new(configuration),
        pool,
        metrics,
        metrics_registry,
    })
}

/// Open a pool on the configured database.
pub async fn create_pool(configuration: &Configuration) -> Result<SqlitePool, sqlx::Error> {
    let pool_settings = &configuration.pool_settings;

    // an in-memory database lives and dies with its one connection
    let options = if is_in_memory(&configuration.connection_uri) {
        SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None::<Duration>)
            .max_lifetime(None::<Duration>)
    } else {
        SqlitePoolOptions::new()
            .max_connections(pool_settings.max_connections)
            .idle_timeout(pool_settings.idle_timeout.map(Duration::from_secs))
            .max_lifetime(pool_settings.connection_lifetime.map(Duration::from_secs))
    };

    options.connect(&configuration.connection_uri).await
}

fn is_in_memory(connection_uri: &str) -> bool {
    connection_uri.contains(":memory:") || connection_uri.contains("mode=memory")
}

/// State initialization error.
#[derive(Debug, Error)]
pub enum InitializationError {
    #[error("unable to initialize connection pool: {0}")]
    UnableToCreatePool(sqlx::Error),
    #[error("unable to seed the database: {0}")]
    UnableToSeedDatabase(query_engine_execution::error::Error),
    #[error("error initializing metrics: {0}")]
    MetricsError(prometheus::Error),
}
