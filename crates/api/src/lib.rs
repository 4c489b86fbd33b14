//! # Tidyslot API
//!
//! The web server for the Tidyslot cleaning-booking calendar. It serves a
//! GraphQL endpoint for bookings and weekly slot grids, plus a small REST
//! mirror and health endpoints.
//!
//! ## Architecture
//!
//! - **Routes**: Define endpoints and URL structure
//! - **GraphQL**: Schema, object types and resolvers
//! - **Handlers**: Business rules shared by GraphQL and REST, written against
//!   the `BookingStore` trait
//! - **Middleware**: Error mapping for both surfaces
//! - **Config**: Environment configuration
//! - **Client**: GraphQL client used by the `week-grid` CLI

/// GraphQL client for fetching weeks from a running server
pub mod client;
/// Configuration module for API settings
pub mod config;
/// GraphQL schema and resolvers
pub mod graphql;
/// Business rules over the booking store
pub mod handlers;
/// Error handling shared by the REST and GraphQL surfaces
pub mod middleware;
/// Route definitions and API endpoint structure
pub mod routes;

use std::sync::Arc;
use std::time::Duration;

use axum::{
    http::{header, HeaderValue, Method},
    Router,
};
use eyre::{Result, WrapErr};
use tidyslot_db::BookingStore;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{filter::LevelFilter, EnvFilter, FmtSubscriber};

use graphql::BookingSchema;

/// Shared application state that is accessible to all request handlers
pub struct ApiState {
    /// Persistence backend for bookings and weeks
    pub store: Arc<dyn BookingStore>,
    /// GraphQL schema, built over the same store
    pub schema: BookingSchema,
    /// Whether `GET /graphql` serves the GraphiQL playground
    pub graphql_playground: bool,
}

impl ApiState {
    pub fn new(store: Arc<dyn BookingStore>, graphql_playground: bool) -> Self {
        let schema = graphql::build_schema(Arc::clone(&store));
        Self {
            store,
            schema,
            graphql_playground,
        }
    }
}

/// Builds the application router with every route and the shared state.
pub fn build_router(state: Arc<ApiState>) -> Router {
    Router::new()
        // Health check endpoints
        .merge(routes::health::routes())
        // GraphQL endpoint and playground
        .merge(routes::graphql::routes())
        // REST mirror of week lookup
        .merge(routes::weeks::routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Applies CORS and request timeout settings from the configuration.
pub fn apply_layers(app: Router, config: &config::ApiConfig) -> Result<Router> {
    let app = match &config.cors_origins {
        Some(origins) => {
            let origins = origins
                .iter()
                .map(|origin| origin.parse::<HeaderValue>())
                .collect::<Result<Vec<_>, _>>()
                .wrap_err("Invalid API_CORS_ORIGINS value")?;

            let cors = CorsLayer::new()
                .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION, header::ACCEPT])
                .allow_origin(origins)
                .allow_credentials(true);

            app.layer(cors)
        }
        None => app,
    };

    Ok(app.layer(
        ServiceBuilder::new().layer(TimeoutLayer::new(Duration::from_secs(
            config.request_timeout,
        ))),
    ))
}

/// Installs the global tracing subscriber. `RUST_LOG` wins over the
/// configured level when set.
pub fn init_tracing(level: tracing::Level) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::default().add_directive(LevelFilter::from_level(level).into()));

    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    Ok(())
}

/// Starts the API server with the provided configuration and store
///
/// # Example
///
/// ```no_run
/// # async fn run() -> eyre::Result<()> {
/// use std::sync::Arc;
/// use tidyslot_api::{config::ApiConfig, start_server};
/// use tidyslot_db::{create_pool, PgBookingStore};
///
/// let config = ApiConfig::from_env()?;
/// let pool = create_pool(&config.database_url).await?;
/// start_server(config, Arc::new(PgBookingStore::new(pool))).await?;
/// # Ok(())
/// # }
/// ```
pub async fn start_server(config: config::ApiConfig, store: Arc<dyn BookingStore>) -> Result<()> {
    init_tracing(config.log_level)?;

    let state = Arc::new(ApiState::new(store, config.graphql_playground));
    let app = apply_layers(build_router(state), &config)?;

    // Start the HTTP server
    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    if config.graphql_playground {
        info!("GraphiQL playground at http://{}/graphql", addr);
    }
    axum::serve(listener, app).await?;

    Ok(())
}
