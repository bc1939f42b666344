//! HTTP API layer with Axum routes.
//!
//! This crate provides:
//! - REST API routes under `/v1`
//! - JSON error responses
//! - OpenAPI document and Swagger UI
//! - CORS and request tracing layers

pub mod error;
pub mod openapi;
pub mod routes;

#[cfg(test)]
mod test_support;

use axum::Router;
use std::sync::Arc;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use fxgate_shared::AppConfig;
use fxgate_upstream::ExchangeRateClient;

use crate::openapi::{ApiDoc, DOCS_PATH, OPENAPI_PATH};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Client for the upstream exchange rate provider.
    pub exchange_rate_client: Arc<ExchangeRateClient>,
    /// Decimal places requested upstream and used for rounding.
    pub decimal_places: u32,
}

impl AppState {
    /// Builds the state from loaded configuration.
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            exchange_rate_client: Arc::new(ExchangeRateClient::new(&config.exchange_rate)),
            decimal_places: config.exchange_rate.decimal_places,
        }
    }
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/v1", routes::api_routes())
        .merge(SwaggerUi::new(DOCS_PATH).url(OPENAPI_PATH, ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
        .with_state(state)
}

/// Any origin, with credentials. The wildcard is not allowed alongside
/// credentials, so the request's own origin, method and headers are echoed.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}
