//! Supported currency listing routes.

use axum::{
    Json, Router,
    extract::State,
    response::{IntoResponse, Response},
    routing::get,
};
use serde::Serialize;
use tracing::{error, info};
use utoipa::ToSchema;

use fxgate_core::currency::{CurrencySymbol, SupportedCurrencies, validate_symbols_response};
use fxgate_shared::AppError;

use crate::{
    AppState,
    error::{ApiError, ErrorBody},
};

/// Creates the currency routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/supported-currencies", get(list_supported_currencies))
}

/// Failed currency listing: the usual error fields plus an empty list.
#[derive(Debug, Serialize, ToSchema)]
pub struct CurrenciesErrorBody {
    #[serde(flatten)]
    error: ErrorBody,
    supported_currencies: Vec<CurrencySymbol>,
}

/// Error returned by the listing handler.
#[derive(Debug)]
pub(crate) struct CurrenciesError(ApiError);

impl IntoResponse for CurrenciesError {
    fn into_response(self) -> Response {
        let body = CurrenciesErrorBody {
            error: self.0.body(),
            supported_currencies: Vec::new(),
        };
        (self.0.status(), Json(body)).into_response()
    }
}

/// GET `/supported-currencies` - Currencies the upstream provider can quote.
#[utoipa::path(
    get,
    path = "/v1/supported-currencies",
    tag = "Currencies",
    responses(
        (status = 200, description = "Currencies the provider can quote", body = SupportedCurrencies),
        (status = 500, description = "Provider unreachable or response invalid", body = CurrenciesErrorBody),
    )
)]
pub(crate) async fn list_supported_currencies(
    State(state): State<AppState>,
) -> Result<Json<SupportedCurrencies>, CurrenciesError> {
    info!("Processing request for supported currencies");

    let symbols = fetch_symbols(&state).await.map_err(CurrenciesError)?;

    info!(count = symbols.len(), "Successfully retrieved supported currencies");

    Ok(Json(SupportedCurrencies {
        supported_currencies: symbols,
    }))
}

async fn fetch_symbols(state: &AppState) -> Result<Vec<CurrencySymbol>, ApiError> {
    let response = state
        .exchange_rate_client
        .fetch_symbols()
        .await
        .inspect_err(|e| error!(error = %e, "Unable to query exchange rate server symbols"))?;

    let symbols = validate_symbols_response(response).map_err(|e| {
        error!(check = %e, "Invalid exchange rate server symbols response");
        AppError::InvalidUpstreamResponse
    })?;

    Ok(symbols)
}
