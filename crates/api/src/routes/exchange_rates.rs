//! Exchange rate lookup routes.

use axum::{
    Json, Router,
    extract::{Query, State, rejection::QueryRejection},
    routing::get,
};
use chrono::Utc;
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::{error, info, warn};
use utoipa::IntoParams;

use fxgate_core::currency::{
    DateError, DateParts, ExchangeQuery, ExchangeRateResult, check_amount, convert_amount,
    resolve_target_date, validate_rate_response,
};
use fxgate_shared::AppError;

use crate::{
    AppState,
    error::{ApiError, ErrorBody},
};

/// Creates the exchange rate routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/exchange-rates", get(get_exchange_rate))
}

/// Query parameters for an exchange rate lookup.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ExchangeRateParams {
    /// Source currency code, any case.
    #[param(example = "usd")]
    pub source_currency: String,
    /// Target currency code, any case.
    #[param(example = "php")]
    pub target_currency: String,
    /// Amount of source currency (defaults to 1).
    #[param(value_type = Option<f64>, example = 2)]
    pub amount: Option<Decimal>,
    /// Year, at least 1999.
    #[param(minimum = 1999)]
    pub year: Option<i32>,
    /// Month, 1-12.
    #[param(minimum = 1, maximum = 12)]
    pub month: Option<u32>,
    /// Day of month, 1-31.
    #[param(minimum = 1, maximum = 31)]
    pub day: Option<u32>,
}

/// GET `/exchange-rates` - Rate for a currency pair on a date.
///
/// Missing or non-calendar dates fall back to today. Out-of-range date
/// fields and non-positive amounts are 422, future dates are 400, and any
/// upstream failure is 500.
#[utoipa::path(
    get,
    path = "/v1/exchange-rates",
    tag = "Exchange Rates",
    params(ExchangeRateParams),
    responses(
        (status = 200, description = "Currency exchange rate on a given date", body = ExchangeRateResult),
        (status = 400, description = "Date later than today", body = ErrorBody),
        (status = 422, description = "Missing or out-of-range parameters", body = ErrorBody),
        (status = 500, description = "Provider unreachable or response invalid", body = ErrorBody),
    )
)]
pub(crate) async fn get_exchange_rate(
    State(state): State<AppState>,
    params: Result<Query<ExchangeRateParams>, QueryRejection>,
) -> Result<Json<ExchangeRateResult>, ApiError> {
    let Query(params) = params.inspect_err(|rejection| {
        warn!(error = %rejection.body_text(), "Rejected exchange rate parameters");
    })?;

    info!(
        source = %params.source_currency,
        target = %params.target_currency,
        "Processing request for exchange rate"
    );

    let amount = params.amount.unwrap_or(Decimal::ONE);
    check_amount(amount).map_err(|e| {
        warn!(amount = %amount, error = %e, "Rejected exchange rate amount");
        AppError::InvalidParameters(e.to_string())
    })?;

    let parts = DateParts::new(params.year, params.month, params.day);
    let today = Utc::now().date_naive();
    let resolved = resolve_target_date(parts, today).map_err(|e| date_error(&e, parts))?;

    if resolved.is_fallback() {
        warn!(
            year = ?params.year,
            month = ?params.month,
            day = ?params.day,
            "Target date either not provided or invalid, defaulting to current date"
        );
    }

    let query = ExchangeQuery::new(
        &params.source_currency,
        &params.target_currency,
        amount,
        resolved.date(),
    )
    .map_err(|e| AppError::InvalidParameters(e.to_string()))?;

    let places = state.decimal_places;
    info!(
        host = %state.exchange_rate_client.host(),
        date = %query.target_date(),
        base = %query.source_currency(),
        symbols = %query.target_currency(),
        places,
        "Retrieving exchange rate"
    );

    let response = state
        .exchange_rate_client
        .fetch_rate(
            query.target_date(),
            query.source_currency(),
            query.target_currency(),
            places,
        )
        .await
        .inspect_err(|e| {
            error!(
                source = %query.source_currency(),
                target = %query.target_currency(),
                date = %query.target_date(),
                error = %e,
                "Unable to query exchange rate server"
            );
        })?;

    let upstream_rate = validate_rate_response(&query, &response).map_err(|e| {
        error!(
            source = %query.source_currency(),
            target = %query.target_currency(),
            date = %query.target_date(),
            check = %e,
            response = ?response,
            "Invalid exchange rate server response"
        );
        AppError::InvalidUpstreamResponse
    })?;

    let rate = convert_amount(query.amount(), upstream_rate, places).map_err(|e| {
        error!(error = %e, "Rate conversion failed");
        AppError::InvalidParameters(e.to_string())
    })?;

    info!(
        source = %query.source_currency(),
        target = %query.target_currency(),
        date = %query.target_date(),
        upstream_rate = %upstream_rate,
        rate = %rate,
        "Successfully retrieved exchange rate"
    );

    Ok(Json(ExchangeRateResult::new(&query, rate)))
}

fn date_error(err: &DateError, parts: DateParts) -> AppError {
    match err {
        DateError::InFuture(date) => {
            error!(date = %date, "Provided date is later than the current date");
            AppError::InvalidDate(date.to_string())
        }
        other => {
            warn!(error = %other, parts = ?parts, "Rejected exchange rate date");
            AppError::InvalidParameters(other.to_string())
        }
    }
}
