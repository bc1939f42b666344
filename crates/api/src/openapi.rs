//! OpenAPI document for the `/v1` routes.

use utoipa::OpenApi;

use fxgate_core::currency::{CurrencySymbol, ExchangeRateResult, SupportedCurrencies};

use crate::error::ErrorBody;
use crate::routes::{currencies, exchange_rates, health};

/// Path of the generated document.
pub const OPENAPI_PATH: &str = "/v1/openapi.json";

/// Path of the interactive documentation.
pub const DOCS_PATH: &str = "/v1/docs";

/// OpenAPI description of the service.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Currencies API",
        version = "v1",
        description = "Currency rate conversion API"
    ),
    paths(
        exchange_rates::get_exchange_rate,
        currencies::list_supported_currencies,
        health::health_check,
    ),
    components(schemas(ExchangeRateResult, SupportedCurrencies, CurrencySymbol, ErrorBody)),
    tags(
        (name = "Exchange Rates", description = "Historical rates for currency pairs"),
        (name = "Currencies", description = "Currencies the provider can quote"),
        (name = "Health", description = "Liveness"),
    )
)]
pub struct ApiDoc;
