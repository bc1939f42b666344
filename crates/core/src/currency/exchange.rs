//! Results returned to callers.

use chrono::{NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::ToSchema;

use super::query::ExchangeQuery;
use super::upstream::CurrencySymbol;

/// Converted rate for a currency pair on a date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ExchangeRateResult {
    /// Source currency code.
    #[schema(example = "USD")]
    pub source_currency: String,
    /// Target currency code.
    #[schema(example = "PHP")]
    pub target_currency: String,
    /// Amount of target currency for the requested amount of source currency.
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64, example = 100.13)]
    pub rate: Decimal,
    /// Resolved lookup date at midnight.
    pub date: NaiveDateTime,
}

impl ExchangeRateResult {
    /// Creates a result for `query` with the computed rate.
    #[must_use]
    pub fn new(query: &ExchangeQuery, rate: Decimal) -> Self {
        Self {
            source_currency: query.source_currency().to_string(),
            target_currency: query.target_currency().to_string(),
            rate,
            date: query.target_date().and_time(NaiveTime::MIN),
        }
    }
}

/// Currencies the upstream provider can quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct SupportedCurrencies {
    /// Listed symbols, in no guaranteed order.
    pub supported_currencies: Vec<CurrencySymbol>,
}
