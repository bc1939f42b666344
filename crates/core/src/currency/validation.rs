//! Upstream payload validation.
//!
//! The checks report which rule failed so it can be logged; callers are
//! expected to collapse every failure into one generic error.

use rust_decimal::Decimal;
use thiserror::Error;

use super::query::ExchangeQuery;
use super::upstream::{CurrencySymbol, UpstreamRateResponse, UpstreamSymbolsResponse};

/// A rule the upstream payload broke.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResponseCheckError {
    /// Exactly one rate was expected.
    #[error("expected exactly one rate, got {0}")]
    RateCount(usize),

    /// Provider reported failure.
    #[error("upstream reported success=false")]
    Unsuccessful,

    /// Base currency differs from the requested source currency.
    #[error("base mismatch: expected {expected}, got {got:?}")]
    BaseMismatch {
        /// Requested source currency.
        expected: String,
        /// Reported base currency.
        got: Option<String>,
    },

    /// Date differs from the resolved lookup date.
    #[error("date mismatch: expected {expected}, got {got:?}")]
    DateMismatch {
        /// Resolved lookup date.
        expected: String,
        /// Reported date.
        got: Option<String>,
    },

    /// No usable rate for the target currency.
    #[error("no non-zero rate for {0}")]
    MissingRate(String),

    /// Symbols listing was absent or empty.
    #[error("no symbols listed")]
    NoSymbols,
}

/// Validates a rate payload against the query and returns the target rate.
pub fn validate_rate_response(
    query: &ExchangeQuery,
    response: &UpstreamRateResponse,
) -> Result<Decimal, ResponseCheckError> {
    if response.rates.len() != 1 {
        return Err(ResponseCheckError::RateCount(response.rates.len()));
    }

    if !response.success {
        return Err(ResponseCheckError::Unsuccessful);
    }

    let base_matches = response
        .base
        .as_deref()
        .is_some_and(|base| base.eq_ignore_ascii_case(query.source_currency()));
    if !base_matches {
        return Err(ResponseCheckError::BaseMismatch {
            expected: query.source_currency().to_string(),
            got: response.base.clone(),
        });
    }

    let expected_date = query.target_date().format("%Y-%m-%d").to_string();
    if response.date.as_deref() != Some(expected_date.as_str()) {
        return Err(ResponseCheckError::DateMismatch {
            expected: expected_date,
            got: response.date.clone(),
        });
    }

    response
        .rates
        .get(query.target_currency())
        .copied()
        .flatten()
        .filter(|rate| !rate.is_zero())
        .ok_or_else(|| ResponseCheckError::MissingRate(query.target_currency().to_string()))
}

/// Validates a symbols payload and returns the listed symbols.
pub fn validate_symbols_response(
    response: UpstreamSymbolsResponse,
) -> Result<Vec<CurrencySymbol>, ResponseCheckError> {
    if !response.success {
        return Err(ResponseCheckError::Unsuccessful);
    }

    match response.symbols {
        Some(symbols) if !symbols.is_empty() => Ok(symbols.into_values().collect()),
        _ => Err(ResponseCheckError::NoSymbols),
    }
}
