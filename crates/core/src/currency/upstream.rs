//! Payloads returned by the upstream exchange rate provider.
//!
//! Every field is optional on the wire so that a structurally odd payload
//! still parses and is rejected by [`super::validation`] instead.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Historical rates for one base currency on one date.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpstreamRateResponse {
    /// Provider-reported success flag.
    #[serde(default)]
    pub success: bool,
    /// Base currency the rates are quoted against.
    #[serde(default)]
    pub base: Option<String>,
    /// Date of the rates, `YYYY-MM-DD`.
    #[serde(default)]
    pub date: Option<String>,
    /// Rates keyed by currency code.
    #[serde(default)]
    pub rates: BTreeMap<String, Option<Decimal>>,
}

/// A currency the provider can quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CurrencySymbol {
    /// Currency code (e.g. "PHP").
    #[schema(example = "PHP")]
    pub code: String,
    /// Human readable name (e.g. "Philippine Peso").
    #[schema(example = "Philippine Peso")]
    pub description: String,
}

/// Symbols listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpstreamSymbolsResponse {
    /// Provider-reported success flag.
    #[serde(default)]
    pub success: bool,
    /// Symbols keyed by currency code.
    #[serde(default)]
    pub symbols: Option<BTreeMap<String, CurrencySymbol>>,
}
