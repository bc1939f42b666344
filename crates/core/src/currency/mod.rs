//! Exchange rate lookups against a single upstream provider.

pub mod conversion;
pub mod date;
pub mod exchange;
pub mod query;
pub mod upstream;
pub mod validation;

pub use conversion::{ConversionError, convert_amount};
pub use date::{DateError, DateParts, MIN_YEAR, ResolvedDate, resolve_target_date};
pub use exchange::{ExchangeRateResult, SupportedCurrencies};
pub use query::{ExchangeQuery, QueryError, check_amount};
pub use upstream::{CurrencySymbol, UpstreamRateResponse, UpstreamSymbolsResponse};
pub use validation::{ResponseCheckError, validate_rate_response, validate_symbols_response};
