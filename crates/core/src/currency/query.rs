//! Exchange query built from a caller's request.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

/// Query construction errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// Amount is zero or negative.
    #[error("amount must be greater than 0, got {0}")]
    NonPositiveAmount(Decimal),
}

/// Checks that an amount can be converted.
pub fn check_amount(amount: Decimal) -> Result<(), QueryError> {
    if amount <= Decimal::ZERO {
        return Err(QueryError::NonPositiveAmount(amount));
    }
    Ok(())
}

/// A single-date, single-pair rate lookup.
///
/// Currency codes are upper-cased on construction. The query is immutable
/// once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExchangeQuery {
    source_currency: String,
    target_currency: String,
    amount: Decimal,
    target_date: NaiveDate,
}

impl ExchangeQuery {
    /// Builds a query, normalizing currency codes.
    pub fn new(
        source_currency: &str,
        target_currency: &str,
        amount: Decimal,
        target_date: NaiveDate,
    ) -> Result<Self, QueryError> {
        check_amount(amount)?;

        Ok(Self {
            source_currency: source_currency.to_uppercase(),
            target_currency: target_currency.to_uppercase(),
            amount,
            target_date,
        })
    }

    /// Upper-cased source currency code.
    #[must_use]
    pub fn source_currency(&self) -> &str {
        &self.source_currency
    }

    /// Upper-cased target currency code.
    #[must_use]
    pub fn target_currency(&self) -> &str {
        &self.target_currency
    }

    /// Amount of source currency to convert.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.amount
    }

    /// Resolved lookup date.
    #[must_use]
    pub const fn target_date(&self) -> NaiveDate {
        self.target_date
    }
}
