//! Client for the upstream exchange rate provider.
//!
//! The provider exposes historical rates at `GET {host}/{YYYY-MM-DD}` and a
//! symbols listing at `GET {host}/symbols`. Requests are issued once, with
//! transport defaults: no retries, no timeout override.

pub mod client;
pub mod error;

pub use client::ExchangeRateClient;
pub use error::UpstreamError;
