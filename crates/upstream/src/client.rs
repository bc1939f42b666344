//! Exchange rate provider client.

use chrono::NaiveDate;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, error};

use fxgate_core::currency::{UpstreamRateResponse, UpstreamSymbolsResponse};
use fxgate_shared::ExchangeRateConfig;

use crate::error::UpstreamError;

/// Client for the upstream exchange rate provider.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct ExchangeRateClient {
    client: Client,
    host: String,
}

impl ExchangeRateClient {
    /// Creates a client for the configured provider.
    #[must_use]
    pub fn new(config: &ExchangeRateConfig) -> Self {
        Self::with_host(&config.host)
    }

    /// Creates a client for the given base URL.
    #[must_use]
    pub fn with_host(host: &str) -> Self {
        Self {
            client: Client::new(),
            host: host.trim_end_matches('/').to_string(),
        }
    }

    /// Base URL requests are issued against.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Fetches the historical rate of `symbol` against `base` on `date`.
    ///
    /// `places` is forwarded so the provider rounds to the same precision.
    pub async fn fetch_rate(
        &self,
        date: NaiveDate,
        base: &str,
        symbol: &str,
        places: u32,
    ) -> Result<UpstreamRateResponse, UpstreamError> {
        let url = format!("{}/{}", self.host, date.format("%Y-%m-%d"));
        let params = [
            ("places", places.to_string()),
            ("base", base.to_string()),
            ("symbols", symbol.to_string()),
        ];

        self.get_json(&url, &params).await
    }

    /// Fetches the list of currencies the provider supports.
    pub async fn fetch_symbols(&self) -> Result<UpstreamSymbolsResponse, UpstreamError> {
        let url = format!("{}/symbols", self.host);
        self.get_json(&url, &[]).await
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        params: &[(&str, String)],
    ) -> Result<T, UpstreamError> {
        debug!(url = %url, params = ?params, "Calling exchange rate server");

        let response = self.client.get(url).query(params).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if status != StatusCode::OK {
            error!(url = %url, status = status.as_u16(), body = %body, "Exchange rate server error");
            return Err(UpstreamError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}
