//! HTTP client for the World Bank indicators API (v2).
//!
//! URL pattern:
//! `{base_url}/v2/country/{ISO3;ISO3;...}/indicator/{code}?format=json&per_page=20000&mrnev=1`
//!
//! `mrnev=1` asks for the most recent non-empty value per country.

use std::time::Duration;

use async_trait::async_trait;
use tracing::info;

use crate::indicators::{Indicator, IndicatorError, IndicatorMap, parse_world_bank_payload};
use crate::source::IndicatorSource;

pub const DEFAULT_BASE_URL: &str = "https://api.worldbank.org";

#[derive(Debug, Clone)]
pub struct WorldBankClient {
    http: reqwest::Client,
    base_url: String,
}

impl WorldBankClient {
    pub fn new(
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, IndicatorError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(IndicatorError::Client)?;

        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Ok(Self { http, base_url })
    }

    pub fn indicator_url(
        &self,
        codes: &[&str],
        indicator: Indicator,
    ) -> String {
        format!(
            "{}/v2/country/{}/indicator/{}?format=json&per_page=20000&mrnev=1",
            self.base_url,
            codes.join(";"),
            indicator.code()
        )
    }
}

#[async_trait]
impl IndicatorSource for WorldBankClient {
    async fn fetch(
        &self,
        codes: &[&str],
        indicator: Indicator,
    ) -> Result<IndicatorMap, IndicatorError> {
        let url = self.indicator_url(codes, indicator);
        info!(%indicator, countries = codes.len(), "fetching World Bank indicator");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|source| IndicatorError::Http { indicator, source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(IndicatorError::Status {
                indicator,
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| IndicatorError::Http { indicator, source })?;

        parse_world_bank_payload(indicator, &body)
    }
}
