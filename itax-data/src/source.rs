//! Where indicator data comes from.

use std::path::PathBuf;

use async_trait::async_trait;
use tracing::info;

use crate::indicators::{Indicator, IndicatorError, IndicatorMap, parse_world_bank_payload};

/// A provider of the latest indicator value per country.
#[async_trait]
pub trait IndicatorSource: Send + Sync {
    /// Fetches `indicator` for the given ISO3 codes. Codes the provider has
    /// no data for are simply absent from the map.
    async fn fetch(
        &self,
        codes: &[&str],
        indicator: Indicator,
    ) -> Result<IndicatorMap, IndicatorError>;
}

#[async_trait]
impl<S: IndicatorSource + ?Sized> IndicatorSource for Box<S> {
    async fn fetch(
        &self,
        codes: &[&str],
        indicator: Indicator,
    ) -> Result<IndicatorMap, IndicatorError> {
        (**self).fetch(codes, indicator).await
    }
}

/// Reads saved World Bank responses from `<dir>/<indicator code>.json`.
#[derive(Debug, Clone)]
pub struct DirectoryIndicatorSource {
    dir: PathBuf,
}

impl DirectoryIndicatorSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(
        &self,
        indicator: Indicator,
    ) -> PathBuf {
        self.dir.join(format!("{}.json", indicator.code()))
    }
}

#[async_trait]
impl IndicatorSource for DirectoryIndicatorSource {
    async fn fetch(
        &self,
        codes: &[&str],
        indicator: Indicator,
    ) -> Result<IndicatorMap, IndicatorError> {
        let path = self.path_for(indicator);
        info!(path = %path.display(), %indicator, "reading indicator file");

        let body = tokio::fs::read(&path)
            .await
            .map_err(|source| IndicatorError::Io { path, source })?;

        let mut map = parse_world_bank_payload(indicator, &body)?;
        map.retain(|code, _| codes.contains(&code.as_str()));
        Ok(map)
    }
}
