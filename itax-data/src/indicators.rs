//! World Bank indicator codes and the response payload parser.

use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;

use serde_json::Value;
use thiserror::Error;
use tracing::warn;

/// The World Bank indicators the comparison needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Indicator {
    /// GNI per capita, PPP (current international $).
    GniPerCapitaPpp,
    /// Gini index, 0-100.
    Gini,
    /// PPP conversion factor, local currency units per international $.
    PppConversionFactor,
}

impl Indicator {
    pub fn code(&self) -> &'static str {
        match self {
            Self::GniPerCapitaPpp => "NY.GNP.PCAP.PP.CD",
            Self::Gini => "SI.POV.GINI",
            Self::PppConversionFactor => "PA.NUS.PPP",
        }
    }
}

impl fmt::Display for Indicator {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Most recent observation for one country.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct IndicatorValue {
    pub value: Option<f64>,
    pub year: Option<i32>,
}

/// Observations keyed by ISO3 country code.
pub type IndicatorMap = HashMap<String, IndicatorValue>;

#[derive(Debug, Error)]
pub enum IndicatorError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("request for {indicator} failed: {source}")]
    Http {
        indicator: Indicator,
        #[source]
        source: reqwest::Error,
    },

    #[error("World Bank returned HTTP {status} for {indicator}")]
    Status { indicator: Indicator, status: u16 },

    #[error("unexpected payload shape for {indicator}")]
    UnexpectedPayload { indicator: Indicator },

    #[error("invalid JSON for {indicator}: {source}")]
    Json {
        indicator: Indicator,
        #[source]
        source: serde_json::Error,
    },

    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Parses a World Bank v2 JSON response body.
///
/// The body is `[metadata, [entry, ...]]` where each entry carries
/// `countryiso3code`, `value` and `date`. Entries without a country code are
/// skipped, and the first entry seen for a code wins.
pub fn parse_world_bank_payload(
    indicator: Indicator,
    body: &[u8],
) -> Result<IndicatorMap, IndicatorError> {
    let payload: Value =
        serde_json::from_slice(body).map_err(|source| IndicatorError::Json { indicator, source })?;

    let entries = payload
        .as_array()
        .and_then(|parts| parts.get(1))
        .and_then(Value::as_array)
        .ok_or(IndicatorError::UnexpectedPayload { indicator })?;

    let mut map = IndicatorMap::new();
    for entry in entries {
        let Some(code) = entry
            .get("countryiso3code")
            .and_then(Value::as_str)
            .filter(|code| !code.is_empty())
        else {
            warn!(%indicator, "skipping entry without country code");
            continue;
        };

        map.entry(code.to_owned()).or_insert_with(|| IndicatorValue {
            value: entry.get("value").and_then(Value::as_f64),
            year: entry
                .get("date")
                .and_then(Value::as_str)
                .and_then(|date| date.trim().parse().ok()),
        });
    }

    Ok(map)
}
