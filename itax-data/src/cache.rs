//! In-memory freshness cache in front of another [`IndicatorSource`].

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::indicators::{Indicator, IndicatorError, IndicatorMap};
use crate::source::IndicatorSource;

pub const DEFAULT_TTL_HOURS: i64 = 24;

type Clock = Arc<dyn Fn() -> DateTime<Utc> + Send + Sync>;

struct CacheEntry {
    fetched_at: DateTime<Utc>,
    data: IndicatorMap,
}

/// Memoises fetches per (country list, indicator).
///
/// Entries older than `ttl` are refetched on the next request. Failed fetches
/// are passed through and leave the cache untouched.
pub struct CachedIndicatorSource<S> {
    inner: S,
    ttl: Duration,
    clock: Clock,
    entries: Mutex<HashMap<(String, Indicator), CacheEntry>>,
}

impl<S> CachedIndicatorSource<S> {
    pub fn new(
        inner: S,
        ttl: Duration,
    ) -> Self {
        Self::with_clock(inner, ttl, Arc::new(Utc::now))
    }

    pub fn with_clock(
        inner: S,
        ttl: Duration,
        clock: Clock,
    ) -> Self {
        Self {
            inner,
            ttl,
            clock,
            entries: Mutex::new(HashMap::new()),
        }
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }
}

#[async_trait]
impl<S: IndicatorSource> IndicatorSource for CachedIndicatorSource<S> {
    async fn fetch(
        &self,
        codes: &[&str],
        indicator: Indicator,
    ) -> Result<IndicatorMap, IndicatorError> {
        let key = (codes.join(";"), indicator);
        let now = (self.clock)();

        {
            let entries = self.entries.lock().await;
            let fresh = entries
                .get(&key)
                .filter(|entry| now - entry.fetched_at < self.ttl);
            if let Some(entry) = fresh {
                debug!(%indicator, "indicator cache hit");
                return Ok(entry.data.clone());
            }
        }

        let data = self.inner.fetch(codes, indicator).await?;
        info!(%indicator, countries = data.len(), "indicator cache refreshed");

        self.entries.lock().await.insert(
            key,
            CacheEntry {
                fetched_at: now,
                data: data.clone(),
            },
        );
        Ok(data)
    }
}
