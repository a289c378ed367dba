use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use common::{Bar, Error, PriceSource, Result};

use crate::trailing;

/// In-process price source backed by a map of ticker to bars.
///
/// Useful for tests and for callers that already hold the data. Clones
/// share the same underlying map.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    bars: Arc<RwLock<HashMap<String, Vec<Bar>>>>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the bars held for `ticker`.
    pub async fn insert(&self, ticker: impl Into<String>, bars: Vec<Bar>) {
        let ticker = ticker.into();
        debug!(ticker = %ticker, bars = bars.len(), "MemorySource updated");
        self.bars.write().await.insert(ticker, bars);
    }

    pub async fn remove(&self, ticker: &str) -> Option<Vec<Bar>> {
        self.bars.write().await.remove(ticker)
    }
}

#[async_trait]
impl PriceSource for MemorySource {
    async fn fetch_bars(&self, ticker: &str, lookback_bars: usize) -> Result<Vec<Bar>> {
        let bars = self
            .bars
            .read()
            .await
            .get(ticker)
            .cloned()
            .ok_or_else(|| Error::source_unavailable(ticker, "no bars loaded for ticker"))?;
        Ok(trailing(bars, lookback_bars))
    }
}
