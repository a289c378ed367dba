use async_trait::async_trait;

use crate::{Bar, Result};

/// Abstraction over wherever daily bars come from.
///
/// `MemorySource` and `FileSource` in `crates/feed` implement this. The
/// indicator engine never calls a source itself; the `Screener` fetches and
/// hands the bars over as a `PriceSeries`.
///
/// Implementations own any timeout or retry policy. A failure must surface as
/// `Error::SourceUnavailable`. An empty vector is a valid answer and is
/// treated downstream as insufficient data.
#[async_trait]
pub trait PriceSource: Send + Sync {
    /// Fetch up to `lookback_bars` of the most recent bars for `ticker`,
    /// oldest first.
    async fn fetch_bars(&self, ticker: &str, lookback_bars: usize) -> Result<Vec<Bar>>;
}
