use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::debug;

use common::{Bar, Error, PriceSource, Result};

use crate::trailing;

/// Reads daily bars from `<data_dir>/<TICKER>.json`, a JSON array of bars
/// (oldest first):
///
/// ```json
/// [{"timestamp": "2024-06-03T00:00:00Z", "open": 1.0, "high": 1.2,
///   "low": 0.9, "close": 1.1, "volume": 12000.0}]
/// ```
#[derive(Debug, Clone)]
pub struct FileSource {
    data_dir: PathBuf,
}

impl FileSource {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Path for a ticker. Tickers may only contain ASCII letters, digits and
    /// `.^=_-` so a ticker can never escape the data directory.
    pub fn path_for(&self, ticker: &str) -> Result<PathBuf> {
        let valid = !ticker.is_empty()
            && ticker != "."
            && ticker != ".."
            && ticker
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || ".^=_-".contains(c));
        if !valid {
            return Err(Error::source_unavailable(ticker, "invalid ticker symbol"));
        }
        Ok(self.data_dir.join(format!("{ticker}.json")))
    }
}

#[async_trait]
impl PriceSource for FileSource {
    async fn fetch_bars(&self, ticker: &str, lookback_bars: usize) -> Result<Vec<Bar>> {
        let path = self.path_for(ticker)?;
        let content = tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| Error::source_unavailable(ticker, format!("{}: {e}", path.display())))?;
        let bars: Vec<Bar> = serde_json::from_str(&content)
            .map_err(|e| Error::source_unavailable(ticker, format!("{}: {e}", path.display())))?;
        debug!(
            ticker = %ticker,
            bars = bars.len(),
            path = %path.display(),
            "Bars loaded from file"
        );
        Ok(trailing(bars, lookback_bars))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_BARS: &str = r#"[
        {"timestamp": "2024-06-03T00:00:00Z", "open": 10.0, "high": 11.0, "low": 9.5, "close": 10.5, "volume": 1200.0},
        {"timestamp": "2024-06-04T00:00:00Z", "open": 10.5, "high": 12.0, "low": 10.1, "close": 11.8, "volume": 1500.0}
    ]"#;

    #[tokio::test]
    async fn reads_bars_from_json_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("EQNR.OL.json"), TWO_BARS).unwrap();
        let source = FileSource::new(dir.path());

        let bars = source.fetch_bars("EQNR.OL", 252).await.unwrap();
        assert_eq!(bars.len(), 2);
        assert_eq!(bars[1].close, 11.8);

        let last = source.fetch_bars("EQNR.OL", 1).await.unwrap();
        assert_eq!(last.len(), 1);
        assert_eq!(last[0].volume, 1500.0);
    }

    #[tokio::test]
    async fn missing_file_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let source = FileSource::new(dir.path());
        let err = source.fetch_bars("AAPL", 10).await.unwrap_err();
        assert!(matches!(err, Error::SourceUnavailable { .. }));
    }

    #[tokio::test]
    async fn malformed_json_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("BAD.json"), "{not json").unwrap();
        let source = FileSource::new(dir.path());
        let err = source.fetch_bars("BAD", 10).await.unwrap_err();
        assert!(matches!(err, Error::SourceUnavailable { ref ticker, .. } if ticker == "BAD"));
    }

    #[tokio::test]
    async fn empty_array_is_empty_series() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("NEW.json"), "[]").unwrap();
        let source = FileSource::new(dir.path());
        assert!(source.fetch_bars("NEW", 10).await.unwrap().is_empty());
    }

    #[test]
    fn rejects_path_like_tickers() {
        let source = FileSource::new("/data");
        assert!(source.path_for("../etc/passwd").is_err());
        assert!(source.path_for("a/b").is_err());
        assert!(source.path_for("..").is_err());
        assert!(source.path_for("").is_err());
        assert_eq!(
            source.path_for("^OSEAX").unwrap(),
            PathBuf::from("/data/^OSEAX.json")
        );
        assert!(source.path_for("BTC-USD").is_ok());
    }
}
