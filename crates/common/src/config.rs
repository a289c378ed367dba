use crate::{Error, Result};

/// How log lines are rendered by the binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Process configuration loaded from environment variables at startup.
/// Every variable is optional; malformed values are a `Config` error.
#[derive(Debug, Clone)]
pub struct Config {
    // Bar files
    pub data_dir: String,
    pub lookback_bars: usize,

    // Engine config file path
    pub engine_config_path: String,

    // Index to compare tickers against, e.g. "^OSEAX"
    pub benchmark: Option<String>,

    // Logging
    pub log_format: LogFormat,
}

impl Config {
    const DEFAULT_LOOKBACK_BARS: usize = 252;

    /// Load configuration from environment variables.
    /// Loads `.env` if present.
    pub fn from_env() -> Result<Self> {
        let _ = dotenvy::dotenv(); // ignore error if .env not present
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from any key lookup. `from_env` uses the process
    /// environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let log_format = match lookup("ANALYST_LOG_FORMAT")
            .map(|v| v.to_lowercase())
            .as_deref()
        {
            None | Some("pretty") => LogFormat::Pretty,
            Some("json") => LogFormat::Json,
            Some(other) => {
                return Err(Error::Config(format!(
                    "ANALYST_LOG_FORMAT must be 'pretty' or 'json', got: '{other}'"
                )))
            }
        };

        let lookback_bars = match lookup("ANALYST_LOOKBACK_BARS") {
            Some(raw) => raw.trim().parse::<usize>().map_err(|_| {
                Error::Config(format!(
                    "ANALYST_LOOKBACK_BARS must be a positive integer, got: '{raw}'"
                ))
            })?,
            None => Self::DEFAULT_LOOKBACK_BARS,
        };
        if lookback_bars == 0 {
            return Err(Error::Config("ANALYST_LOOKBACK_BARS must be > 0".into()));
        }

        Ok(Config {
            data_dir: lookup("ANALYST_DATA_DIR").unwrap_or_else(|| "data".to_string()),
            lookback_bars,
            engine_config_path: lookup("ANALYST_ENGINE_CONFIG")
                .unwrap_or_else(|| "config/engine.toml".to_string()),
            benchmark: lookup("ANALYST_BENCHMARK").filter(|v| !v.trim().is_empty()),
            log_format,
        })
    }
}
