use std::path::Path;

use serde::{Deserialize, Serialize};

use common::{Error, Result};

use crate::rules::SignalRules;

/// Indicator engine settings (TOML).
///
/// Every key is optional. Example `config/engine.toml`:
/// ```toml
/// ma_periods = [20, 50, 200]
/// rsi_period = 14
/// support_window_months = 2
/// volume_window_days = 21
/// sharpe_risk_free_rate = 0.02
/// min_bars = 30
///
/// [macd]
/// fast = 12
/// slow = 26
/// signal = 9
///
/// [rules]
/// oversold = 30.0
/// overbought = 70.0
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    pub ma_periods: Vec<usize>,
    pub rsi_period: usize,
    pub macd: MacdPeriods,
    pub support_window_months: usize,
    pub volume_window_days: usize,
    pub sharpe_risk_free_rate: f64,
    pub relative_strength_months: usize,
    /// Bars required before an aggregate signal is produced.
    pub min_bars: usize,
    pub rules: SignalRules,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct MacdPeriods {
    pub fast: usize,
    pub slow: usize,
    pub signal: usize,
}

impl Default for MacdPeriods {
    fn default() -> Self {
        Self {
            fast: 12,
            slow: 26,
            signal: 9,
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            ma_periods: vec![20, 50, 200],
            rsi_period: 14,
            macd: MacdPeriods::default(),
            support_window_months: 2,
            volume_window_days: 21,
            sharpe_risk_free_rate: 0.02,
            relative_strength_months: 3,
            min_bars: 30,
            rules: SignalRules::default(),
        }
    }
}

impl EngineConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml(content: &str) -> Result<Self> {
        let cfg: EngineConfig = toml::from_str(content)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Load from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml(&content)
    }

    /// Like `load`, but a missing file yields the defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load(path)
    }

    pub fn validate(&self) -> Result<()> {
        if self.ma_periods.iter().any(|&p| p == 0) {
            return Err(Error::Config("ma_periods must all be > 0".into()));
        }
        if self.rsi_period == 0 {
            return Err(Error::Config("rsi_period must be > 0".into()));
        }
        let MacdPeriods { fast, slow, signal } = self.macd;
        if fast == 0 || signal == 0 {
            return Err(Error::Config("macd periods must be > 0".into()));
        }
        if fast >= slow {
            return Err(Error::Config(format!(
                "macd.fast ({fast}) must be less than macd.slow ({slow})"
            )));
        }
        if self.support_window_months == 0 {
            return Err(Error::Config("support_window_months must be > 0".into()));
        }
        if self.volume_window_days == 0 {
            return Err(Error::Config("volume_window_days must be > 0".into()));
        }
        if self.relative_strength_months == 0 {
            return Err(Error::Config("relative_strength_months must be > 0".into()));
        }
        if !self.sharpe_risk_free_rate.is_finite() {
            return Err(Error::Config("sharpe_risk_free_rate must be finite".into()));
        }
        if self.min_bars == 0 {
            return Err(Error::Config("min_bars must be > 0".into()));
        }
        self.rules.validate()
    }
}
