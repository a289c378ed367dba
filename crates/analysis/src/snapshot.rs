use std::collections::BTreeMap;

use serde::Serialize;

use common::Signal;

/// Output of one engine pass over one price series.
///
/// Every indicator is optional: it is `None` when the series is too short
/// for that indicator, or when the statistic is undefined (Sharpe ratio on
/// flat prices). No NaN or infinity is ever stored.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct IndicatorSnapshot {
    /// Bars in the input series.
    pub bars: usize,
    /// Bars the engine needs before it will derive a signal.
    pub required_bars: usize,
    pub rsi: Option<f64>,
    pub macd: Option<f64>,
    pub macd_signal_line: Option<f64>,
    pub macd_histogram: Option<f64>,
    /// Latest simple moving average per configured period.
    pub moving_averages: BTreeMap<usize, Option<f64>>,
    pub support: Option<f64>,
    pub resistance: Option<f64>,
    pub last_volume: Option<f64>,
    pub average_volume: Option<f64>,
    pub volatility: Option<f64>,
    pub sharpe_ratio: Option<f64>,
}

impl IndicatorSnapshot {
    pub fn moving_average(&self, period: usize) -> Option<f64> {
        self.moving_averages.get(&period).copied().flatten()
    }
}

/// A snapshot together with the signal derived from it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    pub signal: Signal,
    pub snapshot: IndicatorSnapshot,
}
