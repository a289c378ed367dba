use common::{Error, PriceSeries, Result};

use crate::config::EngineConfig;
use crate::indicators::{
    relative_strength, sharpe_ratio, sma, support_resistance, volatility, volume_stats,
    MacdIndicator, RsiIndicator,
};
use crate::snapshot::{Analysis, IndicatorSnapshot};

/// Stateless indicator pipeline configured once and shared freely across
/// threads. Nothing is cached between calls.
#[derive(Debug, Clone)]
pub struct IndicatorEngine {
    config: EngineConfig,
    rsi: RsiIndicator,
    macd: MacdIndicator,
}

impl IndicatorEngine {
    pub fn new(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        let rsi = RsiIndicator::new(config.rsi_period);
        let macd = MacdIndicator::new(config.macd.fast, config.macd.slow, config.macd.signal);
        Ok(Self { config, rsi, macd })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Bars needed before `analyze` will emit a signal: the configured
    /// minimum, raised if RSI or the MACD line need more.
    pub fn required_bars(&self) -> usize {
        self.config
            .min_bars
            .max(self.config.rsi_period + 1)
            .max(self.config.macd.slow)
    }

    /// Compute every indicator the series is long enough for.
    pub fn compute_indicators(&self, series: &PriceSeries) -> IndicatorSnapshot {
        let closes = series.closes();
        let volumes = series.volumes();

        let macd = self.macd.compute(&closes);
        let levels = support_resistance(&closes, self.config.support_window_months);
        let volume = volume_stats(&volumes, self.config.volume_window_days);

        IndicatorSnapshot {
            bars: series.len(),
            required_bars: self.required_bars(),
            rsi: self.rsi.compute(&closes),
            macd: macd.macd,
            macd_signal_line: macd.signal,
            macd_histogram: macd.histogram,
            moving_averages: self
                .config
                .ma_periods
                .iter()
                .map(|&period| (period, sma(&closes, period)))
                .collect(),
            support: levels.map(|l| l.support),
            resistance: levels.map(|l| l.resistance),
            last_volume: volume.map(|v| v.last_volume),
            average_volume: volume.map(|v| v.average_volume),
            volatility: volatility(&closes),
            sharpe_ratio: sharpe_ratio(&closes, self.config.sharpe_risk_free_rate),
        }
    }

    /// Full pass: indicators plus the decision-table signal.
    ///
    /// Fails with `InsufficientData` when the series is shorter than
    /// `required_bars`; no signal is guessed from partial data.
    pub fn analyze(&self, series: &PriceSeries) -> Result<Analysis> {
        let required = self.required_bars();
        if !series.has_at_least(required) {
            return Err(Error::InsufficientData {
                required,
                available: series.len(),
            });
        }
        let snapshot = self.compute_indicators(series);
        let signal = self.config.rules.evaluate(&snapshot)?;
        Ok(Analysis { signal, snapshot })
    }

    /// Relative strength of `stock` against `index` over the configured
    /// number of months, in percentage points.
    pub fn relative_strength(&self, stock: &PriceSeries, index: &PriceSeries) -> Option<f64> {
        relative_strength(
            &stock.closes(),
            &index.closes(),
            self.config.relative_strength_months,
        )
    }
}
