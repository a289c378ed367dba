use serde::{Deserialize, Serialize};

use common::{Error, Result, Signal};

use crate::snapshot::IndicatorSnapshot;

/// Thresholds of the RSI/MACD decision table.
///
/// ```text
/// rsi < oversold   and macd > 0  => Buy
/// rsi > overbought and macd < 0  => Sell
/// macd > 0                       => Buy
/// macd < 0                       => Sell
/// otherwise                      => Hold
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct SignalRules {
    pub oversold: f64,
    pub overbought: f64,
}

impl Default for SignalRules {
    fn default() -> Self {
        Self {
            oversold: 30.0,
            overbought: 70.0,
        }
    }
}

impl SignalRules {
    pub fn validate(&self) -> Result<()> {
        let in_range = |v: f64| (0.0..=100.0).contains(&v);
        if !in_range(self.oversold) || !in_range(self.overbought) {
            return Err(Error::Config(
                "rules.oversold and rules.overbought must be within [0, 100]".into(),
            ));
        }
        if self.oversold >= self.overbought {
            return Err(Error::Config(format!(
                "rules.oversold ({}) must be below rules.overbought ({})",
                self.oversold, self.overbought
            )));
        }
        Ok(())
    }

    /// Map an `(rsi, macd)` pair to a signal. Pure and total.
    pub fn decide(&self, rsi: f64, macd: f64) -> Signal {
        if rsi < self.oversold && macd > 0.0 {
            Signal::Buy
        } else if rsi > self.overbought && macd < 0.0 {
            Signal::Sell
        } else if macd > 0.0 {
            Signal::Buy
        } else if macd < 0.0 {
            Signal::Sell
        } else {
            Signal::Hold
        }
    }

    /// Apply the table to a snapshot. Fails with `InsufficientData` when
    /// either RSI or MACD is absent or not a finite number.
    pub fn evaluate(&self, snapshot: &IndicatorSnapshot) -> Result<Signal> {
        let finite = |v: Option<f64>| v.filter(|x| x.is_finite());
        match (finite(snapshot.rsi), finite(snapshot.macd)) {
            (Some(rsi), Some(macd)) => Ok(self.decide(rsi, macd)),
            _ => Err(Error::InsufficientData {
                required: snapshot.required_bars,
                available: snapshot.bars,
            }),
        }
    }
}
