/// RSI (Relative Strength Index) indicator.
///
/// Average gain and average loss are plain trailing means over the last
/// `period` close-to-close changes (not Wilder smoothing).
/// Returns `None` until at least `period + 1` closes are available.
#[derive(Debug, Clone)]
pub struct RsiIndicator {
    pub period: usize,
}

impl RsiIndicator {
    pub const DEFAULT_PERIOD: usize = 14;

    pub fn new(period: usize) -> Self {
        Self { period }
    }

    /// Compute the latest RSI from a slice of close prices (oldest first).
    ///
    /// A window with no losses saturates at 100, including a perfectly flat
    /// window. The result is always within `[0, 100]`; a value that cannot
    /// be represented is absent.
    pub fn compute(&self, closes: &[f64]) -> Option<f64> {
        if self.period == 0 || closes.len() < self.period + 1 {
            return None;
        }

        let n = self.period as f64;
        let window = &closes[closes.len() - (self.period + 1)..];
        // Each change is scaled before summing so averages of finite prices
        // stay finite.
        let (avg_gain, avg_loss) = window.windows(2).map(|w| (w[1] - w[0]) / n).fold(
            (0.0_f64, 0.0_f64),
            |(g, l), change| {
                if change > 0.0 {
                    (g + change, l)
                } else {
                    (g, l - change)
                }
            },
        );

        if !avg_gain.is_finite() || !avg_loss.is_finite() {
            return None;
        }
        if avg_loss == 0.0 {
            return Some(100.0);
        }

        let rs = avg_gain / avg_loss;
        let rsi = 100.0 - 100.0 / (1.0 + rs);
        rsi.is_finite().then(|| rsi.clamp(0.0, 100.0))
    }
}

impl Default for RsiIndicator {
    fn default() -> Self {
        Self::new(Self::DEFAULT_PERIOD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rsi_returns_none_when_insufficient_data() {
        let rsi = RsiIndicator::new(14);
        // Need at least period+1 = 15 values
        let prices = vec![100.0; 14];
        assert!(rsi.compute(&prices).is_none());
        assert!(rsi.compute(&prices[..13]).is_none());
    }

    #[test]
    fn rsi_returns_some_with_sufficient_data() {
        let rsi = RsiIndicator::new(14);
        // 15 values, exactly period+1
        let prices: Vec<f64> = (0..15).map(|i| 100.0 + i as f64).collect();
        assert!(rsi.compute(&prices).is_some());
    }

    #[test]
    fn rsi_all_gains_returns_100() {
        let rsi = RsiIndicator::new(3);
        let prices = vec![10.0, 11.0, 12.0, 13.0, 14.0];
        let value = rsi.compute(&prices).unwrap();
        assert!((value - 100.0).abs() < 1e-9, "Expected 100, got {value}");
    }

    #[test]
    fn rsi_all_losses_returns_0() {
        let rsi = RsiIndicator::new(3);
        let prices = vec![14.0, 13.0, 12.0, 11.0, 10.0];
        let value = rsi.compute(&prices).unwrap();
        assert!(value.abs() < 1e-9, "Expected 0, got {value}");
    }

    #[test]
    fn rsi_flat_window_saturates_at_100() {
        let rsi = RsiIndicator::new(5);
        assert_eq!(rsi.compute(&[50.0; 10]), Some(100.0));
    }

    #[test]
    fn rsi_uses_only_trailing_window() {
        let rsi = RsiIndicator::new(2);
        // Changes: +1, -0.5, +1. Last two: avg_gain 0.5, avg_loss 0.25, RS 2.
        let value = rsi.compute(&[10.0, 11.0, 10.5, 11.5]).unwrap();
        assert!((value - 200.0 / 3.0).abs() < 1e-9, "got {value}");
    }

    #[test]
    fn rsi_extreme_alternating_prices_stay_defined() {
        let rsi = RsiIndicator::new(14);
        let prices: Vec<f64> = (0..15)
            .map(|i| if i % 2 == 0 { 1e-300 } else { 1.7e308 })
            .collect();
        let v = rsi.compute(&prices).unwrap();
        assert!((0.0..=100.0).contains(&v), "RSI out of range: {v}");
    }

    #[test]
    fn rsi_known_series_stays_in_range() {
        let rsi = RsiIndicator::default();
        let prices = vec![
            44.34, 44.09, 44.15, 43.61, 44.33, 44.83, 45.10, 45.15, 43.61, 44.33, 44.83, 45.10,
            45.15, 44.34, 44.09,
        ];
        let v = rsi.compute(&prices).unwrap();
        assert!((0.0..=100.0).contains(&v), "RSI out of range: {v}");
    }
}
