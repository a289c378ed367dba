use serde::Serialize;

use super::ma::ema_series;

/// MACD (Moving Average Convergence/Divergence) indicator.
///
/// Computes: MACD line = EMA(fast) − EMA(slow), Signal = EMA(macd_line, signal_period),
/// Histogram = MACD line − Signal. All three EMAs use the same SMA-seeded recurrence.
#[derive(Debug, Clone)]
pub struct MacdIndicator {
    pub fast: usize,
    pub slow: usize,
    pub signal: usize,
}

/// Per-bar MACD output, aligned with the input closes.
#[derive(Debug, Clone, PartialEq)]
pub struct MacdSeries {
    pub macd: Vec<Option<f64>>,
    pub signal: Vec<Option<f64>>,
    pub histogram: Vec<Option<f64>>,
}

/// Latest values of a MACD computation; each is absent independently.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct MacdValue {
    pub macd: Option<f64>,
    pub signal: Option<f64>,
    pub histogram: Option<f64>,
}

impl MacdIndicator {
    pub fn new(fast: usize, slow: usize, signal: usize) -> Self {
        Self { fast, slow, signal }
    }

    /// Compute the full MACD series from close prices (oldest first).
    ///
    /// The MACD line exists from bar `slow - 1`; the signal line and
    /// histogram from bar `slow + signal - 2`.
    pub fn series(&self, closes: &[f64]) -> MacdSeries {
        let n = closes.len();
        let fast = ema_series(closes, self.fast);
        let slow = ema_series(closes, self.slow);

        let macd: Vec<Option<f64>> = fast
            .iter()
            .zip(&slow)
            .map(|(f, s)| Some((*f)? - (*s)?).filter(|v| v.is_finite()))
            .collect();

        // The signal EMA runs over the first unbroken run of MACD values.
        let first_defined = macd.iter().position(Option::is_some).unwrap_or(n);
        let defined: Vec<f64> = macd[first_defined..].iter().map_while(|v| *v).collect();
        let mut signal = vec![None; first_defined];
        signal.extend(ema_series(&defined, self.signal));
        signal.resize(n, None);

        let histogram = macd
            .iter()
            .zip(&signal)
            .map(|(m, s)| Some((*m)? - (*s)?).filter(|v| v.is_finite()))
            .collect();

        MacdSeries {
            macd,
            signal,
            histogram,
        }
    }

    /// Latest MACD, signal and histogram values.
    pub fn compute(&self, closes: &[f64]) -> MacdValue {
        let series = self.series(closes);
        MacdValue {
            macd: series.macd.last().copied().flatten(),
            signal: series.signal.last().copied().flatten(),
            histogram: series.histogram.last().copied().flatten(),
        }
    }
}

impl Default for MacdIndicator {
    fn default() -> Self {
        Self::new(12, 26, 9)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trending_up(n: usize) -> Vec<f64> {
        (0..n).map(|i| 100.0 + i as f64 * 0.5).collect()
    }

    fn trending_down(n: usize) -> Vec<f64> {
        (0..n).map(|i| 200.0 - i as f64 * 0.5).collect()
    }

    #[test]
    fn macd_absent_with_insufficient_data() {
        let macd = MacdIndicator::default();
        let value = macd.compute(&[100.0; 25]);
        assert_eq!(value, MacdValue::default());
    }

    #[test]
    fn macd_line_before_signal_line() {
        let macd = MacdIndicator::default();
        // 26 closes: MACD defined on the last bar, signal needs 26 + 9 - 1 = 34
        let value = macd.compute(&trending_up(26));
        assert!(value.macd.is_some());
        assert!(value.signal.is_none());
        assert!(value.histogram.is_none());

        let value = macd.compute(&trending_up(34));
        assert!(value.signal.is_some());
        assert!(value.histogram.is_some());
    }

    #[test]
    fn series_is_aligned_with_input() {
        let macd = MacdIndicator::new(3, 6, 3);
        let series = macd.series(&trending_up(20));
        assert_eq!(series.macd.len(), 20);
        assert_eq!(series.signal.len(), 20);
        assert_eq!(series.histogram.len(), 20);
        assert_eq!(series.macd.iter().position(Option::is_some), Some(5));
        assert_eq!(series.signal.iter().position(Option::is_some), Some(7));
    }

    #[test]
    fn macd_flat_series_is_zero() {
        let macd = MacdIndicator::default();
        let series = macd.series(&[100.0; 60]);
        for v in series.macd.iter().flatten() {
            assert_eq!(*v, 0.0);
        }
        for v in series.histogram.iter().flatten() {
            assert_eq!(*v, 0.0);
        }
    }

    #[test]
    fn macd_sign_follows_trend() {
        let macd = MacdIndicator::default();
        assert!(macd.compute(&trending_up(60)).macd.unwrap() > 0.0);
        assert!(macd.compute(&trending_down(60)).macd.unwrap() < 0.0);
    }

    #[test]
    fn overflowing_prices_leave_macd_absent() {
        let macd = MacdIndicator::default();
        let value = macd.compute(&[1.0e308; 60]);
        assert_eq!(value, MacdValue::default());
        let series = macd.series(&[1.0e308; 60]);
        assert_eq!(series.signal.len(), 60);
    }

    #[test]
    fn histogram_is_macd_minus_signal() {
        let macd = MacdIndicator::new(3, 6, 3);
        let mut prices: Vec<f64> = (0..20).map(|i| 100.0 - i as f64 * 0.5).collect();
        prices.extend((0..20).map(|i| 90.0 + i as f64 * 2.0));
        let v = macd.compute(&prices);
        let expected = v.macd.unwrap() - v.signal.unwrap();
        assert!((v.histogram.unwrap() - expected).abs() < 1e-12);
    }
}
