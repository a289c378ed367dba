use crate::{Bar, Error, Result};

/// A validated, chronologically ordered run of daily bars.
///
/// Guarantees once built:
/// - at least one bar
/// - timestamps strictly ascending (no duplicates)
/// - every price finite, `close > 0`
/// - volume finite and non-negative
#[derive(Debug, Clone, PartialEq)]
pub struct PriceSeries {
    bars: Vec<Bar>,
}

impl PriceSeries {
    pub fn new(bars: Vec<Bar>) -> Result<Self> {
        if bars.is_empty() {
            return Err(Error::InsufficientData {
                required: 1,
                available: 0,
            });
        }

        for (i, bar) in bars.iter().enumerate() {
            let prices = [bar.open, bar.high, bar.low, bar.close];
            if prices.iter().any(|p| !p.is_finite()) {
                return Err(Error::InvalidSeries(format!(
                    "non-finite price at {}",
                    bar.timestamp
                )));
            }
            if bar.close <= 0.0 {
                return Err(Error::InvalidSeries(format!(
                    "non-positive close {} at {}",
                    bar.close, bar.timestamp
                )));
            }
            if !bar.volume.is_finite() || bar.volume < 0.0 {
                return Err(Error::InvalidSeries(format!(
                    "invalid volume {} at {}",
                    bar.volume, bar.timestamp
                )));
            }
            if i > 0 && bars[i - 1].timestamp >= bar.timestamp {
                return Err(Error::InvalidSeries(format!(
                    "bars out of order or duplicated at {}",
                    bar.timestamp
                )));
            }
        }

        Ok(Self { bars })
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    /// Always false for a constructed series; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Sufficiency predicate used instead of ad-hoc length checks.
    pub fn has_at_least(&self, bars: usize) -> bool {
        self.bars.len() >= bars
    }

    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    pub fn last(&self) -> &Bar {
        // Non-empty by construction.
        &self.bars[self.bars.len() - 1]
    }

    pub fn closes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.close).collect()
    }

    pub fn volumes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.volume).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};

    fn bar(day: i64, close: f64) -> Bar {
        Bar {
            timestamp: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap() + Duration::days(day),
            open: close,
            high: close,
            low: close,
            close,
            volume: 1_000.0,
        }
    }

    #[test]
    fn empty_series_is_insufficient_data() {
        let err = PriceSeries::new(vec![]).unwrap_err();
        assert!(matches!(
            err,
            Error::InsufficientData { required: 1, available: 0 }
        ));
    }

    #[test]
    fn rejects_duplicate_timestamps() {
        let err = PriceSeries::new(vec![bar(0, 10.0), bar(0, 11.0)]).unwrap_err();
        assert!(matches!(err, Error::InvalidSeries(_)));
    }

    #[test]
    fn rejects_descending_timestamps() {
        let err = PriceSeries::new(vec![bar(1, 10.0), bar(0, 11.0)]).unwrap_err();
        assert!(matches!(err, Error::InvalidSeries(_)));
    }

    #[test]
    fn rejects_nan_and_non_positive_close() {
        assert!(PriceSeries::new(vec![bar(0, f64::NAN)]).is_err());
        assert!(PriceSeries::new(vec![bar(0, 0.0)]).is_err());
        let mut b = bar(0, 10.0);
        b.volume = -1.0;
        assert!(PriceSeries::new(vec![b]).is_err());
    }

    #[test]
    fn accessors_follow_input_order() {
        let series = PriceSeries::new(vec![bar(0, 10.0), bar(1, 11.0), bar(2, 12.0)]).unwrap();
        assert_eq!(series.len(), 3);
        assert!(series.has_at_least(3));
        assert!(!series.has_at_least(4));
        assert_eq!(series.closes(), vec![10.0, 11.0, 12.0]);
        assert_eq!(series.last().close, 12.0);
    }
}
