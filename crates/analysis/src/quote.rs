use serde::Serialize;

use common::{PriceSeries, Signal};

/// Day-over-day price move for a ticker, as shown in market overviews.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct QuoteSummary {
    pub last_price: f64,
    pub previous_close: f64,
    pub change: f64,
    pub change_percent: f64,
    /// `Buy` on a positive move, `Sell` otherwise.
    pub signal: Signal,
}

impl QuoteSummary {
    /// Compare the last close with the prior bar's close, or with the last
    /// bar's open when the series holds a single bar.
    pub fn from_series(series: &PriceSeries) -> Self {
        let bars = series.bars();
        let last = series.last();
        let previous_close = match bars.len() {
            1 => last.open,
            n => bars[n - 2].close,
        };

        let change = last.close - previous_close;
        let change_percent = if previous_close > 0.0 {
            change / previous_close * 100.0
        } else {
            0.0
        };

        Self {
            last_price: last.close,
            previous_close,
            change,
            change_percent,
            signal: if change_percent > 0.0 {
                Signal::Buy
            } else {
                Signal::Sell
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use common::Bar;

    fn bar(day: u32, open: f64, close: f64) -> Bar {
        Bar {
            timestamp: Utc.with_ymd_and_hms(2024, 3, day, 0, 0, 0).unwrap(),
            open,
            high: open.max(close),
            low: open.min(close),
            close,
            volume: 10.0,
        }
    }

    #[test]
    fn compares_with_previous_close() {
        let series = PriceSeries::new(vec![bar(1, 99.0, 100.0), bar(2, 101.0, 105.0)]).unwrap();
        let quote = QuoteSummary::from_series(&series);
        assert_eq!(quote.previous_close, 100.0);
        assert_eq!(quote.change, 5.0);
        assert!((quote.change_percent - 5.0).abs() < 1e-12);
        assert_eq!(quote.signal, Signal::Buy);
    }

    #[test]
    fn single_bar_uses_open() {
        let series = PriceSeries::new(vec![bar(1, 100.0, 90.0)]).unwrap();
        let quote = QuoteSummary::from_series(&series);
        assert_eq!(quote.previous_close, 100.0);
        assert_eq!(quote.change, -10.0);
        assert_eq!(quote.signal, Signal::Sell);
    }

    #[test]
    fn unchanged_price_is_sell() {
        let series = PriceSeries::new(vec![bar(1, 50.0, 50.0), bar(2, 50.0, 50.0)]).unwrap();
        let quote = QuoteSummary::from_series(&series);
        assert_eq!(quote.change_percent, 0.0);
        assert_eq!(quote.signal, Signal::Sell);
    }

    #[test]
    fn non_positive_open_gives_zero_percent() {
        let series = PriceSeries::new(vec![bar(1, 0.0, 10.0)]).unwrap();
        let quote = QuoteSummary::from_series(&series);
        assert_eq!(quote.change_percent, 0.0);
    }
}
