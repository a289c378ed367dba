use serde::Serialize;

use common::Signal;

use crate::snapshot::Analysis;

/// Display-ready technical analysis: prices rounded to cents, volumes to
/// whole units.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TechnicalReport {
    pub signal: Signal,
    pub rsi: Option<f64>,
    pub macd: Option<f64>,
    pub support: Option<f64>,
    pub resistance: Option<f64>,
    pub volume: Option<u64>,
    pub avg_volume: Option<u64>,
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

impl TechnicalReport {
    pub fn from_analysis(analysis: &Analysis) -> Self {
        let s = &analysis.snapshot;
        Self {
            signal: analysis.signal,
            rsi: s.rsi.map(round2),
            macd: s.macd.map(round2),
            support: s.support.map(round2),
            resistance: s.resistance.map(round2),
            volume: s.last_volume.map(|v| v as u64),
            avg_volume: s.average_volume.map(|v| v as u64),
        }
    }
}

impl std::fmt::Display for TechnicalReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        fn opt<T: std::fmt::Display>(v: &Option<T>) -> String {
            v.as_ref().map_or_else(|| "-".to_string(), ToString::to_string)
        }
        write!(
            f,
            "{} rsi={} macd={} support={} resistance={} volume={} avg_volume={}",
            self.signal,
            opt(&self.rsi),
            opt(&self.macd),
            opt(&self.support),
            opt(&self.resistance),
            opt(&self.volume),
            opt(&self.avg_volume),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::IndicatorSnapshot;

    #[test]
    fn rounds_prices_and_truncates_volumes() {
        let analysis = Analysis {
            signal: Signal::Buy,
            snapshot: IndicatorSnapshot {
                rsi: Some(27.456),
                macd: Some(1.504),
                support: Some(99.995),
                resistance: Some(120.0),
                last_volume: Some(12_345.9),
                average_volume: Some(10_000.4),
                ..IndicatorSnapshot::default()
            },
        };
        let report = TechnicalReport::from_analysis(&analysis);
        assert_eq!(report.rsi, Some(27.46));
        assert_eq!(report.macd, Some(1.5));
        assert_eq!(report.resistance, Some(120.0));
        assert_eq!(report.volume, Some(12_345));
        assert_eq!(report.avg_volume, Some(10_000));
    }

    #[test]
    fn display_marks_missing_values() {
        let report = TechnicalReport {
            signal: Signal::Hold,
            rsi: Some(50.0),
            macd: None,
            support: None,
            resistance: None,
            volume: None,
            avg_volume: None,
        };
        assert_eq!(
            report.to_string(),
            "Hold rsi=50 macd=- support=- resistance=- volume=- avg_volume=-"
        );
    }
}
