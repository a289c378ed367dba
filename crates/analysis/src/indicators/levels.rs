//! Support and resistance bounds over a trailing window of closes.

use serde::Serialize;

/// Approximate number of trading days in a calendar month.
pub const TRADING_DAYS_PER_MONTH: usize = 21;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Levels {
    pub support: f64,
    pub resistance: f64,
}

/// Lowest and highest close over the last `21 * months` bars.
///
/// A series shorter than the window uses every bar it has rather than
/// failing. Returns `None` only for empty input or a zero-month window.
pub fn support_resistance(closes: &[f64], months: usize) -> Option<Levels> {
    let window = TRADING_DAYS_PER_MONTH * months;
    if closes.is_empty() || window == 0 {
        return None;
    }
    let recent = &closes[closes.len().saturating_sub(window)..];

    let support = recent.iter().copied().fold(f64::INFINITY, f64::min);
    let resistance = recent.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    Some(Levels {
        support,
        resistance,
    })
}
