//! Simple and exponential moving averages.

/// Arithmetic mean, absent when the sum overflows.
fn finite_mean(window: &[f64]) -> Option<f64> {
    Some(window.iter().sum::<f64>() / window.len() as f64).filter(|v| v.is_finite())
}

/// Trailing simple moving average, one entry per input value.
/// Entries before the first full window, or whose window sum overflows,
/// are `None`.
pub fn sma_series(values: &[f64], period: usize) -> Vec<Option<f64>> {
    if period == 0 {
        return vec![None; values.len()];
    }
    let mut out = vec![None; values.len()];
    for (i, window) in values.windows(period).enumerate() {
        out[i + period - 1] = finite_mean(window);
    }
    out
}

/// Latest simple moving average, or `None` when fewer than `period` values.
pub fn sma(values: &[f64], period: usize) -> Option<f64> {
    if period == 0 || values.len() < period {
        return None;
    }
    finite_mean(&values[values.len() - period..])
}

/// Exponential moving average, one entry per input value.
///
/// Seeded with the SMA of the first `period` values, then
/// `ema += k * (x - ema)` with `k = 2 / (period + 1)`. Entries before the
/// seed are `None`, and so is every entry once the seed overflows.
pub fn ema_series(values: &[f64], period: usize) -> Vec<Option<f64>> {
    let mut out = vec![None; values.len()];
    if period == 0 || values.len() < period {
        return out;
    }
    let k = 2.0 / (period as f64 + 1.0);

    let Some(mut ema_val) = finite_mean(&values[..period]) else {
        return out;
    };
    out[period - 1] = Some(ema_val);

    for (i, &value) in values.iter().enumerate().skip(period) {
        ema_val += k * (value - ema_val);
        out[i] = Some(ema_val).filter(|v| v.is_finite());
    }
    out
}
