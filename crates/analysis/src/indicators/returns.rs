//! Return-based statistics: volatility, Sharpe ratio, relative strength.

use super::levels::TRADING_DAYS_PER_MONTH;

pub const TRADING_DAYS_PER_YEAR: f64 = 252.0;

/// Day-over-day percentage returns `close[t] / close[t-1] - 1`.
/// One shorter than the input; empty for fewer than two closes.
pub fn daily_returns(closes: &[f64]) -> Vec<f64> {
    closes.windows(2).map(|w| w[1] / w[0] - 1.0).collect()
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Standard deviation with `ddof` degrees of freedom removed.
fn std_dev(values: &[f64], ddof: usize) -> Option<f64> {
    if values.len() <= ddof {
        return None;
    }
    let m = mean(values);
    let var = values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / (values.len() - ddof) as f64;
    Some(var.sqrt())
}

/// Population standard deviation of daily returns. Needs two closes.
pub fn volatility(closes: &[f64]) -> Option<f64> {
    let returns = daily_returns(closes);
    std_dev(&returns, 0).filter(|v| v.is_finite())
}

/// Annualized Sharpe ratio.
///
/// `(mean(r) * 252 - risk_free_rate) / (std(r) * sqrt(252))` using the sample
/// standard deviation. Needs three closes. A zero denominator (flat prices)
/// is undefined and reported as `None`.
pub fn sharpe_ratio(closes: &[f64], risk_free_rate: f64) -> Option<f64> {
    let returns = daily_returns(closes);
    let std = std_dev(&returns, 1)?;
    let annual_std = std * TRADING_DAYS_PER_YEAR.sqrt();
    if annual_std == 0.0 {
        return None;
    }
    let annual_mean = mean(&returns) * TRADING_DAYS_PER_YEAR;
    let ratio = (annual_mean - risk_free_rate) / annual_std;
    ratio.is_finite().then_some(ratio)
}

/// Outperformance of `stock` over `index` across the trailing `21 * months`
/// bars, in percentage points. Needs one more bar than the window in both.
pub fn relative_strength(stock: &[f64], index: &[f64], months: usize) -> Option<f64> {
    let lookback = TRADING_DAYS_PER_MONTH * months;
    if lookback == 0 {
        return None;
    }
    let period_return = |closes: &[f64]| -> Option<f64> {
        if closes.len() <= lookback {
            return None;
        }
        let last = closes[closes.len() - 1];
        let base = closes[closes.len() - 1 - lookback];
        Some(last / base - 1.0)
    };
    let diff = (period_return(stock)? - period_return(index)?) * 100.0;
    diff.is_finite().then_some(diff)
}
