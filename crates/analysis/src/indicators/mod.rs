pub mod levels;
pub mod ma;
pub mod macd;
pub mod returns;
pub mod rsi;
pub mod volume;

pub use levels::{support_resistance, Levels, TRADING_DAYS_PER_MONTH};
pub use ma::{ema_series, sma, sma_series};
pub use macd::{MacdIndicator, MacdSeries, MacdValue};
pub use returns::{
    daily_returns, relative_strength, sharpe_ratio, volatility, TRADING_DAYS_PER_YEAR,
};
pub use rsi::RsiIndicator;
pub use volume::{volume_stats, VolumeStats};
