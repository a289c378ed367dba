pub mod config;
pub mod engine;
pub mod indicators;
pub mod quote;
pub mod report;
pub mod rules;
pub mod screener;
pub mod snapshot;

pub use config::{EngineConfig, MacdPeriods};
pub use engine::IndicatorEngine;
pub use quote::QuoteSummary;
pub use report::TechnicalReport;
pub use rules::SignalRules;
pub use screener::{signal_counts, ScreenResult, Screener, TickerOutcome, TickerReport};
pub use snapshot::{Analysis, IndicatorSnapshot};
