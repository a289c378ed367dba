pub mod config;
pub mod error;
pub mod series;
pub mod source;
pub mod types;

pub use config::{Config, LogFormat};
pub use error::{Error, Result};
pub use series::PriceSeries;
pub use source::PriceSource;
pub use types::*;
