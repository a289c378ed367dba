pub mod file;
pub mod memory;

pub use file::FileSource;
pub use memory::MemorySource;

use common::Bar;

/// Keep only the most recent `lookback_bars` bars.
fn trailing(mut bars: Vec<Bar>, lookback_bars: usize) -> Vec<Bar> {
    if bars.len() > lookback_bars {
        bars.drain(..bars.len() - lookback_bars);
    }
    bars
}
