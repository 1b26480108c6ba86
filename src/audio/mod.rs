mod analyzer;
mod tap;

pub use analyzer::{FrequencyAnalyzer, SampleBuffer, BIN_COUNT, CELL_BIN_RANGE, FFT_SIZE};
pub use tap::TapSource;
