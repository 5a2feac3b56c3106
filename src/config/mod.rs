pub mod options;
pub mod range;

pub use options::{BloomConfig, BloomOptions, DEFAULT_PALETTE, DEFAULT_SELECTOR};
pub use range::Range;
