//! FFI-safe time-series value types

mod aggregation;
mod filter;
mod point;
mod time;

pub use aggregation::*;
pub use filter::*;
pub use point::*;
pub use time::*;
