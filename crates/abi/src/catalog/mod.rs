//! Table schema types

mod column;

pub use column::*;
