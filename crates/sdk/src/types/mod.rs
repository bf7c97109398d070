// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Rust-side records of the time-series API

mod aggregation;
mod column;
mod filter;
mod point;
mod time;

pub use aggregation::*;
pub use column::*;
pub use filter::*;
pub use point::*;
pub use time::*;
