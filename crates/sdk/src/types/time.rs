// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use serde::{Deserialize, Serialize};

/// A point in time as seconds plus nanoseconds since the epoch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Timespec {
	pub sec: i64,
	pub nsec: i64,
}

impl Timespec {
	pub const fn new(sec: i64, nsec: i64) -> Self {
		Self {
			sec,
			nsec,
		}
	}
}

/// Half-open interval `[begin, end)`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Range {
	pub begin: Timespec,
	pub end: Timespec,
}

impl Range {
	pub const fn new(begin: Timespec, end: Timespec) -> Self {
		Self {
			begin,
			end,
		}
	}
}
