// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

/// FFI-safe timestamp (`qdb_timespec_t`)
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimespecFFI {
	/// Seconds since the epoch
	pub tv_sec: i64,
	/// Nanoseconds within the second
	pub tv_nsec: i64,
}

/// FFI-safe half-open time interval (`qdb_ts_range_t`)
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RangeFFI {
	/// Inclusive start
	pub begin: TimespecFFI,
	/// Exclusive end
	pub end: TimespecFFI,
}
