// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use qdb_ts_abi::data::{RangeFFI, TimespecFFI};

use crate::types::{Range, Timespec};

pub fn marshal_timespec(timespec: &Timespec) -> TimespecFFI {
	TimespecFFI {
		tv_sec: timespec.sec,
		tv_nsec: timespec.nsec,
	}
}

pub fn unmarshal_timespec(ffi: &TimespecFFI) -> Timespec {
	Timespec::new(ffi.tv_sec, ffi.tv_nsec)
}

pub fn marshal_range(range: &Range) -> RangeFFI {
	RangeFFI {
		begin: marshal_timespec(&range.begin),
		end: marshal_timespec(&range.end),
	}
}

pub fn unmarshal_range(ffi: &RangeFFI) -> Range {
	Range::new(unmarshal_timespec(&ffi.begin), unmarshal_timespec(&ffi.end))
}

pub fn marshal_ranges(ranges: &[Range]) -> Vec<RangeFFI> {
	ranges.iter().map(marshal_range).collect()
}

pub fn unmarshal_ranges(ffi: &[RangeFFI]) -> Vec<Range> {
	ffi.iter().map(unmarshal_range).collect()
}
