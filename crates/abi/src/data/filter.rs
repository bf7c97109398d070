// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::{
	constants::{FILTER_NONE, FilterTypeFFI},
	data::RangeFFI,
};

/// Parameters of `FILTER_SAMPLE`
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct SampleParamsFFI {
	/// Number of samples to keep
	pub size: usize,
}

/// Parameters of `FILTER_DOUBLE_INSIDE_RANGE` and `FILTER_DOUBLE_OUTSIDE_RANGE`
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct DoubleRangeParamsFFI {
	pub min: f64,
	pub max: f64,
}

/// Filter parameters; which member is live depends on `FilterFFI::filter_type`
#[repr(C)]
#[derive(Clone, Copy)]
pub union FilterParamsFFI {
	pub sample: SampleParamsFFI,
	pub double_range: DoubleRangeParamsFFI,
}

/// FFI-safe filter (`qdb_ts_filter_t`)
#[repr(C)]
#[derive(Clone, Copy)]
pub struct FilterFFI {
	/// Filter kind tag
	pub filter_type: FilterTypeFFI,
	/// Kind-specific parameters
	pub params: FilterParamsFFI,
}

impl FilterFFI {
	/// Create a filter that keeps every value
	pub const fn none() -> Self {
		Self {
			filter_type: FILTER_NONE,
			params: FilterParamsFFI {
				double_range: DoubleRangeParamsFFI {
					min: 0.0,
					max: 0.0,
				},
			},
		}
	}
}

impl core::fmt::Debug for FilterFFI {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.debug_struct("FilterFFI").field("filter_type", &self.filter_type).finish_non_exhaustive()
	}
}

/// FFI-safe range restricted by a filter (`qdb_ts_filtered_range_t`)
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct FilteredRangeFFI {
	pub range: RangeFFI,
	pub filter: FilterFFI,
}
