// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::{
	constants::AggregationTypeFFI,
	data::{BlobPointFFI, DoublePointFFI, FilteredRangeFFI},
};

/// FFI-safe numeric aggregation (`qdb_ts_double_aggregation_t`)
///
/// Used in/out: the caller fills `aggregation_type` and `filtered_range`, the native library
/// writes `count` and `result`.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct DoubleAggregationFFI {
	pub aggregation_type: AggregationTypeFFI,
	pub filtered_range: FilteredRangeFFI,
	/// Number of samples aggregated
	pub count: usize,
	pub result: DoublePointFFI,
}

/// FFI-safe binary aggregation (`qdb_ts_blob_aggregation_t`)
///
/// After a successful aggregate call `result.content` points into memory owned by the native
/// library and has to be handed back through the release entry point.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct BlobAggregationFFI {
	pub aggregation_type: AggregationTypeFFI,
	pub filtered_range: FilteredRangeFFI,
	/// Number of samples aggregated
	pub count: usize,
	pub result: BlobPointFFI,
}
