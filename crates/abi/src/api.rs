// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use core::ffi::{c_char, c_void};

use crate::{
	catalog::ColumnInfoFFI,
	constants::ErrorFFI,
	data::{BlobAggregationFFI, BlobPointFFI, DoubleAggregationFFI, DoublePointFFI, FilteredRangeFFI},
};

/// Opaque session handle (`qdb_handle_t`)
pub type HandleFFI = *mut c_void;

/// Entry points of the native time-series API
///
/// Every function returns a `qdb_error_t`; `QDB_E_OK` means success. Strings are
/// NUL-terminated UTF-8. All function pointers must be valid (non-null).
#[repr(C)]
#[derive(Clone, Copy)]
pub struct TimeSeriesApiFFI {
	/// Create a time series (`qdb_ts_create`)
	///
	/// # Parameters
	/// - `handle`: Session handle
	/// - `alias`: Time series name
	/// - `columns`: Array of column definitions
	/// - `column_count`: Number of columns
	pub create: unsafe extern "C" fn(
		handle: HandleFFI,
		alias: *const c_char,
		columns: *const ColumnInfoFFI,
		column_count: usize,
	) -> ErrorFFI,

	/// Add columns to an existing time series (`qdb_ts_insert_columns`)
	pub insert_columns: unsafe extern "C" fn(
		handle: HandleFFI,
		alias: *const c_char,
		columns: *const ColumnInfoFFI,
		column_count: usize,
	) -> ErrorFFI,

	/// List the columns of a time series (`qdb_ts_list_columns`)
	///
	/// # Parameters
	/// - `columns`: Receives an array allocated by the library, to be freed with `release`
	/// - `column_count`: Receives the number of columns
	pub list_columns: unsafe extern "C" fn(
		handle: HandleFFI,
		alias: *const c_char,
		columns: *mut *mut ColumnInfoFFI,
		column_count: *mut usize,
	) -> ErrorFFI,

	/// Insert numeric points into a column (`qdb_ts_double_insert`)
	pub double_insert: unsafe extern "C" fn(
		handle: HandleFFI,
		alias: *const c_char,
		column: *const c_char,
		values: *const DoublePointFFI,
		value_count: usize,
	) -> ErrorFFI,

	/// Insert binary points into a column (`qdb_ts_blob_insert`)
	///
	/// The payloads are only read for the duration of the call.
	pub blob_insert: unsafe extern "C" fn(
		handle: HandleFFI,
		alias: *const c_char,
		column: *const c_char,
		values: *const BlobPointFFI,
		value_count: usize,
	) -> ErrorFFI,

	/// Read numeric points within filtered ranges (`qdb_ts_double_get_ranges`)
	///
	/// # Parameters
	/// - `points`: Receives an array allocated by the library, to be freed with `release`
	/// - `point_count`: Receives the number of points
	pub double_get_ranges: unsafe extern "C" fn(
		handle: HandleFFI,
		alias: *const c_char,
		column: *const c_char,
		ranges: *const FilteredRangeFFI,
		range_count: usize,
		points: *mut *mut DoublePointFFI,
		point_count: *mut usize,
	) -> ErrorFFI,

	/// Read binary points within filtered ranges (`qdb_ts_blob_get_ranges`)
	///
	/// Payloads live inside the returned array allocation and are freed with it.
	pub blob_get_ranges: unsafe extern "C" fn(
		handle: HandleFFI,
		alias: *const c_char,
		column: *const c_char,
		ranges: *const FilteredRangeFFI,
		range_count: usize,
		points: *mut *mut BlobPointFFI,
		point_count: *mut usize,
	) -> ErrorFFI,

	/// Aggregate numeric values in place (`qdb_ts_double_aggregate`)
	pub double_aggregate: unsafe extern "C" fn(
		handle: HandleFFI,
		alias: *const c_char,
		column: *const c_char,
		aggregations: *mut DoubleAggregationFFI,
		aggregation_count: usize,
	) -> ErrorFFI,

	/// Aggregate binary values in place (`qdb_ts_blob_aggregate`)
	///
	/// Every non-empty `result.content` written by the library must be freed with `release`.
	pub blob_aggregate: unsafe extern "C" fn(
		handle: HandleFFI,
		alias: *const c_char,
		column: *const c_char,
		aggregations: *mut BlobAggregationFFI,
		aggregation_count: usize,
	) -> ErrorFFI,

	/// Free a buffer the library handed out (`qdb_release`)
	///
	/// # Safety
	/// - `buffer` must come from this library and must be released exactly once
	pub release: unsafe extern "C" fn(handle: HandleFFI, buffer: *const c_void),
}
