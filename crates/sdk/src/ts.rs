// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Time-series operations
//!
//! Each operation marshals its input, makes exactly one native call, releases what it
//! allocated for the call on every path, and converts and then releases whatever the library
//! returned.

use std::{ffi::c_void, ptr::null_mut};

use qdb_ts_abi::{
	catalog::ColumnInfoFFI,
	constants::ErrorFFI,
	data::{BlobPointFFI, DoublePointFFI},
};
use tracing::{debug, instrument};

use crate::{
	error::{Error, MarshalError, Result, Status},
	ffi::{Handle, NativeArray, out_slice},
	marshal::{
		marshal_blob_aggregations, marshal_blob_points, marshal_columns, marshal_double_aggregations,
		marshal_double_points, marshal_filtered_ranges, marshal_str, unmarshal_blob_aggregation, unmarshal_blob_point,
		unmarshal_columns, unmarshal_double_aggregations, unmarshal_double_points,
	},
	types::{BlobAggregation, BlobPoint, ColumnInfo, DoubleAggregation, DoublePoint, FilteredRange},
};

fn check(call: &'static str, status: ErrorFFI) -> Result<()> {
	let status = Status(status);
	if status.is_success() {
		Ok(())
	} else {
		debug!(call, %status, "native call failed");
		Err(Error::Native {
			call,
			status,
		})
	}
}

impl<'a> Handle<'a> {
	/// Create a time series with the given columns
	#[instrument(name = "ts::create", level = "debug", skip_all, fields(alias = alias, columns = columns.len()))]
	pub fn create(&self, alias: &str, columns: &[ColumnInfo]) -> Result<()> {
		let alias = marshal_str("alias", alias)?;
		let native = marshal_columns(columns)?;

		// SAFETY: All pointers stay valid until after the call returns
		let status = unsafe { (self.api().create)(self.as_raw(), alias.as_ptr(), native.as_ptr(), native.len()) };
		native.release();

		check("qdb_ts_create", status)
	}

	/// Add columns to an existing time series
	#[instrument(name = "ts::insert_columns", level = "debug", skip_all, fields(alias = alias, columns = columns.len()))]
	pub fn insert_columns(&self, alias: &str, columns: &[ColumnInfo]) -> Result<()> {
		let alias = marshal_str("alias", alias)?;
		let native = marshal_columns(columns)?;

		// SAFETY: All pointers stay valid until after the call returns
		let status =
			unsafe { (self.api().insert_columns)(self.as_raw(), alias.as_ptr(), native.as_ptr(), native.len()) };
		native.release();

		check("qdb_ts_insert_columns", status)
	}

	/// List the columns of a time series
	#[instrument(name = "ts::list_columns", level = "debug", skip_all, fields(alias = alias))]
	pub fn list_columns(&self, alias: &str) -> Result<Vec<ColumnInfo>> {
		let alias = marshal_str("alias", alias)?;
		let mut columns: *mut ColumnInfoFFI = null_mut();
		let mut count = 0usize;

		// SAFETY: Out-parameters point to locals that outlive the call
		let status = unsafe { (self.api().list_columns)(self.as_raw(), alias.as_ptr(), &mut columns, &mut count) };
		// SAFETY: A non-null array written by the library is ours to release
		let native = unsafe { self.adopt(columns, count) };
		check("qdb_ts_list_columns", status)?;

		// SAFETY: Names live inside the native array, which is released after the copy
		let result = unsafe { unmarshal_columns(out_slice(&native, count)?) };
		drop(native);
		Ok(result)
	}

	/// Insert numeric points into a column
	#[instrument(name = "ts::double_insert", level = "debug", skip_all, fields(alias = alias, column = column, points = points.len()))]
	pub fn double_insert(&self, alias: &str, column: &str, points: &[DoublePoint]) -> Result<()> {
		let alias = marshal_str("alias", alias)?;
		let column = marshal_str("column", column)?;
		let native = marshal_double_points(points);

		// SAFETY: All pointers stay valid until after the call returns
		let status = unsafe {
			(self.api().double_insert)(self.as_raw(), alias.as_ptr(), column.as_ptr(), native.as_ptr(), native.len())
		};

		check("qdb_ts_double_insert", status)
	}

	/// Insert binary points into a column; payloads are passed without copying
	#[instrument(name = "ts::blob_insert", level = "debug", skip_all, fields(alias = alias, column = column, points = points.len()))]
	pub fn blob_insert(&self, alias: &str, column: &str, points: &[BlobPoint<'_>]) -> Result<()> {
		let alias = marshal_str("alias", alias)?;
		let column = marshal_str("column", column)?;
		let native = marshal_blob_points(points);

		// SAFETY: `native` borrows `points`, so every payload outlives the call
		let status = unsafe {
			(self.api().blob_insert)(self.as_raw(), alias.as_ptr(), column.as_ptr(), native.as_ptr(), native.len())
		};

		check("qdb_ts_blob_insert", status)
	}

	/// Read the numeric points of a column inside the given ranges
	#[instrument(name = "ts::double_get_ranges", level = "debug", skip_all, fields(alias = alias, column = column, ranges = ranges.len()))]
	pub fn double_get_ranges(&self, alias: &str, column: &str, ranges: &[FilteredRange]) -> Result<Vec<DoublePoint>> {
		let alias = marshal_str("alias", alias)?;
		let column = marshal_str("column", column)?;
		let ranges = marshal_filtered_ranges(ranges)?;
		let mut points: *mut DoublePointFFI = null_mut();
		let mut count = 0usize;

		// SAFETY: Inputs outlive the call, out-parameters point to locals
		let status = unsafe {
			(self.api().double_get_ranges)(
				self.as_raw(),
				alias.as_ptr(),
				column.as_ptr(),
				ranges.as_ptr(),
				ranges.len(),
				&mut points,
				&mut count,
			)
		};
		// SAFETY: A non-null array written by the library is ours to release
		let native = unsafe { self.adopt(points, count) };
		check("qdb_ts_double_get_ranges", status)?;

		let result = unmarshal_double_points(out_slice(&native, count)?);
		drop(native);
		Ok(result)
	}

	/// Read the binary points of a column inside the given ranges
	///
	/// The returned points borrow the library's memory until dropped.
	#[instrument(name = "ts::blob_get_ranges", level = "debug", skip_all, fields(alias = alias, column = column, ranges = ranges.len()))]
	pub fn blob_get_ranges(&self, alias: &str, column: &str, ranges: &[FilteredRange]) -> Result<BlobPoints<'a>> {
		let alias = marshal_str("alias", alias)?;
		let column = marshal_str("column", column)?;
		let ranges = marshal_filtered_ranges(ranges)?;
		let mut points: *mut BlobPointFFI = null_mut();
		let mut count = 0usize;

		// SAFETY: Inputs outlive the call, out-parameters point to locals
		let status = unsafe {
			(self.api().blob_get_ranges)(
				self.as_raw(),
				alias.as_ptr(),
				column.as_ptr(),
				ranges.as_ptr(),
				ranges.len(),
				&mut points,
				&mut count,
			)
		};
		// SAFETY: A non-null array written by the library is ours to release
		let native = unsafe { self.adopt(points, count) };
		check("qdb_ts_blob_get_ranges", status)?;
		for point in out_slice(&native, count)? {
			// SAFETY: Payloads live in the native buffer held by `native`
			unsafe { unmarshal_blob_point(point) }?;
		}

		Ok(BlobPoints {
			native,
		})
	}

	/// Compute numeric aggregations over a column
	#[instrument(name = "ts::double_aggregate", level = "debug", skip_all, fields(alias = alias, column = column, aggregations = aggregations.len()))]
	pub fn double_aggregate(
		&self,
		alias: &str,
		column: &str,
		aggregations: &[DoubleAggregation],
	) -> Result<Vec<DoubleAggregation>> {
		let alias = marshal_str("alias", alias)?;
		let column = marshal_str("column", column)?;
		let mut native = marshal_double_aggregations(aggregations)?;

		// SAFETY: The array is written in place and outlives the call
		let status = unsafe {
			(self.api().double_aggregate)(
				self.as_raw(),
				alias.as_ptr(),
				column.as_ptr(),
				native.as_mut_ptr(),
				native.len(),
			)
		};
		check("qdb_ts_double_aggregate", status)?;

		Ok(unmarshal_double_aggregations(&native)?)
	}

	/// Compute binary aggregations over a column
	///
	/// Result payloads written by the library are copied, then released.
	#[instrument(name = "ts::blob_aggregate", level = "debug", skip_all, fields(alias = alias, column = column, aggregations = aggregations.len()))]
	pub fn blob_aggregate(
		&self,
		alias: &str,
		column: &str,
		aggregations: &[BlobAggregation<'_>],
	) -> Result<Vec<BlobAggregation<'static>>> {
		let alias = marshal_str("alias", alias)?;
		let column = marshal_str("column", column)?;
		let mut native = marshal_blob_aggregations(aggregations)?;
		let sent: Vec<*const c_void> = native.iter().map(|aggregation| aggregation.result.content).collect();

		// SAFETY: The array is written in place and outlives the call
		let status = unsafe {
			(self.api().blob_aggregate)(
				self.as_raw(),
				alias.as_ptr(),
				column.as_ptr(),
				native.as_mut_ptr(),
				native.len(),
			)
		};

		// Payloads the library replaced are now owned by it and have to go back exactly once
		let written: Vec<NativeArray<'a, u8>> = native
			.iter()
			.zip(&sent)
			.filter(|(aggregation, sent)| aggregation.result.content != **sent)
			.filter_map(|(aggregation, _)| {
				// SAFETY: The library handed this payload to us
				unsafe {
					self.adopt(aggregation.result.content as *mut u8, aggregation.result.content_length)
				}
			})
			.collect();
		check("qdb_ts_blob_aggregate", status)?;

		let mut result = Vec::with_capacity(native.len());
		for aggregation in native.iter() {
			// SAFETY: Payloads are either ours or held by `written` until the copy is made
			result.push(unsafe { unmarshal_blob_aggregation(aggregation) }?.into_owned());
		}
		drop(written);
		Ok(result)
	}
}

/// Binary points read from the native library
///
/// Payloads are borrowed from the library's buffer, which is released when this is dropped.
#[derive(Debug)]
pub struct BlobPoints<'a> {
	native: Option<NativeArray<'a, BlobPointFFI>>,
}

impl BlobPoints<'_> {
	pub fn len(&self) -> usize {
		self.as_ffi().len()
	}

	pub fn is_empty(&self) -> bool {
		self.as_ffi().is_empty()
	}

	pub fn get(&self, index: usize) -> Option<std::result::Result<BlobPoint<'_>, MarshalError>> {
		// SAFETY: Payloads live in the native buffer, which outlives &self
		self.as_ffi().get(index).map(|point| unsafe { unmarshal_blob_point(point) })
	}

	pub fn iter(&self) -> impl Iterator<Item = std::result::Result<BlobPoint<'_>, MarshalError>> + '_ {
		// SAFETY: Payloads live in the native buffer, which outlives &self
		self.as_ffi().iter().map(|point| unsafe { unmarshal_blob_point(point) })
	}

	/// Copy every point out of the native buffer
	pub fn to_owned_points(&self) -> std::result::Result<Vec<BlobPoint<'static>>, MarshalError> {
		self.iter().map(|point| point.map(BlobPoint::into_owned)).collect()
	}

	fn as_ffi(&self) -> &[BlobPointFFI] {
		self.native.as_ref().map(NativeArray::as_slice).unwrap_or(&[])
	}
}
