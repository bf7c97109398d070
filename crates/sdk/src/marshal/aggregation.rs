// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use qdb_ts_abi::{
	constants::AGGREGATION_COUNT_UNSET,
	data::{BlobAggregationFFI, DoubleAggregationFFI},
};

use super::{
	NativeSlice, NativeView, marshal_double_point, marshal_filtered_range, point::blob_point_ffi, unmarshal_blob_point,
	unmarshal_double_point, unmarshal_filtered_range,
};
use crate::{
	error::MarshalError,
	types::{AggregationType, BlobAggregation, DoubleAggregation},
};

fn marshal_count(count: Option<usize>) -> usize {
	count.unwrap_or(AGGREGATION_COUNT_UNSET)
}

fn unmarshal_count(count: usize) -> Option<usize> {
	(count != AGGREGATION_COUNT_UNSET).then_some(count)
}

pub fn marshal_double_aggregation(aggregation: &DoubleAggregation) -> Result<DoubleAggregationFFI, MarshalError> {
	Ok(DoubleAggregationFFI {
		aggregation_type: aggregation.aggregation_type.code(),
		filtered_range: marshal_filtered_range(&aggregation.filtered_range)?,
		count: marshal_count(aggregation.count),
		result: marshal_double_point(&aggregation.result),
	})
}

pub fn unmarshal_double_aggregation(ffi: &DoubleAggregationFFI) -> Result<DoubleAggregation, MarshalError> {
	Ok(DoubleAggregation {
		filtered_range: unmarshal_filtered_range(&ffi.filtered_range)?,
		aggregation_type: AggregationType::from_code(ffi.aggregation_type),
		count: unmarshal_count(ffi.count),
		result: unmarshal_double_point(&ffi.result),
	})
}

pub fn marshal_double_aggregations(
	aggregations: &[DoubleAggregation],
) -> Result<Vec<DoubleAggregationFFI>, MarshalError> {
	aggregations.iter().map(marshal_double_aggregation).collect()
}

pub fn unmarshal_double_aggregations(ffi: &[DoubleAggregationFFI]) -> Result<Vec<DoubleAggregation>, MarshalError> {
	ffi.iter().map(unmarshal_double_aggregation).collect()
}

fn blob_aggregation_ffi(aggregation: &BlobAggregation<'_>) -> Result<BlobAggregationFFI, MarshalError> {
	Ok(BlobAggregationFFI {
		aggregation_type: aggregation.aggregation_type.code(),
		filtered_range: marshal_filtered_range(&aggregation.filtered_range)?,
		count: marshal_count(aggregation.count),
		result: blob_point_ffi(&aggregation.result),
	})
}

/// Marshal a binary aggregation; the result payload is aliased, not copied
pub fn marshal_blob_aggregation<'a>(
	aggregation: &'a BlobAggregation<'_>,
) -> Result<NativeView<'a, BlobAggregationFFI>, MarshalError> {
	blob_aggregation_ffi(aggregation).map(NativeView::new)
}

pub fn marshal_blob_aggregations<'a>(
	aggregations: &'a [BlobAggregation<'_>],
) -> Result<NativeSlice<'a, BlobAggregationFFI>, MarshalError> {
	aggregations.iter().map(blob_aggregation_ffi).collect::<Result<Vec<_>, _>>().map(NativeSlice::new)
}

/// Unmarshal a binary aggregation, borrowing the result payload in place
///
/// # Safety
/// `ffi.result` must satisfy the contract of [`unmarshal_blob_point`] for `'a`.
pub unsafe fn unmarshal_blob_aggregation<'a>(ffi: &BlobAggregationFFI) -> Result<BlobAggregation<'a>, MarshalError> {
	Ok(BlobAggregation {
		filtered_range: unmarshal_filtered_range(&ffi.filtered_range)?,
		aggregation_type: AggregationType::from_code(ffi.aggregation_type),
		count: unmarshal_count(ffi.count),
		// SAFETY: Forwarded to the caller
		result: unsafe { unmarshal_blob_point(&ffi.result) }?,
	})
}

/// # Safety
/// Same contract as [`unmarshal_blob_aggregation`], for every element.
pub unsafe fn unmarshal_blob_aggregations<'a>(
	ffi: &[BlobAggregationFFI],
) -> Result<Vec<BlobAggregation<'a>>, MarshalError> {
	// SAFETY: Forwarded to the caller
	ffi.iter().map(|aggregation| unsafe { unmarshal_blob_aggregation(aggregation) }).collect()
}
