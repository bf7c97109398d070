// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use qdb_ts_abi::{
	constants::{
		FILTER_DOUBLE_INSIDE_RANGE, FILTER_DOUBLE_OUTSIDE_RANGE, FILTER_NONE, FILTER_SAMPLE, FILTER_UNIQUE,
	},
	data::{FilterFFI, FilteredRangeFFI},
};
use tracing::warn;

use super::{marshal_range, unmarshal_range};
use crate::{
	error::MarshalError,
	types::{Filter, FilteredRange},
};

/// Marshal a filter; only [`Filter::None`] has a native encoding
pub fn marshal_filter(filter: &Filter) -> Result<FilterFFI, MarshalError> {
	match filter {
		Filter::None => Ok(FilterFFI::none()),
		other => {
			warn!(filter = other.name(), "rejecting unsupported filter");
			Err(MarshalError::UnsupportedFilter {
				filter: other.name(),
			})
		}
	}
}

pub fn unmarshal_filter(ffi: &FilterFFI) -> Result<Filter, MarshalError> {
	let filter = match ffi.filter_type {
		FILTER_NONE => return Ok(Filter::None),
		FILTER_UNIQUE => "unique",
		FILTER_SAMPLE => "sample",
		FILTER_DOUBLE_INSIDE_RANGE => "double_inside_range",
		FILTER_DOUBLE_OUTSIDE_RANGE => "double_outside_range",
		other => return Err(MarshalError::UnknownFilterType(other)),
	};
	Err(MarshalError::UnsupportedFilter {
		filter,
	})
}

pub fn marshal_filtered_range(filtered_range: &FilteredRange) -> Result<FilteredRangeFFI, MarshalError> {
	Ok(FilteredRangeFFI {
		range: marshal_range(&filtered_range.range),
		filter: marshal_filter(&filtered_range.filter)?,
	})
}

pub fn unmarshal_filtered_range(ffi: &FilteredRangeFFI) -> Result<FilteredRange, MarshalError> {
	Ok(FilteredRange::new(unmarshal_range(&ffi.range), unmarshal_filter(&ffi.filter)?))
}

pub fn marshal_filtered_ranges(filtered_ranges: &[FilteredRange]) -> Result<Vec<FilteredRangeFFI>, MarshalError> {
	filtered_ranges.iter().map(marshal_filtered_range).collect()
}

pub fn unmarshal_filtered_ranges(ffi: &[FilteredRangeFFI]) -> Result<Vec<FilteredRange>, MarshalError> {
	ffi.iter().map(unmarshal_filtered_range).collect()
}
