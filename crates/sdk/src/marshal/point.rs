// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{borrow::Cow, ffi::c_void, slice::from_raw_parts};

use qdb_ts_abi::data::{BlobPointFFI, DoublePointFFI};

use super::{NativeSlice, NativeView, marshal_timespec, unmarshal_timespec};
use crate::{
	error::MarshalError,
	types::{BlobPoint, DoublePoint},
};

pub fn marshal_double_point(point: &DoublePoint) -> DoublePointFFI {
	DoublePointFFI {
		timestamp: marshal_timespec(&point.timestamp),
		value: point.value,
	}
}

pub fn unmarshal_double_point(ffi: &DoublePointFFI) -> DoublePoint {
	DoublePoint::new(unmarshal_timespec(&ffi.timestamp), ffi.value)
}

pub fn marshal_double_points(points: &[DoublePoint]) -> Vec<DoublePointFFI> {
	points.iter().map(marshal_double_point).collect()
}

pub fn unmarshal_double_points(ffi: &[DoublePointFFI]) -> Vec<DoublePoint> {
	ffi.iter().map(unmarshal_double_point).collect()
}

/// Marshal a binary point without copying its payload
///
/// The returned view aliases `point.content` and cannot outlive it.
pub fn marshal_blob_point<'a>(point: &'a BlobPoint<'_>) -> NativeView<'a, BlobPointFFI> {
	NativeView::new(blob_point_ffi(point))
}

/// Marshal binary points without copying their payloads
pub fn marshal_blob_points<'a>(points: &'a [BlobPoint<'_>]) -> NativeSlice<'a, BlobPointFFI> {
	NativeSlice::new(points.iter().map(blob_point_ffi).collect())
}

pub(super) fn blob_point_ffi(point: &BlobPoint<'_>) -> BlobPointFFI {
	let content: &[u8] = &point.content;
	BlobPointFFI {
		timestamp: marshal_timespec(&point.timestamp),
		content: content.as_ptr() as *const c_void,
		content_length: content.len(),
	}
}

/// Unmarshal a binary point, borrowing its payload in place
///
/// A null payload is only accepted with a length of 0.
///
/// # Safety
/// When `content` is non-null and `content_length` is non-zero, `content` must point to that
/// many readable bytes that stay valid and unchanged for `'a`.
pub unsafe fn unmarshal_blob_point<'a>(ffi: &BlobPointFFI) -> Result<BlobPoint<'a>, MarshalError> {
	let content: &'a [u8] = if ffi.content_length == 0 {
		&[]
	} else if ffi.content.is_null() {
		return Err(MarshalError::NullArray {
			count: ffi.content_length,
		});
	} else {
		// SAFETY: Caller guarantees pointer validity for 'a
		unsafe { from_raw_parts(ffi.content as *const u8, ffi.content_length) }
	};
	Ok(BlobPoint {
		timestamp: unmarshal_timespec(&ffi.timestamp),
		content: Cow::Borrowed(content),
	})
}

/// Unmarshal binary points, borrowing their payloads in place
///
/// # Safety
/// Same contract as [`unmarshal_blob_point`], for every element.
pub unsafe fn unmarshal_blob_points<'a>(ffi: &[BlobPointFFI]) -> Result<Vec<BlobPoint<'a>>, MarshalError> {
	// SAFETY: Forwarded to the caller
	ffi.iter().map(|point| unsafe { unmarshal_blob_point(point) }).collect()
}
