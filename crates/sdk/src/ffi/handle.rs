// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt;

use qdb_ts_abi::api::{HandleFFI, TimeSeriesApiFFI};

use crate::{error::MarshalError, ffi::NativeArray};

/// A session handle of the native library together with its entry points
///
/// The session itself is owned elsewhere; this type only borrows it. It is neither `Send` nor
/// `Sync`: concurrent use of one session has to be serialized by its owner.
#[derive(Clone, Copy)]
pub struct Handle<'a> {
	api: &'a TimeSeriesApiFFI,
	raw: HandleFFI,
}

impl<'a> Handle<'a> {
	/// # Safety
	/// `raw` must be a live session of the library behind `api` for as long as this handle is
	/// used.
	pub unsafe fn from_raw(api: &'a TimeSeriesApiFFI, raw: HandleFFI) -> Self {
		Self {
			api,
			raw,
		}
	}

	pub fn api(&self) -> &'a TimeSeriesApiFFI {
		self.api
	}

	pub fn as_raw(&self) -> HandleFFI {
		self.raw
	}

	/// Take ownership of an out-parameter array the library filled in
	///
	/// # Safety
	/// Same contract as [`NativeArray::from_raw`].
	pub(crate) unsafe fn adopt<T>(&self, ptr: *mut T, len: usize) -> Option<NativeArray<'a, T>> {
		// SAFETY: Forwarded to the caller
		unsafe { NativeArray::from_raw(self.api, self.raw, ptr, len) }
	}
}

impl fmt::Debug for Handle<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("Handle").field(&self.raw).finish()
	}
}

/// View the contents of an adopted out-parameter
///
/// A null array is only acceptable when the library reported no elements.
pub(crate) fn out_slice<'s, T>(array: &'s Option<NativeArray<'_, T>>, count: usize) -> Result<&'s [T], MarshalError> {
	match array {
		Some(array) => Ok(array.as_slice()),
		None if count == 0 => Ok(&[]),
		None => Err(MarshalError::NullArray {
			count,
		}),
	}
}
