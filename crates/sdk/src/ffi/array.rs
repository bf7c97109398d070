// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{ffi::c_void, fmt, ptr::NonNull, slice::from_raw_parts};

use qdb_ts_abi::api::{HandleFFI, TimeSeriesApiFFI};
use tracing::trace;

/// Buffer allocated by the native library
///
/// Released through the library's release entry point exactly once, when the guard is
/// dropped. Anything borrowed from [`NativeArray::as_slice`] cannot outlive it.
pub struct NativeArray<'a, T> {
	api: &'a TimeSeriesApiFFI,
	handle: HandleFFI,
	ptr: NonNull<T>,
	len: usize,
}

impl<'a, T> NativeArray<'a, T> {
	/// Take ownership of a native buffer; returns `None` for a null pointer
	///
	/// # Safety
	/// - `ptr` must have been allocated by the library behind `api` and not released yet
	/// - `ptr` must point to `len` initialized values of `T`
	/// - nothing else may release `ptr`
	pub unsafe fn from_raw(api: &'a TimeSeriesApiFFI, handle: HandleFFI, ptr: *mut T, len: usize) -> Option<Self> {
		NonNull::new(ptr).map(|ptr| Self {
			api,
			handle,
			ptr,
			len,
		})
	}

	pub fn len(&self) -> usize {
		self.len
	}

	pub fn is_empty(&self) -> bool {
		self.len == 0
	}

	pub fn as_ptr(&self) -> *const T {
		self.ptr.as_ptr()
	}

	pub fn as_slice(&self) -> &[T] {
		// SAFETY: from_raw guarantees `len` initialized values that stay alive until drop
		unsafe { from_raw_parts(self.ptr.as_ptr(), self.len) }
	}
}

impl<T> Drop for NativeArray<'_, T> {
	fn drop(&mut self) {
		trace!(len = self.len, "releasing native buffer");
		// SAFETY: We own the buffer and release it only here
		unsafe { (self.api.release)(self.handle, self.ptr.as_ptr() as *const c_void) }
	}
}

impl<T: fmt::Debug> fmt::Debug for NativeArray<'_, T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_list().entries(self.as_slice()).finish()
	}
}
