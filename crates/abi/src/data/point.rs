// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use core::ffi::c_void;

use crate::data::TimespecFFI;

/// FFI-safe numeric sample (`qdb_ts_double_point`)
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DoublePointFFI {
	pub timestamp: TimespecFFI,
	pub value: f64,
}

/// FFI-safe binary sample (`qdb_ts_blob_point`)
///
/// `content` is never owned by this struct. Depending on the direction it points either into
/// caller memory or into memory owned by the native library.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct BlobPointFFI {
	pub timestamp: TimespecFFI,
	/// Start of the payload, may be null when `content_length` is 0
	pub content: *const c_void,
	/// Payload length in bytes
	pub content_length: usize,
}

impl BlobPointFFI {
	/// Create a point with an empty payload
	pub const fn empty() -> Self {
		Self {
			timestamp: TimespecFFI {
				tv_sec: 0,
				tv_nsec: 0,
			},
			content: core::ptr::null(),
			content_length: 0,
		}
	}
}
