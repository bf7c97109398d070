// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Column schema marshalling

use std::ffi::{CStr, CString};

use qdb_ts_abi::catalog::ColumnInfoFFI;
use tracing::trace;

use super::marshal_str;
use crate::{
	error::MarshalError,
	types::{ColumnInfo, ColumnType},
};

/// Column definitions laid out for the native library
///
/// Owns a copy of every column name. The copies are freed by [`NativeColumns::release`], or
/// on drop if it was never called, so they are freed exactly once on every path.
#[derive(Debug)]
pub struct NativeColumns {
	columns: Vec<ColumnInfoFFI>,
	// `columns` points into these buffers
	names: Vec<CString>,
}

impl NativeColumns {
	pub fn as_ptr(&self) -> *const ColumnInfoFFI {
		self.columns.as_ptr()
	}

	pub fn len(&self) -> usize {
		self.columns.len()
	}

	pub fn is_empty(&self) -> bool {
		self.columns.is_empty()
	}

	pub fn as_slice(&self) -> &[ColumnInfoFFI] {
		&self.columns
	}

	/// Free the name copies, returning how many were freed
	pub fn release(self) -> usize {
		let freed = self.names.len();
		drop(self);
		freed
	}
}

impl Drop for NativeColumns {
	fn drop(&mut self) {
		trace!(freed = self.names.len(), "releasing column names");
	}
}

/// Marshal column definitions, copying each name into its own native buffer
pub fn marshal_columns(columns: &[ColumnInfo]) -> Result<NativeColumns, MarshalError> {
	let mut names = Vec::with_capacity(columns.len());
	let mut native = Vec::with_capacity(columns.len());

	for column in columns {
		let name = marshal_str("column name", &column.name)?;
		native.push(ColumnInfoFFI {
			name: name.as_ptr(),
			column_type: column.column_type.code(),
		});
		// Moving the CString does not move its heap buffer
		names.push(name);
	}

	Ok(NativeColumns {
		columns: native,
		names,
	})
}

/// Unmarshal column definitions, copying every name
///
/// The native array is left untouched; freeing it is up to its owner.
///
/// # Safety
/// Every non-null `name` must point to a NUL-terminated string that is valid for the duration
/// of the call.
pub unsafe fn unmarshal_columns(ffi: &[ColumnInfoFFI]) -> Vec<ColumnInfo> {
	ffi.iter()
		.map(|column| {
			let name = if column.name.is_null() {
				String::new()
			} else {
				// SAFETY: Caller guarantees the name is a valid C string
				unsafe { CStr::from_ptr(column.name) }.to_string_lossy().into_owned()
			};
			ColumnInfo::new(name, ColumnType::from_code(column.column_type))
		})
		.collect()
}
