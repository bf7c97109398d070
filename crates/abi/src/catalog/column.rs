// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use core::ffi::c_char;

use crate::constants::ColumnTypeFFI;

/// FFI-safe column definition (`qdb_ts_column_info`)
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct ColumnInfoFFI {
	/// NUL-terminated column name
	pub name: *const c_char,
	/// Column type tag
	pub column_type: ColumnTypeFFI,
}
