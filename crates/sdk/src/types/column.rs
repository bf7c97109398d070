// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{self, Display, Formatter};

use qdb_ts_abi::constants::{
	COLUMN_BLOB, COLUMN_DOUBLE, COLUMN_INT64, COLUMN_TIMESTAMP, COLUMN_UNINITIALIZED, ColumnTypeFFI,
};
use serde::{Deserialize, Serialize};

/// Column type tag
///
/// Tags are not validated: a code this crate does not know is kept as [`ColumnType::Other`]
/// and written back unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColumnType {
	Uninitialized,
	Double,
	Blob,
	Int64,
	Timestamp,
	/// Code without a named variant; never holds one of the codes above
	Other(i32),
}

impl ColumnType {
	pub const fn from_code(code: ColumnTypeFFI) -> Self {
		match code {
			COLUMN_UNINITIALIZED => ColumnType::Uninitialized,
			COLUMN_DOUBLE => ColumnType::Double,
			COLUMN_BLOB => ColumnType::Blob,
			COLUMN_INT64 => ColumnType::Int64,
			COLUMN_TIMESTAMP => ColumnType::Timestamp,
			other => ColumnType::Other(other),
		}
	}

	pub const fn code(self) -> ColumnTypeFFI {
		match self {
			ColumnType::Uninitialized => COLUMN_UNINITIALIZED,
			ColumnType::Double => COLUMN_DOUBLE,
			ColumnType::Blob => COLUMN_BLOB,
			ColumnType::Int64 => COLUMN_INT64,
			ColumnType::Timestamp => COLUMN_TIMESTAMP,
			ColumnType::Other(code) => code,
		}
	}
}

impl From<ColumnTypeFFI> for ColumnType {
	fn from(code: ColumnTypeFFI) -> Self {
		Self::from_code(code)
	}
}

impl From<ColumnType> for ColumnTypeFFI {
	fn from(column_type: ColumnType) -> Self {
		column_type.code()
	}
}

impl Display for ColumnType {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			ColumnType::Uninitialized => f.write_str("UNINITIALIZED"),
			ColumnType::Double => f.write_str("DOUBLE"),
			ColumnType::Blob => f.write_str("BLOB"),
			ColumnType::Int64 => f.write_str("INT64"),
			ColumnType::Timestamp => f.write_str("TIMESTAMP"),
			ColumnType::Other(code) => write!(f, "TYPE({code})"),
		}
	}
}

/// One column of a time series
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColumnInfo {
	pub name: String,
	pub column_type: ColumnType,
}

impl ColumnInfo {
	pub fn new(name: impl Into<String>, column_type: ColumnType) -> Self {
		Self {
			name: name.into(),
			column_type,
		}
	}
}
