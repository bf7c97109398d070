// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	fmt::{self, Display, Formatter},
	path::PathBuf,
};

use qdb_ts_abi::constants::{ErrorFFI, QDB_E_OK};

pub type Result<T> = std::result::Result<T, Error>;

/// Status code returned by the native library, kept verbatim
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Status(pub ErrorFFI);

impl Status {
	pub const OK: Status = Status(QDB_E_OK);

	pub const fn code(self) -> ErrorFFI {
		self.0
	}

	pub const fn is_success(self) -> bool {
		self.0 == QDB_E_OK
	}
}

impl Display for Status {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		write!(f, "{:#010x}", self.0)
	}
}

/// A value that cannot be expressed on the other side of the boundary
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MarshalError {
	#[error("{field} {value:?} contains an interior nul byte")]
	InteriorNul {
		field: &'static str,
		value: String,
	},

	#[error("filter `{filter}` is not supported")]
	UnsupportedFilter {
		filter: &'static str,
	},

	#[error("unknown native filter type {0}")]
	UnknownFilterType(i32),

	#[error("native library returned a null array for {count} elements")]
	NullArray {
		count: usize,
	},
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("{call} failed with status {status}")]
	Native {
		call: &'static str,
		status: Status,
	},

	#[error(transparent)]
	Marshal(#[from] MarshalError),

	#[error("failed to load native library {path:?}")]
	Load {
		path: PathBuf,
		#[source]
		source: libloading::Error,
	},

	#[error("symbol `{symbol}` missing from native library {path:?}")]
	Symbol {
		symbol: &'static str,
		path: PathBuf,
		#[source]
		source: libloading::Error,
	},
}

impl Error {
	/// Native status behind this error, if the native library reported it
	pub fn status(&self) -> Option<Status> {
		match self {
			Error::Native {
				status,
				..
			} => Some(*status),
			_ => None,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_status_success_is_zero_only() {
		assert!(Status::OK.is_success());
		assert!(!Status(1).is_success());
		assert!(!Status(0xb100_0009).is_success());
	}

	#[test]
	fn test_status_display_is_hex() {
		assert_eq!(Status(0xb100_0009).to_string(), "0xb1000009");
		assert_eq!(Status::OK.to_string(), "0x00000000");
	}

	#[test]
	fn test_error_exposes_native_status() {
		let err = Error::Native {
			call: "qdb_ts_create",
			status: Status(42),
		};
		assert_eq!(err.status(), Some(Status(42)));
		assert_eq!(err.to_string(), "qdb_ts_create failed with status 0x0000002a");

		let err: Error = MarshalError::UnknownFilterType(9).into();
		assert_eq!(err.status(), None);
	}
}
