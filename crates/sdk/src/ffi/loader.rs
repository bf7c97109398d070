// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Loader for the native client library

use std::path::{Path, PathBuf};

use libloading::{Library, Symbol};
use qdb_ts_abi::api::TimeSeriesApiFFI;
use tracing::{debug, info};

use crate::{
	config::LibraryConfig,
	error::{Error, Result},
};

/// A loaded native client library and its resolved entry points
pub struct NativeLibrary {
	api: TimeSeriesApiFFI,
	path: PathBuf,
	// Must outlive every function pointer in `api`
	_library: Library,
}

impl NativeLibrary {
	pub fn load(config: &LibraryConfig) -> Result<Self> {
		let path = config.path.clone();
		info!(path = %path.display(), "loading native time-series library");

		// SAFETY: Running the library's initializers is the point of loading it
		let library = unsafe { Library::new(&path) }.map_err(|source| Error::Load {
			path: path.clone(),
			source,
		})?;

		// SAFETY: The signatures below match the declarations in qdb/ts.h
		let api = unsafe {
			TimeSeriesApiFFI {
				create: resolve(&library, &path, "qdb_ts_create")?,
				insert_columns: resolve(&library, &path, "qdb_ts_insert_columns")?,
				list_columns: resolve(&library, &path, "qdb_ts_list_columns")?,
				double_insert: resolve(&library, &path, "qdb_ts_double_insert")?,
				blob_insert: resolve(&library, &path, "qdb_ts_blob_insert")?,
				double_get_ranges: resolve(&library, &path, "qdb_ts_double_get_ranges")?,
				blob_get_ranges: resolve(&library, &path, "qdb_ts_blob_get_ranges")?,
				double_aggregate: resolve(&library, &path, "qdb_ts_double_aggregate")?,
				blob_aggregate: resolve(&library, &path, "qdb_ts_blob_aggregate")?,
				release: resolve(&library, &path, "qdb_release")?,
			}
		};

		Ok(Self {
			api,
			path,
			_library: library,
		})
	}

	pub fn api(&self) -> &TimeSeriesApiFFI {
		&self.api
	}

	pub fn path(&self) -> &Path {
		&self.path
	}
}

/// # Safety
/// `T` must be the exact function pointer type of `symbol`.
unsafe fn resolve<T: Copy>(library: &Library, path: &Path, symbol: &'static str) -> Result<T> {
	// SAFETY: Forwarded to the caller
	let resolved: Symbol<T> = unsafe { library.get(symbol.as_bytes()) }.map_err(|source| Error::Symbol {
		symbol,
		path: path.to_path_buf(),
		source,
	})?;
	debug!(symbol, "resolved native symbol");
	Ok(*resolved)
}
