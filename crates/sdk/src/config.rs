// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{env, path::PathBuf};

use serde::{Deserialize, Serialize};

/// Environment variable overriding the default library location
pub const LIBRARY_PATH_ENV: &str = "QDB_TS_LIBRARY";

/// Where to find the native client library
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LibraryConfig {
	pub path: PathBuf,
}

impl LibraryConfig {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
		self.path = path.into();
		self
	}
}

impl Default for LibraryConfig {
	fn default() -> Self {
		let path = env::var_os(LIBRARY_PATH_ENV)
			.map(PathBuf::from)
			.unwrap_or_else(|| PathBuf::from(libloading::library_filename("qdb_api")));
		Self {
			path,
		}
	}
}
