// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Bindings for the quasardb time-series C API
//!
//! Rust records in [`types`] are converted to the C layouts of `qdb-ts-abi` by [`marshal`],
//! and the operations in [`ts`] drive the native library through a [`Handle`].

pub mod config;
pub mod error;
pub mod ffi;
pub mod marshal;
pub mod ts;
pub mod types;

pub use config::LibraryConfig;
pub use error::{Error, MarshalError, Result, Status};
pub use ffi::{Handle, NativeArray, NativeLibrary};
pub use ts::BlobPoints;
pub use types::*;
