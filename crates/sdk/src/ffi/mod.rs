// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Access to the native library: loading it, holding a session handle, and owning the
//! buffers it hands out.

mod array;
mod handle;
mod loader;

pub use array::NativeArray;
pub use handle::Handle;
pub(crate) use handle::out_slice;
pub use loader::NativeLibrary;
