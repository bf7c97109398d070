// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Marshalling between Rust records and their C layouts
//!
//! `marshal_*` functions go Rust -> C, `unmarshal_*` go C -> Rust. Batch forms keep element
//! order and fail as a whole on the first element that cannot be converted.

use std::{ffi::CString, marker::PhantomData, ops::Deref};

use crate::error::MarshalError;

mod aggregation;
mod column;
mod filter;
mod point;
mod time;

pub use aggregation::*;
pub use column::*;
pub use filter::*;
pub use point::*;
pub use time::*;

/// A C value that points into memory borrowed for `'a`
///
/// The borrow keeps the source alive for as long as the view exists.
#[derive(Debug, Clone, Copy)]
pub struct NativeView<'a, T> {
	value: T,
	_source: PhantomData<&'a [u8]>,
}

impl<'a, T> NativeView<'a, T> {
	pub(crate) fn new(value: T) -> Self {
		Self {
			value,
			_source: PhantomData,
		}
	}

	pub fn as_ptr(&self) -> *const T {
		&self.value
	}
}

impl<T> Deref for NativeView<'_, T> {
	type Target = T;

	fn deref(&self) -> &T {
		&self.value
	}
}

/// An array of C values that point into memory borrowed for `'a`
#[derive(Debug)]
pub struct NativeSlice<'a, T> {
	items: Vec<T>,
	_source: PhantomData<&'a [u8]>,
}

impl<'a, T> NativeSlice<'a, T> {
	pub(crate) fn new(items: Vec<T>) -> Self {
		Self {
			items,
			_source: PhantomData,
		}
	}

	pub fn as_ptr(&self) -> *const T {
		self.items.as_ptr()
	}

	/// Pointer for entry points that write results back into the array
	pub fn as_mut_ptr(&mut self) -> *mut T {
		self.items.as_mut_ptr()
	}
}

impl<T> Deref for NativeSlice<'_, T> {
	type Target = [T];

	fn deref(&self) -> &[T] {
		&self.items
	}
}

/// Copy `value` into a NUL-terminated buffer
pub fn marshal_str(field: &'static str, value: &str) -> Result<CString, MarshalError> {
	CString::new(value).map_err(|_| MarshalError::InteriorNul {
		field,
		value: value.to_string(),
	})
}
