// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::types::Timespec;

/// A numeric sample
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DoublePoint {
	pub timestamp: Timespec,
	pub value: f64,
}

impl DoublePoint {
	pub const fn new(timestamp: Timespec, value: f64) -> Self {
		Self {
			timestamp,
			value,
		}
	}
}

/// A binary sample
///
/// `content` borrows whenever the source allows it: points read back from the native library
/// borrow memory owned by the library, so they are tied to the guard that releases that
/// memory. Call [`BlobPoint::into_owned`] to keep a point past that guard.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlobPoint<'a> {
	pub timestamp: Timespec,
	pub content: Cow<'a, [u8]>,
}

impl<'a> BlobPoint<'a> {
	pub fn new(timestamp: Timespec, content: impl Into<Cow<'a, [u8]>>) -> Self {
		Self {
			timestamp,
			content: content.into(),
		}
	}

	pub fn content(&self) -> &[u8] {
		&self.content
	}

	/// Copy the payload if it is borrowed
	pub fn into_owned(self) -> BlobPoint<'static> {
		BlobPoint {
			timestamp: self.timestamp,
			content: Cow::Owned(self.content.into_owned()),
		}
	}
}
