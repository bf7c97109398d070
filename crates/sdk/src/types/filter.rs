// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use serde::{Deserialize, Serialize};

use crate::types::Range;

/// Predicate applied to the values inside a range
///
/// The native API declares every variant below, but only [`Filter::None`] can currently be
/// marshalled. The others are rejected with
/// [`MarshalError::UnsupportedFilter`](crate::MarshalError::UnsupportedFilter).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub enum Filter {
	/// Keep every value
	#[default]
	None,
	/// Drop consecutive duplicates
	Unique,
	/// Keep `size` evenly spaced samples
	Sample {
		size: usize,
	},
	/// Keep values inside `[min, max]`
	DoubleInsideRange {
		min: f64,
		max: f64,
	},
	/// Keep values outside `[min, max]`
	DoubleOutsideRange {
		min: f64,
		max: f64,
	},
}

impl Filter {
	pub const fn name(&self) -> &'static str {
		match self {
			Filter::None => "none",
			Filter::Unique => "unique",
			Filter::Sample {
				..
			} => "sample",
			Filter::DoubleInsideRange {
				..
			} => "double_inside_range",
			Filter::DoubleOutsideRange {
				..
			} => "double_outside_range",
		}
	}
}

/// A time window together with the filter applied inside it
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FilteredRange {
	pub range: Range,
	pub filter: Filter,
}

impl FilteredRange {
	pub const fn new(range: Range, filter: Filter) -> Self {
		Self {
			range,
			filter,
		}
	}

	/// Window without a filter
	pub const fn unfiltered(range: Range) -> Self {
		Self::new(range, Filter::None)
	}
}
