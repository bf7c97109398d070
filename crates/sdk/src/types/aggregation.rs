// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use qdb_ts_abi::constants::*;
use serde::{Deserialize, Serialize};

use crate::types::{BlobPoint, DoublePoint, FilteredRange};

/// Aggregation kind
///
/// Like [`ColumnType`](crate::ColumnType), unknown codes are carried through as
/// [`AggregationType::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AggregationType {
	First,
	Last,
	Min,
	Max,
	ArithmeticMean,
	HarmonicMean,
	GeometricMean,
	QuadraticMean,
	Count,
	Sum,
	SumOfSquares,
	Spread,
	SampleVariance,
	SampleStddev,
	PopulationVariance,
	PopulationStddev,
	AbsMin,
	AbsMax,
	Product,
	Skewness,
	Kurtosis,
	Other(i32),
}

impl AggregationType {
	pub const fn from_code(code: AggregationTypeFFI) -> Self {
		match code {
			AGGREGATION_FIRST => AggregationType::First,
			AGGREGATION_LAST => AggregationType::Last,
			AGGREGATION_MIN => AggregationType::Min,
			AGGREGATION_MAX => AggregationType::Max,
			AGGREGATION_ARITHMETIC_MEAN => AggregationType::ArithmeticMean,
			AGGREGATION_HARMONIC_MEAN => AggregationType::HarmonicMean,
			AGGREGATION_GEOMETRIC_MEAN => AggregationType::GeometricMean,
			AGGREGATION_QUADRATIC_MEAN => AggregationType::QuadraticMean,
			AGGREGATION_COUNT => AggregationType::Count,
			AGGREGATION_SUM => AggregationType::Sum,
			AGGREGATION_SUM_OF_SQUARES => AggregationType::SumOfSquares,
			AGGREGATION_SPREAD => AggregationType::Spread,
			AGGREGATION_SAMPLE_VARIANCE => AggregationType::SampleVariance,
			AGGREGATION_SAMPLE_STDDEV => AggregationType::SampleStddev,
			AGGREGATION_POPULATION_VARIANCE => AggregationType::PopulationVariance,
			AGGREGATION_POPULATION_STDDEV => AggregationType::PopulationStddev,
			AGGREGATION_ABS_MIN => AggregationType::AbsMin,
			AGGREGATION_ABS_MAX => AggregationType::AbsMax,
			AGGREGATION_PRODUCT => AggregationType::Product,
			AGGREGATION_SKEWNESS => AggregationType::Skewness,
			AGGREGATION_KURTOSIS => AggregationType::Kurtosis,
			other => AggregationType::Other(other),
		}
	}

	pub const fn code(self) -> AggregationTypeFFI {
		match self {
			AggregationType::First => AGGREGATION_FIRST,
			AggregationType::Last => AGGREGATION_LAST,
			AggregationType::Min => AGGREGATION_MIN,
			AggregationType::Max => AGGREGATION_MAX,
			AggregationType::ArithmeticMean => AGGREGATION_ARITHMETIC_MEAN,
			AggregationType::HarmonicMean => AGGREGATION_HARMONIC_MEAN,
			AggregationType::GeometricMean => AGGREGATION_GEOMETRIC_MEAN,
			AggregationType::QuadraticMean => AGGREGATION_QUADRATIC_MEAN,
			AggregationType::Count => AGGREGATION_COUNT,
			AggregationType::Sum => AGGREGATION_SUM,
			AggregationType::SumOfSquares => AGGREGATION_SUM_OF_SQUARES,
			AggregationType::Spread => AGGREGATION_SPREAD,
			AggregationType::SampleVariance => AGGREGATION_SAMPLE_VARIANCE,
			AggregationType::SampleStddev => AGGREGATION_SAMPLE_STDDEV,
			AggregationType::PopulationVariance => AGGREGATION_POPULATION_VARIANCE,
			AggregationType::PopulationStddev => AGGREGATION_POPULATION_STDDEV,
			AggregationType::AbsMin => AGGREGATION_ABS_MIN,
			AggregationType::AbsMax => AGGREGATION_ABS_MAX,
			AggregationType::Product => AGGREGATION_PRODUCT,
			AggregationType::Skewness => AGGREGATION_SKEWNESS,
			AggregationType::Kurtosis => AGGREGATION_KURTOSIS,
			AggregationType::Other(code) => code,
		}
	}
}

/// Numeric aggregation request and, once computed, its result
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DoubleAggregation {
	pub filtered_range: FilteredRange,
	pub aggregation_type: AggregationType,
	/// Number of samples aggregated, `None` until computed
	pub count: Option<usize>,
	pub result: DoublePoint,
}

impl DoubleAggregation {
	/// Request that has not been computed yet
	pub fn new(filtered_range: FilteredRange, aggregation_type: AggregationType) -> Self {
		Self {
			filtered_range,
			aggregation_type,
			count: None,
			result: DoublePoint::default(),
		}
	}
}

/// Binary aggregation request and, once computed, its result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlobAggregation<'a> {
	pub filtered_range: FilteredRange,
	pub aggregation_type: AggregationType,
	/// Number of samples aggregated, `None` until computed
	pub count: Option<usize>,
	pub result: BlobPoint<'a>,
}

impl<'a> BlobAggregation<'a> {
	/// Request that has not been computed yet
	pub fn new(filtered_range: FilteredRange, aggregation_type: AggregationType) -> Self {
		Self {
			filtered_range,
			aggregation_type,
			count: None,
			result: BlobPoint::default(),
		}
	}

	pub fn into_owned(self) -> BlobAggregation<'static> {
		BlobAggregation {
			filtered_range: self.filtered_range,
			aggregation_type: self.aggregation_type,
			count: self.count,
			result: self.result.into_owned(),
		}
	}
}
