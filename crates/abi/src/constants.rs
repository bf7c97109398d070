// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! Tag values of the C enums used by the time-series API
//!
//! C enums are carried as plain integers on the Rust side: the native library may hand back
//! values this crate does not know about, and those must survive a round trip untouched.

/// `qdb_error_t`
pub type ErrorFFI = u32;

/// Success status (`qdb_e_ok`)
pub const QDB_E_OK: ErrorFFI = 0;

/// `qdb_ts_column_type_t`
pub type ColumnTypeFFI = i32;

pub const COLUMN_UNINITIALIZED: ColumnTypeFFI = -1;
pub const COLUMN_DOUBLE: ColumnTypeFFI = 0;
pub const COLUMN_BLOB: ColumnTypeFFI = 1;
pub const COLUMN_INT64: ColumnTypeFFI = 2;
pub const COLUMN_TIMESTAMP: ColumnTypeFFI = 3;

/// `qdb_ts_filter_type_t`
pub type FilterTypeFFI = i32;

pub const FILTER_NONE: FilterTypeFFI = 0;
pub const FILTER_UNIQUE: FilterTypeFFI = 1;
pub const FILTER_SAMPLE: FilterTypeFFI = 2;
pub const FILTER_DOUBLE_INSIDE_RANGE: FilterTypeFFI = 3;
pub const FILTER_DOUBLE_OUTSIDE_RANGE: FilterTypeFFI = 4;

/// `qdb_ts_aggregation_type_t`
pub type AggregationTypeFFI = i32;

pub const AGGREGATION_FIRST: AggregationTypeFFI = 0;
pub const AGGREGATION_LAST: AggregationTypeFFI = 1;
pub const AGGREGATION_MIN: AggregationTypeFFI = 2;
pub const AGGREGATION_MAX: AggregationTypeFFI = 3;
pub const AGGREGATION_ARITHMETIC_MEAN: AggregationTypeFFI = 4;
pub const AGGREGATION_HARMONIC_MEAN: AggregationTypeFFI = 5;
pub const AGGREGATION_GEOMETRIC_MEAN: AggregationTypeFFI = 6;
pub const AGGREGATION_QUADRATIC_MEAN: AggregationTypeFFI = 7;
pub const AGGREGATION_COUNT: AggregationTypeFFI = 8;
pub const AGGREGATION_SUM: AggregationTypeFFI = 9;
pub const AGGREGATION_SUM_OF_SQUARES: AggregationTypeFFI = 10;
pub const AGGREGATION_SPREAD: AggregationTypeFFI = 11;
pub const AGGREGATION_SAMPLE_VARIANCE: AggregationTypeFFI = 12;
pub const AGGREGATION_SAMPLE_STDDEV: AggregationTypeFFI = 13;
pub const AGGREGATION_POPULATION_VARIANCE: AggregationTypeFFI = 14;
pub const AGGREGATION_POPULATION_STDDEV: AggregationTypeFFI = 15;
pub const AGGREGATION_ABS_MIN: AggregationTypeFFI = 16;
pub const AGGREGATION_ABS_MAX: AggregationTypeFFI = 17;
pub const AGGREGATION_PRODUCT: AggregationTypeFFI = 18;
pub const AGGREGATION_SKEWNESS: AggregationTypeFFI = 19;
pub const AGGREGATION_KURTOSIS: AggregationTypeFFI = 20;

/// Count written into an aggregation request that has not been computed yet (`(qdb_size_t)-1`)
pub const AGGREGATION_COUNT_UNSET: usize = usize::MAX;
