// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! In-process stand-in for the native library
//!
//! Every entry point records what it received in thread-local state. Buffers handed out to the
//! caller are tracked so tests can check that each one is released exactly once.

#![allow(dead_code)]

use std::{
	any::Any,
	cell::RefCell,
	collections::HashMap,
	ffi::{CStr, CString, c_char, c_void},
	fmt,
	ptr::{NonNull, null, null_mut},
	sync::{Arc, Mutex},
	slice::{from_raw_parts, from_raw_parts_mut},
};

use qdb_ts_abi::{
	api::{HandleFFI, TimeSeriesApiFFI},
	catalog::ColumnInfoFFI,
	constants::{ErrorFFI, QDB_E_OK},
	data::{BlobAggregationFFI, BlobPointFFI, DoubleAggregationFFI, DoublePointFFI, FilteredRangeFFI, TimespecFFI},
};
use qdb_ts_sdk::Handle;
use tracing::{
	Event, Subscriber,
	field::{Field, Visit},
};
use tracing_subscriber::{
	EnvFilter,
	layer::{Context, Layer, SubscriberExt},
};

#[derive(Default)]
pub struct FakeState {
	/// Status every entry point returns
	pub status: ErrorFFI,
	pub calls: Vec<&'static str>,
	pub alias: Option<String>,
	pub column: Option<String>,

	/// Columns received by create / insert_columns
	pub received_columns: Vec<(String, i32)>,
	/// Addresses of the column names received by create / insert_columns
	pub received_name_ptrs: Vec<usize>,
	/// Columns handed out by list_columns
	pub listed_columns: Vec<(String, i32)>,

	pub received_double_points: Vec<DoublePointFFI>,
	/// (seconds, payload address, payload)
	pub received_blob_points: Vec<(i64, usize, Vec<u8>)>,
	/// (begin seconds, end seconds, filter type)
	pub received_ranges: Vec<(i64, i64, i32)>,
	pub received_aggregation_types: Vec<i32>,

	/// Points handed out by the get_ranges entry points and used for aggregates
	pub stored_double_points: Vec<DoublePointFFI>,
	pub stored_blob_points: Vec<(TimespecFFI, Vec<u8>)>,
	/// Hand out blob points with a null payload but their real length
	pub null_blob_payloads: bool,

	/// Addresses of result payloads written by blob_aggregate
	pub aggregate_payloads: Vec<usize>,

	allocations: HashMap<usize, Box<dyn Any>>,
	pub allocated: usize,
	pub released: usize,
	pub bad_releases: usize,
}

impl FakeState {
	pub fn live_allocations(&self) -> usize {
		self.allocations.len()
	}

	fn allocate<T: 'static>(&mut self, mut items: Vec<T>, keep_alive: Box<dyn Any>) -> *mut T {
		if items.is_empty() {
			return null_mut();
		}
		let ptr = items.as_mut_ptr();
		self.allocations.insert(ptr as usize, Box::new((items, keep_alive)));
		self.allocated += 1;
		ptr
	}
}

thread_local! {
	static STATE: RefCell<FakeState> = RefCell::new(FakeState::default());
}

pub fn reset() {
	STATE.with(|state| *state.borrow_mut() = FakeState::default());
}

pub fn with<R>(f: impl FnOnce(&mut FakeState) -> R) -> R {
	STATE.with(|state| f(&mut state.borrow_mut()))
}

pub fn set_status(status: ErrorFFI) {
	with(|state| state.status = status);
}

pub fn init_tracing() {
	let _ = tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).with_test_writer().try_init();
}

/// Counts the column-name buffers freed while `f` runs
///
/// Returns one entry per dropped set of marshalled columns, holding how many names it freed.
pub fn count_name_releases<R>(f: impl FnOnce() -> R) -> (R, Vec<u64>) {
	let freed = Arc::new(Mutex::new(Vec::new()));
	let subscriber = tracing_subscriber::registry().with(NameReleases(freed.clone()));
	let result = tracing::subscriber::with_default(subscriber, f);
	let freed = freed.lock().unwrap().clone();
	(result, freed)
}

struct NameReleases(Arc<Mutex<Vec<u64>>>);

impl<S: Subscriber> Layer<S> for NameReleases {
	fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
		if event.metadata().target() != "qdb_ts_sdk::marshal::column" {
			return;
		}
		let mut visitor = FreedVisitor::default();
		event.record(&mut visitor);
		if let Some(freed) = visitor.freed {
			self.0.lock().unwrap().push(freed);
		}
	}
}

#[derive(Default)]
struct FreedVisitor {
	freed: Option<u64>,
}

impl Visit for FreedVisitor {
	fn record_u64(&mut self, field: &Field, value: u64) {
		if field.name() == "freed" {
			self.freed = Some(value);
		}
	}

	fn record_debug(&mut self, _field: &Field, _value: &dyn fmt::Debug) {}
}

pub fn api() -> TimeSeriesApiFFI {
	TimeSeriesApiFFI {
		create: fake_create,
		insert_columns: fake_insert_columns,
		list_columns: fake_list_columns,
		double_insert: fake_double_insert,
		blob_insert: fake_blob_insert,
		double_get_ranges: fake_double_get_ranges,
		blob_get_ranges: fake_blob_get_ranges,
		double_aggregate: fake_double_aggregate,
		blob_aggregate: fake_blob_aggregate,
		release: fake_release,
	}
}

pub fn handle(api: &TimeSeriesApiFFI) -> Handle<'_> {
	init_tracing();
	reset();
	with(|state| state.status = QDB_E_OK);
	// SAFETY: The fake never dereferences the handle
	unsafe { Handle::from_raw(api, NonNull::<c_void>::dangling().as_ptr()) }
}

unsafe fn read_str(ptr: *const c_char) -> String {
	unsafe { CStr::from_ptr(ptr) }.to_string_lossy().into_owned()
}

unsafe fn read_slice<'a, T>(ptr: *const T, len: usize) -> &'a [T] {
	if len == 0 { &[] } else { unsafe { from_raw_parts(ptr, len) } }
}

unsafe fn read_columns(columns: *const ColumnInfoFFI, count: usize) -> Vec<(String, i32)> {
	unsafe { read_slice(columns, count) }
		.iter()
		.map(|column| (unsafe { read_str(column.name) }, column.column_type))
		.collect()
}

unsafe fn record_ranges(state: &mut FakeState, ranges: *const FilteredRangeFFI, count: usize) {
	for range in unsafe { read_slice(ranges, count) } {
		state.received_ranges.push((range.range.begin.tv_sec, range.range.end.tv_sec, range.filter.filter_type));
	}
}

unsafe extern "C" fn fake_create(
	_handle: HandleFFI,
	alias: *const c_char,
	columns: *const ColumnInfoFFI,
	column_count: usize,
) -> ErrorFFI {
	with(|state| {
		state.calls.push("create");
		state.alias = Some(unsafe { read_str(alias) });
		state.received_columns = unsafe { read_columns(columns, column_count) };
		state.received_name_ptrs = unsafe { read_slice(columns, column_count) }.iter().map(|c| c.name as usize).collect();
		state.status
	})
}

unsafe extern "C" fn fake_insert_columns(
	_handle: HandleFFI,
	alias: *const c_char,
	columns: *const ColumnInfoFFI,
	column_count: usize,
) -> ErrorFFI {
	with(|state| {
		state.calls.push("insert_columns");
		state.alias = Some(unsafe { read_str(alias) });
		state.received_columns = unsafe { read_columns(columns, column_count) };
		state.received_name_ptrs = unsafe { read_slice(columns, column_count) }.iter().map(|c| c.name as usize).collect();
		state.status
	})
}

unsafe extern "C" fn fake_list_columns(
	_handle: HandleFFI,
	alias: *const c_char,
	columns: *mut *mut ColumnInfoFFI,
	column_count: *mut usize,
) -> ErrorFFI {
	with(|state| {
		state.calls.push("list_columns");
		state.alias = Some(unsafe { read_str(alias) });

		let names: Vec<CString> =
			state.listed_columns.iter().map(|(name, _)| CString::new(name.as_str()).unwrap()).collect();
		let infos: Vec<ColumnInfoFFI> = names
			.iter()
			.zip(&state.listed_columns)
			.map(|(name, (_, column_type))| ColumnInfoFFI {
				name: name.as_ptr(),
				column_type: *column_type,
			})
			.collect();
		let len = infos.len();
		let ptr = state.allocate(infos, Box::new(names));

		unsafe {
			*columns = ptr;
			*column_count = len;
		}
		state.status
	})
}

unsafe extern "C" fn fake_double_insert(
	_handle: HandleFFI,
	alias: *const c_char,
	column: *const c_char,
	values: *const DoublePointFFI,
	value_count: usize,
) -> ErrorFFI {
	with(|state| {
		state.calls.push("double_insert");
		state.alias = Some(unsafe { read_str(alias) });
		state.column = Some(unsafe { read_str(column) });
		state.received_double_points = unsafe { read_slice(values, value_count) }.to_vec();
		state.status
	})
}

unsafe extern "C" fn fake_blob_insert(
	_handle: HandleFFI,
	alias: *const c_char,
	column: *const c_char,
	values: *const BlobPointFFI,
	value_count: usize,
) -> ErrorFFI {
	with(|state| {
		state.calls.push("blob_insert");
		state.alias = Some(unsafe { read_str(alias) });
		state.column = Some(unsafe { read_str(column) });
		state.received_blob_points = unsafe { read_slice(values, value_count) }
			.iter()
			.map(|point| {
				let payload = unsafe { read_slice(point.content as *const u8, point.content_length) }.to_vec();
				(point.timestamp.tv_sec, point.content as usize, payload)
			})
			.collect();
		state.status
	})
}

unsafe extern "C" fn fake_double_get_ranges(
	_handle: HandleFFI,
	alias: *const c_char,
	column: *const c_char,
	ranges: *const FilteredRangeFFI,
	range_count: usize,
	points: *mut *mut DoublePointFFI,
	point_count: *mut usize,
) -> ErrorFFI {
	with(|state| {
		state.calls.push("double_get_ranges");
		state.alias = Some(unsafe { read_str(alias) });
		state.column = Some(unsafe { read_str(column) });
		unsafe { record_ranges(state, ranges, range_count) };

		let stored = state.stored_double_points.clone();
		let len = stored.len();
		let ptr = state.allocate(stored, Box::new(()));
		unsafe {
			*points = ptr;
			*point_count = len;
		}
		state.status
	})
}

unsafe extern "C" fn fake_blob_get_ranges(
	_handle: HandleFFI,
	alias: *const c_char,
	column: *const c_char,
	ranges: *const FilteredRangeFFI,
	range_count: usize,
	points: *mut *mut BlobPointFFI,
	point_count: *mut usize,
) -> ErrorFFI {
	with(|state| {
		state.calls.push("blob_get_ranges");
		state.alias = Some(unsafe { read_str(alias) });
		state.column = Some(unsafe { read_str(column) });
		unsafe { record_ranges(state, ranges, range_count) };

		let payloads: Vec<Vec<u8>> = state.stored_blob_points.iter().map(|(_, payload)| payload.clone()).collect();
		let null_payloads = state.null_blob_payloads;
		let ffi: Vec<BlobPointFFI> = state
			.stored_blob_points
			.iter()
			.zip(&payloads)
			.map(|((timestamp, _), payload)| BlobPointFFI {
				timestamp: *timestamp,
				content: if null_payloads {
					null()
				} else {
					payload.as_ptr() as *const c_void
				},
				content_length: payload.len(),
			})
			.collect();
		let len = ffi.len();
		let ptr = state.allocate(ffi, Box::new(payloads));
		unsafe {
			*points = ptr;
			*point_count = len;
		}
		state.status
	})
}

unsafe extern "C" fn fake_double_aggregate(
	_handle: HandleFFI,
	_alias: *const c_char,
	_column: *const c_char,
	aggregations: *mut DoubleAggregationFFI,
	aggregation_count: usize,
) -> ErrorFFI {
	with(|state| {
		state.calls.push("double_aggregate");
		if aggregation_count == 0 {
			return state.status;
		}
		for aggregation in unsafe { from_raw_parts_mut(aggregations, aggregation_count) } {
			state.received_aggregation_types.push(aggregation.aggregation_type);
			aggregation.count = state.stored_double_points.len();
			aggregation.result = state.stored_double_points.last().copied().unwrap_or_default();
		}
		state.status
	})
}

unsafe extern "C" fn fake_blob_aggregate(
	_handle: HandleFFI,
	_alias: *const c_char,
	_column: *const c_char,
	aggregations: *mut BlobAggregationFFI,
	aggregation_count: usize,
) -> ErrorFFI {
	with(|state| {
		state.calls.push("blob_aggregate");
		if aggregation_count == 0 {
			return state.status;
		}
		for aggregation in unsafe { from_raw_parts_mut(aggregations, aggregation_count) } {
			state.received_aggregation_types.push(aggregation.aggregation_type);
			aggregation.count = state.stored_blob_points.len();
			if let Some((timestamp, payload)) = state.stored_blob_points.last().cloned() {
				let len = payload.len();
				let ptr = state.allocate(payload, Box::new(()));
				state.aggregate_payloads.push(ptr as usize);
				aggregation.result = BlobPointFFI {
					timestamp,
					content: ptr as *const c_void,
					content_length: len,
				};
			}
		}
		state.status
	})
}

unsafe extern "C" fn fake_release(_handle: HandleFFI, buffer: *const c_void) {
	with(|state| {
		if state.allocations.remove(&(buffer as usize)).is_some() {
			state.released += 1;
		} else {
			state.bad_releases += 1;
		}
	})
}
