// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! C ABI definitions for the quasardb time-series client API
//!
//! This crate mirrors the layouts declared in `qdb/ts.h` so they can be passed across the
//! foreign-function boundary unchanged. It holds no logic: conversions live in `qdb-ts-sdk`.

pub mod api;
pub mod catalog;
pub mod constants;
pub mod data;
