// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod cancel;
pub mod cli;
pub mod client;
pub mod commands;
pub mod config;
pub mod error;
pub mod form;
pub mod logging;
pub mod models;
pub mod page;
pub mod shell;
pub mod store;
pub mod summary;
pub mod utils;
