// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Tracing subscriber setup. The library only emits `tracing` events, binaries (and
//! tests) decide where they go.

// Attach.
mod rolling_file_appender_impl;
mod tracing_config;
mod tracing_init;

// Re-export.
pub use rolling_file_appender_impl::*;
pub use tracing_config::*;
pub use tracing_init::*;
