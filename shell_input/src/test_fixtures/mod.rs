// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! In memory collaborators and output capture, used by the tests in this crate.

// Attach.
mod mock_collaborators;
mod mock_lookups;
mod mock_process;
mod stdout_mock;

// Re-export.
pub use mock_collaborators::*;
pub use mock_lookups::*;
pub use mock_process::*;
pub use stdout_mock::*;
