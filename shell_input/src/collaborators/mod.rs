// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Contracts for everything outside the line editing core: the render surface, the
//! running process, the lookup tables, the submission sink, and an optional external
//! engine. The core only talks to these through traits, so every one of them can be
//! mocked (see [`crate::test_fixtures`]).

// Attach.
mod contracts;
mod session_scope;

// Re-export.
pub use contracts::*;
pub use session_scope::*;
