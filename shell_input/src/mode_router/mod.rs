// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The top level dispatcher. For every keystroke the [`ModeRouter`] resolves the
//! [`ExecutionMode`] from its own state and the collaborator signals, then either edits
//! the line locally (idle and buffered modes) or forwards the keystroke (pager,
//! interactive and external engine modes).

// Attach.
mod autocomplete_handlers;
mod collaborator_refs;
mod execution_mode;
mod line_editing;
mod mode_router_struct;
mod passthrough;


// Re-export.
pub use collaborator_refs::*;
pub use execution_mode::*;
pub use mode_router_struct::*;
