// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Autocomplete engine.
//!
//! 1. `Tab` with no active session calls [`generate_candidates`] which reads history
//!    and the [`crate::ShellLookups`] in priority order.
//! 2. [`AutocompleteSession::start`] inserts the longest common prefix of the
//!    candidates and keeps the residual suffixes.
//! 3. Further typing narrows the session, `Up` / `Down` cycle, `Tab` / `Enter` accept,
//!    `Right` accepts up to the next word, `Esc` / `Left` cancel.

// Attach.
mod candidate_sources;
mod prefix_ops;
mod session;

// Re-export.
pub use candidate_sources::*;
pub use prefix_ops::*;
pub use session::*;
