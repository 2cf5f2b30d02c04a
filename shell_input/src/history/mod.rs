// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
mod command_local_history;
mod history_store;

// Re-export.
pub use command_local_history::*;
pub use history_store::*;
