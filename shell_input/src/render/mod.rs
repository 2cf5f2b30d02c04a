// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
mod interpreter;
mod overlay_color;
mod render_op;

// Re-export.
pub use interpreter::*;
pub use overlay_color::*;
pub use render_op::*;
