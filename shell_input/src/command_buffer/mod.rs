// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
mod buffer;
mod glyph_width;

// Re-export.
pub use buffer::*;
pub use glyph_width::*;
