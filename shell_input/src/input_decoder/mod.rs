// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Byte chunk → [`Keystroke`] decoding.
//!
//! | Module      | Responsibility                                                   |
//! |-------------|------------------------------------------------------------------|
//! | `keystroke` | [`DecodedEvent`], [`ArrowDirection`], the escape sequence table  |
//! | `decoder`   | [`InputDecoder`] and the control modifier transform              |

// Attach.
mod decoder;
mod keystroke;

// Re-export.
pub use decoder::*;
pub use keystroke::*;
