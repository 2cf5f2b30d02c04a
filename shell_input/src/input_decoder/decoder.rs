// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::keystroke::{Keystroke, lookup_arrow};
use crate::{ShellInputError, ShellInputResult};

/// State of the virtual "Control" key (eg: a toolbar toggle outside this crate). Once
/// armed, it applies to exactly one subsequent keystroke and is then released.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum ControlModifier {
    #[default]
    Released,
    Armed,
}

impl ControlModifier {
    #[must_use]
    pub fn is_armed(&self) -> bool { matches!(self, ControlModifier::Armed) }
}

/// Turns raw byte chunks from the input device into [`Keystroke`]s.
///
/// Each call to [`InputDecoder::decode`] handles one chunk, which is assumed to hold one
/// keystroke (or one paste). Invalid UTF-8 is rejected without touching the control
/// modifier, so a garbled chunk doesn't swallow the modifier meant for the next key.
#[derive(Debug, Default)]
pub struct InputDecoder {
    control_modifier: ControlModifier,
}

impl InputDecoder {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    #[must_use]
    pub fn control_modifier(&self) -> ControlModifier { self.control_modifier }

    pub fn set_control_modifier(&mut self, control_modifier: ControlModifier) {
        self.control_modifier = control_modifier;
    }

    /// # Errors
    ///
    /// Returns [`ShellInputError::InvalidUtf8`] if the chunk can't be decoded. Callers
    /// log and drop the chunk.
    pub fn decode(&mut self, chunk: &[u8]) -> ShellInputResult<Keystroke> {
        let Ok(text) = std::str::from_utf8(chunk) else {
            return Err(ShellInputError::InvalidUtf8 {
                bytes: chunk.to_vec(),
            });
        };

        if self.control_modifier.is_armed() {
            self.control_modifier = ControlModifier::Released;
            return Ok(Keystroke::new(apply_control_modifier(text)));
        }

        Ok(Keystroke::new(text))
    }
}

/// Applies the control modifier to the text of one keystroke:
/// 1. The text is upper-cased.
/// 2. Arrows (either encoding) become Alt + arrow (`ESC [ 1 ; 3 <dir>`).
/// 3. Otherwise an ASCII first character above `@` (64) becomes the matching C0
///    control character, eg: `c` → `C` → `0x03`.
/// 4. Anything else is returned upper-cased.
#[must_use]
pub fn apply_control_modifier(text: &str) -> String {
    let upper = text.to_uppercase();

    if let Some(direction) = lookup_arrow(&upper) {
        return direction.alt_sequence();
    }

    match upper.chars().next() {
        Some(first) if first.is_ascii() && u32::from(first) > 64 => {
            // is_ascii() guarantees the code point fits in a u8.
            #[allow(clippy::cast_possible_truncation)]
            let code = u32::from(first) as u8 - 64;
            char::from(code).to_string()
        }
        _ => upper,
    }
}
