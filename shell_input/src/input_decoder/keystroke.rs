// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use strum_macros::Display;

/// End of transmission, `Ctrl+D`.
pub const END_OF_TRANSMISSION: &str = "\u{4}";
/// End of text, `Ctrl+C`.
pub const INTERRUPT: &str = "\u{3}";
/// DEL, sent by the backspace key.
pub const DELETE_BACKWARD: &str = "\u{7f}";
pub const TABULATION: &str = "\t";
pub const CARRIAGE_RETURN: &str = "\r";
pub const ESCAPE: &str = "\u{1b}";

/// Logical direction of an arrow key, regardless of how the terminal encoded it.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Display)]
pub enum ArrowDirection {
    Up,
    Down,
    Right,
    Left,
}

impl ArrowDirection {
    /// The final byte shared by the `ESC [ x` and `ESC O x` encodings.
    #[must_use]
    pub fn final_char(self) -> char {
        match self {
            ArrowDirection::Up => 'A',
            ArrowDirection::Down => 'B',
            ArrowDirection::Right => 'C',
            ArrowDirection::Left => 'D',
        }
    }

    /// `ESC [ 1 ; 3 <dir>`, ie: Alt + arrow.
    #[must_use]
    pub fn alt_sequence(self) -> String { format!("{ESCAPE}[1;3{}", self.final_char()) }
}

/// Recognized arrow sequences in "normal" (`ESC [`) and "application" (`ESC O`)
/// cursor key modes. Both encodings map to the same logical arrow.
pub const ARROW_SEQUENCES: [(&str, ArrowDirection); 8] = [
    ("\u{1b}[A", ArrowDirection::Up),
    ("\u{1b}OA", ArrowDirection::Up),
    ("\u{1b}[B", ArrowDirection::Down),
    ("\u{1b}OB", ArrowDirection::Down),
    ("\u{1b}[C", ArrowDirection::Right),
    ("\u{1b}OC", ArrowDirection::Right),
    ("\u{1b}[D", ArrowDirection::Left),
    ("\u{1b}OD", ArrowDirection::Left),
];

/// Looks up `text` in [`ARROW_SEQUENCES`].
#[must_use]
pub fn lookup_arrow(text: &str) -> Option<ArrowDirection> {
    ARROW_SEQUENCES
        .iter()
        .find(|(sequence, _)| *sequence == text)
        .map(|(_, direction)| *direction)
}

/// The closed set of logical events the [`crate::ModeRouter`] dispatches on. Produced
/// once by the [`crate::InputDecoder`], so handlers never compare strings.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum DecodedEvent {
    /// `Ctrl+D`.
    EndOfTransmission,
    /// `Ctrl+C`.
    Interrupt,
    DeleteBackward,
    Tab,
    CarriageReturn,
    /// A lone `ESC`.
    Escape,
    Arrow(ArrowDirection),
    /// Only produced by the control modifier transform.
    AltArrow(ArrowDirection),
    /// Printable text to insert (may be more than one grapheme, eg: a paste).
    Text(String),
}

impl DecodedEvent {
    /// Classify a (possibly control modifier transformed) chunk of text.
    #[must_use]
    pub fn classify(text: &str) -> Self {
        match text {
            END_OF_TRANSMISSION => DecodedEvent::EndOfTransmission,
            INTERRUPT => DecodedEvent::Interrupt,
            DELETE_BACKWARD => DecodedEvent::DeleteBackward,
            TABULATION => DecodedEvent::Tab,
            CARRIAGE_RETURN => DecodedEvent::CarriageReturn,
            ESCAPE => DecodedEvent::Escape,
            _ => {
                if let Some(direction) = lookup_arrow(text) {
                    return DecodedEvent::Arrow(direction);
                }
                if let Some(direction) = ARROW_ALT_LOOKUP
                    .iter()
                    .find(|direction| direction.alt_sequence() == text)
                {
                    return DecodedEvent::AltArrow(*direction);
                }
                DecodedEvent::Text(text.to_string())
            }
        }
    }
}

const ARROW_ALT_LOOKUP: [ArrowDirection; 4] = [
    ArrowDirection::Up,
    ArrowDirection::Down,
    ArrowDirection::Right,
    ArrowDirection::Left,
];

/// One decoded keystroke: the logical [`DecodedEvent`] plus the exact text that
/// produced it (after the control modifier transform). The raw text is what gets
/// forwarded verbatim in passthrough modes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keystroke {
    pub event: DecodedEvent,
    pub raw: String,
}

impl Keystroke {
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        Self {
            event: DecodedEvent::classify(&raw),
            raw,
        }
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] { self.raw.as_bytes() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("\u{1b}[A", ArrowDirection::Up)]
    #[test_case("\u{1b}OA", ArrowDirection::Up)]
    #[test_case("\u{1b}[B", ArrowDirection::Down)]
    #[test_case("\u{1b}OB", ArrowDirection::Down)]
    #[test_case("\u{1b}[C", ArrowDirection::Right)]
    #[test_case("\u{1b}OC", ArrowDirection::Right)]
    #[test_case("\u{1b}[D", ArrowDirection::Left)]
    #[test_case("\u{1b}OD", ArrowDirection::Left)]
    fn test_both_arrow_encodings(input: &str, expected: ArrowDirection) {
        assert_eq!(DecodedEvent::classify(input), DecodedEvent::Arrow(expected));
    }

    #[test_case("\u{4}", DecodedEvent::EndOfTransmission)]
    #[test_case("\u{3}", DecodedEvent::Interrupt)]
    #[test_case("\u{7f}", DecodedEvent::DeleteBackward)]
    #[test_case("\t", DecodedEvent::Tab)]
    #[test_case("\r", DecodedEvent::CarriageReturn)]
    #[test_case("\u{1b}", DecodedEvent::Escape)]
    #[test_case("\u{1b}[1;3A", DecodedEvent::AltArrow(ArrowDirection::Up))]
    #[test_case("ls", DecodedEvent::Text("ls".into()))]
    fn test_classify(input: &str, expected: DecodedEvent) {
        assert_eq!(DecodedEvent::classify(input), expected);
    }

    #[test]
    fn test_alt_sequence() {
        assert_eq!(ArrowDirection::Left.alt_sequence(), "\u{1b}[1;3D");
    }

    #[test]
    fn test_keystroke_keeps_raw_encoding() {
        let it = Keystroke::new("\u{1b}OB");
        assert_eq!(it.event, DecodedEvent::Arrow(ArrowDirection::Down));
        assert_eq!(it.as_bytes(), b"\x1bOB");
    }
}
