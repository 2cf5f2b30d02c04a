// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{OverlayColor, RenderOp};
use crossterm::{QueueableCommand, cursor,
                style::{Color, Print, SetForegroundColor},
                terminal::{Clear, ClearType}};
use std::io::{self, Write};

/// Applies [`RenderOp`]s to a terminal (or anything else that implements [Write]) as
/// ANSI escape sequences, using crossterm.
///
/// This is the only place where render instructions turn into bytes, so the router
/// and everything it drives can be tested by comparing [`RenderOp`] lists, and this
/// can be tested against a [`crate::test_fixtures::StdoutMock`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderOpInterpreter {
    pub prompt: String,
    /// How many times the running command's editable region was marked. Nothing is
    /// printed for a mark.
    pub prompt_end_marks: usize,
}

impl RenderOpInterpreter {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            prompt_end_marks: 0,
        }
    }

    /// Queue every op, then flush once.
    ///
    /// # Errors
    ///
    /// Returns the first I/O error reported by `term`.
    pub fn apply(&mut self, ops: &[RenderOp], term: &mut dyn Write) -> io::Result<()> {
        for op in ops {
            self.queue_op(op, term)?;
        }
        term.flush()
    }

    fn queue_op(&mut self, op: &RenderOp, term: &mut dyn Write) -> io::Result<()> {
        match op {
            RenderOp::InsertText(text) => {
                term.queue(Print(text))?;
            }
            RenderOp::EraseToEndOfLine => {
                term.queue(Clear(ClearType::UntilNewLine))?;
            }
            RenderOp::EraseDisplayAfterCursor => {
                term.queue(Clear(ClearType::FromCursorDown))?;
            }
            // CSI 0 <x> means 1 to a terminal, so zero counts must be skipped.
            RenderOp::DeleteCharacters(0)
            | RenderOp::MoveCursorLeft(0)
            | RenderOp::MoveCursorRight(0)
            | RenderOp::MoveCursorUp(0)
            | RenderOp::MoveCursorDown(0) => {}
            RenderOp::DeleteCharacters(count) => {
                // crossterm has no command for DCH.
                write!(term, "\x1b[{count}P")?;
            }
            RenderOp::MoveCursorLeft(count) => {
                term.queue(cursor::MoveLeft(*count))?;
            }
            RenderOp::MoveCursorRight(count) => {
                term.queue(cursor::MoveRight(*count))?;
            }
            RenderOp::MoveCursorUp(count) => {
                term.queue(cursor::MoveUp(*count))?;
            }
            RenderOp::MoveCursorDown(count) => {
                term.queue(cursor::MoveDown(*count))?;
            }
            RenderOp::SaveCursor => {
                term.queue(cursor::SavePosition)?;
            }
            RenderOp::RestoreCursor => {
                term.queue(cursor::RestorePosition)?;
            }
            RenderOp::SetForegroundColor(color) => {
                term.queue(SetForegroundColor(Color::from(*color)))?;
            }
            RenderOp::ResetForegroundColor => {
                term.queue(SetForegroundColor(Color::Reset))?;
            }
            RenderOp::NewLine => {
                term.queue(Print("\r\n"))?;
            }
            RenderOp::Reprompt => {
                term.queue(Print("\r\n"))?;
                term.queue(Print(&self.prompt))?;
            }
            RenderOp::MarkPromptEnd => {
                self.prompt_end_marks += 1;
            }
        }

        Ok(())
    }
}

/// Pick the overlay color for the current render surface brightness.
#[must_use]
pub fn pick_overlay_color(
    is_dark_mode: bool,
    dark_background: OverlayColor,
    light_background: OverlayColor,
) -> OverlayColor {
    if is_dark_mode {
        dark_background
    } else {
        light_background
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::StdoutMock;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_plain_text_and_prompt() {
        let mut stdout_mock = StdoutMock::default();
        let mut interpreter = RenderOpInterpreter::new("$ ");

        interpreter
            .apply(
                &[
                    RenderOp::InsertText("ls".into()),
                    RenderOp::Reprompt,
                    RenderOp::InsertText("pwd".into()),
                ],
                &mut stdout_mock,
            )
            .unwrap();

        assert_eq!(stdout_mock.get_copy_of_buffer_as_string(), "ls\r\n$ pwd");
    }

    #[test]
    fn test_cursor_and_delete_sequences() {
        let mut stdout_mock = StdoutMock::default();
        let mut interpreter = RenderOpInterpreter::default();

        interpreter
            .apply(
                &[
                    RenderOp::MoveCursorLeft(2),
                    RenderOp::DeleteCharacters(2),
                    RenderOp::MoveCursorRight(0),
                    RenderOp::EraseToEndOfLine,
                ],
                &mut stdout_mock,
            )
            .unwrap();

        assert_eq!(
            stdout_mock.get_copy_of_buffer_as_string(),
            "\x1b[2D\x1b[2P\x1b[K"
        );
    }

    #[test]
    fn test_overlay_strips_to_text() {
        let mut stdout_mock = StdoutMock::default();
        let mut interpreter = RenderOpInterpreter::default();

        interpreter
            .apply(
                &[
                    RenderOp::InsertText("gi".into()),
                    RenderOp::SaveCursor,
                    RenderOp::SetForegroundColor(OverlayColor::Yellow),
                    RenderOp::InsertText("t".into()),
                    RenderOp::ResetForegroundColor,
                    RenderOp::RestoreCursor,
                    RenderOp::MarkPromptEnd,
                ],
                &mut stdout_mock,
            )
            .unwrap();

        assert_eq!(stdout_mock.get_copy_of_buffer_as_string_strip_ansi(), "git");
        assert!(stdout_mock.get_copy_of_buffer_as_string().contains("\x1b[39m"));
        assert_eq!(interpreter.prompt_end_marks, 1);
    }

    #[test]
    fn test_pick_overlay_color() {
        assert_eq!(
            pick_overlay_color(true, OverlayColor::Yellow, OverlayColor::Green),
            OverlayColor::Yellow
        );
        assert_eq!(
            pick_overlay_color(false, OverlayColor::Yellow, OverlayColor::Green),
            OverlayColor::Green
        );
    }
}
