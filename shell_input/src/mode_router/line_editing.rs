// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{Collaborators, ExecutionMode, ModeRouter};
use crate::{ArrowDirection, DecodedEvent, RenderOp, RenderOps, RenderSurface,
            display_columns, display_columns_of_str, push_insert_with_tail};

impl ModeRouter {
    /// Idle and buffered modes: the line is edited here, with history and
    /// autocomplete.
    pub(super) fn edit_line(
        &mut self,
        event: DecodedEvent,
        mode: ExecutionMode,
        collaborators: &mut Collaborators<'_>,
        ops: &mut RenderOps,
    ) {
        match event {
            DecodedEvent::EndOfTransmission => match mode {
                ExecutionMode::Idle => {
                    tracing::trace!(message = "Ctrl+D at the prompt, nothing to close");
                }
                _ => self.end_of_transmission(collaborators, ops),
            },
            DecodedEvent::Interrupt => match mode {
                ExecutionMode::Idle => self.interrupt_at_prompt(ops),
                _ => self.interrupt_running_command(collaborators, ops),
            },
            DecodedEvent::DeleteBackward => self.delete_backward(collaborators.surface, ops),
            DecodedEvent::Tab => self.tab(mode, collaborators, ops),
            DecodedEvent::CarriageReturn => self.carriage_return(mode, collaborators, ops),
            DecodedEvent::Escape => self.cancel_autocomplete(ops),
            DecodedEvent::Arrow(ArrowDirection::Up) => {
                self.up_or_down(ArrowDirection::Up, mode, collaborators.surface, ops);
            }
            DecodedEvent::Arrow(ArrowDirection::Down) => {
                self.up_or_down(ArrowDirection::Down, mode, collaborators.surface, ops);
            }
            DecodedEvent::Arrow(ArrowDirection::Left) => {
                self.move_left(collaborators.surface, ops);
            }
            DecodedEvent::Arrow(ArrowDirection::Right) => {
                self.move_right(collaborators.surface, ops);
            }
            DecodedEvent::AltArrow(direction) => {
                tracing::debug!(message = "Alt+arrow has no meaning while editing", direction = ?direction);
            }
            DecodedEvent::Text(text) => self.insert_text(&text, collaborators.surface, ops),
        }
    }

    fn interrupt_at_prompt(&mut self, ops: &mut RenderOps) {
        if self.autocomplete.is_active() {
            self.cancel_autocomplete(ops);
            return;
        }
        self.buffer.clear();
        self.session_history.reset_cursor();
        ops.push(RenderOp::Reprompt);
    }

    /// Backspace. With the overlay showing it only cancels autocomplete.
    fn delete_backward(&mut self, surface: &dyn RenderSurface, ops: &mut RenderOps) {
        if self.autocomplete.is_active() {
            self.cancel_autocomplete(ops);
            return;
        }
        let Some(grapheme) = self.buffer.delete_one_before_cursor() else {
            return;
        };
        let columns = display_columns(surface, &grapheme, self.config.wide_glyph_threshold);
        ops.push(RenderOp::MoveCursorLeft(columns));
        ops.push(RenderOp::DeleteCharacters(columns));
    }

    fn move_left(&mut self, surface: &dyn RenderSurface, ops: &mut RenderOps) {
        if self.autocomplete.is_active() {
            self.cancel_autocomplete(ops);
            return;
        }
        if let Some(grapheme) = self.buffer.move_cursor_left() {
            let columns = display_columns(surface, &grapheme, self.config.wide_glyph_threshold);
            ops.push(RenderOp::MoveCursorLeft(columns));
        }
    }

    fn move_right(&mut self, surface: &dyn RenderSurface, ops: &mut RenderOps) {
        if self.autocomplete.is_active() {
            self.accept_next_word(surface, ops);
            return;
        }
        match self.buffer.move_cursor_right() {
            Some(grapheme) => {
                let columns =
                    display_columns(surface, &grapheme, self.config.wide_glyph_threshold);
                ops.push(RenderOp::MoveCursorRight(columns));
            }
            None => tracing::trace!(message = "Cannot move right, at end of line"),
        }
    }

    /// Cycle autocomplete candidates, or walk the history that belongs to `mode`.
    fn up_or_down(
        &mut self,
        direction: ArrowDirection,
        mode: ExecutionMode,
        surface: &dyn RenderSurface,
        ops: &mut RenderOps,
    ) {
        if self.autocomplete.is_active() {
            match direction {
                ArrowDirection::Up => self.autocomplete.select_previous(),
                _ => self.autocomplete.select_next(),
            }
            self.push_current_overlay(surface, ops);
            return;
        }

        let store = match mode {
            ExecutionMode::Idle => &mut self.session_history,
            _ => &mut self.command_history.store,
        };
        let recalled = match direction {
            ArrowDirection::Up => store.navigate_up(),
            _ => store.navigate_down(),
        }
        .map(str::to_string);

        match recalled {
            Some(line) => self.replace_line(&line, surface, ops),
            None => tracing::trace!(message = "History boundary", mode = %mode),
        }
    }

    /// Swap the whole line for `line`, cursor at its end.
    fn replace_line(&mut self, line: &str, surface: &dyn RenderSurface, ops: &mut RenderOps) {
        let columns =
            display_columns_of_str(surface, self.buffer.before(), self.config.wide_glyph_threshold);
        ops.push(RenderOp::MoveCursorLeft(columns));
        ops.push(RenderOp::EraseToEndOfLine);
        if !line.is_empty() {
            ops.push(RenderOp::InsertText(line.to_string()));
        }
        self.buffer.replace_whole_line(line);
    }

    fn insert_text(&mut self, text: &str, surface: &dyn RenderSurface, ops: &mut RenderOps) {
        self.buffer.insert_before_cursor(text);
        if self.autocomplete.is_active() {
            ops.push(RenderOp::InsertText(text.to_string()));
            self.narrow_autocomplete(text, surface, ops);
        } else {
            push_insert_with_tail(ops, text, self.buffer.after());
        }
    }

    fn tab(
        &mut self,
        mode: ExecutionMode,
        collaborators: &Collaborators<'_>,
        ops: &mut RenderOps,
    ) {
        if self.autocomplete.is_active() {
            self.accept_autocomplete(ops);
            return;
        }
        if let Some(scope) = mode.completion_scope() {
            self.start_autocomplete(scope, collaborators, ops);
        }
    }

    /// Enter. Accepts any showing candidate, then submits the trimmed line: to the
    /// [`crate::SubmissionSink`] at the prompt, or to the process input otherwise.
    fn carriage_return(
        &mut self,
        mode: ExecutionMode,
        collaborators: &mut Collaborators<'_>,
        ops: &mut RenderOps,
    ) {
        if self.autocomplete.is_active() {
            self.accept_autocomplete(ops);
        }

        let (before, after) = self.buffer.take_and_clear();
        let line = format!("{before}{after}");
        // Only horizontal blanks, a pasted line break stays part of the line.
        let line = line.trim_matches([' ', '\t']);
        ops.push(RenderOp::NewLine);

        match mode {
            ExecutionMode::Idle => {
                self.session_history.append(line);
                tracing::debug!(message = "Submitting command line", line = %line);
                collaborators.sink.submit(line);
            }
            _ => self.submit_to_process(line, collaborators),
        }
    }

    /// The line (plus `LF`) goes to the process, and into the command local history
    /// of the running command.
    fn submit_to_process(&mut self, line: &str, collaborators: &mut Collaborators<'_>) {
        let Some(process) = collaborators.process.as_deref_mut() else {
            tracing::warn!(message = "No process to submit the line to", line = %line);
            return;
        };
        if !process.is_input_open() {
            tracing::warn!(message = "Process input already closed, dropping line", line = %line);
            return;
        }

        let command = self.running_command.clone().unwrap_or_default();
        self.command_history.append_for(&command, line);
        self.write_to_process(process, format!("{line}\n").as_bytes());
    }
}
