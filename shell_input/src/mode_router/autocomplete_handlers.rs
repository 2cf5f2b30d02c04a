// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{Collaborators, ModeRouter};
use crate::{CandidateSources, CompletionScope, NarrowOutcome, RenderOp, RenderOps,
            RenderSurface, generate_candidates, push_insert_with_tail, push_overlay,
            push_overlay_erase};

impl ModeRouter {
    /// `Tab` with no session: generate candidates for the text before the cursor,
    /// insert their common prefix, and show the first candidate if more than one is
    /// left.
    pub(super) fn start_autocomplete(
        &mut self,
        scope: CompletionScope,
        collaborators: &Collaborators<'_>,
        ops: &mut RenderOps,
    ) {
        let typed = self.buffer.before().to_string();
        let generated = generate_candidates(
            &typed,
            scope,
            CandidateSources {
                session_history: &self.session_history,
                command_history: &self.command_history.store,
                lookups: collaborators.lookups,
            },
        );

        let common_prefix = self.autocomplete.start(&typed, generated);
        self.buffer.insert_before_cursor(&common_prefix);

        if self.autocomplete.is_active() {
            if !common_prefix.is_empty() {
                ops.push(RenderOp::InsertText(common_prefix));
            }
            self.push_current_overlay(collaborators.surface, ops);
        } else if !common_prefix.is_empty() {
            push_insert_with_tail(ops, &common_prefix, self.buffer.after());
        }
    }

    /// Insert the whole current candidate, in the normal color, over the overlay.
    pub(super) fn accept_autocomplete(&mut self, ops: &mut RenderOps) {
        if let Some(candidate) = self.autocomplete.accept() {
            self.buffer.insert_before_cursor(&candidate);
            push_insert_with_tail(ops, &candidate, self.buffer.after());
        }
    }

    /// Right arrow with the overlay showing: accept up to the next word boundary, then
    /// narrow with what was accepted.
    pub(super) fn accept_next_word(&mut self, surface: &dyn RenderSurface, ops: &mut RenderOps) {
        let Some(word) = self.autocomplete.next_word_of_current() else {
            return;
        };
        self.buffer.insert_before_cursor(&word);
        if !word.is_empty() {
            ops.push(RenderOp::InsertText(word.clone()));
        }
        self.narrow_autocomplete(&word, surface, ops);
    }

    /// `text` was already inserted into the buffer (and drawn).
    pub(super) fn narrow_autocomplete(
        &mut self,
        text: &str,
        surface: &dyn RenderSurface,
        ops: &mut RenderOps,
    ) {
        match self.autocomplete.narrow(text) {
            NarrowOutcome::Continue => self.push_current_overlay(surface, ops),
            NarrowOutcome::AutoAccepted(remainder) => {
                ops.extend([RenderOp::EraseDisplayAfterCursor, RenderOp::EraseToEndOfLine]);
                self.buffer.insert_before_cursor(&remainder);
                push_insert_with_tail(ops, &remainder, self.buffer.after());
            }
            NarrowOutcome::Cancelled => self.erase_overlay(ops),
            NarrowOutcome::NotActive => {}
        }
    }

    /// Drop the session and erase the overlay. No-op without a session.
    pub(super) fn cancel_autocomplete(&mut self, ops: &mut RenderOps) {
        if self.autocomplete.cancel() {
            self.erase_overlay(ops);
        }
    }

    pub(super) fn erase_overlay(&self, ops: &mut RenderOps) {
        push_overlay_erase(ops, self.buffer.after());
    }

    pub(super) fn push_current_overlay(&self, surface: &dyn RenderSurface, ops: &mut RenderOps) {
        if let Some(candidate) = self.autocomplete.current() {
            push_overlay(ops, candidate, self.buffer.after(), self.overlay_color(surface));
        }
    }
}
