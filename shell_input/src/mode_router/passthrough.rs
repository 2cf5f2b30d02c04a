// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{Collaborators, ModeRouter};
use crate::{DecodedEvent, Keystroke, RenderOp, RenderOps};

impl ModeRouter {
    /// Pager sub state: every keystroke goes to the process as is, control codes
    /// included.
    pub(super) fn forward_to_pager(
        &mut self,
        keystroke: &Keystroke,
        collaborators: &mut Collaborators<'_>,
    ) {
        match collaborators.process.as_deref_mut() {
            Some(process) => self.write_to_process(process, keystroke.as_bytes()),
            None => tracing::warn!(message = "Pager active without a process"),
        }
    }

    /// Full screen process: raw bytes are forwarded so it can bind its own keys (eg:
    /// `Ctrl+F` for page down). Only `Ctrl+D` and `Ctrl+C` keep their meaning here.
    pub(super) fn forward_to_interactive(
        &mut self,
        keystroke: &Keystroke,
        collaborators: &mut Collaborators<'_>,
        ops: &mut RenderOps,
    ) {
        match keystroke.event {
            DecodedEvent::EndOfTransmission => self.end_of_transmission(collaborators, ops),
            DecodedEvent::Interrupt => self.interrupt_running_command(collaborators, ops),
            _ => match collaborators.process.as_deref_mut() {
                Some(process) => self.write_to_process(process, keystroke.as_bytes()),
                None => tracing::warn!(message = "Interactive mode without a process"),
            },
        }
    }

    /// External engine: text is appended to the engine's input, with `CR` turned into
    /// `LF`. The engine is then probed, and if it quietly stopped, the end of the
    /// command is synthesized here.
    pub(super) fn forward_to_engine(
        &mut self,
        keystroke: &Keystroke,
        collaborators: &mut Collaborators<'_>,
        ops: &mut RenderOps,
    ) {
        let Some(engine) = collaborators.external_engine.as_deref_mut() else {
            tracing::warn!(message = "External engine mode without an engine, ending command");
            ops.extend(self.on_external_engine_ended());
            return;
        };

        if keystroke.event == DecodedEvent::Interrupt {
            // Killing the engine mid evaluation isn't safe, leave it to the engine.
            tracing::debug!(message = "Interrupt ignored while the external engine runs");
        } else {
            engine.append_input(&keystroke.raw.replace('\r', "\n"));
        }

        if !engine.is_running() {
            tracing::debug!(message = "External engine stopped without notice");
            ops.extend(self.on_external_engine_ended());
        }
    }

    /// `Ctrl+D` with a command running: close its input. If there is nothing left to
    /// close, the command probably ended without telling us, so re-prompt.
    pub(super) fn end_of_transmission(
        &mut self,
        collaborators: &mut Collaborators<'_>,
        ops: &mut RenderOps,
    ) {
        let closed = match collaborators.process.as_deref_mut() {
            Some(process) if process.is_input_open() => match process.close_input() {
                Ok(()) => true,
                Err(error) => {
                    tracing::warn!(message = "Could not close process input", error = %error);
                    false
                }
            },
            _ => false,
        };

        if !closed {
            ops.push(RenderOp::Reprompt);
        }
    }

    /// `Ctrl+C` with a command running: one shot termination request, never waits.
    pub(super) fn interrupt_running_command(
        &mut self,
        collaborators: &mut Collaborators<'_>,
        ops: &mut RenderOps,
    ) {
        if self.autocomplete.is_active() {
            // The overlay is closed first, the process never sees this interrupt.
            self.cancel_autocomplete(ops);
            return;
        }
        if self.external_engine_active {
            tracing::debug!(message = "Interrupt ignored while the external engine runs");
            return;
        }
        match collaborators.process.as_deref_mut() {
            Some(process) => process.request_termination(),
            None => tracing::warn!(message = "Interrupt with no process to terminate"),
        }
    }
}
