// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{Collaborators, ExecutionMode, ModeSignals};
use crate::{AutocompleteSession, CommandBuffer, CommandLocalHistory, ControlModifier,
            EditorConfig, HistoryStore, InputDecoder, OverlayColor, ProcessStream,
            RenderOp, RenderOps, RenderSurface, SessionId, SessionScope,
            pick_overlay_color};

/// The per session editor state: decoder, command buffer, both history stores, and the
/// autocomplete session, plus what is known about the running command.
///
/// All input goes through [`ModeRouter::handle_bytes`], one chunk at a time. Each call
/// fully processes its keystroke before returning the [`RenderOps`] it produced, so
/// there is never a half applied edit. Collaborator signals (command started / ended)
/// arrive through the `on_*` methods.
///
/// Every session owns its own router. Nothing here is shared between sessions.
#[derive(Debug)]
pub struct ModeRouter {
    pub(super) session_id: SessionId,
    pub(super) config: EditorConfig,
    pub(super) decoder: InputDecoder,
    pub(super) buffer: CommandBuffer,
    pub(super) session_history: HistoryStore,
    pub(super) command_history: CommandLocalHistory,
    pub(super) autocomplete: AutocompleteSession,
    pub(super) running_command: Option<String>,
    pub(super) external_engine_active: bool,
    pub(super) last_mode: ExecutionMode,
}

impl ModeRouter {
    #[must_use]
    pub fn new(session_id: SessionId, config: EditorConfig) -> Self {
        Self {
            session_id,
            decoder: InputDecoder::new(),
            buffer: CommandBuffer::new(),
            session_history: HistoryStore::new(config.session_history_capacity),
            command_history: CommandLocalHistory::new(config.command_history_capacity),
            autocomplete: AutocompleteSession::new(),
            running_command: None,
            external_engine_active: false,
            last_mode: ExecutionMode::Idle,
            config,
        }
    }

    /// Seed the session history, eg: from a history file loaded at startup.
    #[must_use]
    pub fn with_session_history(mut self, entries: impl IntoIterator<Item = String>) -> Self {
        self.session_history =
            HistoryStore::with_entries(self.config.session_history_capacity, entries);
        self
    }

    #[must_use]
    pub fn session_id(&self) -> &SessionId { &self.session_id }

    #[must_use]
    pub fn config(&self) -> &EditorConfig { &self.config }

    #[must_use]
    pub fn buffer(&self) -> &CommandBuffer { &self.buffer }

    /// Lines submitted at the prompt. Persisting them is up to the caller.
    #[must_use]
    pub fn session_history(&self) -> &HistoryStore { &self.session_history }

    #[must_use]
    pub fn command_history(&self) -> &CommandLocalHistory { &self.command_history }

    #[must_use]
    pub fn autocomplete(&self) -> &AutocompleteSession { &self.autocomplete }

    #[must_use]
    pub fn running_command(&self) -> Option<&str> { self.running_command.as_deref() }

    /// The mode the last keystroke was handled in.
    #[must_use]
    pub fn last_mode(&self) -> ExecutionMode { self.last_mode }

    /// The mode the next keystroke would be handled in.
    #[must_use]
    pub fn mode(&self, collaborators: &Collaborators<'_>) -> ExecutionMode {
        let process = collaborators.process.as_deref();
        let line_prompt_override = match (self.running_command.as_deref(), process) {
            (Some(command), Some(process)) if process.is_interactive() => collaborators
                .surface
                .last_prompt_line()
                .is_some_and(|line| self.config.prompt_forces_line_mode(command, &line)),
            _ => false,
        };

        ModeSignals {
            command_running: self.running_command.is_some(),
            external_engine_active: self.external_engine_active,
            pager_active: process.is_some_and(|it| it.is_pager_active()),
            process_interactive: process.is_some_and(|it| it.is_interactive()),
            line_prompt_override,
        }
        .resolve()
    }

    /// Arm the virtual control key for the next keystroke.
    pub fn arm_control_modifier(&mut self) {
        self.decoder.set_control_modifier(ControlModifier::Armed);
    }

    #[must_use]
    pub fn control_modifier(&self) -> ControlModifier { self.decoder.control_modifier() }

    /// Decode one chunk from the input device and act on it.
    ///
    /// Never fails: undecodable chunks and collaborator errors are logged and absorbed.
    pub fn handle_bytes(&mut self, chunk: &[u8], collaborators: &mut Collaborators<'_>) -> RenderOps {
        let mut ops = RenderOps::new();

        let keystroke = match self.decoder.decode(chunk) {
            Ok(keystroke) => keystroke,
            Err(error) => {
                // % is Display, ? is Debug.
                tracing::warn!(message = "Dropping input chunk", error = %error);
                return ops;
            }
        };

        let mode = self.mode(collaborators);
        self.last_mode = mode;
        tracing::trace!(message = "Handling keystroke", mode = %mode, event = ?keystroke.event);

        match mode {
            ExecutionMode::PagerActive => self.forward_to_pager(&keystroke, collaborators),
            ExecutionMode::ExternalEnginePassthrough => {
                self.forward_to_engine(&keystroke, collaborators, &mut ops);
            }
            ExecutionMode::InteractivePassthrough => {
                self.forward_to_interactive(&keystroke, collaborators, &mut ops);
            }
            ExecutionMode::Idle | ExecutionMode::BufferedAwaitingProcess => {
                if mode == ExecutionMode::BufferedAwaitingProcess && self.buffer.is_empty() {
                    ops.push(RenderOp::MarkPromptEnd);
                }
                self.edit_line(keystroke.event, mode, collaborators, &mut ops);
            }
        }

        ops
    }

    /// A command started running in this session. The command local history is scoped
    /// to it, and any line being edited is dropped.
    pub fn on_command_started(&mut self, command: &str) {
        tracing::debug!(message = "Command started", command = %command);
        self.running_command = Some(command.to_string());
        self.autocomplete.cancel();
        self.buffer.clear();
        self.command_history.scope_to(command);
        self.command_history.store.reset_cursor();
    }

    /// The running command ended. Returns the ops for a fresh prompt.
    pub fn on_command_ended(&mut self) -> RenderOps {
        tracing::debug!(message = "Command ended", command = ?self.running_command);
        self.running_command = None;
        self.external_engine_active = false;
        self.autocomplete.cancel();
        self.buffer.clear();
        self.command_history.store.reset_cursor();
        self.session_history.reset_cursor();

        let mut ops = RenderOps::new();
        ops.push(RenderOp::Reprompt);
        ops
    }

    /// Same as [`ModeRouter::on_command_started`] for a command that runs inside an
    /// [`crate::ExternalEngine`].
    pub fn on_external_engine_started(&mut self, command: &str) {
        self.on_command_started(command);
        self.external_engine_active = true;
    }

    pub fn on_external_engine_ended(&mut self) -> RenderOps { self.on_command_ended() }

    pub(super) fn overlay_color(&self, surface: &dyn RenderSurface) -> OverlayColor {
        pick_overlay_color(
            surface.is_dark_mode(),
            self.config.overlay_color_dark_background,
            self.config.overlay_color_light_background,
        )
    }

    /// Write to the process with this session made current for the duration of the
    /// write. Failures are logged, the process may have exited between keystrokes.
    pub(super) fn write_to_process(&self, process: &mut dyn ProcessStream, bytes: &[u8]) {
        let mut scope = SessionScope::enter(process, &self.session_id);
        if let Err(error) = scope.write_input(bytes) {
            tracing::warn!(
                message = "Could not write to process input",
                session = %self.session_id,
                error = %error
            );
        }
    }
}
