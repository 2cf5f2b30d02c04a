// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::CompletionScope;
use strum_macros::Display;

/// Where the next keystroke goes. Exactly one mode is active at a time, and it is
/// resolved fresh for every keystroke from the router state and the collaborator
/// signals, see [`crate::ModeRouter::mode`].
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Display)]
pub enum ExecutionMode {
    /// At the shell prompt. Lines are edited here and submitted to the
    /// [`crate::SubmissionSink`].
    #[default]
    Idle,
    /// A line oriented process is running. Lines are edited here and written to its
    /// input when `Enter` is pressed.
    BufferedAwaitingProcess,
    /// A full screen process is running. Raw keystrokes are forwarded as they arrive.
    InteractivePassthrough,
    /// A pager spawned by the process owns the terminal. Every keystroke is forwarded.
    PagerActive,
    /// An embedded engine consumes raw text.
    ExternalEnginePassthrough,
}

impl ExecutionMode {
    /// Is the line edited locally (buffer, history, autocomplete)?
    #[must_use]
    pub fn is_line_editing(self) -> bool {
        matches!(
            self,
            ExecutionMode::Idle | ExecutionMode::BufferedAwaitingProcess
        )
    }

    /// Which candidate sources `Tab` draws from. [None] in passthrough modes.
    #[must_use]
    pub fn completion_scope(self) -> Option<CompletionScope> {
        match self {
            ExecutionMode::Idle => Some(CompletionScope::Idle),
            ExecutionMode::BufferedAwaitingProcess => Some(CompletionScope::CommandLocal),
            ExecutionMode::InteractivePassthrough
            | ExecutionMode::PagerActive
            | ExecutionMode::ExternalEnginePassthrough => None,
        }
    }
}

/// Everything [`ExecutionMode`] resolution depends on.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct ModeSignals {
    pub command_running: bool,
    pub external_engine_active: bool,
    pub pager_active: bool,
    pub process_interactive: bool,
    /// The running program shows a line oriented sub prompt, see
    /// [`crate::PromptOverride`].
    pub line_prompt_override: bool,
}

impl ModeSignals {
    /// Priority: pager, then external engine, then interactive (unless a line prompt
    /// override applies), then buffered.
    #[must_use]
    pub fn resolve(self) -> ExecutionMode {
        if !self.command_running {
            ExecutionMode::Idle
        } else if self.pager_active {
            ExecutionMode::PagerActive
        } else if self.external_engine_active {
            ExecutionMode::ExternalEnginePassthrough
        } else if self.process_interactive && !self.line_prompt_override {
            ExecutionMode::InteractivePassthrough
        } else {
            ExecutionMode::BufferedAwaitingProcess
        }
    }
}
