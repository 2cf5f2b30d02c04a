// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{GlyphMetrics, ShellInputResult};
use std::fmt::{Display, Formatter};

/// Opaque identifier of one terminal session, used to point the process plumbing at
/// the right session before writing to it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionId(pub String);

impl Display for SessionId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result { write!(f, "{}", self.0) }
}

impl From<&str> for SessionId {
    fn from(value: &str) -> Self { Self(value.to_string()) }
}

/// The running child process, as seen from the line editor.
///
/// Writes are non-blocking hand-offs: implementations must queue and return, never
/// wait for the process to consume input.
pub trait ProcessStream {
    /// # Errors
    ///
    /// Returns [`crate::ShellInputError::InputClosed`] if the input stream was already
    /// closed, or an I/O error from the underlying pipe.
    fn write_input(&mut self, bytes: &[u8]) -> ShellInputResult<()>;

    /// Signals that no more input will follow (`Ctrl+D`).
    ///
    /// # Errors
    ///
    /// Returns an error if the stream is already closed or closing it fails.
    fn close_input(&mut self) -> ShellInputResult<()>;

    fn is_input_open(&self) -> bool;

    /// Is the process a full screen interactive program (eg: `vim`) that wants raw
    /// keystrokes?
    fn is_interactive(&self) -> bool;

    /// Is a paging sub state (eg: `less` spawned by the process) active?
    fn is_pager_active(&self) -> bool;

    /// One shot termination request. Must not block until the process exits.
    fn request_termination(&mut self);

    /// The session the process plumbing currently points at. [None] if the current
    /// context isn't a session that can be switched back to.
    fn current_session(&self) -> Option<SessionId>;

    fn switch_session(&mut self, session: &SessionId);
}

/// An embedded engine (eg: a scripting runtime) that consumes raw text while it runs.
pub trait ExternalEngine {
    /// Append text to the engine's input accumulator.
    fn append_input(&mut self, text: &str);

    /// Liveness probe, used to detect an engine that finished without telling us.
    fn is_running(&self) -> bool;
}

/// Read only, synchronous lookups that feed the autocomplete engine.
pub trait ShellLookups {
    /// Alias names, in their natural (alphabetical) order.
    fn alias_names(&self) -> Vec<String>;

    /// Known command names, alphabetical.
    fn command_names(&self) -> Vec<String>;

    /// `(name, value)` pairs of the environment.
    fn environment(&self) -> Vec<(String, String)>;

    fn environment_variable(&self, name: &str) -> Option<String> {
        self.environment()
            .into_iter()
            .find_map(|(key, value)| (key == name).then_some(value))
    }

    /// getopt style option string accepted by `command` (eg: `"alh:"`). [None] if the
    /// command is unknown.
    fn option_characters(&self, command: &str) -> Option<String>;

    /// Resolve `name` through alias substitution. Returns `name` unchanged if it is not
    /// an alias.
    fn resolve_alias(&self, name: &str) -> String;
}

/// Receives a trimmed command line when `Enter` is pressed while idle.
pub trait SubmissionSink {
    fn submit(&mut self, line: &str);
}

/// What the line editor needs to know about the display it renders to.
pub trait RenderSurface: GlyphMetrics {
    fn foreground_brightness(&self) -> f64;

    fn background_brightness(&self) -> f64;

    /// The last prompt line printed by the running program, if known.
    fn last_prompt_line(&self) -> Option<String> { None }

    /// Light text on a dark background.
    fn is_dark_mode(&self) -> bool {
        self.foreground_brightness() > self.background_brightness()
    }
}
