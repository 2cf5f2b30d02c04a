// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::io;
use thiserror::Error;

/// Errors that can occur at the seams between the line editing core and its
/// collaborators.
///
/// None of these are fatal. The [`crate::ModeRouter`] absorbs all of them (logging a
/// diagnostic), so the worst user visible effect is "no suggestion" or "character not
/// accepted". They exist as values so that collaborator implementations and tests can
/// report what went wrong.
#[derive(Debug, Error)]
pub enum ShellInputError {
    /// The incoming chunk is not valid UTF-8. The chunk is dropped.
    #[error("input chunk is not valid UTF-8: {bytes:?}")]
    InvalidUtf8 { bytes: Vec<u8> },

    /// The running process has already closed its input stream (eg: after `Ctrl+D`).
    #[error("process input stream is closed")]
    InputClosed,

    /// There is no running process to deliver input to.
    #[error("no process is attached to this session")]
    NoProcess,

    /// An internal I/O error occurred.
    #[error(transparent)]
    IO(#[from] io::Error),

    /// The configuration could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

/// Type alias for results produced at collaborator seams.
pub type ShellInputResult<T> = Result<T, ShellInputError>;
