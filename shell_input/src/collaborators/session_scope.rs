// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::contracts::{ProcessStream, SessionId};
use std::{fmt::{Debug, Formatter},
          ops::{Deref, DerefMut}};

/// Points the process plumbing at one session for as long as this guard lives, and
/// switches back to the previously current session when it is dropped (on every exit
/// path, including early returns and `?`).
///
/// If the previous context was not a restorable session (see
/// [`ProcessStream::current_session`]) nothing is restored, so a transient side
/// channel context can never become the permanent write target.
pub struct SessionScope<'a> {
    process: &'a mut dyn ProcessStream,
    saved: Option<SessionId>,
}

impl<'a> SessionScope<'a> {
    pub fn enter(process: &'a mut dyn ProcessStream, session: &SessionId) -> Self {
        let saved = process.current_session();
        process.switch_session(session);
        Self { process, saved }
    }
}

impl<'a> Deref for SessionScope<'a> {
    type Target = dyn ProcessStream + 'a;

    fn deref(&self) -> &Self::Target { &*self.process }
}

impl DerefMut for SessionScope<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target { &mut *self.process }
}

impl Drop for SessionScope<'_> {
    fn drop(&mut self) {
        match self.saved.take() {
            Some(saved) => self.process.switch_session(&saved),
            None => tracing::trace!(message = "Previous context not restorable, leaving it"),
        }
    }
}

impl Debug for SessionScope<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionScope")
            .field("saved", &self.saved)
            .finish_non_exhaustive()
    }
}
