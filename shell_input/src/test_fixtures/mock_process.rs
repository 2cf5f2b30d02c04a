// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{ProcessStream, SessionId, ShellInputError, ShellInputResult};

/// In memory [`ProcessStream`] that records everything the router does to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockProcess {
    pub written: Vec<u8>,
    pub input_open: bool,
    pub interactive: bool,
    pub pager_active: bool,
    pub termination_requests: usize,
    pub current: Option<SessionId>,
    pub session_switches: Vec<SessionId>,
}

impl Default for MockProcess {
    fn default() -> Self {
        Self {
            written: vec![],
            input_open: true,
            interactive: false,
            pager_active: false,
            termination_requests: 0,
            current: Some(SessionId::from("default")),
            session_switches: vec![],
        }
    }
}

impl MockProcess {
    #[must_use]
    pub fn interactive() -> Self {
        Self {
            interactive: true,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_pager(mut self) -> Self {
        self.pager_active = true;
        self
    }

    #[must_use]
    pub fn with_current_session(mut self, session: Option<SessionId>) -> Self {
        self.current = session;
        self
    }

    /// Everything written so far, lossily decoded.
    #[must_use]
    pub fn written_as_string(&self) -> String {
        String::from_utf8_lossy(&self.written).into_owned()
    }
}

impl ProcessStream for MockProcess {
    fn write_input(&mut self, bytes: &[u8]) -> ShellInputResult<()> {
        if !self.input_open {
            return Err(ShellInputError::InputClosed);
        }
        self.written.extend_from_slice(bytes);
        Ok(())
    }

    fn close_input(&mut self) -> ShellInputResult<()> {
        if !self.input_open {
            return Err(ShellInputError::InputClosed);
        }
        self.input_open = false;
        Ok(())
    }

    fn is_input_open(&self) -> bool { self.input_open }

    fn is_interactive(&self) -> bool { self.interactive }

    fn is_pager_active(&self) -> bool { self.pager_active }

    fn request_termination(&mut self) { self.termination_requests += 1; }

    fn current_session(&self) -> Option<SessionId> { self.current.clone() }

    fn switch_session(&mut self, session: &SessionId) {
        self.session_switches.push(session.clone());
        self.current = Some(session.clone());
    }
}
