// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::history_store::HistoryStore;

/// Default capacity of the [`CommandLocalHistory`].
pub const COMMAND_HISTORY_SIZE_MAX: usize = 100;

/// History of lines typed into one logical foreground command (eg: the lines typed
/// into a running `python` REPL), as opposed to the session history of lines typed at
/// the shell prompt.
///
/// The store is scoped to the identity of the command that owns it. When a line is
/// submitted to a different command than the previous one, the store is cleared
/// first. See [`CommandLocalHistory::scope_to`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLocalHistory {
    pub store: HistoryStore,
    owner: Option<String>,
}

impl Default for CommandLocalHistory {
    fn default() -> Self { Self::new(COMMAND_HISTORY_SIZE_MAX) }
}

impl CommandLocalHistory {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            store: HistoryStore::new(Some(capacity)),
            owner: None,
        }
    }

    /// The command this history currently belongs to.
    #[must_use]
    pub fn owner(&self) -> Option<&str> { self.owner.as_deref() }

    /// Makes `command` the owner of this history. If it is a different command than
    /// the current owner, all entries are dropped and the cursor is reset. Returns
    /// `true` if a reset happened.
    pub fn scope_to(&mut self, command: &str) -> bool {
        if self.owner.as_deref() == Some(command) {
            return false;
        }
        tracing::debug!(
            message = "Command identity changed, resetting command history",
            previous = ?self.owner,
            current = %command
        );
        self.owner = Some(command.to_string());
        self.store.clear();
        true
    }

    /// [`CommandLocalHistory::scope_to`] followed by [`HistoryStore::append`].
    pub fn append_for(&mut self, command: &str, line: &str) -> bool {
        self.scope_to(command);
        self.store.append(line)
    }
}
