// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{candidate_sources::GeneratedCandidates,
            prefix_ops::{find_next_word, longest_common_prefix}};

/// Result of [`AutocompleteSession::narrow`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NarrowOutcome {
    /// Two or more candidates remain, keep showing the overlay.
    Continue,
    /// Exactly one candidate remained. Its remainder (possibly empty) must be inserted
    /// and the session is over.
    AutoAccepted(String),
    /// No candidate matches, the session is over.
    Cancelled,
    /// There was no active session to narrow.
    NotActive,
}

/// Candidates for one `Tab` completion episode.
///
/// Each candidate is the suffix that remains after `typed_prefix`. While the session
/// is active there are always at least two candidates (one candidate is auto-accepted,
/// zero ends the session) and `position` indexes one of them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AutocompleteSession {
    typed_prefix: String,
    candidates: Vec<String>,
    position: usize,
    active: bool,
    pending_directory: Option<String>,
}

impl AutocompleteSession {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    #[must_use]
    pub fn is_active(&self) -> bool { self.active }

    #[must_use]
    pub fn typed_prefix(&self) -> &str { &self.typed_prefix }

    #[must_use]
    pub fn candidates(&self) -> &[String] { &self.candidates }

    #[must_use]
    pub fn position(&self) -> usize { self.position }

    /// Directory recorded for a `$NAME/rest` completion request, if any.
    #[must_use]
    pub fn pending_directory(&self) -> Option<&str> { self.pending_directory.as_deref() }

    /// The candidate at the current position. [None] if inactive.
    #[must_use]
    pub fn current(&self) -> Option<&str> {
        if !self.active {
            return None;
        }
        self.candidates.get(self.position).map(String::as_str)
    }

    /// Starts a session from freshly generated candidates for `typed`.
    ///
    /// The longest common prefix of the candidates is stripped from every one of them
    /// and returned, so the caller can insert it into the buffer right away. The
    /// session only becomes active if more than one candidate remains.
    pub fn start(&mut self, typed: &str, generated: GeneratedCandidates) -> String {
        let GeneratedCandidates {
            candidates,
            initial_position,
            pending_directory,
        } = generated;

        let common_prefix = longest_common_prefix(&candidates).to_string();
        self.candidates = candidates
            .into_iter()
            .map(|it| it[common_prefix.len()..].to_string())
            .collect();
        self.typed_prefix = format!("{typed}{common_prefix}");
        self.pending_directory = pending_directory;

        if self.candidates.len() > 1 {
            self.active = true;
            self.position = initial_position.min(self.candidates.len() - 1);
        } else {
            self.active = false;
            self.candidates.clear();
            self.position = 0;
        }

        tracing::debug!(
            message = "Autocomplete session started",
            common_prefix = %common_prefix,
            active = self.active,
            count = self.candidates.len()
        );

        common_prefix
    }

    /// Up arrow: previous candidate, wrapping around.
    pub fn select_previous(&mut self) {
        if !self.active || self.candidates.is_empty() {
            return;
        }
        self.position = match self.position {
            0 => self.candidates.len() - 1,
            it => it - 1,
        };
    }

    /// Down arrow: next candidate, wrapping around.
    pub fn select_next(&mut self) {
        if !self.active || self.candidates.is_empty() {
            return;
        }
        self.position = (self.position + 1) % self.candidates.len();
    }

    /// Takes the current candidate and ends the session.
    pub fn accept(&mut self) -> Option<String> {
        let accepted = self.current()?.to_string();
        self.reset();
        Some(accepted)
    }

    /// The part of the current candidate up to its next word boundary (partial
    /// accept with the right arrow). Feed it to [`AutocompleteSession::narrow`]
    /// after inserting it.
    #[must_use]
    pub fn next_word_of_current(&self) -> Option<String> {
        self.current().map(|it| find_next_word(it).to_string())
    }

    /// `text` was just typed after the typed prefix. Keeps only the candidates that
    /// start with `text`, then strips it from them. The current candidate keeps its
    /// position if it survives, otherwise the position goes back to 0.
    pub fn narrow(&mut self, text: &str) -> NarrowOutcome {
        if !self.active {
            return NarrowOutcome::NotActive;
        }

        let current = self.candidates.get(self.position).cloned();
        self.candidates.retain(|it| it.starts_with(text));

        match self.candidates.len() {
            0 => {
                self.reset();
                NarrowOutcome::Cancelled
            }
            1 => {
                let remainder = self.candidates[0][text.len()..].to_string();
                self.reset();
                NarrowOutcome::AutoAccepted(remainder)
            }
            _ => {
                self.position = current
                    .and_then(|current| self.candidates.iter().position(|it| *it == current))
                    .unwrap_or(0);
                for it in &mut self.candidates {
                    it.replace_range(..text.len(), "");
                }
                self.typed_prefix.push_str(text);
                NarrowOutcome::Continue
            }
        }
    }

    /// Ends the session, dropping all candidates. Returns `false` (and does nothing)
    /// if the session was not active.
    pub fn cancel(&mut self) -> bool {
        if !self.active {
            return false;
        }
        self.reset();
        true
    }

    fn reset(&mut self) {
        self.active = false;
        self.candidates.clear();
        self.position = 0;
        self.typed_prefix.clear();
        self.pending_directory = None;
    }
}
