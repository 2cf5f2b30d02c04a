// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{HistoryStore, ShellLookups};

/// Which sources the autocomplete engine draws from. Derived from the
/// [`crate::ExecutionMode`] when `Tab` is pressed.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CompletionScope {
    /// A process is consuming buffered lines: only its command-local history.
    CommandLocal,
    /// At the shell prompt: session history, aliases, commands, flags, variables.
    Idle,
}

/// Output of [`generate_candidates`]. Candidates are suffixes to append after the
/// typed text, deduplicated, in priority order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratedCandidates {
    pub candidates: Vec<String>,
    /// Which candidate is shown first.
    pub initial_position: usize,
    /// Directory formed by substituting `$NAME/rest`, for a path listing source.
    pub pending_directory: Option<String>,
}

/// Everything candidate generation reads. All borrowed, nothing is mutated.
#[allow(missing_debug_implementations)]
#[derive(Clone, Copy)]
pub struct CandidateSources<'a> {
    pub session_history: &'a HistoryStore,
    pub command_history: &'a HistoryStore,
    pub lookups: &'a dyn ShellLookups,
}

fn push_unique(candidates: &mut Vec<String>, suggestion: &str) {
    if !candidates.iter().any(|it| it == suggestion) {
        candidates.push(suggestion.to_string());
    }
}

/// Push the remainder of every `source` that starts with `typed`.
fn push_matching<'s>(
    candidates: &mut Vec<String>,
    typed: &str,
    sources: impl IntoIterator<Item = &'s str>,
) {
    for source in sources {
        if let Some(rest) = source.strip_prefix(typed) {
            push_unique(candidates, rest);
        }
    }
}

/// Builds the raw (not yet narrowed) candidate list for `typed`, the text before the
/// cursor.
///
/// - [`CompletionScope::CommandLocal`]: command-local history entries in append
///   order, starting at the most recent one.
/// - [`CompletionScope::Idle`]: session history newest first, then
///   - one word typed: aliases, then command names;
///   - more words: based on the last word, option flags (`-`), environment variable
///     names (`$`), or nothing (`~`, anything else).
///
/// History entries and names are matched on `typed` as a prefix, and only the
/// remainder is kept.
#[must_use]
pub fn generate_candidates(
    typed: &str,
    scope: CompletionScope,
    sources: CandidateSources<'_>,
) -> GeneratedCandidates {
    let mut it = GeneratedCandidates::default();

    match scope {
        CompletionScope::CommandLocal => {
            push_matching(
                &mut it.candidates,
                typed,
                sources.command_history.iter_oldest_first(),
            );
            // The last line entered is the first suggestion.
            it.initial_position = it.candidates.len().saturating_sub(1);
        }
        CompletionScope::Idle => {
            push_matching(
                &mut it.candidates,
                typed,
                sources.session_history.iter_newest_first(),
            );

            let words: Vec<&str> = typed.split(' ').collect();
            if let [_single_word] = words.as_slice() {
                let aliases = sources.lookups.alias_names();
                push_matching(&mut it.candidates, typed, aliases.iter().map(String::as_str));
                let commands = sources.lookups.command_names();
                push_matching(&mut it.candidates, typed, commands.iter().map(String::as_str));
            } else {
                let command = sources.lookups.resolve_alias(words[0]);
                let last_word = words.last().copied().unwrap_or_default();
                match last_word.chars().next() {
                    Some('-') => {
                        push_option_flags(&mut it.candidates, typed, last_word, &command, sources);
                    }
                    Some('$') => {
                        it.pending_directory =
                            push_environment_variables(&mut it.candidates, last_word, sources);
                    }
                    // `~` is reserved for home directory expansion, plain arguments
                    // have no source yet.
                    _ => {}
                }
            }
        }
    }

    tracing::debug!(
        message = "Generated autocomplete candidates",
        typed = %typed,
        scope = ?scope,
        count = it.candidates.len()
    );

    it
}

/// Single character flags accepted by `command`, minus the ones already in the last
/// word or anywhere in the line as `-x`. An unknown command yields no flags.
fn push_option_flags(
    candidates: &mut Vec<String>,
    typed: &str,
    last_word: &str,
    command: &str,
    sources: CandidateSources<'_>,
) {
    let Some(options) = sources.lookups.option_characters(command) else {
        tracing::debug!(message = "No option list for command", command = %command);
        return;
    };

    for option in options.chars().filter(|it| *it != ':') {
        if last_word.contains(option) || typed.contains(&format!("-{option}")) {
            continue;
        }
        push_unique(candidates, &option.to_string());
    }
}

/// For `$PRE` suggests the rest of every variable name starting with `PRE`. For
/// `$NAME/rest` returns the substituted directory instead.
fn push_environment_variables(
    candidates: &mut Vec<String>,
    last_word: &str,
    sources: CandidateSources<'_>,
) -> Option<String> {
    let reference = last_word.strip_prefix('$')?;

    if let Some((name, rest)) = reference.split_once('/') {
        let value = sources.lookups.environment_variable(name)?;
        return Some(format!("{value}/{rest}"));
    }

    for (name, _value) in sources.lookups.environment() {
        if let Some(rest) = name.strip_prefix(reference) {
            push_unique(candidates, rest);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::MockLookups;
    use pretty_assertions::assert_eq;

    fn history(entries: &[&str]) -> HistoryStore {
        HistoryStore::with_entries(None, entries.iter().map(|it| (*it).to_string()))
    }

    #[test]
    fn test_idle_order_history_then_aliases_then_commands() {
        let session = history(&["grep foo", "git status"]);
        let command = history(&[]);
        let lookups = MockLookups::default()
            .with_aliases(&["gst"])
            .with_commands(&["git", "grep", "gzip"]);
        let sources = CandidateSources {
            session_history: &session,
            command_history: &command,
            lookups: &lookups,
        };

        let it = generate_candidates("g", CompletionScope::Idle, sources);

        assert_eq!(
            it.candidates,
            vec!["it status", "rep foo", "st", "it", "rep", "zip"]
        );
        assert_eq!(it.initial_position, 0);
    }

    #[test]
    fn test_dedup_across_sources() {
        let session = history(&["cat"]);
        let command = history(&[]);
        let lookups = MockLookups::default().with_commands(&["cat", "cd"]);
        let sources = CandidateSources {
            session_history: &session,
            command_history: &command,
            lookups: &lookups,
        };

        let it = generate_candidates("c", CompletionScope::Idle, sources);
        assert_eq!(it.candidates, vec!["at", "d"]);
    }

    #[test]
    fn test_command_local_scope() {
        let session = history(&["ls"]);
        let command = history(&["print(1)", "import os", "print(2)"]);
        let lookups = MockLookups::default().with_commands(&["pwd"]);
        let sources = CandidateSources {
            session_history: &session,
            command_history: &command,
            lookups: &lookups,
        };

        let it = generate_candidates("pr", CompletionScope::CommandLocal, sources);
        assert_eq!(it.candidates, vec!["int(1)", "int(2)"]);
        assert_eq!(it.initial_position, 1);
    }

    #[test]
    fn test_option_flags_exclude_already_used() {
        let session = history(&[]);
        let command = history(&[]);
        let lookups = MockLookups::default()
            .with_alias("ll", "ls")
            .with_options("ls", "alh:R");
        let sources = CandidateSources {
            session_history: &session,
            command_history: &command,
            lookups: &lookups,
        };

        let it = generate_candidates("ll -R -a", CompletionScope::Idle, sources);
        assert_eq!(it.candidates, vec!["l", "h"]);
    }

    #[test]
    fn test_unknown_command_yields_no_flags() {
        let session = history(&[]);
        let command = history(&[]);
        let lookups = MockLookups::default();
        let sources = CandidateSources {
            session_history: &session,
            command_history: &command,
            lookups: &lookups,
        };

        let it = generate_candidates("frobnicate -", CompletionScope::Idle, sources);
        assert!(it.candidates.is_empty());
    }

    #[test]
    fn test_environment_variable_names() {
        let session = history(&[]);
        let command = history(&[]);
        let lookups = MockLookups::default()
            .with_env("HOME", "/home/me")
            .with_env("HOSTNAME", "box")
            .with_env("PATH", "/bin");
        let sources = CandidateSources {
            session_history: &session,
            command_history: &command,
            lookups: &lookups,
        };

        let it = generate_candidates("echo $HO", CompletionScope::Idle, sources);
        assert_eq!(it.candidates, vec!["ME", "STNAME"]);
        assert_eq!(it.pending_directory, None);
    }

    #[test]
    fn test_environment_variable_path_is_substituted() {
        let session = history(&[]);
        let command = history(&[]);
        let lookups = MockLookups::default().with_env("HOME", "/home/me");
        let sources = CandidateSources {
            session_history: &session,
            command_history: &command,
            lookups: &lookups,
        };

        let it = generate_candidates("cd $HOME/Doc", CompletionScope::Idle, sources);
        assert!(it.candidates.is_empty());
        assert_eq!(it.pending_directory, Some("/home/me/Doc".to_string()));
    }

    #[test]
    fn test_tilde_and_plain_arguments_yield_nothing() {
        let session = history(&[]);
        let command = history(&[]);
        let lookups = MockLookups::default().with_commands(&["cat"]);
        let sources = CandidateSources {
            session_history: &session,
            command_history: &command,
            lookups: &lookups,
        };

        assert!(generate_candidates("cd ~/", CompletionScope::Idle, sources).candidates.is_empty());
        assert!(generate_candidates("cat c", CompletionScope::Idle, sources).candidates.is_empty());
        assert!(generate_candidates("cat ", CompletionScope::Idle, sources).candidates.is_empty());
    }
}
