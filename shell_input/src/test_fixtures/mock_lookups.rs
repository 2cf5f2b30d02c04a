// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::ShellLookups;
use std::collections::HashMap;

/// [`ShellLookups`] backed by plain collections, built with the `with_*` methods.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MockLookups {
    /// `(alias, command)` pairs.
    pub aliases: Vec<(String, String)>,
    pub commands: Vec<String>,
    pub options: HashMap<String, String>,
    pub env: Vec<(String, String)>,
}

impl MockLookups {
    /// Aliases that resolve to themselves, only their names matter.
    #[must_use]
    pub fn with_aliases(mut self, names: &[&str]) -> Self {
        for name in names {
            self = self.with_alias(name, name);
        }
        self
    }

    #[must_use]
    pub fn with_alias(mut self, name: &str, command: &str) -> Self {
        self.aliases.push((name.to_string(), command.to_string()));
        self
    }

    #[must_use]
    pub fn with_commands(mut self, names: &[&str]) -> Self {
        self.commands.extend(names.iter().map(|it| (*it).to_string()));
        self
    }

    #[must_use]
    pub fn with_options(mut self, command: &str, options: &str) -> Self {
        self.options.insert(command.to_string(), options.to_string());
        self
    }

    #[must_use]
    pub fn with_env(mut self, name: &str, value: &str) -> Self {
        self.env.push((name.to_string(), value.to_string()));
        self
    }
}

impl ShellLookups for MockLookups {
    fn alias_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.aliases.iter().map(|(name, _)| name.clone()).collect();
        names.sort();
        names
    }

    fn command_names(&self) -> Vec<String> {
        let mut names = self.commands.clone();
        names.sort();
        names
    }

    fn environment(&self) -> Vec<(String, String)> { self.env.clone() }

    fn option_characters(&self, command: &str) -> Option<String> {
        self.options.get(command).cloned()
    }

    fn resolve_alias(&self, name: &str) -> String {
        self.aliases
            .iter()
            .find_map(|(alias, command)| (alias == name).then(|| command.clone()))
            .unwrap_or_else(|| name.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_lookups() {
        let lookups = MockLookups::default()
            .with_alias("ll", "ls")
            .with_aliases(&["gst"])
            .with_commands(&["ls", "cat"])
            .with_env("HOME", "/home/me");

        assert_eq!(lookups.alias_names(), vec!["gst", "ll"]);
        assert_eq!(lookups.command_names(), vec!["cat", "ls"]);
        assert_eq!(lookups.resolve_alias("ll"), "ls");
        assert_eq!(lookups.resolve_alias("cat"), "cat");
        assert_eq!(lookups.environment_variable("HOME"), Some("/home/me".to_string()));
        assert_eq!(lookups.environment_variable("NOPE"), None);
        assert_eq!(lookups.option_characters("ls"), None);
    }
}
