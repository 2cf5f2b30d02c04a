// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{COMMAND_HISTORY_SIZE_MAX, DEFAULT_WIDE_GLYPH_THRESHOLD, OverlayColor,
            ShellInputResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Tunables for one [`crate::ModeRouter`]. Every field has a default, so a JSON file
/// only needs to name the fields it changes.
///
/// ```
/// use r3bl_shell_input::EditorConfig;
///
/// let config = EditorConfig::try_from_json_str(r#"{ "command_history_capacity": 10 }"#)
///     .unwrap();
/// assert_eq!(config.command_history_capacity, 10);
/// assert_eq!(config.session_history_capacity, None);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    pub command_history_capacity: usize,
    /// [None] means unbounded, the session history is usually persisted elsewhere.
    pub session_history_capacity: Option<usize>,
    /// A glyph is wide (2 columns) when it is wider than this many reference
    /// characters.
    pub wide_glyph_threshold: f64,
    pub overlay_color_dark_background: OverlayColor,
    pub overlay_color_light_background: OverlayColor,
    pub non_interactive_prompts: Vec<PromptOverride>,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            command_history_capacity: COMMAND_HISTORY_SIZE_MAX,
            session_history_capacity: None,
            wide_glyph_threshold: DEFAULT_WIDE_GLYPH_THRESHOLD,
            overlay_color_dark_background: OverlayColor::Yellow,
            overlay_color_light_background: OverlayColor::Green,
            non_interactive_prompts: vec![PromptOverride::default()],
        }
    }
}

impl EditorConfig {
    /// # Errors
    ///
    /// Returns [`crate::ShellInputError::Config`] if `json` isn't a valid config.
    pub fn try_from_json_str(json: &str) -> ShellInputResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// # Errors
    ///
    /// Returns [`crate::ShellInputError::IO`] if the file can't be read, or
    /// [`crate::ShellInputError::Config`] if it can't be parsed.
    pub fn try_load(path: impl AsRef<Path>) -> ShellInputResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::try_from_json_str(&json)?;
        // % is Display, ? is Debug.
        tracing::debug!(message = "Loaded editor config", path = ?path, config = ?config);
        Ok(config)
    }

    /// Should a full screen `command` be fed whole lines instead of raw keystrokes,
    /// given the last prompt line it printed?
    #[must_use]
    pub fn prompt_forces_line_mode(&self, command: &str, last_prompt_line: &str) -> bool {
        self.non_interactive_prompts
            .iter()
            .any(|it| it.matches(command, last_prompt_line))
    }
}

/// Interactive programs that sometimes show a line oriented sub prompt (eg: the
/// `help> ` prompt of `ipython`). While such a prompt is showing, lines are edited
/// here and sent whole.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptOverride {
    pub command_prefixes: Vec<String>,
    pub prompt_suffixes: Vec<String>,
}

impl Default for PromptOverride {
    fn default() -> Self {
        Self {
            command_prefixes: vec!["ipython".into(), "isympy".into()],
            prompt_suffixes: vec![
                "help> ".into(),
                "Hit Return for more, or q (and Return) to quit: ".into(),
                "Do you really want to exit ([y]/n)? ".into(),
            ],
        }
    }
}

impl PromptOverride {
    #[must_use]
    pub fn matches(&self, command: &str, last_prompt_line: &str) -> bool {
        self.command_prefixes
            .iter()
            .any(|prefix| command.starts_with(prefix.as_str()))
            && self
                .prompt_suffixes
                .iter()
                .any(|suffix| last_prompt_line.ends_with(suffix.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ShellInputError;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = EditorConfig::default();
        assert_eq!(config.command_history_capacity, 100);
        assert_eq!(config.overlay_color_dark_background, OverlayColor::Yellow);
        assert_eq!(config.overlay_color_light_background, OverlayColor::Green);
        assert!(config.prompt_forces_line_mode("ipython3", "help> "));
        assert!(!config.prompt_forces_line_mode("ipython3", "In [1]: "));
        assert!(!config.prompt_forces_line_mode("vim", "help> "));
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = EditorConfig::try_from_json_str(
            r#"{
                "session_history_capacity": 500,
                "overlay_color_light_background": "blue",
                "non_interactive_prompts": []
            }"#,
        )
        .unwrap();

        assert_eq!(config.session_history_capacity, Some(500));
        assert_eq!(config.overlay_color_light_background, OverlayColor::Blue);
        assert_eq!(config.command_history_capacity, 100);
        assert!(!config.prompt_forces_line_mode("ipython", "help> "));
    }

    #[test]
    fn test_invalid_json() {
        let it = EditorConfig::try_from_json_str("{ nope");
        assert!(matches!(it, Err(ShellInputError::Config(_))));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "wide_glyph_threshold": 1.8 }}"#).unwrap();

        let config = EditorConfig::try_load(file.path()).unwrap();
        assert!((config.wide_glyph_threshold - 1.8).abs() < f64::EPSILON);

        let missing = EditorConfig::try_load(file.path().with_extension("missing"));
        assert!(matches!(missing, Err(ShellInputError::IO(_))));
    }
}
