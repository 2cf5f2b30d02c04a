// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{ExternalEngine, GlyphMetrics, RenderSurface, SubmissionSink,
            UnicodeWidthMetrics};

/// [`SubmissionSink`] that keeps every submitted line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingSink {
    pub submitted: Vec<String>,
}

impl SubmissionSink for RecordingSink {
    fn submit(&mut self, line: &str) { self.submitted.push(line.to_string()); }
}

/// [`RenderSurface`] for a terminal grid. Defaults to light text on a dark background.
#[derive(Debug, Clone, PartialEq)]
pub struct MockSurface {
    pub foreground_brightness: f64,
    pub background_brightness: f64,
    pub last_prompt_line: Option<String>,
}

impl Default for MockSurface {
    fn default() -> Self {
        Self {
            foreground_brightness: 0.9,
            background_brightness: 0.1,
            last_prompt_line: None,
        }
    }
}

impl MockSurface {
    #[must_use]
    pub fn light() -> Self {
        Self {
            foreground_brightness: 0.1,
            background_brightness: 0.9,
            last_prompt_line: None,
        }
    }

    #[must_use]
    pub fn with_last_prompt_line(mut self, line: &str) -> Self {
        self.last_prompt_line = Some(line.to_string());
        self
    }
}

impl GlyphMetrics for MockSurface {
    fn glyph_width(&self, grapheme: &str) -> f64 { UnicodeWidthMetrics.glyph_width(grapheme) }

    fn reference_width(&self) -> f64 { UnicodeWidthMetrics.reference_width() }
}

impl RenderSurface for MockSurface {
    fn foreground_brightness(&self) -> f64 { self.foreground_brightness }

    fn background_brightness(&self) -> f64 { self.background_brightness }

    fn last_prompt_line(&self) -> Option<String> { self.last_prompt_line.clone() }
}

/// [`ExternalEngine`] that accumulates input. Set `running` to `false` to simulate an
/// engine that stopped without notifying anyone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockEngine {
    pub appended: String,
    pub running: bool,
}

impl Default for MockEngine {
    fn default() -> Self {
        Self {
            appended: String::new(),
            running: true,
        }
    }
}

impl ExternalEngine for MockEngine {
    fn append_input(&mut self, text: &str) { self.appended.push_str(text); }

    fn is_running(&self) -> bool { self.running }
}
