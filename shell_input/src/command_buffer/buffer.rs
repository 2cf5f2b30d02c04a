// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use unicode_segmentation::UnicodeSegmentation;

/// The line currently being typed, split at the cursor.
///
/// `before + after` is always the full line, and the cursor sits between the two
/// halves. All motion is in whole grapheme clusters, so a cursor move never lands in
/// the middle of a multi-byte character or an emoji sequence.
///
/// Mutations return the grapheme they moved or removed (if any), so the caller can
/// work out how many display columns to move or erase via
/// [`crate::display_columns`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandBuffer {
    before: String,
    after: String,
}

impl CommandBuffer {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    #[must_use]
    pub fn before(&self) -> &str { &self.before }

    #[must_use]
    pub fn after(&self) -> &str { &self.after }

    /// The whole line, `before + after`.
    #[must_use]
    pub fn line(&self) -> String { format!("{}{}", self.before, self.after) }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.before.is_empty() && self.after.is_empty() }

    pub fn insert_before_cursor(&mut self, text: &str) { self.before.push_str(text); }

    /// Removes the grapheme just before the cursor. No-op if the cursor is at the
    /// start of the line.
    pub fn delete_one_before_cursor(&mut self) -> Option<String> {
        let (start, grapheme) = self.before.grapheme_indices(true).next_back()?;
        let grapheme = grapheme.to_string();
        self.before.truncate(start);
        Some(grapheme)
    }

    /// Moves the last grapheme of `before` to the front of `after`.
    pub fn move_cursor_left(&mut self) -> Option<String> {
        let grapheme = self.delete_one_before_cursor()?;
        self.after.insert_str(0, &grapheme);
        Some(grapheme)
    }

    /// Moves the first grapheme of `after` to the end of `before`.
    pub fn move_cursor_right(&mut self) -> Option<String> {
        let grapheme = self.after.graphemes(true).next()?.to_string();
        self.after.replace_range(..grapheme.len(), "");
        self.before.push_str(&grapheme);
        Some(grapheme)
    }

    /// Used by history recall: the cursor ends up at the end of `text`.
    pub fn replace_whole_line(&mut self, text: &str) {
        self.before.clear();
        self.before.push_str(text);
        self.after.clear();
    }

    /// Used on submission. Returns `(before, after)` and leaves the buffer empty.
    pub fn take_and_clear(&mut self) -> (String, String) {
        (
            std::mem::take(&mut self.before),
            std::mem::take(&mut self.after),
        )
    }

    pub fn clear(&mut self) {
        self.before.clear();
        self.after.clear();
    }
}
