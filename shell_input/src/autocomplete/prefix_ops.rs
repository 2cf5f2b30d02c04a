// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! String algorithms used by the autocomplete engine.
//!
//! ## Word boundary rules
//!
//! [`find_next_word`] uses regex style `\b` boundaries: a boundary sits between a
//! word character (alphanumeric or `_`) and a non word character, and at the start /
//! end of the string next to a word character. Separators that are skipped over are a
//! single space or a single `/`.
//!
//! ```text
//! "t status"  → "t"
//! " status"   → " status"
//! "/usr/bin"  → "/usr"
//! "--all"     → "--"
//! ```

use unicode_segmentation::UnicodeSegmentation;

/// Longest string that is a prefix of every item, computed on grapheme cluster
/// boundaries. Empty input yields `""`.
#[must_use]
pub fn longest_common_prefix<S: AsRef<str>>(items: &[S]) -> &str {
    let Some(first) = items.first() else {
        return "";
    };

    let mut prefix = first.as_ref();
    for item in items {
        while !item.as_ref().starts_with(prefix) {
            let Some((start, _)) = prefix.grapheme_indices(true).next_back() else {
                return "";
            };
            prefix = &prefix[..start];
        }
        if prefix.is_empty() {
            return "";
        }
    }
    prefix
}

#[must_use]
pub fn is_word_char(ch: char) -> bool { ch.is_alphanumeric() || ch == '_' }

/// Byte offsets of every `\b` boundary in `text`.
fn word_boundaries(text: &str) -> impl Iterator<Item = usize> + '_ {
    let mut prev_is_word = false;
    let inner = text.char_indices().filter_map(move |(index, ch)| {
        let is_word = is_word_char(ch);
        let is_boundary = is_word != prev_is_word;
        prev_is_word = is_word;
        is_boundary.then_some(index)
    });
    let end = text
        .chars()
        .next_back()
        .is_some_and(is_word_char)
        .then_some(text.len());
    inner.chain(end)
}

/// Returns the leading part of `candidate` up to and including its first "word",
/// where leading single space / single slash pieces are carried along. If there's no
/// word boundary at all, the whole string is returned.
#[must_use]
pub fn find_next_word(candidate: &str) -> &str {
    let mut offset = 0;
    for boundary in word_boundaries(candidate) {
        let piece = &candidate[offset..boundary];
        if !matches!(piece, "" | " " | "/") {
            return &candidate[..boundary];
        }
        offset = boundary;
    }
    candidate
}
