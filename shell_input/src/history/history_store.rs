// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::collections::VecDeque;

/// Where the navigation cursor of a [`HistoryStore`] points.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum HistoryCursor {
    /// Index into [`HistoryStore::entries`], 0 is the oldest entry.
    At(usize),
    /// No entry selected, ie: a fresh empty line.
    #[default]
    PastEnd,
}

/// Capped, ordered, append-only-with-eviction log of previously entered lines.
///
/// Entries are stored oldest first (newest appended last). Navigation walks a cursor
/// over them: [`HistoryStore::navigate_up`] goes towards older entries and
/// [`HistoryStore::navigate_down`] towards newer ones, ending at
/// [`HistoryCursor::PastEnd`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryStore {
    entries: VecDeque<String>,
    /// [None] means unbounded.
    capacity: Option<usize>,
    cursor: HistoryCursor,
}

impl HistoryStore {
    #[must_use]
    pub fn new(capacity: Option<usize>) -> Self {
        Self {
            entries: VecDeque::default(),
            capacity,
            cursor: HistoryCursor::default(),
        }
    }

    /// Seed the store from an externally persisted history (oldest first). Adjacent
    /// duplicates and empty lines are dropped, and the capacity is enforced.
    #[must_use]
    pub fn with_entries(
        capacity: Option<usize>,
        entries: impl IntoIterator<Item = String>,
    ) -> Self {
        let mut it = Self::new(capacity);
        for entry in entries {
            it.append(&entry);
        }
        it
    }

    #[must_use]
    pub fn entries(&self) -> &VecDeque<String> { &self.entries }

    #[must_use]
    pub fn len(&self) -> usize { self.entries.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    #[must_use]
    pub fn capacity(&self) -> Option<usize> { self.capacity }

    #[must_use]
    pub fn cursor(&self) -> HistoryCursor { self.cursor }

    /// Newest entry first.
    pub fn iter_newest_first(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().rev().map(String::as_str)
    }

    /// Oldest entry first (append order).
    pub fn iter_oldest_first(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    /// Appends `line` unless it is empty or equal to the newest entry. Evicts the
    /// oldest entries while over capacity. The cursor always goes back to
    /// [`HistoryCursor::PastEnd`]. Returns `true` if the line was added.
    pub fn append(&mut self, line: &str) -> bool {
        // Reset offset to past the newest entry.
        self.cursor = HistoryCursor::PastEnd;

        // Don't add entry if last entry was same, or line was empty.
        if line.is_empty() || self.entries.back().is_some_and(|last| last == line) {
            return false;
        }

        self.entries.push_back(line.to_string());

        if let Some(capacity) = self.capacity {
            while self.entries.len() > capacity {
                // Remove oldest entry.
                self.entries.pop_front();
            }
        }

        true
    }

    /// Moves the cursor one entry towards the oldest and returns that entry. Returns
    /// [None] (cursor unchanged) if already at the oldest entry or the store is
    /// empty.
    pub fn navigate_up(&mut self) -> Option<&str> {
        let index = match self.cursor {
            HistoryCursor::PastEnd if !self.entries.is_empty() => self.entries.len() - 1,
            HistoryCursor::At(index) if index > 0 => index - 1,
            _ => return None,
        };
        self.cursor = HistoryCursor::At(index);
        self.entries.get(index).map(String::as_str)
    }

    /// Moves the cursor one entry towards the newest and returns that entry. Moving
    /// past the newest entry lands on [`HistoryCursor::PastEnd`] and returns `""` (the
    /// empty line). Further presses are absorbed and return [None].
    pub fn navigate_down(&mut self) -> Option<&str> {
        match self.cursor {
            HistoryCursor::PastEnd => None,
            HistoryCursor::At(index) if index + 1 < self.entries.len() => {
                self.cursor = HistoryCursor::At(index + 1);
                self.entries.get(index + 1).map(String::as_str)
            }
            HistoryCursor::At(_) => {
                self.cursor = HistoryCursor::PastEnd;
                Some("")
            }
        }
    }

    pub fn reset_cursor(&mut self) { self.cursor = HistoryCursor::PastEnd; }

    /// Drops all entries and resets the cursor.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.cursor = HistoryCursor::PastEnd;
    }
}
