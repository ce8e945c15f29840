//! Bounded log of recent voice activity.

use std::collections::VecDeque;

use crate::Intent;

/// What a history line records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryKind {
    /// A transcript, with the intent it produced (if any).
    Heard(Option<Intent>),
    /// A recognition source error.
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub text: String,
    pub kind: HistoryKind,
}

/// Newest-first list of the last [`CommandHistory::CAPACITY`] entries.
#[derive(Debug, Clone, Default)]
pub struct CommandHistory {
    entries: VecDeque<HistoryEntry>,
}

impl CommandHistory {
    pub const CAPACITY: usize = 10;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_heard(&mut self, text: impl Into<String>, intent: Option<Intent>) {
        self.push(HistoryEntry { text: text.into(), kind: HistoryKind::Heard(intent) });
    }

    pub fn record_error(&mut self, message: impl Into<String>) {
        self.push(HistoryEntry { text: message.into(), kind: HistoryKind::Error });
    }

    fn push(&mut self, entry: HistoryEntry) {
        self.entries.push_front(entry);
        self.entries.truncate(Self::CAPACITY);
    }

    /// Entries, newest first.
    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.front()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
