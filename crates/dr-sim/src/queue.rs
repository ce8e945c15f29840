//! Pending intents awaiting the next frame.

use std::collections::VecDeque;

use dr_input::Intent;

/// FIFO of intents submitted between frames.
///
/// Input handlers push; the scheduler drains the whole queue at the start of
/// each frame, so every intent is fully applied before the tick reads any
/// session state.
#[derive(Debug, Clone, Default)]
pub struct IntentQueue {
    pending: VecDeque<Intent>,
}

impl IntentQueue {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn push(&mut self, intent: Intent) {
        self.pending.push_back(intent);
    }

    #[inline]
    pub fn pop(&mut self) -> Option<Intent> {
        self.pending.pop_front()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
