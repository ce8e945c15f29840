//! `SessionOutputObserver<W>` — bridges `SessionObserver` to an `OutputWriter`.

use dr_core::{Frame, GameState};
use dr_field::Progress;
use dr_sim::SessionObserver;

use crate::row::{ProgressRow, TransitionRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SessionObserver`] that records progress snapshots and state
/// transitions through any [`OutputWriter`].
///
/// Errors from the writer are stored internally because observer hooks have
/// no return value.  After the run, call [`finish`][Self::finish] and check
/// [`take_error`][Self::take_error].
pub struct SessionOutputObserver<W: OutputWriter> {
    writer:     W,
    /// Last state reported, so the final row carries the right state.
    state:      GameState,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SessionOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            state:      GameState::Idle,
            last_error: None,
        }
    }

    /// Flush the writer.  Errors are stored like any other write error.
    pub fn finish(&mut self) {
        let result = self.writer.finish();
        self.store_err(result);
    }

    /// Take the stored write error (if any).
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn write_progress(&mut self, frame: Frame, state: GameState, progress: Progress) {
        let row = ProgressRow {
            frame:    frame.0,
            state,
            consumed: progress.consumed as u64,
            initial:  progress.initial as u64,
            percent:  progress.percent(),
        };
        let result = self.writer.write_progress(&row);
        self.store_err(result);
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            tracing::warn!(error = %e, "telemetry write failed");
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SessionObserver for SessionOutputObserver<W> {
    fn on_transition(&mut self, frame: Frame, from: GameState, to: GameState) {
        self.state = to;
        let row = TransitionRow { frame: frame.0, from, to };
        let result = self.writer.write_transition(&row);
        self.store_err(result);
    }

    fn on_snapshot(&mut self, frame: Frame, state: GameState, progress: Progress) {
        self.state = state;
        self.write_progress(frame, state, progress);
    }

    fn on_session_end(&mut self, frame: Frame, progress: Progress) {
        self.write_progress(frame, self.state, progress);
    }
}
