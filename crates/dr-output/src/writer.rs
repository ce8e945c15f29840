//! The `OutputWriter` trait implemented by backend writers.

use crate::{OutputResult, ProgressRow, TransitionRow};

/// Trait implemented by telemetry writers.
///
/// Errors are returned to the caller.  The observer stores them for
/// [`SessionOutputObserver::take_error`][crate::SessionOutputObserver::take_error]
/// because observer hooks cannot fail.
pub trait OutputWriter {
    /// Write one progress snapshot.
    fn write_progress(&mut self, row: &ProgressRow) -> OutputResult<()>;

    /// Write one state transition.
    fn write_transition(&mut self, row: &TransitionRow) -> OutputResult<()>;

    /// Flush all underlying file handles.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
