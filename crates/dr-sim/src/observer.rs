//! Session observer trait for progress reporting and data collection.

use dr_core::{Frame, GameState};
use dr_field::Progress;

use crate::TickReport;

/// Callbacks invoked by [`Session::step_frame`][crate::Session::step_frame]
/// at key points of each frame.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example: victory logger
///
/// ```rust,ignore
/// struct VictoryLogger;
///
/// impl SessionObserver for VictoryLogger {
///     fn on_transition(&mut self, frame: Frame, _from: GameState, to: GameState) {
///         if to == GameState::Victory {
///             println!("cleared the field at {frame}");
///         }
///     }
/// }
/// ```
pub trait SessionObserver {
    /// Called at the very start of each frame, before intents are drained.
    fn on_frame_start(&mut self, _frame: Frame) {}

    /// Called after the frame has been ticked and rendered.
    fn on_frame_end(&mut self, _frame: Frame, _report: &TickReport) {}

    /// Called for every state change applied since the previous frame, in
    /// the order they happened.
    fn on_transition(&mut self, _frame: Frame, _from: GameState, _to: GameState) {}

    /// Called every `config.snapshot_interval_frames` frames.
    fn on_snapshot(&mut self, _frame: Frame, _state: GameState, _progress: Progress) {}

    /// Called once when the scheduler stops (after the victory frame).
    fn on_session_end(&mut self, _frame: Frame, _progress: Progress) {}
}

/// A [`SessionObserver`] that does nothing.
pub struct NoopObserver;

impl SessionObserver for NoopObserver {}
