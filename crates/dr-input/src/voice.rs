//! Voice recognition supervision.
//!
//! The host owns the actual recognizer and exposes it through
//! [`SpeechSource`].  [`VoiceControl`] tracks whether the user wants voice
//! on, restarts the source whenever it ends on its own while still wanted,
//! and keeps the [`CommandHistory`] shown next to the play area.

use tracing::{debug, info, warn};

use crate::phrases::normalize_transcript;
use crate::{CommandHistory, InputContext, InputResult, Intent};

/// A continuous speech recognizer.
///
/// Recognizers stop by themselves after silence; the host reports that via
/// [`VoiceControl::on_source_ended`].
pub trait SpeechSource {
    /// Begin listening.
    fn start(&mut self) -> InputResult<()>;

    /// Stop listening.  Must not fail.
    fn stop(&mut self);
}

/// Voice on/off state plus the recognizer it drives.
///
/// Built with [`VoiceControl::unsupported`] when the host has no recognizer;
/// every operation is then a no-op and voice can never be enabled.
#[derive(Debug)]
pub struct VoiceControl<S> {
    source:  Option<S>,
    active:  bool,
    history: CommandHistory,
}

impl<S: SpeechSource> VoiceControl<S> {
    pub fn new(source: S) -> Self {
        Self { source: Some(source), active: false, history: CommandHistory::new() }
    }

    pub fn unsupported() -> Self {
        Self { source: None, active: false, history: CommandHistory::new() }
    }

    pub fn is_supported(&self) -> bool {
        self.source.is_some()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn history(&self) -> &CommandHistory {
        &self.history
    }

    pub fn source(&self) -> Option<&S> {
        self.source.as_ref()
    }

    /// Flip voice on or off.  Returns the new active flag.
    pub fn toggle(&mut self) -> bool {
        if self.active { self.disable() } else { self.enable() }
        self.active
    }

    /// Start listening.  A source that fails to start leaves voice off and
    /// the failure in the history.
    pub fn enable(&mut self) {
        let Some(source) = self.source.as_mut() else {
            debug!("voice requested but no speech source available");
            return;
        };
        if self.active {
            return;
        }
        match source.start() {
            Ok(()) => {
                self.active = true;
                info!("voice control on");
            }
            Err(e) => {
                warn!(error = %e, "speech source failed to start");
                self.history.record_error(e.to_string());
            }
        }
    }

    pub fn disable(&mut self) {
        if !self.active {
            return;
        }
        if let Some(source) = self.source.as_mut() {
            source.stop();
        }
        self.active = false;
        info!("voice control off");
    }

    /// The recognizer stopped on its own.  Restart it if voice is still on.
    /// Returns `true` when a restart happened.
    pub fn on_source_ended(&mut self) -> bool {
        if !self.active {
            return false;
        }
        let Some(source) = self.source.as_mut() else {
            return false;
        };
        match source.start() {
            Ok(()) => {
                debug!("speech source restarted");
                true
            }
            Err(e) => {
                warn!(error = %e, "speech source failed to restart; voice off");
                self.history.record_error(e.to_string());
                self.active = false;
                false
            }
        }
    }

    /// Record a recognizer error.  Voice stays on; the source is expected
    /// to end and be restarted through [`on_source_ended`][Self::on_source_ended].
    pub fn on_source_error(&mut self, message: &str) {
        warn!(%message, "speech source error");
        self.history.record_error(message);
    }

    /// A final transcript arrived.  Ignored unless voice is active.
    pub fn on_transcript(&mut self, transcript: &str, ctx: &InputContext) -> Option<Intent> {
        if !self.active {
            return None;
        }
        let intent = normalize_transcript(transcript, ctx.state);
        debug!(%transcript, ?intent, "voice transcript");
        self.history.record_heard(transcript, intent);
        intent
    }
}
