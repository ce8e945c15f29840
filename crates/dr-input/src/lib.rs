//! `dr-input` — the command-intent pipeline.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                      |
//! |-----------------|---------------------------------------------------------------|
//! | [`intent`]      | `Intent` — the closed set of normalized commands              |
//! | [`event`]       | `InputEvent`, `KeyCode` — raw events from the host            |
//! | [`context`]     | `InputContext` — state snapshot the normalizer reads          |
//! | [`normalizer`]  | `normalize`, `normalize_key`, `normalize_pointer`             |
//! | [`phrases`]     | Voice phrase rule table, `normalize_transcript`               |
//! | [`voice`]       | `SpeechSource` trait, `VoiceControl` supervisor               |
//! | [`history`]     | `CommandHistory` — last ten transcripts and source errors     |
//! | [`script`]      | `load_script_csv`, `load_script_reader` — scripted input      |
//! | [`error`]       | `InputError`, `InputResult<T>`                                |
//!
//! # Design notes
//!
//! Normalization is a pure classification: `normalize(event, ctx)` reads a
//! small [`InputContext`] snapshot and returns at most one [`Intent`].  It
//! never mutates the session.  The caller (dr-sim) queues the intent and
//! applies it between ticks, so no tick ever observes a half-applied input.

pub mod context;
pub mod error;
pub mod event;
pub mod history;
pub mod intent;
pub mod normalizer;
pub mod phrases;
pub mod script;
pub mod voice;


pub use context::InputContext;
pub use error::{InputError, InputResult};
pub use event::{InputEvent, KeyCode};
pub use history::{CommandHistory, HistoryEntry, HistoryKind};
pub use intent::Intent;
pub use normalizer::{normalize, normalize_key, normalize_pointer, pointer_direction};
pub use phrases::{PhraseRule, normalize_transcript};
pub use script::{ScriptedEvent, load_script_csv, load_script_reader};
pub use voice::{SpeechSource, VoiceControl};
