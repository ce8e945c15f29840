//! Voice phrase table.
//!
//! Rules are checked in order; the first rule with a phrase contained in the
//! transcript decides the outcome.  If that rule's state guard fails the
//! transcript yields nothing: later rules are not consulted.  A transcript
//! containing both "暂停" and "继续" is therefore always read as a pause
//! request (and dropped outside Running).

use dr_core::{Direction, GameState};

use crate::Intent;

/// One entry of the ordered voice table.
#[derive(Debug, Clone, Copy)]
pub struct PhraseRule {
    /// Substrings that trigger this rule.
    pub phrases:  &'static [&'static str],
    pub intent:   Intent,
    /// The rule only fires in this state; `None` means any state.
    pub requires: Option<GameState>,
}

impl PhraseRule {
    const fn any(phrases: &'static [&'static str], intent: Intent) -> Self {
        Self { phrases, intent, requires: None }
    }

    const fn when(phrases: &'static [&'static str], intent: Intent, state: GameState) -> Self {
        Self { phrases, intent, requires: Some(state) }
    }

    fn matches(&self, transcript: &str) -> bool {
        self.phrases.iter().any(|p| transcript.contains(p))
    }

    fn permits(&self, state: GameState) -> bool {
        self.requires.is_none_or(|s| s == state)
    }
}

/// The ordered voice table.
///
/// Speed rules come first so "speed up" / "slow down" are never read as
/// directions, and restart comes before start so "start over" restarts.
pub const VOICE_RULES: &[PhraseRule] = &[
    PhraseRule::when(&["快一点", "快", "加速", "faster", "speed up", "quicker"], Intent::SpeedUp, GameState::Running),
    PhraseRule::when(&["慢一点", "慢", "减速", "slower", "slow down"], Intent::SpeedDown, GameState::Running),
    PhraseRule::any(
        &["重新开始", "重新玩", "再来一次", "重新", "重来", "restart", "start over", "play again", "new game"],
        Intent::Restart,
    ),
    PhraseRule::any(
        &["稀一些", "疏一些", "降低密度", "减小密度", "sparser", "less dense", "fewer dots"],
        Intent::DensityDown,
    ),
    PhraseRule::any(
        &["密一些", "稠一些", "增加密度", "提高密度", "denser", "more dense", "more dots"],
        Intent::DensityUp,
    ),
    PhraseRule::when(&["开始", "start", "begin"], Intent::Start, GameState::Idle),
    PhraseRule::when(&["暂停", "pause", "stop"], Intent::Pause, GameState::Running),
    PhraseRule::when(&["继续", "resume", "continue", "go on"], Intent::Resume, GameState::Paused),
    PhraseRule::when(&["上", "up"], Intent::Move(Direction::Up), GameState::Running),
    PhraseRule::when(&["下", "down"], Intent::Move(Direction::Down), GameState::Running),
    PhraseRule::when(&["左", "left"], Intent::Move(Direction::Left), GameState::Running),
    PhraseRule::when(&["右", "right"], Intent::Move(Direction::Right), GameState::Running),
];

/// Map a transcript to an intent using [`VOICE_RULES`].
///
/// Matching is substring-based and case-insensitive for the Latin phrases.
pub fn normalize_transcript(transcript: &str, state: GameState) -> Option<Intent> {
    let text = transcript.trim().to_lowercase();
    if text.is_empty() {
        return None;
    }
    let rule = VOICE_RULES.iter().find(|r| r.matches(&text))?;
    if rule.permits(state) {
        Some(rule.intent)
    } else {
        tracing::debug!(%transcript, %state, intent = %rule.intent, "voice rule guard rejected");
        None
    }
}
