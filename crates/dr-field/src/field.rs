//! `TokenField` — the set of tokens still on the surface.

use dr_core::FieldRng;
use tracing::debug;

use crate::{Progress, Token};

/// Jitter half-width as a fraction of the grid spacing.
const JITTER_FRACTION: f32 = 0.15;

/// Ordered collection of the tokens still on the surface.
///
/// # Invariant
///
/// `initial_count >= tokens.len()` after every public operation.
/// `initial_count` is set by (re)generation. A mid-session density change
/// re-derives it from the remaining ratio instead of recounting, so progress
/// keeps meaning "fraction consumed".
#[derive(Clone, Debug)]
pub struct TokenField {
    tokens:        Vec<Token>,
    grid_size:     f32,
    initial_count: usize,
}

impl TokenField {
    /// An empty field (no tokens, zero denominator) with the given spacing.
    pub fn empty(grid_size: f32) -> Self {
        Self {
            tokens: Vec::new(),
            grid_size,
            initial_count: 0,
        }
    }

    /// Lay out a fresh field on a surface of side `extent`.
    pub fn generate(extent: f32, grid_size: f32, rng: &mut FieldRng) -> Self {
        let mut field = Self::empty(grid_size);
        field.regenerate(extent, rng);
        field
    }

    /// A field holding exactly `tokens`, all counted as not yet consumed.
    pub fn from_tokens(grid_size: f32, tokens: Vec<Token>) -> Self {
        let initial_count = tokens.len();
        Self { tokens, grid_size, initial_count }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[inline]
    pub fn grid_size(&self) -> f32 {
        self.grid_size
    }

    #[inline]
    pub fn initial_count(&self) -> usize {
        self.initial_count
    }

    /// Change the spacing used by the next (re)generation.  Existing tokens
    /// stay where they are.
    pub fn set_grid_size(&mut self, grid_size: f32) {
        self.grid_size = grid_size;
    }

    pub fn progress(&self) -> Progress {
        Progress {
            consumed: self.initial_count.saturating_sub(self.tokens.len()),
            initial:  self.initial_count,
        }
    }

    /// Fraction of the initial tokens still present, in `[0, 1]`.
    ///
    /// A field that was never generated (`initial_count == 0`) reports `1.0`:
    /// nothing has been consumed.
    pub fn remaining_ratio(&self) -> f64 {
        if self.initial_count == 0 {
            return 1.0;
        }
        (self.tokens.len() as f64 / self.initial_count as f64).min(1.0)
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Discard every token and lay out a full field; `initial_count` becomes
    /// the new token count.
    pub fn regenerate(&mut self, extent: f32, rng: &mut FieldRng) {
        self.tokens = lay_out(extent, self.grid_size, rng);
        self.initial_count = self.tokens.len();
        debug!(tokens = self.initial_count, grid = self.grid_size, "token field generated");
    }

    /// Regenerate at the current spacing, then randomly remove tokens so the
    /// consumed fraction carries over.
    ///
    /// ```text
    /// ratio          = len / initial_count            (1.0 if initial_count == 0)
    /// to_remove      = floor(new_len * (1 − ratio))
    /// initial_count' = round(remaining / ratio)       (new_len if ratio == 0)
    /// ```
    ///
    /// Returns the number of tokens removed after regeneration.
    pub fn regenerate_preserving_ratio(&mut self, extent: f32, rng: &mut FieldRng) -> usize {
        let ratio = self.remaining_ratio();
        self.regenerate(extent, rng);
        let generated = self.tokens.len();

        let to_remove = removal_count(generated, ratio);
        for _ in 0..to_remove {
            // Order-preserving removal keeps the layout scan order intact.
            if let Some(i) = rng.index(self.tokens.len()) {
                self.tokens.remove(i);
            }
        }

        self.initial_count = if ratio > 0.0 {
            ((self.tokens.len() as f64 / ratio).round() as usize).max(self.tokens.len())
        } else {
            generated
        };

        debug!(
            ratio,
            generated,
            removed = to_remove,
            initial = self.initial_count,
            "token field regenerated preserving progress",
        );
        to_remove
    }

    /// Remove every token matching `eligible` in one pass.  Returns how many
    /// were removed.
    pub fn consume_where<F>(&mut self, mut eligible: F) -> usize
    where
        F: FnMut(&Token) -> bool,
    {
        let before = self.tokens.len();
        self.tokens.retain(|t| !eligible(t));
        before - self.tokens.len()
    }

    /// Drop every token and reset the denominator (used on restart).
    pub fn clear(&mut self) {
        self.tokens.clear();
        self.initial_count = 0;
    }

    /// Map every token from a surface of side `from` to one of side `to`.
    pub fn rescale(&mut self, from: f32, to: f32) {
        for token in &mut self.tokens {
            token.position = token.position.rescaled(from, to);
        }
    }
}

/// Tokens to drop from a fresh field of `generated` so that `ratio` of it
/// remains.
pub(crate) fn removal_count(generated: usize, ratio: f64) -> usize {
    ((generated as f64 * (1.0 - ratio)).floor() as usize).min(generated)
}

/// Grid lane coordinates strictly below `extent − grid`, starting at `grid`.
fn lanes(extent: f32, grid: f32) -> Vec<f32> {
    if grid <= 0.0 || !extent.is_finite() {
        return Vec::new();
    }
    let limit = extent - grid;
    (1u32..)
        .map(|k| k as f32 * grid)
        .take_while(|&c| c < limit)
        .collect()
}

fn lay_out(extent: f32, grid: f32, rng: &mut FieldRng) -> Vec<Token> {
    let lanes = lanes(extent, grid);
    let half = grid * JITTER_FRACTION;
    let mut tokens = Vec::with_capacity(lanes.len() * lanes.len());
    for &x in &lanes {
        for &y in &lanes {
            tokens.push(Token::new(x + rng.jitter(half), y + rng.jitter(half)));
        }
    }
    tokens
}
