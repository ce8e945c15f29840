//! `dr-field` — the collectible token field.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`token`]     | `Token` — a collectible position                          |
//! | [`field`]     | `TokenField` — generation, consumption, density change    |
//! | [`progress`]  | `Progress` — consumed / initial ratio for display         |
//!
//! # Layout model (summary)
//!
//! ```text
//! lanes     = { k * grid | k ≥ 1, k * grid < extent − grid }
//! token     = (lane_x + jitter, lane_y + jitter),  jitter ∈ [−0.15 grid, 0.15 grid)
//! progress  = (initial_count − len) / initial_count
//! ```
//!
//! Tokens carry no identity: consumption removes whatever lies close enough
//! to the agent, and a density change throws the whole layout away and
//! rebuilds it while keeping the consumed fraction.

pub mod field;
pub mod progress;
pub mod token;


pub use field::TokenField;
pub use progress::Progress;
pub use token::Token;
