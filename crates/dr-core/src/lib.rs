//! `dr-core` — foundational types for the `dotrun` arcade simulation.
//!
//! This crate is a dependency of every other `dr-*` crate.  It has no `dr-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`geo`]         | `Point`, grid snapping                                |
//! | [`direction`]   | `Direction` (Right / Down / Left / Up)                |
//! | [`state`]       | `GameState` (Idle / Running / Paused / Victory)       |
//! | [`time`]        | `Frame`, `FrameClock`                                 |
//! | [`rng`]         | `FieldRng` (seedable token-placement RNG)             |
//! | [`settings`]    | `Speed`, `Density`                                    |
//! | [`config`]      | `GameConfig`, `LaneSmoothing`                         |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public value types.  |

pub mod config;
pub mod direction;
pub mod error;
pub mod geo;
pub mod rng;
pub mod settings;
pub mod state;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{GameConfig, LaneSmoothing};
pub use direction::Direction;
pub use error::{CoreError, CoreResult};
pub use geo::{Point, snap_to_grid};
pub use rng::FieldRng;
pub use settings::{Density, Speed};
pub use state::GameState;
pub use time::{Frame, FrameClock};
