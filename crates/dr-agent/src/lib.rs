//! `dr-agent` — the controllable agent and its movement integration.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                          |
//! |-------------|-------------------------------------------------------------------|
//! | [`state`]   | `Agent` — position, size, speed, facing, motion flag, anim phase  |
//! | [`motion`]  | `integrate`, `lane_target` — grid-locked lane movement            |
//!
//! # Movement model (grid-locked lanes)
//!
//! Each frame a moving agent:
//!
//! 1. Advances `speed` pixels along its travel axis.
//! 2. Snaps its cross axis to the nearest grid lane (`round(c / grid) * grid`),
//!    either in one jump or eased, per [`LaneSmoothing`][dr_core::LaneSmoothing].
//! 3. Is clamped to `[size/2, extent − size/2]` on both axes.
//! 4. Advances its animation phase by 0.2 modulo π.
//!
//! The result is free movement along lanes and instant lane changes on
//! turns. Tokens sit on lane crossings, so the agent sweeps them up.

pub mod motion;
pub mod state;


pub use motion::{integrate, lane_target};
pub use state::Agent;
