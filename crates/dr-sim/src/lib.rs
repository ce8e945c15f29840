//! `dr-sim` — session state machine and frame loop for dotrun.
//!
//! # Frame loop
//!
//! ```text
//! while scheduled and frames remain:
//!   ① Intents   — drain the IntentQueue; apply each intent in order.
//!                 Illegal transitions are dropped (debug log).
//!   ② Tick      — only while Running with a moving agent:
//!                   integrate   → dr_agent::integrate
//!                   consume     → collision::resolve
//!                   victory     → field empty ⇒ Victory, motion frozen
//!   ③ Render    — every frame, through the host's DrawSurface.
//!   ④ Observe   — transitions, tick report, periodic progress snapshot.
//!   ⑤ Advance   — FrameClock += 1; victory stops the scheduler.
//! ```
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use dr_core::GameConfig;
//! use dr_input::{InputEvent, KeyCode};
//! use dr_sim::{NoopObserver, NullSurface, SessionBuilder};
//!
//! let mut session = SessionBuilder::new(GameConfig::default()).seed(42).build()?;
//! session.dispatch(&InputEvent::Key(KeyCode::Space));      // start
//! session.run_frames(1, &mut NullSurface, &mut NoopObserver);
//! session.dispatch(&InputEvent::Key(KeyCode::ArrowDown));  // move
//! session.run_frames(600, &mut NullSurface, &mut NoopObserver);
//! println!("{}", session.progress());
//! ```

pub mod builder;
pub mod collision;
pub mod error;
pub mod observer;
pub mod queue;
pub mod render;
pub mod session;

#[cfg(test)]
mod tests;

pub use builder::SessionBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SessionObserver};
pub use queue::IntentQueue;
pub use render::{DrawSurface, NullSurface, TOKEN_RADIUS, render};
pub use session::{Session, TickReport};
