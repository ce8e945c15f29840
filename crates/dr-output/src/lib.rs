//! `dr-output` — session telemetry writers for dotrun.
//!
//! | Backend | Files created                         |
//! |---------|---------------------------------------|
//! | CSV     | `progress.csv`, `transitions.csv`     |
//!
//! Writers implement [`OutputWriter`] and are driven by
//! [`SessionOutputObserver`], which implements `dr_sim::SessionObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use dr_output::{CsvWriter, SessionOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SessionOutputObserver::new(writer);
//! session.run_frames(3_600, &mut surface, &mut obs);
//! obs.finish();
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SessionOutputObserver;
pub use row::{ProgressRow, TransitionRow};
pub use writer::OutputWriter;
