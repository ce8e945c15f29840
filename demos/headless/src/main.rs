//! headless — drive a dotrun session from a scripted input file.
//!
//! Replays keyboard, pointer, voice and resize events against a seeded
//! session without any window, then writes `progress.csv` and
//! `transitions.csv` to `output/headless`.
//!
//! ```text
//! headless                 # built-in script
//! headless my_script.csv   # frame,kind,value rows
//! RUST_LOG=debug headless  # see every intent applied or rejected
//! ```

use std::io::Cursor;
use std::path::Path;
use std::time::Instant;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use dr_core::{GameConfig, GameState};
use dr_input::{
    HistoryKind, InputEvent, InputResult, ScriptedEvent, SpeechSource, VoiceControl,
    load_script_csv, load_script_reader,
};
use dr_output::{CsvWriter, SessionOutputObserver};
use dr_sim::{DrawSurface, SessionBuilder};

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:              u64 = 7;
const MAX_HOST_FRAMES:   u64 = 4_000;
const SNAPSHOT_INTERVAL: u64 = 30;
/// The simulated recognizer stops after this many frames of listening.
const MIC_SESSION_FRAMES: u64 = 300;
const OUTPUT_DIR:        &str = "output/headless";

// ── Built-in script ───────────────────────────────────────────────────────────

// Start, sweep the centre column down and up, switch lanes with the pointer,
// speed up by voice, pause and resume, then shrink the surface.
const SCRIPT_CSV: &str = "\
frame,kind,value\n\
0,key,Space\n\
2,key,ArrowDown\n\
10,voice,快一点\n\
20,voice,faster\n\
200,key,w\n\
420,pointer,20 40\n\
520,voice,暂停\n\
540,key,ArrowLeft\n\
560,voice,继续\n\
561,key,s\n\
700,resize,300\n\
760,voice,denser\n\
800,pointer,290 150\n\
1200,key,ArrowUp\n\
1500,voice,重新开始\n\
1502,key,d\n\
";

// ── Host stand-ins ────────────────────────────────────────────────────────────

/// Counts draw calls instead of drawing.
#[derive(Default)]
struct CountingSurface {
    frames:  u64,
    circles: u64,
}

impl DrawSurface for CountingSurface {
    fn clear(&mut self) {
        self.frames += 1;
    }
    fn fill_background(&mut self) {}
    fn draw_circle(&mut self, _x: f32, _y: f32, _radius: f32) {
        self.circles += 1;
    }
    fn draw_wedge(&mut self, _x: f32, _y: f32, _radius: f32, _start: f32, _end: f32) {}
}

/// A recognizer that is always available.
#[derive(Default)]
struct ScriptedMic {
    starts: u32,
}

impl SpeechSource for ScriptedMic {
    fn start(&mut self) -> InputResult<()> {
        self.starts += 1;
        Ok(())
    }
    fn stop(&mut self) {}
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let script: Vec<ScriptedEvent> = match std::env::args().nth(1) {
        Some(path) => load_script_csv(Path::new(&path))?,
        None => load_script_reader(Cursor::new(SCRIPT_CSV))?,
    };
    println!("=== headless — dotrun ===");
    println!("Script: {} events  |  Seed: {SEED}", script.len());

    // 1. Session.
    let config = GameConfig {
        snapshot_interval_frames: SNAPSHOT_INTERVAL,
        seed: Some(SEED),
        ..GameConfig::default()
    };
    let mut session = SessionBuilder::new(config).build()?;

    // 2. Voice supervisor, switched on from the start.
    let mut voice = VoiceControl::new(ScriptedMic::default());
    voice.toggle();

    // 3. Output.
    std::fs::create_dir_all(OUTPUT_DIR)?;
    let mut obs = SessionOutputObserver::new(CsvWriter::new(Path::new(OUTPUT_DIR))?);
    let mut surface = CountingSurface::default();

    // 4. Host loop: deliver this frame's events, then let the scheduler run.
    let t0 = Instant::now();
    let mut events = script.into_iter().peekable();
    for host_frame in 0..MAX_HOST_FRAMES {
        while let Some(scripted) = events.next_if(|e| e.frame.0 <= host_frame) {
            match scripted.event {
                InputEvent::Transcript(text) => {
                    if let Some(intent) = voice.on_transcript(&text, &session.settled_context()) {
                        session.submit(intent);
                    }
                }
                other => {
                    session.dispatch(&other);
                }
            }
        }
        if host_frame > 0 && host_frame.is_multiple_of(MIC_SESSION_FRAMES) {
            voice.on_source_ended();
        }

        session.run_frames(1, &mut surface, &mut obs);
        if session.state() == GameState::Victory && events.peek().is_none() {
            info!(host_frame, "field cleared; stopping");
            break;
        }
    }
    let elapsed = t0.elapsed();

    obs.finish();
    if let Some(e) = obs.take_error() {
        eprintln!("output error: {e}");
    }

    // 5. Summary.
    println!("Finished in {:.3} s", elapsed.as_secs_f64());
    println!("  state     : {}", session.state());
    println!("  progress  : {}", session.progress());
    println!("  agent     : {}", session.agent().position);
    println!("  speed     : {}  |  density: {}", session.config().speed, session.config().density);
    println!("  frames    : {} rendered, {} token draws", surface.frames, surface.circles);
    println!(
        "  voice     : {} recognizer starts",
        voice.source().map_or(0, |mic| mic.starts)
    );
    println!();

    println!("Voice history (newest first):");
    for entry in voice.history().iter() {
        match &entry.kind {
            HistoryKind::Heard(Some(intent)) => println!("  {:<12} → {intent}", entry.text),
            HistoryKind::Heard(None)         => println!("  {:<12} → (ignored)", entry.text),
            HistoryKind::Error               => println!("  error: {}", entry.text),
        }
    }
    println!();
    println!("Telemetry written to {OUTPUT_DIR}/progress.csv and {OUTPUT_DIR}/transitions.csv");

    Ok(())
}
