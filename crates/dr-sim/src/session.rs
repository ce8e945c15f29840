//! The `Session` struct, its state machine, and the frame loop.

use tracing::{debug, info, warn};

use dr_agent::{Agent, integrate};
use dr_core::{Density, Direction, FieldRng, Frame, FrameClock, GameConfig, GameState, Speed};
use dr_field::{Progress, TokenField};
use dr_input::{InputContext, InputEvent, Intent, normalize};

use crate::{DrawSurface, IntentQueue, SessionObserver, SimError, SimResult, collision, render};

// ── Tick report ───────────────────────────────────────────────────────────────

/// What happened during one frame's tick.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct TickReport {
    pub frame:     Frame,
    /// The agent was integrated this frame.
    pub moved:     bool,
    /// Tokens consumed by this frame's collision pass.
    pub consumed:  usize,
    /// Tokens left after the collision pass.
    pub remaining: usize,
    /// This frame ended the session in victory.
    pub victory:   bool,
}

// ── Session ───────────────────────────────────────────────────────────────────

/// One play session: state machine, token field, agent, and the frame
/// scheduler.
///
/// ```text
///          start            pause
///   Idle ────────▶ Running ───────▶ Paused
///                   ▲  │  ◀───────
///                   │  │   resume
///          restart  │  │ field empty
///                   │  ▼
///                  Victory
/// ```
///
/// Each frame the scheduler:
///
/// 1. drains the [`IntentQueue`] and applies every intent,
/// 2. ticks: integrates the agent, resolves collisions, checks for victory
///    (only while `Running` and the agent is moving),
/// 3. renders unconditionally,
/// 4. reports transitions, the tick, and periodic snapshots to the observer,
/// 5. advances the [`FrameClock`].
///
/// Victory stops the scheduler after the victory frame is drawn; a drained
/// `Restart` or `Start` intent arms it again.
///
/// Create via [`SessionBuilder`][crate::SessionBuilder].
#[derive(Debug)]
pub struct Session {
    pub(crate) config:      GameConfig,
    pub(crate) state:       GameState,
    pub(crate) field:       TokenField,
    pub(crate) agent:       Agent,
    pub(crate) rng:         FieldRng,
    pub(crate) clock:       FrameClock,
    pub(crate) queue:       IntentQueue,
    /// `true` while frames should keep being scheduled.
    pub(crate) scheduled:   bool,
    /// State changes not yet reported to an observer.
    pub(crate) transitions: Vec<(GameState, GameState)>,
}

impl Session {
    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn state(&self) -> GameState {
        self.state
    }

    #[inline]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[inline]
    pub fn field(&self) -> &TokenField {
        &self.field
    }

    #[inline]
    pub fn agent(&self) -> &Agent {
        &self.agent
    }

    #[inline]
    pub fn frame(&self) -> Frame {
        self.clock.current()
    }

    #[inline]
    pub fn progress(&self) -> Progress {
        self.field.progress()
    }

    /// `true` while the scheduler will run further frames.
    #[inline]
    pub fn is_scheduled(&self) -> bool {
        self.scheduled
    }

    #[inline]
    pub fn pending_intents(&self) -> usize {
        self.queue.len()
    }

    /// Snapshot handed to the input normalizer.
    pub fn input_context(&self) -> InputContext {
        InputContext::new(self.state, self.agent.position)
    }

    /// Apply everything already queued, then snapshot the result.
    ///
    /// Hosts that classify input themselves (voice) read the context through
    /// this so an event is judged against the effects of every earlier one.
    pub fn settled_context(&mut self) -> InputContext {
        self.drain_intents();
        self.input_context()
    }

    // ── State transitions ─────────────────────────────────────────────────

    /// Lay out a fresh field and begin running.  Legal from `Idle` and
    /// `Victory`.
    pub fn start(&mut self) -> SimResult<()> {
        match self.state {
            GameState::Idle | GameState::Victory => {
                self.begin();
                Ok(())
            }
            from => Err(SimError::IllegalTransition { from, action: "start" }),
        }
    }

    /// Freeze a running session.  Motion stops; the field is untouched.
    pub fn pause(&mut self) -> SimResult<()> {
        if self.state != GameState::Running {
            return Err(SimError::IllegalTransition { from: self.state, action: "pause" });
        }
        self.agent.halt();
        self.set_state(GameState::Running, GameState::Paused);
        Ok(())
    }

    /// Continue a paused session.  The agent stays still until the next
    /// movement intent.
    pub fn resume(&mut self) -> SimResult<()> {
        if self.state != GameState::Paused {
            return Err(SimError::IllegalTransition { from: self.state, action: "resume" });
        }
        self.set_state(GameState::Paused, GameState::Running);
        Ok(())
    }

    /// Play/pause: start from `Idle`, pause while `Running`, resume while
    /// `Paused`.  Does nothing in `Victory`.
    pub fn toggle(&mut self) -> SimResult<()> {
        match self.state {
            GameState::Idle    => self.start(),
            GameState::Running => self.pause(),
            GameState::Paused  => self.resume(),
            GameState::Victory => Ok(()),
        }
    }

    /// Put a fresh still agent at the centre and start over with a new
    /// field.  Legal from every state.
    pub fn restart(&mut self) {
        info!(from = %self.state, "restarting session");
        self.agent = Agent::spawn(self.config.surface_extent, self.config.speed);
        self.field.clear();
        self.begin();
    }

    fn begin(&mut self) {
        self.field.set_grid_size(self.config.density.grid_size() as f32);
        self.field.regenerate(self.config.surface_extent, &mut self.rng);
        let from = self.state;
        self.set_state(from, GameState::Running);
        self.scheduled = true;
        info!(tokens = self.field.len(), "session running");
    }

    fn set_state(&mut self, from: GameState, to: GameState) {
        debug_assert_eq!(self.state, from);
        self.state = to;
        if from != to {
            self.transitions.push((from, to));
            info!(%from, %to, "state transition");
        }
    }

    // ── Controls ──────────────────────────────────────────────────────────

    /// Point the agent in `direction` and set it moving.  Only accepted
    /// while running; returns whether it was.
    pub fn steer(&mut self, direction: Direction) -> bool {
        if !self.state.is_running() {
            debug!(%direction, state = %self.state, "steer ignored");
            return false;
        }
        self.agent.steer(direction);
        true
    }

    /// Change the speed for the current agent and every future one.
    pub fn set_speed(&mut self, speed: Speed) {
        self.config.speed = speed;
        self.agent.set_speed(speed);
        debug!(%speed, "speed changed");
    }

    /// Change the token spacing.  While running the field is re-laid at the
    /// new spacing with the consumed fraction preserved; otherwise the new
    /// spacing takes effect at the next start.
    pub fn set_density(&mut self, density: Density) {
        self.config.density = density;
        debug!(%density, "density changed");
        if self.state.is_running() {
            self.field.set_grid_size(density.grid_size() as f32);
            self.field
                .regenerate_preserving_ratio(self.config.surface_extent, &mut self.rng);
        }
    }

    /// The host surface changed size.  Tokens and agent keep their relative
    /// positions; the agent's size follows the new extent.
    pub fn resize(&mut self, new_extent: f32) -> SimResult<()> {
        if !new_extent.is_finite() || new_extent <= 0.0 {
            return Err(SimError::Config(format!(
                "surface extent must be positive, got {new_extent}"
            )));
        }
        let old = self.config.surface_extent;
        self.field.rescale(old, new_extent);
        self.agent.rescale(old, new_extent);
        self.config.surface_extent = new_extent;
        debug!(old, new = new_extent, "surface resized");
        Ok(())
    }

    // ── Input ─────────────────────────────────────────────────────────────

    /// Queue an intent for the next frame.
    pub fn submit(&mut self, intent: Intent) {
        self.queue.push(intent);
    }

    /// Normalize a raw event and queue the resulting intent.
    ///
    /// Intents queued by earlier events are applied first, so the event is
    /// classified against the state they produced.  Resize events are applied
    /// immediately.
    ///
    /// Returns the queued intent, if any.
    pub fn dispatch(&mut self, event: &InputEvent) -> Option<Intent> {
        let ctx = self.settled_context();
        if let InputEvent::Resize(extent) = *event {
            if let Err(e) = self.resize(extent) {
                warn!(error = %e, "resize ignored");
            }
            return None;
        }
        let intent = normalize(event, &ctx)?;
        self.submit(intent);
        Some(intent)
    }

    /// Apply every queued intent in submission order.
    pub fn drain_intents(&mut self) -> usize {
        let mut applied = 0;
        while let Some(intent) = self.queue.pop() {
            self.apply(intent);
            applied += 1;
        }
        applied
    }

    /// Apply one intent now.  Intents the current state does not allow are
    /// dropped; nothing here fails.
    pub fn apply(&mut self, intent: Intent) {
        let outcome = match intent {
            Intent::Move(dir) => {
                self.steer(dir);
                Ok(())
            }
            Intent::ToggleRun   => self.toggle(),
            Intent::Start       => self.start(),
            Intent::Pause       => self.pause(),
            Intent::Resume      => self.resume(),
            Intent::Restart     => {
                self.restart();
                Ok(())
            }
            Intent::SpeedUp     => {
                self.set_speed(self.config.speed.faster());
                Ok(())
            }
            Intent::SpeedDown   => {
                self.set_speed(self.config.speed.slower());
                Ok(())
            }
            Intent::DensityUp   => {
                self.set_density(self.config.density.denser());
                Ok(())
            }
            Intent::DensityDown => {
                self.set_density(self.config.density.sparser());
                Ok(())
            }
        };
        match outcome {
            Ok(())  => debug!(%intent, "intent applied"),
            Err(e)  => debug!(%intent, reason = %e, "intent rejected"),
        }
    }

    // ── Frame loop ────────────────────────────────────────────────────────

    /// Advance the simulation by one tick.  Only a running session with a
    /// moving agent changes.
    pub fn tick(&mut self) -> TickReport {
        let mut report = TickReport {
            frame:     self.clock.current(),
            remaining: self.field.len(),
            ..TickReport::default()
        };
        if self.state != GameState::Running || !self.agent.is_moving {
            return report;
        }

        integrate(
            &mut self.agent,
            self.field.grid_size(),
            self.config.surface_extent,
            self.config.smoothing,
        );
        report.moved = true;
        report.consumed = collision::resolve(&self.agent, &mut self.field);
        report.remaining = self.field.len();

        if self.field.is_empty() {
            self.agent.halt();
            self.set_state(GameState::Running, GameState::Victory);
            report.victory = true;
            info!(frame = %report.frame, progress = %self.field.progress(), "field cleared");
        }
        report
    }

    /// Run one complete frame: drain intents, tick, render, notify, advance.
    ///
    /// Runs even when the scheduler is stopped; [`run_frames`][Self::run_frames]
    /// is the scheduled entry point.
    pub fn step_frame<S, O>(&mut self, surface: &mut S, observer: &mut O) -> TickReport
    where
        S: DrawSurface + ?Sized,
        O: SessionObserver + ?Sized,
    {
        let frame = self.clock.current();
        observer.on_frame_start(frame);

        self.drain_intents();
        let report = self.tick();
        render::render(surface, &self.field, &self.agent);

        for (from, to) in self.transitions.drain(..) {
            observer.on_transition(frame, from, to);
        }
        observer.on_frame_end(frame, &report);
        let interval = self.config.snapshot_interval_frames;
        if interval > 0 && frame.0.is_multiple_of(interval) {
            observer.on_snapshot(frame, self.state, self.field.progress());
        }

        self.clock.advance();

        if report.victory {
            self.scheduled = false;
            observer.on_session_end(frame, self.field.progress());
        }
        report
    }

    /// Run up to `n` frames while the scheduler is armed.
    ///
    /// Queued intents are drained before the armed check, so a pending
    /// `Start` or `Restart` re-arms a stopped session.  Returns the number
    /// of frames actually run.
    pub fn run_frames<S, O>(&mut self, n: u64, surface: &mut S, observer: &mut O) -> u64
    where
        S: DrawSurface + ?Sized,
        O: SessionObserver + ?Sized,
    {
        let mut ran = 0;
        while ran < n {
            self.drain_intents();
            if !self.scheduled {
                break;
            }
            self.step_frame(surface, observer);
            ran += 1;
        }
        ran
    }
}
