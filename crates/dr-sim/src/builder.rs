//! Fluent builder for constructing a [`Session`].

use dr_agent::Agent;
use dr_core::{FieldRng, FrameClock, GameConfig, GameState};
use dr_field::TokenField;

use crate::{IntentQueue, Session, SimResult};

/// Fluent builder for [`Session`].
///
/// # Optional inputs (have defaults)
///
/// | Method       | Default                                       |
/// |--------------|-----------------------------------------------|
/// | `.seed(s)`   | `config.seed`, else OS entropy                |
/// | `.rng(r)`    | Derived from the seed                         |
///
/// # Example
///
/// ```rust,ignore
/// let mut session = SessionBuilder::new(GameConfig::default())
///     .seed(7)
///     .build()?;
/// session.start()?;
/// session.run_frames(600, &mut NullSurface, &mut NoopObserver);
/// ```
pub struct SessionBuilder {
    config: GameConfig,
    rng:    Option<FieldRng>,
}

impl SessionBuilder {
    pub fn new(config: GameConfig) -> Self {
        Self { config, rng: None }
    }

    /// Make token placement reproducible.  Overrides `config.seed`.
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self.rng = None;
        self
    }

    /// Supply the placement RNG directly.
    pub fn rng(mut self, rng: FieldRng) -> Self {
        self.rng = Some(rng);
        self
    }

    /// Validate the configuration and return an idle session.
    ///
    /// The field stays empty until the session is started.
    pub fn build(self) -> SimResult<Session> {
        self.config.validate()?;

        let rng = self
            .rng
            .unwrap_or_else(|| FieldRng::from_optional_seed(self.config.seed));
        let agent = Agent::spawn(self.config.surface_extent, self.config.speed);
        let field = TokenField::empty(self.config.density.grid_size() as f32);

        Ok(Session {
            state:       GameState::Idle,
            field,
            agent,
            rng,
            clock:       FrameClock::new(),
            queue:       IntentQueue::new(),
            scheduled:   false,
            transitions: Vec::new(),
            config:      self.config,
        })
    }
}
