use dr_core::{CoreError, GameState};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum SimError {
    #[error("session configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("cannot {action} a session that is {from}")]
    IllegalTransition {
        from:   GameState,
        action: &'static str,
    },
}

pub type SimResult<T> = Result<T, SimError>;
