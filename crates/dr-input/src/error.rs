use thiserror::Error;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("script parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("speech source error: {0}")]
    Speech(String),
}

pub type InputResult<T> = Result<T, InputError>;
