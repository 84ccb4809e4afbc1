use thiserror::Error;

/// Errors reported while configuring a reveal widget or its view.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RevealError {
    #[error("either a list or an item builder must be supplied")]
    MissingListSource,

    #[error("a list and an item builder cannot both be supplied")]
    ConflictingListSource,

    #[error("revealable height must be a positive finite number, got {0}")]
    InvalidHeight(f32),

    #[error("opacity threshold must be within [0, 1], got {0}")]
    InvalidThreshold(f32),
}

pub type Result<T> = std::result::Result<T, RevealError>;
