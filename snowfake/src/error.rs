use thiserror::Error;

/// Failure modes surfaced by the engine. Arithmetic inside a tick is
/// infallible once parameters have passed validation; fallibility is
/// confined to parameter validation and file I/O.
#[derive(Debug, Error)]
pub enum SnowfakeError {
    #[error("parameter `{field}` is invalid: {reason}")]
    ParameterInvalid {
        field: &'static str,
        reason: String,
    },

    #[error("I/O failure: {0}")]
    Io(#[from] std::io::Error),

    #[error("checkpoint malformed at token offset {offset}: {reason}")]
    CheckpointMalformed { offset: usize, reason: String },

    #[error("internal invariant broken: {detail}")]
    InternalInvariantBroken { detail: String },
}

pub type Result<T> = std::result::Result<T, SnowfakeError>;
