use thiserror::Error;

#[derive(Debug, Error)]
pub enum FloatError {
    /// A timeout was requested with a negative delay. Raised before the
    /// timer generation is touched.
    #[error("invalid argument: delay must be non-negative, got {delay_ms}ms")]
    InvalidArgument { delay_ms: i64 },
    #[error("failed to spawn timeout thread: {0}")]
    Spawn(#[source] std::io::Error),
    #[error("unknown action '{0}'")]
    UnknownAction(String),
    /// The injected show/hide or delay capability failed.
    #[error(transparent)]
    Backend(#[from] anyhow::Error),
}

pub type Result<T, E = FloatError> = std::result::Result<T, E>;
