use thiserror::Error;

/// Failures of the environment collaborator.
///
/// The engine treats every variant identically: a timeout is just another
/// way of being unavailable.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EnvError {
    #[error("environment source unavailable: {0}")]
    Unavailable(String),

    #[error("environment source timed out after {after_ms} ms")]
    Timeout { after_ms: u64 },
}

pub type EnvResult<T> = Result<T, EnvError>;
