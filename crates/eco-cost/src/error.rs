use thiserror::Error;

use eco_core::RouteId;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum CostError {
    #[error("cannot score {route}: {reason}")]
    InvalidRoute { route: RouteId, reason: String },

    #[error("incomplete or malformed snapshot: {0}")]
    InvalidSnapshot(String),

    #[error("cost configuration error: {0}")]
    Config(String),
}

pub type CostResult<T> = Result<T, CostError>;
