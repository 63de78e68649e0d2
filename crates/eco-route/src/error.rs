//! Route-subsystem error type.

use thiserror::Error;

use eco_core::RouteId;

/// Errors produced by `eco-route`.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RouteError {
    #[error("invalid route {route}: {reason}")]
    InvalidRoute { route: RouteId, reason: String },

    #[error("routing collaborator returned no usable routes")]
    Empty,

    #[error("duplicate route id {0} in candidate set")]
    DuplicateId(RouteId),

    #[error("{0} is not in the candidate set")]
    NotFound(RouteId),

    #[error("routing collaborator unavailable: {0}")]
    Unavailable(String),

    #[error("elevation source unavailable: {0}")]
    ElevationUnavailable(String),
}

pub type RouteResult<T> = Result<T, RouteError>;
