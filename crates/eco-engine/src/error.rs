use thiserror::Error;

use eco_core::RouteId;
use eco_cost::CostError;
use eco_env::EnvError;
use eco_route::RouteError;

use crate::TripStatus;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum EngineError {
    #[error("invalid route {route}: {reason}")]
    InvalidRoute { route: RouteId, reason: String },

    #[error("invalid snapshot: {0}")]
    InvalidSnapshot(String),

    #[error("{0} is not in the candidate set")]
    NotFound(RouteId),

    /// The environment could not be sampled while planning.  Fatal: the trip
    /// never starts.
    #[error("no initial condition snapshot: {0}")]
    NoInitialSnapshot(EnvError),

    #[error("cannot {operation} a trip that is {status}")]
    InvalidState { status: TripStatus, operation: &'static str },

    #[error("collaborator unavailable: {0}")]
    CollaboratorUnavailable(String),

    #[error("candidate set is empty")]
    EmptyCandidateSet,

    #[error("engine configuration error: {0}")]
    Config(String),
}

pub type EngineResult<T> = Result<T, EngineError>;

impl From<CostError> for EngineError {
    fn from(e: CostError) -> Self {
        match e {
            CostError::InvalidRoute { route, reason } => EngineError::InvalidRoute { route, reason },
            CostError::InvalidSnapshot(msg) => EngineError::InvalidSnapshot(msg),
            CostError::Config(msg) => EngineError::Config(msg),
        }
    }
}

impl From<RouteError> for EngineError {
    fn from(e: RouteError) -> Self {
        match e {
            RouteError::InvalidRoute { route, reason } => EngineError::InvalidRoute { route, reason },
            RouteError::DuplicateId(route) => EngineError::InvalidRoute {
                route,
                reason: "duplicate route id".into(),
            },
            RouteError::Empty => EngineError::EmptyCandidateSet,
            RouteError::NotFound(route) => EngineError::NotFound(route),
            RouteError::Unavailable(msg) | RouteError::ElevationUnavailable(msg) => {
                EngineError::CollaboratorUnavailable(msg)
            }
        }
    }
}

impl From<EnvError> for EngineError {
    fn from(e: EnvError) -> Self {
        EngineError::CollaboratorUnavailable(e.to_string())
    }
}
