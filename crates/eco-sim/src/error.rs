use eco_engine::EngineError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("decision engine error: {0}")]
    Engine(#[from] EngineError),
}

pub type SimResult<T> = Result<T, SimError>;
