use epi_agent::AgentError;
use epi_mobility::MobilityError;
use epi_world::WorldError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("world setup failed: {0}")]
    World(#[from] WorldError),

    #[error("population setup failed: {0}")]
    Agent(#[from] AgentError),

    #[error("mobility setup failed: {0}")]
    Mobility(#[from] MobilityError),
}

pub type SimResult<T> = Result<T, SimError>;
