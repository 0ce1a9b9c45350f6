use epi_core::AgentId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MobilityError {
    #[error("agent {0} has not been placed in any place")]
    NotPlaced(AgentId),
}

pub type MobilityResult<T> = Result<T, MobilityError>;
