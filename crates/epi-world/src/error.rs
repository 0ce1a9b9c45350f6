use epi_core::{AgentId, PlaceId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WorldError {
    #[error("place {0} registered twice")]
    DuplicatePlace(PlaceId),

    #[error("place {0} is not part of this world")]
    UnknownPlace(PlaceId),

    #[error("occupancy invariant violated for agent {agent}: {detail}")]
    Inconsistent { agent: AgentId, detail: String },

    #[error("place parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type WorldResult<T> = Result<T, WorldError>;
