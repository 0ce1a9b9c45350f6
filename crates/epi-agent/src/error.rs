use epi_core::PlaceKind;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AgentError {
    #[error("no {0} places available to assign")]
    EmptyPool(PlaceKind),

    #[error("commute jitter {jitter} must be smaller than the base interval {base}")]
    JitterExceedsBase { jitter: u64, base: u64 },
}

pub type AgentResult<T> = Result<T, AgentError>;
