//! Flow error types

use super::machine::{FlowEvent, FlowState};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FlowError {
    /// The event has no transition out of the current state
    #[error("{event} is not accepted while {state}")]
    Rejected { state: FlowState, event: FlowEvent },
}
