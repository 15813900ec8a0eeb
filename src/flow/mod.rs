//! Contact flow domain layer: validation, the state machine and its timers

mod controller;
mod error;
mod machine;
mod scheduler;
mod validator;

pub use controller::FlowController;
pub use error::FlowError;
pub use machine::FlowState;
pub use scheduler::{Clock, SystemClock};
pub use validator::FieldId;

#[cfg(test)]
pub use scheduler::ManualClock;
