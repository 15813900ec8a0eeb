//! Application state module

mod forms;
mod transition;

pub use forms::*;
pub use transition::*;
