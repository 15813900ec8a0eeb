//! Form focus and answer selection

mod field;
mod form_state;

pub use field::{ConfirmChoice, FormFocus};
pub use form_state::{ContactForm, Form};
