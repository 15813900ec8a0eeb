//! Focus handling for the contact form

use super::field::FormFocus;

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
}

/// Name, phone and the submit button
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    pub active_field_index: usize,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn focus(&self) -> FormFocus {
        FormFocus::ORDER[self.active_field_index]
    }

    /// Back to the first field
    pub fn reset(&mut self) {
        self.active_field_index = 0;
    }
}

impl Form for ContactForm {
    fn field_count(&self) -> usize {
        FormFocus::ORDER.len()
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(self.field_count() - 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flow::FieldId;
    use crate::state::ConfirmChoice;

    mod contact_form {
        use super::*;

        #[test]
        fn test_new_focuses_name() {
            let form = ContactForm::new();
            assert_eq!(form.focus(), FormFocus::Field(FieldId::Name));
        }

        #[test]
        fn test_next_field_cycles() {
            let mut form = ContactForm::new();
            form.next_field();
            assert_eq!(form.focus(), FormFocus::Field(FieldId::Phone));
            form.next_field();
            assert_eq!(form.focus(), FormFocus::Submit);
            form.next_field();
            assert_eq!(form.focus(), FormFocus::Field(FieldId::Name)); // Wrapped back
        }

        #[test]
        fn test_prev_field_cycles() {
            let mut form = ContactForm::new();
            form.prev_field();
            assert_eq!(form.focus(), FormFocus::Submit); // Wrapped to last
        }

        #[test]
        fn test_set_active_field_clamps() {
            let mut form = ContactForm::new();
            form.set_active_field(100);
            assert_eq!(form.active_field_index, 2);
        }

        #[test]
        fn test_reset() {
            let mut form = ContactForm::new();
            form.next_field();
            form.reset();
            assert_eq!(form.active_field_index, 0);
        }
    }

    mod focus {
        use super::*;

        #[test]
        fn test_field_accessor() {
            assert_eq!(FormFocus::Field(FieldId::Phone).field(), Some(FieldId::Phone));
            assert_eq!(FormFocus::Submit.field(), None);
            assert!(FormFocus::Field(FieldId::Name).is_field(FieldId::Name));
            assert!(!FormFocus::Submit.is_field(FieldId::Name));
        }
    }

    mod confirm_choice {
        use super::*;

        #[test]
        fn test_default_is_received() {
            assert_eq!(ConfirmChoice::default(), ConfirmChoice::Received);
        }

        #[test]
        fn test_toggle() {
            let mut choice = ConfirmChoice::default();
            choice.toggle();
            assert_eq!(choice, ConfirmChoice::NotReceived);
            choice.toggle();
            assert_eq!(choice, ConfirmChoice::Received);
        }
    }
}
