//! Focusable slots of the contact form

use crate::flow::FieldId;

/// What keyboard input currently goes to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormFocus {
    Field(FieldId),
    /// The "Send information" button
    Submit,
}

impl FormFocus {
    /// Slots in tab order
    pub const ORDER: [FormFocus; 3] = [
        FormFocus::Field(FieldId::Name),
        FormFocus::Field(FieldId::Phone),
        FormFocus::Submit,
    ];

    /// The text field under focus, if any
    pub fn field(&self) -> Option<FieldId> {
        match self {
            Self::Field(id) => Some(*id),
            Self::Submit => None,
        }
    }

    pub fn is_field(&self, field: FieldId) -> bool {
        self.field() == Some(field)
    }
}

/// Answer buttons on the confirmation prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConfirmChoice {
    #[default]
    Received,
    NotReceived,
}

impl ConfirmChoice {
    pub fn toggle(&mut self) {
        *self = match self {
            Self::Received => Self::NotReceived,
            Self::NotReceived => Self::Received,
        };
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Received => "Yes, I got it",
            Self::NotReceived => "I haven't received it",
        }
    }
}
