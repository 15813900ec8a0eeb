//! Field validation for the contact form

use regex::Regex;
use std::sync::OnceLock;

pub const NAME_REQUIRED: &str = "name required";
pub const PHONE_REQUIRED: &str = "phone required";
pub const PHONE_INVALID: &str = "invalid phone format";

/// Optional leading `+` followed by 8 to 15 digits
fn phone_pattern() -> &'static Regex {
    static PHONE: OnceLock<Regex> = OnceLock::new();
    PHONE.get_or_init(|| Regex::new(r"^\+?[0-9]{8,15}$").expect("phone pattern is valid"))
}

/// Identifies one of the form's input fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldId {
    Name,
    Phone,
}

impl FieldId {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Full name",
            Self::Phone => "Phone number",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::Name => "Enter your full name",
            Self::Phone => "+34 612 345 678",
        }
    }
}

/// Raw values typed by the user
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub name: String,
    pub phone: String,
}

impl FormFields {
    #[cfg(test)]
    pub fn new(name: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
        }
    }

    pub fn get(&self, field: FieldId) -> &str {
        match field {
            FieldId::Name => &self.name,
            FieldId::Phone => &self.phone,
        }
    }

    pub fn get_mut(&mut self, field: FieldId) -> &mut String {
        match field {
            FieldId::Name => &mut self.name,
            FieldId::Phone => &mut self.phone,
        }
    }

    /// Phone with every whitespace character removed
    pub fn normalized_phone(&self) -> String {
        self.phone.chars().filter(|c| !c.is_whitespace()).collect()
    }

    pub fn clear(&mut self) {
        self.name.clear();
        self.phone.clear();
    }
}

/// Per-field error messages. An empty string means the field is fine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    pub name: String,
    pub phone: String,
}

impl ValidationErrors {
    pub fn get(&self, field: FieldId) -> Option<&str> {
        let message = match field {
            FieldId::Name => &self.name,
            FieldId::Phone => &self.phone,
        };
        (!message.is_empty()).then_some(message.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.phone.is_empty()
    }

    pub fn clear(&mut self) {
        self.name.clear();
        self.phone.clear();
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    pub valid: bool,
    pub errors: ValidationErrors,
}

/// Validate the form fields. Never fails; always produces a result.
pub fn validate(fields: &FormFields) -> ValidationResult {
    let mut errors = ValidationErrors::default();

    if fields.name.trim().is_empty() {
        errors.name = NAME_REQUIRED.to_string();
    }

    if fields.phone.trim().is_empty() {
        errors.phone = PHONE_REQUIRED.to_string();
    } else if !phone_pattern().is_match(&fields.normalized_phone()) {
        errors.phone = PHONE_INVALID.to_string();
    }

    ValidationResult {
        valid: errors.is_empty(),
        errors,
    }
}
