//! Notification payload and the trait for anything that can display it

use serde::{Deserialize, Serialize};

/// Visual weight of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    #[default]
    Default,
    Destructive,
}

/// A message for the user
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub description: String,
    /// Label of an optional action hint shown with the message
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    #[serde(default)]
    pub variant: Variant,
}

impl Notification {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            action: None,
            variant: Variant::Default,
        }
    }

    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            variant: Variant::Destructive,
            ..Self::new(title, description)
        }
    }

    pub fn with_action(mut self, action: impl Into<String>) -> Self {
        self.action = Some(action.into());
        self
    }
}

/// Display surface for notifications.
///
/// Fire and forget: there is no result and no delivery guarantee, so callers
/// must not depend on a notification being seen.
#[cfg_attr(test, mockall::automock)]
pub trait Notifier {
    fn notify(&mut self, notification: Notification);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_new_uses_default_variant() {
        let n = Notification::new("Title", "Body");
        assert_eq!(n.variant, Variant::Default);
        assert!(n.action.is_none());
    }

    #[test]
    fn test_destructive_variant() {
        let n = Notification::destructive("Oops", "Something is off");
        assert_eq!(n.variant, Variant::Destructive);
        assert_eq!(n.title, "Oops");
    }

    #[test]
    fn test_with_action() {
        let n = Notification::new("Title", "Body").with_action("Retry");
        assert_eq!(n.action.as_deref(), Some("Retry"));
    }

    #[test]
    fn test_serializes_variant_lowercase() {
        let n = Notification::destructive("Oops", "Body");
        let json = serde_json::to_string(&n).unwrap();
        assert!(json.contains(r#""variant":"destructive""#));
        assert!(!json.contains("action"));
    }

    #[test]
    fn test_deserialize_defaults() {
        let n: Notification =
            serde_json::from_str(r#"{"title": "Hi", "description": "There"}"#).unwrap();
        assert_eq!(n, Notification::new("Hi", "There"));
    }
}
