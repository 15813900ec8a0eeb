//! Notification display surface

mod toast;
mod traits;

pub use toast::{Toast, ToastCenter};
pub use traits::{Notification, Notifier, Variant};

#[cfg(test)]
pub use traits::MockNotifier;
