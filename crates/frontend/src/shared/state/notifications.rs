use leptos::prelude::*;
use uuid::Uuid;

use crate::shared::error::UiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: Uuid,
    pub level: NotificationLevel,
    pub message: String,
}

/// Dismissible messages shown in the top-right corner
#[derive(Clone, Copy)]
pub struct Notifications {
    items: RwSignal<Vec<Notification>>,
}

impl Notifications {
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(vec![]),
        }
    }

    pub fn push(&self, level: NotificationLevel, message: impl Into<String>) -> Uuid {
        let notification = Notification {
            id: Uuid::new_v4(),
            level,
            message: message.into(),
        };
        let id = notification.id;
        self.items.update(|items| items.push(notification));
        id
    }

    /// Surface a failed operation. Validation errors also render inline,
    /// the notification only carries their summary.
    pub fn notify_error(&self, err: &UiError) -> Uuid {
        log::warn!("operation failed: {}", err);
        self.push(NotificationLevel::Error, err.to_string())
    }

    pub fn dismiss(&self, id: Uuid) {
        // the notification host may outlive an auto-dismiss timer
        let _ = self.items.try_update(|items| items.retain(|n| n.id != id));
    }

    pub fn items(&self) -> Vec<Notification> {
        self.items.get()
    }
}

impl Default for Notifications {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_notifications() -> Notifications {
    use_context::<Notifications>().expect("Notifications not provided in context")
}
