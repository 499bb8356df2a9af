//! User notifications (toasts).
//!
//! The simulator only needs a fire-and-forget [`Notifier`]. The browser
//! implementation, [`Toaster`], keeps the visible notifications in a signal
//! rendered by [`crate::components::ToastRegion`].

use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use leptos::*;

use crate::{Notification, NotificationLevel, MAX_NOTIFICATIONS, NOTIFICATION_TIMEOUT_MS};

/// Fire-and-forget user notification.
pub trait Notifier {
    fn notify(&self, level: NotificationLevel, message: &str);

    fn success(&self, message: &str) {
        self.notify(NotificationLevel::Success, message);
    }

    fn error(&self, message: &str) {
        self.notify(NotificationLevel::Error, message);
    }
}

/// Signal-backed toast queue with auto-dismiss.
#[derive(Clone)]
pub struct Toaster {
    notifications: RwSignal<Vec<Notification>>,
    next_id: Rc<Cell<u64>>,
}

impl Toaster {
    pub fn new() -> Self {
        Self {
            notifications: create_rw_signal(Vec::new()),
            next_id: Rc::new(Cell::new(0)),
        }
    }

    /// Visible notifications, oldest first.
    pub fn notifications(&self) -> Signal<Vec<Notification>> {
        self.notifications.into()
    }

    /// Remove a notification before its timeout.
    pub fn dismiss(&self, id: u64) {
        dismiss(self.notifications, id);
    }
}

impl Default for Toaster {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for Toaster {
    fn notify(&self, level: NotificationLevel, message: &str) {
        let id = self.next_id.get();
        self.next_id.set(id + 1);

        log::info!("{} {}", level.emoji(), message);

        self.notifications.update(|list| {
            push_bounded(
                list,
                Notification {
                    id,
                    level,
                    message: message.to_string(),
                },
            )
        });

        let notifications = self.notifications;
        Timeout::new(NOTIFICATION_TIMEOUT_MS, move || dismiss(notifications, id)).forget();
    }
}

fn dismiss(notifications: RwSignal<Vec<Notification>>, id: u64) {
    // The page may have been torn down before the timeout fired
    let _ = notifications.try_update(|list| remove_by_id(list, id));
}

/// Append `notification`, dropping the oldest beyond [`MAX_NOTIFICATIONS`].
fn push_bounded(list: &mut Vec<Notification>, notification: Notification) {
    list.push(notification);
    if list.len() > MAX_NOTIFICATIONS {
        list.drain(..list.len() - MAX_NOTIFICATIONS);
    }
}

/// Remove the notification with `id`, returning whether it was present.
fn remove_by_id(list: &mut Vec<Notification>, id: u64) -> bool {
    let before = list.len();
    list.retain(|n| n.id != id);
    list.len() != before
}
