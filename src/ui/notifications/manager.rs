// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` handles queuing, display timing, and dismissal of notifications.
//! It limits the number of visible toasts and owns one abortable expiry timer
//! per visible notification. Dropping a timer handle cancels the timer.

use super::notification::{Notification, NotificationId, Severity};
use iced::task::{self, Task};
use std::collections::{HashMap, VecDeque};
use std::fmt;
use std::time::Duration;

/// Maximum number of notifications visible at once.
pub const MAX_VISIBLE: usize = 3;

/// Messages for notification state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// Dismiss a specific notification by ID (close button).
    Dismiss(NotificationId),
    /// The display timer of a notification ran out.
    Expired(NotificationId),
}

/// Manages the notification queue and visible notifications.
#[derive(Default)]
pub struct Manager {
    /// Currently visible notifications (newest first).
    visible: VecDeque<Notification>,
    /// Queued notifications waiting to be displayed.
    queue: VecDeque<Notification>,
    /// Pending expiry timers, aborted when dropped.
    timers: HashMap<NotificationId, task::Handle>,
}

impl fmt::Debug for Manager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Manager")
            .field("visible", &self.visible)
            .field("queue", &self.queue)
            .field("timers", &self.timers.len())
            .finish()
    }
}

impl Manager {
    /// Creates a new empty notification manager.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes a new notification to be displayed.
    ///
    /// If fewer than `MAX_VISIBLE` notifications are showing, it's displayed
    /// immediately and its expiry timer starts. Otherwise, it's added to the
    /// queue and its timer starts once it becomes visible.
    pub fn push(&mut self, notification: Notification) -> Task<Message> {
        match notification.severity() {
            Severity::Warning => tracing::warn!(text = ?notification.text(), "Notification"),
            Severity::Error => tracing::error!(text = ?notification.text(), "Notification"),
            Severity::Success => tracing::debug!(text = ?notification.text(), "Notification"),
        }

        if self.visible.len() < MAX_VISIBLE {
            let task = self.schedule(&notification);
            self.visible.push_front(notification);
            task
        } else {
            self.queue.push_back(notification);
            Task::none()
        }
    }

    /// Dismisses a notification by its ID.
    ///
    /// Returns `true` if the notification was found and removed, along with
    /// the timers of any notifications promoted from the queue.
    pub fn dismiss(&mut self, id: NotificationId) -> (bool, Task<Message>) {
        self.timers.remove(&id);

        if let Some(pos) = self.visible.iter().position(|n| n.id() == id) {
            self.visible.remove(pos);
            return (true, self.promote_from_queue());
        }

        if let Some(pos) = self.queue.iter().position(|n| n.id() == id) {
            self.queue.remove(pos);
            return (true, Task::none());
        }

        (false, Task::none())
    }

    /// Handles a notification message.
    pub fn handle_message(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Dismiss(id) | Message::Expired(id) => self.dismiss(id).1,
        }
    }

    /// Returns the currently visible notifications.
    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.visible.iter()
    }

    /// Returns the number of visible notifications.
    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    /// Returns the number of queued notifications.
    #[must_use]
    pub fn queued_count(&self) -> usize {
        self.queue.len()
    }

    /// Returns the number of running expiry timers.
    #[must_use]
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// Returns whether there are any notifications (visible or queued).
    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.visible.is_empty() || !self.queue.is_empty()
    }

    /// Starts the expiry timer for `notification`, if it has a display duration.
    fn schedule(&mut self, notification: &Notification) -> Task<Message> {
        let Some(duration) = notification.display_duration() else {
            return Task::none();
        };

        let id = notification.id();
        let (task, handle) =
            Task::perform(expire_after(duration), move |()| Message::Expired(id)).abortable();
        self.timers.insert(id, handle.abort_on_drop());
        task
    }

    /// Promotes notifications from the queue while there's space.
    fn promote_from_queue(&mut self) -> Task<Message> {
        let mut tasks = Vec::new();
        while self.visible.len() < MAX_VISIBLE {
            if let Some(notification) = self.queue.pop_front() {
                tasks.push(self.schedule(&notification));
                self.visible.push_back(notification);
            } else {
                break;
            }
        }
        Task::batch(tasks)
    }
}

/// Completes once `duration` has elapsed.
pub(crate) async fn expire_after(duration: Duration) {
    tokio::time::sleep(duration).await;
}
