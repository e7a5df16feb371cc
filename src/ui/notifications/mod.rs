// SPDX-License-Identifier: MPL-2.0
//! Toast notifications for feedback that should not block the page.
//!
//! - [`Notification`] carries a severity and an i18n message key
//! - [`Manager`] queues toasts and expires them on tick
//! - [`Toast`] renders them in the bottom-right corner
//!
//! ```ignore
//! let mut manager = Manager::new();
//! manager.push(Notification::error("notification-mail-launch-error"));
//! let overlay = Toast::view_overlay(&manager, &i18n).map(Message::Notification);
//! ```
//!
//! Success and info toasts last 3s, warnings 5s, errors stay until dismissed.
//! At most three are visible; the rest wait in a queue.

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, Severity};
pub use toast::Toast;
