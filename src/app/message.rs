// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::{AssetError, Error};
use crate::media::ImageData;
use crate::ui::navbar;
use crate::ui::notifications;
use crate::ui::sections::{self, contact, gallery, projects};
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// section messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    /// Shared messages of the static sections.
    Page(sections::Message),
    Gallery(gallery::Message),
    Projects(projects::Message),
    Contact(contact::Message),
    Notification(notifications::NotificationMessage),
    /// An image fetch finished.
    AssetLoaded {
        reference: String,
        result: Result<ImageData, AssetError>,
    },
    /// The delayed mail client launch finished.
    MailLaunched(Result<(), Error>),
    /// A plain link launch failed or succeeded.
    LinkLaunched(Result<(), Error>),
    /// Escape pressed.
    Dismiss,
    /// Left or right arrow pressed.
    Navigate(Direction),
    WindowResized(f32),
    /// Spinner, toast, and banner timers.
    Tick(Instant),
    RotateTagline,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_FOLIO_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
