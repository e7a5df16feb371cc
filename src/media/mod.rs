// SPDX-License-Identifier: MPL-2.0
//! Image loading and platform hand-off.
//!
//! Images come from the configured image directory or over HTTP and are
//! decoded into iced handles. Links, including the contact `mailto:` link,
//! are passed to the desktop through a [`launcher::Launcher`].

pub mod image;
pub mod launcher;
pub mod loader;
pub mod mailto;
pub mod store;

pub use image::ImageData;
pub use launcher::{Launcher, RecordingLauncher, SystemLauncher};
pub use loader::LoaderSettings;
pub use mailto::mailto_uri;
pub use store::{AssetStore, AssetView};
