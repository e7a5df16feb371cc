// SPDX-License-Identifier: MPL-2.0
//! Reusable UI pieces shared across sections.
//!
//! - [`asset_frame`] - image slot with spinner and failure fallback
//! - [`chips`] - technology chips, `+N` overflow and tag clouds
//! - [`modal`] - sheet over a dimmed, input-blocking backdrop
//! - [`section_header`] - section titles
//! - [`star_rating`] - skill stars

pub mod asset_frame;
pub mod chips;
pub mod modal;
pub mod section_header;
pub mod star_rating;

pub use asset_frame::AssetFrame;
pub use chips::{chip, chip_cloud, chip_row};
pub use modal::modal;
pub use section_header::section_header;
pub use star_rating::star_rating;
