// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Contact**: Recipient address and submission timing
//! - **Gallery**: Grid layout bounds
//! - **Assets**: Image directory and remote fetch limits
//! - **Hero**: Tagline rotation

// ==========================================================================
// Contact Defaults
// ==========================================================================

/// Address the generated `mailto:` link points to.
pub const DEFAULT_CONTACT_RECIPIENT: &str = "vsaravind01@gmail.com";

/// Delay between a valid submission and opening the mail client (ms).
pub const DEFAULT_SUBMIT_DELAY_MS: u64 = 800;

/// Maximum accepted submit delay (ms).
pub const MAX_SUBMIT_DELAY_MS: u64 = 10_000;

/// Time the success banner stays before the form returns to idle (seconds).
pub const DEFAULT_SUCCESS_RESET_SECS: u64 = 5;

/// Minimum success banner duration (seconds).
pub const MIN_SUCCESS_RESET_SECS: u64 = 1;

/// Maximum success banner duration (seconds).
pub const MAX_SUCCESS_RESET_SECS: u64 = 60;

// ==========================================================================
// Gallery Defaults
// ==========================================================================

/// Number of tiles per gallery row.
pub const DEFAULT_GALLERY_COLUMNS: u16 = 3;

/// Minimum tiles per row.
pub const MIN_GALLERY_COLUMNS: u16 = 1;

/// Maximum tiles per row.
pub const MAX_GALLERY_COLUMNS: u16 = 6;

/// Technologies shown on a gallery tile before the `+N` chip.
pub const GALLERY_VISIBLE_CHIPS: usize = 2;

// ==========================================================================
// Asset Defaults
// ==========================================================================

/// Directory local image references resolve against, relative to the
/// working directory.
pub const DEFAULT_IMAGE_DIR: &str = "public";

/// Whether remote images (skill icons, GitHub previews) are fetched.
pub const DEFAULT_FETCH_REMOTE: bool = true;

/// Largest accepted image payload in bytes.
pub const MAX_ASSET_BYTES: usize = 16 * 1024 * 1024;

/// Maximum number of HTTP redirects followed for remote images.
pub const MAX_REDIRECTS: usize = 10;

// ==========================================================================
// Hero Defaults
// ==========================================================================

/// Interval between tagline changes (seconds).
pub const TAGLINE_ROTATION_SECS: u64 = 3;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(DEFAULT_SUBMIT_DELAY_MS <= MAX_SUBMIT_DELAY_MS);

    assert!(MIN_SUCCESS_RESET_SECS > 0);
    assert!(MAX_SUCCESS_RESET_SECS >= MIN_SUCCESS_RESET_SECS);
    assert!(DEFAULT_SUCCESS_RESET_SECS >= MIN_SUCCESS_RESET_SECS);
    assert!(DEFAULT_SUCCESS_RESET_SECS <= MAX_SUCCESS_RESET_SECS);

    assert!(MIN_GALLERY_COLUMNS > 0);
    assert!(MAX_GALLERY_COLUMNS >= MIN_GALLERY_COLUMNS);
    assert!(DEFAULT_GALLERY_COLUMNS >= MIN_GALLERY_COLUMNS);
    assert!(DEFAULT_GALLERY_COLUMNS <= MAX_GALLERY_COLUMNS);
    assert!(GALLERY_VISIBLE_CHIPS > 0);

    assert!(MAX_ASSET_BYTES > 0);
    assert!(MAX_REDIRECTS > 0);
    assert!(TAGLINE_ROTATION_SECS > 0);
};
