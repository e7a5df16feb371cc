// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Asset(AssetError),
    /// The platform handler for a link could not be started.
    Launch(String),
}

/// Reasons an image could not be shown.
/// Used to provide user-friendly, localized error messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetError {
    /// Local file does not exist.
    NotFound(String),

    /// Remote server answered with a non-success status.
    Http(u16),

    /// Remote request failed before a response arrived.
    Network(String),

    /// Bytes arrived but are not a supported image.
    Decode(String),

    /// Payload exceeded the size limit.
    TooLarge,

    /// Remote fetching is turned off in the settings.
    Disabled,
}

impl AssetError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            AssetError::NotFound(_) => "error-asset-not-found",
            AssetError::Http(_) => "error-asset-http",
            AssetError::Network(_) => "error-asset-network",
            AssetError::Decode(_) => "error-asset-decode",
            AssetError::TooLarge => "error-asset-too-large",
            AssetError::Disabled => "error-asset-disabled",
        }
    }
}

impl fmt::Display for AssetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetError::NotFound(path) => write!(f, "File not found: {}", path),
            AssetError::Http(status) => write!(f, "HTTP status {}", status),
            AssetError::Network(msg) => write!(f, "Network error: {}", msg),
            AssetError::Decode(msg) => write!(f, "Unsupported image data: {}", msg),
            AssetError::TooLarge => write!(f, "Image exceeds size limit"),
            AssetError::Disabled => write!(f, "Remote images are disabled"),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Asset(e) => write!(f, "Asset Error: {}", e),
            Error::Launch(e) => write!(f, "Launch Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<AssetError> for Error {
    fn from(err: AssetError) -> Self {
        Error::Asset(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<reqwest::Error> for AssetError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => AssetError::Http(status.as_u16()),
            None => AssetError::Network(err.to_string()),
        }
    }
}

impl From<image_rs::ImageError> for AssetError {
    fn from(err: image_rs::ImageError) -> Self {
        AssetError::Decode(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn launch_error_formats_properly() {
        let err = Error::Launch("xdg-open missing".into());
        assert_eq!(format!("{}", err), "Launch Error: xdg-open missing");
    }

    #[test]
    fn asset_error_wraps_into_error() {
        let err: Error = AssetError::Http(404).into();
        assert!(matches!(err, Error::Asset(AssetError::Http(404))));
        assert!(format!("{}", err).contains("404"));
    }

    #[test]
    fn asset_error_i18n_keys() {
        assert_eq!(
            AssetError::NotFound("a.png".into()).i18n_key(),
            "error-asset-not-found"
        );
        assert_eq!(AssetError::Http(500).i18n_key(), "error-asset-http");
        assert_eq!(AssetError::Disabled.i18n_key(), "error-asset-disabled");
        assert_eq!(AssetError::TooLarge.i18n_key(), "error-asset-too-large");
    }

    #[test]
    fn decode_error_from_image_crate() {
        let err = image_rs::load_from_memory(b"definitely not an image")
            .map(|_| ())
            .map_err(AssetError::from);
        assert!(matches!(err, Err(AssetError::Decode(_))));
    }
}
