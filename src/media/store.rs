// SPDX-License-Identifier: MPL-2.0
//! Decoded images alongside their load states.

use super::image::ImageData;
use crate::domain::asset::{AssetRegistry, AssetSource, LoadState};
use crate::error::AssetError;
use std::collections::HashMap;

/// What the UI should draw for an image reference.
#[derive(Debug, Clone, Copy)]
pub enum AssetView<'a> {
    /// Never requested.
    Unknown,
    Pending,
    Loaded(&'a ImageData),
    Failed(&'a AssetError),
}

/// Load registry plus the payload of every resolved image.
#[derive(Debug, Default)]
pub struct AssetStore {
    registry: AssetRegistry,
    images: HashMap<String, ImageData>,
    errors: HashMap<String, AssetError>,
}

impl AssetStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts loading `reference` unless it is already known.
    ///
    /// Returns the source to fetch for a newly tracked reference.
    pub fn request(&mut self, reference: &str) -> Option<AssetSource> {
        self.registry
            .start_load(reference)
            .then(|| AssetSource::parse(reference))
    }

    /// Records the outcome of a fetch. Late or duplicate outcomes are dropped.
    pub fn resolve(&mut self, reference: &str, outcome: Result<ImageData, AssetError>) {
        match outcome {
            Ok(data) => {
                if self.registry.on_loaded(reference) {
                    log::debug!("image ready: {}", reference);
                    self.images.insert(reference.to_string(), data);
                }
            }
            Err(err) => {
                if self.registry.on_failed(reference) {
                    log::warn!("image {} failed: {}", reference, err);
                    self.errors.insert(reference.to_string(), err);
                }
            }
        }
    }

    #[must_use]
    pub fn view(&self, reference: &str) -> AssetView<'_> {
        match self.registry.state(reference) {
            None => AssetView::Unknown,
            Some(LoadState::Pending) => AssetView::Pending,
            Some(LoadState::Loaded) => self
                .images
                .get(reference)
                .map_or(AssetView::Pending, AssetView::Loaded),
            Some(LoadState::Failed) => self
                .errors
                .get(reference)
                .map_or(AssetView::Pending, AssetView::Failed),
        }
    }

    #[must_use]
    pub fn state(&self, reference: &str) -> Option<LoadState> {
        self.registry.state(reference)
    }

    #[must_use]
    pub fn has_pending(&self) -> bool {
        self.registry.has_pending()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiny_svg() -> ImageData {
        super::super::image::decode(
            br#"<svg xmlns="http://www.w3.org/2000/svg" width="2" height="2"/>"#.to_vec(),
            None,
        )
        .expect("svg should decode")
    }

    #[test]
    fn request_returns_source_once() {
        let mut store = AssetStore::new();
        assert_eq!(
            store.request("/img/a.png"),
            Some(AssetSource::Local("img/a.png".into()))
        );
        assert_eq!(store.request("/img/a.png"), None);
        assert!(matches!(store.view("/img/a.png"), AssetView::Pending));
        assert!(store.has_pending());
    }

    #[test]
    fn resolve_exposes_payload() {
        let mut store = AssetStore::new();
        store.request("icon.svg");
        store.resolve("icon.svg", Ok(tiny_svg()));
        match store.view("icon.svg") {
            AssetView::Loaded(data) => assert_eq!(data.width(), 2),
            other => panic!("expected loaded, got {other:?}"),
        }
        assert!(!store.has_pending());
    }

    #[test]
    fn failure_is_terminal_and_kept() {
        let mut store = AssetStore::new();
        store.request("a.png");
        store.resolve("a.png", Err(AssetError::Http(404)));
        store.resolve("a.png", Ok(tiny_svg()));
        match store.view("a.png") {
            AssetView::Failed(err) => assert_eq!(err, &AssetError::Http(404)),
            other => panic!("expected failed, got {other:?}"),
        }
    }

    #[test]
    fn outcome_for_unrequested_reference_is_ignored() {
        let mut store = AssetStore::new();
        store.resolve("ghost.png", Err(AssetError::TooLarge));
        assert!(matches!(store.view("ghost.png"), AssetView::Unknown));
        assert_eq!(store.state("ghost.png"), None);
    }
}
