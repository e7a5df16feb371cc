// SPDX-License-Identifier: MPL-2.0
//! Per-image load tracking.
//!
//! Each image reference moves once from [`LoadState::Pending`] to a terminal
//! state. There is no retry and no timeout: a fetch that never reports back
//! keeps its placeholder.

use std::collections::HashMap;

/// Load state of a single image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Pending,
    Loaded,
    Failed,
}

impl LoadState {
    #[must_use]
    pub fn is_resolved(self) -> bool {
        !matches!(self, LoadState::Pending)
    }
}

/// Where an image reference points to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AssetSource {
    /// Path relative to the configured image directory.
    Local(String),
    /// Absolute `http(s)` URL.
    Remote(String),
}

impl AssetSource {
    /// Classifies an image reference.
    ///
    /// Leading slashes of local references are dropped so that site-style
    /// paths (`/img/a.png`) resolve inside the image directory.
    #[must_use]
    pub fn parse(reference: &str) -> Self {
        if reference.starts_with("https://") || reference.starts_with("http://") {
            AssetSource::Remote(reference.to_string())
        } else {
            AssetSource::Local(reference.trim_start_matches('/').to_string())
        }
    }
}

/// Load states keyed by image reference.
#[derive(Debug, Clone, Default)]
pub struct AssetRegistry {
    states: HashMap<String, LoadState>,
}

impl AssetRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts tracking `key` as pending.
    ///
    /// Returns `true` when the key was not tracked yet and a fetch should be
    /// issued. Already known keys keep their state.
    pub fn start_load(&mut self, key: &str) -> bool {
        if self.states.contains_key(key) {
            return false;
        }
        self.states.insert(key.to_string(), LoadState::Pending);
        true
    }

    /// Marks a pending key as loaded. Returns `true` on transition.
    pub fn on_loaded(&mut self, key: &str) -> bool {
        self.resolve(key, LoadState::Loaded)
    }

    /// Marks a pending key as failed. Returns `true` on transition.
    pub fn on_failed(&mut self, key: &str) -> bool {
        self.resolve(key, LoadState::Failed)
    }

    fn resolve(&mut self, key: &str, outcome: LoadState) -> bool {
        match self.states.get_mut(key) {
            Some(state @ LoadState::Pending) => {
                *state = outcome;
                true
            }
            _ => false,
        }
    }

    /// Returns the state of `key`, or `None` if it was never requested.
    #[must_use]
    pub fn state(&self, key: &str) -> Option<LoadState> {
        self.states.get(key).copied()
    }

    #[must_use]
    pub fn has_pending(&self) -> bool {
        self.states.values().any(|state| *state == LoadState::Pending)
    }

    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.states
            .values()
            .filter(|state| **state == LoadState::Pending)
            .count()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}
