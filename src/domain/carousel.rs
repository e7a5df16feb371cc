// SPDX-License-Identifier: MPL-2.0
//! Focused-index selector backing the gallery modal.
//!
//! The carousel snapshots the visible list when it opens. Indices are
//! positions in that snapshot, so the owner must [`Carousel::close`] it when
//! the underlying list changes.

/// Modal carousel state: closed, or open on a non-empty item list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Carousel<T> {
    items: Vec<T>,
    focused: Option<usize>,
}

impl<T> Default for Carousel<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            focused: None,
        }
    }
}

impl<T: PartialEq> Carousel<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens the carousel over `items`, focused on `item`.
    ///
    /// Falls back to index 0 when `item` is not part of the list. Opening on an
    /// empty list leaves the carousel closed. Returns `true` if it is open.
    pub fn open(&mut self, items: Vec<T>, item: &T) -> bool {
        if items.is_empty() {
            self.close();
            return false;
        }
        let index = items.iter().position(|candidate| candidate == item).unwrap_or(0);
        self.items = items;
        self.focused = Some(index);
        true
    }
}

impl<T> Carousel<T> {
    /// Clears the focus and drops the snapshot.
    pub fn close(&mut self) {
        self.items.clear();
        self.focused = None;
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.focused.is_some()
    }

    /// Moves focus forward, wrapping past the last item.
    ///
    /// No-op with one item or fewer.
    pub fn next(&mut self) {
        if let Some(index) = self.focused {
            if self.items.len() > 1 {
                self.focused = Some((index + 1) % self.items.len());
            }
        }
    }

    /// Moves focus backward, wrapping before the first item.
    ///
    /// No-op with one item or fewer.
    pub fn previous(&mut self) {
        if let Some(index) = self.focused {
            let len = self.items.len();
            if len > 1 {
                self.focused = Some((index + len - 1) % len);
            }
        }
    }

    /// Focuses `index` directly, clamped to the last item.
    pub fn jump(&mut self, index: usize) {
        if self.focused.is_some() && !self.items.is_empty() {
            self.focused = Some(index.min(self.items.len() - 1));
        }
    }

    #[must_use]
    pub fn focused_index(&self) -> Option<usize> {
        self.focused
    }

    #[must_use]
    pub fn focused(&self) -> Option<&T> {
        self.focused.and_then(|index| self.items.get(index))
    }

    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
