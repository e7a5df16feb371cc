// SPDX-License-Identifier: MPL-2.0
//! Category filtering for the project gallery.
//!
//! The filter only stores the active tag. The visible list is always derived
//! from the authored records, so it can never drift from them.

use super::project::ProjectRecord;

/// Sentinel tag that matches every project.
pub const ALL: &str = "all";

/// Active category of the gallery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryFilter {
    active: String,
}

impl Default for CategoryFilter {
    fn default() -> Self {
        Self {
            active: ALL.to_string(),
        }
    }
}

impl CategoryFilter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the active category.
    ///
    /// Always succeeds. An unknown tag is accepted and simply matches nothing.
    /// Returns `true` if the active category changed.
    pub fn select(&mut self, tag: &str) -> bool {
        if self.active == tag {
            return false;
        }
        self.active = tag.to_string();
        true
    }

    /// Returns the active category tag.
    #[must_use]
    pub fn active(&self) -> &str {
        &self.active
    }

    /// Returns `true` if the filter shows every project.
    #[must_use]
    pub fn is_all(&self) -> bool {
        self.active == ALL
    }

    /// Returns `true` if the project is visible under this filter.
    #[must_use]
    pub fn matches(&self, project: &ProjectRecord) -> bool {
        self.is_all() || project.has_category(&self.active)
    }

    /// Derives the visible projects, keeping the authored order.
    #[must_use]
    pub fn apply<'a>(&self, projects: &'a [ProjectRecord]) -> Vec<&'a ProjectRecord> {
        projects.iter().filter(|p| self.matches(p)).collect()
    }
}
