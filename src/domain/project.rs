// SPDX-License-Identifier: MPL-2.0
//! Project records shown in the gallery and the showcase.
//!
//! Records are authored data: they are built once as `'static` values and
//! never mutated at runtime. Every view derives from them.

/// Host serving Open Graph preview cards for GitHub repositories.
const GITHUB_PREVIEW_HOST: &str = "https://opengraph.githubassets.com/1";

/// A gallery entry that can be filtered by category and opened in the modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectRecord {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    /// Local image path (relative to the image directory) or remote URL.
    pub image: &'static str,
    pub categories: &'static [&'static str],
    pub technologies: &'static [&'static str],
    pub github: Option<&'static str>,
    pub live: Option<&'static str>,
}

impl ProjectRecord {
    /// Returns `true` if this record carries the given category tag.
    #[must_use]
    pub fn has_category(&self, tag: &str) -> bool {
        self.categories.contains(&tag)
    }
}

/// A selectable gallery category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    pub tag: &'static str,
    pub label: &'static str,
}

/// A larger project card in the showcase section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShowcaseProject {
    pub title: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
    pub github: Option<&'static str>,
    pub live: Option<&'static str>,
    pub image: Option<&'static str>,
    pub featured: bool,
}

impl ShowcaseProject {
    /// Image to display for this project.
    ///
    /// An explicit image wins; otherwise the GitHub preview card of the
    /// repository is used. `None` means the title placeholder is shown.
    #[must_use]
    pub fn preview_image(&self) -> Option<String> {
        self.image
            .map(str::to_string)
            .or_else(|| self.github.and_then(github_preview_url))
    }
}

/// Builds the Open Graph preview URL for a GitHub repository link.
///
/// Returns `None` when the link does not contain a `github.com/<user>/<repo>`
/// path.
#[must_use]
pub fn github_preview_url(link: &str) -> Option<String> {
    let (_, path) = link.split_once("github.com/")?;
    let mut segments = path.split(['/', '?', '#']).filter(|s| !s.is_empty());
    let user = segments.next()?;
    let repo = segments.next()?;
    let repo = repo.strip_suffix(".git").unwrap_or(repo);
    if repo.is_empty() {
        return None;
    }
    Some(format!("{GITHUB_PREVIEW_HOST}/{user}/{repo}"))
}

/// Splits technologies into the chips shown on a card and an overflow count.
///
/// With `max = 2`, `["a", "b", "c", "d"]` yields `(["a", "b"], 2)` which the
/// view renders as `a`, `b`, `+2`.
#[must_use]
pub fn visible_chips<'a>(technologies: &'a [&'a str], max: usize) -> (&'a [&'a str], usize) {
    let shown = technologies.len().min(max);
    (&technologies[..shown], technologies.len() - shown)
}

/// Splits a pipe-delimited label into trimmed, non-empty chips.
#[must_use]
pub fn split_chips(text: &str) -> Vec<&str> {
    text.split('|')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .collect()
}
