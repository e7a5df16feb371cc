// SPDX-License-Identifier: MPL-2.0
//! Biography, timeline, and achievement records.

/// Person the portfolio is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub headline: &'static str,
    pub bio: &'static str,
    pub email: &'static str,
    pub location: &'static str,
    pub degree: &'static str,
    pub experience: &'static str,
    pub resume: &'static str,
    pub portrait: &'static str,
    pub site: &'static str,
}

/// Social networks with a link in the about section and the footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialKind {
    GitHub,
    LinkedIn,
    X,
    Instagram,
    Spotify,
}

impl SocialKind {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            SocialKind::GitHub => "GitHub",
            SocialKind::LinkedIn => "LinkedIn",
            SocialKind::X => "X",
            SocialKind::Instagram => "Instagram",
            SocialKind::Spotify => "Spotify",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub kind: SocialKind,
    pub url: &'static str,
}

/// One entry of the work or education timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelineEntry {
    pub title: &'static str,
    pub organization: &'static str,
    pub organization_url: Option<&'static str>,
    pub date: &'static str,
    pub content: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Achievement {
    pub title: &'static str,
    pub organization: &'static str,
    pub date: &'static str,
    pub description: &'static str,
}

/// Rotating hero tagline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Tagline {
    index: usize,
}

impl Tagline {
    /// Advances to the next tagline, wrapping after `count`.
    pub fn advance(&mut self, count: usize) {
        if count > 0 {
            self.index = (self.index + 1) % count;
        }
    }

    /// Returns the current tagline, if any.
    #[must_use]
    pub fn current<'a>(&self, taglines: &[&'a str]) -> Option<&'a str> {
        taglines.get(self.index % taglines.len().max(1)).copied()
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tagline_wraps_after_last_entry() {
        let taglines = ["a", "b", "c"];
        let mut tagline = Tagline::default();
        assert_eq!(tagline.current(&taglines), Some("a"));
        tagline.advance(taglines.len());
        tagline.advance(taglines.len());
        assert_eq!(tagline.current(&taglines), Some("c"));
        tagline.advance(taglines.len());
        assert_eq!(tagline.current(&taglines), Some("a"));
    }

    #[test]
    fn tagline_handles_empty_list() {
        let mut tagline = Tagline::default();
        tagline.advance(0);
        assert_eq!(tagline.index(), 0);
        assert_eq!(tagline.current(&[]), None);
    }

    #[test]
    fn social_labels_are_human_readable() {
        assert_eq!(SocialKind::GitHub.label(), "GitHub");
        assert_eq!(SocialKind::LinkedIn.label(), "LinkedIn");
    }
}
