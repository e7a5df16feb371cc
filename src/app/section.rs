// SPDX-License-Identifier: MPL-2.0
//! Page sections reachable from the navigation bar.

/// Sections the user can switch between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    Home,
    About,
    Journey,
    Honors,
    Projects,
    Skills,
    Gallery,
    Contact,
}

impl Section {
    /// Navbar order.
    pub const ALL: [Section; 8] = [
        Section::Home,
        Section::About,
        Section::Journey,
        Section::Honors,
        Section::Projects,
        Section::Skills,
        Section::Gallery,
        Section::Contact,
    ];

    /// Fluent key of the navbar label.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            Section::Home => "nav-home",
            Section::About => "nav-about",
            Section::Journey => "nav-journey",
            Section::Honors => "nav-honors",
            Section::Projects => "nav-projects",
            Section::Skills => "nav-skills",
            Section::Gallery => "nav-gallery",
            Section::Contact => "nav-contact",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navbar_order_starts_at_home_and_ends_at_contact() {
        assert_eq!(Section::ALL.first(), Some(&Section::Home));
        assert_eq!(Section::ALL.last(), Some(&Section::Contact));
        assert_eq!(Section::default(), Section::Home);
    }

    #[test]
    fn every_section_has_a_distinct_label_key() {
        let mut keys: Vec<&str> = Section::ALL.iter().map(|s| s.i18n_key()).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), Section::ALL.len());
    }
}
