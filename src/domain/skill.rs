// SPDX-License-Identifier: MPL-2.0
//! Skill ratings rendered as five stars.

/// Number of stars shown for every rating.
pub const MAX_STARS: u8 = 5;

/// A rating out of [`MAX_STARS`] in half-star steps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rating(f32);

impl Rating {
    /// Creates a rating, clamped to `0..=5` and rounded to the nearest half.
    #[must_use]
    pub fn new(value: f32) -> Self {
        let clamped = if value.is_nan() {
            0.0
        } else {
            value.clamp(0.0, f32::from(MAX_STARS))
        };
        Self((clamped * 2.0).round() / 2.0)
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Splits the rating into full, half, and empty stars.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn stars(self) -> StarBreakdown {
        // value is in 0..=5 with half steps, so halves fits in u8
        let halves = (self.0 * 2.0) as u8;
        let full = halves / 2;
        let half = halves % 2 == 1;
        StarBreakdown {
            full,
            half,
            empty: MAX_STARS - full - u8::from(half),
        }
    }
}

/// Star layout for a rating. Always totals [`MAX_STARS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StarBreakdown {
    pub full: u8,
    pub half: bool,
    pub empty: u8,
}

/// A rated skill card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Skill {
    pub name: &'static str,
    pub rating: f32,
    /// Icon reference (usually a remote SVG).
    pub icon: &'static str,
}

impl Skill {
    #[must_use]
    pub fn rating(&self) -> Rating {
        Rating::new(self.rating)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn total(stars: StarBreakdown) -> u8 {
        stars.full + u8::from(stars.half) + stars.empty
    }

    #[test]
    fn whole_ratings_have_no_half_star() {
        let stars = Rating::new(4.0).stars();
        assert_eq!(stars, StarBreakdown { full: 4, half: false, empty: 1 });
    }

    #[test]
    fn half_ratings_show_half_star() {
        let stars = Rating::new(3.5).stars();
        assert_eq!(stars, StarBreakdown { full: 3, half: true, empty: 1 });
    }

    #[test]
    fn out_of_range_ratings_are_clamped() {
        assert_eq!(Rating::new(7.0).value(), 5.0);
        assert_eq!(Rating::new(-1.0).value(), 0.0);
        assert_eq!(Rating::new(f32::NAN).value(), 0.0);
    }

    #[test]
    fn ratings_round_to_nearest_half() {
        assert_eq!(Rating::new(3.3).value(), 3.5);
        assert_eq!(Rating::new(3.2).value(), 3.0);
    }

    #[test]
    fn breakdown_always_totals_five_stars() {
        for tenth in 0..=50 {
            let rating = Rating::new(tenth as f32 / 10.0);
            assert_eq!(total(rating.stars()), MAX_STARS, "rating {}", rating.value());
        }
    }
}
