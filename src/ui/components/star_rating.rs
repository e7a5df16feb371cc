// SPDX-License-Identifier: MPL-2.0
//! Five-star rating row.

use crate::domain::skill::Rating;
use crate::ui::design_tokens::{opacity, palette, typography};
use iced::widget::{text, Row, Text};
use iced::{Color, Element, Theme};

const STAR: &str = "★";

/// Full stars in gold, the half star dimmed, empty stars gray.
pub fn star_rating<'a, Message: 'a>(rating: Rating) -> Element<'a, Message> {
    let stars = rating.stars();
    let mut row = Row::new().spacing(2.0);

    for _ in 0..stars.full {
        row = row.push(star(palette::STAR_500));
    }
    if stars.half {
        row = row.push(star(Color {
            a: opacity::OVERLAY_MEDIUM,
            ..palette::STAR_500
        }));
    }
    for _ in 0..stars.empty {
        row = row.push(star(palette::GRAY_400));
    }

    row.into()
}

fn star<'a, Message: 'a>(color: Color) -> Element<'a, Message> {
    Text::new(STAR)
        .size(typography::BODY_LG)
        .style(move |_theme: &Theme| text::Style { color: Some(color) })
        .into()
}
