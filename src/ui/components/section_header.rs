// SPDX-License-Identifier: MPL-2.0
//! Section title with an accent underline.

use crate::ui::design_tokens::{palette, radius, spacing, typography};
use iced::widget::{container, Column, Container, Space, Text};
use iced::{alignment, Background, Border, Element, Length};

const UNDERLINE_WIDTH: f32 = 64.0;
const UNDERLINE_HEIGHT: f32 = 4.0;

pub fn section_header<'a, Message: 'a>(title: String) -> Element<'a, Message> {
    let underline = Container::new(Space::new())
        .width(Length::Fixed(UNDERLINE_WIDTH))
        .height(Length::Fixed(UNDERLINE_HEIGHT))
        .style(|_theme| container::Style {
            background: Some(Background::Color(palette::PRIMARY_500)),
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            ..Default::default()
        });

    Column::new()
        .spacing(spacing::XS)
        .align_x(alignment::Horizontal::Center)
        .width(Length::Fill)
        .push(Text::new(title).size(typography::TITLE_LG))
        .push(underline)
        .into()
}
