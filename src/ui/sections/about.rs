// SPDX-License-Identifier: MPL-2.0
//! Biography, detail grid, and social links.

use super::{grid, link_button, page, Message, PageContext};
use crate::content::{PROFILE, SOCIAL_LINKS};
use crate::ui::components::section_header;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles::container as container_styles;
use iced::widget::{Column, Container, Row, Text};
use iced::{Element, Length};

pub fn view(ctx: PageContext<'_>) -> Element<'_, Message> {
    let i18n = ctx.i18n;

    let details = [
        ("about-degree", PROFILE.degree),
        ("about-experience", PROFILE.experience),
        ("about-email", PROFILE.email),
        ("about-location", PROFILE.location),
    ]
    .into_iter()
    .map(|(key, value)| detail(i18n.tr(key), value))
    .collect();

    let socials = SOCIAL_LINKS.iter().fold(
        Row::new().spacing(spacing::MD),
        |row, link| row.push(link_button(link.kind.label(), Message::OpenLink(link.url.into()))),
    );

    let content = Column::new()
        .spacing(spacing::LG)
        .push(section_header(i18n.tr("about-title")))
        .push(Text::new(PROFILE.bio).size(typography::BODY_LG))
        .push(grid(details, 2))
        .push(
            Container::new(
                Column::new()
                    .spacing(spacing::XS)
                    .push(Text::new(i18n.tr("about-social-title")).size(typography::TITLE_SM))
                    .push(socials),
            )
            .width(Length::Fill)
            .padding(spacing::MD)
            .style(container_styles::panel),
        );

    page(content)
}

fn detail<'a>(label: String, value: &'static str) -> Element<'a, Message> {
    Container::new(
        Column::new()
            .spacing(spacing::XXS)
            .push(Text::new(label).size(typography::CAPTION))
            .push(Text::new(value).size(typography::BODY_LG)),
    )
    .width(Length::Fill)
    .padding(spacing::MD)
    .style(container_styles::card)
    .into()
}
