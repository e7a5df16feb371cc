// SPDX-License-Identifier: MPL-2.0
//! Work and education timelines.

use super::{link_button, page, Message, PageContext};
use crate::content::{EDUCATION, WORK};
use crate::domain::profile::TimelineEntry;
use crate::ui::components::section_header;
use crate::ui::design_tokens::{palette, radius, sizing, spacing, typography};
use crate::ui::styles::container as container_styles;
use iced::widget::{container, text, Column, Container, Row, Space, Text};
use iced::{Background, Border, Element, Length, Theme};

pub fn view(ctx: PageContext<'_>) -> Element<'_, Message> {
    let i18n = ctx.i18n;

    let content = Column::new()
        .spacing(spacing::LG)
        .push(section_header(i18n.tr("journey-title")))
        .push(timeline(i18n.tr("journey-work"), WORK))
        .push(timeline(i18n.tr("journey-education"), EDUCATION));

    page(content)
}

fn timeline<'a>(title: String, entries: &'static [TimelineEntry]) -> Element<'a, Message> {
    entries.iter().fold(
        Column::new()
            .spacing(spacing::SM)
            .push(Text::new(title).size(typography::TITLE_MD)),
        |column, entry| column.push(entry_card(entry)),
    )
    .into()
}

fn entry_card<'a>(entry: &'static TimelineEntry) -> Element<'a, Message> {
    let organization: Element<'a, Message> = match entry.organization_url {
        Some(url) => link_button(entry.organization, Message::OpenLink(url.to_string())),
        None => Text::new(entry.organization).size(typography::BODY).into(),
    };

    let date = Text::new(entry.date)
        .size(typography::CAPTION)
        .style(|_theme: &Theme| text::Style {
            color: Some(palette::GRAY_400),
        });

    let body = Column::new()
        .spacing(spacing::XXS)
        .width(Length::Fill)
        .push(Text::new(entry.title).size(typography::TITLE_SM))
        .push(organization)
        .push(date)
        .push(Text::new(entry.content).size(typography::BODY));

    let row = Row::new()
        .spacing(spacing::MD)
        .push(marker())
        .push(body);

    Container::new(row)
        .width(Length::Fill)
        .padding(spacing::MD)
        .style(container_styles::card)
        .into()
}

fn marker<'a>() -> Element<'a, Message> {
    Container::new(Space::new())
        .width(Length::Fixed(sizing::TIMELINE_MARKER))
        .height(Length::Fixed(sizing::TIMELINE_MARKER))
        .style(|_theme: &Theme| container::Style {
            background: Some(Background::Color(palette::PRIMARY_500)),
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            ..Default::default()
        })
        .into()
}
