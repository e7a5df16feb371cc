// SPDX-License-Identifier: MPL-2.0
//! Achievements list.

use super::{page, Message, PageContext};
use crate::content::ACHIEVEMENTS;
use crate::ui::components::section_header;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles::container as container_styles;
use iced::widget::{text, Column, Container, Row, Space, Text};
use iced::{Element, Length, Theme};

pub fn view(ctx: PageContext<'_>) -> Element<'_, Message> {
    let cards = ACHIEVEMENTS.iter().fold(
        Column::new()
            .spacing(spacing::LG)
            .push(section_header(ctx.i18n.tr("honors-title"))),
        |column, achievement| {
            let heading = Row::new()
                .spacing(spacing::SM)
                .push(Text::new(achievement.title).size(typography::TITLE_SM))
                .push(Space::new().width(Length::Fill))
                .push(
                    Text::new(achievement.date)
                        .size(typography::CAPTION)
                        .style(|_theme: &Theme| text::Style {
                            color: Some(palette::GRAY_400),
                        }),
                );

            column.push(
                Container::new(
                    Column::new()
                        .spacing(spacing::XXS)
                        .push(heading)
                        .push(Text::new(achievement.organization).size(typography::BODY))
                        .push(Text::new(achievement.description).size(typography::BODY_SM)),
                )
                .width(Length::Fill)
                .padding(spacing::MD)
                .style(container_styles::card),
            )
        },
    );

    page(cards)
}
