// SPDX-License-Identifier: MPL-2.0
//! Rated skill cards and the other-technologies cloud.

use super::{page, Message, PageContext};
use crate::content::{OTHER_SKILLS, SKILLS};
use crate::domain::project::split_chips;
use crate::domain::skill::Skill;
use crate::ui::components::{chip_cloud, section_header, star_rating};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles::container as container_styles;
use iced::widget::{Column, Container, Row, Text};
use iced::{alignment, ContentFit, Element, Length};

pub fn view(ctx: PageContext<'_>) -> Element<'_, Message> {
    let i18n = ctx.i18n;

    let cards = SKILLS
        .iter()
        .fold(Row::new().spacing(spacing::MD), |row, skill| {
            row.push(skill_card(ctx, skill))
        })
        .wrap()
        .vertical_spacing(spacing::MD);

    let content = Column::new()
        .spacing(spacing::LG)
        .push(section_header(i18n.tr("skills-title")))
        .push(cards)
        .push(Text::new(i18n.tr("skills-other")).size(typography::TITLE_MD))
        .push(chip_cloud(&split_chips(OTHER_SKILLS)));

    page(content)
}

fn skill_card<'a>(ctx: PageContext<'a>, skill: &'static Skill) -> Element<'a, Message> {
    let rating = skill.rating();
    let rating_label = format!("{:.1}", rating.value());

    let icon = ctx
        .image(skill.icon)
        .width(Length::Fixed(sizing::ICON_XL))
        .height(sizing::ICON_XL)
        .fit(ContentFit::Contain)
        .view();

    Container::new(
        Column::new()
            .spacing(spacing::XS)
            .align_x(alignment::Horizontal::Center)
            .push(icon)
            .push(Text::new(skill.name).size(typography::BODY_LG))
            .push(star_rating(rating))
            .push(
                Text::new(
                    ctx.i18n
                        .tr_with_args("skills-rating", &[("rating", &rating_label)]),
                )
                .size(typography::CAPTION),
            ),
    )
    .width(Length::Fixed(sizing::SKILL_CARD_WIDTH))
    .padding(spacing::MD)
    .align_x(alignment::Horizontal::Center)
    .style(container_styles::card)
    .into()
}
