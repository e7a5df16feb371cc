// SPDX-License-Identifier: MPL-2.0
//! Landing section: portrait, name, rotating tagline, calls to action.

use super::{page, Message, PageContext};
use crate::app::Section;
use crate::content::PROFILE;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, text, Column, Container, Row, Text};
use iced::{alignment, ContentFit, Element, Length, Theme};

pub struct ViewContext<'a> {
    pub page: PageContext<'a>,
    pub tagline: &'a str,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.page.i18n;

    let portrait = ctx
        .page
        .image(PROFILE.portrait)
        .width(Length::Fixed(sizing::PORTRAIT))
        .height(sizing::PORTRAIT)
        .fit(ContentFit::Contain)
        .fallback(initials(PROFILE.name))
        .view();

    let tagline = Text::new(ctx.tagline.to_string())
        .size(typography::TITLE_MD)
        .style(|_theme: &Theme| text::Style {
            color: Some(palette::PRIMARY_500),
        });

    let actions = Row::new()
        .spacing(spacing::SM)
        .push(
            button(Text::new(i18n.tr("hero-resume-button")))
                .on_press(Message::OpenLink(PROFILE.resume.to_string()))
                .padding([spacing::XS, spacing::MD])
                .style(styles::button::primary),
        )
        .push(
            button(Text::new(i18n.tr("hero-contact-button")))
                .on_press(Message::Navigate(Section::Contact))
                .padding([spacing::XS, spacing::MD])
                .style(styles::button::unselected),
        );

    let intro = Column::new()
        .spacing(spacing::SM)
        .width(Length::Fill)
        .push(Text::new(i18n.tr("hero-greeting")).size(typography::TITLE_SM))
        .push(Text::new(PROFILE.name).size(typography::DISPLAY))
        .push(tagline)
        .push(Text::new(PROFILE.headline).size(typography::BODY_LG))
        .push(actions);

    let body = Row::new()
        .spacing(spacing::XL)
        .align_y(alignment::Vertical::Center)
        .push(intro)
        .push(Container::new(portrait).width(Length::Shrink));

    page(body)
}

/// First letter of each word, used when the portrait cannot load.
fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .collect()
}
