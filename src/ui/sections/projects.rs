// SPDX-License-Identifier: MPL-2.0
//! Project showcase cards and their detail modal.

use super::{grid, link_button, page, PageContext};
use crate::content::SHOWCASE;
use crate::domain::project::ShowcaseProject;
use crate::i18n::fluent::I18n;
use crate::ui::components::{chip_cloud, chip_row, section_header};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, scrollable, Column, Container, Row, Space, Text};
use iced::{alignment, Element, Length};

/// Chips shown on a card before the `+N` overflow.
const CARD_CHIPS: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Open(usize),
    Close,
    OpenLink(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    OpenLink(String),
}

/// Which project, if any, is shown in the detail modal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct State {
    selected: Option<usize>,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::Open(index) => {
                // Unknown indices leave the modal closed.
                self.selected = (index < SHOWCASE.len()).then_some(index);
                Event::None
            }
            Message::Close => {
                self.selected = None;
                Event::None
            }
            Message::OpenLink(url) => Event::OpenLink(url),
        }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    #[must_use]
    pub fn selected(&self) -> Option<&'static ShowcaseProject> {
        self.selected.and_then(|index| SHOWCASE.get(index))
    }

    pub fn view<'a>(&self, ctx: PageContext<'a>) -> Element<'a, Message> {
        let cards = SHOWCASE
            .iter()
            .enumerate()
            .map(|(index, project)| card(ctx, index, project))
            .collect();

        let content = Column::new()
            .spacing(spacing::LG)
            .push(section_header(ctx.i18n.tr("projects-title")))
            .push(grid(cards, 2));

        page(content)
    }

    /// Detail sheet for the selected project, `None` when closed.
    pub fn modal_content<'a>(&self, ctx: PageContext<'a>) -> Option<Element<'a, Message>> {
        self.selected().map(|project| detail(ctx, project))
    }
}

fn preview<'a>(ctx: PageContext<'a>, project: &'static ShowcaseProject) -> Element<'a, Message> {
    match project.preview_image() {
        Some(reference) => ctx
            .image(&reference)
            .height(sizing::PROJECT_IMAGE_HEIGHT)
            .fallback(project.title)
            .view(),
        None => Container::new(Text::new(project.title).size(typography::TITLE_MD))
            .width(Length::Fill)
            .height(Length::Fixed(sizing::PROJECT_IMAGE_HEIGHT))
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .style(styles::container::placeholder)
            .into(),
    }
}

fn card<'a>(
    ctx: PageContext<'a>,
    index: usize,
    project: &'static ShowcaseProject,
) -> Element<'a, Message> {
    let mut title = Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .push(Text::new(project.title).size(typography::TITLE_SM));
    if project.featured {
        title = title.push(featured_badge(ctx.i18n));
    }

    let body = Column::new()
        .spacing(spacing::XS)
        .push(preview(ctx, project))
        .push(title)
        .push(chip_row(project.technologies, CARD_CHIPS, ctx.i18n));

    button(body)
        .on_press(Message::Open(index))
        .padding(spacing::SM)
        .width(Length::Fill)
        .style(styles::button::card)
        .into()
}

fn featured_badge<'a>(i18n: &I18n) -> Element<'a, Message> {
    Container::new(Text::new(i18n.tr("projects-featured")).size(typography::CAPTION))
        .padding([2.0, spacing::XS])
        .style(styles::container::badge)
        .into()
}

fn detail<'a>(ctx: PageContext<'a>, project: &'static ShowcaseProject) -> Element<'a, Message> {
    let i18n = ctx.i18n;

    let mut links = Row::new().spacing(spacing::MD);
    if let Some(url) = project.github {
        links = links.push(link_button(
            i18n.tr("projects-github"),
            Message::OpenLink(url.to_string()),
        ));
    }
    if let Some(url) = project.live {
        links = links.push(link_button(
            i18n.tr("projects-live"),
            Message::OpenLink(url.to_string()),
        ));
    }

    let mut heading = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(Text::new(project.title).size(typography::TITLE_LG));
    if project.featured {
        heading = heading.push(featured_badge(i18n));
    }
    heading = heading.push(Space::new().width(Length::Fill)).push(
        button(Text::new(i18n.tr("projects-close")))
            .on_press(Message::Close)
            .style(styles::button::unselected),
    );

    let body = Column::new()
        .spacing(spacing::MD)
        .push(heading)
        .push(preview(ctx, project))
        .push(Text::new(project.description).size(typography::BODY_LG))
        .push(Text::new(i18n.tr("projects-technologies")).size(typography::TITLE_SM))
        .push(chip_cloud(project.technologies))
        .push(links);

    scrollable(body).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_and_close_detail() {
        let mut state = State::new();
        assert_eq!(state.update(Message::Open(1)), Event::None);
        assert_eq!(state.selected(), SHOWCASE.get(1));
        state.update(Message::Close);
        assert!(!state.is_open());
    }

    #[test]
    fn out_of_range_index_keeps_modal_closed() {
        let mut state = State::new();
        state.update(Message::Open(SHOWCASE.len()));
        assert!(!state.is_open());
    }

    #[test]
    fn links_are_forwarded() {
        let mut state = State::new();
        let event = state.update(Message::OpenLink("https://example.com".into()));
        assert_eq!(event, Event::OpenLink("https://example.com".into()));
    }
}
