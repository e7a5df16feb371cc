// SPDX-License-Identifier: MPL-2.0
//! Filterable project gallery with a carousel modal.
//!
//! The carousel captures the visible list when it opens. Selecting another
//! category while it is open closes it, so a focused index can never point
//! into a list the user no longer sees.

use super::{grid, link_button, page, PageContext};
use crate::config::GALLERY_VISIBLE_CHIPS;
use crate::domain::carousel::Carousel;
use crate::domain::filter::CategoryFilter;
use crate::domain::project::{Category, ProjectRecord};
use crate::ui::components::{chip_cloud, chip_row, section_header};
use crate::ui::design_tokens::{opacity, palette, radius, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Column, Container, Row, Space, Text};
use iced::{alignment, ContentFit, Element, Length};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    SelectCategory(String),
    /// Open the carousel on the project with this id.
    OpenProject(u32),
    Next,
    Previous,
    Jump(usize),
    Close,
    OpenLink(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    OpenLink(String),
}

#[derive(Debug, Clone)]
pub struct State {
    projects: &'static [ProjectRecord],
    categories: &'static [Category],
    filter: CategoryFilter,
    carousel: Carousel<&'static ProjectRecord>,
    columns: usize,
}

impl State {
    #[must_use]
    pub fn new(
        projects: &'static [ProjectRecord],
        categories: &'static [Category],
        columns: usize,
    ) -> Self {
        Self {
            projects,
            categories,
            filter: CategoryFilter::new(),
            carousel: Carousel::new(),
            columns: columns.max(1),
        }
    }

    pub fn handle(&mut self, message: Message) -> Effect {
        match message {
            Message::SelectCategory(tag) => {
                if self.filter.select(&tag) && self.carousel.is_open() {
                    log::debug!("category changed to {tag}, closing carousel");
                    self.carousel.close();
                }
                Effect::None
            }
            Message::OpenProject(id) => {
                self.open(id);
                Effect::None
            }
            Message::Next => {
                self.carousel.next();
                Effect::None
            }
            Message::Previous => {
                self.carousel.previous();
                Effect::None
            }
            Message::Jump(index) => {
                self.carousel.jump(index);
                Effect::None
            }
            Message::Close => {
                self.carousel.close();
                Effect::None
            }
            Message::OpenLink(url) => Effect::OpenLink(url),
        }
    }

    /// Projects visible under the active category, in authored order.
    #[must_use]
    pub fn visible(&self) -> Vec<&'static ProjectRecord> {
        self.filter.apply(self.projects)
    }

    #[must_use]
    pub fn active_category(&self) -> &str {
        self.filter.active()
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.carousel.is_open()
    }

    #[must_use]
    pub fn focused_index(&self) -> Option<usize> {
        self.carousel.focused_index()
    }

    #[must_use]
    pub fn focused(&self) -> Option<&'static ProjectRecord> {
        self.carousel.focused().copied()
    }

    /// Image references of every project, in authored order.
    pub fn image_refs(&self) -> impl Iterator<Item = &'static str> {
        self.projects.iter().map(|project| project.image)
    }

    /// An id missing from the visible list focuses its first entry.
    fn open(&mut self, id: u32) {
        let visible = self.visible();
        let target = visible
            .iter()
            .copied()
            .find(|project| project.id == id)
            .or_else(|| visible.first().copied());
        if let Some(target) = target {
            self.carousel.open(visible, &target);
        }
    }

    pub fn view<'a>(&self, ctx: PageContext<'a>) -> Element<'a, Message> {
        let i18n = ctx.i18n;

        let pills = self
            .categories
            .iter()
            .fold(Row::new().spacing(spacing::XS), |row, category| {
                let style = if category.tag == self.filter.active() {
                    styles::button::selected
                } else {
                    styles::button::unselected
                };
                row.push(
                    button(Text::new(category.label).size(typography::BODY_SM))
                        .on_press(Message::SelectCategory(category.tag.to_string()))
                        .padding([spacing::XXS, spacing::SM])
                        .style(style),
                )
            })
            .wrap()
            .vertical_spacing(spacing::XS);

        let visible = self.visible();
        let body: Element<'a, Message> = if visible.is_empty() {
            Container::new(Text::new(i18n.tr("gallery-empty")).size(typography::BODY_LG))
                .width(Length::Fill)
                .padding(spacing::XL)
                .align_x(alignment::Horizontal::Center)
                .into()
        } else {
            let tiles = visible.into_iter().map(|project| tile(ctx, project)).collect();
            grid(tiles, self.columns)
        };

        let content = Column::new()
            .spacing(spacing::LG)
            .push(section_header(i18n.tr("gallery-title")))
            .push(pills)
            .push(body);

        page(content)
    }

    /// Carousel sheet for the focused project, `None` when closed.
    pub fn modal_content<'a>(&self, ctx: PageContext<'a>) -> Option<Element<'a, Message>> {
        let project = self.focused()?;
        let index = self.carousel.focused_index()?;
        Some(carousel_view(ctx, project, index, self.carousel.len()))
    }
}

fn tile<'a>(ctx: PageContext<'a>, project: &'static ProjectRecord) -> Element<'a, Message> {
    let body = Column::new()
        .spacing(spacing::XS)
        .push(
            ctx.image(project.image)
                .height(sizing::GALLERY_TILE_HEIGHT)
                .view(),
        )
        .push(Text::new(project.title).size(typography::TITLE_SM))
        .push(chip_row(project.technologies, GALLERY_VISIBLE_CHIPS, ctx.i18n));

    button(body)
        .on_press(Message::OpenProject(project.id))
        .padding(spacing::SM)
        .width(Length::Fill)
        .style(styles::button::card)
        .into()
}

fn carousel_view<'a>(
    ctx: PageContext<'a>,
    project: &'static ProjectRecord,
    index: usize,
    len: usize,
) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let navigable = len > 1;

    let image = ctx
        .image(project.image)
        .height(sizing::MODAL_IMAGE_HEIGHT)
        .fit(ContentFit::Contain)
        .view();

    let nav_button = |glyph: &'static str, message: Message| {
        let mut nav = button(Text::new(glyph).size(typography::TITLE_MD))
            .padding([spacing::XS, spacing::SM])
            .style(styles::button::overlay(
                palette::WHITE,
                opacity::OVERLAY_MEDIUM,
                opacity::OVERLAY_HOVER,
            ));
        if navigable {
            nav = nav.on_press(message);
        }
        nav
    };

    let stage = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(nav_button("‹", Message::Previous))
        .push(Container::new(image).width(Length::Fill))
        .push(nav_button("›", Message::Next));

    let position = Container::new(
        Text::new(i18n.tr_with_args(
            "gallery-modal-position",
            &[
                ("current", &(index + 1).to_string()),
                ("total", &len.to_string()),
            ],
        ))
        .size(typography::CAPTION),
    )
    .padding([spacing::XXS, spacing::SM])
    .style(styles::overlay::indicator(radius::FULL));

    let dots = (0..len).fold(Row::new().spacing(spacing::XXS), |row, dot| {
        let style = if dot == index {
            styles::button::selected
        } else {
            styles::button::unselected
        };
        row.push(
            button(Space::new().width(8.0).height(8.0))
                .on_press(Message::Jump(dot))
                .padding(0)
                .style(style),
        )
    });

    let mut links = Row::new().spacing(spacing::MD);
    if let Some(url) = project.github {
        links = links.push(link_button(
            i18n.tr("gallery-view-source"),
            Message::OpenLink(url.to_string()),
        ));
    }
    if let Some(url) = project.live {
        links = links.push(link_button(
            i18n.tr("projects-live"),
            Message::OpenLink(url.to_string()),
        ));
    }

    let header = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(Text::new(project.title).size(typography::TITLE_MD))
        .push(Space::new().width(Length::Fill))
        .push(position)
        .push(
            button(Text::new(i18n.tr("gallery-modal-close")))
                .on_press(Message::Close)
                .style(styles::button::unselected),
        );

    Column::new()
        .spacing(spacing::MD)
        .push(header)
        .push(stage)
        .push(
            Container::new(dots)
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Center),
        )
        .push(Text::new(project.description).size(typography::BODY))
        .push(chip_cloud(project.technologies))
        .push(links)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{CATEGORIES, GALLERY};

    fn gallery() -> State {
        State::new(GALLERY, CATEGORIES, 3)
    }

    #[test]
    fn starts_with_everything_visible() {
        let state = gallery();
        assert_eq!(state.visible().len(), GALLERY.len());
        assert_eq!(state.active_category(), "all");
        assert!(!state.is_open());
    }

    #[test]
    fn opening_focuses_clicked_project() {
        let mut state = gallery();
        let target = GALLERY[2];
        state.handle(Message::OpenProject(target.id));
        assert_eq!(state.focused_index(), Some(2));
        assert_eq!(state.focused().map(|p| p.id), Some(target.id));
    }

    #[test]
    fn unknown_id_falls_back_to_first_visible() {
        let mut state = gallery();
        state.handle(Message::OpenProject(u32::MAX));
        assert_eq!(state.focused_index(), Some(0));
    }

    #[test]
    fn carousel_only_walks_the_filtered_list() {
        let mut state = gallery();
        state.handle(Message::SelectCategory("smart-wealth".into()));
        let visible = state.visible();
        assert!(visible.len() > 1);

        state.handle(Message::OpenProject(visible[0].id));
        for _ in 0..visible.len() {
            state.handle(Message::Next);
            let focused = state.focused().expect("open");
            assert!(focused.has_category("smart-wealth"));
        }
        assert_eq!(state.focused_index(), Some(0));
    }

    #[test]
    fn category_change_closes_carousel() {
        let mut state = gallery();
        state.handle(Message::OpenProject(GALLERY[0].id));
        state.handle(Message::SelectCategory("picwiz".into()));
        assert!(!state.is_open());
    }

    #[test]
    fn reselecting_same_category_keeps_carousel() {
        let mut state = gallery();
        state.handle(Message::OpenProject(GALLERY[0].id));
        state.handle(Message::SelectCategory("all".into()));
        assert!(state.is_open());
    }

    #[test]
    fn unknown_category_shows_nothing_and_opens_nothing() {
        let mut state = gallery();
        state.handle(Message::SelectCategory("nope".into()));
        assert!(state.visible().is_empty());
        state.handle(Message::OpenProject(GALLERY[0].id));
        assert!(!state.is_open());
    }

    #[test]
    fn jump_and_close() {
        let mut state = gallery();
        state.handle(Message::OpenProject(GALLERY[0].id));
        state.handle(Message::Jump(4));
        assert_eq!(state.focused_index(), Some(4));
        state.handle(Message::Close);
        assert!(!state.is_open());
        assert_eq!(state.focused_index(), None);
    }

    #[test]
    fn links_become_effects() {
        let mut state = gallery();
        assert_eq!(
            state.handle(Message::OpenLink("https://github.com/a/b".into())),
            Effect::OpenLink("https://github.com/a/b".into())
        );
    }
}
