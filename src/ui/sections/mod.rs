// SPDX-License-Identifier: MPL-2.0
//! Page sections.
//!
//! Static sections (hero, about, journey, honors, skills, footer) only emit
//! [`Message`]. The interactive ones keep their own state:
//!
//! - [`gallery`] - category filter plus carousel modal
//! - [`projects`] - showcase cards plus detail modal
//! - [`contact`] - mail form

pub mod about;
pub mod contact;
pub mod footer;
pub mod gallery;
pub mod hero;
pub mod honors;
pub mod journey;
pub mod projects;
pub mod skills;

use crate::app::Section;
use crate::i18n::fluent::I18n;
use crate::media::AssetStore;
use crate::ui::components::AssetFrame;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Column, Container, Row, Space, Text};
use iced::{alignment, Element, Length};

/// Messages shared by the static sections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Hand a URL to the platform opener.
    OpenLink(String),
    Navigate(Section),
}

/// What every section needs to render.
#[derive(Clone, Copy)]
pub struct PageContext<'a> {
    pub i18n: &'a I18n,
    pub assets: &'a AssetStore,
    pub spinner_rotation: f32,
}

impl<'a> PageContext<'a> {
    /// Image slot for `reference` in its current load state.
    pub fn image(&self, reference: &str) -> AssetFrame<'a> {
        AssetFrame::new(self.assets.view(reference), self.i18n)
            .spinner_rotation(self.spinner_rotation)
    }
}

/// Centers `content` and caps its width.
pub fn page<'a, M: 'a>(content: impl Into<Element<'a, M>>) -> Element<'a, M> {
    Container::new(
        Container::new(content)
            .max_width(sizing::CONTENT_MAX_WIDTH)
            .padding([spacing::XL, spacing::LG]),
    )
    .width(Length::Fill)
    .align_x(alignment::Horizontal::Center)
    .into()
}

/// Borderless button showing `label`, emitting `message` on press.
pub fn link_button<'a, M: Clone + 'a>(label: impl Into<String>, message: M) -> Element<'a, M> {
    button(Text::new(label.into()).size(typography::BODY))
        .on_press(message)
        .padding(0)
        .style(styles::button::link)
        .into()
}

/// Lays `cells` out in rows of `columns`, padding the last row so every
/// cell keeps the same width.
pub fn grid<'a, M: 'a>(cells: Vec<Element<'a, M>>, columns: usize) -> Element<'a, M> {
    let columns = columns.max(1);
    let mut grid = Column::new().spacing(spacing::MD).width(Length::Fill);
    let mut cells = cells.into_iter().peekable();

    while cells.peek().is_some() {
        let mut row = Row::new().spacing(spacing::MD).width(Length::Fill);
        for slot in 0..columns {
            match cells.next() {
                Some(cell) => {
                    row = row.push(Container::new(cell).width(Length::FillPortion(1)));
                }
                None => {
                    for _ in slot..columns {
                        row = row.push(Space::new().width(Length::FillPortion(1)));
                    }
                    break;
                }
            }
        }
        grid = grid.push(row);
    }

    grid.into()
}
