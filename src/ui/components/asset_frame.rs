// SPDX-License-Identifier: MPL-2.0
//! Fixed-height frame around a remote or local image.
//!
//! Draws a spinner while the image is pending, a static glyph when it
//! failed, and the image itself once loaded. Siblings never affect each
//! other: every frame reads its own [`AssetView`].

use crate::i18n::fluent::I18n;
use crate::media::{AssetView, ImageData};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles::container as container_styles;
use crate::ui::widgets::AnimatedSpinner;
use iced::widget::{image, svg, text, Column, Container, Text};
use iced::{alignment, ContentFit, Element, Length, Theme};

/// Builder for an image slot.
pub struct AssetFrame<'a> {
    view: AssetView<'a>,
    i18n: &'a I18n,
    height: f32,
    width: Length,
    spinner_rotation: f32,
    fallback: Option<String>,
    fit: ContentFit,
}

impl<'a> AssetFrame<'a> {
    pub fn new(view: AssetView<'a>, i18n: &'a I18n) -> Self {
        Self {
            view,
            i18n,
            height: sizing::GALLERY_TILE_HEIGHT,
            width: Length::Fill,
            spinner_rotation: 0.0,
            fallback: None,
            fit: ContentFit::Cover,
        }
    }

    #[must_use]
    pub fn height(mut self, height: f32) -> Self {
        self.height = height;
        self
    }

    #[must_use]
    pub fn width(mut self, width: impl Into<Length>) -> Self {
        self.width = width.into();
        self
    }

    #[must_use]
    pub fn spinner_rotation(mut self, rotation: f32) -> Self {
        self.spinner_rotation = rotation;
        self
    }

    /// Text shown in place of the error glyph (e.g. a project title).
    #[must_use]
    pub fn fallback(mut self, label: impl Into<String>) -> Self {
        self.fallback = Some(label.into());
        self
    }

    #[must_use]
    pub fn fit(mut self, fit: ContentFit) -> Self {
        self.fit = fit;
        self
    }

    pub fn view<Message: 'static>(self) -> Element<'a, Message> {
        let content: Element<'a, Message> = match self.view {
            AssetView::Loaded(data) => return self.loaded(data),
            AssetView::Unknown | AssetView::Pending => Column::new()
                .spacing(spacing::XS)
                .align_x(alignment::Horizontal::Center)
                .push(
                    AnimatedSpinner::new(palette::PRIMARY_500, self.spinner_rotation)
                        .size(sizing::ICON_XL)
                        .into_element(),
                )
                .push(Text::new(self.i18n.tr("asset-loading")).size(typography::CAPTION))
                .into(),
            AssetView::Failed(_) => {
                let mut column = Column::new()
                    .spacing(spacing::XS)
                    .align_x(alignment::Horizontal::Center);
                if let Some(label) = self.fallback.clone() {
                    column = column.push(Text::new(label).size(typography::TITLE_SM));
                } else {
                    column = column
                        .push(Text::new("⚠").size(sizing::ICON_LG).style(|_theme: &Theme| {
                            text::Style {
                                color: Some(palette::ERROR_500),
                            }
                        }))
                        .push(Text::new(self.i18n.tr("asset-failed")).size(typography::CAPTION));
                }
                column.into()
            }
        };

        Container::new(content)
            .width(self.width)
            .height(Length::Fixed(self.height))
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .style(container_styles::placeholder)
            .into()
    }

    fn loaded<Message: 'static>(self, data: &'a ImageData) -> Element<'a, Message> {
        let height = Length::Fixed(self.height);
        match data {
            ImageData::Raster { handle, .. } => image(handle.clone())
                .width(self.width)
                .height(height)
                .content_fit(self.fit)
                .into(),
            ImageData::Vector { handle, .. } => svg(handle.clone())
                .width(self.width)
                .height(height)
                .content_fit(ContentFit::Contain)
                .into(),
        }
    }
}
