// SPDX-License-Identifier: MPL-2.0
//! Modal sheet stacked over the page.
//!
//! The backdrop swallows every pointer event so the page underneath neither
//! scrolls nor reacts while the modal is open. Clicking the backdrop emits
//! `on_dismiss`.

use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::styles::overlay;
use iced::widget::{mouse_area, opaque, stack, Container};
use iced::{alignment, Element, Length};

pub fn modal<'a, Message: Clone + 'a>(
    base: impl Into<Element<'a, Message>>,
    content: impl Into<Element<'a, Message>>,
    on_dismiss: Message,
) -> Element<'a, Message> {
    let sheet = Container::new(content)
        .max_width(sizing::MODAL_WIDTH)
        .padding(spacing::LG)
        .style(overlay::sheet);

    let backdrop = Container::new(opaque(sheet))
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(overlay::backdrop);

    stack![base.into(), opaque(mouse_area(backdrop).on_press(on_dismiss))].into()
}
