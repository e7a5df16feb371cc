// SPDX-License-Identifier: MPL-2.0
//! Technology chips.

use crate::domain::project::visible_chips;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles::container as container_styles;
use iced::widget::{Container, Row, Text};
use iced::Element;

/// A single rounded label.
pub fn chip<'a, Message: 'a>(label: impl Into<String>) -> Element<'a, Message> {
    Container::new(Text::new(label.into()).size(typography::CAPTION))
        .padding([spacing::XXS, spacing::XS])
        .style(container_styles::chip)
        .into()
}

/// At most `max` chips, followed by a `+N` chip for the rest.
pub fn chip_row<'a, Message: 'a>(
    technologies: &[&str],
    max: usize,
    i18n: &I18n,
) -> Element<'a, Message> {
    let (shown, hidden) = visible_chips(technologies, max);
    let mut row = Row::new().spacing(spacing::XXS);
    for tech in shown {
        row = row.push(chip(*tech));
    }
    if hidden > 0 {
        let count = hidden.to_string();
        row = row.push(chip(i18n.tr_with_args("gallery-more-chips", &[("count", &count)])));
    }
    row.into()
}

/// Every chip, wrapping onto as many lines as needed.
pub fn chip_cloud<'a, Message: 'a>(labels: &[&str]) -> Element<'a, Message> {
    labels
        .iter()
        .fold(Row::new().spacing(spacing::XS), |row, label| {
            row.push(chip(*label))
        })
        .wrap()
        .vertical_spacing(spacing::XS)
        .into()
}
