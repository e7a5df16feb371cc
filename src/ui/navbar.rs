// SPDX-License-Identifier: MPL-2.0
//! Navigation bar for switching page sections.
//!
//! On wide windows every section is listed inline. Below
//! [`sizing::NAVBAR_COLLAPSE_WIDTH`] the entries fold behind a hamburger
//! toggle and drop down as a column.

use crate::app::Section;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{radius, sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, container, Column, Container, Row, Space, Text},
    Border, Element, Length, Theme,
};

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub brand: &'a str,
    pub active: Section,
    pub menu_open: bool,
    /// Window narrower than the collapse threshold.
    pub compact: bool,
    pub is_dark: bool,
}

#[derive(Debug, Clone)]
pub enum Message {
    ToggleMenu,
    Select(Section),
    ToggleTheme,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    SectionSelected(Section),
    ThemeToggled,
}

/// Process a navbar message. Picking a section always closes the menu.
pub fn update(message: Message, menu_open: &mut bool) -> Event {
    match message {
        Message::ToggleMenu => {
            *menu_open = !*menu_open;
            Event::None
        }
        Message::Select(section) => {
            *menu_open = false;
            Event::SectionSelected(section)
        }
        Message::ToggleTheme => Event::ThemeToggled,
    }
}

/// Whether a window of `width` logical pixels uses the collapsed layout.
#[must_use]
pub fn is_compact(width: f32) -> bool {
    width < sizing::NAVBAR_COLLAPSE_WIDTH
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut content = Column::new().width(Length::Fill);
    content = content.push(build_top_bar(&ctx));

    if ctx.compact && ctx.menu_open {
        content = content.push(build_dropdown(&ctx));
    }

    content.into()
}

fn build_top_bar<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let brand = Text::new(ctx.brand.to_string()).size(typography::TITLE_SM);

    let theme_label = if ctx.is_dark {
        ctx.i18n.tr("nav-theme-light")
    } else {
        ctx.i18n.tr("nav-theme-dark")
    };
    let theme_button = button(Text::new(theme_label).size(typography::BODY_SM))
        .on_press(Message::ToggleTheme)
        .padding([spacing::XXS, spacing::SM])
        .style(styles::button::unselected);

    let mut row = Row::new()
        .spacing(spacing::XS)
        .padding([0.0, spacing::MD])
        .height(Length::Fixed(sizing::NAVBAR_HEIGHT))
        .align_y(Vertical::Center)
        .push(brand)
        .push(Space::new().width(Length::Fill));

    if ctx.compact {
        let (glyph, label) = if ctx.menu_open {
            ("✕", ctx.i18n.tr("nav-menu-close"))
        } else {
            ("☰", ctx.i18n.tr("nav-menu-open"))
        };
        let menu_button = button(Text::new(format!("{glyph} {label}")).size(typography::BODY))
            .on_press(Message::ToggleMenu)
            .padding(spacing::XS)
            .style(styles::button::unselected);
        row = row.push(theme_button).push(menu_button);
    } else {
        for section in Section::ALL {
            row = row.push(section_button(ctx, section));
        }
        row = row.push(theme_button);
    }

    Container::new(row)
        .width(Length::Fill)
        .align_x(Horizontal::Left)
        .style(bar_style)
        .into()
}

fn build_dropdown<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let menu_column = Section::ALL.into_iter().fold(
        Column::new().spacing(spacing::XXS).width(Length::Fill),
        |column, section| column.push(section_button(ctx, section)),
    );

    Container::new(menu_column)
        .padding(spacing::XS)
        .width(Length::Fill)
        .style(|theme: &Theme| container::Style {
            background: Some(theme.extended_palette().background.weak.color.into()),
            border: Border {
                radius: radius::SM.into(),
                width: 1.0,
                color: theme.extended_palette().background.strong.color,
            },
            ..Default::default()
        })
        .into()
}

fn section_button<'a>(ctx: &ViewContext<'a>, section: Section) -> Element<'a, Message> {
    let label = Text::new(ctx.i18n.tr(section.i18n_key())).size(typography::BODY);
    let style = if section == ctx.active {
        styles::button::selected
    } else {
        styles::button::unselected
    };
    let mut entry = button(label)
        .on_press(Message::Select(section))
        .padding([spacing::XXS, spacing::SM])
        .style(style);
    if ctx.compact {
        entry = entry.width(Length::Fill);
    }
    entry.into()
}

fn bar_style(theme: &Theme) -> container::Style {
    let ext = theme.extended_palette();
    container::Style {
        background: Some(ext.background.base.color.into()),
        border: Border {
            color: ext.background.strong.color,
            width: 1.0,
            radius: 0.0.into(),
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_menu_flips_flag() {
        let mut open = false;
        assert_eq!(update(Message::ToggleMenu, &mut open), Event::None);
        assert!(open);
        update(Message::ToggleMenu, &mut open);
        assert!(!open);
    }

    #[test]
    fn selecting_a_section_closes_menu() {
        let mut open = true;
        let event = update(Message::Select(Section::Gallery), &mut open);
        assert_eq!(event, Event::SectionSelected(Section::Gallery));
        assert!(!open);
    }

    #[test]
    fn theme_toggle_keeps_menu_state() {
        let mut open = true;
        assert_eq!(update(Message::ToggleTheme, &mut open), Event::ThemeToggled);
        assert!(open);
    }

    #[test]
    fn collapses_below_threshold() {
        assert!(is_compact(sizing::NAVBAR_COLLAPSE_WIDTH - 1.0));
        assert!(!is_compact(sizing::NAVBAR_COLLAPSE_WIDTH));
    }
}
