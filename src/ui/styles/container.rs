// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Generic panel surface (about details, contact form).
///
/// Derived from the active Iced `Theme` background with a slight opacity so
/// panels stay readable in both light and dark modes.
pub fn panel(theme: &Theme) -> container::Style {
    let ext = theme.extended_palette();
    let base = ext.background.base.color;

    container::Style {
        background: Some(Background::Color(Color::from_rgba(
            base.r,
            base.g,
            base.b,
            opacity::SURFACE,
        ))),
        border: Border {
            color: ext.background.strong.color,
            width: border::WIDTH_SM,
            radius: radius::LG.into(),
        },
        ..Default::default()
    }
}

/// Static card (timeline entry, achievement, skill).
pub fn card(theme: &Theme) -> container::Style {
    let ext = theme.extended_palette();
    container::Style {
        background: Some(Background::Color(ext.background.weak.color)),
        text_color: Some(ext.background.weak.text),
        border: Border {
            color: ext.background.strong.color,
            width: border::WIDTH_SM,
            radius: radius::LG.into(),
        },
        shadow: shadow::SM,
        ..Default::default()
    }
}

/// Technology chip.
pub fn chip(theme: &Theme) -> container::Style {
    let is_light = matches!(theme, Theme::Light);
    let (background, text) = if is_light {
        (palette::PRIMARY_100, palette::PRIMARY_800)
    } else {
        (palette::PRIMARY_800, palette::PRIMARY_100)
    };
    container::Style {
        background: Some(Background::Color(background)),
        text_color: Some(text),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Featured badge on project cards.
pub fn badge(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::STAR_500)),
        text_color: Some(palette::GRAY_900),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Placeholder area while an image loads or after it failed.
pub fn placeholder(theme: &Theme) -> container::Style {
    let ext = theme.extended_palette();
    container::Style {
        background: Some(Background::Color(ext.background.strong.color)),
        text_color: Some(ext.background.strong.text),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Inline status banner (contact success/error).
pub fn banner(accent: Color) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let ext = theme.extended_palette();
        container::Style {
            background: Some(Background::Color(Color {
                a: opacity::OVERLAY_SUBTLE,
                ..accent
            })),
            text_color: Some(ext.background.base.text),
            border: Border {
                color: accent,
                width: border::WIDTH_MD,
                radius: radius::MD.into(),
            },
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chip_inverts_between_themes() {
        let light = chip(&Theme::Light);
        let dark = chip(&Theme::Dark);
        assert_ne!(light.background, dark.background);
    }

    #[test]
    fn banner_uses_accent_border() {
        let style = banner(palette::SUCCESS_500)(&Theme::Dark);
        assert_eq!(style.border.color, palette::SUCCESS_500);
    }
}
