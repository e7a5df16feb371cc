// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    border, opacity,
    palette::{self, BLACK, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Shadow, Theme};

/// Primary call to action (send, download resume).
pub fn primary(theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(palette::PRIMARY_500)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_600,
                width: border::WIDTH_SM,
                radius: radius::MD.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(palette::PRIMARY_400)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_500,
                width: border::WIDTH_SM,
                radius: radius::MD.into(),
            },
            shadow: shadow::MD,
            snap: true,
        },
        button::Status::Disabled => disabled(theme),
    }
}

/// Semi-transparent round buttons laid over images (modal navigation).
pub fn overlay(
    text_color: Color,
    alpha_normal: f32,
    alpha_hover: f32,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let alpha = match status {
            button::Status::Hovered => alpha_hover,
            button::Status::Pressed => opacity::OVERLAY_PRESSED,
            _ => alpha_normal,
        };

        button::Style {
            background: Some(Background::Color(Color { a: alpha, ..BLACK })),
            text_color,
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            shadow: shadow::MD,
            snap: true,
        }
    }
}

/// Grayed out, non-interactive.
fn disabled(theme: &Theme) -> button::Style {
    let is_light = matches!(theme, Theme::Light);
    button::Style {
        background: Some(Background::Color(if is_light {
            palette::GRAY_200
        } else {
            palette::GRAY_700
        })),
        text_color: palette::GRAY_400,
        border: Border {
            color: palette::GRAY_400,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Active filter pill or navbar entry.
pub fn selected(theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Disabled => disabled(theme),
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(palette::PRIMARY_400)),
            text_color: WHITE,
            border: pill_border(palette::PRIMARY_500),
            shadow: shadow::MD,
            snap: true,
        },
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(palette::PRIMARY_500)),
            text_color: WHITE,
            border: pill_border(palette::PRIMARY_600),
            shadow: shadow::SM,
            snap: true,
        },
    }
}

/// Inactive filter pill or navbar entry.
pub fn unselected(theme: &Theme, status: button::Status) -> button::Style {
    let is_light = matches!(theme, Theme::Light);

    let (bg_color, text_color) = if is_light {
        (palette::GRAY_100, palette::GRAY_900)
    } else {
        (palette::GRAY_700, WHITE)
    };

    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(bg_color)),
            text_color,
            border: pill_border(palette::GRAY_400),
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(if is_light {
                palette::GRAY_200
            } else {
                Color::from_rgb(0.35, 0.35, 0.35)
            })),
            text_color,
            border: pill_border(palette::PRIMARY_500),
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Disabled => disabled(theme),
    }
}

fn pill_border(color: Color) -> Border {
    Border {
        color,
        width: border::WIDTH_SM,
        radius: radius::FULL.into(),
    }
}

/// Borderless text button for links.
pub fn link(theme: &Theme, status: button::Status) -> button::Style {
    let is_light = matches!(theme, Theme::Light);
    let text_color = match status {
        button::Status::Hovered => palette::PRIMARY_400,
        button::Status::Disabled => palette::GRAY_400,
        _ if is_light => palette::PRIMARY_700,
        _ => palette::PRIMARY_200,
    };
    button::Style {
        background: None,
        text_color,
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Clickable card (gallery tile, project card).
pub fn card(theme: &Theme, status: button::Status) -> button::Style {
    let ext = theme.extended_palette();
    let (border_color, card_shadow) = match status {
        button::Status::Hovered => (palette::PRIMARY_500, shadow::LG),
        button::Status::Pressed => (palette::PRIMARY_600, shadow::SM),
        _ => (ext.background.strong.color, shadow::MD),
    };
    button::Style {
        background: Some(Background::Color(ext.background.weak.color)),
        text_color: ext.background.base.text,
        border: Border {
            color: border_color,
            width: border::WIDTH_SM,
            radius: radius::LG.into(),
        },
        shadow: Shadow {
            color: Color {
                a: opacity::OVERLAY_SUBTLE,
                ..BLACK
            },
            ..card_shadow
        },
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_button_uses_brand_colors() {
        let style = primary(&Theme::Dark, button::Status::Active);

        if let Some(Background::Color(bg)) = style.background {
            assert_eq!(bg, palette::PRIMARY_500);
        } else {
            panic!("Expected background color");
        }
    }

    #[test]
    fn primary_button_grays_out_when_disabled() {
        let style = primary(&Theme::Light, button::Status::Disabled);
        assert_eq!(style.text_color, palette::GRAY_400);
        assert_eq!(style.shadow, shadow::NONE);
    }

    #[test]
    fn overlay_button_alpha_changes_on_hover() {
        let style_fn = overlay(WHITE, 0.5, 0.8);

        let normal = style_fn(&Theme::Dark, button::Status::Active);
        let hover = style_fn(&Theme::Dark, button::Status::Hovered);

        assert_ne!(normal.background, hover.background);
    }

    #[test]
    fn selected_and_unselected_differ() {
        let on = selected(&Theme::Light, button::Status::Active);
        let off = unselected(&Theme::Light, button::Status::Active);
        assert_ne!(on.background, off.background);
    }

    #[test]
    fn card_highlights_border_on_hover() {
        let idle = card(&Theme::Dark, button::Status::Active);
        let hovered = card(&Theme::Dark, button::Status::Hovered);
        assert_eq!(hovered.border.color, palette::PRIMARY_500);
        assert_ne!(idle.border.color, hovered.border.color);
    }
}
