// SPDX-License-Identifier: MPL-2.0
//! Integration tests to validate style and design token coherence.

#[cfg(test)]
mod tests {
    use iced::widget::button::Status;
    use iced::{Background, Theme};
    use iced_folio::ui::design_tokens::{opacity, palette, sizing, spacing};
    use iced_folio::ui::styles::{button, container, overlay};
    use iced_folio::ui::theming::ThemeMode;

    #[test]
    fn all_button_styles_are_callable() {
        let theme = Theme::Dark;

        let _ = button::primary(&theme, Status::Active);
        let _ = button::selected(&theme, Status::Hovered);
        let _ = button::unselected(&theme, Status::Active);
        let _ = button::link(&theme, Status::Pressed);
        let _ = button::card(&theme, Status::Active);
        let _ = button::overlay(palette::WHITE, 0.5, 0.8)(&theme, Status::Hovered);
    }

    #[test]
    fn overlay_button_brightens_on_hover() {
        let style = button::overlay(palette::WHITE, opacity::OVERLAY_MEDIUM, opacity::OVERLAY_HOVER);
        let alpha = |status| match style(&Theme::Dark, status).background {
            Some(Background::Color(color)) => color.a,
            _ => 0.0,
        };
        assert!(alpha(Status::Hovered) > alpha(Status::Active));
    }

    #[test]
    fn container_styles_differ_between_themes() {
        let light = container::panel(&Theme::Light);
        let dark = container::panel(&Theme::Dark);
        assert_ne!(light.background, dark.background);

        let _ = container::chip(&Theme::Light);
        let _ = container::badge(&Theme::Light);
        let _ = container::placeholder(&Theme::Dark);
        let _ = container::banner(palette::SUCCESS_500)(&Theme::Light);
        let _ = overlay::sheet(&Theme::Dark);
        let _ = overlay::backdrop(&Theme::Dark);
    }

    #[test]
    fn design_tokens_are_accessible() {
        let _ = palette::PRIMARY_500;
        let _ = spacing::MD;
        let _ = opacity::OVERLAY_STRONG;
        assert!(sizing::NAVBAR_COLLAPSE_WIDTH < sizing::CONTENT_MAX_WIDTH);
    }

    #[test]
    fn token_scales_are_ascending() {
        let spacing_scale = [
            spacing::XXS,
            spacing::XS,
            spacing::SM,
            spacing::MD,
            spacing::LG,
            spacing::XL,
        ];
        assert!(spacing_scale.windows(2).all(|pair| pair[0] < pair[1]));

        let icon_scale = [sizing::ICON_MD, sizing::ICON_LG, sizing::ICON_XL];
        assert!(icon_scale.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(opacity::OVERLAY_SUBTLE < opacity::SURFACE && opacity::SURFACE < 1.0);
    }

    #[test]
    fn explicit_theme_modes_map_to_iced_themes() {
        assert_eq!(ThemeMode::Light.iced_theme(), Theme::Light);
        assert_eq!(ThemeMode::Dark.iced_theme(), Theme::Dark);
        assert!(ThemeMode::Dark.is_dark());
        assert!(!ThemeMode::Light.is_dark());
    }
}
