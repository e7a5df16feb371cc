// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the page sections.
//!
//! The `App` struct wires the sections, localization, image loading and the
//! platform launcher together and turns section effects into `Task`s.

pub mod config;
mod message;
pub mod paths;
mod section;
mod subscription;
mod update;
mod view;

pub use message::{Direction, Flags, Message};
pub use section::Section;

use crate::content::{CATEGORIES, GALLERY, PROFILE, SHOWCASE, SKILLS};
use crate::domain::profile::Tagline;
use crate::i18n::fluent::I18n;
use crate::media::{loader, AssetStore, Launcher, LoaderSettings, SystemLauncher};
use crate::ui::navbar;
use crate::ui::notifications;
use crate::ui::sections::{contact, gallery, projects};
use crate::ui::theming::ThemeMode;
use config::Config;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::sync::Arc;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    config: Config,
    section: Section,
    menu_open: bool,
    window_width: f32,
    theme_mode: ThemeMode,
    tagline: Tagline,
    gallery: gallery::State,
    projects: projects::State,
    contact: contact::State,
    assets: AssetStore,
    loader: LoaderSettings,
    launcher: Arc<dyn Launcher>,
    notifications: notifications::Manager,
    spinner_rotation: f32,
    /// Write preference changes back to `settings.toml`.
    persist_preferences: bool,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("section", &self.section)
            .field("menu_open", &self.menu_open)
            .field("gallery_open", &self.gallery.is_open())
            .field("contact_status", &self.contact.form().status())
            .finish_non_exhaustive()
    }
}

pub const WINDOW_DEFAULT_WIDTH: f32 = 1100.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 800.0;
pub const MIN_WINDOW_WIDTH: f32 = 420.0;
pub const MIN_WINDOW_HEIGHT: f32 = 560.0;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
///
/// # Errors
///
/// Returns the Iced error if the window or renderer cannot be created.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 wants an `Fn` boot closure; the flags are consumed once
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads config and locale, then starts fetching the landing images.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_overrides(flags.config_dir);
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang, &config);

        let mut app = Self::with_parts(config, i18n, Arc::new(SystemLauncher));
        app.persist_preferences = true;
        if let Some(key) = config_warning {
            app.notifications
                .push(notifications::Notification::warning(key));
        }

        let task = app.request_assets(Section::Home);
        (app, task)
    }

    /// Assembles the app from already-resolved parts.
    pub(crate) fn with_parts(config: Config, i18n: I18n, launcher: Arc<dyn Launcher>) -> Self {
        let loader = LoaderSettings {
            image_dir: config.assets.image_dir(),
            fetch_remote: config.assets.fetch_remote(),
        };
        Self {
            i18n,
            theme_mode: config.general.theme_mode,
            section: Section::Home,
            menu_open: false,
            window_width: WINDOW_DEFAULT_WIDTH,
            tagline: Tagline::default(),
            gallery: gallery::State::new(GALLERY, CATEGORIES, usize::from(config.gallery.columns())),
            projects: projects::State::new(),
            contact: contact::State::new(config.contact.recipient()),
            assets: AssetStore::new(),
            loader,
            launcher,
            notifications: notifications::Manager::new(),
            spinner_rotation: 0.0,
            persist_preferences: false,
            config,
        }
    }

    fn title(&self) -> String {
        self.i18n
            .tr_with_args("window-title", &[("name", PROFILE.name)])
    }

    fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(
                self.assets.has_pending(),
                self.notifications.has_notifications(),
                self.contact.awaiting_reset(),
            ),
            subscription::create_tagline_subscription(self.section),
        ])
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            section: self.section,
            navbar: navbar::ViewContext {
                i18n: &self.i18n,
                brand: PROFILE.name,
                active: self.section,
                menu_open: self.menu_open,
                compact: navbar::is_compact(self.window_width),
                is_dark: self.theme_mode.is_dark(),
            },
            tagline: &self.tagline,
            gallery: &self.gallery,
            projects: &self.projects,
            contact: &self.contact,
            assets: &self.assets,
            notifications: &self.notifications,
            spinner_rotation: self.spinner_rotation,
        })
    }

    /// Starts fetching every image `section` shows that is not yet tracked.
    fn request_assets(&mut self, section: Section) -> Task<Message> {
        let references: Vec<String> = match section {
            Section::Home => vec![PROFILE.portrait.to_string()],
            Section::Projects => SHOWCASE
                .iter()
                .filter_map(|project| project.preview_image())
                .collect(),
            Section::Skills => SKILLS.iter().map(|skill| skill.icon.to_string()).collect(),
            Section::Gallery => self.gallery.image_refs().map(str::to_string).collect(),
            Section::About | Section::Journey | Section::Honors | Section::Contact => Vec::new(),
        };

        let tasks: Vec<Task<Message>> = references
            .into_iter()
            .filter_map(|reference| {
                let source = self.assets.request(&reference)?;
                log::debug!("fetching {reference}");
                let settings = self.loader.clone();
                Some(Task::perform(loader::load(source, settings), move |result| {
                    Message::AssetLoaded {
                        reference: reference.clone(),
                        result,
                    }
                }))
            })
            .collect();

        Task::batch(tasks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::asset::LoadState;
    use crate::domain::contact::{Field, SubmitStatus};
    use crate::error::{AssetError, Error};
    use crate::media::RecordingLauncher;
    use crate::ui::sections;
    use std::time::{Duration, Instant};

    fn test_app(launcher: Arc<dyn Launcher>) -> App {
        let config = Config::default();
        let i18n = I18n::new(Some("en-US".into()), &config);
        App::with_parts(config, i18n, launcher)
    }

    fn app() -> App {
        test_app(Arc::new(RecordingLauncher::new()))
    }

    #[test]
    fn starts_on_home_with_nothing_open() {
        let app = app();
        assert_eq!(app.section, Section::Home);
        assert!(!app.menu_open);
        assert!(!app.gallery.is_open());
        assert!(!app.projects.is_open());
    }

    #[test]
    fn title_includes_profile_name() {
        assert!(app().title().contains(PROFILE.name));
    }

    #[test]
    fn navbar_selection_switches_section_and_tracks_images() {
        let mut app = app();
        app.menu_open = true;
        let _ = app.update(Message::Navbar(navbar::Message::Select(Section::Gallery)));
        assert_eq!(app.section, Section::Gallery);
        assert!(!app.menu_open);
        assert_eq!(app.assets.state(GALLERY[0].image), Some(LoadState::Pending));
    }

    #[test]
    fn hero_contact_button_navigates() {
        let mut app = app();
        let _ = app.update(Message::Page(sections::Message::Navigate(Section::Contact)));
        assert_eq!(app.section, Section::Contact);
    }

    #[test]
    fn escape_closes_gallery_then_menu() {
        let mut app = app();
        app.menu_open = true;
        let _ = app.update(Message::Gallery(gallery::Message::OpenProject(GALLERY[0].id)));
        assert!(app.gallery.is_open());

        let _ = app.update(Message::Dismiss);
        assert!(!app.gallery.is_open());
        assert!(app.menu_open);

        let _ = app.update(Message::Dismiss);
        assert!(!app.menu_open);
    }

    #[test]
    fn escape_closes_project_detail() {
        let mut app = app();
        let _ = app.update(Message::Projects(projects::Message::Open(0)));
        let _ = app.update(Message::Dismiss);
        assert!(!app.projects.is_open());
    }

    #[test]
    fn arrow_keys_only_move_an_open_carousel() {
        let mut app = app();
        let _ = app.update(Message::Navbar(navbar::Message::Select(Section::Gallery)));
        let _ = app.update(Message::Navigate(Direction::Next));
        assert_eq!(app.gallery.focused_index(), None);

        let _ = app.update(Message::Gallery(gallery::Message::OpenProject(GALLERY[0].id)));
        let _ = app.update(Message::Navigate(Direction::Next));
        assert_eq!(app.gallery.focused_index(), Some(1));
        let _ = app.update(Message::Navigate(Direction::Previous));
        assert_eq!(app.gallery.focused_index(), Some(0));
    }

    #[test]
    fn leaving_gallery_closes_carousel() {
        let mut app = app();
        let _ = app.update(Message::Gallery(gallery::Message::OpenProject(GALLERY[0].id)));
        let _ = app.update(Message::Navbar(navbar::Message::Select(Section::About)));
        assert!(!app.gallery.is_open());
    }

    #[test]
    fn asset_outcome_is_recorded() {
        let mut app = app();
        let _ = app.update(Message::Navbar(navbar::Message::Select(Section::Gallery)));
        let reference = GALLERY[0].image.to_string();
        let _ = app.update(Message::AssetLoaded {
            reference: reference.clone(),
            result: Err(AssetError::NotFound(reference.clone())),
        });
        assert_eq!(app.assets.state(&reference), Some(LoadState::Failed));
        assert_eq!(app.assets.state(GALLERY[1].image), Some(LoadState::Pending));
    }

    #[test]
    fn mail_launch_success_completes_form() {
        let mut app = app();
        let _ = app.update(Message::Contact(contact::Message::SubjectChanged("Hi".into())));
        let _ = app.update(Message::Contact(contact::Message::MessageEdited(
            iced::widget::text_editor::Action::Edit(iced::widget::text_editor::Edit::Paste(
                Arc::new("World".to_string()),
            )),
        )));
        let _ = app.update(Message::Contact(contact::Message::Submit));
        assert_eq!(app.contact.form().status(), SubmitStatus::Submitting);

        let _ = app.update(Message::MailLaunched(Ok(())));
        assert_eq!(app.contact.form().status(), SubmitStatus::Success);
        assert_eq!(app.contact.form().value(Field::Subject), "");
    }

    #[test]
    fn mail_launch_failure_shows_error_toast() {
        let mut app = test_app(Arc::new(RecordingLauncher::failing()));
        let _ = app.update(Message::Contact(contact::Message::SubjectChanged("Hi".into())));
        let _ = app.update(Message::Contact(contact::Message::MessageEdited(
            iced::widget::text_editor::Action::Edit(iced::widget::text_editor::Edit::Paste(
                Arc::new("World".to_string()),
            )),
        )));
        let _ = app.update(Message::Contact(contact::Message::Submit));
        let _ = app.update(Message::MailLaunched(Err(Error::Launch("no handler".into()))));

        assert_eq!(app.contact.form().status(), SubmitStatus::Error);
        assert_eq!(app.notifications.visible_count(), 1);
    }

    #[test]
    fn tick_resets_success_banner_after_configured_delay() {
        let mut app = app();
        let _ = app.update(Message::Contact(contact::Message::SubjectChanged("Hi".into())));
        let _ = app.update(Message::Contact(contact::Message::MessageEdited(
            iced::widget::text_editor::Action::Edit(iced::widget::text_editor::Edit::Paste(
                Arc::new("World".to_string()),
            )),
        )));
        let _ = app.update(Message::Contact(contact::Message::Submit));
        let _ = app.update(Message::MailLaunched(Ok(())));

        let later = Instant::now() + app.config.contact.success_reset() + Duration::from_millis(1);
        let _ = app.update(Message::Tick(later));
        assert_eq!(app.contact.form().status(), SubmitStatus::Idle);
    }

    #[test]
    fn theme_toggle_flips_mode() {
        let mut app = app();
        app.theme_mode = ThemeMode::Light;
        let _ = app.update(Message::Navbar(navbar::Message::ToggleTheme));
        assert_eq!(app.theme_mode, ThemeMode::Dark);
        assert_eq!(app.config.general.theme_mode, ThemeMode::Dark);
    }

    #[test]
    fn widening_window_closes_menu() {
        let mut app = app();
        let _ = app.update(Message::WindowResized(400.0));
        app.menu_open = true;
        let _ = app.update(Message::WindowResized(1200.0));
        assert!(!app.menu_open);
    }

    #[test]
    fn tagline_rotates() {
        let mut app = app();
        let _ = app.update(Message::RotateTagline);
        assert_eq!(app.tagline.index(), 1);
    }
}
