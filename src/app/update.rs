// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Section states return effects or events; this module turns them into
//! `Task`s (mail and link launches, image fetches) and routes their results
//! back into state.

use super::{App, Direction, Message, Section};
use crate::content::TAGLINES;
use crate::error::Result;
use crate::media::{launcher, mailto_uri};
use crate::ui::navbar::{self, Event as NavbarEvent};
use crate::ui::notifications::Notification;
use crate::ui::sections::{self, contact, gallery, projects};
use crate::ui::widgets::animated_spinner;
use iced::Task;
use std::time::{Duration, Instant};

impl App {
    pub(super) fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Navbar(message) => self.handle_navbar_message(message),
            Message::Page(message) => self.handle_page_message(message),
            Message::Gallery(message) => match self.gallery.handle(message) {
                gallery::Effect::None => Task::none(),
                gallery::Effect::OpenLink(url) => self.open_link(url),
            },
            Message::Projects(message) => match self.projects.update(message) {
                projects::Event::None => Task::none(),
                projects::Event::OpenLink(url) => self.open_link(url),
            },
            Message::Contact(message) => self.handle_contact_message(message),
            Message::Notification(message) => {
                self.notifications.handle_message(&message);
                Task::none()
            }
            Message::AssetLoaded { reference, result } => {
                self.assets.resolve(&reference, result);
                Task::none()
            }
            Message::MailLaunched(result) => {
                self.handle_mail_launched(result);
                Task::none()
            }
            Message::LinkLaunched(result) => {
                if result.is_err() {
                    self.notifications
                        .push(Notification::error("notification-link-launch-error"));
                }
                Task::none()
            }
            Message::Dismiss => {
                self.dismiss_topmost();
                Task::none()
            }
            Message::Navigate(direction) => {
                if self.section == Section::Gallery && self.gallery.is_open() {
                    let message = match direction {
                        Direction::Previous => gallery::Message::Previous,
                        Direction::Next => gallery::Message::Next,
                    };
                    let _ = self.gallery.handle(message);
                }
                Task::none()
            }
            Message::WindowResized(width) => {
                self.window_width = width;
                if !navbar::is_compact(width) {
                    self.menu_open = false;
                }
                Task::none()
            }
            Message::Tick(now) => {
                self.handle_tick(now);
                Task::none()
            }
            Message::RotateTagline => {
                self.tagline.advance(TAGLINES.len());
                Task::none()
            }
        }
    }

    fn handle_navbar_message(&mut self, message: navbar::Message) -> Task<Message> {
        match navbar::update(message, &mut self.menu_open) {
            NavbarEvent::None => Task::none(),
            NavbarEvent::SectionSelected(section) => self.switch_section(section),
            NavbarEvent::ThemeToggled => {
                self.theme_mode = self.theme_mode.toggled();
                log::debug!("theme switched to {:?}", self.theme_mode);
                self.persist_theme();
                Task::none()
            }
        }
    }

    fn handle_page_message(&mut self, message: sections::Message) -> Task<Message> {
        match message {
            sections::Message::OpenLink(url) => self.open_link(url),
            sections::Message::Navigate(section) => self.switch_section(section),
        }
    }

    fn handle_contact_message(&mut self, message: contact::Message) -> Task<Message> {
        match self.contact.handle(message) {
            contact::Effect::None => Task::none(),
            contact::Effect::Launch(draft) => {
                let uri = mailto_uri(self.contact.recipient(), &draft);
                let delay = self.config.contact.submit_delay();
                Task::perform(
                    launcher::open_after(self.launcher.clone(), uri, delay),
                    Message::MailLaunched,
                )
            }
        }
    }

    fn handle_mail_launched(&mut self, result: Result<()>) {
        match result {
            Ok(()) => self.contact.complete(Instant::now()),
            Err(err) => {
                log::warn!("mail client launch failed: {err}");
                self.contact.fail();
                self.notifications
                    .push(Notification::error("notification-mail-launch-error"));
            }
        }
    }

    fn handle_tick(&mut self, now: Instant) {
        self.notifications.tick(now);
        let _ = self.contact.tick(now, self.config.contact.success_reset());
        if self.assets.has_pending() {
            self.spinner_rotation = animated_spinner::advance(self.spinner_rotation);
        }
    }

    /// Closes the innermost open layer: carousel, project detail, then menu.
    fn dismiss_topmost(&mut self) {
        if self.gallery.is_open() {
            let _ = self.gallery.handle(gallery::Message::Close);
        } else if self.projects.is_open() {
            let _ = self.projects.update(projects::Message::Close);
        } else {
            self.menu_open = false;
        }
    }

    pub(super) fn switch_section(&mut self, section: Section) -> Task<Message> {
        self.menu_open = false;
        if section == self.section {
            return Task::none();
        }
        log::debug!("switching to {section:?}");
        let _ = self.gallery.handle(gallery::Message::Close);
        let _ = self.projects.update(projects::Message::Close);
        self.section = section;
        self.request_assets(section)
    }

    fn persist_theme(&mut self) {
        self.config.general.theme_mode = self.theme_mode;
        if !self.persist_preferences {
            return;
        }
        if let Err(err) = crate::config::save(&self.config) {
            log::warn!("could not save theme preference: {err}");
            self.notifications
                .push(Notification::warning("notification-config-save-error"));
        }
    }

    fn open_link(&self, url: String) -> Task<Message> {
        Task::perform(
            launcher::open_after(self.launcher.clone(), url, Duration::ZERO),
            Message::LinkLaunched,
        )
    }
}
