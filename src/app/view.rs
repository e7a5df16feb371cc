// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The page is the navbar over a scrollable column holding the active
//! section and the footer. An open modal and the toast stack are layered on
//! top of the whole window.

use super::{Message, Section};
use crate::content::TAGLINES;
use crate::domain::profile::Tagline;
use crate::i18n::fluent::I18n;
use crate::media::AssetStore;
use crate::ui::components;
use crate::ui::navbar;
use crate::ui::notifications::{Manager, Toast};
use crate::ui::sections::{
    about, contact, footer, gallery, hero, honors, journey, projects, skills, PageContext,
};
use iced::widget::{scrollable, stack, Column, Container};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub section: Section,
    pub navbar: navbar::ViewContext<'a>,
    pub tagline: &'a Tagline,
    pub gallery: &'a gallery::State,
    pub projects: &'a projects::State,
    pub contact: &'a contact::State,
    pub assets: &'a AssetStore,
    pub notifications: &'a Manager,
    pub spinner_rotation: f32,
}

/// Renders the window content for the active section.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let page = PageContext {
        i18n: ctx.i18n,
        assets: ctx.assets,
        spinner_rotation: ctx.spinner_rotation,
    };

    let body = Column::new()
        .width(Length::Fill)
        .push(view_section(&ctx, page))
        .push(footer::view(ctx.i18n).map(Message::Page));

    let base: Element<'_, Message> = Column::new()
        .push(navbar::view(ctx.navbar).map(Message::Navbar))
        .push(scrollable(body).width(Length::Fill).height(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill)
        .into();

    let with_modal = if let Some(content) = ctx.gallery.modal_content(page) {
        components::modal(
            base,
            content.map(Message::Gallery),
            Message::Gallery(gallery::Message::Close),
        )
    } else if let Some(content) = ctx.projects.modal_content(page) {
        components::modal(
            base,
            content.map(Message::Projects),
            Message::Projects(projects::Message::Close),
        )
    } else {
        base
    };

    if !ctx.notifications.has_notifications() {
        return with_modal;
    }

    let toasts = Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification);
    Container::new(stack![with_modal, toasts])
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn view_section<'a>(ctx: &ViewContext<'a>, page: PageContext<'a>) -> Element<'a, Message> {
    match ctx.section {
        Section::Home => hero::view(hero::ViewContext {
            page,
            tagline: ctx.tagline.current(TAGLINES).unwrap_or_default(),
        })
        .map(Message::Page),
        Section::About => about::view(page).map(Message::Page),
        Section::Journey => journey::view(page).map(Message::Page),
        Section::Honors => honors::view(page).map(Message::Page),
        Section::Skills => skills::view(page).map(Message::Page),
        Section::Projects => ctx.projects.view(page).map(Message::Projects),
        Section::Gallery => ctx.gallery.view(page).map(Message::Gallery),
        Section::Contact => ctx.contact.view(page).map(Message::Contact),
    }
}

