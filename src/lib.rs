// SPDX-License-Identifier: MPL-2.0
//! `iced_folio` is a personal portfolio viewer built with the Iced GUI framework.
//!
//! It presents a biography, a project showcase, a filterable gallery with a
//! carousel, and a contact form that hands a prepared message to the mail
//! client. The interface is localized with Fluent.

pub mod app;
pub mod content;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod media;
pub mod ui;

pub use app::config;
