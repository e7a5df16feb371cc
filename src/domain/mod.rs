// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core portfolio logic with ZERO external dependencies.
//!
//! This module contains pure state types, value objects, and business rules.
//! It has no dependencies on external crates (except `std`) so that every
//! widget behavior can be tested without a renderer or a runtime.
//!
//! # Modules
//!
//! - [`project`]: Authored project records ([`ProjectRecord`](project::ProjectRecord),
//!   [`ShowcaseProject`](project::ShowcaseProject)) and chip helpers
//! - [`filter`]: Category filter over the gallery ([`CategoryFilter`](filter::CategoryFilter))
//! - [`carousel`]: Focused-index selector with wrap-around ([`Carousel`](carousel::Carousel))
//! - [`asset`]: Per-image load tracking ([`LoadState`](asset::LoadState),
//!   [`AssetRegistry`](asset::AssetRegistry))
//! - [`contact`]: Contact form validation and `mailto:` drafting
//!   ([`ContactForm`](contact::ContactForm))
//! - [`skill`]: Skill ratings and star breakdowns ([`Rating`](skill::Rating))
//! - [`profile`]: Biography, timeline, and achievements

pub mod asset;
pub mod carousel;
pub mod contact;
pub mod filter;
pub mod profile;
pub mod project;
pub mod skill;
