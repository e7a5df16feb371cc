// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module follows the Elm-style "state down, messages up" pattern.
//!
//! # Page
//!
//! - [`navbar`] - Section links, theme toggle, collapsible menu
//! - [`sections`] - Hero, about, journey, honors, skills, projects, gallery, contact, footer
//!
//! # Shared Infrastructure
//!
//! - [`components`] - Reusable pieces (image frame, chips, stars, modal)
//! - [`widgets`] - Custom Iced widgets (spinner)
//! - [`styles`] - Centralized styling (buttons, containers, overlays)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`notifications`] - Toast notification system for user feedback

pub mod components;
pub mod design_tokens;
pub mod navbar;
pub mod notifications;
pub mod sections;
pub mod styles;
pub mod theming;
pub mod widgets;
