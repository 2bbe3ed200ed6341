// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Screens
//!
//! - [`feedback_form`] - The feedback form and its thank-you screen
//!
//! # Shared Infrastructure
//!
//! - [`styles`] - Centralized styling (buttons, inputs, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`notifications`] - Toast notification system for user feedback

pub mod design_tokens;
pub mod feedback_form;
pub mod notifications;
pub mod styles;
pub mod theming;
