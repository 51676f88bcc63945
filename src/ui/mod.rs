// SPDX-License-Identifier: MPL-2.0
//! Control surface components and state management.
//!
//! This module follows the Elm-style "state down, messages up" pattern:
//! sub-components own a small `State`, react to a `Message` and report an
//! `Effect`. The [`component`] module orchestrates them.
//!
//! - [`component`] - Owned per-page context wiring everything together
//! - [`view`] - Pure rendering into a [`ControlsView`]
//! - [`settings_menu`] - Speed and quality menu
//! - [`tabs`] - Companion content tabs
//! - [`rating`] - Star rating
//! - [`content_lists`] - Study materials, related videos and timeline rows

pub mod component;
pub mod content_lists;
pub mod rating;
pub mod settings_menu;
pub mod tabs;
pub mod view;

pub use component::OverlayController;
pub use view::{render, ControlsView, OverlayState};
