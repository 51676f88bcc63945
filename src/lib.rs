// SPDX-License-Identifier: MPL-2.0
//! `embed_controls` is a headless custom control overlay for an embedded
//! third-party video player.
//!
//! It mirrors the player's lifecycle onto a control surface, polls playback
//! progress, hides idle controls and turns user gestures into player
//! commands. Companion content (study materials, related videos, timeline)
//! is fetched from a JSON feed. Rendering produces a plain [`ui::ControlsView`]
//! that a thin host adapter paints.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod page;
pub mod runtime;
pub mod ui;
pub mod video_player;

#[cfg(test)]
pub(crate) mod test_utils;
