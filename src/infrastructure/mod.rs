// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`.
//!
//! # Available Adapters
//!
//! - [`feed`]: Companion content from a file or over HTTP (implements [`FeedSource`])
//! - [`simulated_player`]: In-process player (implements [`PlayerHandle`])
//! - [`terminal`]: Text view sink and fullscreen hosts for the simulator
//!
//! [`FeedSource`]: crate::application::port::FeedSource
//! [`PlayerHandle`]: crate::application::port::PlayerHandle

pub mod feed;
pub mod simulated_player;
pub mod terminal;

pub use feed::{AnyFeed, FileFeed, HttpFeed};
pub use simulated_player::{PlayerCall, SimulatedPlayer};
pub use terminal::{NoFullscreen, SimulatedFullscreen, TerminalView};
