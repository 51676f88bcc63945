// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that infrastructure adapters implement.
//! These traits use only domain types, ensuring the overlay logic remains
//! independent of the widget, the page and the transport.
//!
//! # Available Ports
//!
//! - [`player`]: Control and query the embedded third-party player
//! - [`fullscreen`]: Platform fullscreen entry point
//! - [`feed`]: Companion content document source
//! - [`view`]: Paint a rendered control surface
//!
//! # Design Notes
//!
//! - Player commands are fire-and-forget; outcomes come back as [`PlayerEvent`]s
//! - Queries are cheap reads of the widget's last known values
//! - Only [`FeedSource`] is async; everything else runs on the dispatch queue

pub mod feed;
pub mod fullscreen;
pub mod player;
pub mod view;

pub use feed::FeedSource;
pub use fullscreen::FullscreenHost;
pub use player::{PlayerEvent, PlayerHandle, PlayerOptions};
pub use view::ViewSink;
