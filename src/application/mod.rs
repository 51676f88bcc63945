// SPDX-License-Identifier: MPL-2.0
//! Application layer - ports the overlay talks through.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - The overlay controller only sees the traits
//!
//! # Example
//!
//! ```ignore
//! use embed_controls::application::port::PlayerHandle;
//!
//! fn restart(player: &mut impl PlayerHandle) {
//!     player.seek_to(0.0, true);
//!     player.play();
//! }
//! ```

pub mod port;
