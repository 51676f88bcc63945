// SPDX-License-Identifier: MPL-2.0
//! Domain layer - pure value types with no host or widget dependencies.
//!
//! - [`video`]: playback states and bounded playback values
//! - [`content`]: companion content (study materials, related videos, chapters)

pub mod content;
pub mod video;
