// SPDX-License-Identifier: MPL-2.0
//! Video playback domain types.
//!
//! This module contains playback value objects and enums that are
//! independent of any presentation or widget concerns.

pub mod newtypes;
pub mod playback;
pub mod progress;

pub use newtypes::{
    PlaybackRate, PollInterval, Quality, QuietPeriod, SkipStep, Volume, VolumeGlyph,
    VolumeState,
};
pub use playback::PlaybackState;
pub use progress::{format_time, ProgressSample, UNKNOWN_TIME};
