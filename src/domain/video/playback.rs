// SPDX-License-Identifier: MPL-2.0
//! Lifecycle states of the external player.
//!
//! The overlay never asserts a state locally. It only mirrors what the
//! widget reports through its state-changed callback.

use std::fmt;

/// Discrete lifecycle state reported by the external player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackState {
    /// Nothing loaded or played yet.
    #[default]
    Unstarted,
    /// Playback reached the end of the video.
    Ended,
    /// Video is currently playing.
    Playing,
    /// Video is paused at current position.
    Paused,
    /// Waiting for data.
    Buffering,
    /// Video loaded and ready to play.
    Cued,
}

impl PlaybackState {
    /// Maps a wire code from the external widget.
    ///
    /// Returns `None` for codes this crate does not know about. Callers log
    /// and ignore those so new widget states never break the overlay.
    #[must_use]
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            -1 => Some(Self::Unstarted),
            0 => Some(Self::Ended),
            1 => Some(Self::Playing),
            2 => Some(Self::Paused),
            3 => Some(Self::Buffering),
            5 => Some(Self::Cued),
            _ => None,
        }
    }

    /// Returns the wire code of this state.
    #[must_use]
    pub fn code(self) -> i32 {
        match self {
            Self::Unstarted => -1,
            Self::Ended => 0,
            Self::Playing => 1,
            Self::Paused => 2,
            Self::Buffering => 3,
            Self::Cued => 5,
        }
    }

    /// Returns true if the video is currently playing.
    #[must_use]
    pub fn is_playing(self) -> bool {
        matches!(self, Self::Playing)
    }

    /// Returns true while playback is running or about to resume.
    ///
    /// The play/pause toggle pauses in these states and plays otherwise.
    #[must_use]
    pub fn is_active(self) -> bool {
        matches!(self, Self::Playing | Self::Buffering)
    }
}

impl fmt::Display for PlaybackState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Unstarted => "unstarted",
            Self::Ended => "ended",
            Self::Playing => "playing",
            Self::Paused => "paused",
            Self::Buffering => "buffering",
            Self::Cued => "cued",
        };
        f.write_str(name)
    }
}
