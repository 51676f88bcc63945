// SPDX-License-Identifier: MPL-2.0
//! Video playback newtypes.
//!
//! This module provides type-safe wrappers for playback values,
//! ensuring they are always within valid ranges.

use crate::config::{
    DEFAULT_PLAYBACK_RATE, DEFAULT_POLL_INTERVAL_MS, DEFAULT_QUIET_PERIOD_SECS,
    DEFAULT_SKIP_STEP_SECS, DEFAULT_VOLUME, LOW_VOLUME_THRESHOLD, MAX_POLL_INTERVAL_MS,
    MAX_QUIET_PERIOD_SECS, MAX_SKIP_STEP_SECS, MAX_VOLUME, MIN_POLL_INTERVAL_MS,
    MIN_QUIET_PERIOD_SECS, MIN_SKIP_STEP_SECS, PLAYBACK_RATE_MENU, PLAYBACK_RATE_TOLERANCE,
};
use std::fmt;
use std::time::Duration;

// =============================================================================
// Volume
// =============================================================================

/// Volume level as reported by the external player (0–100).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Volume(u8);

impl Volume {
    /// Creates a new volume level, clamping to valid range.
    #[must_use]
    pub fn new(level: u8) -> Self {
        Self(level.min(MAX_VOLUME))
    }

    /// Creates a volume from a raw slider value, clamping negatives to 0.
    #[must_use]
    pub fn from_slider(value: i32) -> Self {
        Self::new(value.clamp(0, i32::from(MAX_VOLUME)) as u8)
    }

    /// Returns the volume level.
    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }

    /// Returns true if the level is silent.
    #[must_use]
    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Returns the glyph tier for this level and mute flag.
    #[must_use]
    pub fn glyph(self, muted: bool) -> VolumeGlyph {
        if muted || self.is_zero() {
            VolumeGlyph::Muted
        } else if self.0 < LOW_VOLUME_THRESHOLD {
            VolumeGlyph::Low
        } else {
            VolumeGlyph::High
        }
    }
}

impl Default for Volume {
    fn default() -> Self {
        Self(DEFAULT_VOLUME)
    }
}

/// Icon shown on the volume button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VolumeGlyph {
    Muted,
    Low,
    High,
}

/// Mirrored volume: level plus mute flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VolumeState {
    pub level: Volume,
    pub muted: bool,
}

impl VolumeState {
    #[must_use]
    pub fn glyph(self) -> VolumeGlyph {
        self.level.glyph(self.muted)
    }

    /// Value shown on the slider. A muted player shows 0.
    #[must_use]
    pub fn slider_value(self) -> u8 {
        if self.muted {
            0
        } else {
            self.level.value()
        }
    }
}

// =============================================================================
// PlaybackRate
// =============================================================================

/// Playback rate, always one of the speed menu entries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaybackRate(f64);

impl PlaybackRate {
    /// Snaps a rate to the nearest menu entry.
    #[must_use]
    pub fn new(rate: f64) -> Self {
        if !rate.is_finite() {
            return Self::default();
        }
        let nearest = PLAYBACK_RATE_MENU
            .iter()
            .copied()
            .min_by(|a, b| (a - rate).abs().total_cmp(&(b - rate).abs()))
            .unwrap_or(DEFAULT_PLAYBACK_RATE);
        Self(nearest)
    }

    /// Returns all menu entries in display order.
    pub fn menu() -> impl Iterator<Item = PlaybackRate> {
        PLAYBACK_RATE_MENU.iter().copied().map(Self)
    }

    /// Returns the rate value as f64.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Returns true for normal speed.
    #[must_use]
    pub fn is_normal(self) -> bool {
        (self.0 - DEFAULT_PLAYBACK_RATE).abs() < PLAYBACK_RATE_TOLERANCE
    }

    /// Returns true if two rates designate the same menu entry.
    #[must_use]
    pub fn matches(self, other: PlaybackRate) -> bool {
        (self.0 - other.0).abs() < PLAYBACK_RATE_TOLERANCE
    }
}

impl Default for PlaybackRate {
    fn default() -> Self {
        Self(DEFAULT_PLAYBACK_RATE)
    }
}

impl fmt::Display for PlaybackRate {
    /// Multiplier form, e.g. `1.5×` or `2×`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}×", self.0)
    }
}

// =============================================================================
// Quality
// =============================================================================

/// Video quality levels offered by the external player, lowest first.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Quality {
    #[default]
    Auto,
    P144,
    P240,
    P360,
    P480,
    P720,
    P1080,
    P1440,
    P2160,
    /// A level this crate does not recognize, kept verbatim.
    Other(String),
}

impl Quality {
    /// Known levels in menu order.
    pub const LADDER: [Quality; 9] = [
        Quality::Auto,
        Quality::P144,
        Quality::P240,
        Quality::P360,
        Quality::P480,
        Quality::P720,
        Quality::P1080,
        Quality::P1440,
        Quality::P2160,
    ];

    /// Parses a wire label of the external player.
    #[must_use]
    pub fn from_api_label(label: &str) -> Self {
        match label {
            "auto" | "default" => Self::Auto,
            "tiny" => Self::P144,
            "small" => Self::P240,
            "medium" => Self::P360,
            "large" => Self::P480,
            "hd720" => Self::P720,
            "hd1080" => Self::P1080,
            "hd1440" => Self::P1440,
            "hd2160" | "highres" => Self::P2160,
            other => Self::Other(other.to_string()),
        }
    }

    /// Returns the wire label expected by the external player.
    #[must_use]
    pub fn api_label(&self) -> &str {
        match self {
            Self::Auto => "auto",
            Self::P144 => "tiny",
            Self::P240 => "small",
            Self::P360 => "medium",
            Self::P480 => "large",
            Self::P720 => "hd720",
            Self::P1080 => "hd1080",
            Self::P1440 => "hd1440",
            Self::P2160 => "hd2160",
            Self::Other(label) => label,
        }
    }

    /// Position in the ladder, `None` for unrecognized levels.
    #[must_use]
    pub fn rank(&self) -> Option<usize> {
        Self::LADDER.iter().position(|q| q == self)
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Auto => f.write_str("Auto"),
            Self::P144 => f.write_str("144p"),
            Self::P240 => f.write_str("240p"),
            Self::P360 => f.write_str("360p"),
            Self::P480 => f.write_str("480p"),
            Self::P720 => f.write_str("720p"),
            Self::P1080 => f.write_str("1080p"),
            Self::P1440 => f.write_str("1440p"),
            Self::P2160 => f.write_str("2160p"),
            Self::Other(label) => f.write_str(label),
        }
    }
}

// =============================================================================
// SkipStep
// =============================================================================

/// Seconds skipped by a double-activation on the video surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkipStep(f64);

impl SkipStep {
    /// Creates a new skip step, clamping to valid range.
    #[must_use]
    pub fn new(secs: f64) -> Self {
        if !secs.is_finite() {
            return Self::default();
        }
        Self(secs.clamp(MIN_SKIP_STEP_SECS, MAX_SKIP_STEP_SECS))
    }

    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl Default for SkipStep {
    fn default() -> Self {
        Self(DEFAULT_SKIP_STEP_SECS)
    }
}

// =============================================================================
// QuietPeriod
// =============================================================================

/// Inactivity delay before the control surface hides, in whole seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuietPeriod(u32);

impl QuietPeriod {
    /// Creates a new quiet period, clamping to valid range.
    #[must_use]
    pub fn new(secs: u32) -> Self {
        Self(secs.clamp(MIN_QUIET_PERIOD_SECS, MAX_QUIET_PERIOD_SECS))
    }

    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_secs(u64::from(self.0))
    }
}

impl Default for QuietPeriod {
    fn default() -> Self {
        Self(DEFAULT_QUIET_PERIOD_SECS)
    }
}

// =============================================================================
// PollInterval
// =============================================================================

/// Period of the progress poller, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollInterval(u64);

impl PollInterval {
    /// Creates a new poll interval, clamping to valid range.
    #[must_use]
    pub fn new(ms: u64) -> Self {
        Self(ms.clamp(MIN_POLL_INTERVAL_MS, MAX_POLL_INTERVAL_MS))
    }

    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for PollInterval {
    fn default() -> Self {
        Self(DEFAULT_POLL_INTERVAL_MS)
    }
}

// =============================================================================
// Tests
// =============================================================================
