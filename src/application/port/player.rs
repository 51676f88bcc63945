// SPDX-License-Identifier: MPL-2.0
//! External player port.
//!
//! The embedded widget is owned by a third party. It accepts imperative
//! commands, exposes read-only accessors and reports back asynchronously
//! through three callbacks: ready, state-changed and error.
//!
//! # Design Notes
//!
//! - Commands never return a result. Their effect is observed through a
//!   later [`PlayerEvent::StateChanged`] or through the accessors.
//! - State and error codes stay raw `i32` here so unknown codes reach the
//!   overlay, which logs and ignores them.

use crate::domain::video::{PlaybackRate, Quality, Volume};

/// Notification delivered by the widget on the dispatch queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerEvent {
    /// The widget finished loading and accepts commands.
    Ready,
    /// Lifecycle state changed to the given wire code.
    StateChanged(i32),
    /// The widget failed with the given error code.
    Error(i32),
}

/// Port for the embedded third-party player.
///
/// # Lifecycle
///
/// 1. The adapter creates the widget with [`PlayerOptions`]
/// 2. [`PlayerEvent::Ready`] arrives and `is_ready()` turns true
/// 3. Commands and queries are valid until the page view ends
///
/// Calls made before readiness are the caller's responsibility to skip.
pub trait PlayerHandle {
    /// Returns true once the widget accepts commands.
    fn is_ready(&self) -> bool;

    fn play(&mut self);

    fn pause(&mut self);

    /// Seeks to `secs`. With `allow_seek_ahead` the widget may fetch data
    /// beyond what is buffered.
    fn seek_to(&mut self, secs: f64, allow_seek_ahead: bool);

    fn set_volume(&mut self, volume: Volume);

    fn mute(&mut self);

    fn unmute(&mut self);

    fn set_playback_rate(&mut self, rate: PlaybackRate);

    /// Requests a quality level. The widget may ignore or delay it.
    fn set_playback_quality(&mut self, quality: &Quality);

    /// Current position in seconds.
    fn current_time(&self) -> f64;

    /// Duration in seconds, 0 or NaN while unknown.
    fn duration(&self) -> f64;

    /// Raw lifecycle state code.
    fn state_code(&self) -> i32;

    fn volume(&self) -> Volume;

    fn is_muted(&self) -> bool;

    fn playback_rate(&self) -> PlaybackRate;

    fn playback_quality(&self) -> Quality;

    /// Quality levels the widget offers for the current video.
    fn available_quality_levels(&self) -> Vec<Quality>;
}

/// Construction options of the embedded widget.
///
/// Defaults hide every native affordance the overlay replaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerOptions {
    /// Suggest related videos from other channels at the end.
    pub auto_advance_related: bool,
    /// Show the widget's own control bar.
    pub native_controls: bool,
    /// Keep the widget's branding to a minimum.
    pub minimal_branding: bool,
    /// Show video annotations.
    pub annotations: bool,
    /// Let the widget handle keyboard shortcuts itself.
    pub native_keyboard: bool,
    /// Play inline on mobile instead of going fullscreen.
    pub plays_inline: bool,
    pub autoplay: bool,
}

impl Default for PlayerOptions {
    fn default() -> Self {
        Self {
            auto_advance_related: false,
            native_controls: false,
            minimal_branding: true,
            annotations: false,
            native_keyboard: false,
            plays_inline: true,
            autoplay: false,
        }
    }
}

impl PlayerOptions {
    /// Exports the options as the widget's parameter map.
    #[must_use]
    pub fn to_params(&self) -> Vec<(&'static str, u8)> {
        vec![
            ("playsinline", u8::from(self.plays_inline)),
            ("autoplay", u8::from(self.autoplay)),
            ("controls", u8::from(self.native_controls)),
            ("rel", u8::from(self.auto_advance_related)),
            ("modestbranding", u8::from(self.minimal_branding)),
            // 1 shows annotations, 3 hides them
            ("iv_load_policy", if self.annotations { 1 } else { 3 }),
            ("disablekb", u8::from(!self.native_keyboard)),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options_hide_native_affordances() {
        let params = PlayerOptions::default().to_params();
        let get = |key: &str| {
            params
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| *v)
                .expect("parameter should be exported")
        };

        assert_eq!(get("playsinline"), 1);
        assert_eq!(get("autoplay"), 0);
        assert_eq!(get("controls"), 0);
        assert_eq!(get("rel"), 0);
        assert_eq!(get("modestbranding"), 1);
        assert_eq!(get("iv_load_policy"), 3);
        assert_eq!(get("disablekb"), 1);
    }

    #[test]
    fn annotations_switch_load_policy() {
        let options = PlayerOptions {
            annotations: true,
            ..PlayerOptions::default()
        };
        assert!(options.to_params().contains(&("iv_load_policy", 1)));
    }
}
