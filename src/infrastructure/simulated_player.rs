// SPDX-License-Identifier: MPL-2.0
//! In-process stand-in for the embedded third-party player.
//!
//! Behaves like the widget from the overlay's point of view: commands are
//! recorded, state changes come back as [`PlayerEvent`]s on a channel, the
//! position advances with the clock while playing and reaching the end
//! reports Ended. Used by the CLI and by tests.

use crate::application::port::{PlayerEvent, PlayerHandle, PlayerOptions};
use crate::domain::video::{PlaybackRate, PlaybackState, Quality, Volume};
use std::cell::Cell;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};
use tokio::time::Instant;

/// One command received by the simulated player.
#[derive(Debug, Clone, PartialEq)]
pub enum PlayerCall {
    Play,
    Pause,
    SeekTo(f64, bool),
    SetVolume(u8),
    Mute,
    Unmute,
    SetRate(f64),
    SetQuality(Quality),
}

#[derive(Debug)]
pub struct SimulatedPlayer {
    events: UnboundedSender<PlayerEvent>,
    options: PlayerOptions,
    ready: bool,
    error_code: Option<i32>,
    duration: f64,
    state: Cell<PlaybackState>,
    /// Position at `anchor`, or the frozen position when not playing.
    position: Cell<f64>,
    anchor: Cell<Option<Instant>>,
    volume: Volume,
    muted: bool,
    rate: PlaybackRate,
    quality: Quality,
    levels: Vec<Quality>,
    calls: Vec<PlayerCall>,
}

impl SimulatedPlayer {
    /// Creates a player for a video of `duration_secs`; 0 means unknown.
    ///
    /// Returns the receiving end of its notification channel.
    pub fn new(duration_secs: f64) -> (Self, UnboundedReceiver<PlayerEvent>) {
        let (events, receiver) = unbounded_channel();
        let player = Self {
            events,
            options: PlayerOptions::default(),
            ready: false,
            error_code: None,
            duration: duration_secs,
            state: Cell::new(PlaybackState::Unstarted),
            position: Cell::new(0.0),
            anchor: Cell::new(None),
            volume: Volume::default(),
            muted: false,
            rate: PlaybackRate::default(),
            quality: Quality::Auto,
            levels: vec![
                Quality::P1080,
                Quality::P720,
                Quality::P480,
                Quality::P360,
                Quality::Auto,
            ],
            calls: Vec::new(),
        };
        (player, receiver)
    }

    /// Makes the next [`Self::boot`] fail with the given widget error code.
    #[must_use]
    pub fn with_error(mut self, code: i32) -> Self {
        self.error_code = Some(code);
        self
    }

    /// Embedding options; `autoplay` starts playback right after boot.
    #[must_use]
    pub fn with_options(mut self, options: PlayerOptions) -> Self {
        self.options = options;
        self
    }

    #[must_use]
    pub fn with_quality_levels(mut self, levels: Vec<Quality>) -> Self {
        self.levels = levels;
        self
    }

    /// Finishes loading: reports ready and cued, or the configured error.
    pub fn boot(&mut self) {
        log::debug!("Embedding player with {:?}", self.options.to_params());
        if let Some(code) = self.error_code {
            self.emit(PlayerEvent::Error(code));
            return;
        }
        self.ready = true;
        self.emit(PlayerEvent::Ready);
        self.set_state(PlaybackState::Cued);
        if self.options.autoplay {
            self.anchor.set(Some(Instant::now()));
            self.set_state(PlaybackState::Playing);
        }
    }

    /// Commands received so far, oldest first.
    #[must_use]
    pub fn calls(&self) -> &[PlayerCall] {
        &self.calls
    }

    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }

    fn emit(&self, event: PlayerEvent) {
        if self.events.send(event).is_err() {
            log::debug!("Dropped {event:?}, nobody is listening");
        }
    }

    fn set_state(&self, state: PlaybackState) {
        self.state.set(state);
        self.emit(PlayerEvent::StateChanged(state.code()));
    }

    fn position_at(&self, now: Instant) -> f64 {
        let base = self.position.get();
        match self.anchor.get() {
            Some(anchor) => base + now.duration_since(anchor).as_secs_f64() * self.rate.value(),
            None => base,
        }
    }

    /// Folds elapsed play time into the stored position.
    fn freeze(&self, now: Instant) {
        self.position.set(self.position_at(now));
        if self.anchor.get().is_some() {
            self.anchor.set(Some(now));
        }
    }

    fn clamp(&self, secs: f64) -> f64 {
        if self.duration > 0.0 {
            secs.clamp(0.0, self.duration)
        } else {
            secs.max(0.0)
        }
    }
}

impl PlayerHandle for SimulatedPlayer {
    fn is_ready(&self) -> bool {
        self.ready
    }

    fn play(&mut self) {
        self.calls.push(PlayerCall::Play);
        if !self.ready || self.state.get() == PlaybackState::Playing {
            return;
        }
        if self.state.get() == PlaybackState::Ended {
            self.position.set(0.0);
        }
        self.anchor.set(Some(Instant::now()));
        self.set_state(PlaybackState::Playing);
    }

    fn pause(&mut self) {
        self.calls.push(PlayerCall::Pause);
        if !self.ready {
            return;
        }
        self.freeze(Instant::now());
        self.anchor.set(None);
        self.set_state(PlaybackState::Paused);
    }

    fn seek_to(&mut self, secs: f64, allow_seek_ahead: bool) {
        self.calls.push(PlayerCall::SeekTo(secs, allow_seek_ahead));
        let secs = self.clamp(secs);
        self.position.set(secs);
        if self.anchor.get().is_some() {
            self.anchor.set(Some(Instant::now()));
        }
    }

    fn set_volume(&mut self, volume: Volume) {
        self.calls.push(PlayerCall::SetVolume(volume.value()));
        self.volume = volume;
    }

    fn mute(&mut self) {
        self.calls.push(PlayerCall::Mute);
        self.muted = true;
    }

    fn unmute(&mut self) {
        self.calls.push(PlayerCall::Unmute);
        self.muted = false;
    }

    fn set_playback_rate(&mut self, rate: PlaybackRate) {
        self.calls.push(PlayerCall::SetRate(rate.value()));
        self.freeze(Instant::now());
        self.rate = rate;
    }

    fn set_playback_quality(&mut self, quality: &Quality) {
        self.calls.push(PlayerCall::SetQuality(quality.clone()));
        if self.levels.contains(quality) {
            self.quality = quality.clone();
        } else {
            log::debug!("Simulated player ignores unavailable quality {quality}");
        }
    }

    fn current_time(&self) -> f64 {
        let position = self.position_at(Instant::now());
        if self.duration > 0.0
            && position >= self.duration
            && self.state.get() == PlaybackState::Playing
        {
            self.position.set(self.duration);
            self.anchor.set(None);
            self.set_state(PlaybackState::Ended);
            return self.duration;
        }
        self.clamp(position)
    }

    fn duration(&self) -> f64 {
        self.duration
    }

    fn state_code(&self) -> i32 {
        self.state.get().code()
    }

    fn volume(&self) -> Volume {
        self.volume
    }

    fn is_muted(&self) -> bool {
        self.muted
    }

    fn playback_rate(&self) -> PlaybackRate {
        self.rate
    }

    fn playback_quality(&self) -> Quality {
        self.quality.clone()
    }

    fn available_quality_levels(&self) -> Vec<Quality> {
        self.levels.clone()
    }
}
