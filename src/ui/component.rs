// SPDX-License-Identifier: MPL-2.0
//! Overlay controller: the owned context of one page view.
//!
//! The controller owns the player handle, the timers and every mirrored
//! value. Player notifications, platform notifications, fetched content and
//! user gestures all enter through its methods; [`OverlayController::view`]
//! renders the result.
//!
//! After an external player error the controller stops reacting to
//! gestures and player state changes. The error placeholder stays until
//! the page view ends.

use super::content_lists::ContentLists;
use super::settings_menu::{self, Submenu};
use super::view::{render, ControlsView, OverlayState};
use crate::application::port::{FullscreenHost, PlayerEvent, PlayerHandle};
use crate::config::Config;
use crate::domain::content::VideoContent;
use crate::domain::video::{ProgressSample, SkipStep};
use crate::error::{FeedError, PlayerError};
use crate::i18n::I18n;
use crate::video_player::dispatch::{self, Gesture};
use crate::video_player::idle::{self, Context};
use crate::video_player::{mirror_code, IdleCommand, MirrorEffects, PollerCommand, ProgressPoller};
use std::time::Instant;

pub struct OverlayController<P, F> {
    handle: P,
    fullscreen: F,
    i18n: I18n,
    state: OverlayState,
    poller: ProgressPoller,
    idle: idle::State,
    skip_step: SkipStep,
    page_url: String,
}

impl<P: PlayerHandle, F: FullscreenHost> OverlayController<P, F> {
    pub fn new(handle: P, fullscreen: F, config: &Config, i18n: I18n, title: Option<String>) -> Self {
        let state = OverlayState {
            title,
            features: config.features,
            fullscreen: fullscreen.is_fullscreen(),
            ..OverlayState::default()
        };
        Self {
            handle,
            fullscreen,
            i18n,
            state,
            poller: ProgressPoller::new(config.player.poll_interval()),
            idle: idle::State::new(config.player.quiet_period()),
            skip_step: config.player.skip_step(),
            page_url: config.feed.page_url.clone(),
        }
    }

    #[must_use]
    pub fn handle(&self) -> &P {
        &self.handle
    }

    pub fn handle_mut(&mut self) -> &mut P {
        &mut self.handle
    }

    #[must_use]
    pub fn state(&self) -> &OverlayState {
        &self.state
    }

    #[must_use]
    pub fn i18n(&self) -> &I18n {
        &self.i18n
    }

    #[must_use]
    pub fn view(&self) -> ControlsView {
        render(&self.state, &self.i18n)
    }

    /// Earliest instant at which [`Self::tick`] has work to do.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        [self.poller.next_deadline(), self.idle.deadline()]
            .into_iter()
            .flatten()
            .min()
    }

    /// Fires whatever timers are due.
    pub fn tick(&mut self, now: Instant) {
        if let Some(sample) = self.poller.poll(&self.handle, now) {
            self.state.progress = sample;
        }
        self.idle_message(idle::Message::Tick, now);
    }

    // =========================================================================
    // Player notifications
    // =========================================================================

    pub fn on_player_event(&mut self, event: PlayerEvent, now: Instant) {
        match event {
            PlayerEvent::Ready => self.on_ready(now),
            PlayerEvent::StateChanged(code) => self.on_state_changed(code, now),
            PlayerEvent::Error(code) => self.on_error(PlayerError::from_code(code), now),
        }
    }

    fn on_ready(&mut self, now: Instant) {
        if self.state.player_error.is_some() {
            return;
        }
        log::info!("Player ready");
        self.state.loading_visible = false;
        self.state.volume.level = self.handle.volume();
        self.state.volume.muted = self.handle.is_muted();
        self.state.rate = self.handle.playback_rate();
        self.refresh_quality();
        if let Some(sample) = self.poller.sample(&self.handle) {
            self.state.progress = sample;
        }
        self.idle_message(idle::Message::Show, now);
        self.idle_message(idle::Message::ArmHide, now);
    }

    fn on_state_changed(&mut self, code: i32, now: Instant) {
        if self.state.player_error.is_some() {
            return;
        }
        let duration_known = self.state.progress.duration_secs().is_some();
        let Some((playback, effects)) = mirror_code(code, duration_known) else {
            return;
        };
        self.state.playback = playback;
        self.apply_effects(effects, now);
        // Quality requests are confirmed here, never optimistically.
        self.refresh_quality();
    }

    fn apply_effects(&mut self, effects: MirrorEffects, now: Instant) {
        if let Some(icon) = effects.icon {
            self.state.icon = icon;
        }
        if let Some(visible) = effects.overlay_visible {
            self.state.overlay_visible = visible;
        }
        self.state.loading_visible = effects.loading_visible;

        if effects.probe_duration {
            let probed = ProgressSample::new(self.state.progress.current_secs(), self.handle.duration())
                .merge_duration(self.state.progress.duration_secs());
            self.publish(probed);
        }

        match effects.poller {
            PollerCommand::Start => {
                if self.poller.start(now) {
                    if let Some(sample) = self.poller.poll(&self.handle, now) {
                        self.state.progress = sample;
                    }
                }
            }
            PollerCommand::Stop => self.poller.stop(),
            PollerCommand::Keep => {}
        }

        if effects.reset_position {
            self.state.drag_preview = None;
            self.publish(self.state.progress.with_position(0.0));
        }

        match effects.idle {
            IdleCommand::Show => self.idle_message(idle::Message::Show, now),
            IdleCommand::ArmHide => self.idle_message(idle::Message::ArmHide, now),
            IdleCommand::Cancel => self.idle_message(idle::Message::Cancel, now),
        }
    }

    fn on_error(&mut self, error: PlayerError, now: Instant) {
        log::error!("Player error {}: {error}", error.code());
        self.state.player_error = Some(error);
        self.state.loading_visible = false;
        self.poller.stop();
        self.idle_message(idle::Message::Show, now);
    }

    /// Platform notification that fullscreen was entered or left.
    pub fn on_fullscreen_changed(&mut self, active: bool) {
        self.state.fullscreen = active;
    }

    /// Result of the companion content fetch.
    pub fn on_content_loaded(&mut self, result: Result<Option<VideoContent>, FeedError>) {
        self.state.lists = ContentLists::from_feed(&result, &self.page_url);
    }

    // =========================================================================
    // Gestures
    // =========================================================================

    pub fn on_gesture(&mut self, gesture: Gesture, now: Instant) {
        if self.state.player_error.is_some() {
            log::debug!("Ignoring {gesture:?} after player error");
            return;
        }
        match gesture {
            Gesture::TogglePlay => {
                dispatch::toggle_play(&mut self.handle, self.state.playback);
            }
            Gesture::SeekDrag(secs) => {
                self.state.drag_preview = Some(secs.max(0.0));
            }
            Gesture::SeekCommit(secs) => {
                self.state.drag_preview = None;
                if dispatch::commit_seek(&mut self.handle, secs) {
                    self.publish(self.state.progress.with_position(secs));
                }
            }
            Gesture::VolumeDrag(raw) => {
                dispatch::apply_volume(&mut self.handle, raw, &mut self.state.volume);
            }
            Gesture::ToggleMute => {
                dispatch::toggle_mute(&mut self.handle, &mut self.state.volume);
            }
            Gesture::SelectRate(rate) => {
                if !self.feature_enabled(self.state.features.settings_menu, "settings menu") {
                    return;
                }
                if let Some(rate) = dispatch::select_rate(&mut self.handle, rate) {
                    self.state.rate = rate;
                }
                self.menu_message(settings_menu::Message::Picked, now);
            }
            Gesture::SelectQuality(quality) => {
                if !self.feature_enabled(self.state.features.settings_menu, "settings menu") {
                    return;
                }
                dispatch::select_quality(&mut self.handle, &quality);
                self.menu_message(settings_menu::Message::Picked, now);
            }
            Gesture::DoubleActivate(side) => {
                let duration = self.state.progress.duration_secs();
                if let Some(target) = dispatch::skip(&mut self.handle, duration, self.skip_step, side) {
                    self.publish(self.state.progress.with_position(target));
                }
            }
            Gesture::ToggleFullscreen => self.toggle_fullscreen(),
            Gesture::ActivateChapter(index) => {
                if !self.feature_enabled(self.state.features.tabs, "timeline tab") {
                    return;
                }
                match self.state.lists.chapter_time(index) {
                    Some(secs) => {
                        dispatch::activate_chapter(&mut self.handle, secs, self.state.playback);
                    }
                    None => log::warn!("No timeline chapter at index {index}"),
                }
            }
            Gesture::PointerEnteredControls => self.idle_message(idle::Message::PointerEntered, now),
            Gesture::PointerLeftControls => self.idle_message(idle::Message::PointerLeft, now),
            Gesture::PointerMoved => self.idle_message(idle::Message::PointerMoved, now),
            Gesture::FocusIn => self.idle_message(idle::Message::FocusIn, now),
            Gesture::FocusOut => self.idle_message(idle::Message::FocusOut, now),
            Gesture::ToggleSettings => self.menu_message(settings_menu::Message::Toggle, now),
            Gesture::OpenSubmenu(submenu) => {
                if submenu == Submenu::Quality {
                    self.refresh_quality_levels();
                }
                self.menu_message(settings_menu::Message::Open(submenu), now);
            }
            Gesture::MenuBack => self.menu_message(settings_menu::Message::Back, now),
            Gesture::ClickOutsideMenu => self.menu_message(settings_menu::Message::ClickOutside, now),
            Gesture::SelectTab(tab) => {
                if self.feature_enabled(self.state.features.tabs, "tabs") {
                    self.state.tabs.select(tab);
                }
            }
            Gesture::RatingHover(stars) => {
                if self.feature_enabled(self.state.features.rating, "rating") {
                    self.state.rating.hover(stars);
                }
            }
            Gesture::RatingLeave => {
                if self.feature_enabled(self.state.features.rating, "rating") {
                    self.state.rating.leave();
                }
            }
            Gesture::RatingCommit(stars) => {
                if self.feature_enabled(self.state.features.rating, "rating") {
                    self.state.rating.commit(stars);
                }
            }
        }
    }

    fn toggle_fullscreen(&mut self) {
        if !self.feature_enabled(self.state.features.fullscreen, "fullscreen button") {
            return;
        }
        let result = if self.fullscreen.is_fullscreen() {
            self.fullscreen.exit_fullscreen()
        } else {
            self.fullscreen.request_fullscreen()
        };
        if let Err(err) = result {
            log::warn!("Fullscreen toggle failed: {err}");
        }
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    fn publish(&mut self, sample: ProgressSample) {
        self.poller.publish(sample);
        self.state.progress = sample;
    }

    /// Re-reads the confirmed quality and the offered levels.
    fn refresh_quality(&mut self) {
        if !self.handle.is_ready() {
            return;
        }
        self.state.quality = self.handle.playback_quality();
        self.refresh_quality_levels();
    }

    /// Re-reads only the offered levels; the label keeps the confirmed quality.
    fn refresh_quality_levels(&mut self) {
        if !self.handle.is_ready() {
            return;
        }
        self.state.available_qualities = self.handle.available_quality_levels();
    }

    fn menu_message(&mut self, msg: settings_menu::Message, now: Instant) {
        if !self.feature_enabled(self.state.features.settings_menu, "settings menu") {
            return;
        }
        match self.state.menu.handle(msg) {
            settings_menu::Effect::Opened => self.idle_message(idle::Message::Show, now),
            settings_menu::Effect::Closed => self.idle_message(idle::Message::ArmHide, now),
            settings_menu::Effect::None => {}
        }
    }

    fn idle_message(&mut self, msg: idle::Message, now: Instant) {
        let ctx = Context {
            playing: self.state.playback.is_playing(),
            menu_open: self.state.menu.is_open(),
        };
        if let idle::Effect::VisibilityChanged(visible) = self.idle.handle(msg, ctx, now) {
            log::debug!("Controls visible: {visible}");
            self.state.controls_visible = visible;
        }
        self.state.cursor_hidden = self.idle.cursor_hidden();
    }

    fn feature_enabled(&self, enabled: bool, name: &str) -> bool {
        if !enabled {
            log::warn!("Ignoring gesture for {name}: not present on this page");
        }
        enabled
    }
}
