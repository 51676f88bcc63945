// SPDX-License-Identifier: MPL-2.0
//! Command dispatch: user gestures to player commands.
//!
//! Each command issues at most one handle call per gesture, plus the
//! unmute that precedes a volume change while muted. Every command is a
//! silent no-op until the handle reports ready.

use crate::application::port::PlayerHandle;
use crate::domain::video::{PlaybackRate, PlaybackState, Quality, SkipStep, Volume, VolumeState};
use crate::ui::settings_menu::Submenu;
use crate::ui::tabs::Tab;

/// Half of the video surface that received a double-activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceSide {
    Left,
    Right,
}

impl SurfaceSide {
    /// Picks the half from a pointer x coordinate within a surface of `width`.
    #[must_use]
    pub fn from_position(x: f64, width: f64) -> Self {
        if x < width / 2.0 {
            Self::Left
        } else {
            Self::Right
        }
    }
}

/// Everything the host page can forward to the overlay.
#[derive(Debug, Clone, PartialEq)]
pub enum Gesture {
    /// Play/pause button or the big overlay button.
    TogglePlay,
    /// Progress bar dragged to a position in seconds.
    SeekDrag(f64),
    /// Progress bar released at a position in seconds.
    SeekCommit(f64),
    /// Volume slider moved to a raw value.
    VolumeDrag(i32),
    ToggleMute,
    SelectRate(f64),
    SelectQuality(Quality),
    DoubleActivate(SurfaceSide),
    ToggleFullscreen,
    /// Timeline row activated by click, Enter or Space.
    ActivateChapter(usize),
    PointerEnteredControls,
    PointerLeftControls,
    PointerMoved,
    FocusIn,
    FocusOut,
    /// Gear button.
    ToggleSettings,
    OpenSubmenu(Submenu),
    MenuBack,
    /// Click anywhere outside the settings menu.
    ClickOutsideMenu,
    SelectTab(Tab),
    RatingHover(u8),
    RatingLeave,
    RatingCommit(u8),
}

/// Toggles playback from the mirrored state.
///
/// Playing and Buffering pause; every other state plays.
pub fn toggle_play<P: PlayerHandle>(handle: &mut P, state: PlaybackState) -> bool {
    if !handle.is_ready() {
        return false;
    }
    if state.is_active() {
        handle.pause();
    } else {
        handle.play();
    }
    true
}

/// Commits a seek with seek-ahead allowed.
pub fn commit_seek<P: PlayerHandle>(handle: &mut P, secs: f64) -> bool {
    if !handle.is_ready() {
        return false;
    }
    handle.seek_to(secs.max(0.0), true);
    true
}

/// Applies a slider value, unmuting first when needed.
///
/// The mirrored volume is updated without waiting for the widget.
pub fn apply_volume<P: PlayerHandle>(handle: &mut P, raw: i32, mirror: &mut VolumeState) -> bool {
    if !handle.is_ready() {
        return false;
    }
    let level = Volume::from_slider(raw);
    if handle.is_muted() && !level.is_zero() {
        handle.unmute();
        mirror.muted = false;
    }
    handle.set_volume(level);
    mirror.level = level;
    true
}

/// Mutes or unmutes based on the handle's own flag, then refreshes the mirror.
pub fn toggle_mute<P: PlayerHandle>(handle: &mut P, mirror: &mut VolumeState) -> bool {
    if !handle.is_ready() {
        return false;
    }
    if handle.is_muted() {
        handle.unmute();
        mirror.muted = false;
    } else {
        handle.mute();
        mirror.muted = true;
    }
    mirror.level = handle.volume();
    true
}

/// Requests a playback rate and returns the value to show right away.
pub fn select_rate<P: PlayerHandle>(handle: &mut P, rate: f64) -> Option<PlaybackRate> {
    if !handle.is_ready() {
        return None;
    }
    let rate = PlaybackRate::new(rate);
    handle.set_playback_rate(rate);
    Some(rate)
}

/// Requests a quality level. The label waits for the widget to confirm.
pub fn select_quality<P: PlayerHandle>(handle: &mut P, quality: &Quality) -> bool {
    if !handle.is_ready() {
        return false;
    }
    handle.set_playback_quality(quality);
    true
}

/// Position reached by skipping from `current` toward `side`.
///
/// Backward skips stop at 0. Forward skips stop at the duration when it is
/// known and are unbounded otherwise.
#[must_use]
pub fn skip_target(current: f64, duration: Option<f64>, step: SkipStep, side: SurfaceSide) -> f64 {
    match side {
        SurfaceSide::Left => (current - step.value()).max(0.0),
        SurfaceSide::Right => {
            let target = current + step.value();
            duration.map_or(target, |d| target.min(d))
        }
    }
}

/// Skips by one step and returns the new position.
pub fn skip<P: PlayerHandle>(
    handle: &mut P,
    duration: Option<f64>,
    step: SkipStep,
    side: SurfaceSide,
) -> Option<f64> {
    if !handle.is_ready() {
        return None;
    }
    let target = skip_target(handle.current_time(), duration, step, side);
    handle.seek_to(target, true);
    Some(target)
}

/// Seeks to a chapter and starts playback if it was not playing.
pub fn activate_chapter<P: PlayerHandle>(handle: &mut P, secs: f64, state: PlaybackState) -> bool {
    if !handle.is_ready() {
        return false;
    }
    handle.seek_to(secs, true);
    if !state.is_playing() {
        handle.play();
    }
    true
}
