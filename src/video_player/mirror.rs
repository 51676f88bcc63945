// SPDX-License-Identifier: MPL-2.0
//! Mirrors the external player's lifecycle onto the control surface.
//!
//! Every state maps to a fixed set of UI effects. The table is a `match`,
//! so adding a state without deciding its effects does not compile.

use crate::domain::video::PlaybackState;

/// Glyph on the play/pause toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToggleIcon {
    /// Shows "play"; a press starts playback.
    #[default]
    Play,
    /// Shows "pause"; a press pauses.
    Pause,
}

/// What the progress poller should do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollerCommand {
    Start,
    Stop,
    Keep,
}

/// What the idle timer should do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdleCommand {
    /// Show the controls and cancel any pending hide.
    Show,
    /// Schedule a hide after the quiet period.
    ArmHide,
    /// Drop a pending hide, visibility unchanged.
    Cancel,
}

/// UI effects of one state transition. `None` fields stay unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MirrorEffects {
    pub icon: Option<ToggleIcon>,
    pub overlay_visible: Option<bool>,
    pub loading_visible: bool,
    pub poller: PollerCommand,
    pub idle: IdleCommand,
    /// Force the displayed position to zero, keeping the duration.
    pub reset_position: bool,
    /// Read the duration from the handle right away.
    pub probe_duration: bool,
}

/// Returns the effects of entering `state`.
///
/// `duration_known` tells whether a duration was already sampled; Playing
/// and Paused probe it again while it is still unknown.
#[must_use]
pub fn effects_for(state: PlaybackState, duration_known: bool) -> MirrorEffects {
    match state {
        PlaybackState::Playing => MirrorEffects {
            icon: Some(ToggleIcon::Pause),
            overlay_visible: Some(false),
            loading_visible: false,
            poller: PollerCommand::Start,
            idle: IdleCommand::ArmHide,
            reset_position: false,
            probe_duration: !duration_known,
        },
        PlaybackState::Paused => MirrorEffects {
            icon: Some(ToggleIcon::Play),
            overlay_visible: Some(true),
            loading_visible: false,
            poller: PollerCommand::Stop,
            idle: IdleCommand::Show,
            reset_position: false,
            probe_duration: !duration_known,
        },
        PlaybackState::Ended => MirrorEffects {
            icon: Some(ToggleIcon::Play),
            overlay_visible: Some(true),
            loading_visible: false,
            poller: PollerCommand::Stop,
            idle: IdleCommand::Show,
            reset_position: true,
            probe_duration: false,
        },
        PlaybackState::Buffering => MirrorEffects {
            icon: None,
            overlay_visible: None,
            loading_visible: true,
            poller: PollerCommand::Stop,
            idle: IdleCommand::Cancel,
            reset_position: false,
            probe_duration: false,
        },
        PlaybackState::Cued => MirrorEffects {
            icon: None,
            overlay_visible: Some(true),
            loading_visible: false,
            poller: PollerCommand::Keep,
            idle: IdleCommand::Cancel,
            reset_position: false,
            probe_duration: true,
        },
        PlaybackState::Unstarted => MirrorEffects {
            icon: None,
            overlay_visible: Some(true),
            loading_visible: false,
            poller: PollerCommand::Keep,
            idle: IdleCommand::Cancel,
            reset_position: false,
            probe_duration: false,
        },
    }
}

/// Decodes a raw state code and returns the new state with its effects.
///
/// Unknown codes are logged and yield `None`; the caller keeps its state.
#[must_use]
pub fn mirror_code(code: i32, duration_known: bool) -> Option<(PlaybackState, MirrorEffects)> {
    let Some(state) = PlaybackState::from_code(code) else {
        log::warn!("Ignoring unknown player state code {code}");
        return None;
    };
    log::debug!("Player state changed to {state}");
    Some((state, effects_for(state, duration_known)))
}
