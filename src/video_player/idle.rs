// SPDX-License-Identifier: MPL-2.0
//! Idle/visibility sub-component for the control surface.
//!
//! Controls are shown on any interaction and hidden after a quiet period
//! while the video plays untouched. The hide is checked twice: when it is
//! armed and again when it fires. A failed check at fire time skips the
//! hide without scheduling another one.

use super::timer::OneShotTimer;
use crate::domain::video::QuietPeriod;
use std::time::Instant;

/// Inputs owned by other components that gate the hide.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Context {
    /// The mirrored playback state is Playing.
    pub playing: bool,
    /// The settings menu or one of its submenus is open.
    pub menu_open: bool,
}

/// Idle timer state.
#[derive(Debug, Clone)]
pub struct State {
    quiet_period: QuietPeriod,
    timer: OneShotTimer,
    controls_visible: bool,
    cursor_hidden: bool,
    hovering: bool,
    focus_within: bool,
}

/// Messages for the idle sub-component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Show the controls and cancel any pending hide.
    Show,
    /// Schedule a hide if the hide conditions hold.
    ArmHide,
    /// Drop a pending hide without touching visibility.
    Cancel,
    /// Pointer entered the control surface.
    PointerEntered,
    /// Pointer left the control surface.
    PointerLeft,
    /// Pointer moved anywhere over the player wrapper.
    PointerMoved,
    /// Keyboard focus moved into the control surface.
    FocusIn,
    /// Keyboard focus left the control surface.
    FocusOut,
    /// The loop woke up; fire the hide if it is due.
    Tick,
}

/// Effects produced by visibility changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    VisibilityChanged(bool),
}

impl State {
    #[must_use]
    pub fn new(quiet_period: QuietPeriod) -> Self {
        Self {
            quiet_period,
            timer: OneShotTimer::default(),
            controls_visible: true,
            cursor_hidden: false,
            hovering: false,
            focus_within: false,
        }
    }

    /// Handle an idle message.
    pub fn handle(&mut self, msg: Message, ctx: Context, now: Instant) -> Effect {
        match msg {
            Message::Show => self.show(),
            Message::ArmHide => {
                self.arm_hide(ctx, now);
                Effect::None
            }
            Message::Cancel => {
                self.timer.cancel();
                Effect::None
            }
            Message::PointerEntered => {
                self.hovering = true;
                self.show()
            }
            Message::PointerLeft => {
                self.hovering = false;
                self.arm_hide(ctx, now);
                Effect::None
            }
            Message::FocusIn => {
                self.focus_within = true;
                self.show()
            }
            Message::FocusOut => {
                self.focus_within = false;
                self.arm_hide(ctx, now);
                Effect::None
            }
            Message::PointerMoved => {
                let effect = self.show();
                self.arm_hide(ctx, now);
                effect
            }
            Message::Tick => {
                if !self.timer.fire_if_due(now) {
                    return Effect::None;
                }
                if !self.may_hide(ctx) || !self.controls_visible {
                    log::debug!("Idle hide skipped, conditions changed");
                    return Effect::None;
                }
                self.controls_visible = false;
                self.cursor_hidden = true;
                Effect::VisibilityChanged(false)
            }
        }
    }

    fn show(&mut self) -> Effect {
        self.timer.cancel();
        self.cursor_hidden = false;
        if self.controls_visible {
            Effect::None
        } else {
            self.controls_visible = true;
            Effect::VisibilityChanged(true)
        }
    }

    fn arm_hide(&mut self, ctx: Context, now: Instant) {
        self.timer.cancel();
        if self.may_hide(ctx) {
            self.timer.schedule(now + self.quiet_period.as_duration());
        }
    }

    fn may_hide(&self, ctx: Context) -> bool {
        ctx.playing && !ctx.menu_open && !self.hovering && !self.focus_within
    }

    #[must_use]
    pub fn controls_visible(&self) -> bool {
        self.controls_visible
    }

    #[must_use]
    pub fn cursor_hidden(&self) -> bool {
        self.cursor_hidden
    }

    /// Pending hide deadline, if armed.
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.timer.deadline()
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new(QuietPeriod::default())
    }
}
