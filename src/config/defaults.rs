// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Idle**: Control surface auto-hide quiet period
//! - **Polling**: Progress sampling period
//! - **Seeking**: Double-activation skip amount
//! - **Rates**: Playback rate menu
//! - **Volume**: Volume range and glyph tiers

// ==========================================================================
// Idle/Quiet Period Defaults
// ==========================================================================

/// Default quiet period before the control surface hides (in seconds).
pub const DEFAULT_QUIET_PERIOD_SECS: u32 = 3;

/// Minimum quiet period (in seconds).
pub const MIN_QUIET_PERIOD_SECS: u32 = 1;

/// Maximum quiet period (in seconds).
pub const MAX_QUIET_PERIOD_SECS: u32 = 30;

// ==========================================================================
// Polling Defaults
// ==========================================================================

/// Default progress sampling period (in milliseconds).
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 500;

/// Minimum progress sampling period (in milliseconds).
pub const MIN_POLL_INTERVAL_MS: u64 = 100;

/// Maximum progress sampling period (in milliseconds).
pub const MAX_POLL_INTERVAL_MS: u64 = 5_000;

// ==========================================================================
// Seeking Defaults
// ==========================================================================

/// Default skip amount for double-activation on the video surface (seconds).
pub const DEFAULT_SKIP_STEP_SECS: f64 = 10.0;

/// Minimum skip amount (seconds).
pub const MIN_SKIP_STEP_SECS: f64 = 1.0;

/// Maximum skip amount (seconds).
pub const MAX_SKIP_STEP_SECS: f64 = 60.0;

// ==========================================================================
// Playback Rate Defaults
// ==========================================================================

/// Rates offered by the speed menu, in display order.
pub const PLAYBACK_RATE_MENU: &[f64] = &[0.25, 0.5, 0.75, 1.0, 1.25, 1.5, 1.75, 2.0];

/// Normal playback rate.
pub const DEFAULT_PLAYBACK_RATE: f64 = 1.0;

/// Tolerance when matching a reported rate against the menu.
pub const PLAYBACK_RATE_TOLERANCE: f64 = 0.01;

// ==========================================================================
// Volume Defaults
// ==========================================================================

/// Maximum volume level reported by the external player.
pub const MAX_VOLUME: u8 = 100;

/// Volume assumed before the player reports its own.
pub const DEFAULT_VOLUME: u8 = 100;

/// Levels below this show the low-volume glyph.
pub const LOW_VOLUME_THRESHOLD: u8 = 40;

// ==========================================================================
// Rating Defaults
// ==========================================================================

/// Number of stars in the rating widget.
pub const MAX_RATING: u8 = 5;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_QUIET_PERIOD_SECS > 0);
    assert!(MAX_QUIET_PERIOD_SECS >= MIN_QUIET_PERIOD_SECS);
    assert!(DEFAULT_QUIET_PERIOD_SECS >= MIN_QUIET_PERIOD_SECS);
    assert!(DEFAULT_QUIET_PERIOD_SECS <= MAX_QUIET_PERIOD_SECS);

    assert!(MIN_POLL_INTERVAL_MS > 0);
    assert!(MAX_POLL_INTERVAL_MS >= MIN_POLL_INTERVAL_MS);
    assert!(DEFAULT_POLL_INTERVAL_MS >= MIN_POLL_INTERVAL_MS);
    assert!(DEFAULT_POLL_INTERVAL_MS <= MAX_POLL_INTERVAL_MS);

    assert!(MIN_SKIP_STEP_SECS > 0.0);
    assert!(MAX_SKIP_STEP_SECS >= MIN_SKIP_STEP_SECS);
    assert!(DEFAULT_SKIP_STEP_SECS >= MIN_SKIP_STEP_SECS);
    assert!(DEFAULT_SKIP_STEP_SECS <= MAX_SKIP_STEP_SECS);

    assert!(LOW_VOLUME_THRESHOLD <= MAX_VOLUME);
    assert!(DEFAULT_VOLUME <= MAX_VOLUME);
    assert!(MAX_RATING > 0);
};
