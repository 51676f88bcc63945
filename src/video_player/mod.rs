// SPDX-License-Identifier: MPL-2.0
//! Player synchronization engine.
//!
//! Keeps the control surface in step with an external player it does not
//! own: lifecycle mirroring, progress polling, idle hiding and command
//! dispatch. Nothing here paints or blocks; timers are deadlines checked
//! by the dispatch loop.

pub mod dispatch;
pub mod idle;
pub mod mirror;
pub mod poller;
pub mod timer;

pub use dispatch::{Gesture, SurfaceSide};
pub use mirror::{effects_for, mirror_code, IdleCommand, MirrorEffects, PollerCommand, ToggleIcon};
pub use poller::ProgressPoller;
pub use timer::{OneShotTimer, RepeatingTimer};
