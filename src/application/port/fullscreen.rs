// SPDX-License-Identifier: MPL-2.0
//! Platform fullscreen port.
//!
//! The overlay only requests transitions. The fullscreen icon follows the
//! platform's change notification, never the request itself.

use crate::error::FullscreenError;

pub trait FullscreenHost {
    /// Returns true if the player container is currently fullscreen.
    fn is_fullscreen(&self) -> bool;

    /// Asks the platform to make the player container fullscreen.
    ///
    /// # Errors
    ///
    /// Returns [`FullscreenError::Unsupported`] if the platform has no
    /// fullscreen entry point, or [`FullscreenError::Rejected`] if it refused.
    fn request_fullscreen(&mut self) -> Result<(), FullscreenError>;

    /// Asks the platform to leave fullscreen.
    ///
    /// # Errors
    ///
    /// Same as [`FullscreenHost::request_fullscreen`].
    fn exit_fullscreen(&mut self) -> Result<(), FullscreenError>;
}
