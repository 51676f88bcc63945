// SPDX-License-Identifier: MPL-2.0
//! Companion content source port.

use crate::domain::content::{parse_video_content, VideoContent};
use crate::error::FeedError;

/// Fetches the raw companion content document.
///
/// A fetch is a single best-effort attempt. Callers do not retry.
#[allow(async_fn_in_trait)]
pub trait FeedSource {
    /// Returns the document body.
    ///
    /// # Errors
    ///
    /// Returns a [`FeedError`] if the document cannot be read.
    async fn fetch(&self) -> Result<String, FeedError>;

    /// Human readable location, used in logs.
    fn describe(&self) -> String;

    /// Fetches the document and extracts the entry for `video_id`.
    ///
    /// # Errors
    ///
    /// Returns a [`FeedError`] if the document cannot be read or is not JSON.
    async fn load(&self, video_id: &str) -> Result<Option<VideoContent>, FeedError> {
        log::debug!("Loading companion content from {}", self.describe());
        let document = self.fetch().await?;
        parse_video_content(&document, video_id)
    }
}
