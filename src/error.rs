// SPDX-License-Identifier: MPL-2.0
//! Error types shared across the crate.
//!
//! Errors never abort a page view. The worst outcome is a degraded page:
//! a player error replaces the control surface, a feed error replaces the
//! companion lists, a config error falls back to defaults.

use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),

    #[error("Config Error: {0}")]
    Config(String),

    #[error("Argument Error: {0}")]
    Args(String),

    #[error("Feed Error: {0}")]
    Feed(#[from] FeedError),

    #[error("Page Error: {0}")]
    Page(#[from] PageError),

    #[error("Player Error: {0}")]
    Player(#[from] PlayerError),
}

/// Errors reported by the external player through its error callback.
///
/// Each variant carries the wire code it was built from so diagnostics can
/// show the raw value next to the friendly message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlayerError {
    /// Invalid video identifier or request parameter (code 2).
    #[error("invalid video id or request parameter")]
    BadRequest,

    /// The video cannot be played in the embedded player (code 5).
    #[error("video cannot be played in this player")]
    Unsupported,

    /// Video not found or removed by its owner (code 100).
    #[error("video not found or removed")]
    NotFound,

    /// Embedding is restricted by the owner (codes 101 and 150).
    #[error("playback restricted by the owner (code {0})")]
    Restricted(i32),

    /// Any code the widget may add later.
    #[error("unknown player error (code {0})")]
    Unknown(i32),
}

impl PlayerError {
    /// Maps a raw error code from the external widget.
    #[must_use]
    pub fn from_code(code: i32) -> Self {
        match code {
            2 => Self::BadRequest,
            5 => Self::Unsupported,
            100 => Self::NotFound,
            101 | 150 => Self::Restricted(code),
            other => Self::Unknown(other),
        }
    }

    /// Returns the wire code.
    #[must_use]
    pub fn code(self) -> i32 {
        match self {
            Self::BadRequest => 2,
            Self::Unsupported => 5,
            Self::NotFound => 100,
            Self::Restricted(code) | Self::Unknown(code) => code,
        }
    }

    /// Returns the i18n message key for this error.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            Self::BadRequest => "error-player-bad-request",
            Self::Unsupported => "error-player-unsupported",
            Self::NotFound => "error-player-not-found",
            Self::Restricted(_) => "error-player-restricted",
            Self::Unknown(_) => "error-player-unknown",
        }
    }
}

/// Failures while loading the companion content feed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedError {
    #[error("HTTP error! Status: {0}")]
    Http(u16),

    #[error("network error: {0}")]
    Network(String),

    #[error("invalid feed document: {0}")]
    Parse(String),

    #[error("cannot read feed: {0}")]
    Io(String),
}

impl From<serde_json::Error> for FeedError {
    fn from(err: serde_json::Error) -> Self {
        FeedError::Parse(err.to_string())
    }
}

impl From<reqwest::Error> for FeedError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => FeedError::Http(status.as_u16()),
            None => FeedError::Network(err.to_string()),
        }
    }
}

/// Problems with the page URL the overlay was opened from.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PageError {
    #[error("invalid page url: {0}")]
    InvalidUrl(String),

    #[error("missing video id parameter")]
    MissingVideoId,
}

impl PageError {
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            PageError::InvalidUrl(_) => "error-page-invalid-url",
            PageError::MissingVideoId => "error-page-missing-video-id",
        }
    }
}

/// The platform refused or does not offer a fullscreen entry point.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FullscreenError {
    #[error("fullscreen is not supported by this platform")]
    Unsupported,

    #[error("fullscreen request rejected: {0}")]
    Rejected(String),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<pico_args::Error> for Error {
    fn from(err: pico_args::Error) -> Self {
        Error::Args(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn player_error_maps_known_codes() {
        assert_eq!(PlayerError::from_code(2), PlayerError::BadRequest);
        assert_eq!(PlayerError::from_code(5), PlayerError::Unsupported);
        assert_eq!(PlayerError::from_code(100), PlayerError::NotFound);
        assert_eq!(PlayerError::from_code(101), PlayerError::Restricted(101));
        assert_eq!(PlayerError::from_code(150), PlayerError::Restricted(150));
    }

    #[test]
    fn player_error_keeps_unknown_code() {
        let err = PlayerError::from_code(42);
        assert_eq!(err, PlayerError::Unknown(42));
        assert_eq!(err.code(), 42);
        assert_eq!(err.i18n_key(), "error-player-unknown");
    }

    #[test]
    fn restricted_codes_share_a_message_key() {
        assert_eq!(
            PlayerError::from_code(101).i18n_key(),
            PlayerError::from_code(150).i18n_key()
        );
    }

    #[test]
    fn feed_http_error_mentions_status() {
        let err = FeedError::Http(404);
        assert!(err.to_string().contains("404"));
    }

    #[test]
    fn feed_error_converts_into_crate_error() {
        let err: Error = FeedError::Parse("eof".into()).into();
        assert!(matches!(err, Error::Feed(FeedError::Parse(_))));
    }
}
