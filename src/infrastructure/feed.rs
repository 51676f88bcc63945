// SPDX-License-Identifier: MPL-2.0
//! Companion content sources: local file or HTTP.

use crate::application::port::FeedSource;
use crate::error::FeedError;
use std::path::PathBuf;

const USER_AGENT: &str = concat!("EmbedControls/", env!("CARGO_PKG_VERSION"));

/// Reads the document from the local filesystem.
#[derive(Debug, Clone)]
pub struct FileFeed {
    path: PathBuf,
}

impl FileFeed {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl FeedSource for FileFeed {
    async fn fetch(&self) -> Result<String, FeedError> {
        tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| FeedError::Io(format!("{}: {e}", self.path.display())))
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Downloads the document with a single GET request.
#[derive(Debug, Clone)]
pub struct HttpFeed {
    url: String,
    client: reqwest::Client,
}

impl HttpFeed {
    /// # Errors
    ///
    /// Returns [`FeedError::Network`] if the HTTP client cannot be built.
    pub fn new(url: impl Into<String>) -> Result<Self, FeedError> {
        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(10))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| FeedError::Network(e.to_string()))?;
        Ok(Self {
            url: url.into(),
            client,
        })
    }
}

impl FeedSource for HttpFeed {
    async fn fetch(&self) -> Result<String, FeedError> {
        let response = self.client.get(&self.url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::Http(status.as_u16()));
        }
        Ok(response.text().await?)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

/// Source picked from a configured location string.
#[derive(Debug, Clone)]
pub enum AnyFeed {
    File(FileFeed),
    Http(HttpFeed),
}

impl AnyFeed {
    /// `http://` and `https://` locations are fetched over HTTP, anything
    /// else is a file path.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::Network`] if the HTTP client cannot be built.
    pub fn from_location(location: &str) -> Result<Self, FeedError> {
        if location.starts_with("http://") || location.starts_with("https://") {
            Ok(Self::Http(HttpFeed::new(location)?))
        } else {
            Ok(Self::File(FileFeed::new(location)))
        }
    }
}

impl FeedSource for AnyFeed {
    async fn fetch(&self) -> Result<String, FeedError> {
        match self {
            Self::File(feed) => feed.fetch().await,
            Self::Http(feed) => feed.fetch().await,
        }
    }

    fn describe(&self) -> String {
        match self {
            Self::File(feed) => feed.describe(),
            Self::Http(feed) => feed.describe(),
        }
    }
}
