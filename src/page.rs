// SPDX-License-Identifier: MPL-2.0
//! Player page query parameters and links back to the page.
//!
//! The page is opened as `player.html?youtubeId=<id>&title=<title>`, where
//! spaces in the title are written as underscores.

use crate::error::PageError;
use reqwest::Url;

const VIDEO_ID_PARAM: &str = "youtubeId";
const TITLE_PARAM: &str = "title";

/// Parameters read from the player page url.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageParams {
    pub video_id: String,
    /// Title with underscores turned back into spaces, if given.
    pub title: Option<String>,
}

impl PageParams {
    /// Reads the video id and title from a page url.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::InvalidUrl`] if `url` does not parse and
    /// [`PageError::MissingVideoId`] if it has no non-empty video id.
    pub fn from_url(url: &str) -> Result<Self, PageError> {
        let parsed = Url::parse(url).map_err(|e| PageError::InvalidUrl(e.to_string()))?;

        let mut video_id = None;
        let mut title = None;
        for (key, value) in parsed.query_pairs() {
            match key.as_ref() {
                VIDEO_ID_PARAM if !value.is_empty() => video_id = Some(value.into_owned()),
                TITLE_PARAM if !value.is_empty() => title = Some(value.replace('_', " ")),
                _ => {}
            }
        }

        let video_id = video_id.ok_or(PageError::MissingVideoId)?;
        Ok(Self { video_id, title })
    }
}

/// Builds the player page link for another video.
///
/// Falls back to a relative query string if `page_url` is not a valid url.
#[must_use]
pub fn player_page_link(page_url: &str, video_id: &str, title: &str) -> String {
    let title = title.replace(' ', "_");
    match Url::parse(page_url) {
        Ok(mut url) => {
            url.query_pairs_mut()
                .clear()
                .append_pair(VIDEO_ID_PARAM, video_id)
                .append_pair(TITLE_PARAM, &title);
            url.into()
        }
        Err(err) => {
            log::warn!("Invalid player page url {page_url}: {err}");
            let query = Url::parse_with_params(
                "http://localhost/",
                &[(VIDEO_ID_PARAM, video_id), (TITLE_PARAM, title.as_str())],
            )
            .ok()
            .and_then(|url| url.query().map(str::to_string))
            .unwrap_or_default();
            format!("?{query}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_id_and_title() {
        let params =
            PageParams::from_url("http://localhost/player.html?youtubeId=abc123&title=Intro_to_Rust")
                .expect("valid page url");
        assert_eq!(params.video_id, "abc123");
        assert_eq!(params.title.as_deref(), Some("Intro to Rust"));
    }

    #[test]
    fn title_is_optional() {
        let params = PageParams::from_url("http://localhost/player.html?youtubeId=abc123")
            .expect("valid page url");
        assert!(params.title.is_none());
    }

    #[test]
    fn missing_or_empty_id_is_an_error() {
        assert_eq!(
            PageParams::from_url("http://localhost/player.html?title=x"),
            Err(PageError::MissingVideoId)
        );
        assert_eq!(
            PageParams::from_url("http://localhost/player.html?youtubeId="),
            Err(PageError::MissingVideoId)
        );
    }

    #[test]
    fn garbage_url_is_invalid() {
        assert!(matches!(
            PageParams::from_url("not a url"),
            Err(PageError::InvalidUrl(_))
        ));
    }

    #[test]
    fn link_replaces_spaces_and_existing_query() {
        let link = player_page_link(
            "https://example.com/player.html?youtubeId=old",
            "xyz",
            "Part 2 of 3",
        );
        assert_eq!(
            link,
            "https://example.com/player.html?youtubeId=xyz&title=Part_2_of_3"
        );
    }

    #[test]
    fn link_falls_back_to_relative_query() {
        let link = player_page_link("::bad::", "xyz", "Part 2");
        assert_eq!(link, "?youtubeId=xyz&title=Part_2");
    }
}
