// SPDX-License-Identifier: MPL-2.0
//! Companion content published next to each video.
//!
//! The feed is a JSON document keyed by video id:
//!
//! ```json
//! { "videos": { "<id>": {
//!     "studyMaterials": [{ "title": "...", "url": "...", "external": true }],
//!     "relatedVideos":  [{ "youtubeId": "...", "title": "...", "baseTitle": "..." }],
//!     "timeline":       [{ "time": 90, "title": "..." }]
//! } } }
//! ```
//!
//! Entries are validated one by one. A malformed entry is dropped with a
//! warning and never fails the whole document.

use crate::error::FeedError;
use serde::Deserialize;
use serde_json::Value;

/// Title used when a study material has none.
pub const UNTITLED_MATERIAL: &str = "Untitled Material";

/// A downloadable or linked document for the video.
#[derive(Debug, Clone, PartialEq)]
pub struct StudyMaterial {
    pub title: String,
    pub url: String,
    pub external: bool,
}

impl StudyMaterial {
    /// Returns true if the link should open in a new browsing context.
    ///
    /// Explicitly external items, PDFs and absolute http(s) links qualify.
    #[must_use]
    pub fn opens_in_new_context(&self) -> bool {
        self.external
            || self.url.to_lowercase().ends_with(".pdf")
            || self.url.starts_with("http")
    }
}

/// Another video the viewer may open in the same player page.
#[derive(Debug, Clone, PartialEq)]
pub struct RelatedVideo {
    pub id: String,
    pub title: String,
    pub base_title: Option<String>,
}

impl RelatedVideo {
    /// Title passed to the player page, preferring the base title.
    #[must_use]
    pub fn link_title(&self) -> &str {
        self.base_title.as_deref().unwrap_or(&self.title)
    }
}

/// A named position in the video.
#[derive(Debug, Clone, PartialEq)]
pub struct Chapter {
    pub time_secs: f64,
    pub title: String,
}

/// Everything the feed holds for one video.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct VideoContent {
    pub study_materials: Vec<StudyMaterial>,
    pub related_videos: Vec<RelatedVideo>,
    pub timeline: Vec<Chapter>,
}

// =============================================================================
// Wire format
// =============================================================================

#[derive(Debug, Deserialize)]
struct RawMaterial {
    #[serde(default)]
    title: Option<String>,
    url: String,
    #[serde(default)]
    external: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawRelated {
    youtube_id: String,
    title: String,
    #[serde(default)]
    base_title: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawChapter {
    time: f64,
    title: String,
}

/// Parses the feed document and extracts the entry for `video_id`.
///
/// Returns `Ok(None)` if the document has no entry for the video.
///
/// # Errors
///
/// Returns [`FeedError::Parse`] if the document is not JSON.
pub fn parse_video_content(document: &str, video_id: &str) -> Result<Option<VideoContent>, FeedError> {
    let root: Value = serde_json::from_str(document)?;
    let Some(entry) = root.get("videos").and_then(|videos| videos.get(video_id)) else {
        log::warn!("No data found in feed for video id: {video_id}");
        return Ok(None);
    };

    let study_materials = parse_list::<RawMaterial>(entry, "studyMaterials")
        .into_iter()
        .filter(|raw| !raw.url.is_empty())
        .map(|raw| StudyMaterial {
            title: raw
                .title
                .filter(|t| !t.is_empty())
                .unwrap_or_else(|| UNTITLED_MATERIAL.to_string()),
            url: raw.url,
            external: raw.external,
        })
        .collect();

    let related_videos = parse_list::<RawRelated>(entry, "relatedVideos")
        .into_iter()
        .filter(|raw| !raw.youtube_id.is_empty() && !raw.title.is_empty())
        .map(|raw| RelatedVideo {
            id: raw.youtube_id,
            title: raw.title,
            base_title: raw.base_title.filter(|t| !t.is_empty()),
        })
        .collect();

    let timeline = parse_list::<RawChapter>(entry, "timeline")
        .into_iter()
        .filter(|raw| raw.time.is_finite() && raw.time >= 0.0 && !raw.title.is_empty())
        .map(|raw| Chapter {
            time_secs: raw.time,
            title: raw.title,
        })
        .collect();

    Ok(Some(VideoContent {
        study_materials,
        related_videos,
        timeline,
    }))
}

/// Deserializes each array element on its own, skipping the bad ones.
fn parse_list<T: for<'de> Deserialize<'de>>(entry: &Value, key: &str) -> Vec<T> {
    let Some(items) = entry.get(key).and_then(Value::as_array) else {
        return Vec::new();
    };
    items
        .iter()
        .filter_map(|item| match T::deserialize(item) {
            Ok(parsed) => Some(parsed),
            Err(err) => {
                log::warn!("Skipping malformed {key} entry ({err}): {item}");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOCUMENT: &str = r#"{
        "videos": {
            "abc123": {
                "studyMaterials": [
                    { "title": "Notes", "url": "notes.pdf" },
                    { "url": "https://example.com/ref" },
                    { "title": "No link" }
                ],
                "relatedVideos": [
                    { "youtubeId": "xyz", "title": "Part 2", "baseTitle": "Course Part 2" },
                    { "title": "Missing id" }
                ],
                "timeline": [
                    { "time": 0, "title": "Intro" },
                    { "time": "90", "title": "Bad time" },
                    { "time": 95.5, "title": "Main topic" }
                ]
            }
        }
    }"#;

    #[test]
    fn parses_valid_entries_and_skips_malformed_ones() {
        let content = parse_video_content(DOCUMENT, "abc123")
            .expect("document should parse")
            .expect("video should exist");

        assert_eq!(content.study_materials.len(), 2);
        assert_eq!(content.related_videos.len(), 1);
        assert_eq!(content.timeline.len(), 2);
        assert_eq!(content.timeline[1].title, "Main topic");
    }

    #[test]
    fn missing_title_falls_back() {
        let content = parse_video_content(DOCUMENT, "abc123").unwrap().unwrap();
        assert_eq!(content.study_materials[1].title, UNTITLED_MATERIAL);
    }

    #[test]
    fn absent_video_returns_none() {
        let content = parse_video_content(DOCUMENT, "unknown").expect("document should parse");
        assert!(content.is_none());
    }

    #[test]
    fn document_without_videos_key_returns_none() {
        let content = parse_video_content("{}", "abc123").expect("document should parse");
        assert!(content.is_none());
    }

    #[test]
    fn invalid_json_is_a_parse_error() {
        let result = parse_video_content("{not json", "abc123");
        assert!(matches!(result, Err(FeedError::Parse(_))));
    }

    #[test]
    fn new_context_rules() {
        let material = |url: &str, external| StudyMaterial {
            title: "t".into(),
            url: url.into(),
            external,
        };
        assert!(material("notes.PDF", false).opens_in_new_context());
        assert!(material("https://example.com", false).opens_in_new_context());
        assert!(material("local.html", true).opens_in_new_context());
        assert!(!material("local.html", false).opens_in_new_context());
    }

    #[test]
    fn link_title_prefers_base_title() {
        let content = parse_video_content(DOCUMENT, "abc123").unwrap().unwrap();
        assert_eq!(content.related_videos[0].link_title(), "Course Part 2");
    }
}
