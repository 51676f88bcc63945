// SPDX-License-Identifier: MPL-2.0
//! Companion content lists: study materials, related videos and timeline.
//!
//! Each list renders independently. A failed fetch turns all three into
//! inline errors; the player itself is not affected.

use crate::domain::content::VideoContent;
use crate::domain::video::format_time;
use crate::error::FeedError;
use crate::page::player_page_link;

/// Display state of one list.
#[derive(Debug, Clone, PartialEq)]
pub enum ListView<T> {
    Loading,
    Items(Vec<T>),
    Empty,
    /// Fetch failed with this message.
    Error(String),
}

impl<T> Default for ListView<T> {
    fn default() -> Self {
        Self::Loading
    }
}

impl<T> ListView<T> {
    fn from_rows(rows: Vec<T>) -> Self {
        if rows.is_empty() {
            Self::Empty
        } else {
            Self::Items(rows)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaterialRow {
    pub title: String,
    pub url: String,
    /// Open in a new browsing context.
    pub new_context: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelatedRow {
    pub title: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChapterRow {
    /// `"MM:SS - title"`.
    pub label: String,
    pub time_secs: f64,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ContentLists {
    pub materials: ListView<MaterialRow>,
    pub related: ListView<RelatedRow>,
    pub timeline: ListView<ChapterRow>,
}

impl ContentLists {
    /// Builds the lists from a fetch outcome.
    ///
    /// `Ok(None)` means the feed has no entry for the video: every list is empty.
    #[must_use]
    pub fn from_feed(result: &Result<Option<VideoContent>, FeedError>, page_url: &str) -> Self {
        match result {
            Ok(Some(content)) => Self::from_content(content, page_url),
            Ok(None) => Self {
                materials: ListView::Empty,
                related: ListView::Empty,
                timeline: ListView::Empty,
            },
            Err(err) => {
                log::error!("Failed to load companion content: {err}");
                let message = err.to_string();
                Self {
                    materials: ListView::Error(message.clone()),
                    related: ListView::Error(message.clone()),
                    timeline: ListView::Error(message),
                }
            }
        }
    }

    fn from_content(content: &VideoContent, page_url: &str) -> Self {
        let materials = content
            .study_materials
            .iter()
            .map(|m| MaterialRow {
                title: m.title.clone(),
                url: m.url.clone(),
                new_context: m.opens_in_new_context(),
            })
            .collect();
        let related = content
            .related_videos
            .iter()
            .map(|v| RelatedRow {
                title: v.title.clone(),
                href: player_page_link(page_url, &v.id, v.link_title()),
            })
            .collect();
        let timeline = content
            .timeline
            .iter()
            .map(|c| ChapterRow {
                label: format!("{} - {}", format_time(c.time_secs), c.title),
                time_secs: c.time_secs,
            })
            .collect();

        Self {
            materials: ListView::from_rows(materials),
            related: ListView::from_rows(related),
            timeline: ListView::from_rows(timeline),
        }
    }

    /// Start time of the chapter at `index`, if the timeline is loaded.
    #[must_use]
    pub fn chapter_time(&self, index: usize) -> Option<f64> {
        match &self.timeline {
            ListView::Items(rows) => rows.get(index).map(|row| row.time_secs),
            _ => None,
        }
    }
}

/// Returns true for keys that activate a timeline row.
#[must_use]
pub fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " " | "Space" | "Spacebar")
}
