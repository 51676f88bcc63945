// SPDX-License-Identifier: MPL-2.0
//! Companion content tabs. Exactly one tab is active at any time.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    StudyMaterial,
    RelatedVideos,
    Timeline,
    Ratings,
}

impl Tab {
    pub const ALL: [Tab; 4] = [
        Tab::StudyMaterial,
        Tab::RelatedVideos,
        Tab::Timeline,
        Tab::Ratings,
    ];

    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            Tab::StudyMaterial => "tab-study-material",
            Tab::RelatedVideos => "tab-related-videos",
            Tab::Timeline => "tab-timeline",
            Tab::Ratings => "tab-ratings",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct State {
    active: Tab,
}

impl State {
    /// Activates `tab`. Returns true if the active tab changed.
    pub fn select(&mut self, tab: Tab) -> bool {
        let changed = self.active != tab;
        self.active = tab;
        changed
    }

    #[must_use]
    pub fn active(&self) -> Tab {
        self.active
    }

    #[must_use]
    pub fn is_active(&self, tab: Tab) -> bool {
        self.active == tab
    }
}
