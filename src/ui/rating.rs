// SPDX-License-Identifier: MPL-2.0
//! Star rating sub-component.
//!
//! Hovering previews a rating, leaving restores the committed one and a
//! click commits it. Ratings are not persisted.

use crate::config::MAX_RATING;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct State {
    committed: Option<u8>,
    preview: Option<u8>,
}

impl State {
    pub fn hover(&mut self, stars: u8) {
        if is_valid(stars) {
            self.preview = Some(stars);
        }
    }

    pub fn leave(&mut self) {
        self.preview = None;
    }

    /// Commits a rating. Out-of-range values are ignored.
    pub fn commit(&mut self, stars: u8) -> bool {
        if !is_valid(stars) {
            log::warn!("Ignoring rating {stars}, expected 1 to {MAX_RATING}");
            return false;
        }
        self.committed = Some(stars);
        self.preview = None;
        true
    }

    #[must_use]
    pub fn committed(&self) -> Option<u8> {
        self.committed
    }

    /// Number of filled stars: the preview if any, else the committed rating.
    #[must_use]
    pub fn displayed(&self) -> u8 {
        self.preview.or(self.committed).unwrap_or(0)
    }
}

fn is_valid(stars: u8) -> bool {
    (1..=MAX_RATING).contains(&stars)
}
