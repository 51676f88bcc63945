// SPDX-License-Identifier: MPL-2.0
//! Pure rendering of the control surface.
//!
//! [`render`] turns the mirrored [`OverlayState`] into a [`ControlsView`]:
//! every text is localized and every flag resolved, so a host adapter only
//! copies values into its widgets.

use super::content_lists::{ChapterRow, ContentLists, ListView, MaterialRow, RelatedRow};
use super::settings_menu::{self, Page};
use super::tabs::{self, Tab};
use super::rating;
use crate::config::{FeatureSet, MAX_RATING};
use crate::domain::video::{
    PlaybackRate, PlaybackState, ProgressSample, Quality, VolumeGlyph, VolumeState,
};
use crate::error::{PageError, PlayerError};
use crate::i18n::I18n;
use crate::video_player::ToggleIcon;

// =============================================================================
// Model
// =============================================================================

/// Everything the overlay mirrors about the player and the page.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayState {
    pub title: Option<String>,
    pub features: FeatureSet,
    pub playback: PlaybackState,
    pub icon: ToggleIcon,
    pub progress: ProgressSample,
    /// Position under the pointer while the progress bar is dragged.
    pub drag_preview: Option<f64>,
    pub volume: VolumeState,
    pub rate: PlaybackRate,
    pub quality: Quality,
    pub available_qualities: Vec<Quality>,
    pub overlay_visible: bool,
    pub loading_visible: bool,
    pub controls_visible: bool,
    pub cursor_hidden: bool,
    pub fullscreen: bool,
    pub player_error: Option<PlayerError>,
    pub page_error: Option<PageError>,
    pub menu: settings_menu::State,
    pub tabs: tabs::State,
    pub rating: rating::State,
    pub lists: ContentLists,
}

impl Default for OverlayState {
    fn default() -> Self {
        Self {
            title: None,
            features: FeatureSet::default(),
            playback: PlaybackState::default(),
            icon: ToggleIcon::default(),
            progress: ProgressSample::default(),
            drag_preview: None,
            volume: VolumeState::default(),
            rate: PlaybackRate::default(),
            quality: Quality::default(),
            available_qualities: Vec::new(),
            overlay_visible: true,
            loading_visible: true,
            controls_visible: true,
            cursor_hidden: false,
            fullscreen: false,
            player_error: None,
            page_error: None,
            menu: settings_menu::State::default(),
            tabs: tabs::State::default(),
            rating: rating::State::default(),
            lists: ContentLists::default(),
        }
    }
}

// =============================================================================
// View
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FullscreenIcon {
    Enter,
    Exit,
}

/// Text of a list: a placeholder line or the rows.
#[derive(Debug, Clone, PartialEq)]
pub enum SectionView<T> {
    Placeholder(String),
    Rows(Vec<T>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub label: String,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuView {
    pub page: Page,
    /// Main page entry leading to the speed submenu, with the current value.
    pub speed_entry: String,
    /// Main page entry leading to the quality submenu, with the current value.
    pub quality_entry: String,
    pub back_label: String,
    pub rates: Vec<MenuItem>,
    pub qualities: Vec<MenuItem>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabView {
    pub tab: Tab,
    pub label: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RatingView {
    /// One flag per star, filled or not.
    pub stars: Vec<bool>,
    pub feedback: Option<String>,
}

/// Fully resolved control surface.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlsView {
    pub title: String,
    /// When set, the whole control surface is replaced by this message.
    pub error_message: Option<String>,
    pub toggle_icon: ToggleIcon,
    pub toggle_label: String,
    pub overlay_visible: bool,
    pub loading_visible: bool,
    pub controls_visible: bool,
    pub cursor_hidden: bool,
    pub time_text: String,
    pub progress_fraction: f64,
    pub volume_glyph: VolumeGlyph,
    pub volume_slider: u8,
    pub mute_label: String,
    pub rate_label: String,
    pub quality_label: String,
    pub fullscreen_icon: FullscreenIcon,
    pub fullscreen_label: String,
    pub menu: Option<MenuView>,
    pub tabs: Option<Vec<TabView>>,
    pub rating: Option<RatingView>,
    pub study_materials: SectionView<MaterialRow>,
    pub related_videos: SectionView<RelatedRow>,
    pub timeline: SectionView<ChapterRow>,
}

impl ControlsView {
    /// Returns true if the error placeholder replaces the controls.
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.error_message.is_some()
    }
}

/// Localized label for a playback rate: `"Normal"` or `"R×"`.
#[must_use]
pub fn rate_label(rate: PlaybackRate, i18n: &I18n) -> String {
    if rate.is_normal() {
        i18n.tr("rate-normal")
    } else {
        rate.to_string()
    }
}

/// Localized label for a quality level.
#[must_use]
pub fn quality_label(quality: &Quality, i18n: &I18n) -> String {
    match quality {
        Quality::Auto => i18n.tr("quality-auto"),
        other => other.to_string(),
    }
}

/// Localized message for an external player error.
#[must_use]
pub fn player_error_message(error: PlayerError, i18n: &I18n) -> String {
    let code = error.code().to_string();
    i18n.tr_with_args(error.i18n_key(), &[("code", code.as_str())])
}

/// Localized message for a page url problem.
#[must_use]
pub fn page_error_message(error: &PageError, i18n: &I18n) -> String {
    match error {
        PageError::InvalidUrl(reason) => {
            i18n.tr_with_args(error.i18n_key(), &[("reason", reason.as_str())])
        }
        PageError::MissingVideoId => i18n.tr(error.i18n_key()),
    }
}

/// Renders the control surface.
#[must_use]
pub fn render(state: &OverlayState, i18n: &I18n) -> ControlsView {
    let displayed = state
        .drag_preview
        .map_or(state.progress, |secs| state.progress.with_position(secs));

    let error_message = state
        .page_error
        .as_ref()
        .map(|e| page_error_message(e, i18n))
        .or_else(|| state.player_error.map(|e| player_error_message(e, i18n)));

    let glyph = state.volume.glyph();
    let mute_label = if glyph == VolumeGlyph::Muted {
        i18n.tr("control-unmute")
    } else {
        i18n.tr("control-mute")
    };

    let (fullscreen_icon, fullscreen_label) = if state.fullscreen {
        (FullscreenIcon::Exit, i18n.tr("control-fullscreen-exit"))
    } else {
        (FullscreenIcon::Enter, i18n.tr("control-fullscreen-enter"))
    };

    let toggle_label = match state.icon {
        ToggleIcon::Play => i18n.tr("control-play"),
        ToggleIcon::Pause => i18n.tr("control-pause"),
    };

    ControlsView {
        title: state
            .title
            .clone()
            .unwrap_or_else(|| i18n.tr("player-default-title")),
        error_message,
        toggle_icon: state.icon,
        toggle_label,
        overlay_visible: state.overlay_visible,
        loading_visible: state.loading_visible,
        controls_visible: state.controls_visible,
        cursor_hidden: state.cursor_hidden,
        time_text: displayed.time_text(),
        progress_fraction: displayed.fraction(),
        volume_glyph: glyph,
        volume_slider: state.volume.slider_value(),
        mute_label,
        rate_label: rate_label(state.rate, i18n),
        quality_label: quality_label(&state.quality, i18n),
        fullscreen_icon,
        fullscreen_label,
        menu: state.features.settings_menu.then(|| render_menu(state, i18n)),
        tabs: state.features.tabs.then(|| render_tabs(state, i18n)),
        rating: state.features.rating.then(|| render_rating(state, i18n)),
        study_materials: section(&state.lists.materials, "materials", i18n),
        related_videos: section(&state.lists.related, "related", i18n),
        timeline: section(&state.lists.timeline, "timeline", i18n),
    }
}

fn render_menu(state: &OverlayState, i18n: &I18n) -> MenuView {
    let rates = PlaybackRate::menu()
        .map(|rate| MenuItem {
            label: rate_label(rate, i18n),
            selected: rate.matches(state.rate),
        })
        .collect();
    let qualities = state
        .available_qualities
        .iter()
        .map(|quality| MenuItem {
            label: quality_label(quality, i18n),
            selected: *quality == state.quality,
        })
        .collect();

    MenuView {
        page: state.menu.page(),
        speed_entry: format!("{}: {}", i18n.tr("menu-speed"), rate_label(state.rate, i18n)),
        quality_entry: format!(
            "{}: {}",
            i18n.tr("menu-quality"),
            quality_label(&state.quality, i18n)
        ),
        back_label: i18n.tr("menu-back"),
        rates,
        qualities,
    }
}

fn render_tabs(state: &OverlayState, i18n: &I18n) -> Vec<TabView> {
    Tab::ALL
        .into_iter()
        .map(|tab| TabView {
            tab,
            label: i18n.tr(tab.i18n_key()),
            active: state.tabs.is_active(tab),
        })
        .collect()
}

fn render_rating(state: &OverlayState, i18n: &I18n) -> RatingView {
    let filled = state.rating.displayed();
    RatingView {
        stars: (1..=MAX_RATING).map(|star| star <= filled).collect(),
        feedback: state.rating.committed().map(|stars| {
            let stars = stars.to_string();
            i18n.tr_with_args("rating-thanks", &[("rating", stars.as_str())])
        }),
    }
}

fn section<T: Clone>(list: &ListView<T>, prefix: &str, i18n: &I18n) -> SectionView<T> {
    match list {
        ListView::Loading => SectionView::Placeholder(i18n.tr(&format!("{prefix}-loading"))),
        ListView::Empty => SectionView::Placeholder(i18n.tr(&format!("{prefix}-empty"))),
        ListView::Error(message) => SectionView::Placeholder(
            i18n.tr_with_args(&format!("{prefix}-error"), &[("error", message.as_str())]),
        ),
        ListView::Items(rows) => SectionView::Rows(rows.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::domain::video::Volume;

    fn i18n() -> I18n {
        I18n::new(Some("en-US".to_string()), &Config::default())
    }

    #[test]
    fn initial_view_shows_loading_and_placeholders() {
        let view = render(&OverlayState::default(), &i18n());

        assert_eq!(view.title, "Video Player");
        assert!(view.loading_visible);
        assert_eq!(view.time_text, "00:00 / --:--");
        assert_eq!(view.rate_label, "Normal");
        assert_eq!(view.quality_label, "Auto");
        assert_eq!(
            view.study_materials,
            SectionView::Placeholder("Loading materials...".to_string())
        );
        assert_eq!(
            view.timeline,
            SectionView::Placeholder("Loading timeline...".to_string())
        );
    }

    #[test]
    fn rate_label_uses_multiplication_sign() {
        let i18n = i18n();
        assert_eq!(rate_label(PlaybackRate::new(1.5), &i18n), "1.5×");
        assert_eq!(rate_label(PlaybackRate::new(0.25), &i18n), "0.25×");
        assert_eq!(rate_label(PlaybackRate::new(2.0), &i18n), "2×");
    }

    #[test]
    fn muted_volume_shows_unmute_label_and_empty_slider() {
        let state = OverlayState {
            volume: VolumeState {
                level: Volume::new(60),
                muted: true,
            },
            ..OverlayState::default()
        };
        let view = render(&state, &i18n());
        assert_eq!(view.volume_glyph, VolumeGlyph::Muted);
        assert_eq!(view.volume_slider, 0);
        assert_eq!(view.mute_label, "Unmute");
    }

    #[test]
    fn drag_preview_overrides_position() {
        let state = OverlayState {
            progress: ProgressSample::new(10.0, 100.0),
            drag_preview: Some(50.0),
            ..OverlayState::default()
        };
        let view = render(&state, &i18n());
        assert_eq!(view.time_text, "00:50 / 01:40");
    }

    #[test]
    fn player_errors_are_localized() {
        let i18n = i18n();
        assert_eq!(
            player_error_message(PlayerError::from_code(100), &i18n),
            "Error: Video not found or removed by user."
        );
        assert_eq!(
            player_error_message(PlayerError::from_code(150), &i18n),
            "Error: Video playback is restricted or disallowed by the owner."
        );
        assert_eq!(
            player_error_message(PlayerError::from_code(42), &i18n),
            "An unknown player error occurred (Code: 42)."
        );
    }

    #[test]
    fn missing_video_id_message() {
        let state = OverlayState {
            page_error: Some(PageError::MissingVideoId),
            ..OverlayState::default()
        };
        let view = render(&state, &i18n());
        assert!(view.is_error());
        assert_eq!(
            view.error_message.as_deref(),
            Some("Error: No 'youtubeId' parameter found in the URL.")
        );
    }

    #[test]
    fn disabled_features_are_not_rendered() {
        let state = OverlayState {
            features: FeatureSet {
                settings_menu: false,
                tabs: false,
                rating: false,
                fullscreen: true,
            },
            ..OverlayState::default()
        };
        let view = render(&state, &i18n());
        assert!(view.menu.is_none());
        assert!(view.tabs.is_none());
        assert!(view.rating.is_none());
    }

    #[test]
    fn rating_feedback_after_commit() {
        let mut state = OverlayState::default();
        state.rating.commit(3);
        let view = render(&state, &i18n());
        let rating = view.rating.expect("rating is enabled by default");
        assert_eq!(rating.stars, vec![true, true, true, false, false]);
        assert_eq!(
            rating.feedback.as_deref(),
            Some("Thank you for rating 3 out of 5!")
        );
    }

    #[test]
    fn menu_marks_current_rate() {
        let state = OverlayState {
            rate: PlaybackRate::new(1.25),
            ..OverlayState::default()
        };
        let view = render(&state, &i18n());
        let menu = view.menu.expect("menu is enabled by default");
        let selected: Vec<_> = menu.rates.iter().filter(|i| i.selected).collect();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].label, "1.25×");
        assert_eq!(menu.speed_entry, "Playback speed: 1.25×");
    }
}
