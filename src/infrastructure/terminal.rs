// SPDX-License-Identifier: MPL-2.0
//! Text adapters used by the command-line simulator.

use crate::application::port::{FullscreenHost, ViewSink};
use crate::domain::video::Quality;
use crate::error::FullscreenError;
use crate::runtime::Input;
use crate::ui::content_lists::is_activation_key;
use crate::ui::settings_menu::Submenu;
use crate::ui::tabs::Tab;
use crate::ui::view::{ControlsView, FullscreenIcon, SectionView};
use crate::video_player::{Gesture, SurfaceSide, ToggleIcon};
use std::fmt::Write as _;
use std::io::Write;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;

// =============================================================================
// Commands
// =============================================================================

/// One line of simulator input.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Input(Input),
    /// Pause the script before reading the next line.
    Wait(Duration),
}

/// Help text listing the simulator commands.
pub const COMMANDS_HELP: &str = "\
Commands (one per line):
  play                 toggle play/pause
  drag <secs>          preview a seek position
  seek <secs>          seek to a position
  volume <0-100>       move the volume slider
  mute                 toggle mute
  speed <rate>         pick a playback rate
  quality <label>      pick a quality (e.g. hd720, large, auto)
  left | right         double-activate a half of the video
  fullscreen           toggle fullscreen
  chapter <index> [key]
                       activate a timeline row (0-based) by click or key
  enter | leave        pointer enters/leaves the controls
  move                 pointer moves over the player
  focus | blur         focus enters/leaves the controls
  settings             toggle the settings menu
  menu-speed | menu-quality | back | outside
  tab <materials|related|timeline|ratings>
  hover <1-5> | unhover | star <1-5>
  wait <secs>          let time pass
  quit
";

/// Parses one line of simulator input. Blank lines and `#` comments yield `None`.
///
/// # Errors
///
/// Returns a message naming the problem if the line is not a valid command.
pub fn parse_command(line: &str) -> Result<Option<Command>, String> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }
    let mut words = line.split_whitespace();
    let name = words.next().unwrap_or_default();
    let arg = words.next();

    let gesture = match name {
        "play" => Gesture::TogglePlay,
        "drag" => Gesture::SeekDrag(number(arg, name)?),
        "seek" => Gesture::SeekCommit(number(arg, name)?),
        "volume" => Gesture::VolumeDrag(number(arg, name)?),
        "mute" => Gesture::ToggleMute,
        "speed" => Gesture::SelectRate(number(arg, name)?),
        "quality" => Gesture::SelectQuality(Quality::from_api_label(required(arg, name)?)),
        "left" => Gesture::DoubleActivate(SurfaceSide::Left),
        "right" => Gesture::DoubleActivate(SurfaceSide::Right),
        "fullscreen" => Gesture::ToggleFullscreen,
        "chapter" => {
            let index = number(arg, name)?;
            if let Some(key) = words.next() {
                if !is_activation_key(key) {
                    return Err(format!("chapter: key {key} does not activate a row"));
                }
            }
            Gesture::ActivateChapter(index)
        }
        "enter" => Gesture::PointerEnteredControls,
        "leave" => Gesture::PointerLeftControls,
        "move" => Gesture::PointerMoved,
        "focus" => Gesture::FocusIn,
        "blur" => Gesture::FocusOut,
        "settings" => Gesture::ToggleSettings,
        "menu-speed" => Gesture::OpenSubmenu(Submenu::Speed),
        "menu-quality" => Gesture::OpenSubmenu(Submenu::Quality),
        "back" => Gesture::MenuBack,
        "outside" => Gesture::ClickOutsideMenu,
        "tab" => Gesture::SelectTab(tab(required(arg, name)?)?),
        "hover" => Gesture::RatingHover(number(arg, name)?),
        "unhover" => Gesture::RatingLeave,
        "star" => Gesture::RatingCommit(number(arg, name)?),
        "wait" => {
            let secs: f64 = number(arg, name)?;
            if !secs.is_finite() || secs < 0.0 {
                return Err(format!("wait: invalid duration {secs}"));
            }
            return Ok(Some(Command::Wait(Duration::from_secs_f64(secs))));
        }
        "quit" | "exit" => return Ok(Some(Command::Input(Input::Quit))),
        other => return Err(format!("unknown command: {other}")),
    };
    Ok(Some(Command::Input(Input::Gesture(gesture))))
}

fn required<'a>(arg: Option<&'a str>, name: &str) -> Result<&'a str, String> {
    arg.ok_or_else(|| format!("{name}: missing argument"))
}

fn number<T: std::str::FromStr>(arg: Option<&str>, name: &str) -> Result<T, String> {
    let raw = required(arg, name)?;
    raw.parse()
        .map_err(|_| format!("{name}: invalid number {raw}"))
}

fn tab(name: &str) -> Result<Tab, String> {
    match name {
        "materials" => Ok(Tab::StudyMaterial),
        "related" => Ok(Tab::RelatedVideos),
        "timeline" => Ok(Tab::Timeline),
        "ratings" => Ok(Tab::Ratings),
        other => Err(format!("tab: unknown tab {other}")),
    }
}

// =============================================================================
// View sink
// =============================================================================

/// Prints each distinct view as a block of text.
#[derive(Debug)]
pub struct TerminalView<W> {
    out: W,
    last: Option<String>,
}

impl<W: Write> TerminalView<W> {
    pub fn new(out: W) -> Self {
        Self { out, last: None }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ViewSink for TerminalView<W> {
    fn apply(&mut self, view: &ControlsView) {
        let text = describe(view);
        if self.last.as_deref() == Some(text.as_str()) {
            return;
        }
        if let Err(err) = writeln!(self.out, "{text}").and_then(|()| self.out.flush()) {
            log::warn!("Cannot write view: {err}");
        }
        self.last = Some(text);
    }
}

/// Formats a view as plain text.
#[must_use]
pub fn describe(view: &ControlsView) -> String {
    let mut text = format!("== {} ==\n", view.title);
    if let Some(message) = &view.error_message {
        text.push_str(message);
        return text;
    }

    let toggle = match view.toggle_icon {
        ToggleIcon::Play => "[>]",
        ToggleIcon::Pause => "[||]",
    };
    let fullscreen = match view.fullscreen_icon {
        FullscreenIcon::Enter => "[ ]",
        FullscreenIcon::Exit => "[x]",
    };
    // Writing to a String cannot fail.
    let _ = writeln!(
        text,
        "{toggle} {} {} {:>3}% vol:{:?}/{} ({}) speed:{} quality:{} {fullscreen}",
        view.toggle_label,
        view.time_text,
        (view.progress_fraction * 100.0).round(),
        view.volume_glyph,
        view.volume_slider,
        view.mute_label,
        view.rate_label,
        view.quality_label,
    );
    let _ = writeln!(
        text,
        "overlay:{} loading:{} controls:{} cursor:{}",
        on_off(view.overlay_visible),
        on_off(view.loading_visible),
        on_off(view.controls_visible),
        if view.cursor_hidden { "hidden" } else { "default" },
    );

    if let Some(menu) = &view.menu {
        let _ = writeln!(text, "menu:{:?} | {} | {}", menu.page, menu.speed_entry, menu.quality_entry);
    }
    if let Some(tabs) = &view.tabs {
        let labels: Vec<String> = tabs
            .iter()
            .map(|t| if t.active { format!("*{}*", t.label) } else { t.label.clone() })
            .collect();
        let _ = writeln!(text, "tabs: {}", labels.join(" | "));
    }

    section(&mut text, &view.study_materials, |row| {
        let marker = if row.new_context { " (new window)" } else { "" };
        format!("{} <{}>{marker}", row.title, row.url)
    });
    section(&mut text, &view.related_videos, |row| format!("{} <{}>", row.title, row.href));
    section(&mut text, &view.timeline, |row| row.label.clone());

    if let Some(rating) = &view.rating {
        let stars: String = rating.stars.iter().map(|f| if *f { '*' } else { '.' }).collect();
        let _ = write!(text, "rating: {stars}");
        if let Some(feedback) = &rating.feedback {
            let _ = write!(text, " {feedback}");
        }
    }
    text.trim_end().to_string()
}

fn section<T>(text: &mut String, view: &SectionView<T>, line: impl Fn(&T) -> String) {
    match view {
        SectionView::Placeholder(message) => {
            let _ = writeln!(text, "  {message}");
        }
        SectionView::Rows(rows) => {
            for row in rows {
                let _ = writeln!(text, "  - {}", line(row));
            }
        }
    }
}

fn on_off(flag: bool) -> &'static str {
    if flag {
        "on"
    } else {
        "off"
    }
}

// =============================================================================
// Fullscreen hosts
// =============================================================================

/// Fullscreen host without a real window.
///
/// Requests succeed immediately and the change is announced on the
/// notification channel, like a platform fullscreen-change event.
#[derive(Debug, Default)]
pub struct SimulatedFullscreen {
    active: bool,
    notify: Option<UnboundedSender<bool>>,
}

impl SimulatedFullscreen {
    #[must_use]
    pub fn with_notifications(notify: UnboundedSender<bool>) -> Self {
        Self {
            active: false,
            notify: Some(notify),
        }
    }

    fn set(&mut self, active: bool) {
        self.active = active;
        if let Some(notify) = &self.notify {
            if notify.send(active).is_err() {
                log::debug!("Fullscreen notification dropped");
            }
        }
    }
}

impl FullscreenHost for SimulatedFullscreen {
    fn is_fullscreen(&self) -> bool {
        self.active
    }

    fn request_fullscreen(&mut self) -> Result<(), FullscreenError> {
        self.set(true);
        Ok(())
    }

    fn exit_fullscreen(&mut self) -> Result<(), FullscreenError> {
        self.set(false);
        Ok(())
    }
}

/// Host for platforms without any fullscreen entry point.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoFullscreen;

impl FullscreenHost for NoFullscreen {
    fn is_fullscreen(&self) -> bool {
        false
    }

    fn request_fullscreen(&mut self) -> Result<(), FullscreenError> {
        Err(FullscreenError::Unsupported)
    }

    fn exit_fullscreen(&mut self) -> Result<(), FullscreenError> {
        Err(FullscreenError::Unsupported)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::I18n;
    use crate::config::Config;
    use crate::ui::view::{render, OverlayState};

    #[test]
    fn parses_gestures() {
        assert_eq!(
            parse_command("seek 42.5"),
            Ok(Some(Command::Input(Input::Gesture(Gesture::SeekCommit(42.5)))))
        );
        assert_eq!(
            parse_command("quality hd720"),
            Ok(Some(Command::Input(Input::Gesture(Gesture::SelectQuality(
                Quality::P720
            )))))
        );
        assert_eq!(
            parse_command("tab timeline"),
            Ok(Some(Command::Input(Input::Gesture(Gesture::SelectTab(Tab::Timeline)))))
        );
    }

    #[test]
    fn chapter_accepts_only_activation_keys() {
        let expected = Ok(Some(Command::Input(Input::Gesture(Gesture::ActivateChapter(2)))));
        assert_eq!(parse_command("chapter 2"), expected);
        assert_eq!(parse_command("chapter 2 Enter"), expected);
        assert!(parse_command("chapter 2 Tab").is_err());
    }

    #[test]
    fn parses_wait_and_quit() {
        assert_eq!(
            parse_command("wait 1.5"),
            Ok(Some(Command::Wait(Duration::from_millis(1_500))))
        );
        assert_eq!(parse_command("quit"), Ok(Some(Command::Input(Input::Quit))));
    }

    #[test]
    fn ignores_blank_lines_and_comments() {
        assert_eq!(parse_command("   "), Ok(None));
        assert_eq!(parse_command("# start playback"), Ok(None));
    }

    #[test]
    fn rejects_bad_input() {
        assert!(parse_command("dance").is_err());
        assert!(parse_command("seek").is_err());
        assert!(parse_command("volume loud").is_err());
        assert!(parse_command("wait -1").is_err());
    }

    #[test]
    fn identical_views_are_printed_once() {
        let i18n = I18n::new(Some("en-US".to_string()), &Config::default());
        let view = render(&OverlayState::default(), &i18n);
        let mut sink = TerminalView::new(Vec::new());

        sink.apply(&view);
        sink.apply(&view);

        let output = String::from_utf8(sink.into_inner()).expect("utf-8 output");
        assert_eq!(output.matches("== Video Player ==").count(), 1);
        assert!(output.contains("Loading materials..."));
    }

    #[test]
    fn error_view_prints_only_the_message() {
        let i18n = I18n::new(Some("en-US".to_string()), &Config::default());
        let state = OverlayState {
            player_error: Some(crate::error::PlayerError::from_code(5)),
            ..OverlayState::default()
        };
        let text = describe(&render(&state, &i18n));
        assert_eq!(
            text,
            "== Video Player ==\nError: Cannot play video in the HTML5 player."
        );
    }

    #[test]
    fn simulated_fullscreen_announces_changes() {
        let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
        let mut host = SimulatedFullscreen::with_notifications(tx);
        host.request_fullscreen().expect("simulated request succeeds");
        assert!(host.is_fullscreen());
        assert_eq!(rx.try_recv().ok(), Some(true));
    }

    #[test]
    fn missing_fullscreen_is_unsupported() {
        assert_eq!(NoFullscreen.request_fullscreen(), Err(FullscreenError::Unsupported));
    }
}
