// SPDX-License-Identifier: MPL-2.0
use embed_controls::application::port::{PlayerEvent, PlayerHandle, ViewSink};
use embed_controls::config::Config;
use embed_controls::domain::video::{Quality, VolumeGlyph};
use embed_controls::i18n::I18n;
use embed_controls::infrastructure::{FileFeed, PlayerCall, SimulatedFullscreen, SimulatedPlayer};
use embed_controls::runtime::{self, Channels, Input};
use embed_controls::ui::settings_menu::Submenu;
use embed_controls::ui::{ControlsView, OverlayController};
use embed_controls::video_player::{Gesture, SurfaceSide};
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tokio::sync::mpsc::unbounded_channel;

type Controller = OverlayController<SimulatedPlayer, SimulatedFullscreen>;

fn fixture() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/video_data.json")
}

fn english() -> I18n {
    I18n::new(Some("en-US".to_string()), &Config::default())
}

/// Controller over a booted player, with the boot notifications applied.
fn booted(duration: f64) -> Controller {
    let (mut player, mut events) = SimulatedPlayer::new(duration);
    player.boot();
    player.clear_calls();
    let mut controller = OverlayController::new(
        player,
        SimulatedFullscreen::default(),
        &Config::default(),
        english(),
        None,
    );
    while let Ok(event) = events.try_recv() {
        controller.on_player_event(event, Instant::now());
    }
    controller
}

#[derive(Default)]
struct RecordingSink {
    views: Vec<ControlsView>,
}

impl ViewSink for RecordingSink {
    fn apply(&mut self, view: &ControlsView) {
        self.views.push(view.clone());
    }
}

impl RecordingSink {
    /// Number of times the controls went from visible to hidden.
    fn hide_count(&self) -> usize {
        self.views
            .windows(2)
            .filter(|pair| pair[0].controls_visible && !pair[1].controls_visible)
            .count()
    }
}

#[test]
fn selecting_a_rate_calls_the_player_once_and_relabels() {
    let mut controller = booted(300.0);
    controller.on_gesture(Gesture::ToggleSettings, Instant::now());
    controller.on_gesture(Gesture::SelectRate(1.75), Instant::now());

    assert_eq!(controller.handle().calls(), &[PlayerCall::SetRate(1.75)]);
    let view = controller.view();
    assert_eq!(view.rate_label, "1.75×");
    assert!(!controller.state().menu.is_open());

    controller.on_gesture(Gesture::SelectRate(1.0), Instant::now());
    assert_eq!(controller.view().rate_label, "Normal");
}

#[test]
fn mute_toggle_round_trip() {
    let mut controller = booted(300.0);
    controller.on_gesture(Gesture::VolumeDrag(30), Instant::now());
    controller.handle_mut().clear_calls();

    controller.on_gesture(Gesture::ToggleMute, Instant::now());
    assert_eq!(controller.handle().calls(), &[PlayerCall::Mute]);
    let view = controller.view();
    assert_eq!(view.volume_glyph, VolumeGlyph::Muted);
    assert_eq!(view.mute_label, "Unmute");

    controller.on_gesture(Gesture::ToggleMute, Instant::now());
    assert_eq!(
        controller.handle().calls(),
        &[PlayerCall::Mute, PlayerCall::Unmute]
    );
    let view = controller.view();
    assert_eq!(view.volume_glyph, VolumeGlyph::Low);
    assert_eq!(view.volume_slider, 30);
    assert_eq!(view.mute_label, "Mute");
}

#[test]
fn ended_displays_zero_position() {
    let mut controller = booted(120.0);
    controller.on_gesture(Gesture::SeekCommit(119.0), Instant::now());
    controller.on_player_event(PlayerEvent::StateChanged(0), Instant::now());

    assert_eq!(controller.view().time_text, "00:00 / 02:00");
}

#[test]
fn double_activation_clamps_to_bounds() {
    let mut controller = booted(100.0);

    controller.on_gesture(Gesture::SeekCommit(5.0), Instant::now());
    controller.on_gesture(Gesture::DoubleActivate(SurfaceSide::Left), Instant::now());
    assert_eq!(controller.view().time_text, "00:00 / 01:40");

    controller.on_gesture(Gesture::SeekCommit(50.0), Instant::now());
    controller.on_gesture(Gesture::DoubleActivate(SurfaceSide::Right), Instant::now());
    assert_eq!(controller.view().time_text, "01:00 / 01:40");

    controller.on_gesture(Gesture::SeekCommit(97.0), Instant::now());
    controller.on_gesture(Gesture::DoubleActivate(SurfaceSide::Right), Instant::now());
    assert_eq!(controller.view().time_text, "01:40 / 01:40");
}

#[test]
fn quality_label_waits_for_confirmation_while_rate_does_not() {
    let mut controller = booted(300.0);
    controller.on_gesture(Gesture::SelectQuality(Quality::P1080), Instant::now());
    controller.on_gesture(Gesture::SelectRate(0.5), Instant::now());

    let view = controller.view();
    assert_eq!(view.quality_label, "Auto");
    assert_eq!(view.rate_label, "0.5×");
    assert_eq!(controller.handle().playback_quality(), Quality::P1080);

    controller.on_player_event(PlayerEvent::StateChanged(1), Instant::now());
    assert_eq!(controller.view().quality_label, "1080p");
}

#[test]
fn reopening_quality_menu_does_not_confirm_a_pick() {
    let mut controller = booted(300.0);
    let now = Instant::now();
    controller.on_gesture(Gesture::ToggleSettings, now);
    controller.on_gesture(Gesture::OpenSubmenu(Submenu::Quality), now);
    controller.on_gesture(Gesture::SelectQuality(Quality::P480), now);
    controller.on_gesture(Gesture::ToggleSettings, now);
    controller.on_gesture(Gesture::OpenSubmenu(Submenu::Quality), now);

    assert_eq!(controller.view().quality_label, "Auto");
    assert_eq!(controller.handle().playback_quality(), Quality::P480);
}

#[test]
fn gestures_before_ready_are_ignored() {
    let (player, _events) = SimulatedPlayer::new(300.0);
    let mut controller = OverlayController::new(
        player,
        SimulatedFullscreen::default(),
        &Config::default(),
        english(),
        Some("Intro".to_string()),
    );

    controller.on_gesture(Gesture::TogglePlay, Instant::now());
    controller.on_gesture(Gesture::SeekCommit(10.0), Instant::now());
    assert!(controller.handle().calls().is_empty());

    let view = controller.view();
    assert_eq!(view.title, "Intro");
    assert!(view.loading_visible);
}

#[tokio::test(start_paused = true)]
async fn controls_hide_exactly_once_when_idle() {
    let (mut player, player_events) = SimulatedPlayer::new(600.0);
    player.boot();
    let mut controller = OverlayController::new(
        player,
        SimulatedFullscreen::default(),
        &Config::default(),
        english(),
        None,
    );
    let (_fullscreen_tx, fullscreen_rx) = unbounded_channel();
    let (input_tx, input_rx) = unbounded_channel();
    let channels = Channels {
        player: player_events,
        fullscreen: fullscreen_rx,
        input: input_rx,
    };
    let feed = FileFeed::new(fixture());
    let mut sink = RecordingSink::default();

    let script = async move {
        input_tx
            .send(Input::Gesture(Gesture::TogglePlay))
            .expect("loop is running");
        tokio::time::sleep(Duration::from_secs(8)).await;
        input_tx.send(Input::Quit).expect("loop is running");
    };
    tokio::join!(
        runtime::run(&mut controller, channels, &feed, "abc123", &mut sink),
        script
    );

    assert_eq!(sink.hide_count(), 1);
    let last = sink.views.last().expect("views were rendered");
    assert!(!last.controls_visible);
    assert!(last.cursor_hidden);
    assert!(controller.handle().calls().contains(&PlayerCall::Play));
}

#[tokio::test(start_paused = true)]
async fn pointer_movement_postpones_hide() {
    let (mut player, player_events) = SimulatedPlayer::new(600.0);
    player.boot();
    let mut controller = OverlayController::new(
        player,
        SimulatedFullscreen::default(),
        &Config::default(),
        english(),
        None,
    );
    let (_fullscreen_tx, fullscreen_rx) = unbounded_channel();
    let (input_tx, input_rx) = unbounded_channel();
    let channels = Channels {
        player: player_events,
        fullscreen: fullscreen_rx,
        input: input_rx,
    };
    let feed = FileFeed::new(fixture());
    let mut sink = RecordingSink::default();

    let script = async move {
        input_tx
            .send(Input::Gesture(Gesture::TogglePlay))
            .expect("loop is running");
        tokio::time::sleep(Duration::from_secs(2)).await;
        input_tx
            .send(Input::Gesture(Gesture::PointerMoved))
            .expect("loop is running");
        tokio::time::sleep(Duration::from_secs(2)).await;
        input_tx.send(Input::Quit).expect("loop is running");
    };
    tokio::join!(
        runtime::run(&mut controller, channels, &feed, "abc123", &mut sink),
        script
    );

    assert_eq!(sink.hide_count(), 0);
    assert!(sink.views.iter().all(|view| view.controls_visible));
}

#[tokio::test(start_paused = true)]
async fn player_error_replaces_the_surface() {
    let (player, player_events) = SimulatedPlayer::new(600.0);
    let mut player = player.with_error(101);
    player.boot();
    let mut controller = OverlayController::new(
        player,
        SimulatedFullscreen::default(),
        &Config::default(),
        english(),
        None,
    );
    let (_fullscreen_tx, fullscreen_rx) = unbounded_channel();
    let (input_tx, input_rx) = unbounded_channel();
    let channels = Channels {
        player: player_events,
        fullscreen: fullscreen_rx,
        input: input_rx,
    };
    let feed = FileFeed::new(fixture());
    let mut sink = RecordingSink::default();

    let script = async move {
        tokio::time::sleep(Duration::from_millis(100)).await;
        input_tx
            .send(Input::Gesture(Gesture::TogglePlay))
            .expect("loop is running");
        input_tx.send(Input::Quit).expect("loop is running");
    };
    tokio::join!(
        runtime::run(&mut controller, channels, &feed, "abc123", &mut sink),
        script
    );

    let last = sink.views.last().expect("views were rendered");
    assert_eq!(
        last.error_message.as_deref(),
        Some("Error: Video playback is restricted or disallowed by the owner.")
    );
    assert!(!last.loading_visible);
    assert!(controller.handle().calls().is_empty());
}
