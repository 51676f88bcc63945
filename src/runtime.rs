// SPDX-License-Identifier: MPL-2.0
//! Single-threaded dispatch loop.
//!
//! Everything that touches the overlay runs here, one event at a time:
//! player notifications, fullscreen notifications, gestures, the content
//! fetch result and timer deadlines. The loop sleeps until the earliest of
//! those and never runs two handlers concurrently.

use crate::application::port::{FeedSource, FullscreenHost, PlayerEvent, PlayerHandle, ViewSink};
use crate::ui::OverlayController;
use crate::video_player::Gesture;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::time::Instant;

/// Longest sleep when no timer is pending.
const IDLE_WAKE: Duration = Duration::from_secs(3600);

/// Host input forwarded to the loop.
#[derive(Debug, Clone, PartialEq)]
pub enum Input {
    Gesture(Gesture),
    /// The page view ends.
    Quit,
}

/// Receiving ends of the loop's event sources.
#[derive(Debug)]
pub struct Channels {
    pub player: UnboundedReceiver<PlayerEvent>,
    pub fullscreen: UnboundedReceiver<bool>,
    pub input: UnboundedReceiver<Input>,
}

/// Runs the page view until [`Input::Quit`] or until the input channel closes.
///
/// The content fetch for `video_id` starts immediately and its result is
/// handled on the loop like any other event.
pub async fn run<P, F, S, V>(
    controller: &mut OverlayController<P, F>,
    mut channels: Channels,
    feed: &S,
    video_id: &str,
    sink: &mut V,
) where
    P: PlayerHandle,
    F: FullscreenHost,
    S: FeedSource,
    V: ViewSink,
{
    let content = feed.load(video_id);
    tokio::pin!(content);
    let mut content_pending = true;
    let mut player_open = true;
    let mut fullscreen_open = true;

    loop {
        sink.apply(&controller.view());

        let deadline = controller.next_deadline();
        let wake = deadline.map_or_else(|| Instant::now() + IDLE_WAKE, Instant::from_std);

        tokio::select! {
            biased;

            event = channels.player.recv(), if player_open => match event {
                Some(event) => controller.on_player_event(event, now()),
                None => player_open = false,
            },
            active = channels.fullscreen.recv(), if fullscreen_open => match active {
                Some(active) => controller.on_fullscreen_changed(active),
                None => fullscreen_open = false,
            },
            result = &mut content, if content_pending => {
                content_pending = false;
                controller.on_content_loaded(result);
            },
            () = tokio::time::sleep_until(wake), if deadline.is_some() => {
                controller.tick(now());
            },
            input = channels.input.recv() => match input {
                Some(Input::Gesture(gesture)) => controller.on_gesture(gesture, now()),
                Some(Input::Quit) | None => break,
            },
        }
    }

    log::info!("Page view closed");
}

/// Current time on the loop's clock.
fn now() -> std::time::Instant {
    Instant::now().into_std()
}
