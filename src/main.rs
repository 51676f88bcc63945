// SPDX-License-Identifier: MPL-2.0
//! Command-line simulator: drives the overlay against an in-process player
//! and prints every rendered view.

use embed_controls::application::port::PlayerOptions;
use embed_controls::config;
use embed_controls::error::Result;
use embed_controls::i18n::I18n;
use embed_controls::infrastructure::terminal::{parse_command, Command, COMMANDS_HELP};
use embed_controls::infrastructure::{AnyFeed, SimulatedFullscreen, SimulatedPlayer, TerminalView};
use embed_controls::page::PageParams;
use embed_controls::runtime::{self, Channels, Input};
use embed_controls::ui::view::page_error_message;
use embed_controls::ui::OverlayController;
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc::{unbounded_channel, UnboundedSender};

const HELP: &str = "\
embed-controls: simulate the custom video controls in a terminal

USAGE:
  embed-controls [OPTIONS] < commands.txt

OPTIONS:
  --url <page url>          Player page url with ?youtubeId=...&title=...
  --feed <path|url>         Companion content document
  --lang <id>               UI language (en-US, fr)
  --duration <secs>         Length of the simulated video [default: 300]
  --simulate-error <code>   Make the simulated player fail with a widget error code
  --autoplay                Start playback as soon as the player is ready
  --config-dir <dir>        Directory holding settings.toml
  -h, --help                Print help
";

const DEFAULT_DURATION_SECS: f64 = 300.0;

struct Options {
    url: Option<String>,
    feed: Option<String>,
    lang: Option<String>,
    duration: f64,
    simulate_error: Option<i32>,
    autoplay: bool,
    config_dir: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}\n{COMMANDS_HELP}");
        return Ok(());
    }
    let options = Options {
        url: args.opt_value_from_str("--url")?,
        feed: args.opt_value_from_str("--feed")?,
        lang: args.opt_value_from_str("--lang")?,
        duration: args
            .opt_value_from_str("--duration")?
            .unwrap_or(DEFAULT_DURATION_SECS),
        simulate_error: args.opt_value_from_str("--simulate-error")?,
        autoplay: args.contains("--autoplay"),
        config_dir: args.opt_value_from_str("--config-dir")?,
    };
    let unused = args.finish();
    if !unused.is_empty() {
        log::warn!("Ignoring unexpected arguments: {unused:?}");
    }

    let (config, warning) = config::load_with_override(options.config_dir.clone());
    let i18n = I18n::new(options.lang.clone(), &config);
    log::info!("UI language: {}", i18n.current_locale());
    if let Some(key) = warning {
        eprintln!("{}", i18n.tr(&key));
    }

    let page_url = options
        .url
        .clone()
        .unwrap_or_else(|| config.feed.page_url.clone());
    let params = match PageParams::from_url(&page_url) {
        Ok(params) => params,
        Err(err) => {
            println!("{}", page_error_message(&err, &i18n));
            return Err(err.into());
        }
    };

    let location = options
        .feed
        .clone()
        .unwrap_or_else(|| config.feed.source.clone());
    let feed = AnyFeed::from_location(&location)?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(simulate(config, i18n, params, feed, &options));
    Ok(())
}

async fn simulate(
    config: config::Config,
    i18n: I18n,
    params: PageParams,
    feed: AnyFeed,
    options: &Options,
) {
    let (player, player_events) = SimulatedPlayer::new(options.duration);
    let player = player.with_options(PlayerOptions {
        autoplay: options.autoplay,
        ..PlayerOptions::default()
    });
    let mut player = match options.simulate_error {
        Some(code) => player.with_error(code),
        None => player,
    };
    player.boot();

    let (fullscreen_tx, fullscreen_rx) = unbounded_channel();
    let (input_tx, input_rx) = unbounded_channel();
    tokio::spawn(read_commands(input_tx));

    let mut controller = OverlayController::new(
        player,
        SimulatedFullscreen::with_notifications(fullscreen_tx),
        &config,
        i18n,
        params.title.clone(),
    );
    let mut sink = TerminalView::new(std::io::stdout());
    let channels = Channels {
        player: player_events,
        fullscreen: fullscreen_rx,
        input: input_rx,
    };
    runtime::run(&mut controller, channels, &feed, &params.video_id, &mut sink).await;
}

/// Forwards stdin commands to the dispatch loop, honoring `wait` lines.
async fn read_commands(input: UnboundedSender<Input>) {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        match lines.next_line().await {
            Ok(Some(line)) => match parse_command(&line) {
                Ok(Some(Command::Input(command))) => {
                    if input.send(command).is_err() {
                        return;
                    }
                }
                Ok(Some(Command::Wait(duration))) => tokio::time::sleep(duration).await,
                Ok(None) => {}
                Err(message) => eprintln!("{message}"),
            },
            Ok(None) => break,
            Err(err) => {
                log::error!("Cannot read commands: {err}");
                break;
            }
        }
    }
    // Ignore a closed loop; it already ended.
    let _ = input.send(Input::Quit);
}
