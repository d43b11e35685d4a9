use std::path::PathBuf;
use std::process::ExitCode;
use std::time::{Duration, Instant};

use clap::Parser;
use grid_snake::config::FRAME_POLL_MS;
use grid_snake::error::AppError;
use grid_snake::game::{GameEngine, GameStatus, TickOutcome};
use grid_snake::input::{GameInput, InputHandler};
use grid_snake::logging;
use grid_snake::renderer;
use grid_snake::scheduler::TickScheduler;
use grid_snake::score::{HighScoreStore, ScoreBoard};
use grid_snake::terminal_runtime::{GameScreen, install_panic_hook};
use grid_snake::ui::hud::HudInfo;
use log::{LevelFilter, info, warn};

#[derive(Debug, Parser)]
#[command(version, about = "Classic Snake on a 20x20 grid")]
struct Cli {
    /// Seed for food placement; random when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Log file path.
    #[arg(long = "log-file")]
    log_file: Option<PathBuf>,

    /// Log verbosity (off, error, warn, info, debug, trace).
    #[arg(long = "log-level", default_value = "info")]
    log_level: LevelFilter,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("grid-snake: {error}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    let log_path = cli.log_file.unwrap_or_else(logging::default_log_path);
    logging::init(&log_path, cli.log_level)?;

    let store = HighScoreStore::platform_default();
    let stored_best = match store.load() {
        Ok(score) => score,
        Err(error) => {
            eprintln!(
                "Ignoring unreadable high score file {}: {error}",
                store.path().display()
            );
            warn!("unreadable high score file: {error}");
            0
        }
    };
    let mut scores = ScoreBoard::new(stored_best);

    let mut engine = match cli.seed {
        Some(seed) => GameEngine::with_seed(seed),
        None => GameEngine::from_entropy(),
    };
    info!("session starting, seed {:?}", cli.seed);

    install_panic_hook();
    let mut screen = GameScreen::open()?;
    let mut input = InputHandler::new();
    let mut scheduler = TickScheduler::default();
    let frame_poll = Duration::from_millis(FRAME_POLL_MS);

    loop {
        let hud = HudInfo::from_scores(&scores);
        screen
            .terminal_mut()
            .draw(|frame| renderer::render(frame, engine.state(), &hud))?;

        let timeout = scheduler.time_until_next(Instant::now()).min(frame_poll);
        if let Some(game_input) = input.poll_input(timeout)? {
            match game_input {
                GameInput::Quit => break,
                GameInput::Restart if engine.state().game_over() => {
                    engine.reset();
                }
                GameInput::Restart => {}
                GameInput::Direction(direction) => {
                    engine.steer(direction);
                }
            }
        }

        if scheduler.poll(Instant::now(), engine.state().is_running()) {
            match engine.tick() {
                TickOutcome::Collided(_) | TickOutcome::Won => {
                    scores.finish_game(&store, engine.state().score());
                }
                TickOutcome::Idle | TickOutcome::Moved | TickOutcome::Grew => {}
            }
        }
    }

    if engine.state().status == GameStatus::Playing {
        info!("quit mid-game with score {}", engine.state().score());
    }
    info!("session ended");
    Ok(())
}
