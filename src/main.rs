#![deny(
    unused_import_braces,
    unused_lifetimes,
    unreachable_pub,
    trivial_numeric_casts,
    missing_debug_implementations,
    missing_copy_implementations,
    deprecated_in_future,
    meta_variable_misuse,
    non_ascii_idents,
    rust_2018_compatibility,
    rust_2018_idioms,
    future_incompatible,
    nonstandard_style,
    clippy::all
)]
#![warn(variant_size_differences, let_underscore_drop)]

//! # Tic-Tac-Toe Game

pub mod cli_options;
pub mod command;
pub mod config;
pub mod logger;
pub mod renderer;
pub mod session;
pub mod setup;
pub mod util;

use crate::{
    cli_options::CliOptions,
    command::{
        Command,
        HELP,
    },
    config::Config,
    renderer::Renderer,
    session::{
        Session,
        TryMoveResponse,
        HUMAN_TEAM,
    },
};
use anyhow::Context as _;
use std::{
    io::Write as _,
    sync::Arc,
    time::{
        Duration,
        Instant,
    },
};
use tic_tac_toe::WinnerInfo;
use tokio::{
    io::{
        AsyncBufRead,
        AsyncBufReadExt,
        BufReader,
    },
    runtime::Builder as RuntimeBuilder,
};
use tracing::{
    debug,
    info,
    warn,
};
use tracing_appender::non_blocking::WorkerGuard;

/// A pending stdin read holds up shutdown until this elapses.
const TOKIO_RT_SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(1);

const WELCOME: &str = "Tic-Tac-Toe! You are X and the computer is O. Type `help` for commands.";

/// The terminal game
#[derive(Debug)]
struct App {
    config: Arc<Config>,
    session: Session,
    renderer: Renderer,
}

impl App {
    fn new(config: Arc<Config>) -> Self {
        Self {
            config,
            session: Session::new(),
            renderer: Renderer::new(),
        }
    }

    /// Run games until the player quits or the input ends.
    async fn run<R>(&mut self, input: R) -> anyhow::Result<()>
    where
        R: AsyncBufRead + Unpin,
    {
        let mut lines = input.lines();

        println!("{WELCOME}");
        self.print_board(None);

        loop {
            if self.session.game().turn() == Some(HUMAN_TEAM.inverse()) {
                self.play_computer_turn().await?;
                continue;
            }

            print_prompt(self.session.game().is_finished())?;
            let line = match lines.next_line().await.context("failed to read input")? {
                Some(line) => line,
                None => {
                    println!();
                    info!("reached the end of the input");
                    return Ok(());
                }
            };

            let command = match line.parse::<Command>() {
                Ok(command) => command,
                Err(error) => {
                    println!("{error}");
                    continue;
                }
            };
            debug!(?command, "got command");

            match command {
                Command::Move(index) => match self.session.try_move(index) {
                    Ok(response) => {
                        info!("{HUMAN_TEAM} played tile {}", index + 1);
                        self.handle_response(response);
                    }
                    Err(error) => println!("{error}"),
                },
                Command::NewGame => {
                    self.session.new_game();
                    info!("started a new game");
                    self.print_board(None);
                }
                Command::Hint => self.print_hint(),
                Command::Scores => print!("{}", self.session.scores().to_table()),
                Command::Help => println!("{HELP}"),
                Command::Quit => return Ok(()),
            }
        }
    }

    /// Wait out the thinking delay, then search for and play the computer's move.
    async fn play_computer_turn(&mut self) -> anyhow::Result<()> {
        println!("AI is thinking...");
        tokio::time::sleep(self.config.ai_delay()).await;

        let board = self.session.board();
        let start = Instant::now();
        let scored = tokio::task::spawn_blocking(move || tic_tac_toe::evaluate(board))
            .await
            .context("failed to join search task")?
            .context("failed to search for a move")?;
        let index = scored.index.context("the search did not pick a move")?;
        info!(
            tile = index + 1,
            score = scored.score,
            elapsed = ?start.elapsed(),
            "computer picked a move"
        );

        let response = self
            .session
            .try_computer_move(index)
            .context("the computer made an invalid move")?;
        println!("{} plays tile {}.", HUMAN_TEAM.inverse(), index + 1);
        self.handle_response(response);

        Ok(())
    }

    fn handle_response(&self, response: TryMoveResponse) {
        match response {
            TryMoveResponse::NextTurn { .. } => self.print_board(None),
            TryMoveResponse::Winner { info } => {
                self.print_board(Some(info));
                println!("{} wins!", info.team);
                info!(
                    winner = %info.team,
                    line = ?info.line.tile_indexes,
                    "game over"
                );
                self.print_game_over();
            }
            TryMoveResponse::Tie => {
                self.print_board(None);
                println!("Draw!");
                info!("game over in a draw");
                self.print_game_over();
            }
        }
    }

    fn print_board(&self, winner_info: Option<WinnerInfo>) {
        println!();
        print!(
            "{}",
            self.renderer
                .render_board(self.session.board(), winner_info)
        );
        println!();
    }

    fn print_hint(&self) {
        if !self.config.show_hints {
            println!("hints are turned off");
            return;
        }

        match self.session.hint() {
            Some(index) => println!("Try tile {}.", index + 1),
            None => println!("the game is over, type `new` to play again"),
        }
    }

    fn print_game_over(&self) {
        print!("{}", self.session.scores().to_table());
        println!("Play again? Type `new` to play again or `quit` to leave.");
    }
}

fn print_prompt(is_finished: bool) -> anyhow::Result<()> {
    if is_finished {
        print!("> ");
    } else {
        print!("Your turn ({HUMAN_TEAM}): ");
    }

    std::io::stdout().flush().context("failed to flush stdout")
}

async fn handle_ctrl_c() {
    match tokio::signal::ctrl_c()
        .await
        .context("failed to set ctrl-c handler")
    {
        Ok(()) => {
            println!();
            info!("shutting down...");
        }
        Err(error) => {
            warn!("{error}");
            // The default "kill everything" handler is probably still installed.
            std::future::pending::<()>().await;
        }
    }
}

/// Data from the setup function
struct SetupData {
    tokio_rt: tokio::runtime::Runtime,
    config: Arc<Config>,
    worker_guard: Option<WorkerGuard>,
}

/// Pre-main setup
fn setup(cli_options: CliOptions) -> anyhow::Result<SetupData> {
    eprintln!("starting tokio runtime...");
    let tokio_rt = RuntimeBuilder::new_multi_thread()
        .enable_all()
        .thread_name("tic-tac-toe-tokio-worker")
        .build()
        .context("failed to start tokio runtime")?;

    let config = setup::load_config(&cli_options)
        .map(Arc::new)
        .context("failed to load config")?;

    eprintln!("setting up logger...");
    let worker_guard = logger::setup(&config).context("failed to initialize logger")?;

    eprintln!();
    Ok(SetupData {
        tokio_rt,
        config,
        worker_guard,
    })
}

/// The main entry.
///
/// Sets up the program and calls `real_main`.
/// This allows more things to drop correctly.
/// This also calls setup operations like loading config and setting up the tokio runtime,
/// logging errors to the stderr instead of the loggers, which are not initialized yet.
fn main() -> anyhow::Result<()> {
    // This line MUST run first.
    // It is needed to exit early if the options are invalid,
    // and this will NOT run destructors if it does so.
    let cli_options = argh::from_env();

    let setup_data = setup(cli_options)?;
    real_main(setup_data)?;
    Ok(())
}

/// The actual entry point
fn real_main(setup_data: SetupData) -> anyhow::Result<()> {
    let ret = setup_data.tokio_rt.block_on(async_main(setup_data.config));

    let shutdown_start = Instant::now();
    info!("shutting down tokio runtime (shutdown timeout is {TOKIO_RT_SHUTDOWN_TIMEOUT:?})...");
    setup_data
        .tokio_rt
        .shutdown_timeout(TOKIO_RT_SHUTDOWN_TIMEOUT);
    info!("shutdown tokio runtime in {:?}", shutdown_start.elapsed());

    info!("successful shutdown");

    // Logging no longer reliable past this point
    drop(setup_data.worker_guard);

    ret
}

/// The async entry
async fn async_main(config: Arc<Config>) -> anyhow::Result<()> {
    info!(
        ai_delay = ?config.ai_delay(),
        show_hints = config.show_hints,
        "starting game"
    );

    let mut app = App::new(config);
    tokio::select! {
        ret = app.run(BufReader::new(tokio::io::stdin())) => ret?,
        _ = handle_ctrl_c() => {}
    }

    println!("Final scores:");
    print!("{}", app.session.scores().to_table());

    let scores = app.session.scores();
    info!(
        x_wins = scores.x_wins,
        o_wins = scores.o_wins,
        draws = scores.draws,
        "session over"
    );

    Ok(())
}
