//! The game module holds everything around a single game: the command-line arguments, the setup of
//! the participants and the menu loop that keeps offering new games until the player leaves.
//!
//! It contains the `init()` function that the binary calls, which sets up logging and then hands
//! control over to the menu.

use anyhow::Result;
use clap::Parser;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

use crate::controller::Game;
use crate::input::{PLAYERS, SCORE_LIMITS};
use crate::participant::{Kind, Participant, DEFAULT_OPPONENT_NAME};
use crate::ui::{ConsoleUi, MenuChoice, Ui};

/// The environment variable holding the logging filter, in `tracing_subscriber::EnvFilter` syntax.
pub const LOG_ENV: &str = "DICEY_LOG";

/// This struct holds the command-line arguments, parsed with clap's derive API. Every argument may
/// also be set through its environment variable, and any of them left unset is asked for when a
/// game is set up.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "dicey", version, about)]
#[command(next_line_help = true)]
pub struct Cli {
    /// The score limit every game is played up to.
    ///
    /// When given, the score limit is no longer asked for before each game.
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(3..=9))]
    #[arg(env = "DICEY_SCORE_LIMIT", value_name = "POINTS")]
    pub limit: Option<u32>,
    /// The name of the computer opponent joining single-player games.
    #[arg(short, long, default_value = DEFAULT_OPPONENT_NAME)]
    #[arg(env = "DICEY_OPPONENT", value_name = "NAME")]
    pub opponent: String,
    /// The number of people playing; with a single one, the computer takes the other seat.
    ///
    /// When given, the number of players is no longer asked for before each game.
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=2))]
    #[arg(env = "DICEY_PLAYERS", value_name = "COUNT")]
    pub players: Option<u8>,
}

/// Starts the program. This is the `main()` function of sorts, though it is still called from
/// main.rs.
///
/// It parses the command line, installs the logger and then shows the main menu over and over,
/// playing a game each time it is asked to, until the player chooses to leave.
///
/// # Errors
///
/// The function may return any error raised by the terminal while prompting or printing, or a
/// `dicey::SetupError` if a game could not be put together.
pub fn init() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let mut ui = ConsoleUi::default();
    menu_loop(&cli, &mut ui)
}

/// This function installs the `tracing` subscriber. Logs go to the standard error so that they
/// don't get mixed up with the game on the standard output, and only warnings show up unless
/// `DICEY_LOG` asks for more.
fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// This function runs the main menu until the player picks the exit entry.
fn menu_loop(cli: &Cli, ui: &mut dyn Ui) -> Result<()> {
    loop {
        match ui.menu_choice()? {
            MenuChoice::Play => {
                let mut game = setup_new_game(cli, ui)?;
                let winner = game.run(ui)?;
                info!(winner = winner.name(), "back to the menu");
            }
            MenuChoice::Exit => {
                info!("leaving");
                break ui.goodbye();
            }
        }
    }
}

/// This function puts a game together, taking from `cli` whatever was given there and asking `ui`
/// for the rest. A lone player is joined by the computer opponent.
///
/// # Errors
///
/// Returns any error from `ui`, or a `dicey::SetupError` if the answers can't make up a game.
#[instrument(skip_all)]
pub fn setup_new_game(cli: &Cli, ui: &mut dyn Ui) -> Result<Game> {
    let count = match cli.players {
        Some(count) => count,
        None => ui.players_count()?,
    };
    let limit = match cli.limit {
        Some(limit) => limit,
        None => ui.score_limit()?,
    };

    if !PLAYERS.contains(&count) {
        anyhow::bail!("{count} players can't sit at the table");
    }
    if !SCORE_LIMITS.contains(&limit) {
        anyhow::bail!("{limit} is not a score limit a game can be played to");
    }

    let mut participants = Vec::with_capacity(2);

    for seat in 1..=count {
        let name = ui.player_name(seat, count)?;
        participants.push(Participant::new(&name, limit, Kind::Human)?);
    }

    if count == 1 {
        participants.push(Participant::new(&cli.opponent, limit, Kind::Computer)?);
    }

    info!(players = count, limit, "game set up");
    Ok(Game::new(participants)?)
}
