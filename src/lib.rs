//! The library components of the game. They allow setting up participants with their dice, rolling
//! rounds concurrently, resolving who takes each point and running a game until somebody reaches
//! the score limit.
//!
//! The starting point of the library is the game.rs file, which contains the menu loop, while the
//! rules themselves live in round.rs and controller.rs.

#![expect(
    clippy::cargo_common_metadata,
    reason = "The package has not yet been pushed to a remote."
)]

pub mod controller;
pub mod die;
pub mod error;
pub mod game;
mod input;
mod messages;
pub mod participant;
pub mod round;
pub mod ui;

pub use controller::{find_game_winner, Game, GameState};
pub use die::{Die, Fair, Faces, Loaded};
pub use error::SetupError;
pub use game::{init, Cli};
pub use participant::{Kind, Participant, RollResult};
pub use round::{find_round_winner, resolve_round, Round};
pub use ui::{ConsoleUi, MenuChoice, Ui};
