//! This module defines what the game needs from whatever talks to the players, and the console
//! implementation used by the binary.
//!
//! The game only ever reports through these functions; none of them feed back into who wins.

use anyhow::Result;
use console::Term;

use crate::input;
use crate::messages;
use crate::participant::Participant;
use crate::round::Round;

/// This enum holds the choices offered by the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// This variant is used when the player is done and the program should end.
    Exit,
    /// This variant is used when a new game should be set up and played.
    Play,
}

/// This trait gathers the prompts used to set up a game and the displays used to follow it.
///
/// # Errors
///
/// Every function may fail with whatever error the underlying terminal or input reports.
pub trait Ui {
    /// This function shows the closing message once the player leaves.
    fn goodbye(&mut self) -> Result<()>;

    /// This function announces the end of the game and who won it.
    fn announce_winner(&mut self, winner: &Participant) -> Result<()>;

    /// This function tells the players that a game is starting and what it takes to win it.
    fn game_start(&mut self, limit: u32) -> Result<()>;

    /// This function asks which entry of the main menu to follow.
    fn menu_choice(&mut self) -> Result<MenuChoice>;

    /// This function waits for the players before moving on to the next round.
    fn pause(&mut self) -> Result<()>;

    /// This function asks for the name of the player sitting at `seat`, counted from one, out of
    /// `count` players.
    fn player_name(&mut self, seat: u8, count: u8) -> Result<String>;

    /// This function asks how many people are going to play.
    fn players_count(&mut self) -> Result<u8>;

    /// This function shows the scores and invites the players to roll.
    fn roll_prompt(&mut self, participants: &[Participant]) -> Result<()>;

    /// This function shows every roll of the round that was just played and who won it.
    fn round_outcome(&mut self, participants: &[Participant], round: &Round) -> Result<()>;

    /// This function asks for the score the game is played up to.
    fn score_limit(&mut self) -> Result<u32>;
}

/// This struct holds the console front end, reading with `dialoguer` and writing with `console`.
#[derive(Debug)]
pub struct ConsoleUi {
    /// This field contains the terminal everything is read from and written to.
    term: Term,
}

impl ConsoleUi {
    /// This function creates a front end on top of the given terminal.
    #[must_use]
    pub const fn new(term: Term) -> Self {
        Self { term }
    }
}

impl Default for ConsoleUi {
    fn default() -> Self {
        Self::new(Term::stdout())
    }
}

impl Ui for ConsoleUi {
    fn goodbye(&mut self) -> Result<()> {
        self.term.write_line(&messages::goodbye())?;
        self.term.show_cursor()?;
        Ok(())
    }

    fn announce_winner(&mut self, winner: &Participant) -> Result<()> {
        self.term.clear_screen()?;
        self.term.write_line(&messages::winner(winner))?;
        input::pause(&self.term)
    }

    fn game_start(&mut self, limit: u32) -> Result<()> {
        self.term.clear_screen()?;
        self.term.write_line(&messages::game_start(limit))?;
        input::pause(&self.term)
    }

    fn menu_choice(&mut self) -> Result<MenuChoice> {
        self.term.clear_screen()?;
        self.term.write_line(&messages::welcome())?;
        input::take_menu_choice(&self.term)
    }

    fn pause(&mut self) -> Result<()> {
        input::pause(&self.term)
    }

    fn player_name(&mut self, seat: u8, count: u8) -> Result<String> {
        self.term.clear_screen()?;
        input::take_name(&self.term, seat, count)
    }

    fn players_count(&mut self) -> Result<u8> {
        self.term.clear_screen()?;
        input::take_players_count(&self.term)
    }

    fn roll_prompt(&mut self, participants: &[Participant]) -> Result<()> {
        self.term.clear_screen()?;
        self.term.write_line(&messages::scoreboard(participants))?;
        self.term.write_line(&messages::roll_prompt())?;
        input::pause(&self.term)
    }

    fn round_outcome(&mut self, participants: &[Participant], round: &Round) -> Result<()> {
        self.term.clear_screen()?;
        self.term.write_line(&messages::scoreboard(participants))?;
        self.term
            .write_line(&messages::round_outcome(participants, round))?;
        Ok(())
    }

    fn score_limit(&mut self) -> Result<u32> {
        self.term.clear_screen()?;
        input::take_score_limit(&self.term)
    }
}
