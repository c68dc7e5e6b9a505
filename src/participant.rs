//! This module holds the participants of a game, whether they sit at the keyboard or are played by
//! the computer, along with the result of a single roll of their dice.

use std::sync::Arc;

use crate::die::{Die, Faces};
use crate::error::SetupError;

/// The name given to the computer opponent when none is configured.
pub const DEFAULT_OPPONENT_NAME: &str = "Opponent";

/// This enum tells apart who is behind a participant. It has no bearing on how the participant
/// rolls or scores; it only changes how the end of the game is announced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    /// This variant is used for participants controlled by the computer.
    Computer,
    /// This variant is used for participants played by a person.
    Human,
}

/// A participant in a game, holding its running score and a pair of dice.
///
/// The score only ever goes up, and only through `add_score()`. That method takes `&mut self`, so
/// the concurrent rolling of a round, which only ever sees `&Participant`, cannot touch it.
#[derive(Debug, Clone)]
pub struct Participant {
    /// This field contains the two dice the participant rolls every round.
    dice: [Die; 2],
    /// This field contains who is behind the participant.
    kind: Kind,
    /// This field contains the score that ends the game once reached.
    limit: u32,
    /// This field contains the name shown to the players.
    name: String,
    /// This field contains the points collected so far.
    score: u32,
}

impl Participant {
    /// This function creates a participant with a fresh score and two fair dice.
    ///
    /// # Errors
    ///
    /// Returns `SetupError::EmptyName` if the name is blank, or `SetupError::ZeroLimit` if `limit`
    /// is zero.
    pub fn new(name: &str, limit: u32, kind: Kind) -> Result<Self, SetupError> {
        Self::with_dice(name, limit, kind, [Die::fair(), Die::fair()])
    }

    /// This function creates a participant whose two dice both draw from `faces`.
    ///
    /// # Errors
    ///
    /// Same as `Participant::new()`.
    pub fn with_faces(
        name: &str,
        limit: u32,
        kind: Kind,
        faces: Arc<dyn Faces>,
    ) -> Result<Self, SetupError> {
        let die = Die::new(faces);
        Self::with_dice(name, limit, kind, [die.clone(), die])
    }

    /// This function creates a participant from an explicit pair of dice.
    ///
    /// # Errors
    ///
    /// Same as `Participant::new()`.
    pub fn with_dice(
        name: &str,
        limit: u32,
        kind: Kind,
        dice: [Die; 2],
    ) -> Result<Self, SetupError> {
        let name = name.trim();

        if name.is_empty() {
            return Err(SetupError::EmptyName);
        }
        if limit == 0 {
            return Err(SetupError::ZeroLimit);
        }

        Ok(Self {
            dice,
            kind,
            limit,
            name: name.to_owned(),
            score: 0,
        })
    }

    /// This function adds `points` to the running score. The score is not clamped to the limit;
    /// it is up to the game to notice that the limit has been reached.
    pub fn add_score(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
    }

    /// This function returns whether the participant is played by the computer.
    #[must_use]
    pub const fn is_computer_controlled(&self) -> bool {
        matches!(self.kind, Kind::Computer)
    }

    /// This function returns who is behind the participant.
    #[must_use]
    pub const fn kind(&self) -> Kind {
        self.kind
    }

    /// This function returns the score at which the game ends.
    #[must_use]
    pub const fn limit(&self) -> u32 {
        self.limit
    }

    /// This function returns the participant's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// This function returns whether the score has reached the limit.
    #[must_use]
    pub const fn reached_limit(&self) -> bool {
        self.score >= self.limit
    }

    /// This function rolls both dice and returns their sum, always within `2..=12`.
    #[must_use]
    pub fn roll_dice(&self) -> u8 {
        self.dice.iter().map(Die::roll).sum()
    }

    /// This function returns the points collected so far.
    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }
}

/// The outcome of one participant's roll in a round, tied to the participant by its seat, that is,
/// its position in the game's list of participants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RollResult {
    /// This field contains the seat of the participant who rolled.
    seat: usize,
    /// This field contains the sum of both dice.
    value: u8,
}

impl RollResult {
    /// This function pairs a seat with the value rolled from it.
    #[must_use]
    pub const fn new(seat: usize, value: u8) -> Self {
        Self { seat, value }
    }

    /// This function returns the seat of the participant who rolled.
    #[must_use]
    pub const fn seat(&self) -> usize {
        self.seat
    }

    /// This function returns the sum of both dice.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.value
    }
}
