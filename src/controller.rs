//! This module runs a game from its first round until somebody reaches the score limit.

use anyhow::Result;
use tracing::{debug, info, instrument};

use crate::error::SetupError;
use crate::participant::Participant;
use crate::round::{resolve_round, Round};
use crate::ui::Ui;

/// This enum holds the state a game can be in between two rounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// This variant is used once a participant has reached the limit. It carries the winner's
    /// seat.
    GameOver {
        /// This field contains the seat of the participant who won the game.
        winner: usize,
    },
    /// This variant is used while nobody has reached the limit yet.
    RoundInProgress,
}

/// This struct holds a game: its participants, in seat order, and how many rounds were played.
#[derive(Debug)]
pub struct Game {
    /// This field contains the participants of the game, fixed for its whole duration.
    participants: Vec<Participant>,
    /// This field contains the number of rounds played so far.
    rounds: u32,
}

impl Game {
    /// This function sets up a game over `participants`, which keep their order as seats.
    ///
    /// # Errors
    ///
    /// Returns `SetupError::NoParticipants` when the list is empty and `SetupError::MixedLimits`
    /// when the participants weren't all given the same score limit.
    pub fn new(participants: Vec<Participant>) -> Result<Self, SetupError> {
        let Some(first) = participants.first() else {
            return Err(SetupError::NoParticipants);
        };

        if participants
            .iter()
            .any(|participant| participant.limit() != first.limit())
        {
            return Err(SetupError::MixedLimits);
        }

        Ok(Self {
            participants,
            rounds: 0,
        })
    }

    /// This function returns the score limit shared by every participant.
    #[must_use]
    pub fn limit(&self) -> u32 {
        self.participants
            .first()
            .map_or(0, Participant::limit)
    }

    /// This function returns the participants in seat order.
    #[must_use]
    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    /// This function plays a single round and returns its outcome.
    pub fn play_round(&mut self) -> Round {
        self.rounds = self.rounds.saturating_add(1);
        debug!(round = self.rounds, "starting round");
        resolve_round(&mut self.participants)
    }

    /// This function returns the number of rounds played so far.
    #[must_use]
    pub const fn rounds(&self) -> u32 {
        self.rounds
    }

    /// This function plays rounds until a participant reaches the limit, keeping `ui` informed,
    /// and returns the winner.
    ///
    /// Tied rounds award nothing and are simply played again, so there is no cap on how many
    /// rounds a game may take.
    ///
    /// # Errors
    ///
    /// Returns whatever error `ui` runs into.
    #[instrument(skip_all, fields(participants = self.participants.len(), limit = self.limit()))]
    pub fn run(&mut self, ui: &mut dyn Ui) -> Result<&Participant> {
        ui.game_start(self.limit())?;

        let winner = loop {
            ui.roll_prompt(&self.participants)?;
            let round = self.play_round();
            ui.round_outcome(&self.participants, &round)?;

            if let GameState::GameOver { winner } = self.state() {
                break winner;
            }

            ui.pause()?;
        };

        // the seat came out of `state()`, so it points into the list
        let winner = self
            .participants
            .get(winner)
            .ok_or_else(|| anyhow::anyhow!("winning seat {winner} is not part of the game"))?;
        info!(
            winner = winner.name(),
            score = winner.score(),
            rounds = self.rounds,
            "game over"
        );

        ui.announce_winner(winner)?;
        Ok(winner)
    }

    /// This function returns whether the game is over, and if so, who won it.
    #[must_use]
    pub fn state(&self) -> GameState {
        find_game_winner(&self.participants)
            .map_or(GameState::RoundInProgress, |winner| GameState::GameOver {
                winner,
            })
    }
}

/// This function returns the seat of the game winner, if any.
///
/// Only participants whose score reached their limit are considered, and among those the highest
/// score wins. On an equal score the earliest seat is kept.
#[must_use]
pub fn find_game_winner(participants: &[Participant]) -> Option<usize> {
    participants
        .iter()
        .enumerate()
        .filter(|(_, participant)| participant.reached_limit())
        .fold(None, |best: Option<(usize, u32)>, (seat, participant)| match best {
            Some((_, score)) if score >= participant.score() => best,
            _ => Some((seat, participant.score())),
        })
        .map(|(seat, _)| seat)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::die::Loaded;
    use crate::participant::Kind;
    use crate::ui::MenuChoice;

    /// Builds a human participant already holding `score` points.
    fn scored(name: &str, score: u32, limit: u32) -> Participant {
        let mut participant = Participant::new(name, limit, Kind::Human).unwrap();
        participant.add_score(score);
        participant
    }

    /// Builds a participant whose dice always sum to `2 * face`.
    fn loaded(name: &str, face: u8, limit: u32, kind: Kind) -> Participant {
        Participant::with_faces(name, limit, kind, Arc::new(Loaded::new(face).unwrap())).unwrap()
    }

    /// A front end that answers nothing and writes down what the game reported.
    #[derive(Default)]
    struct Recorder {
        announced: Vec<String>,
        outcomes: Vec<Option<usize>>,
        pauses: usize,
        prompts: usize,
        started: Vec<u32>,
    }

    impl Ui for Recorder {
        fn goodbye(&mut self) -> Result<()> {
            Ok(())
        }

        fn announce_winner(&mut self, winner: &Participant) -> Result<()> {
            self.announced.push(winner.name().to_owned());
            Ok(())
        }

        fn game_start(&mut self, limit: u32) -> Result<()> {
            self.started.push(limit);
            Ok(())
        }

        fn menu_choice(&mut self) -> Result<MenuChoice> {
            Ok(MenuChoice::Exit)
        }

        fn pause(&mut self) -> Result<()> {
            self.pauses += 1;
            Ok(())
        }

        fn player_name(&mut self, _seat: u8, _count: u8) -> Result<String> {
            anyhow::bail!("no names to give")
        }

        fn players_count(&mut self) -> Result<u8> {
            anyhow::bail!("no count to give")
        }

        fn roll_prompt(&mut self, _participants: &[Participant]) -> Result<()> {
            self.prompts += 1;
            Ok(())
        }

        fn round_outcome(&mut self, _participants: &[Participant], round: &Round) -> Result<()> {
            self.outcomes.push(round.winner());
            Ok(())
        }

        fn score_limit(&mut self) -> Result<u32> {
            anyhow::bail!("no limit to give")
        }
    }

    #[test]
    fn first_seat_reaching_the_limit_wins() {
        let participants = [scored("Player 1", 3, 3), scored("Player 2", 0, 3)];
        assert_eq!(find_game_winner(&participants), Some(0));
    }

    #[test]
    fn second_seat_reaching_the_limit_wins() {
        let participants = [scored("Player 1", 0, 3), scored("Player 2", 3, 3)];
        assert_eq!(find_game_winner(&participants), Some(1));
    }

    #[test]
    fn nobody_at_the_limit_means_no_winner() {
        let participants = [scored("Player 1", 0, 3), scored("Player 2", 0, 3)];
        assert_eq!(find_game_winner(&participants), None);
        assert_eq!(find_game_winner(&[]), None);
    }

    #[test]
    fn highest_score_over_the_limit_wins() {
        let participants = [
            scored("Player 1", 3, 3),
            scored("Player 2", 5, 3),
            scored("Player 3", 4, 3),
        ];
        assert_eq!(find_game_winner(&participants), Some(1));
    }

    #[test]
    fn game_needs_participants_sharing_a_limit() {
        assert_eq!(Game::new(Vec::new()).unwrap_err(), SetupError::NoParticipants);
        assert_eq!(
            Game::new(vec![scored("Player 1", 0, 3), scored("Player 2", 0, 4)]).unwrap_err(),
            SetupError::MixedLimits
        );
    }

    #[test]
    fn state_follows_the_scores() {
        let mut game = Game::new(vec![
            loaded("Lucky", 6, 2, Kind::Human),
            loaded("Unlucky", 1, 2, Kind::Computer),
        ])
        .unwrap();
        assert_eq!(game.state(), GameState::RoundInProgress);

        let _round = game.play_round();
        assert_eq!(game.state(), GameState::RoundInProgress);

        let round = game.play_round();
        assert_eq!(round.winner(), Some(0));
        assert_eq!(game.state(), GameState::GameOver { winner: 0 });
        assert_eq!(game.rounds(), 2);
    }

    #[test]
    fn loaded_game_ends_in_exactly_limit_rounds() {
        let mut game = Game::new(vec![
            loaded("Twelve", 6, 3, Kind::Human),
            loaded("Two", 1, 3, Kind::Computer),
        ])
        .unwrap();
        let mut ui = Recorder::default();

        let winner = game.run(&mut ui).unwrap().name().to_owned();

        assert_eq!(winner, "Twelve");
        assert_eq!(game.rounds(), 3);
        assert_eq!(ui.started, [3]);
        assert_eq!(ui.prompts, 3);
        assert_eq!(ui.outcomes, [Some(0); 3]);
        assert_eq!(ui.pauses, 2);
        assert_eq!(ui.announced, ["Twelve"]);
        let scores: Vec<_> = game.participants().iter().map(Participant::score).collect();
        assert_eq!(scores, [3, 0]);
    }

    #[test]
    fn computer_can_win_too() {
        let mut game = Game::new(vec![
            loaded("Human", 2, 1, Kind::Human),
            loaded("Machine", 3, 1, Kind::Computer),
        ])
        .unwrap();
        let mut ui = Recorder::default();

        let winner = game.run(&mut ui).unwrap();

        assert!(winner.is_computer_controlled());
        assert_eq!(game.rounds(), 1);
    }

    #[test]
    fn fair_game_always_finishes() {
        let mut game = Game::new(vec![
            Participant::new("Alice", 3, Kind::Human).unwrap(),
            Participant::new("Opponent", 3, Kind::Computer).unwrap(),
        ])
        .unwrap();
        let mut ui = Recorder::default();

        let winner = game.run(&mut ui).unwrap().score();

        assert_eq!(winner, 3);
        let points: u32 = game.participants().iter().map(Participant::score).sum();
        let won_rounds = ui.outcomes.iter().filter(|outcome| outcome.is_some()).count();
        assert_eq!(usize::try_from(points).unwrap(), won_rounds);
        assert_eq!(ui.outcomes.len(), usize::try_from(game.rounds()).unwrap());
    }
}
