//! This module resolves a single round: every participant rolls at the same time, and the one with
//! the highest roll takes a point, unless somebody else rolled just as high.

use std::cmp::Ordering;
use std::panic;
use std::sync::mpsc;
use std::thread;

use tracing::{debug, info, instrument};

use crate::participant::{Participant, RollResult};

/// This struct holds what came out of a round, kept around only long enough to be shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    /// This field contains every roll of the round, in the order the rolling threads finished.
    rolls: Vec<RollResult>,
    /// This field contains the seat of the participant who took the point, if anyone did.
    winner: Option<usize>,
}

impl Round {
    /// This function returns every roll of the round.
    #[must_use]
    pub fn rolls(&self) -> &[RollResult] {
        &self.rolls
    }

    /// This function returns the seat of the round winner, or `None` on a tie.
    #[must_use]
    pub const fn winner(&self) -> Option<usize> {
        self.winner
    }
}

/// This function plays one round over `participants` and awards the winner its point.
///
/// One thread is spawned per participant to roll its dice. Threads only borrow their participant
/// immutably and hand their result back over a channel; the round is not looked at until all of
/// them have been joined. The point is then awarded from the calling thread.
///
/// An empty slice produces a round without rolls nor winner.
#[instrument(skip_all, fields(participants = participants.len()))]
pub fn resolve_round(participants: &mut [Participant]) -> Round {
    let rolls = roll_all(participants);
    let winner = find_round_winner(&rolls);

    match winner.and_then(|seat| participants.get_mut(seat)) {
        Some(participant) => {
            participant.add_score(1);
            info!(
                winner = participant.name(),
                score = participant.score(),
                "round won"
            );
        }
        None => info!("round tied; no points awarded"),
    }

    Round { rolls, winner }
}

/// This function rolls every participant's dice on its own thread and gathers the results once all
/// threads are done.
fn roll_all(participants: &[Participant]) -> Vec<RollResult> {
    let (sender, receiver) = mpsc::channel();

    thread::scope(|scope| {
        let handles: Vec<_> = participants
            .iter()
            .enumerate()
            .map(|(seat, participant)| {
                let sender = sender.clone();

                scope.spawn(move || {
                    let roll = RollResult::new(seat, participant.roll_dice());
                    debug!(seat, value = roll.value(), "dice rolled");

                    if let Err(error) = sender.send(roll) {
                        tracing::error!(%error, seat, "roll dropped before the round collected it");
                    }
                })
            })
            .collect();

        for handle in handles {
            if let Err(payload) = handle.join() {
                panic::resume_unwind(payload);
            }
        }
    });

    // every sender clone has gone with its thread; dropping this one closes the channel
    drop(sender);
    receiver.into_iter().collect()
}

/// This function picks the round winner from a set of rolls.
///
/// The rolls are scanned once while keeping track of the highest value seen. A strictly higher
/// value makes its roller the candidate, while matching the current highest value clears the
/// candidate. Whoever alone holds the highest value at the end wins, so the result doesn't depend
/// on the order the rolls arrived in. No rolls, or a shared highest value, means no winner.
#[must_use]
pub fn find_round_winner(rolls: &[RollResult]) -> Option<usize> {
    let mut highest = None;
    let mut winner = None;

    for roll in rolls {
        match highest.map(|value: u8| roll.value().cmp(&value)) {
            None | Some(Ordering::Greater) => {
                highest = Some(roll.value());
                winner = Some(roll.seat());
            }
            Some(Ordering::Equal) => winner = None,
            Some(Ordering::Less) => {}
        }
    }

    winner
}
