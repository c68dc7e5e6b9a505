//! This module builds every piece of text shown on the console during a game.
//!
//! Nothing here writes to the terminal; the functions only return the styled strings so that the
//! front end decides where and when they are printed.

use std::fmt::Write as _;

use console::style;

use crate::participant::Participant;
use crate::round::Round;

/// This function returns a banner line in the style used for the headings of the game.
fn banner(text: &str) -> String {
    format!("{}", style(format!("-------\t{text}\t-------")).bold())
}

/// This function returns the heading shown above the main menu.
pub(crate) fn welcome() -> String {
    banner("Welcome to the Dice Game!")
}

/// This function returns the message shown when the player leaves.
pub(crate) fn goodbye() -> String {
    format!("\n{}\nGoodbye!", style("Come to play again...").bold())
}

/// This function returns the announcement made before the first round of a game.
pub(crate) fn game_start(limit: u32) -> String {
    banner(&format!(
        "Starting the game: First to collect {limit} points wins!"
    ))
}

/// This function returns the invitation to roll shown at the start of every round.
pub(crate) fn roll_prompt() -> String {
    format!("{}", style(">>> Roll your dice! <<<").bold().cyan())
}

/// This function returns one line per participant with its score and the limit to reach.
pub(crate) fn scoreboard(participants: &[Participant]) -> String {
    let mut output = String::new();

    for participant in participants {
        // writing into a String cannot fail
        let _ = writeln!(
            output,
            ">>>\t{} - scores: {}\t||\tScore limit: {}\t<<<",
            style(participant.name()).bold(),
            participant.score(),
            participant.limit()
        );
    }

    output
}

/// This function returns what everybody rolled in the round and who, if anyone, took the point.
///
/// Rolls are listed in the order they came in, which is the order the dice stopped rolling.
pub(crate) fn round_outcome(participants: &[Participant], round: &Round) -> String {
    let mut output = String::new();

    for roll in round.rolls() {
        if let Some(participant) = participants.get(roll.seat()) {
            let _ = writeln!(output, "{} rolled a {}", participant.name(), roll.value());
        }
    }

    match round.winner().and_then(|seat| participants.get(seat)) {
        Some(winner) => {
            let _ = write!(
                output,
                "\n{}",
                style(format!(">>> {} wins the round! <<<", winner.name()))
                    .bold()
                    .green()
            );
        }
        None => {
            let _ = write!(
                output,
                "\n{}",
                style(">>> It's a tie! No points awarded. <<<").bold().yellow()
            );
        }
    }

    output
}

/// This function returns the closing announcement of a game, which congratulates a human winner and
/// breaks the news when the computer won.
pub(crate) fn winner(winner: &Participant) -> String {
    if winner.is_computer_controlled() {
        format!(
            "{}",
            style(format!(
                "You have lost the game! {} takes it with {} points.",
                winner.name(),
                winner.score()
            ))
            .bold()
            .red()
        )
    } else {
        format!(
            "{}",
            style(format!(
                "Congratulations, {}! You have won the game!",
                winner.name()
            ))
            .bold()
            .green()
        )
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use console::strip_ansi_codes;

    use super::*;
    use crate::die::Loaded;
    use crate::participant::Kind;
    use crate::round::resolve_round;

    fn loaded(name: &str, face: u8, kind: Kind) -> Participant {
        Participant::with_faces(name, 3, kind, Arc::new(Loaded::new(face).unwrap())).unwrap()
    }

    #[test]
    fn scoreboard_lists_every_participant() {
        let mut participants = [loaded("Alice", 6, Kind::Human), loaded("Opponent", 1, Kind::Computer)];
        participants[0].add_score(2);

        let board = scoreboard(&participants);
        let lines: Vec<_> = strip_ansi_codes(&board).lines().map(str::to_owned).collect();

        assert_eq!(
            lines,
            [
                ">>>\tAlice - scores: 2\t||\tScore limit: 3\t<<<",
                ">>>\tOpponent - scores: 0\t||\tScore limit: 3\t<<<",
            ]
        );
    }

    #[test]
    fn round_outcome_names_the_winner() {
        let mut participants = [loaded("Alice", 6, Kind::Human), loaded("Opponent", 1, Kind::Computer)];
        let round = resolve_round(&mut participants);

        let text = round_outcome(&participants, &round);
        let text = strip_ansi_codes(&text);

        assert!(text.contains("Alice rolled a 12"), "{text}");
        assert!(text.contains("Opponent rolled a 2"), "{text}");
        assert!(text.ends_with(">>> Alice wins the round! <<<"), "{text}");
    }

    #[test]
    fn round_outcome_reports_ties() {
        let mut participants = [loaded("Alice", 4, Kind::Human), loaded("Bobby", 4, Kind::Human)];
        let round = resolve_round(&mut participants);

        let text = round_outcome(&participants, &round);

        assert!(strip_ansi_codes(&text).ends_with("It's a tie! No points awarded. <<<"));
    }

    #[test]
    fn winner_depends_on_who_won() {
        let human = loaded("Alice", 6, Kind::Human);
        let computer = loaded("Opponent", 6, Kind::Computer);

        assert_eq!(
            strip_ansi_codes(&winner(&human)),
            "Congratulations, Alice! You have won the game!"
        );
        assert!(strip_ansi_codes(&winner(&computer)).starts_with("You have lost the game!"));
    }
}
