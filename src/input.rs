//! This module contains all functions related to taking input from the players. They all use the
//! `dialoguer` crate to process the input, and they all check for input validation.
//!
//! Specifically, they take the number of players, the name of each of them and the score limit of
//! the game, plus the choice made in the main menu.

use std::ops::RangeInclusive;

use anyhow::Result;
use console::{style, Term};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};

use crate::ui::MenuChoice;

/// The number of people allowed to sit at the table.
pub(crate) const PLAYERS: RangeInclusive<u8> = 1..=2;

/// The score limits a game may be played up to.
pub(crate) const SCORE_LIMITS: RangeInclusive<u32> = 3..=9;

/// The number of characters a player name may have.
pub(crate) const NAME_LENGTH: RangeInclusive<usize> = 4..=15;

/// This function shows the main menu and returns the entry picked with the arrow keys and the return
/// key.
pub(crate) fn take_menu_choice(term: &Term) -> Result<MenuChoice> {
    let choice = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(format!("{}", style("Please make a choice").bold()))
        .items(&["Play a game", "Exit"])
        .default(0)
        .interact_on(term)?;

    match choice {
        0 => Ok(MenuChoice::Play),
        _ => Ok(MenuChoice::Exit),
    }
}

/// This function is in charge of taking the number of people who are going to play. When only one
/// does, the computer sits in the other seat.
pub(crate) fn take_players_count(term: &Term) -> Result<u8> {
    let count: u8 = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(format!(
            "{}",
            style(format!(
                "Enter the number of players ({} - {})",
                PLAYERS.start(),
                PLAYERS.end()
            ))
            .bold()
        ))
        .validate_with(|count: &u8| -> Result<(), String> {
            if PLAYERS.contains(count) {
                Ok(())
            } else {
                Err(format!(
                    "The number of players must be between {} and {}",
                    PLAYERS.start(),
                    PLAYERS.end()
                ))
            }
        })
        .interact_text_on(term)?;

    Ok(count)
}

/// This function is in charge of taking the name of the player at `seat`. The name is returned with
/// its first letter in upper case.
pub(crate) fn take_name(term: &Term, seat: u8, count: u8) -> Result<String> {
    let prompt = if count > 1 {
        format!("Enter name for Player {seat}")
    } else {
        "Enter your name".to_owned()
    };

    let name: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(format!("{}", style(prompt).bold()))
        .validate_with(|name: &String| -> Result<(), String> {
            if NAME_LENGTH.contains(&name.trim().chars().count()) {
                Ok(())
            } else {
                Err(format!(
                    "The name must be between {} and {} characters long",
                    NAME_LENGTH.start(),
                    NAME_LENGTH.end()
                ))
            }
        })
        .interact_text_on(term)?;

    Ok(capitalize(name.trim()))
}

/// This function is in charge of taking the score the game is played up to.
pub(crate) fn take_score_limit(term: &Term) -> Result<u32> {
    let limit: u32 = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(format!(
            "{}",
            style(format!(
                "Enter the score limit ({} - {})",
                SCORE_LIMITS.start(),
                SCORE_LIMITS.end()
            ))
            .bold()
        ))
        .validate_with(|limit: &u32| -> Result<(), String> {
            if SCORE_LIMITS.contains(limit) {
                Ok(())
            } else {
                Err(format!(
                    "The limit must be between {} and {}",
                    SCORE_LIMITS.start(),
                    SCORE_LIMITS.end()
                ))
            }
        })
        .interact_text_on(term)?;

    Ok(limit)
}

/// This function waits until any key is pressed.
pub(crate) fn pause(term: &Term) -> Result<()> {
    term.write_line(&format!(
        "\n{}",
        style("Press any key to continue...").dim()
    ))?;
    let _key = term.read_key()?;

    Ok(())
}

/// This function returns `name` with its first character in upper case.
fn capitalize(name: &str) -> String {
    let mut chars = name.chars();

    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_capitalized() {
        assert_eq!(capitalize("alice"), "Alice");
        assert_eq!(capitalize("Bob"), "Bob");
        assert_eq!(capitalize("élodie"), "Élodie");
        assert_eq!(capitalize(""), "");
    }
}
