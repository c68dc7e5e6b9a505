//! # dicey
//!
//! This crate is a dice game for the terminal. One or two players, joined by the computer when
//! playing alone, roll a pair of dice each round; the highest roll takes a point, ties take
//! nothing, and the first to reach the score limit wins the game.
//!
//! Every round the dice of all participants are rolled at the same time, each on its own thread.
//! Set `DICEY_LOG` to a `tracing` filter such as `info` or `dicey=debug` to follow the rounds on
//! the standard error.

#![expect(
    unused_crate_dependencies,
    reason = "The dependencies are used in the library crate."
)]

use anyhow::Result;
use dicey::init;

fn main() -> Result<()> {
    init()
}
