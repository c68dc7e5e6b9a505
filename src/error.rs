//! This module holds the error type raised while putting a game together. Once a game has been set
//! up, nothing in rolling, scoring or resolving rounds can fail.

/// This enum holds the reasons why participants, dice or a game may be refused at construction
/// time.
#[derive(thiserror::Error, Debug, PartialEq, Eq, Clone, Copy)]
pub enum SetupError {
    /// This variant is used when a participant name is empty once surrounding whitespace is
    /// trimmed.
    #[error("participant names cannot be empty")]
    EmptyName,
    /// This variant is used when a loaded die is asked to always land on a face it doesn't have.
    #[error("a die has no face {0}; faces go from 1 to 6")]
    FaceOutOfRange(u8),
    /// This variant is used when participants of the same game were given different score limits.
    #[error("every participant in a game must share the same score limit")]
    MixedLimits,
    /// This variant is used when a game is built without anybody to play it.
    #[error("a game needs at least one participant")]
    NoParticipants,
    /// This variant is used when the score limit is zero, which would end the game before it
    /// starts.
    #[error("the score limit must be at least 1")]
    ZeroLimit,
}
