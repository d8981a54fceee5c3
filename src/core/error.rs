use thiserror::Error;

use super::Card;

/// This is the core error type for the river equity library.
///
/// Everything here is a caller mistake. There is no I/O in the
/// library so nothing is transient or worth retrying.
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash)]
pub enum EquityError {
    #[error("Unable to parse value")]
    UnexpectedValueChar,
    #[error("Unable to parse suit")]
    UnexpectedSuitChar,
    #[error("Error reading characters while parsing")]
    TooFewChars,
    #[error("Extra un-used characters found after parsing")]
    UnparsedCharsRemaining,
    #[error("Expected {expected} cards but found {found}")]
    WrongCardCount { expected: usize, found: usize },
    #[error("Card {0} was used more than once")]
    DuplicateCard(Card),
    #[error("Hand score does not match the shape of its category")]
    MalformedScore,
    #[error("{opponents} opponents need more hole cards than the {available} left in the deck")]
    TooManyOpponents { opponents: usize, available: usize },
    #[error("Monte carlo needs at least one trial")]
    InvalidTrials,
    #[error("Opponent count must not be negative")]
    InvalidOpponents,
}
