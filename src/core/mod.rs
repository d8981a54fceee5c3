//! This is the core module. It exports the code that doesn't care
//! which street or which game is being played.

/// card.rs has value and suit.
mod card;
/// Re-export Card, Value, and Suit
pub use self::card::{Card, Suit, Value, parse_cards};

/// The error type shared by the whole crate.
mod error;
pub use self::error::EquityError;

/// A 52 bit set of cards.
mod card_bit_set;
pub use self::card_bit_set::{CardBitSet, CardBitSetIter};

/// We want to be able to iterate over every set of hole cards.
mod card_iter;
/// Make that functionality public.
pub use self::card_iter::CardIter;

/// Deck is the normal 52 card deck.
mod deck;
/// Export `Deck`
pub use self::deck::Deck;

/// Flattened deck
mod flat_deck;
pub use self::flat_deck::FlatDeck;

/// Seven card hand scoring.
mod rank;
/// Export the trait and the results.
pub use self::rank::{HandCategory, HandScore, Rankable, best_straight, evaluate};
