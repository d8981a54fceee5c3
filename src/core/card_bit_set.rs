use std::fmt::Debug;
use std::ops::Not;

use super::{Card, EquityError};

/// This struct is a bitset for cards
/// Each card is represented by a bit in a 64 bit integer
///
/// The bit is set if the card present
/// The bit is unset if the card not in the set
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CardBitSet {
    cards: u64,
}

const FIFTY_TWO_ONES: u64 = (1 << 52) - 1;

impl CardBitSet {
    /// Create a new empty bitset
    ///
    /// ```
    /// use river_equity::core::CardBitSet;
    /// let cards = CardBitSet::new();
    /// assert!(cards.is_empty());
    /// ```
    pub fn new() -> Self {
        Self { cards: 0 }
    }

    /// Every card of the 52 card deck.
    ///
    /// ```
    /// use river_equity::core::CardBitSet;
    ///
    /// assert_eq!(52, CardBitSet::full().count());
    /// ```
    pub fn full() -> Self {
        Self {
            cards: FIFTY_TWO_ONES,
        }
    }

    /// Build a set out of cards, failing on the first card seen twice.
    ///
    /// ```
    /// use river_equity::core::{Card, CardBitSet, EquityError};
    ///
    /// let ace: Card = "As".parse().unwrap();
    /// assert_eq!(
    ///     Err(EquityError::DuplicateCard(ace)),
    ///     CardBitSet::try_from_cards([ace, ace])
    /// );
    /// ```
    pub fn try_from_cards<I>(cards: I) -> Result<Self, EquityError>
    where
        I: IntoIterator<Item = Card>,
    {
        let mut set = Self::new();
        for card in cards {
            if !set.insert(card) {
                return Err(EquityError::DuplicateCard(card));
            }
        }
        Ok(set)
    }

    /// Insert a card. Returns false if it was already there.
    pub fn insert(&mut self, card: Card) -> bool {
        let had = self.contains(card);
        self.cards |= 1 << u8::from(card);
        !had
    }

    /// Is the card in the bitset ?
    pub fn contains(&self, card: Card) -> bool {
        (self.cards & (1 << u8::from(card))) != 0
    }

    pub fn is_empty(&self) -> bool {
        self.cards == 0
    }

    /// How many cards are in the bitset ?
    pub fn count(&self) -> usize {
        self.cards.count_ones() as usize
    }
}

impl Not for CardBitSet {
    type Output = Self;

    fn not(self) -> Self::Output {
        Self {
            cards: !self.cards & FIFTY_TWO_ONES, // Ensure we only keep the first 52 bits
        }
    }
}

/// The iterator for the CardBitSet
/// It iterates over the cards in the bitset, lowest index first.
pub struct CardBitSetIter(u64);

impl IntoIterator for CardBitSet {
    type Item = Card;
    type IntoIter = CardBitSetIter;

    fn into_iter(self) -> Self::IntoIter {
        CardBitSetIter(self.cards)
    }
}

impl Iterator for CardBitSetIter {
    type Item = Card;

    fn next(&mut self) -> Option<Self::Item> {
        if self.0 == 0 {
            return None;
        }

        let card = self.0.trailing_zeros();
        self.0 &= !(1 << card);

        Some(Card::from(card as u8))
    }
}

impl FromIterator<Card> for CardBitSet {
    fn from_iter<T: IntoIterator<Item = Card>>(iter: T) -> Self {
        let mut set = Self::new();
        for card in iter {
            set.insert(card);
        }
        set
    }
}

impl Debug for CardBitSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(*self).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Suit, Value};

    #[test]
    fn test_empty() {
        let cards = CardBitSet::new();
        assert!(cards.is_empty());
        assert_eq!(0, cards.count());
    }

    #[test]
    fn test_insert_all() {
        let mut all_cards = CardBitSet::new();
        for idx in 0..52u8 {
            assert!(all_cards.insert(Card::from(idx)));
        }
        assert_eq!(all_cards, CardBitSet::full());
    }

    #[test]
    fn test_insert_twice() {
        let mut cards = CardBitSet::new();
        let card = Card::new(Value::Six, Suit::Club);
        assert!(cards.insert(card));
        assert!(!cards.insert(card));
        assert_eq!(1, cards.count());
    }

    #[test]
    fn test_not_is_complement() {
        let mut used = CardBitSet::new();
        used.insert(Card::new(Value::Ace, Suit::Club));
        used.insert(Card::new(Value::King, Suit::Diamond));

        let rest = !used;
        assert_eq!(50, rest.count());
        for card in used {
            assert!(!rest.contains(card));
        }
        assert_eq!(used, !rest);
    }

    #[test]
    fn test_iter_is_sorted_by_index() {
        let set: CardBitSet = [Card::from(40), Card::from(3), Card::from(17)]
            .into_iter()
            .collect();
        let idx: Vec<u8> = set.into_iter().map(u8::from).collect();
        assert_eq!(vec![3, 17, 40], idx);
    }

    #[test]
    fn test_try_from_cards() {
        let cards = [
            Card::new(Value::Ace, Suit::Spade),
            Card::new(Value::King, Suit::Spade),
        ];
        assert_eq!(2, CardBitSet::try_from_cards(cards).unwrap().count());
    }

    #[test]
    fn test_formatting_cards() {
        let mut cards = CardBitSet::new();
        cards.insert(Card::new(Value::Ace, Suit::Club));
        cards.insert(Card::new(Value::King, Suit::Diamond));
        cards.insert(Card::new(Value::Three, Suit::Heart));

        assert_eq!(format!("{:?}", cards), "{Card(3h), Card(Ac), Card(Kd)}");
    }
}
