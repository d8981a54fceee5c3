use crate::core::card::Card;
use crate::core::deck::Deck;
use std::ops::{Index, Range, RangeFull};

use rand::Rng;
use rand::seq::SliceRandom;

/// `FlatDeck` is a deck of cards that allows easy
/// indexing into the cards. It does not provide
/// contains methods.
#[derive(Debug, Clone, PartialEq)]
pub struct FlatDeck {
    /// Card storage.
    cards: Vec<Card>,
}

impl FlatDeck {
    /// How many cards are there in the deck ?
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Randomly shuffle the flat deck.
    /// This will ensure the there's no order to the deck.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng)
    }

    /// Draw `n` uniformly chosen cards without replacement, paying for
    /// only `n` swaps. `n` larger than the deck is clamped.
    pub fn partial_shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R, n: usize) -> &[Card] {
        let (drawn, _rest) = self.cards.partial_shuffle(rng, n);
        drawn
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.cards.iter()
    }
}

impl Index<usize> for FlatDeck {
    type Output = Card;
    fn index(&self, index: usize) -> &Card {
        &self.cards[index]
    }
}
impl Index<Range<usize>> for FlatDeck {
    type Output = [Card];
    fn index(&self, index: Range<usize>) -> &[Card] {
        &self.cards[index]
    }
}
impl Index<RangeFull> for FlatDeck {
    type Output = [Card];
    fn index(&self, index: RangeFull) -> &[Card] {
        &self.cards[index]
    }
}

impl From<Vec<Card>> for FlatDeck {
    fn from(value: Vec<Card>) -> Self {
        Self { cards: value }
    }
}

/// Allow creating a flat deck from a Deck
impl From<Deck> for FlatDeck {
    /// Flatten this deck, consuming it to produce a `FlatDeck` that's
    /// easier to get random access to.
    fn from(value: Deck) -> Self {
        // We sort the cards so that the same input
        // cards always result in the same starting flat deck
        let mut cards: Vec<Card> = value.into_iter().collect();
        cards.sort();
        Self { cards }
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;
    use crate::core::{CardBitSet, Suit, Value};

    #[test]
    fn test_deck_from() {
        let fd: FlatDeck = Deck::default().into();
        assert_eq!(52, fd.len());
        assert_eq!(Card::new(Value::Two, Suit::Spade), fd[0]);
        assert_eq!(Card::new(Value::Ace, Suit::Diamond), fd[51]);
    }

    #[test]
    fn test_from_vec() {
        let c = Card::new(Value::Nine, Suit::Heart);
        let flat_deck: FlatDeck = vec![c].into();

        assert_eq!(1, flat_deck.len());
        assert_eq!(c, flat_deck[0]);
    }

    #[test]
    fn test_shuffle_rng() {
        let mut fd_one: FlatDeck = Deck::default().into();
        let mut fd_two: FlatDeck = Deck::default().into();

        let mut rng_one = StdRng::seed_from_u64(420);
        let mut rng_two = StdRng::seed_from_u64(420);

        fd_one.shuffle(&mut rng_one);
        fd_two.shuffle(&mut rng_two);

        assert_eq!(fd_one, fd_two);
    }

    #[test]
    fn test_partial_shuffle_keeps_cards() {
        let mut fd: FlatDeck = Deck::default().into();
        let mut rng = StdRng::seed_from_u64(7);

        let front: CardBitSet = fd.partial_shuffle(&mut rng, 10).iter().copied().collect();
        assert_eq!(10, front.count());

        let all: CardBitSet = fd.iter().copied().collect();
        assert_eq!(CardBitSet::full(), all);
    }

    #[test]
    fn test_partial_shuffle_repeats_with_seed() {
        let mut fd_one: FlatDeck = Deck::default().into();
        let mut fd_two: FlatDeck = Deck::default().into();
        let mut rng_one = StdRng::seed_from_u64(99);
        let mut rng_two = StdRng::seed_from_u64(99);

        let one = fd_one.partial_shuffle(&mut rng_one, 6).to_vec();
        let two = fd_two.partial_shuffle(&mut rng_two, 6).to_vec();
        assert_eq!(one, two);
    }

    #[test]
    fn test_partial_shuffle_reaches_every_card() {
        let mut fd: FlatDeck = Deck::default().into();
        let mut rng = StdRng::seed_from_u64(3);
        let mut seen = CardBitSet::new();
        for _ in 0..500 {
            for &c in fd.partial_shuffle(&mut rng, 2) {
                seen.insert(c);
            }
        }
        assert_eq!(CardBitSet::full(), seen);
    }

    #[test]
    fn test_partial_shuffle_clamps() {
        let mut fd: FlatDeck = vec![Card::from(1), Card::from(2)].into();
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(2, fd.partial_shuffle(&mut rng, 10).len());
    }

    #[test]
    fn test_is_empty() {
        let fd: FlatDeck = Deck::new().into();
        assert!(fd.is_empty());
    }
}
