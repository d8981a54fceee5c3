use super::{Card, CardBitSet, CardBitSetIter, Suit, Value};

/// Deck struct that can tell quickly if a card is in the deck
///
/// A deck never holds a card twice and never holds anything
/// outside of the 13 x 4 grid; both come from the bitset storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deck {
    /// Card storage.
    cards: CardBitSet,
}

impl Deck {
    /// Create an empty deck.
    pub fn new() -> Self {
        Self {
            cards: CardBitSet::new(),
        }
    }

    /// Everything left once the known cards are taken out of the
    /// canonical 52 card deck.
    ///
    /// ```
    /// use river_equity::core::{CardBitSet, Deck};
    ///
    /// let known = CardBitSet::try_from_cards(
    ///     ["As", "Ks"].iter().map(|s| s.parse().unwrap()),
    /// )
    /// .unwrap();
    /// assert_eq!(50, Deck::without(known).len());
    /// ```
    pub fn without(known: CardBitSet) -> Self {
        Self { cards: !known }
    }

    /// Given a card, is it in the current deck?
    pub fn contains(&self, c: &Card) -> bool {
        self.cards.contains(*c)
    }

    /// How many cards are there in the deck.
    pub fn len(&self) -> usize {
        self.cards.count()
    }

    /// Have all of the cards been dealt from this deck?
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Get an iterator from this deck
    pub fn iter(&self) -> CardBitSetIter {
        self.cards.into_iter()
    }
}

impl Default for Deck {
    /// Create the default 52 card deck
    ///
    /// ```
    /// use river_equity::core::Deck;
    ///
    /// assert_eq!(52, Deck::default().len());
    /// ```
    fn default() -> Self {
        let mut cards = CardBitSet::new();
        for v in Value::values() {
            for s in Suit::suits() {
                cards.insert(Card::new(v, s));
            }
        }
        Self { cards }
    }
}

/// Turn a deck into an iterator
impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = CardBitSetIter;

    fn into_iter(self) -> CardBitSetIter {
        self.cards.into_iter()
    }
}

impl From<Deck> for CardBitSet {
    fn from(value: Deck) -> Self {
        value.cards
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_in() {
        let d = Deck::default();
        assert!(d.contains(&Card::new(Value::Eight, Suit::Heart)));
    }

    #[test]
    fn test_default_is_full_grid() {
        let d = Deck::default();
        assert_eq!(CardBitSet::full(), CardBitSet::from(d));
        for v in Value::values() {
            assert_eq!(4, d.iter().filter(|c| c.value == v).count());
        }
    }

    #[test]
    fn test_without_seven_known() {
        let known: CardBitSet = (0..7u8).map(Card::from).collect();
        let rest = Deck::without(known);
        assert_eq!(45, rest.len());
        for c in known {
            assert!(!rest.contains(&c));
        }
    }

    #[test]
    fn test_new_is_empty() {
        let d = Deck::new();
        assert!(d.is_empty());
        assert!(Deck::without(CardBitSet::full()).is_empty());
    }
}
