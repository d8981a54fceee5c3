use std::str::FromStr;

use crate::core::{
    Card, CardBitSet, Deck, EquityError, FlatDeck, HandScore, Rankable, parse_cards,
};

/// Hero's two hole cards plus the full five card board.
///
/// Construction checks that all seven cards are distinct, so everything
/// downstream can rank without re-validating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RiverSpot {
    hero: [Card; 2],
    board: [Card; 5],
    hero_score: HandScore,
    dead: CardBitSet,
}

impl RiverSpot {
    /// # Errors
    ///
    /// `DuplicateCard` if any card appears twice across hole cards and board.
    pub fn new(hero: [Card; 2], board: [Card; 5]) -> Result<Self, EquityError> {
        let dead = CardBitSet::try_from_cards(hero.into_iter().chain(board))?;
        let hero_score = score_river(hero, &board);
        Ok(Self {
            hero,
            board,
            hero_score,
            dead,
        })
    }

    /// Same as `new` but from slices, checking there are exactly two hole
    /// cards and five board cards.
    pub fn from_cards(hero: &[Card], board: &[Card]) -> Result<Self, EquityError> {
        let hero: [Card; 2] = hero.try_into().map_err(|_| EquityError::WrongCardCount {
            expected: 2,
            found: hero.len(),
        })?;
        let board: [Card; 5] = board.try_into().map_err(|_| EquityError::WrongCardCount {
            expected: 5,
            found: board.len(),
        })?;
        Self::new(hero, board)
    }

    pub fn hero(&self) -> [Card; 2] {
        self.hero
    }

    pub fn board(&self) -> [Card; 5] {
        self.board
    }

    pub fn hero_score(&self) -> HandScore {
        self.hero_score
    }

    /// The seven known cards.
    pub fn dead_cards(&self) -> CardBitSet {
        self.dead
    }

    /// The 45 cards an opponent could hold, in sorted order.
    pub fn remaining_deck(&self) -> FlatDeck {
        Deck::without(self.dead).into()
    }

    /// Score some other set of hole cards against this board.
    pub fn score_with(&self, hole: [Card; 2]) -> HandScore {
        score_river(hole, &self.board)
    }
}

#[inline]
pub(crate) fn score_river(hole: [Card; 2], board: &[Card; 5]) -> HandScore {
    [
        hole[0], hole[1], board[0], board[1], board[2], board[3], board[4],
    ]
    .rank()
}

impl FromStr for RiverSpot {
    type Err = EquityError;

    /// Two hole cards followed by the five board cards.
    ///
    /// ```
    /// use river_equity::core::HandCategory;
    /// use river_equity::holdem::RiverSpot;
    ///
    /// let spot: RiverSpot = "AsKs KhKd5c5d2s".parse().unwrap();
    /// assert_eq!(HandCategory::FullHouse, spot.hero_score().category());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = parse_cards(s)?;
        if cards.len() != 7 {
            return Err(EquityError::WrongCardCount {
                expected: 7,
                found: cards.len(),
            });
        }
        Self::from_cards(&cards[..2], &cards[2..])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{HandScore, Suit, Value};

    #[test]
    fn test_remaining_deck() {
        let spot: RiverSpot = "AsKs KhKd5c5d2s".parse().unwrap();
        let deck = spot.remaining_deck();
        assert_eq!(45, deck.len());
        for c in deck.iter() {
            assert!(!spot.dead_cards().contains(*c));
        }
    }

    #[test]
    fn test_hero_score() {
        let spot: RiverSpot = "AsKs KhKd5c5d2s".parse().unwrap();
        assert_eq!(
            HandScore::FullHouse {
                trips: Value::King,
                pair: Value::Five,
            },
            spot.hero_score()
        );
    }

    #[test]
    fn test_duplicate_between_hole_and_board() {
        let ace = Card::new(Value::Ace, Suit::Spade);
        let board = parse_cards("AsQd9c4h2s").unwrap();
        let hero = [ace, Card::new(Value::King, Suit::Spade)];
        assert_eq!(
            Err(EquityError::DuplicateCard(ace)),
            RiverSpot::from_cards(&hero, &board)
        );
    }

    #[test]
    fn test_wrong_counts() {
        let cards = parse_cards("AsKsQd9c4h2s").unwrap();
        assert_eq!(
            Err(EquityError::WrongCardCount {
                expected: 5,
                found: 4
            }),
            RiverSpot::from_cards(&cards[..2], &cards[2..])
        );
        assert_eq!(
            Err(EquityError::WrongCardCount {
                expected: 7,
                found: 6
            }),
            "AsKsQd9c4h2s".parse::<RiverSpot>()
        );
    }

    #[test]
    fn test_score_with() {
        let spot: RiverSpot = "AsKs KhKd5c5d2s".parse().unwrap();
        let last_king = spot.score_with([
            Card::new(Value::King, Suit::Club),
            Card::new(Value::Three, Suit::Club),
        ]);
        assert_eq!(spot.hero_score(), last_king);
        assert_eq!(
            HandScore::FullHouse {
                trips: Value::King,
                pair: Value::Five,
            },
            last_king
        );

        let fives = spot.score_with([
            Card::new(Value::Five, Suit::Heart),
            Card::new(Value::Five, Suit::Spade),
        ]);
        assert_eq!(
            HandScore::FourOfAKind {
                quads: Value::Five,
                kicker: Value::King,
            },
            fives
        );
    }
}
