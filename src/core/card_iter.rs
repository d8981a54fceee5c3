use super::Card;

/// Iterate over every `num_cards` sized combination of a set of cards.
///
/// Combinations come out in lexicographic order of their positions in
/// the source slice, each one sorted the same way the source is.
///
/// ```
/// use river_equity::core::{CardIter, Deck, FlatDeck};
///
/// let deck: FlatDeck = Deck::default().into();
/// assert_eq!(1326, CardIter::new(&deck[..], 2).count());
/// ```
#[derive(Debug)]
pub struct CardIter {
    // All the possible cards that can be dealt
    possible_cards: Vec<Card>,
    // Set of current offsets being used to create card sets.
    idx: Vec<usize>,
    // Has the first combination been handed out yet?
    started: bool,
    done: bool,
}

impl CardIter {
    pub fn new(possible_cards: &[Card], num_cards: usize) -> CardIter {
        CardIter {
            possible_cards: possible_cards.to_vec(),
            idx: (0..num_cards).collect(),
            started: false,
            done: num_cards == 0 || num_cards > possible_cards.len(),
        }
    }

    fn advance(&mut self) -> bool {
        let n = self.possible_cards.len();
        let k = self.idx.len();

        // Find the right most offset that still has room to move.
        let Some(level) = (0..k).rev().find(|&i| self.idx[i] < n - k + i) else {
            return false;
        };
        self.idx[level] += 1;
        for i in level + 1..k {
            self.idx[i] = self.idx[i - 1] + 1;
        }
        true
    }
}

impl Iterator for CardIter {
    type Item = Vec<Card>;

    fn next(&mut self) -> Option<Vec<Card>> {
        if self.done {
            return None;
        }
        if self.started {
            if !self.advance() {
                self.done = true;
                return None;
            }
        } else {
            self.started = true;
        }

        Some(self.idx.iter().map(|&i| self.possible_cards[i]).collect())
    }
}
