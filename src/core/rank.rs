use super::{Card, CardBitSet, EquityError, Suit, Value};

/// The nine hand categories, weakest first.
///
/// The discriminant is the category code used in the flat integer
/// form of a score, 1 for high card up to 9 for a straight flush.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum HandCategory {
    HighCard = 1,
    OnePair = 2,
    TwoPair = 3,
    ThreeOfAKind = 4,
    Straight = 5,
    Flush = 6,
    FullHouse = 7,
    FourOfAKind = 8,
    StraightFlush = 9,
}

const CATEGORIES: [HandCategory; 9] = [
    HandCategory::HighCard,
    HandCategory::OnePair,
    HandCategory::TwoPair,
    HandCategory::ThreeOfAKind,
    HandCategory::Straight,
    HandCategory::Flush,
    HandCategory::FullHouse,
    HandCategory::FourOfAKind,
    HandCategory::StraightFlush,
];

impl HandCategory {
    /// All categories, weakest first.
    pub const fn categories() -> [HandCategory; 9] {
        CATEGORIES
    }

    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn from_code(code: u8) -> Option<HandCategory> {
        match code {
            1..=9 => Some(CATEGORIES[usize::from(code - 1)]),
            _ => None,
        }
    }

    /// How many tie break ranks follow the category code.
    pub fn tie_break_len(self) -> usize {
        match self {
            HandCategory::StraightFlush | HandCategory::Straight => 1,
            HandCategory::FourOfAKind | HandCategory::FullHouse => 2,
            HandCategory::ThreeOfAKind | HandCategory::TwoPair => 3,
            HandCategory::OnePair => 4,
            HandCategory::Flush | HandCategory::HighCard => 5,
        }
    }
}

/// The score of the best five card hand found in a set of cards.
///
/// Variants are declared weakest first and each one carries only the
/// values needed to break a tie inside its category, most significant
/// first. The derived ordering is therefore the poker ordering: the
/// category decides, then the tie breaks are compared in order.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HandScore {
    /// No matches. The five highest values.
    HighCard([Value; 5]),
    /// One card matches another.
    OnePair { pair: Value, kickers: [Value; 3] },
    /// Two different pairs of matching cards.
    TwoPair {
        high: Value,
        low: Value,
        kicker: Value,
    },
    /// Three of the same value.
    ThreeOfAKind { trips: Value, kickers: [Value; 2] },
    /// Five cards in a sequence. Holds the top of the run, which is
    /// `Value::Five` for the wheel.
    Straight(Value),
    /// Five cards of the same suit, highest first.
    Flush([Value; 5]),
    /// Three of one value and two of another value
    FullHouse { trips: Value, pair: Value },
    /// Four of the same value.
    FourOfAKind { quads: Value, kicker: Value },
    /// Five cards in a sequence all of the same suit.
    StraightFlush(Value),
}

impl HandScore {
    pub fn category(&self) -> HandCategory {
        match self {
            HandScore::HighCard(_) => HandCategory::HighCard,
            HandScore::OnePair { .. } => HandCategory::OnePair,
            HandScore::TwoPair { .. } => HandCategory::TwoPair,
            HandScore::ThreeOfAKind { .. } => HandCategory::ThreeOfAKind,
            HandScore::Straight(_) => HandCategory::Straight,
            HandScore::Flush(_) => HandCategory::Flush,
            HandScore::FullHouse { .. } => HandCategory::FullHouse,
            HandScore::FourOfAKind { .. } => HandCategory::FourOfAKind,
            HandScore::StraightFlush(_) => HandCategory::StraightFlush,
        }
    }

    /// The tie break values, most significant first.
    pub fn tie_break(&self) -> Vec<Value> {
        match *self {
            HandScore::HighCard(v) | HandScore::Flush(v) => v.to_vec(),
            HandScore::OnePair { pair, kickers } => {
                let mut out = vec![pair];
                out.extend(kickers);
                out
            }
            HandScore::TwoPair { high, low, kicker } => vec![high, low, kicker],
            HandScore::ThreeOfAKind { trips, kickers } => {
                let mut out = vec![trips];
                out.extend(kickers);
                out
            }
            HandScore::Straight(high) | HandScore::StraightFlush(high) => vec![high],
            HandScore::FullHouse { trips, pair } => vec![trips, pair],
            HandScore::FourOfAKind { quads, kicker } => vec![quads, kicker],
        }
    }

    /// Flatten into the integer form: the category code followed by the
    /// tie break ranks (2 through 14). Comparing these vectors
    /// lexicographically gives the same answer as comparing the scores.
    ///
    /// ```
    /// use river_equity::core::{HandScore, Value};
    ///
    /// let score = HandScore::FullHouse {
    ///     trips: Value::King,
    ///     pair: Value::Five,
    /// };
    /// assert_eq!(vec![7, 13, 5], score.to_vec());
    /// ```
    pub fn to_vec(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(6);
        out.push(self.category().code());
        out.extend(self.tie_break().into_iter().map(Value::rank));
        out
    }
}

/// Strictly descending and free of `taken`.
fn is_kicker_run(values: &[Value], taken: &[Value]) -> bool {
    values.windows(2).all(|w| w[0] > w[1]) && values.iter().all(|v| !taken.contains(v))
}

impl TryFrom<&[u8]> for HandScore {
    type Error = EquityError;

    /// Rebuild a score from its integer form, rejecting anything whose
    /// shape can't come out of a real hand.
    fn try_from(raw: &[u8]) -> Result<Self, Self::Error> {
        let (&code, rest) = raw.split_first().ok_or(EquityError::MalformedScore)?;
        let category = HandCategory::from_code(code).ok_or(EquityError::MalformedScore)?;
        if rest.len() != category.tie_break_len() {
            return Err(EquityError::MalformedScore);
        }
        let v = rest
            .iter()
            .map(|&r| Value::from_rank(r).ok_or(EquityError::MalformedScore))
            .collect::<Result<Vec<Value>, _>>()?;

        let score = match category {
            HandCategory::HighCard => HandScore::HighCard([v[0], v[1], v[2], v[3], v[4]]),
            HandCategory::Flush => HandScore::Flush([v[0], v[1], v[2], v[3], v[4]]),
            HandCategory::OnePair => HandScore::OnePair {
                pair: v[0],
                kickers: [v[1], v[2], v[3]],
            },
            HandCategory::TwoPair => HandScore::TwoPair {
                high: v[0],
                low: v[1],
                kicker: v[2],
            },
            HandCategory::ThreeOfAKind => HandScore::ThreeOfAKind {
                trips: v[0],
                kickers: [v[1], v[2]],
            },
            HandCategory::Straight => HandScore::Straight(v[0]),
            HandCategory::StraightFlush => HandScore::StraightFlush(v[0]),
            HandCategory::FullHouse => HandScore::FullHouse {
                trips: v[0],
                pair: v[1],
            },
            HandCategory::FourOfAKind => HandScore::FourOfAKind {
                quads: v[0],
                kicker: v[1],
            },
        };

        let well_formed = match score {
            HandScore::HighCard(values) | HandScore::Flush(values) => is_kicker_run(&values, &[]),
            HandScore::OnePair { pair, kickers } => is_kicker_run(&kickers, &[pair]),
            HandScore::TwoPair { high, low, kicker } => high > low && is_kicker_run(&[kicker], &[high, low]),
            HandScore::ThreeOfAKind { trips, kickers } => is_kicker_run(&kickers, &[trips]),
            HandScore::Straight(high) | HandScore::StraightFlush(high) => high >= Value::Five,
            HandScore::FullHouse { trips, pair } => trips != pair,
            HandScore::FourOfAKind { quads, kicker } => quads != kicker,
        };
        if well_formed {
            Ok(score)
        } else {
            Err(EquityError::MalformedScore)
        }
    }
}

/// Rank bits for A, 2, 3, 4, 5.
const WHEEL: u16 = 0b1_0000_0000_1111;

/// Find the best straight in a set of values.
///
/// `value_mask` has bit `Value as u8` set for every value present.
/// The wheel only counts when nothing higher runs five long, and it
/// ranks by its five, not by the ace.
///
/// ```
/// use river_equity::core::{best_straight, Value};
///
/// let mask = [Value::Ace, Value::Two, Value::Three, Value::Four, Value::Five]
///     .iter()
///     .fold(0u16, |m, v| m | 1 << *v as u8);
/// assert_eq!(Some(Value::Five), best_straight(mask));
/// assert_eq!(None, best_straight(mask & !1));
/// ```
pub fn best_straight(value_mask: u16) -> Option<Value> {
    // After this a bit is still set only if it tops a run of five.
    let mut runs = value_mask;
    runs &= runs << 1;
    runs &= runs << 1;
    runs &= runs << 1;
    runs &= runs << 1;
    if runs != 0 {
        Some(Value::from_index((15 - runs.leading_zeros()) as u8))
    } else if value_mask & WHEEL == WHEEL {
        Some(Value::Five)
    } else {
        None
    }
}

/// The `N` highest values in a mask, highest first.
fn top_values<const N: usize>(mask: u16) -> [Value; N] {
    let mut out = [Value::Two; N];
    let mut mask = mask & 0x1FFF;
    for slot in out.iter_mut() {
        if mask == 0 {
            break;
        }
        let idx = 15 - mask.leading_zeros() as u8;
        *slot = Value::from_index(idx);
        mask &= !(1 << idx);
    }
    out
}

/// Highest value seen exactly `n` times, skipping `skip`.
fn highest_with_count(counts: &[u8; 13], n: u8, skip: Option<Value>) -> Option<Value> {
    (0..13u8)
        .rev()
        .map(Value::from_index)
        .find(|v| counts[*v as usize] == n && Some(*v) != skip)
}

/// Can this turn into a hand score?
pub trait Rankable {
    /// Score the best five card hand. Callers must hand over at
    /// least five distinct cards; use `evaluate` when that isn't
    /// already guaranteed.
    fn rank(&self) -> HandScore;
}

impl Rankable for [Card] {
    fn rank(&self) -> HandScore {
        let mut counts = [0u8; 13];
        let mut suit_masks = [0u16; 4];
        let mut value_mask: u16 = 0;
        for c in self {
            let v = c.value as usize;
            counts[v] += 1;
            suit_masks[c.suit as usize] |= 1 << v;
            value_mask |= 1 << v;
        }

        let flush_suit = Suit::suits()
            .into_iter()
            .find(|s| suit_masks[*s as usize].count_ones() >= 5);

        // Straight flush has to go first, a suited run is also a
        // flush and a straight.
        if let Some(suit) = flush_suit {
            if let Some(high) = best_straight(suit_masks[suit as usize]) {
                return HandScore::StraightFlush(high);
            }
        }

        if let Some(quads) = highest_with_count(&counts, 4, None) {
            let [kicker] = top_values::<1>(value_mask & !(1 << quads as u8));
            return HandScore::FourOfAKind { quads, kicker };
        }

        let trips = highest_with_count(&counts, 3, None);
        let pair = highest_with_count(&counts, 2, None);
        if let Some(trips) = trips {
            // A second set of trips plays as the pair.
            if let Some(pair) = highest_with_count(&counts, 3, Some(trips)).or(pair) {
                return HandScore::FullHouse { trips, pair };
            }
        }

        if let Some(suit) = flush_suit {
            return HandScore::Flush(top_values::<5>(suit_masks[suit as usize]));
        }

        if let Some(high) = best_straight(value_mask) {
            return HandScore::Straight(high);
        }

        if let Some(trips) = trips {
            let kickers = top_values::<2>(value_mask & !(1 << trips as u8));
            return HandScore::ThreeOfAKind { trips, kickers };
        }

        if let Some(high) = pair {
            if let Some(low) = highest_with_count(&counts, 2, Some(high)) {
                let [kicker] = top_values::<1>(value_mask & !(1 << high as u8) & !(1 << low as u8));
                return HandScore::TwoPair { high, low, kicker };
            }
            let kickers = top_values::<3>(value_mask & !(1 << high as u8));
            return HandScore::OnePair {
                pair: high,
                kickers,
            };
        }

        HandScore::HighCard(top_values::<5>(value_mask))
    }
}

impl<const N: usize> Rankable for [Card; N] {
    fn rank(&self) -> HandScore {
        self[..].rank()
    }
}

/// Score exactly seven distinct cards.
///
/// # Errors
///
/// `WrongCardCount` for anything but seven cards and `DuplicateCard`
/// when a card shows up twice.
///
/// ```
/// use river_equity::core::{Card, HandCategory, evaluate};
///
/// let cards: Vec<Card> = ["As", "Ks", "Qs", "Js", "Ts", "2d", "3c"]
///     .iter()
///     .map(|s| s.parse().unwrap())
///     .collect();
/// let score = evaluate(&cards).unwrap();
/// assert_eq!(HandCategory::StraightFlush, score.category());
/// ```
pub fn evaluate(cards: &[Card]) -> Result<HandScore, EquityError> {
    if cards.len() != 7 {
        return Err(EquityError::WrongCardCount {
            expected: 7,
            found: cards.len(),
        });
    }
    CardBitSet::try_from_cards(cards.iter().copied())?;
    Ok(cards.rank())
}
