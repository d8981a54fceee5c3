use std::collections::BTreeMap;

use tracing::{Level, debug_span, event};

use super::{EquityResult, Outcome, RiverSpot};
use crate::core::{Card, CardIter, HandCategory};

/// Enumerate every two card holding a single opponent could have and
/// tally how the hero fares against each one.
///
/// There is no sampling so the answer is exact and the same every
/// time. The counts always add up to C(45, 2) = 990.
///
/// ```
/// use river_equity::holdem::{RiverSpot, exact_equity};
///
/// let spot: RiverSpot = "AsKs KhKd5c5d2s".parse().unwrap();
/// let result = exact_equity(&spot);
/// assert_eq!(990, result.total());
/// ```
pub fn exact_equity(spot: &RiverSpot) -> EquityResult {
    let _span = debug_span!("exact_equity", hero = ?spot.hero(), board = ?spot.board()).entered();

    let deck = spot.remaining_deck();
    let hero_score = spot.hero_score();
    let mut result = EquityResult::default();

    for hole in CardIter::new(&deck[..], 2) {
        let opponent = spot.score_with([hole[0], hole[1]]);
        result.record(Outcome::versus(&hero_score, &opponent));
    }

    event!(
        Level::DEBUG,
        wins = result.wins,
        ties = result.ties,
        losses = result.losses,
        "exact_equity_done"
    );
    result
}

/// The opponent holdings that beat the hero, grouped by what they make.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BeatingHands {
    groups: BTreeMap<HandCategory, Vec<[Card; 2]>>,
}

impl BeatingHands {
    /// Groups from the strongest category down. Holdings inside a group
    /// keep enumeration order.
    pub fn iter(&self) -> impl Iterator<Item = (HandCategory, &[[Card; 2]])> {
        self.groups.iter().rev().map(|(c, hands)| (*c, hands.as_slice()))
    }

    pub fn get(&self, category: HandCategory) -> &[[Card; 2]] {
        self.groups.get(&category).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Total number of holdings that beat the hero.
    pub fn count(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// List every single opponent holding that beats the hero.
///
/// ```
/// use river_equity::core::HandCategory;
/// use river_equity::holdem::{RiverSpot, beating_hands};
///
/// let spot: RiverSpot = "AsKs KhKd5c5d2s".parse().unwrap();
/// let beating = beating_hands(&spot);
/// assert_eq!(1, beating.count());
/// assert_eq!(1, beating.get(HandCategory::FourOfAKind).len());
/// ```
pub fn beating_hands(spot: &RiverSpot) -> BeatingHands {
    let deck = spot.remaining_deck();
    let hero_score = spot.hero_score();
    let mut beating = BeatingHands::default();

    for hole in CardIter::new(&deck[..], 2) {
        let hole = [hole[0], hole[1]];
        let opponent = spot.score_with(hole);
        if opponent > hero_score {
            beating
                .groups
                .entry(opponent.category())
                .or_default()
                .push(hole);
        }
    }
    beating
}
