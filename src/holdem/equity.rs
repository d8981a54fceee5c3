use std::cmp::Ordering;
use std::ops::{Add, AddAssign};

use crate::core::HandScore;

/// How a showdown (or one simulated trial) went for the hero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    /// Nobody matched or beat the hero.
    Won,
    /// Nobody beat the hero but at least one opponent matched.
    Tied,
    /// At least one opponent beat the hero.
    Lost,
}

impl Outcome {
    /// Outcome of the hero's score against a single opponent.
    pub fn versus(hero: &HandScore, opponent: &HandScore) -> Outcome {
        match opponent.cmp(hero) {
            Ordering::Greater => Outcome::Lost,
            Ordering::Equal => Outcome::Tied,
            Ordering::Less => Outcome::Won,
        }
    }
}

/// Win, tie, and loss tallies from the hero's point of view.
///
/// For exact enumeration each count is a number of opponent holdings and
/// the total is always 990. For monte carlo each count is a number of
/// trials.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EquityResult {
    pub wins: u64,
    pub ties: u64,
    pub losses: u64,
}

impl EquityResult {
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Won => self.wins += 1,
            Outcome::Tied => self.ties += 1,
            Outcome::Lost => self.losses += 1,
        }
    }

    /// Number of holdings or trials counted.
    pub fn total(&self) -> u64 {
        self.wins + self.ties + self.losses
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    fn ratio(&self, count: u64) -> f64 {
        match self.total() {
            0 => 0.0,
            total => count as f64 / total as f64,
        }
    }

    pub fn win_probability(&self) -> f64 {
        self.ratio(self.wins)
    }

    /// Probability nobody beats the hero and somebody ties.
    pub fn tie_probability(&self) -> f64 {
        self.ratio(self.ties)
    }

    /// Probability at least one opponent beats the hero.
    pub fn loss_probability(&self) -> f64 {
        self.ratio(self.losses)
    }

    /// Share of the pot, counting a tie as half.
    ///
    /// ```
    /// use river_equity::holdem::EquityResult;
    ///
    /// let r = EquityResult { wins: 2, ties: 2, losses: 0 };
    /// assert_eq!(0.75, r.equity());
    /// assert_eq!(0.0, EquityResult::default().equity());
    /// ```
    pub fn equity(&self) -> f64 {
        match self.total() {
            0 => 0.0,
            total => (self.wins as f64 + 0.5 * self.ties as f64) / total as f64,
        }
    }
}

impl Add for EquityResult {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            wins: self.wins + rhs.wins,
            ties: self.ties + rhs.ties,
            losses: self.losses + rhs.losses,
        }
    }
}

impl AddAssign for EquityResult {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}
