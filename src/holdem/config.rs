use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::core::EquityError;

/// Six handed table by default: the hero plus five opponents.
pub const DEFAULT_OPPONENTS: usize = 5;
pub const DEFAULT_TRIALS: usize = 20_000;
/// 45 unknown cards on the river can fill at most 22 hands.
pub const MAX_OPPONENTS: usize = 22;
const RIVER_REMAINING: usize = 45;

/// Settings for a multiway equity run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimulationConfig {
    /// Number of unknown opponents still in the hand.
    pub opponents: usize,
    /// Monte carlo trials to run.
    pub trials: usize,
    /// Seed for repeatable runs. `None` seeds from the OS.
    pub seed: Option<u64>,
    /// When false the multiway number comes from the independence
    /// approximation instead of simulation.
    pub use_monte_carlo: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            opponents: DEFAULT_OPPONENTS,
            trials: DEFAULT_TRIALS,
            seed: None,
            use_monte_carlo: true,
        }
    }
}

impl SimulationConfig {
    pub fn with_opponents(mut self, opponents: usize) -> Self {
        self.opponents = opponents;
        self
    }

    /// Set the opponents from the total number of players at the table,
    /// hero included.
    ///
    /// # Errors
    ///
    /// `InvalidOpponents` when there are no players at all, which would
    /// leave a negative number of opponents.
    ///
    /// ```
    /// use river_equity::holdem::SimulationConfig;
    ///
    /// let config = SimulationConfig::default().with_players(6).unwrap();
    /// assert_eq!(5, config.opponents);
    /// assert!(SimulationConfig::default().with_players(0).is_err());
    /// ```
    pub fn with_players(self, players: usize) -> Result<Self, EquityError> {
        let opponents = players
            .checked_sub(1)
            .ok_or(EquityError::InvalidOpponents)?;
        Ok(self.with_opponents(opponents))
    }

    pub fn with_trials(mut self, trials: usize) -> Self {
        self.trials = trials;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_monte_carlo(mut self, use_monte_carlo: bool) -> Self {
        self.use_monte_carlo = use_monte_carlo;
        self
    }

    /// Reject settings that can't produce a result before any work starts.
    pub fn validate(&self) -> Result<(), EquityError> {
        if self.trials == 0 {
            return Err(EquityError::InvalidTrials);
        }
        if self.opponents > MAX_OPPONENTS {
            return Err(EquityError::TooManyOpponents {
                opponents: self.opponents,
                available: RIVER_REMAINING,
            });
        }
        Ok(())
    }

    /// The random source for this run.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}
