use std::time::Instant;

use rand::Rng;
use tracing::{Level, debug_span, event};

use super::spot::score_river;
use super::{EquityResult, Outcome, RiverSpot, SimulationConfig};
use crate::core::{Card, EquityError, FlatDeck, HandScore};

/// Estimate how the hero does against several unknown opponents at once.
///
/// Each trial deals every opponent two cards from the unseen deck without
/// replacement, then checks whether anyone beat or matched the hero.
/// Exact enumeration of this is (C(45, 2))^k which is out of reach for
/// more than one opponent.
#[derive(Debug, Clone)]
pub struct MonteCarloEquity {
    board: [Card; 5],
    hero_score: HandScore,
    /// The unseen cards. Reordered in place every trial.
    deck: FlatDeck,
    opponents: usize,
}

impl MonteCarloEquity {
    /// # Errors
    ///
    /// `TooManyOpponents` when the opponents need more hole cards than the
    /// deck has left.
    pub fn new(spot: &RiverSpot, opponents: usize) -> Result<Self, EquityError> {
        let deck = spot.remaining_deck();
        if opponents * 2 > deck.len() {
            return Err(EquityError::TooManyOpponents {
                opponents,
                available: deck.len(),
            });
        }
        Ok(Self {
            board: spot.board(),
            hero_score: spot.hero_score(),
            deck,
            opponents,
        })
    }

    pub fn opponents(&self) -> usize {
        self.opponents
    }

    /// Run a single trial.
    ///
    /// The first losing comparison ends the trial early, only the
    /// outcome is kept so the order opponents are checked in doesn't
    /// matter.
    pub fn simulate<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Outcome {
        let dealt = self.deck.partial_shuffle(rng, self.opponents * 2);
        let mut tied = false;
        for hole in dealt.chunks_exact(2) {
            let score = score_river([hole[0], hole[1]], &self.board);
            match Outcome::versus(&self.hero_score, &score) {
                Outcome::Lost => return Outcome::Lost,
                Outcome::Tied => tied = true,
                Outcome::Won => {}
            }
        }
        if tied { Outcome::Tied } else { Outcome::Won }
    }

    /// Run `trials` independent trials.
    ///
    /// With zero opponents there is nothing to sample and the empty
    /// result comes back straight away.
    ///
    /// # Errors
    ///
    /// `InvalidTrials` when `trials` is zero.
    pub fn estimate<R: Rng + ?Sized>(
        &mut self,
        trials: usize,
        rng: &mut R,
    ) -> Result<EquityResult, EquityError> {
        if trials == 0 {
            return Err(EquityError::InvalidTrials);
        }
        Ok(self.run(trials, None, rng))
    }

    /// Like `estimate` but stops early once `deadline` passes. The clock
    /// is checked between trials, so the result covers however many
    /// trials finished.
    pub fn estimate_until<R: Rng + ?Sized>(
        &mut self,
        trials: usize,
        deadline: Instant,
        rng: &mut R,
    ) -> Result<EquityResult, EquityError> {
        if trials == 0 {
            return Err(EquityError::InvalidTrials);
        }
        Ok(self.run(trials, Some(deadline), rng))
    }

    fn run<R: Rng + ?Sized>(
        &mut self,
        trials: usize,
        deadline: Option<Instant>,
        rng: &mut R,
    ) -> EquityResult {
        let _span = debug_span!("monte_carlo", opponents = self.opponents, trials).entered();
        let mut result = EquityResult::default();
        if self.opponents == 0 {
            event!(Level::DEBUG, "no opponents, skipping simulation");
            return result;
        }

        for _ in 0..trials {
            if deadline.is_some_and(|d| Instant::now() >= d) {
                event!(
                    Level::INFO,
                    completed = result.total(),
                    "deadline reached before all trials ran"
                );
                break;
            }
            result.record(self.simulate(rng));
        }

        event!(
            Level::DEBUG,
            wins = result.wins,
            ties = result.ties,
            losses = result.losses,
            "monte_carlo_done"
        );
        result
    }
}

/// Validate the config and run a monte carlo estimate with its settings.
///
/// ```
/// use river_equity::holdem::{RiverSpot, SimulationConfig, monte_carlo_equity};
///
/// let spot: RiverSpot = "AsKs KhKd5c5d2s".parse().unwrap();
/// let config = SimulationConfig::default()
///     .with_opponents(3)
///     .with_trials(1_000)
///     .with_seed(1);
/// let result = monte_carlo_equity(&spot, &config).unwrap();
/// assert_eq!(1_000, result.total());
/// ```
pub fn monte_carlo_equity(
    spot: &RiverSpot,
    config: &SimulationConfig,
) -> Result<EquityResult, EquityError> {
    config.validate()?;
    let mut sim = MonteCarloEquity::new(spot, config.opponents)?;
    let mut rng = config.rng();
    sim.estimate(config.trials, &mut rng)
}

/// Split the trials over the rayon pool. Every worker gets its own copy
/// of the deck and its own rng, the counts are summed at the end.
///
/// Seeded runs repeat on the same pool size. A different number of
/// threads splits the trials differently and so draws different cards.
#[cfg(feature = "rayon")]
pub fn monte_carlo_equity_parallel(
    spot: &RiverSpot,
    config: &SimulationConfig,
) -> Result<EquityResult, EquityError> {
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rayon::prelude::*;

    config.validate()?;
    let sim = MonteCarloEquity::new(spot, config.opponents)?;
    let base_seed = config.seed.unwrap_or_else(rand::random);
    let workers = rayon::current_num_threads().max(1);
    let per_worker = config.trials / workers;
    let extra = config.trials % workers;

    let result = (0..workers)
        .into_par_iter()
        .map(|worker| {
            let trials = per_worker + usize::from(worker < extra);
            let mut sim = sim.clone();
            let mut rng = StdRng::seed_from_u64(base_seed.wrapping_add(worker as u64));
            sim.run(trials, None, &mut rng)
        })
        .reduce(EquityResult::default, |a, b| a + b);
    Ok(result)
}
