//! Everything that is specific to holdem on the river: the validated
//! hero plus board input, the calculators, and labeling.

/// Hero hole cards plus a complete board.
mod spot;
pub use self::spot::RiverSpot;

/// Win/tie/loss tallies.
mod equity;
pub use self::equity::{EquityResult, Outcome};

/// Multiway simulation settings.
mod config;
pub use self::config::{DEFAULT_OPPONENTS, DEFAULT_TRIALS, MAX_OPPONENTS, SimulationConfig};

/// Exact heads up enumeration.
mod exact_equity;
pub use self::exact_equity::{BeatingHands, beating_hands, exact_equity};

/// Monte carlo for any number of opponents.
mod monte_carlo_equity;
pub use self::monte_carlo_equity::{MonteCarloEquity, monte_carlo_equity};
#[cfg(feature = "rayon")]
pub use self::monte_carlo_equity::monte_carlo_equity_parallel;

/// Independence approximation of the multiway numbers.
mod approx_equity;
pub use self::approx_equity::{MultiwayApprox, approx_multiway};

/// Names and descriptions for scores.
mod label;
pub use self::label::{HandLabel, category_name, label, label_raw};
