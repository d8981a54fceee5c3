//! Closed form multiway estimate built from the heads up numbers.
//!
//! This treats every opponent's hand as an independent draw with the
//! heads up loss and tie probabilities. Real opponents share one deck so
//! their hands are not independent; monte carlo is the number to trust
//! and this is only a fast fallback.

use super::EquityResult;

/// Approximate multiway probabilities.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MultiwayApprox {
    /// At least one opponent beats the hero.
    pub beaten: f64,
    /// Nobody beats the hero and at least one opponent ties.
    pub tied_only: f64,
}

impl MultiwayApprox {
    /// Hero takes the whole pot.
    pub fn won(&self) -> f64 {
        (1.0 - self.beaten - self.tied_only).max(0.0)
    }
}

/// Scale a heads up result up to `opponents` independent opponents.
///
/// ```
/// use river_equity::holdem::{EquityResult, approx_multiway};
///
/// let heads_up = EquityResult { wins: 80, ties: 0, losses: 20 };
/// let two_way = approx_multiway(&heads_up, 2);
/// assert!((two_way.beaten - 0.36).abs() < 1e-9);
/// ```
pub fn approx_multiway(heads_up: &EquityResult, opponents: usize) -> MultiwayApprox {
    if opponents == 0 || heads_up.is_empty() {
        return MultiwayApprox::default();
    }
    let k = i32::try_from(opponents).unwrap_or(i32::MAX);
    let lose = heads_up.loss_probability();
    let tie = heads_up.tie_probability();

    let not_beaten = (1.0 - lose).powi(k);
    let strictly_ahead = (1.0 - lose - tie).max(0.0).powi(k);
    MultiwayApprox {
        beaten: 1.0 - not_beaten,
        tied_only: not_beaten - strictly_ahead,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_one_opponent_is_heads_up() {
        let heads_up = EquityResult {
            wins: 600,
            ties: 90,
            losses: 300,
        };
        let approx = approx_multiway(&heads_up, 1);
        assert_abs_diff_eq!(heads_up.loss_probability(), approx.beaten, epsilon = 1e-12);
        assert_abs_diff_eq!(heads_up.tie_probability(), approx.tied_only, epsilon = 1e-12);
        assert_abs_diff_eq!(heads_up.win_probability(), approx.won(), epsilon = 1e-12);
    }

    #[test]
    fn test_three_opponents() {
        let heads_up = EquityResult {
            wins: 70,
            ties: 10,
            losses: 20,
        };
        let approx = approx_multiway(&heads_up, 3);
        // 1 - 0.8^3 and 0.8^3 - 0.7^3
        assert_abs_diff_eq!(0.488, approx.beaten, epsilon = 1e-12);
        assert_abs_diff_eq!(0.169, approx.tied_only, epsilon = 1e-12);
        assert_abs_diff_eq!(0.343, approx.won(), epsilon = 1e-12);
    }

    #[test]
    fn test_no_opponents() {
        let heads_up = EquityResult {
            wins: 1,
            ties: 1,
            losses: 1,
        };
        assert_eq!(MultiwayApprox::default(), approx_multiway(&heads_up, 0));
        assert_eq!(
            MultiwayApprox::default(),
            approx_multiway(&EquityResult::default(), 4)
        );
    }
}
