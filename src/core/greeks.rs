//! Option Greeks
//!
//! Per-contract sensitivities and their volume-weighted portfolio rollup.

use serde::{Deserialize, Serialize};

/// Greeks for a single option
///
/// Theta is per calendar day (negative for time decay), vega per 1-point vol
/// move. `vol` records the volatility the sensitivities were computed with.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct GreeksResult {
    /// Delta: dV/dS
    pub delta: f64,
    /// Gamma: d²V/dS²
    pub gamma: f64,
    /// Theta: dV/dt, per day
    pub theta: f64,
    /// Vega: dV/dσ, per 1% vol move
    pub vega: f64,
    /// Rho: dV/dr
    pub rho: f64,
    /// Volatility used for the computation
    pub vol: f64,
}

impl GreeksResult {
    pub fn new(delta: f64, gamma: f64, theta: f64, vega: f64, rho: f64, vol: f64) -> Self {
        Self {
            delta,
            gamma,
            theta,
            vega,
            rho,
            vol,
        }
    }

    /// All-zero Greeks (expired or degenerate inputs)
    pub fn zero() -> Self {
        Self::default()
    }
}

/// Volume-weighted Greeks across a quote batch
///
/// Raw sums plus the dollar views the reporting layer consumes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PortfolioGreeks {
    /// Sum of delta x volume
    pub total_delta: f64,
    /// Sum of gamma x volume
    pub total_gamma: f64,
    /// Sum of theta x volume (per day)
    pub total_theta: f64,
    /// Sum of vega x volume (per 1% vol move)
    pub total_vega: f64,
    /// Sum of rho x volume
    pub total_rho: f64,
    /// Dollar delta: |total_delta| x spot x contract multiplier
    pub delta_exposure: f64,
    /// Dollar gamma for a 1% spot move
    pub gamma_risk: f64,
    /// Daily decay (total theta, raw)
    pub theta_decay: f64,
    /// Exposure to a 1% vol move (total vega, raw)
    pub vega_exposure: f64,
    /// Number of quotes aggregated
    pub num_quotes: usize,
}

impl PortfolioGreeks {
    /// Accumulate one quote's Greeks, weighted by its volume
    pub fn accumulate(&mut self, greeks: &GreeksResult, volume: f64) {
        self.total_delta += greeks.delta * volume;
        self.total_gamma += greeks.gamma * volume;
        self.total_theta += greeks.theta * volume;
        self.total_vega += greeks.vega * volume;
        self.total_rho += greeks.rho * volume;
        self.num_quotes += 1;
    }

    /// Fill in the dollar views once all quotes are accumulated
    pub fn finalize(&mut self, spot: f64, multiplier: f64) {
        self.delta_exposure = self.total_delta.abs() * spot * multiplier;
        self.gamma_risk = self.total_gamma * spot * spot * 0.01;
        self.theta_decay = self.total_theta;
        self.vega_exposure = self.total_vega;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accumulate_and_finalize() {
        let mut portfolio = PortfolioGreeks::default();
        let g = GreeksResult::new(0.5, 0.02, -0.05, 0.15, 0.10, 0.25);

        portfolio.accumulate(&g, 100.0);
        portfolio.accumulate(&g, 50.0);
        portfolio.finalize(150.0, 100.0);

        assert!((portfolio.total_delta - 75.0).abs() < 1e-9);
        assert_eq!(portfolio.num_quotes, 2);

        // |75| * 150 * 100
        assert!((portfolio.delta_exposure - 1_125_000.0).abs() < 1e-6);
        // 3.0 * 150^2 * 0.01
        assert!((portfolio.gamma_risk - 675.0).abs() < 1e-9);
        assert!((portfolio.theta_decay - portfolio.total_theta).abs() < 1e-12);
    }

    #[test]
    fn test_zero_greeks() {
        let z = GreeksResult::zero();
        assert_eq!(z.delta, 0.0);
        assert_eq!(z.vol, 0.0);
    }
}
