//! Implied volatility solver
//!
//! Inverts the Black-Scholes price via Newton-Raphson with an
//! at-the-money-approximation seed. Returns a best-effort estimate rather
//! than an error: unsolvable inputs yield 0, and a non-converged iteration
//! returns its last iterate. Callers that need certainty should check the
//! result stays inside [`VOL_MIN`], [`VOL_MAX`].

use crate::core::OptionType;
use crate::models::black_scholes::{d1, norm_pdf, price};
use std::f64::consts::PI;

/// Maximum Newton-Raphson iterations
pub const MAX_ITERATIONS: usize = 100;

/// Convergence tolerance on the price difference
pub const PRICE_TOLERANCE: f64 = 1e-6;

/// Vega below which the Newton step is abandoned
const MIN_VEGA: f64 = 1e-10;

/// Lower clamp applied to each iterate
pub const VOL_MIN: f64 = 0.001;

/// Upper clamp applied to each iterate (1000% vol)
pub const VOL_MAX: f64 = 10.0;

/// Solve for the volatility implied by an observed market price
///
/// Returns 0.0 when there is nothing to solve (expired option or non-positive
/// price). No convergence guarantee: after [`MAX_ITERATIONS`] steps, or when
/// vega flattens out below the escape threshold, the current iterate is
/// returned as-is.
pub fn implied_volatility(
    market_price: f64,
    spot: f64,
    strike: f64,
    time: f64,
    rate: f64,
    option_type: OptionType,
) -> f64 {
    if time <= 0.0 || market_price <= 0.0 {
        return 0.0;
    }

    // ATM approximation seed: sigma ~ sqrt(2*pi/T) * price / spot
    let mut vol = ((2.0 * PI / time).sqrt() * market_price / spot).clamp(0.01, 5.0);

    for _ in 0..MAX_ITERATIONS {
        let model_price = price(spot, strike, time, rate, vol, option_type);
        let diff = model_price - market_price;

        if diff.abs() < PRICE_TOLERANCE {
            return vol;
        }

        // Analytic vega for the Newton step (per unit vol, unscaled)
        let vega = spot * norm_pdf(d1(spot, strike, time, rate, vol)) * time.sqrt();
        if vega < MIN_VEGA {
            break;
        }

        vol = (vol - diff / vega).clamp(VOL_MIN, VOL_MAX);
    }

    vol
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::black_scholes;

    #[test]
    fn test_round_trip_atm() {
        let (spot, strike, time, rate) = (100.0, 100.0, 0.5, 0.045);
        let vol = 0.25;

        let market = black_scholes::price(spot, strike, time, rate, vol, OptionType::Call);
        let solved = implied_volatility(market, spot, strike, time, rate, OptionType::Call);

        assert!((solved - vol).abs() < 1e-4, "solved {} vs {}", solved, vol);
    }

    #[test]
    fn test_round_trip_across_vol_range() {
        let (spot, strike, time, rate) = (100.0, 100.0, 0.5, 0.045);

        let mut vol = 0.05;
        while vol <= 1.0 {
            let market = black_scholes::price(spot, strike, time, rate, vol, OptionType::Call);
            let solved = implied_volatility(market, spot, strike, time, rate, OptionType::Call);

            assert!(
                (solved - vol).abs() < 1e-4,
                "vol {}: solved {}",
                vol,
                solved
            );
            vol += 0.05;
        }
    }

    #[test]
    fn test_round_trip_near_the_money() {
        let (spot, strike, time, rate) = (150.0, 155.0, 0.25, 0.045);
        let vol = 0.25;

        let market = black_scholes::price(spot, strike, time, rate, vol, OptionType::Call);
        let solved = implied_volatility(market, spot, strike, time, rate, OptionType::Call);

        assert!((solved - vol).abs() < 1e-4);
    }

    #[test]
    fn test_round_trip_puts() {
        let (spot, strike, time, rate) = (100.0, 100.0, 0.25, 0.045);
        let vol = 0.30;

        let market = black_scholes::price(spot, strike, time, rate, vol, OptionType::Put);
        let solved = implied_volatility(market, spot, strike, time, rate, OptionType::Put);

        assert!((solved - vol).abs() < 1e-4);
    }

    #[test]
    fn test_unsolvable_inputs_return_zero() {
        // Expired
        assert_eq!(
            implied_volatility(5.0, 100.0, 100.0, 0.0, 0.045, OptionType::Call),
            0.0
        );
        // Non-positive price
        assert_eq!(
            implied_volatility(0.0, 100.0, 100.0, 0.5, 0.045, OptionType::Call),
            0.0
        );
        assert_eq!(
            implied_volatility(-1.0, 100.0, 100.0, 0.5, 0.045, OptionType::Put),
            0.0
        );
    }

    #[test]
    fn test_result_stays_within_bounds() {
        // A price above any attainable model value drives the iterate to the
        // clamp rather than diverging
        let solved = implied_volatility(500.0, 100.0, 100.0, 0.1, 0.045, OptionType::Call);
        assert!(solved >= VOL_MIN && solved <= VOL_MAX);
    }
}
