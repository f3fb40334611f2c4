//! Black-Scholes Model
//!
//! Closed-form European option pricing and Greeks under the
//! lognormal-diffusion assumption with a flat continuously-compounded rate.
//!
//! Degenerate inputs get fallback values instead of errors:
//! - expired options (T <= 0) price at intrinsic value with zero Greeks
//! - zero volatility collapses d1/d2 to 0 rather than dividing by zero
//!
//! Negative spot, strike, or volatility are caller preconditions and are not
//! checked at runtime.

use statrs::distribution::{ContinuousCDF, Normal};
use std::f64::consts::PI;

use crate::core::{GreeksResult, OptionType};

/// Standard normal CDF
pub fn norm_cdf(x: f64) -> f64 {
    let normal = Normal::new(0.0, 1.0).unwrap();
    normal.cdf(x)
}

/// Standard normal PDF
pub fn norm_pdf(x: f64) -> f64 {
    (-0.5 * x * x).exp() / (2.0 * PI).sqrt()
}

/// Black-Scholes d1 parameter
///
/// Collapses to 0 for expired options or zero volatility.
pub fn d1(spot: f64, strike: f64, time: f64, rate: f64, vol: f64) -> f64 {
    if time <= 0.0 || vol <= 0.0 {
        return 0.0;
    }
    ((spot / strike).ln() + (rate + 0.5 * vol * vol) * time) / (vol * time.sqrt())
}

/// Black-Scholes d2 parameter
pub fn d2(spot: f64, strike: f64, time: f64, rate: f64, vol: f64) -> f64 {
    if time <= 0.0 || vol <= 0.0 {
        return 0.0;
    }
    d1(spot, strike, time, rate, vol) - vol * time.sqrt()
}

/// Black-Scholes European option price
///
/// At or past expiry this is the intrinsic value.
pub fn price(
    spot: f64,
    strike: f64,
    time: f64,
    rate: f64,
    vol: f64,
    option_type: OptionType,
) -> f64 {
    if time <= 0.0 {
        return option_type.intrinsic(spot, strike);
    }

    let d1 = d1(spot, strike, time, rate, vol);
    let d2 = d2(spot, strike, time, rate, vol);
    let df = (-rate * time).exp();

    match option_type {
        OptionType::Call => spot * norm_cdf(d1) - strike * df * norm_cdf(d2),
        OptionType::Put => strike * df * norm_cdf(-d2) - spot * norm_cdf(-d1),
    }
}

/// Black-Scholes Greeks
///
/// Theta is reported per calendar day, vega per 1-point vol move, rho raw.
/// Expired or zero-vol options have zero sensitivities.
pub fn greeks(
    spot: f64,
    strike: f64,
    time: f64,
    rate: f64,
    vol: f64,
    option_type: OptionType,
) -> GreeksResult {
    if time <= 0.0 || vol <= 0.0 {
        return GreeksResult::zero();
    }

    let d1 = d1(spot, strike, time, rate, vol);
    let d2 = d2(spot, strike, time, rate, vol);
    let df = (-rate * time).exp();
    let sqrt_t = time.sqrt();
    let pdf_d1 = norm_pdf(d1);

    let delta = match option_type {
        OptionType::Call => norm_cdf(d1),
        OptionType::Put => norm_cdf(d1) - 1.0,
    };

    // Gamma (same for call and put)
    let gamma = pdf_d1 / (spot * vol * sqrt_t);

    // Theta (per day)
    let decay = -spot * pdf_d1 * vol / (2.0 * sqrt_t);
    let theta = match option_type {
        OptionType::Call => (decay - rate * strike * df * norm_cdf(d2)) / 365.0,
        OptionType::Put => (decay + rate * strike * df * norm_cdf(-d2)) / 365.0,
    };

    // Vega (same for call and put, per 1% vol move)
    let vega = spot * pdf_d1 * sqrt_t / 100.0;

    let rho = match option_type {
        OptionType::Call => strike * time * df * norm_cdf(d2),
        OptionType::Put => -strike * time * df * norm_cdf(-d2),
    };

    GreeksResult::new(delta, gamma, theta, vega, rho, vol)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_norm_cdf() {
        assert!((norm_cdf(0.0) - 0.5).abs() < 1e-10);
        assert!((norm_cdf(1.96) - 0.975).abs() < 0.001);
        assert!((norm_cdf(-1.96) - 0.025).abs() < 0.001);
    }

    #[test]
    fn test_bs_price() {
        // ATM call, 20% vol, 1 year, 5% rate
        let call_price = price(100.0, 100.0, 1.0, 0.05, 0.20, OptionType::Call);

        // Should be around 10.45 for these parameters
        assert!(call_price > 10.0 && call_price < 11.0);
    }

    #[test]
    fn test_put_call_parity() {
        let (spot, strike, time, rate, vol) = (100.0, 105.0, 0.5, 0.045, 0.30);

        let call = price(spot, strike, time, rate, vol, OptionType::Call);
        let put = price(spot, strike, time, rate, vol, OptionType::Put);

        // C - P = S - K*e^(-rT)
        let parity = call - put - (spot - strike * (-rate * time).exp());
        assert!(parity.abs() < 1e-9, "parity violation: {}", parity);
    }

    #[test]
    fn test_expired_price_is_intrinsic() {
        assert_eq!(price(110.0, 100.0, 0.0, 0.05, 0.2, OptionType::Call), 10.0);
        assert_eq!(price(110.0, 100.0, -0.1, 0.05, 0.2, OptionType::Call), 10.0);
        assert_eq!(price(90.0, 100.0, 0.0, 0.05, 0.2, OptionType::Put), 10.0);
        assert_eq!(price(110.0, 100.0, 0.0, 0.05, 0.2, OptionType::Put), 0.0);
    }

    #[test]
    fn test_zero_vol_does_not_blow_up() {
        // d1/d2 collapse to 0 instead of dividing by zero
        let p = price(100.0, 100.0, 0.5, 0.05, 0.0, OptionType::Call);
        assert!(p.is_finite());
    }

    #[test]
    fn test_greeks_sanity() {
        // S=150, K=155, 30 days, r=4.5%, vol=25%
        let g = greeks(150.0, 155.0, 30.0 / 365.0, 0.045, 0.25, OptionType::Call);

        assert!(g.delta > 0.35 && g.delta < 0.45, "delta = {}", g.delta);
        assert!(g.gamma > 0.0);
        assert!(g.theta < 0.0);
        assert!(g.vega > 0.0);
        assert!((g.vol - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_delta_bounds() {
        for &strike in &[80.0, 100.0, 120.0] {
            for &vol in &[0.1, 0.3, 0.8] {
                let call = greeks(100.0, strike, 0.25, 0.05, vol, OptionType::Call);
                let put = greeks(100.0, strike, 0.25, 0.05, vol, OptionType::Put);

                assert!(call.delta >= 0.0 && call.delta <= 1.0);
                assert!(put.delta >= -1.0 && put.delta <= 0.0);
                // Call and put delta differ by exactly 1
                assert!((call.delta - put.delta - 1.0).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn test_expired_greeks_are_zero() {
        let g = greeks(150.0, 155.0, 0.0, 0.045, 0.25, OptionType::Call);
        assert_eq!(g.delta, 0.0);
        assert_eq!(g.gamma, 0.0);
        assert_eq!(g.theta, 0.0);
        assert_eq!(g.vega, 0.0);
        assert_eq!(g.rho, 0.0);
    }
}
