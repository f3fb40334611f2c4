//! Configuration for portfolio aggregation

use serde::{Deserialize, Serialize};

/// Parameters for the portfolio aggregator
///
/// Defaults and fallbacks for degenerate inputs live here rather than as
/// module-level constants, so analyses stay reproducible and testable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyticsConfig {
    /// Flat continuously-compounded risk-free rate
    /// Default: 4.5%
    pub risk_free_rate: f64,

    /// Volatility used when a quote has no usable implied vol
    /// Default: 25%
    pub default_vol: f64,

    /// Time to expiry used when the expiration date cannot be parsed
    /// Default: 30 days
    pub default_tte: f64,

    /// Floor on time to expiry, avoids zero-time Greeks for same-day quotes
    /// Default: 0.001 years
    pub min_tte: f64,

    /// IVs at or above this are treated as bad data (500%)
    pub max_valid_iv: f64,

    /// Contract multiplier for dollar figures
    pub contract_multiplier: f64,

    /// Unusual-activity pre-screen: minimum premium
    /// Default: $25K
    pub unusual_min_premium: f64,

    /// Unusual-activity pre-screen: volume/(OI+1) ratio
    pub unusual_oi_ratio: f64,

    /// Unusual-activity pre-screen: volume and premium for a probable block
    pub unusual_block_volume: u64,
    pub unusual_block_premium: f64,

    /// Institutional detail: premium marking a large trade
    /// Default: $500K
    pub large_trade_premium: f64,

    /// Institutional detail: volume suggesting concentrated positioning
    /// Default: 1000
    pub concentrated_volume: u64,

    /// Institutional detail: multi-strike sweep thresholds per expiration
    pub multi_strike_min_strikes: usize,
    pub multi_strike_min_premium: f64,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            risk_free_rate: 0.045,
            default_vol: 0.25,
            default_tte: 30.0 / 365.0,
            min_tte: 0.001,
            max_valid_iv: 5.0,
            contract_multiplier: 100.0,
            unusual_min_premium: 25_000.0,
            unusual_oi_ratio: 0.5,
            unusual_block_volume: 100,
            unusual_block_premium: 25_000.0,
            large_trade_premium: 500_000.0,
            concentrated_volume: 1_000,
            multi_strike_min_strikes: 3,
            multi_strike_min_premium: 250_000.0,
        }
    }
}
