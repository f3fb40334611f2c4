//! Configuration for flow classification
//!
//! All thresholds are hand-tuned point tables kept in one explicit struct so
//! the classifier stays a pure function with no ambient state.

use serde::{Deserialize, Serialize};

/// Thresholds for flow classification and scoring
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlowConfig {
    /// Minimum volume for a block trade
    /// Default: 500
    pub block_min_volume: u64,

    /// Minimum premium for a block trade
    /// Default: $100K
    pub block_min_premium: f64,

    /// Minimum volume for a sweep
    /// Default: 100
    pub sweep_min_volume: u64,

    /// Bid-ask spread magnitude above which aggressive routing is assumed
    /// Default: 0.05
    pub sweep_min_spread: f64,

    /// Whale tier: premium at or above this, or volume at or above
    /// `whale_volume`
    pub whale_premium: f64,
    pub whale_volume: u64,

    /// Institutional tier: premium at or above this, or volume at or above
    /// `institutional_volume`
    pub institutional_premium: f64,
    pub institutional_volume: u64,

    /// OTM volume above which a directional bet is assumed for sentiment
    /// Default: 1000
    pub directional_otm_volume: u64,

    /// Unusual score: cap and multiplier for the volume-ratio component
    /// score += min(cap, scale * volume / avg_volume)
    pub volume_ratio_cap: f64,
    pub volume_ratio_scale: f64,

    /// Unusual score: premium tiers as (threshold, points), descending
    pub premium_tiers: [(f64, f64); 4],

    /// Unusual score: volume/open-interest tiers as (ratio, points),
    /// descending
    pub oi_ratio_tiers: [(f64, f64); 3],

    /// Confidence: starting value
    pub base_confidence: f64,

    /// Confidence: bonus for a two-sided quote, a known IV, a known OI
    pub field_bonus: f64,

    /// Confidence: bonus for premium at or above `large_premium`
    pub large_premium: f64,
    pub large_premium_bonus: f64,
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            block_min_volume: 500,
            block_min_premium: 100_000.0,
            sweep_min_volume: 100,
            sweep_min_spread: 0.05,
            whale_premium: 1_000_000.0,
            whale_volume: 2_000,
            institutional_premium: 100_000.0,
            institutional_volume: 500,
            directional_otm_volume: 1_000,
            volume_ratio_cap: 40.0,
            volume_ratio_scale: 5.0,
            premium_tiers: [
                (1_000_000.0, 30.0),
                (500_000.0, 25.0),
                (100_000.0, 20.0),
                (50_000.0, 15.0),
            ],
            oi_ratio_tiers: [(1.0, 20.0), (0.5, 15.0), (0.25, 10.0)],
            base_confidence: 0.5,
            field_bonus: 0.1,
            large_premium: 100_000.0,
            large_premium_bonus: 0.2,
        }
    }
}

impl FlowConfig {
    /// Points for a premium amount from the tier table
    pub fn premium_points(&self, premium: f64) -> f64 {
        for &(threshold, points) in &self.premium_tiers {
            if premium >= threshold {
                return points;
            }
        }
        0.0
    }

    /// Points for a volume/open-interest ratio from the tier table
    pub fn oi_ratio_points(&self, ratio: f64) -> f64 {
        for &(threshold, points) in &self.oi_ratio_tiers {
            if ratio >= threshold {
                return points;
            }
        }
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_premium_tiers_descending() {
        let config = FlowConfig::default();

        assert_eq!(config.premium_points(2_000_000.0), 30.0);
        assert_eq!(config.premium_points(600_000.0), 25.0);
        assert_eq!(config.premium_points(150_000.0), 20.0);
        assert_eq!(config.premium_points(60_000.0), 15.0);
        assert_eq!(config.premium_points(10_000.0), 0.0);
    }

    #[test]
    fn test_oi_ratio_tiers() {
        let config = FlowConfig::default();

        assert_eq!(config.oi_ratio_points(1.5), 20.0);
        assert_eq!(config.oi_ratio_points(0.7), 15.0);
        assert_eq!(config.oi_ratio_points(0.3), 10.0);
        assert_eq!(config.oi_ratio_points(0.1), 0.0);
    }
}
