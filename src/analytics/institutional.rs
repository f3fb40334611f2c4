//! Institutional activity detection
//!
//! A point-table probability that a batch's activity is institutional, plus
//! the underlying detail: large trades, concentrated volume, and per-expiry
//! multi-strike positioning.

use serde::{Deserialize, Serialize};

use crate::core::QuoteBatch;

use super::AnalyticsConfig;

/// Multi-strike positioning within one expiration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MultiStrikeActivity {
    /// Expiration (ISO date string as carried on the quotes)
    pub expiration: String,
    /// Distinct strikes traded
    pub strikes: usize,
    /// Premium across the expiration
    pub total_premium: f64,
    /// Volume across the expiration
    pub total_volume: u64,
}

/// Institutional activity assessment for a batch
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstitutionalActivity {
    /// 0-100 probability score
    pub probability: f64,
    /// Trades with premium at or above the large-trade threshold
    pub large_trade_count: usize,
    /// Premium across those trades
    pub large_trade_premium: f64,
    /// Total volume on quotes trading above the concentration threshold
    pub concentrated_volume: u64,
    /// Expirations showing spread-like multi-strike positioning
    pub multi_strike: Vec<MultiStrikeActivity>,
}

/// Probability (0-100) that the batch's activity is institutional
///
/// Additive point table: total premium, count of size-500+ trades, strike
/// diversity, expiry spread, and presence of both calls and puts.
pub fn institutional_probability(batch: &QuoteBatch) -> f64 {
    let mut score: f64 = 0.0;

    let total_premium = batch.total_premium();
    score += if total_premium >= 5_000_000.0 {
        30.0
    } else if total_premium >= 1_000_000.0 {
        25.0
    } else if total_premium >= 500_000.0 {
        20.0
    } else if total_premium >= 100_000.0 {
        15.0
    } else {
        0.0
    };

    let large_volume_trades = batch.quotes.iter().filter(|q| q.volume >= 500).count();
    score += if large_volume_trades >= 5 {
        25.0
    } else if large_volume_trades >= 3 {
        20.0
    } else if large_volume_trades >= 1 {
        15.0
    } else {
        0.0
    };

    let unique_strikes = batch.strikes().len();
    score += if unique_strikes >= 10 {
        20.0
    } else if unique_strikes >= 5 {
        15.0
    } else if unique_strikes >= 3 {
        10.0
    } else {
        0.0
    };

    let unique_expiries = batch.expirations().len();
    score += if unique_expiries >= 3 {
        15.0
    } else if unique_expiries >= 2 {
        10.0
    } else {
        0.0
    };

    // Two-sided positioning
    if batch.calls().next().is_some() && batch.puts().next().is_some() {
        score += 10.0;
    }

    score.min(100.0)
}

/// Full institutional assessment, including the detail behind the score
pub fn institutional_activity(batch: &QuoteBatch, config: &AnalyticsConfig) -> InstitutionalActivity {
    let large: Vec<_> = batch
        .quotes
        .iter()
        .filter(|q| q.total_premium() >= config.large_trade_premium)
        .collect();
    let large_trade_premium = large.iter().map(|q| q.total_premium()).sum();

    let concentrated_volume = batch
        .quotes
        .iter()
        .filter(|q| q.volume > config.concentrated_volume)
        .map(|q| q.volume)
        .sum();

    let mut multi_strike = Vec::new();
    for expiration in batch.expirations() {
        let group: Vec<_> = batch
            .quotes
            .iter()
            .filter(|q| q.expiration == expiration)
            .collect();

        let mut strikes: Vec<f64> = group.iter().map(|q| q.strike).collect();
        strikes.sort_by(|a, b| a.partial_cmp(b).unwrap());
        strikes.dedup();

        let total_premium: f64 = group.iter().map(|q| q.total_premium()).sum();

        if strikes.len() >= config.multi_strike_min_strikes
            && total_premium >= config.multi_strike_min_premium
        {
            multi_strike.push(MultiStrikeActivity {
                expiration,
                strikes: strikes.len(),
                total_premium,
                total_volume: group.iter().map(|q| q.volume).sum(),
            });
        }
    }

    InstitutionalActivity {
        probability: institutional_probability(batch),
        large_trade_count: large.len(),
        large_trade_premium,
        concentrated_volume,
        multi_strike,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{OptionQuote, OptionType};

    fn quote(
        option_type: OptionType,
        strike: f64,
        expiration: &str,
        volume: u64,
        last: f64,
    ) -> OptionQuote {
        let mut q = OptionQuote::new("TEST", "TEST-X", expiration, strike, option_type);
        q.volume = volume;
        q.last = last;
        q
    }

    #[test]
    fn test_empty_batch_scores_zero() {
        let batch = QuoteBatch::new("TEST", 100.0);
        assert_eq!(institutional_probability(&batch), 0.0);
    }

    #[test]
    fn test_full_house_scores_high() {
        let mut batch = QuoteBatch::new("TEST", 100.0);
        // 10 strikes, 3 expiries, both sides, heavy volume, big premium
        for i in 0..10 {
            let expiration = ["2026-06-19", "2026-07-17", "2026-08-21"][i % 3];
            let side = if i % 2 == 0 {
                OptionType::Call
            } else {
                OptionType::Put
            };
            // 600 contracts at $10: $600K premium each
            batch.add(quote(side, 90.0 + i as f64 * 2.0, expiration, 600, 10.0));
        }

        // 30 (premium >= 5M) + 25 (>=5 large trades) + 20 (>=10 strikes)
        // + 15 (>=3 expiries) + 10 (both sides) = 100
        assert_eq!(institutional_probability(&batch), 100.0);
    }

    #[test]
    fn test_retail_batch_scores_low() {
        let mut batch = QuoteBatch::new("TEST", 100.0);
        batch.add(quote(OptionType::Call, 100.0, "2026-06-19", 5, 0.50));

        assert_eq!(institutional_probability(&batch), 0.0);
    }

    #[test]
    fn test_both_sides_bonus() {
        let mut one_sided = QuoteBatch::new("TEST", 100.0);
        one_sided.add(quote(OptionType::Call, 100.0, "2026-06-19", 5, 0.50));

        let mut two_sided = one_sided.clone();
        two_sided.add(quote(OptionType::Put, 100.0, "2026-06-19", 5, 0.50));

        assert_eq!(
            institutional_probability(&two_sided) - institutional_probability(&one_sided),
            10.0
        );
    }

    #[test]
    fn test_activity_detail() {
        let mut batch = QuoteBatch::new("TEST", 100.0);
        // Large trade: 600 * $10 * 100 = $600K
        batch.add(quote(OptionType::Call, 95.0, "2026-06-19", 600, 10.0));
        // Concentrated: over 1000 contracts
        batch.add(quote(OptionType::Call, 100.0, "2026-06-19", 1500, 1.0));
        // Third strike on the same expiry lifts it over the multi-strike bar
        batch.add(quote(OptionType::Put, 105.0, "2026-06-19", 100, 2.0));

        let activity = institutional_activity(&batch, &AnalyticsConfig::default());

        assert_eq!(activity.large_trade_count, 1);
        assert!((activity.large_trade_premium - 600_000.0).abs() < 1e-9);
        assert_eq!(activity.concentrated_volume, 1500);

        // 3 strikes, premium 600K + 150K + 20K >= 250K
        assert_eq!(activity.multi_strike.len(), 1);
        assert_eq!(activity.multi_strike[0].strikes, 3);
    }
}
