//! Max pain
//!
//! For each strike on the board, the open-interest-weighted intrinsic loss to
//! option holders with the underlying settling at the current spot. The
//! max-pain strike is the one minimizing that loss (where market makers give
//! up the least).

use serde::{Deserialize, Serialize};

use crate::core::{OptionType, QuoteBatch};

use super::AnalyticsConfig;

/// Max-pain strike and the full pain curve
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaxPain {
    /// Strike minimizing aggregate holder pain. Falls back to spot for an
    /// empty batch.
    pub strike: f64,
    /// (strike, pain) pairs, ascending by strike
    pub pain_by_strike: Vec<(f64, f64)>,
}

/// Compute max pain for a batch at its recorded spot
pub fn max_pain(batch: &QuoteBatch, config: &AnalyticsConfig) -> MaxPain {
    let strikes = batch.strikes();
    if strikes.is_empty() {
        return MaxPain {
            strike: batch.spot,
            pain_by_strike: Vec::new(),
        };
    }

    let spot = batch.spot;
    let multiplier = config.contract_multiplier;
    let mut pain_by_strike = Vec::with_capacity(strikes.len());

    for &strike in &strikes {
        let mut pain = 0.0;

        for quote in batch.quotes.iter().filter(|q| q.strike == strike) {
            let oi = quote.open_interest as f64;
            match quote.option_type {
                // ITM calls pay out when spot settles above the strike
                OptionType::Call if spot > strike => {
                    pain += oi * (spot - strike) * multiplier;
                }
                // ITM puts pay out when spot settles below the strike
                OptionType::Put if spot < strike => {
                    pain += oi * (strike - spot) * multiplier;
                }
                _ => {}
            }
        }

        pain_by_strike.push((strike, pain));
    }

    // First strike (ascending) achieving the minimum
    let mut best = pain_by_strike[0];
    for &(strike, pain) in &pain_by_strike[1..] {
        if pain < best.1 {
            best = (strike, pain);
        }
    }

    MaxPain {
        strike: best.0,
        pain_by_strike,
    }
}
