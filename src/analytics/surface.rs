//! Implied-volatility surface statistics
//!
//! Descriptive stats over exchange-reported IVs, bucketed by moneyness, with
//! a put-minus-call skew reading. Quotes with missing IV or garbage values
//! (at or above 500%) are excluded up front.

use serde::{Deserialize, Serialize};
use statrs::statistics::{Data, Median, Statistics};

use crate::core::{Moneyness, OptionType, QuoteBatch};

use super::AnalyticsConfig;

/// Descriptive statistics over a set of IVs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IvStats {
    pub mean: f64,
    pub median: f64,
    /// Sample standard deviation (0 for fewer than two points)
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
    pub count: usize,
}

impl IvStats {
    fn from_values(values: &[f64]) -> Self {
        let std_dev = if values.len() > 1 {
            values.iter().std_dev()
        } else {
            0.0
        };

        Self {
            mean: values.iter().mean(),
            median: Data::new(values.to_vec()).median(),
            std_dev,
            min: Statistics::min(values.iter()),
            max: Statistics::max(values.iter()),
            count: values.len(),
        }
    }
}

/// Per-moneyness-bucket IV statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoneynessIvStats {
    pub moneyness: Moneyness,
    pub mean: f64,
    pub std_dev: f64,
    pub count: usize,
}

/// Reading of the put-minus-call IV skew
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkewReading {
    /// Strong hedging/fear demand in puts
    HighPutSkew,
    /// Some defensive positioning
    ModeratePutSkew,
    /// Call demand exceeds puts
    CallDemand,
    /// Balanced demand
    Neutral,
}

impl SkewReading {
    pub fn from_skew(skew: f64) -> Self {
        if skew > 0.05 {
            SkewReading::HighPutSkew
        } else if skew > 0.02 {
            SkewReading::ModeratePutSkew
        } else if skew < -0.02 {
            SkewReading::CallDemand
        } else {
            SkewReading::Neutral
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SkewReading::HighPutSkew => "high put skew - fear/hedging demand",
            SkewReading::ModeratePutSkew => "moderate put skew - defensive positioning",
            SkewReading::CallDemand => "negative skew - call demand exceeds puts",
            SkewReading::Neutral => "neutral skew - balanced demand",
        }
    }
}

/// IV surface statistics for a batch
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IvSurfaceStats {
    /// Overall stats, `None` when no quote has a usable IV
    pub stats: Option<IvStats>,
    /// Per-bucket stats (only buckets with data)
    pub by_moneyness: Vec<MoneynessIvStats>,
    /// mean(put IV) - mean(call IV); 0 when either side is empty
    pub skew: f64,
    /// Interpretation of the skew
    pub reading: SkewReading,
}

/// Compute IV surface statistics for a batch
pub fn iv_surface_stats(batch: &QuoteBatch, config: &AnalyticsConfig) -> IvSurfaceStats {
    let valid: Vec<_> = batch
        .quotes
        .iter()
        .filter(|q| q.implied_vol > 0.0 && q.implied_vol < config.max_valid_iv)
        .collect();

    if valid.is_empty() {
        return IvSurfaceStats {
            stats: None,
            by_moneyness: Vec::new(),
            skew: 0.0,
            reading: SkewReading::Neutral,
        };
    }

    let ivs: Vec<f64> = valid.iter().map(|q| q.implied_vol).collect();
    let stats = IvStats::from_values(&ivs);

    let mut by_moneyness = Vec::new();
    for bucket in [Moneyness::Itm, Moneyness::Atm, Moneyness::Otm] {
        let bucket_ivs: Vec<f64> = valid
            .iter()
            .filter(|q| q.moneyness() == Some(bucket))
            .map(|q| q.implied_vol)
            .collect();

        if !bucket_ivs.is_empty() {
            let std_dev = if bucket_ivs.len() > 1 {
                bucket_ivs.iter().std_dev()
            } else {
                0.0
            };
            by_moneyness.push(MoneynessIvStats {
                moneyness: bucket,
                mean: bucket_ivs.iter().mean(),
                std_dev,
                count: bucket_ivs.len(),
            });
        }
    }

    let call_ivs: Vec<f64> = valid
        .iter()
        .filter(|q| q.option_type == OptionType::Call)
        .map(|q| q.implied_vol)
        .collect();
    let put_ivs: Vec<f64> = valid
        .iter()
        .filter(|q| q.option_type == OptionType::Put)
        .map(|q| q.implied_vol)
        .collect();

    let skew = if !call_ivs.is_empty() && !put_ivs.is_empty() {
        put_ivs.iter().mean() - call_ivs.iter().mean()
    } else {
        0.0
    };

    IvSurfaceStats {
        stats: Some(stats),
        by_moneyness,
        skew,
        reading: SkewReading::from_skew(skew),
    }
}
