//! Put/Call ratios
//!
//! Aggregate put-to-call activity by volume, open interest, and premium, with
//! a sentiment label derived from the volume ratio.

use serde::{Deserialize, Serialize};

use crate::core::QuoteBatch;

/// Market sentiment implied by the volume put/call ratio
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PcrSentiment {
    VeryBearish,
    Bearish,
    Neutral,
    Bullish,
    VeryBullish,
}

impl PcrSentiment {
    /// From a volume put/call ratio
    pub fn from_volume_ratio(ratio: f64) -> Self {
        if ratio > 1.2 {
            PcrSentiment::VeryBearish
        } else if ratio > 1.0 {
            PcrSentiment::Bearish
        } else if ratio > 0.8 {
            PcrSentiment::Neutral
        } else if ratio > 0.6 {
            PcrSentiment::Bullish
        } else {
            PcrSentiment::VeryBullish
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PcrSentiment::VeryBearish => "very_bearish",
            PcrSentiment::Bearish => "bearish",
            PcrSentiment::Neutral => "neutral",
            PcrSentiment::Bullish => "bullish",
            PcrSentiment::VeryBullish => "very_bullish",
        }
    }
}

/// Put/call activity ratios for a batch
///
/// Ratios are put aggregate over call aggregate, 0 when the call side is
/// empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PutCallRatios {
    pub volume_ratio: f64,
    pub oi_ratio: f64,
    pub premium_ratio: f64,
    pub call_volume: u64,
    pub put_volume: u64,
    pub call_oi: u64,
    pub put_oi: u64,
    pub call_premium: f64,
    pub put_premium: f64,
    /// Sentiment from the volume ratio
    pub sentiment: PcrSentiment,
}

/// Compute put/call ratios for a batch
pub fn put_call_ratios(batch: &QuoteBatch) -> PutCallRatios {
    let call_volume: u64 = batch.calls().map(|q| q.volume).sum();
    let put_volume: u64 = batch.puts().map(|q| q.volume).sum();
    let call_oi: u64 = batch.calls().map(|q| q.open_interest).sum();
    let put_oi: u64 = batch.puts().map(|q| q.open_interest).sum();
    let call_premium: f64 = batch.calls().map(|q| q.total_premium()).sum();
    let put_premium: f64 = batch.puts().map(|q| q.total_premium()).sum();

    let ratio = |put: f64, call: f64| if call > 0.0 { put / call } else { 0.0 };

    let volume_ratio = ratio(put_volume as f64, call_volume as f64);

    PutCallRatios {
        volume_ratio,
        oi_ratio: ratio(put_oi as f64, call_oi as f64),
        premium_ratio: ratio(put_premium, call_premium),
        call_volume,
        put_volume,
        call_oi,
        put_oi,
        call_premium,
        put_premium,
        sentiment: PcrSentiment::from_volume_ratio(volume_ratio),
    }
}
