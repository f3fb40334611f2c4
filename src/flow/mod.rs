//! Flow classification
//!
//! Per-quote heuristics labelling each record with:
//! - **Mechanism**: how the order likely reached the tape (single, block, sweep)
//! - **Size tier**: retail / institutional / whale
//! - **Sentiment**: directional read from option type, moneyness, and volume
//! - **Unusual score** (0-100) and **confidence** (0-1)
//!
//! Classification is a pure function of the quote plus an externally-supplied
//! average volume; quotes can be classified in any order or in parallel.

mod classifier;
mod config;

pub use classifier::*;
pub use config::*;

use serde::{Deserialize, Serialize};

/// How the order likely executed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FlowMechanism {
    /// Ordinary single order
    Single,
    /// Large negotiated block
    Block,
    /// Aggressive multi-exchange sweep
    Sweep,
}

impl FlowMechanism {
    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            FlowMechanism::Single => "single",
            FlowMechanism::Block => "block",
            FlowMechanism::Sweep => "sweep",
        }
    }
}

/// Trade size tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SizeTier {
    Retail,
    Institutional,
    Whale,
}

impl SizeTier {
    pub fn label(&self) -> &'static str {
        match self {
            SizeTier::Retail => "retail",
            SizeTier::Institutional => "institutional",
            SizeTier::Whale => "whale",
        }
    }
}

/// Directional sentiment read from a single quote
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sentiment {
    Bullish,
    Bearish,
    Neutral,
}

impl Sentiment {
    pub fn label(&self) -> &'static str {
        match self {
            Sentiment::Bullish => "bullish",
            Sentiment::Bearish => "bearish",
            Sentiment::Neutral => "neutral",
        }
    }
}

/// Full classification of one quote
///
/// Pure derived value: no identity, recomputed fresh from each reading.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FlowAnalysis {
    /// Execution mechanism
    pub mechanism: FlowMechanism,
    /// Size tier
    pub size_tier: SizeTier,
    /// Directional sentiment
    pub sentiment: Sentiment,
    /// Unusual-activity score, 0-100
    pub unusual_score: f64,
    /// Confidence in the classification, 0-1
    pub confidence: f64,
}

/// Tally of classifications across a batch
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct FlowBreakdown {
    pub block_trades: usize,
    pub sweep_trades: usize,
    pub single_trades: usize,
    pub retail_flows: usize,
    pub institutional_flows: usize,
    pub whale_flows: usize,
}

impl FlowBreakdown {
    /// Count one analysis into the tally
    pub fn record(&mut self, analysis: &FlowAnalysis) {
        match analysis.mechanism {
            FlowMechanism::Block => self.block_trades += 1,
            FlowMechanism::Sweep => self.sweep_trades += 1,
            FlowMechanism::Single => self.single_trades += 1,
        }
        match analysis.size_tier {
            SizeTier::Retail => self.retail_flows += 1,
            SizeTier::Institutional => self.institutional_flows += 1,
            SizeTier::Whale => self.whale_flows += 1,
        }
    }
}
