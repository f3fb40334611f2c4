//! Portfolio aggregation
//!
//! Combines per-quote pricing and classification into batch-level analytics:
//!
//! 1. **Portfolio Greeks**: volume-weighted sensitivities and dollar exposures
//! 2. **Max pain**: the strike minimizing option-holder payoff at settlement
//! 3. **Put/Call ratios**: volume, open-interest, and premium based
//! 4. **Institutional detection**: probability score plus supporting detail
//! 5. **IV surface stats**: distribution, moneyness buckets, put/call skew
//!
//! All results are immutable value objects built fresh per batch.

mod analyzer;
mod config;
mod greeks;
mod institutional;
mod max_pain;
mod ratios;
mod surface;

pub use analyzer::{is_unusual, FlowAnalyzer};
pub use config::AnalyticsConfig;
pub use greeks::portfolio_greeks;
pub use institutional::{institutional_activity, institutional_probability, InstitutionalActivity, MultiStrikeActivity};
pub use max_pain::{max_pain, MaxPain};
pub use ratios::{put_call_ratios, PcrSentiment, PutCallRatios};
pub use surface::{iv_surface_stats, IvStats, IvSurfaceStats, MoneynessIvStats, SkewReading};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::PortfolioGreeks;
use crate::flow::{FlowAnalysis, FlowBreakdown};

/// One quote's classification, tagged with its contract identifier
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlowRecord {
    pub contract: String,
    pub analysis: FlowAnalysis,
}

/// Everything one analysis run produces for a symbol
///
/// Constructed once per batch, immutable, handed to reporting/UI and
/// discarded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioSummary {
    /// Underlying symbol
    pub symbol: String,
    /// Spot price used throughout
    pub spot: f64,
    /// Analysis date
    pub as_of: NaiveDate,
    /// Number of contracts in the batch
    pub contracts: usize,
    /// Total premium across the batch
    pub total_premium: f64,
    /// Quotes passing the unusual-activity pre-screen
    pub unusual_count: usize,
    /// Volume-weighted Greeks and exposures
    pub greeks: PortfolioGreeks,
    /// Max-pain strike and curve
    pub max_pain: MaxPain,
    /// Put/call ratios and sentiment
    pub ratios: PutCallRatios,
    /// Mechanism and size-tier tallies
    pub breakdown: FlowBreakdown,
    /// Per-quote classifications
    pub flows: Vec<FlowRecord>,
    /// Institutional activity assessment
    pub institutional: InstitutionalActivity,
    /// IV surface statistics
    pub iv_surface: IvSurfaceStats,
}
