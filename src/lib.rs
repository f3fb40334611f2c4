//! # Options Flow - order-flow analytics for listed options
//!
//! Estimates pricing sensitivities (the Greeks), recovers implied volatility
//! from market prices, and classifies options order flow as ordinary, block,
//! or sweep activity with unusualness and institutional-likelihood scores.
//!
//! ## Key Components
//!
//! - **Pricing**: closed-form Black-Scholes values and Greeks
//! - **Implied Vol**: Newton-Raphson inversion of the pricer
//! - **Flow Classification**: per-quote mechanism, size tier, sentiment, and
//!   scores
//! - **Portfolio Analytics**: volume-weighted Greeks, max pain, put/call
//!   ratios, institutional detection, IV surface stats
//! - **Data**: Yahoo Finance collector with a local JSON cache
//!
//! ## Usage
//!
//! ```rust,no_run
//! use options_flow::prelude::*;
//!
//! // Fetch the nearest-expiration chain for a symbol
//! let batch = YahooClient::new().get_batch("SPY", None).unwrap();
//!
//! // Run the full analysis pipeline
//! let summary = FlowAnalyzer::new().analyze(&batch);
//!
//! println!("max pain: {}", summary.max_pain.strike);
//! println!("volume P/C: {:.2}", summary.ratios.volume_ratio);
//! println!("institutional: {:.0}%", summary.institutional.probability);
//! ```
//!
//! ## What This Does NOT Do
//!
//! - Model American early exercise, dividends, or settlement conventions
//!   (pricing is European with a flat risk-free rate)
//! - Predict prices or generate trading signals
//! - Account for exchange microstructure
//!
//! Every analytics operation returns a best-effort numeric result; degenerate
//! inputs (expired contracts, missing IV, unparseable dates) get documented
//! fallbacks rather than errors.

pub mod analytics;
pub mod core;
pub mod data;
pub mod flow;
pub mod models;

/// Prelude with commonly used types
pub mod prelude {
    // Core types
    pub use crate::core::{
        FlowError, FlowResult, GreeksResult, Moneyness, OptionQuote, OptionType, PortfolioGreeks,
        QuoteBatch,
    };

    // Pricing models
    pub use crate::models::{
        greeks as bs_greeks, implied_volatility, norm_cdf, norm_pdf, price as bs_price,
    };

    // Flow classification
    pub use crate::flow::{
        FlowAnalysis, FlowBreakdown, FlowClassifier, FlowConfig, FlowMechanism, Sentiment,
        SizeTier,
    };

    // Portfolio analytics
    pub use crate::analytics::{
        AnalyticsConfig, FlowAnalyzer, InstitutionalActivity, IvSurfaceStats, MaxPain,
        PcrSentiment, PortfolioSummary, PutCallRatios, SkewReading,
    };

    // Data fetching
    pub use crate::data::{CacheConfig, CachedFetcher, QuoteCache, YahooClient};
}

// Re-export main types at crate root
pub use crate::analytics::{FlowAnalyzer, PortfolioSummary};
pub use crate::core::{FlowError, FlowResult};
