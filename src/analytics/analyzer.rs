//! FlowAnalyzer - facade over the full analysis pipeline
//!
//! Runs classification, portfolio Greeks, max pain, put/call ratios,
//! institutional detection, and IV surface stats over one batch and returns a
//! single immutable summary.

use chrono::{NaiveDate, Utc};

use crate::core::{OptionQuote, QuoteBatch};
use crate::flow::{FlowBreakdown, FlowClassifier, FlowConfig};

use super::{
    institutional_activity, iv_surface_stats, max_pain, portfolio_greeks, put_call_ratios,
    AnalyticsConfig, FlowRecord, PortfolioSummary,
};

/// Pre-screen for unusual activity
///
/// Any of: notable premium, volume pressing on open interest, or a probable
/// block (real volume with real money behind it).
pub fn is_unusual(quote: &OptionQuote, config: &AnalyticsConfig) -> bool {
    let premium = quote.total_premium();

    let high_premium = premium >= config.unusual_min_premium;
    let high_volume_ratio =
        quote.volume as f64 / (quote.open_interest + 1) as f64 >= config.unusual_oi_ratio;
    let potential_block =
        quote.volume > config.unusual_block_volume && premium > config.unusual_block_premium;

    high_premium || high_volume_ratio || potential_block
}

/// Full-pipeline analyzer
pub struct FlowAnalyzer {
    config: AnalyticsConfig,
    classifier: FlowClassifier,
}

impl FlowAnalyzer {
    /// Create an analyzer with default configuration
    pub fn new() -> Self {
        Self {
            config: AnalyticsConfig::default(),
            classifier: FlowClassifier::new(),
        }
    }

    /// Create with custom configuration
    pub fn with_config(config: AnalyticsConfig, flow_config: FlowConfig) -> Self {
        Self {
            config,
            classifier: FlowClassifier::with_config(flow_config),
        }
    }

    /// Analytics configuration
    pub fn config(&self) -> &AnalyticsConfig {
        &self.config
    }

    /// Analyze a batch as of today
    pub fn analyze(&self, batch: &QuoteBatch) -> PortfolioSummary {
        self.analyze_as_of(batch, Utc::now().date_naive())
    }

    /// Analyze a batch as of a given date (for reproducible runs)
    pub fn analyze_as_of(&self, batch: &QuoteBatch, as_of: NaiveDate) -> PortfolioSummary {
        tracing::info!(
            symbol = %batch.symbol,
            quotes = batch.len(),
            "running flow analysis"
        );

        let mut breakdown = FlowBreakdown::default();
        let mut flows = Vec::with_capacity(batch.len());
        let mut unusual_count = 0;

        for quote in &batch.quotes {
            // No historical average available at this layer; the quote's own
            // volume keeps the volume-ratio component at its baseline.
            let analysis = self.classifier.classify(quote, quote.volume as f64);
            breakdown.record(&analysis);

            if is_unusual(quote, &self.config) {
                unusual_count += 1;
            }

            flows.push(FlowRecord {
                contract: quote.contract.clone(),
                analysis,
            });
        }

        let summary = PortfolioSummary {
            symbol: batch.symbol.clone(),
            spot: batch.spot,
            as_of,
            contracts: batch.len(),
            total_premium: batch.total_premium(),
            unusual_count,
            greeks: portfolio_greeks(batch, &self.config, as_of),
            max_pain: max_pain(batch, &self.config),
            ratios: put_call_ratios(batch),
            breakdown,
            flows,
            institutional: institutional_activity(batch, &self.config),
            iv_surface: iv_surface_stats(batch, &self.config),
        };

        tracing::info!(
            symbol = %batch.symbol,
            unusual = unusual_count,
            institutional_probability = summary.institutional.probability,
            "flow analysis complete"
        );

        summary
    }
}

impl Default for FlowAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::OptionType;
    use crate::flow::FlowMechanism;

    fn sample_batch() -> QuoteBatch {
        let mut batch = QuoteBatch::new("AAPL", 150.0);

        // Block-sized ATM call
        let mut q = OptionQuote::new("AAPL", "AAPL-C150", "2026-02-14", 150.0, OptionType::Call);
        q.last = 3.50;
        q.bid = 3.40;
        q.ask = 3.60;
        q.volume = 800;
        q.open_interest = 2_000;
        q.implied_vol = 0.28;
        batch.add(q);

        // Retail OTM put
        let mut q = OptionQuote::new("AAPL", "AAPL-P140", "2026-02-14", 140.0, OptionType::Put);
        q.last = 1.20;
        q.bid = 1.15;
        q.ask = 1.25;
        q.volume = 40;
        q.open_interest = 900;
        q.implied_vol = 0.33;
        batch.add(q);

        batch
    }

    #[test]
    fn test_summary_shape() {
        let as_of = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
        let summary = FlowAnalyzer::new().analyze_as_of(&sample_batch(), as_of);

        assert_eq!(summary.symbol, "AAPL");
        assert_eq!(summary.contracts, 2);
        assert_eq!(summary.flows.len(), 2);

        // 3.50 * 800 * 100 + 1.20 * 40 * 100
        assert!((summary.total_premium - 284_800.0).abs() < 1e-6);

        // The 800-lot at $280K premium is a block
        assert_eq!(summary.flows[0].analysis.mechanism, FlowMechanism::Block);
        assert_eq!(summary.breakdown.block_trades, 1);
        assert_eq!(summary.breakdown.single_trades, 1);

        // Put skew present on the IV surface
        assert!(summary.iv_surface.skew > 0.0);
    }

    #[test]
    fn test_unusual_pre_screen() {
        let config = AnalyticsConfig::default();

        // Premium alone
        let mut q = OptionQuote::new("T", "T-C", "2026-06-19", 100.0, OptionType::Call);
        q.last = 5.0;
        q.volume = 100; // $50K
        q.open_interest = 10_000;
        assert!(is_unusual(&q, &config));

        // Volume pressing on OI
        let mut q = OptionQuote::new("T", "T-C", "2026-06-19", 100.0, OptionType::Call);
        q.last = 0.10;
        q.volume = 60;
        q.open_interest = 100;
        assert!(is_unusual(&q, &config));

        // Neither
        let mut q = OptionQuote::new("T", "T-C", "2026-06-19", 100.0, OptionType::Call);
        q.last = 0.10;
        q.volume = 10;
        q.open_interest = 1_000;
        assert!(!is_unusual(&q, &config));
    }

    #[test]
    fn test_empty_batch_summary() {
        let as_of = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
        let batch = QuoteBatch::new("EMPTY", 100.0);
        let summary = FlowAnalyzer::new().analyze_as_of(&batch, as_of);

        assert_eq!(summary.contracts, 0);
        assert_eq!(summary.unusual_count, 0);
        assert_eq!(summary.max_pain.strike, 100.0);
        assert!(summary.iv_surface.stats.is_none());
        assert_eq!(summary.institutional.probability, 0.0);
    }
}
