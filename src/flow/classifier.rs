//! Per-quote flow classification
//!
//! Stateless heuristics over a single quote. `avg_volume` is an external
//! input: callers with historical data pass the real average; callers without
//! it decide their own fallback (the quote's own volume gives the
//! volume-ratio component a fixed baseline contribution).

use crate::core::{Moneyness, OptionQuote, OptionType};

use super::{FlowAnalysis, FlowConfig, FlowMechanism, Sentiment, SizeTier};

/// Flow classifier with explicit thresholds
pub struct FlowClassifier {
    config: FlowConfig,
}

impl FlowClassifier {
    /// Create a classifier with default thresholds
    pub fn new() -> Self {
        Self {
            config: FlowConfig::default(),
        }
    }

    /// Create with custom thresholds
    pub fn with_config(config: FlowConfig) -> Self {
        Self { config }
    }

    /// Current configuration
    pub fn config(&self) -> &FlowConfig {
        &self.config
    }

    /// Classify one quote
    ///
    /// `avg_volume` is the contract's historical average daily volume.
    pub fn classify(&self, quote: &OptionQuote, avg_volume: f64) -> FlowAnalysis {
        let premium = quote.total_premium();

        FlowAnalysis {
            mechanism: self.mechanism(quote.volume, premium, quote.spread()),
            size_tier: self.size_tier(quote.volume, premium),
            sentiment: self.sentiment(quote),
            unusual_score: self.unusual_score(quote, avg_volume),
            confidence: self.confidence(quote),
        }
    }

    /// Execution mechanism. Block is checked before sweep: a trade meeting
    /// both thresholds is a block.
    fn mechanism(&self, volume: u64, premium: f64, spread: f64) -> FlowMechanism {
        if volume >= self.config.block_min_volume && premium >= self.config.block_min_premium {
            return FlowMechanism::Block;
        }

        // A wide spread on real volume suggests the order walked the book
        if volume >= self.config.sweep_min_volume && spread > self.config.sweep_min_spread {
            return FlowMechanism::Sweep;
        }

        FlowMechanism::Single
    }

    fn size_tier(&self, volume: u64, premium: f64) -> SizeTier {
        if premium >= self.config.whale_premium || volume >= self.config.whale_volume {
            SizeTier::Whale
        } else if premium >= self.config.institutional_premium
            || volume >= self.config.institutional_volume
        {
            SizeTier::Institutional
        } else {
            SizeTier::Retail
        }
    }

    /// Directional sentiment. ITM/ATM activity reads as conviction in that
    /// direction; OTM only counts with heavy volume. Unknown moneyness is
    /// neutral.
    fn sentiment(&self, quote: &OptionQuote) -> Sentiment {
        let moneyness = quote.moneyness();
        let heavy = quote.volume > self.config.directional_otm_volume;

        match (quote.option_type, moneyness) {
            (OptionType::Call, Some(Moneyness::Itm) | Some(Moneyness::Atm)) => Sentiment::Bullish,
            (OptionType::Call, Some(Moneyness::Otm)) if heavy => Sentiment::Bullish,
            (OptionType::Put, Some(Moneyness::Itm) | Some(Moneyness::Atm)) => Sentiment::Bearish,
            (OptionType::Put, Some(Moneyness::Otm)) if heavy => Sentiment::Bearish,
            _ => Sentiment::Neutral,
        }
    }

    /// Unusual-activity score in [0, 100]
    ///
    /// Sum of independently-capped components:
    /// - volume vs average (0-40)
    /// - premium tier (0-30)
    /// - volume/open-interest pressure (0-20)
    /// - a 0-10 time-to-expiry band is reserved but intentionally unscored
    fn unusual_score(&self, quote: &OptionQuote, avg_volume: f64) -> f64 {
        let mut score = 0.0;

        if avg_volume > 0.0 {
            let volume_ratio = quote.volume as f64 / avg_volume;
            score += (self.config.volume_ratio_scale * volume_ratio).min(self.config.volume_ratio_cap);
        }

        score += self.config.premium_points(quote.total_premium());

        if quote.open_interest > 0 {
            let oi_ratio = quote.volume as f64 / quote.open_interest as f64;
            score += self.config.oi_ratio_points(oi_ratio);
        }

        score.min(100.0)
    }

    /// Confidence in [0, 1]: more populated fields and bigger premium mean
    /// the heuristics have more to go on
    fn confidence(&self, quote: &OptionQuote) -> f64 {
        let mut confidence = self.config.base_confidence;

        if quote.bid > 0.0 && quote.ask > 0.0 {
            confidence += self.config.field_bonus;
        }
        if quote.implied_vol > 0.0 {
            confidence += self.config.field_bonus;
        }
        if quote.open_interest > 0 {
            confidence += self.config.field_bonus;
        }
        if quote.total_premium() >= self.config.large_premium {
            confidence += self.config.large_premium_bonus;
        }

        confidence.min(1.0)
    }
}

impl Default for FlowClassifier {
    fn default() -> Self {
        Self::new()
    }
}
