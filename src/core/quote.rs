//! Option quote data
//!
//! The per-contract market record every analysis runs on: prices, volume,
//! open interest, and exchange-reported implied volatility.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::option::{Moneyness, OptionType};

/// Width of the at-the-money band as a fraction of spot (±2%)
pub const ATM_BAND: f64 = 0.02;

/// Equity option contract multiplier
pub const CONTRACT_MULTIPLIER: f64 = 100.0;

/// A single option contract reading
///
/// Numeric fields use 0 for "unknown" (implied vol, bid/ask); volume and open
/// interest are plain counts. Derived quantities (premium, moneyness, time to
/// expiry) are computed on demand so they can never go stale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionQuote {
    /// Underlying symbol (e.g., "AAPL", "SPY")
    pub symbol: String,
    /// Contract identifier (exchange-specific, e.g., OCC symbol)
    pub contract: String,
    /// Expiration date as ISO `YYYY-MM-DD`
    pub expiration: String,
    /// Strike price
    pub strike: f64,
    /// Option type (Call/Put)
    pub option_type: OptionType,
    /// Underlying spot price at reading time (0 = unknown)
    pub spot: f64,
    /// Last traded price
    pub last: f64,
    /// Bid price (0 = missing)
    pub bid: f64,
    /// Ask price (0 = missing)
    pub ask: f64,
    /// Trading volume
    pub volume: u64,
    /// Open interest
    pub open_interest: u64,
    /// Implied volatility as reported by the exchange (0 = unknown)
    pub implied_vol: f64,
}

impl OptionQuote {
    /// Create a quote with market fields zeroed
    pub fn new(
        symbol: impl Into<String>,
        contract: impl Into<String>,
        expiration: impl Into<String>,
        strike: f64,
        option_type: OptionType,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            contract: contract.into(),
            expiration: expiration.into(),
            strike,
            option_type,
            spot: 0.0,
            last: 0.0,
            bid: 0.0,
            ask: 0.0,
            volume: 0,
            open_interest: 0,
            implied_vol: 0.0,
        }
    }

    /// Total premium traded: last price x volume x contract multiplier
    pub fn total_premium(&self) -> f64 {
        self.last * self.volume as f64 * CONTRACT_MULTIPLIER
    }

    /// Bid-ask spread magnitude
    pub fn spread(&self) -> f64 {
        (self.ask - self.bid).abs()
    }

    /// Moneyness relative to the recorded spot, `None` when spot is unknown
    pub fn moneyness(&self) -> Option<Moneyness> {
        Moneyness::classify(self.option_type, self.strike, self.spot, ATM_BAND)
    }

    /// Parse the expiration string, `None` when malformed
    pub fn expiration_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.expiration, "%Y-%m-%d").ok()
    }

    /// Time to expiry in years from the given date, `None` when the
    /// expiration string cannot be parsed
    pub fn time_to_expiry(&self, as_of: NaiveDate) -> Option<f64> {
        let expiry = self.expiration_date()?;
        let days = (expiry - as_of).num_days();
        Some(days as f64 / 365.0)
    }
}

/// A batch of quotes for one symbol at one reading
///
/// The unit of work for the portfolio aggregator: all quotes share the
/// underlying and the spot price.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteBatch {
    /// Underlying symbol
    pub symbol: String,
    /// Underlying spot price
    pub spot: f64,
    /// All quotes (calls and puts mixed)
    pub quotes: Vec<OptionQuote>,
    /// Reading timestamp
    pub timestamp: DateTime<Utc>,
}

impl QuoteBatch {
    pub fn new(symbol: impl Into<String>, spot: f64) -> Self {
        Self {
            symbol: symbol.into(),
            spot,
            quotes: Vec::new(),
            timestamp: Utc::now(),
        }
    }

    /// Add a quote, stamping the batch spot onto it
    pub fn add(&mut self, mut quote: OptionQuote) {
        quote.spot = self.spot;
        self.quotes.push(quote);
    }

    /// Call quotes
    pub fn calls(&self) -> impl Iterator<Item = &OptionQuote> {
        self.quotes
            .iter()
            .filter(|q| q.option_type == OptionType::Call)
    }

    /// Put quotes
    pub fn puts(&self) -> impl Iterator<Item = &OptionQuote> {
        self.quotes
            .iter()
            .filter(|q| q.option_type == OptionType::Put)
    }

    /// Distinct strikes, sorted ascending
    pub fn strikes(&self) -> Vec<f64> {
        let mut strikes: Vec<f64> = self.quotes.iter().map(|q| q.strike).collect();
        strikes.sort_by(|a, b| a.partial_cmp(b).unwrap());
        strikes.dedup();
        strikes
    }

    /// Distinct expiration strings
    pub fn expirations(&self) -> Vec<String> {
        let mut expirations: Vec<String> =
            self.quotes.iter().map(|q| q.expiration.clone()).collect();
        expirations.sort();
        expirations.dedup();
        expirations
    }

    /// Sum of premium across all quotes
    pub fn total_premium(&self) -> f64 {
        self.quotes.iter().map(|q| q.total_premium()).sum()
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }
}
