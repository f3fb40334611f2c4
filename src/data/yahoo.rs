//! Yahoo Finance options collector
//!
//! Fetches spot prices and option chains from Yahoo Finance's unofficial API
//! and converts them to [`QuoteBatch`] records for analysis.
//!
//! Note: data is delayed ~15 minutes and intended for personal/research use.

use chrono::{DateTime, NaiveDate};
use serde::Deserialize;

use crate::core::{FlowError, FlowResult, OptionQuote, OptionType, QuoteBatch};

/// Yahoo Finance API client
pub struct YahooClient {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl YahooClient {
    pub fn new() -> Self {
        Self {
            client: reqwest::blocking::Client::builder()
                .user_agent("Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36")
                .build()
                .expect("Failed to create HTTP client"),
            base_url: "https://query1.finance.yahoo.com/v7/finance".to_string(),
        }
    }

    /// Current spot price for a symbol
    pub fn get_spot(&self, symbol: &str) -> FlowResult<f64> {
        let url = format!("{}/quote?symbols={}", self.base_url, symbol);

        let response: QuoteResponse = self
            .client
            .get(&url)
            .send()
            .map_err(|e| FlowError::Network(e.to_string()))?
            .json()
            .map_err(|e| FlowError::Data(format!("Failed to parse quote: {}", e)))?;

        let result = response
            .quote_response
            .result
            .into_iter()
            .next()
            .ok_or_else(|| FlowError::data("No quote data returned"))?;

        Ok(result.regular_market_price)
    }

    /// Available option expiration dates for a symbol
    pub fn get_expirations(&self, symbol: &str) -> FlowResult<Vec<NaiveDate>> {
        let url = format!("{}/options/{}", self.base_url, symbol);
        let chain = self.fetch_chain_data(&url)?;

        let expirations: Vec<NaiveDate> = chain
            .expiration_dates
            .iter()
            .filter_map(|&ts| DateTime::from_timestamp(ts, 0).map(|dt| dt.date_naive()))
            .collect();

        Ok(expirations)
    }

    /// Fetch one expiration's chain as a quote batch
    ///
    /// With `expiration` unset (or not listed), the nearest listed expiration
    /// is used.
    pub fn get_batch(&self, symbol: &str, expiration: Option<NaiveDate>) -> FlowResult<QuoteBatch> {
        let expirations = self.get_expirations(symbol)?;
        if expirations.is_empty() {
            return Err(FlowError::data(format!("No options listed for {}", symbol)));
        }

        let target = match expiration {
            Some(date) if expirations.contains(&date) => date,
            Some(date) => {
                tracing::warn!(
                    "Expiration {} not listed for {}, using {}",
                    date,
                    symbol,
                    expirations[0]
                );
                expirations[0]
            }
            None => expirations[0],
        };

        let expiry_ts = target
            .and_hms_opt(16, 0, 0)
            .unwrap()
            .and_utc()
            .timestamp();

        let url = format!("{}/options/{}?date={}", self.base_url, symbol, expiry_ts);
        let chain = self.fetch_chain_data(&url)?;

        let spot = chain.quote.regular_market_price;
        let expiration_str = target.format("%Y-%m-%d").to_string();
        let mut batch = QuoteBatch::new(symbol, spot);

        if let Some(options) = chain.options.first() {
            for row in &options.calls {
                if let Some(quote) =
                    convert_row(row, symbol, &expiration_str, OptionType::Call)
                {
                    batch.add(quote);
                }
            }
            for row in &options.puts {
                if let Some(quote) = convert_row(row, symbol, &expiration_str, OptionType::Put) {
                    batch.add(quote);
                }
            }
        }

        tracing::info!(
            "Fetched {} contracts for {} expiring {}",
            batch.len(),
            symbol,
            expiration_str
        );

        Ok(batch)
    }

    fn fetch_chain_data(&self, url: &str) -> FlowResult<OptionChainData> {
        let response: OptionsResponse = self
            .client
            .get(url)
            .send()
            .map_err(|e| FlowError::Network(e.to_string()))?
            .json()
            .map_err(|e| FlowError::Data(format!("Failed to parse options: {}", e)))?;

        response
            .option_chain
            .result
            .into_iter()
            .next()
            .ok_or_else(|| FlowError::data("No options data returned"))
    }
}

impl Default for YahooClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Convert a Yahoo option row to our quote record, skipping rows without a
/// strike. Missing numeric fields default to 0 ("unknown").
fn convert_row(
    row: &OptionRow,
    symbol: &str,
    expiration: &str,
    option_type: OptionType,
) -> Option<OptionQuote> {
    let strike = row.strike?;

    let mut quote = OptionQuote::new(
        symbol,
        row.contract_symbol.clone().unwrap_or_default(),
        expiration,
        strike,
        option_type,
    );
    quote.last = row.last_price.unwrap_or(0.0);
    quote.bid = row.bid.unwrap_or(0.0);
    quote.ask = row.ask.unwrap_or(0.0);
    quote.volume = row.volume.unwrap_or(0).max(0) as u64;
    quote.open_interest = row.open_interest.unwrap_or(0).max(0) as u64;
    quote.implied_vol = row.implied_volatility.unwrap_or(0.0);

    Some(quote)
}

// Yahoo Finance API response structures

#[derive(Debug, Deserialize)]
struct QuoteResponse {
    #[serde(rename = "quoteResponse")]
    quote_response: QuoteResult,
}

#[derive(Debug, Deserialize)]
struct QuoteResult {
    result: Vec<QuoteData>,
}

#[derive(Debug, Deserialize)]
struct QuoteData {
    #[serde(rename = "regularMarketPrice")]
    regular_market_price: f64,
}

#[derive(Debug, Deserialize)]
struct OptionsResponse {
    #[serde(rename = "optionChain")]
    option_chain: OptionChainResult,
}

#[derive(Debug, Deserialize)]
struct OptionChainResult {
    result: Vec<OptionChainData>,
}

#[derive(Debug, Deserialize)]
struct OptionChainData {
    #[serde(rename = "expirationDates")]
    expiration_dates: Vec<i64>,
    quote: QuoteData,
    options: Vec<OptionSides>,
}

#[derive(Debug, Deserialize)]
struct OptionSides {
    calls: Vec<OptionRow>,
    puts: Vec<OptionRow>,
}

#[derive(Debug, Deserialize)]
struct OptionRow {
    #[serde(rename = "contractSymbol")]
    contract_symbol: Option<String>,
    strike: Option<f64>,
    bid: Option<f64>,
    ask: Option<f64>,
    #[serde(rename = "lastPrice")]
    last_price: Option<f64>,
    volume: Option<i64>,
    #[serde(rename = "openInterest")]
    open_interest: Option<i64>,
    #[serde(rename = "impliedVolatility")]
    implied_volatility: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_row_defaults() {
        let row = OptionRow {
            contract_symbol: Some("AAPL240119C00150000".into()),
            strike: Some(150.0),
            bid: None,
            ask: None,
            last_price: Some(2.50),
            volume: None,
            open_interest: Some(-1), // bad feed value
            implied_volatility: None,
        };

        let quote = convert_row(&row, "AAPL", "2024-01-19", OptionType::Call).unwrap();
        assert_eq!(quote.bid, 0.0);
        assert_eq!(quote.volume, 0);
        assert_eq!(quote.open_interest, 0);
        assert_eq!(quote.implied_vol, 0.0);
        assert_eq!(quote.last, 2.50);
    }

    #[test]
    fn test_convert_row_without_strike() {
        let row = OptionRow {
            contract_symbol: None,
            strike: None,
            bid: None,
            ask: None,
            last_price: None,
            volume: None,
            open_interest: None,
            implied_volatility: None,
        };

        assert!(convert_row(&row, "AAPL", "2024-01-19", OptionType::Call).is_none());
    }

    #[test]
    #[ignore] // Requires network
    fn test_get_spot() {
        let client = YahooClient::new();
        let spot = client.get_spot("SPY").unwrap();
        assert!(spot > 0.0);
    }

    #[test]
    #[ignore] // Requires network
    fn test_get_batch() {
        let client = YahooClient::new();
        let batch = client.get_batch("SPY", None).unwrap();

        assert!(batch.spot > 0.0);
        assert!(!batch.is_empty());
        assert!(batch.calls().count() > 0);
        assert!(batch.puts().count() > 0);
    }
}
