//! Volume-weighted portfolio Greeks
//!
//! Rolls per-quote Black-Scholes sensitivities into batch-level exposure
//! figures. Missing inputs fall back per the aggregation config: default vol
//! when the quote's IV is unknown, default time to expiry when the expiration
//! string is malformed, and a small floor on time so same-day contracts keep
//! finite Greeks.

use chrono::NaiveDate;

use crate::core::{PortfolioGreeks, QuoteBatch};
use crate::models::black_scholes;

use super::AnalyticsConfig;

/// Aggregate volume-weighted Greeks for a batch
pub fn portfolio_greeks(
    batch: &QuoteBatch,
    config: &AnalyticsConfig,
    as_of: NaiveDate,
) -> PortfolioGreeks {
    let mut portfolio = PortfolioGreeks::default();

    for quote in &batch.quotes {
        let tte = quote
            .time_to_expiry(as_of)
            .unwrap_or(config.default_tte)
            .max(config.min_tte);

        let vol = if quote.implied_vol > 0.0 {
            quote.implied_vol
        } else {
            config.default_vol
        };

        let greeks = black_scholes::greeks(
            batch.spot,
            quote.strike,
            tte,
            config.risk_free_rate,
            vol,
            quote.option_type,
        );

        portfolio.accumulate(&greeks, quote.volume as f64);
    }

    portfolio.finalize(batch.spot, config.contract_multiplier);
    portfolio
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{OptionQuote, OptionType};

    fn batch_with(quotes: Vec<OptionQuote>) -> QuoteBatch {
        let mut batch = QuoteBatch::new("TEST", 150.0);
        for q in quotes {
            batch.add(q);
        }
        batch
    }

    fn call(strike: f64, expiration: &str, volume: u64, iv: f64) -> OptionQuote {
        let mut q = OptionQuote::new("TEST", "TEST-C", expiration, strike, OptionType::Call);
        q.volume = volume;
        q.implied_vol = iv;
        q.last = 1.0;
        q
    }

    #[test]
    fn test_weighted_sums() {
        let as_of = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
        let batch = batch_with(vec![call(155.0, "2026-02-14", 100, 0.25)]);

        let config = AnalyticsConfig::default();
        let portfolio = portfolio_greeks(&batch, &config, as_of);

        // One quote, delta in (0.35, 0.45), weighted by 100 contracts
        assert_eq!(portfolio.num_quotes, 1);
        assert!(portfolio.total_delta > 35.0 && portfolio.total_delta < 45.0);
        assert!(portfolio.total_gamma > 0.0);
        assert!(portfolio.total_theta < 0.0);
        assert!(portfolio.total_vega > 0.0);

        assert!((portfolio.delta_exposure - portfolio.total_delta.abs() * 150.0 * 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_unknown_iv_uses_default() {
        let as_of = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
        let with_iv = batch_with(vec![call(155.0, "2026-02-14", 100, 0.25)]);
        let without_iv = batch_with(vec![call(155.0, "2026-02-14", 100, 0.0)]);

        let config = AnalyticsConfig::default();
        let a = portfolio_greeks(&with_iv, &config, as_of);
        let b = portfolio_greeks(&without_iv, &config, as_of);

        // default_vol is 0.25, so the two batches agree
        assert!((a.total_delta - b.total_delta).abs() < 1e-12);
    }

    #[test]
    fn test_bad_expiration_uses_default_tte() {
        let as_of = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
        let good = batch_with(vec![call(155.0, "2026-02-14", 100, 0.25)]);
        let bad = batch_with(vec![call(155.0, "garbage", 100, 0.25)]);

        let config = AnalyticsConfig::default();
        let a = portfolio_greeks(&good, &config, as_of);
        let b = portfolio_greeks(&bad, &config, as_of);

        // 2026-02-14 is exactly 30 days out, the same as the fallback
        assert!((a.total_delta - b.total_delta).abs() < 1e-12);
    }

    #[test]
    fn test_expired_quote_gets_floored_time() {
        let as_of = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
        let batch = batch_with(vec![call(155.0, "2020-01-17", 100, 0.25)]);

        let config = AnalyticsConfig::default();
        let portfolio = portfolio_greeks(&batch, &config, as_of);

        // Floored at min_tte rather than zeroed out
        assert!(portfolio.total_delta.is_finite());
        assert_eq!(portfolio.num_quotes, 1);
    }

    #[test]
    fn test_empty_batch() {
        let as_of = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
        let batch = QuoteBatch::new("TEST", 150.0);

        let portfolio = portfolio_greeks(&batch, &AnalyticsConfig::default(), as_of);
        assert_eq!(portfolio.num_quotes, 0);
        assert_eq!(portfolio.total_delta, 0.0);
        assert_eq!(portfolio.delta_exposure, 0.0);
    }
}
