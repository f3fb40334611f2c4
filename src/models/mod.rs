//! Pricing models
//!
//! Black-Scholes closed forms and the implied-volatility solver built on
//! them.

pub mod black_scholes;
pub mod implied_vol;

pub use black_scholes::{d1, d2, greeks, norm_cdf, norm_pdf, price};
pub use implied_vol::implied_volatility;
