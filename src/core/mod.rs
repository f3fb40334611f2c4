//! Core types: errors, option contracts, quotes, and Greeks containers

mod error;
mod greeks;
mod option;
mod quote;

pub use error::{FlowError, FlowResult};
pub use greeks::{GreeksResult, PortfolioGreeks};
pub use option::{Moneyness, OptionType};
pub use quote::{OptionQuote, QuoteBatch, ATM_BAND, CONTRACT_MULTIPLIER};
