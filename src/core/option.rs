//! Option contract basics
//!
//! Option kind and moneyness classification shared across the crate.

use serde::{Deserialize, Serialize};

/// Option type (Call or Put)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OptionType {
    Call,
    Put,
}

impl OptionType {
    /// Payoff direction: +1 for call, -1 for put
    pub fn phi(&self) -> f64 {
        match self {
            OptionType::Call => 1.0,
            OptionType::Put => -1.0,
        }
    }

    /// Intrinsic value at given spot
    pub fn intrinsic(&self, spot: f64, strike: f64) -> f64 {
        match self {
            OptionType::Call => (spot - strike).max(0.0),
            OptionType::Put => (strike - spot).max(0.0),
        }
    }

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            OptionType::Call => "call",
            OptionType::Put => "put",
        }
    }
}

/// Moneyness classification relative to spot
///
/// ATM is a ±2% band around the strike; ITM/OTM are mirrored for puts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Moneyness {
    /// In the money
    Itm,
    /// At the money (within the band)
    Atm,
    /// Out of the money
    Otm,
}

impl Moneyness {
    /// Short label
    pub fn label(&self) -> &'static str {
        match self {
            Moneyness::Itm => "ITM",
            Moneyness::Atm => "ATM",
            Moneyness::Otm => "OTM",
        }
    }

    /// Classify a strike against spot for the given option type
    ///
    /// Returns `None` when spot is unknown (zero or negative) - moneyness is
    /// undefined until a valid spot is available.
    pub fn classify(option_type: OptionType, strike: f64, spot: f64, band: f64) -> Option<Self> {
        if spot <= 0.0 {
            return None;
        }

        let lower = spot * (1.0 - band);
        let upper = spot * (1.0 + band);

        let m = match option_type {
            OptionType::Call => {
                if strike < lower {
                    Moneyness::Itm
                } else if strike > upper {
                    Moneyness::Otm
                } else {
                    Moneyness::Atm
                }
            }
            OptionType::Put => {
                if strike > upper {
                    Moneyness::Itm
                } else if strike < lower {
                    Moneyness::Otm
                } else {
                    Moneyness::Atm
                }
            }
        };

        Some(m)
    }
}
