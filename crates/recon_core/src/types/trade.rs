//! Trade record and option classification types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Sentinel used for descriptive fields when the upstream reference source
/// omits them or the lookup fell back.
pub const UNKNOWN_SENTINEL: &str = "Unknown";

/// Rounds a price to two decimal places, the precision every price in the
/// system carries.
#[inline]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Option exercise style.
///
/// # Variants
/// - `European`: exercise only at expiry
/// - `American`: exercise at any time before expiry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OptionStyle {
    /// European style: exercise only at expiry.
    European,
    /// American style: exercise at any time before expiry.
    American,
}

impl OptionStyle {
    /// All styles, in sampling order.
    pub const ALL: [OptionStyle; 2] = [OptionStyle::European, OptionStyle::American];
}

impl fmt::Display for OptionStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionStyle::European => write!(f, "European"),
            OptionStyle::American => write!(f, "American"),
        }
    }
}

/// Option payoff type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OptionType {
    /// Call option.
    Call,
    /// Put option.
    Put,
}

impl OptionType {
    /// All types, in sampling order.
    pub const ALL: [OptionType; 2] = [OptionType::Call, OptionType::Put];
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionType::Call => write!(f, "Call"),
            OptionType::Put => write!(f, "Put"),
        }
    }
}

/// One simulated option trade.
///
/// Invariant: `quantity >= 1` and `price > 0.0`, before and after any
/// discrepancy injection (corruption rules clamp to these floors).
#[derive(Debug, Clone, PartialEq)]
pub struct TradeRecord {
    /// Trade timestamp, within the 24 hours preceding generation time.
    pub timestamp: DateTime<Utc>,
    /// Instrument symbol, non-empty.
    pub symbol: String,
    /// Number of options, at least 1.
    pub quantity: u32,
    /// Strike price, strictly positive, two-decimal rounded.
    pub price: f64,
    /// Exercise style.
    pub style: OptionStyle,
    /// Payoff type.
    pub option_type: OptionType,
    /// Instrument name from reference data, or [`UNKNOWN_SENTINEL`].
    pub instrument_name: String,
    /// Sector from reference data, or [`UNKNOWN_SENTINEL`].
    pub sector: String,
    /// Market capitalisation from reference data, when available.
    pub market_cap: Option<f64>,
}
