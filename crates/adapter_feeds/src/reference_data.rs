//! Per-symbol quote and metadata lookup.
//!
//! Three providers implement [`ReferenceDataSource`]:
//!
//! - [`QuoteFeed`]: one blocking HTTP call per symbol against a Yahoo-style
//!   quote endpoint
//! - [`StaticFeed`]: fixed in-memory quote table, no network, no rng
//!   consumption, for deterministic runs and test stubbing
//! - [`FallbackFeed`]: always takes the fallback path
//!
//! A failed lookup is swallowed: the provider logs a diagnostic and
//! returns a fallback quote with a price drawn uniformly from the fixed
//! plausible band [`FALLBACK_PRICE_MIN`, `FALLBACK_PRICE_MAX`) and
//! `"Unknown"` descriptive fields.

use crate::error::FeedError;
use recon_core::{round2, SimRng, Sourced, UNKNOWN_SENTINEL};
use std::collections::HashMap;
use tracing::warn;

/// Lower bound of the fallback price band (inclusive).
pub const FALLBACK_PRICE_MIN: f64 = 100.0;

/// Upper bound of the fallback price band (exclusive).
pub const FALLBACK_PRICE_MAX: f64 = 1000.0;

/// Default quote endpoint. One GET per symbol, `?symbols=<sym>` appended.
const DEFAULT_QUOTE_URL: &str = "https://query1.finance.yahoo.com/v7/finance/quote";

/// Best-effort quote and descriptive metadata for one symbol.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceQuote {
    /// Most recent available close price, two-decimal rounded, > 0.
    pub price: f64,
    /// Instrument name, or `"Unknown"` when the upstream omits it.
    pub name: String,
    /// Sector, or `"Unknown"` when the upstream omits it.
    pub sector: String,
    /// Market capitalisation, when the upstream provides one.
    pub market_cap: Option<f64>,
}

impl ReferenceQuote {
    /// Builds the fallback quote: a price drawn uniformly from the fixed
    /// plausible band, sentinel descriptive fields, no market cap.
    pub fn fallback(rng: &mut SimRng) -> Self {
        Self {
            price: round2(rng.uniform(FALLBACK_PRICE_MIN, FALLBACK_PRICE_MAX)),
            name: UNKNOWN_SENTINEL.to_string(),
            sector: UNKNOWN_SENTINEL.to_string(),
            market_cap: None,
        }
    }
}

/// Trait for reference data providers.
///
/// Lookups never fail: any upstream problem yields
/// `Sourced::Fallback`. The rng handle is consumed only on the fallback
/// path (for the substitute price draw), which is why it is threaded
/// through the call.
pub trait ReferenceDataSource: Send + Sync {
    /// Fetches quote and metadata for one symbol.
    fn fetch(&self, symbol: &str, rng: &mut SimRng) -> Sourced<ReferenceQuote>;
}

/// Live quote lookup over blocking HTTP.
pub struct QuoteFeed {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl QuoteFeed {
    /// Creates a feed against the default quote endpoint.
    pub fn new() -> Self {
        Self::with_url(DEFAULT_QUOTE_URL)
    }

    /// Creates a feed against a custom quote endpoint.
    pub fn with_url(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Performs the HTTP lookup and field extraction. Every failure mode
    /// (HTTP, empty result set, missing price) is classified; metadata
    /// fields are tolerated missing independently of one another.
    fn try_fetch(&self, symbol: &str) -> Result<ReferenceQuote, FeedError> {
        let url = format!("{}?symbols={}", self.base_url, symbol);
        let payload: serde_json::Value = self
            .client
            .get(&url)
            .send()?
            .error_for_status()?
            .json()
            .map_err(|e| FeedError::Parse(e.to_string()))?;

        let result = payload
            .pointer("/quoteResponse/result/0")
            .ok_or(FeedError::EmptyPayload)?;

        let price = result
            .get("regularMarketPrice")
            .or_else(|| result.get("regularMarketPreviousClose"))
            .and_then(|v| v.as_f64())
            .ok_or(FeedError::MissingField("regularMarketPrice"))?;

        let name = result
            .get("longName")
            .or_else(|| result.get("shortName"))
            .and_then(|v| v.as_str())
            .unwrap_or(UNKNOWN_SENTINEL)
            .to_string();

        let sector = result
            .get("sector")
            .and_then(|v| v.as_str())
            .unwrap_or(UNKNOWN_SENTINEL)
            .to_string();

        let market_cap = result.get("marketCap").and_then(|v| v.as_f64());

        Ok(ReferenceQuote {
            price: round2(price),
            name,
            sector,
            market_cap,
        })
    }
}

impl Default for QuoteFeed {
    fn default() -> Self {
        Self::new()
    }
}

impl ReferenceDataSource for QuoteFeed {
    fn fetch(&self, symbol: &str, rng: &mut SimRng) -> Sourced<ReferenceQuote> {
        match self.try_fetch(symbol) {
            Ok(quote) => Sourced::Live(quote),
            Err(err) => {
                warn!(symbol, error = %err, "quote lookup failed, using fallback");
                Sourced::Fallback {
                    value: ReferenceQuote::fallback(rng),
                    reason: err.to_string(),
                }
            }
        }
    }
}

/// Fixed in-memory quote table.
///
/// Never touches the network and never consumes the rng, so a pipeline run
/// over a `StaticFeed` is fully determined by the seed. Symbols absent
/// from the table get a fixed default quote rather than a random one.
#[derive(Debug)]
pub struct StaticFeed {
    quotes: HashMap<String, ReferenceQuote>,
    default_price: f64,
}

impl StaticFeed {
    /// Price handed out for symbols absent from the table.
    pub const DEFAULT_PRICE: f64 = 250.0;

    /// Creates a feed pre-loaded with quotes for the built-in symbol
    /// universe.
    pub fn new() -> Self {
        let mut feed = Self {
            quotes: HashMap::new(),
            default_price: Self::DEFAULT_PRICE,
        };
        for (symbol, price, name, sector, market_cap) in [
            ("AAPL", 185.00, "Apple Inc.", "Technology", Some(2.9e12)),
            ("GOOGL", 140.00, "Alphabet Inc.", "Communication Services", Some(1.8e12)),
            ("TSLA", 248.50, "Tesla, Inc.", "Consumer Cyclical", Some(7.9e11)),
            ("MSFT", 380.00, "Microsoft Corporation", "Technology", Some(2.8e12)),
            ("AMZN", 155.20, "Amazon.com, Inc.", "Consumer Cyclical", Some(1.6e12)),
            ("NVDA", 495.00, "NVIDIA Corporation", "Technology", Some(1.2e12)),
            ("META", 355.60, "Meta Platforms, Inc.", "Communication Services", Some(9.1e11)),
            ("AVGO", 112.30, "Broadcom Inc.", "Technology", Some(5.2e11)),
            ("BRK-B", 362.10, "Berkshire Hathaway Inc.", "Financial Services", Some(7.8e11)),
            ("GOOG", 141.50, "Alphabet Inc.", "Communication Services", Some(1.8e12)),
        ] {
            feed.insert(symbol, price, name, sector, market_cap);
        }
        feed
    }

    /// Adds or replaces one quote.
    pub fn insert(
        &mut self,
        symbol: impl Into<String>,
        price: f64,
        name: impl Into<String>,
        sector: impl Into<String>,
        market_cap: Option<f64>,
    ) {
        self.quotes.insert(
            symbol.into(),
            ReferenceQuote {
                price: round2(price),
                name: name.into(),
                sector: sector.into(),
                market_cap,
            },
        );
    }

    /// Creates an empty table with a custom default price; useful in tests
    /// that want one fixed quote for every symbol.
    pub fn with_default_price(default_price: f64) -> Self {
        Self {
            quotes: HashMap::new(),
            default_price: round2(default_price),
        }
    }
}

impl Default for StaticFeed {
    fn default() -> Self {
        Self::new()
    }
}

impl ReferenceDataSource for StaticFeed {
    fn fetch(&self, symbol: &str, _rng: &mut SimRng) -> Sourced<ReferenceQuote> {
        match self.quotes.get(symbol) {
            Some(quote) => Sourced::Live(quote.clone()),
            None => Sourced::Live(ReferenceQuote {
                price: self.default_price,
                name: UNKNOWN_SENTINEL.to_string(),
                sector: UNKNOWN_SENTINEL.to_string(),
                market_cap: None,
            }),
        }
    }
}

/// Provider that always takes the fallback path.
///
/// Keeps the fallback contract a first-class, directly exercisable mode
/// rather than something only reachable through induced network failures.
pub struct FallbackFeed;

impl ReferenceDataSource for FallbackFeed {
    fn fetch(&self, _symbol: &str, rng: &mut SimRng) -> Sourced<ReferenceQuote> {
        Sourced::Fallback {
            value: ReferenceQuote::fallback(rng),
            reason: "fallback-only provider".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_feed_is_deterministic_and_rng_free() {
        let feed = StaticFeed::new();
        let mut rng = SimRng::from_seed(42);
        let before = rng.uniform(0.0, 1.0);

        let mut rng = SimRng::from_seed(42);
        let a = feed.fetch("AAPL", &mut rng);
        let b = feed.fetch("AAPL", &mut rng);
        assert_eq!(a.value(), b.value());
        assert!(!a.is_fallback());

        // No draws consumed by the feed.
        assert_eq!(rng.uniform(0.0, 1.0), before);
    }

    #[test]
    fn static_feed_covers_unknown_symbols_with_the_default_quote() {
        let feed = StaticFeed::new();
        let mut rng = SimRng::from_seed(0);
        let quote = feed.fetch("ZZZZ", &mut rng).into_value();
        assert_eq!(quote.price, StaticFeed::DEFAULT_PRICE);
        assert_eq!(quote.name, UNKNOWN_SENTINEL);
        assert_eq!(quote.market_cap, None);
    }

    #[test]
    fn fallback_quote_stays_in_the_plausible_band() {
        let mut rng = SimRng::from_seed(9);
        for _ in 0..200 {
            let quote = ReferenceQuote::fallback(&mut rng);
            assert!(quote.price >= FALLBACK_PRICE_MIN);
            // round2 can nudge a draw up to the band's open bound.
            assert!(quote.price <= FALLBACK_PRICE_MAX);
            assert_eq!(quote.sector, UNKNOWN_SENTINEL);
            assert_eq!(quote.market_cap, None);
        }
    }

    #[test]
    fn fallback_feed_marks_its_path() {
        let mut rng = SimRng::from_seed(1);
        let quote = FallbackFeed.fetch("AAPL", &mut rng);
        assert!(quote.is_fallback());
        assert!(quote.fallback_reason().is_some());
    }

    #[test]
    fn unreachable_quote_feed_falls_back_instead_of_failing() {
        // Port 9 on localhost: nothing listens there.
        let feed = QuoteFeed::with_url("http://127.0.0.1:9/quote");
        let mut rng = SimRng::from_seed(5);
        let quote = feed.fetch("AAPL", &mut rng);
        assert!(quote.is_fallback());
        let value = quote.value();
        assert!(value.price >= FALLBACK_PRICE_MIN);
        assert_eq!(value.name, UNKNOWN_SENTINEL);
    }
}
