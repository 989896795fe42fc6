//! The instrument universe trades are sampled from.
//!
//! Normally loaded from a remote constituent list (delimited text with a
//! `Symbol` column); when that fetch fails in any way, a fixed built-in
//! 10-symbol list takes over. The fallback is a fully supported path; the
//! rest of the system behaves identically with either list.

use crate::error::FeedError;
use recon_core::Sourced;
use tracing::warn;

/// Default constituent list endpoint (CSV with a `Symbol` column).
const DEFAULT_UNIVERSE_URL: &str =
    "https://raw.githubusercontent.com/datasets/s-and-p-500-companies/main/data/constituents.csv";

/// Built-in fallback universe.
///
/// Separators already follow the quote-lookup convention (`-`, not `.`).
const FALLBACK_SYMBOLS: [&str; 10] = [
    "AAPL", "GOOGL", "TSLA", "MSFT", "AMZN", "NVDA", "META", "AVGO", "BRK-B", "GOOG",
];

/// Returns the built-in fallback universe as owned strings.
pub fn builtin_symbols() -> Vec<String> {
    FALLBACK_SYMBOLS.iter().map(|s| s.to_string()).collect()
}

/// Replaces class-share dots with dashes so constituent-list symbols match
/// the quote-lookup convention (`BRK.B` → `BRK-B`).
fn normalise(symbol: &str) -> String {
    symbol.replace('.', "-")
}

/// Loader for the symbol universe.
pub struct SymbolUniverse {
    client: reqwest::blocking::Client,
    url: String,
}

impl SymbolUniverse {
    /// Creates a loader against the default constituent list.
    pub fn new() -> Self {
        Self::with_url(DEFAULT_UNIVERSE_URL)
    }

    /// Creates a loader against a custom constituent list URL.
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            url: url.into(),
        }
    }

    /// Loads the universe. Never fails: any fetch or parse problem is
    /// logged and the built-in list is returned as `Sourced::Fallback`.
    /// The result is non-empty on both paths.
    pub fn load(&self) -> Sourced<Vec<String>> {
        match self.try_load() {
            Ok(symbols) => Sourced::Live(symbols),
            Err(err) => {
                warn!(url = %self.url, error = %err, "universe fetch failed, using built-in list");
                Sourced::Fallback {
                    value: builtin_symbols(),
                    reason: err.to_string(),
                }
            }
        }
    }

    fn try_load(&self) -> Result<Vec<String>, FeedError> {
        let body = self
            .client
            .get(&self.url)
            .send()?
            .error_for_status()?
            .text()?;
        parse_symbol_column(&body)
    }
}

impl Default for SymbolUniverse {
    fn default() -> Self {
        Self::new()
    }
}

/// Extracts and normalises the `Symbol` column from a delimited payload.
fn parse_symbol_column(body: &str) -> Result<Vec<String>, FeedError> {
    let mut reader = csv::Reader::from_reader(body.as_bytes());
    let headers = reader.headers()?.clone();
    let symbol_col = headers
        .iter()
        .position(|h| h == "Symbol")
        .ok_or(FeedError::MissingField("Symbol"))?;

    let mut symbols = Vec::new();
    for row in reader.records() {
        let row = row?;
        if let Some(raw) = row.get(symbol_col) {
            if !raw.is_empty() {
                symbols.push(normalise(raw));
            }
        }
    }

    if symbols.is_empty() {
        return Err(FeedError::EmptyPayload);
    }
    Ok(symbols)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_list_is_ten_normalised_symbols() {
        let symbols = builtin_symbols();
        assert_eq!(symbols.len(), 10);
        assert!(symbols.contains(&"BRK-B".to_string()));
        assert!(symbols.iter().all(|s| !s.contains('.')));
    }

    #[test]
    fn symbol_column_is_extracted_and_normalised() {
        let body = "Symbol,Name,Sector\nAAPL,Apple Inc.,Technology\nBRK.B,Berkshire Hathaway,Financials\n";
        let symbols = parse_symbol_column(body).unwrap();
        assert_eq!(symbols, vec!["AAPL".to_string(), "BRK-B".to_string()]);
    }

    #[test]
    fn missing_symbol_column_is_classified() {
        let body = "Ticker,Name\nAAPL,Apple Inc.\n";
        let err = parse_symbol_column(body).unwrap_err();
        assert!(matches!(err, FeedError::MissingField("Symbol")));
    }

    #[test]
    fn header_only_payload_is_classified_as_empty() {
        let err = parse_symbol_column("Symbol,Name\n").unwrap_err();
        assert!(matches!(err, FeedError::EmptyPayload));
    }

    #[test]
    fn unreachable_endpoint_falls_back_to_the_builtin_list() {
        let universe = SymbolUniverse::with_url("http://127.0.0.1:9/constituents.csv");
        let loaded = universe.load();
        assert!(loaded.is_fallback());
        assert_eq!(loaded.value().len(), 10);
    }
}
