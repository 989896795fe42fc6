//! Internal dataset generation.

use crate::error::EngineError;
use adapter_feeds::ReferenceDataSource;
use chrono::{DateTime, Duration, Utc};
use recon_core::{
    GroundTruthId, InternalDataset, InternalRecord, OptionStyle, OptionType, SimRng, TradeRecord,
};
use tracing::debug;

/// Seconds in the lookback window trades are timestamped within.
const TIMESTAMP_WINDOW_SECS: i64 = 24 * 60 * 60;

/// Quantity draw bounds (inclusive).
const QUANTITY_MIN: i64 = 1;
const QUANTITY_MAX: i64 = 1000;

/// Builds internal datasets of synthetic option trades.
///
/// Construction validates the universe once; generation itself cannot
/// fail. Ground-truth ids are assigned densely from 0 in generation order.
#[derive(Debug)]
pub struct TradeGenerator<F: ReferenceDataSource> {
    symbols: Vec<String>,
    feed: F,
}

impl<F: ReferenceDataSource> TradeGenerator<F> {
    /// Creates a generator sampling from `symbols` and quoting through
    /// `feed`. An empty universe is rejected here, not at generation time.
    pub fn new(symbols: Vec<String>, feed: F) -> Result<Self, EngineError> {
        if symbols.is_empty() {
            return Err(EngineError::EmptyUniverse);
        }
        Ok(Self { symbols, feed })
    }

    /// The universe this generator samples from.
    pub fn symbols(&self) -> &[String] {
        &self.symbols
    }

    /// Generates `n` trades timestamped within the 24 hours before now.
    pub fn generate(&self, n: usize, rng: &mut SimRng) -> InternalDataset {
        self.generate_at(Utc::now(), n, rng)
    }

    /// Generates `n` trades against an explicit generation instant.
    ///
    /// Per record the draw order is fixed: timestamp, symbol,
    /// price/metadata (the feed consumes the rng only on its fallback
    /// path), quantity, style, option type. Reordering these draws changes
    /// the output for a fixed seed and is a breaking change.
    ///
    /// `n = 0` yields an empty dataset.
    pub fn generate_at(&self, now: DateTime<Utc>, n: usize, rng: &mut SimRng) -> InternalDataset {
        let mut records = Vec::with_capacity(n);

        for i in 0..n {
            let offset = rng.int_in(0, TIMESTAMP_WINDOW_SECS - 1);
            let timestamp = now - Duration::seconds(offset);

            let symbol = self.symbols[rng.index(self.symbols.len())].clone();
            let quote = self.feed.fetch(&symbol, rng).into_value();

            let quantity = rng.int_in(QUANTITY_MIN, QUANTITY_MAX) as u32;
            let style = OptionStyle::ALL[rng.index(OptionStyle::ALL.len())];
            let option_type = OptionType::ALL[rng.index(OptionType::ALL.len())];

            records.push(InternalRecord {
                id: GroundTruthId(i as u64),
                trade: TradeRecord {
                    timestamp,
                    symbol,
                    quantity,
                    price: quote.price,
                    style,
                    option_type,
                    instrument_name: quote.name,
                    sector: quote.sector,
                    market_cap: quote.market_cap,
                },
            });
        }

        debug!(count = records.len(), seed = rng.seed(), "internal dataset generated");
        InternalDataset::new(records)
    }
}
