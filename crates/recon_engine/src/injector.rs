//! External dataset derivation with controlled discrepancy injection.

use crate::error::EngineError;
use recon_core::{
    round2, DiscrepancyAssignment, DiscrepancyClass, ExternalDataset, ExternalRecord,
    InternalDataset, SimRng, TradeRecord,
};
use tracing::debug;

/// Quantity drift bounds (inclusive) and floor.
const QUANTITY_DELTA_MIN: i64 = -5;
const QUANTITY_DELTA_MAX: i64 = 5;
const QUANTITY_FLOOR: u32 = 1;

/// Price drift bounds and floor.
const PRICE_DELTA_MIN: f64 = -5.0;
const PRICE_DELTA_MAX: f64 = 5.0;
const PRICE_FLOOR: f64 = 1.0;

/// Derives external datasets by copying the internal dataset and
/// corrupting a target fraction of records.
///
/// Selected records receive exactly one discrepancy class; unselected
/// records stay byte-identical to their internal counterparts. The
/// ground-truth id travels with every record and is never corrupted.
/// Corruption draws are redrawn when a draw would leave the record
/// unchanged (a zero delta, a delta swallowed by the floor clamp, or a
/// typo letter equal to the existing character), so the number of
/// differing records equals `round(error_rate × len)` exactly.
pub struct DiscrepancyInjector {
    error_rate: f64,
    shuffle: bool,
}

impl DiscrepancyInjector {
    /// Creates an injector. `error_rate` outside `[0, 1]` is rejected here
    /// rather than clamped.
    pub fn new(error_rate: f64, shuffle: bool) -> Result<Self, EngineError> {
        if !(0.0..=1.0).contains(&error_rate) || error_rate.is_nan() {
            return Err(EngineError::InvalidErrorRate(error_rate));
        }
        Ok(Self { error_rate, shuffle })
    }

    /// The configured corruption fraction.
    pub fn error_rate(&self) -> f64 {
        self.error_rate
    }

    /// Derives the external dataset. The internal dataset is read-only;
    /// every external record is a fresh copy.
    pub fn inject(&self, internal: &InternalDataset, rng: &mut SimRng) -> ExternalDataset {
        let mut records: Vec<ExternalRecord> = internal
            .iter()
            .map(|r| ExternalRecord {
                id: r.id,
                trade: r.trade.clone(),
            })
            .collect();

        if self.shuffle {
            rng.shuffle(&mut records);
        }

        let error_count = (self.error_rate * internal.len() as f64).round() as usize;
        let mut assignment = DiscrepancyAssignment::new();
        for position in rng.sample_indices(internal.len(), error_count) {
            let id = internal.records()[position].id;
            let class = DiscrepancyClass::ALL[rng.index(DiscrepancyClass::ALL.len())];
            assignment.assign(id, class);
        }

        for record in &mut records {
            if let Some(class) = assignment.class_of(record.id) {
                corrupt(&mut record.trade, class, rng);
            }
        }

        let counts = assignment.class_counts();
        debug!(
            total = internal.len(),
            corrupted = assignment.len(),
            quantity = counts[0],
            price = counts[1],
            symbol_typo = counts[2],
            "external dataset derived"
        );

        ExternalDataset::new(records)
    }
}

/// Applies one discrepancy class to a trade, preserving the record
/// invariants (`quantity >= 1`, `price > 0`).
fn corrupt(trade: &mut TradeRecord, class: DiscrepancyClass, rng: &mut SimRng) {
    match class {
        DiscrepancyClass::Quantity => {
            loop {
                let delta = rng.int_in(QUANTITY_DELTA_MIN, QUANTITY_DELTA_MAX);
                let drifted = (trade.quantity as i64 + delta).max(QUANTITY_FLOOR as i64) as u32;
                if drifted != trade.quantity {
                    trade.quantity = drifted;
                    break;
                }
            }
        }
        DiscrepancyClass::Price => {
            loop {
                let delta = rng.uniform(PRICE_DELTA_MIN, PRICE_DELTA_MAX);
                let drifted = round2(trade.price + delta).max(PRICE_FLOOR);
                if drifted != trade.price {
                    trade.price = drifted;
                    break;
                }
            }
        }
        DiscrepancyClass::SymbolTypo => {
            let mut chars: Vec<char> = trade.symbol.chars().collect();
            if chars.len() > 1 {
                // Same-length replacement; single-char symbols are the only
                // case where the length may change (by appending).
                loop {
                    let position = rng.index(chars.len());
                    let letter = rng.letter();
                    if chars[position] != letter {
                        chars[position] = letter;
                        break;
                    }
                }
            } else {
                chars.push(rng.letter());
            }
            trade.symbol = chars.into_iter().collect();
        }
    }
}
