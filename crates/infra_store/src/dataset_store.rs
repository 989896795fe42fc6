//! CSV read/write for the paired datasets.

use crate::error::StoreError;
use chrono::{DateTime, Utc};
use recon_core::{
    ExternalDataset, ExternalRecord, GroundTruthId, InternalDataset, InternalRecord, OptionStyle,
    OptionType, TradeRecord,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Internal dataset file name.
pub const INTERNAL_FILE: &str = "internal_trades.csv";

/// External dataset file name.
pub const EXTERNAL_FILE: &str = "external_trades.csv";

/// Header row shared by both files (internal order).
const TRADE_HEADERS: [&str; 9] = [
    "timestamp",
    "symbol",
    "quantity",
    "price",
    "style",
    "optionType",
    "instrumentName",
    "sector",
    "marketCap",
];

/// Ground-truth column name, distinct from every in-domain trade field.
const GROUND_TRUTH_HEADER: &str = "groundTruthId";

/// One persisted trade row. Field order is column order; renames pin the
/// exact header names of the stable external format.
#[derive(Debug, Serialize, Deserialize)]
struct TradeRow {
    timestamp: DateTime<Utc>,
    symbol: String,
    quantity: u32,
    price: f64,
    style: OptionStyle,
    #[serde(rename = "optionType")]
    option_type: OptionType,
    #[serde(rename = "instrumentName")]
    instrument_name: String,
    sector: String,
    #[serde(rename = "marketCap")]
    market_cap: Option<f64>,
}

impl From<&TradeRecord> for TradeRow {
    fn from(trade: &TradeRecord) -> Self {
        Self {
            timestamp: trade.timestamp,
            symbol: trade.symbol.clone(),
            quantity: trade.quantity,
            price: trade.price,
            style: trade.style,
            option_type: trade.option_type,
            instrument_name: trade.instrument_name.clone(),
            sector: trade.sector.clone(),
            market_cap: trade.market_cap,
        }
    }
}

impl From<TradeRow> for TradeRecord {
    fn from(row: TradeRow) -> Self {
        Self {
            timestamp: row.timestamp,
            symbol: row.symbol,
            quantity: row.quantity,
            price: row.price,
            style: row.style,
            option_type: row.option_type,
            instrument_name: row.instrument_name,
            sector: row.sector,
            market_cap: row.market_cap,
        }
    }
}

/// One persisted external row: the trade columns plus the ground-truth
/// column, stored as a plain integer (zero-padding is a rendering concern
/// of the confirmation layer).
#[derive(Debug, Serialize, Deserialize)]
struct ExternalRow {
    timestamp: DateTime<Utc>,
    symbol: String,
    quantity: u32,
    price: f64,
    style: OptionStyle,
    #[serde(rename = "optionType")]
    option_type: OptionType,
    #[serde(rename = "instrumentName")]
    instrument_name: String,
    sector: String,
    #[serde(rename = "marketCap")]
    market_cap: Option<f64>,
    #[serde(rename = "groundTruthId")]
    ground_truth_id: u64,
}

impl From<&ExternalRecord> for ExternalRow {
    fn from(record: &ExternalRecord) -> Self {
        let trade = &record.trade;
        Self {
            timestamp: trade.timestamp,
            symbol: trade.symbol.clone(),
            quantity: trade.quantity,
            price: trade.price,
            style: trade.style,
            option_type: trade.option_type,
            instrument_name: trade.instrument_name.clone(),
            sector: trade.sector.clone(),
            market_cap: trade.market_cap,
            ground_truth_id: record.id.0,
        }
    }
}

impl From<ExternalRow> for ExternalRecord {
    fn from(row: ExternalRow) -> Self {
        Self {
            id: GroundTruthId(row.ground_truth_id),
            trade: TradeRecord {
                timestamp: row.timestamp,
                symbol: row.symbol,
                quantity: row.quantity,
                price: row.price,
                style: row.style,
                option_type: row.option_type,
                instrument_name: row.instrument_name,
                sector: row.sector,
                market_cap: row.market_cap,
            },
        }
    }
}

/// CSV persistence for the paired datasets.
///
/// Writes are wholesale: each write truncates and rewrites its file, so a
/// later run overwrites the previous datasets entirely.
pub struct DatasetStore {
    data_dir: PathBuf,
}

impl DatasetStore {
    /// Creates a store rooted at `data_dir`. The directory is created on
    /// first write.
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
        }
    }

    /// Path of the internal dataset file.
    pub fn internal_path(&self) -> PathBuf {
        self.data_dir.join(INTERNAL_FILE)
    }

    /// Path of the external dataset file.
    pub fn external_path(&self) -> PathBuf {
        self.data_dir.join(EXTERNAL_FILE)
    }

    /// Writes the internal dataset, returning the file path.
    pub fn write_internal(&self, dataset: &InternalDataset) -> Result<PathBuf, StoreError> {
        let path = self.internal_path();
        fs::create_dir_all(&self.data_dir)?;

        // Headers are written explicitly so an empty dataset still
        // produces a header-only file.
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(&path)?;
        writer.write_record(TRADE_HEADERS)?;
        for record in dataset.iter() {
            writer.serialize(TradeRow::from(&record.trade))?;
        }
        writer.flush()?;

        info!(path = %path.display(), rows = dataset.len(), "internal dataset written");
        Ok(path)
    }

    /// Writes the external dataset, returning the file path.
    pub fn write_external(&self, dataset: &ExternalDataset) -> Result<PathBuf, StoreError> {
        let path = self.external_path();
        fs::create_dir_all(&self.data_dir)?;

        let mut headers: Vec<&str> = TRADE_HEADERS.to_vec();
        headers.push(GROUND_TRUTH_HEADER);

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(&path)?;
        writer.write_record(&headers)?;
        for record in dataset.iter() {
            writer.serialize(ExternalRow::from(record))?;
        }
        writer.flush()?;

        info!(path = %path.display(), rows = dataset.len(), "external dataset written");
        Ok(path)
    }

    /// Reads the internal dataset back, reassigning dense ids from row
    /// order (the internal file stores no id column).
    pub fn read_internal(&self) -> Result<InternalDataset, StoreError> {
        let mut reader = csv::Reader::from_path(self.internal_path())?;
        let mut records = Vec::new();
        for (position, row) in reader.deserialize::<TradeRow>().enumerate() {
            records.push(InternalRecord {
                id: GroundTruthId(position as u64),
                trade: row?.into(),
            });
        }
        Ok(InternalDataset::new(records))
    }

    /// Reads the external dataset back, ids included.
    pub fn read_external(&self) -> Result<ExternalDataset, StoreError> {
        Self::read_external_file(self.external_path())
    }

    /// Reads an external dataset from an arbitrary file path.
    pub fn read_external_file(path: impl AsRef<Path>) -> Result<ExternalDataset, StoreError> {
        let mut reader = csv::Reader::from_path(path)?;
        let mut records = Vec::new();
        for row in reader.deserialize::<ExternalRow>() {
            records.push(row?.into());
        }
        Ok(ExternalDataset::new(records))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn trade(symbol: &str, quantity: u32, price: f64) -> TradeRecord {
        TradeRecord {
            timestamp: Utc.with_ymd_and_hms(2026, 8, 29, 14, 30, 0).unwrap(),
            symbol: symbol.to_string(),
            quantity,
            price,
            style: OptionStyle::American,
            option_type: OptionType::Put,
            instrument_name: "Apple Inc.".to_string(),
            sector: "Technology".to_string(),
            market_cap: Some(2.9e12),
        }
    }

    #[test]
    fn internal_roundtrip_preserves_records_and_ids() {
        let dir = tempfile::tempdir().unwrap();
        let store = DatasetStore::new(dir.path());

        let dataset = InternalDataset::new(vec![
            InternalRecord { id: GroundTruthId(0), trade: trade("AAPL", 10, 185.0) },
            InternalRecord { id: GroundTruthId(1), trade: trade("MSFT", 20, 380.5) },
        ]);

        store.write_internal(&dataset).unwrap();
        let loaded = store.read_internal().unwrap();
        assert_eq!(loaded, dataset);
    }

    #[test]
    fn external_roundtrip_preserves_shuffled_ids() {
        let dir = tempfile::tempdir().unwrap();
        let store = DatasetStore::new(dir.path());

        // Shuffled order: ids do not match row positions.
        let dataset = ExternalDataset::new(vec![
            ExternalRecord { id: GroundTruthId(1), trade: trade("MSFT", 20, 380.5) },
            ExternalRecord { id: GroundTruthId(0), trade: trade("AAPX", 12, 183.1) },
        ]);

        store.write_external(&dataset).unwrap();
        let loaded = store.read_external().unwrap();
        assert_eq!(loaded, dataset);
    }

    #[test]
    fn header_rows_use_the_documented_column_names() {
        let dir = tempfile::tempdir().unwrap();
        let store = DatasetStore::new(dir.path());

        store.write_internal(&InternalDataset::default()).unwrap();
        store.write_external(&ExternalDataset::default()).unwrap();

        let internal = fs::read_to_string(store.internal_path()).unwrap();
        assert_eq!(
            internal.lines().next().unwrap(),
            "timestamp,symbol,quantity,price,style,optionType,instrumentName,sector,marketCap"
        );

        let external = fs::read_to_string(store.external_path()).unwrap();
        assert_eq!(
            external.lines().next().unwrap(),
            "timestamp,symbol,quantity,price,style,optionType,instrumentName,sector,marketCap,groundTruthId"
        );
        // Empty datasets still produce header-only files.
        assert_eq!(external.lines().count(), 1);
    }

    #[test]
    fn missing_market_cap_persists_as_an_empty_field() {
        let dir = tempfile::tempdir().unwrap();
        let store = DatasetStore::new(dir.path());

        let mut record = trade("GOOG", 5, 141.5);
        record.market_cap = None;
        let dataset = InternalDataset::new(vec![InternalRecord {
            id: GroundTruthId(0),
            trade: record,
        }]);

        store.write_internal(&dataset).unwrap();
        let text = fs::read_to_string(store.internal_path()).unwrap();
        assert!(text.lines().nth(1).unwrap().ends_with("Technology,"));

        let loaded = store.read_internal().unwrap();
        assert_eq!(loaded.records()[0].trade.market_cap, None);
    }

    #[test]
    fn rewrite_replaces_the_previous_run_wholesale() {
        let dir = tempfile::tempdir().unwrap();
        let store = DatasetStore::new(dir.path());

        let big = InternalDataset::new(
            (0..10)
                .map(|i| InternalRecord {
                    id: GroundTruthId(i),
                    trade: trade("AAPL", 1 + i as u32, 185.0),
                })
                .collect(),
        );
        let small = InternalDataset::new(vec![InternalRecord {
            id: GroundTruthId(0),
            trade: trade("TSLA", 3, 248.5),
        }]);

        store.write_internal(&big).unwrap();
        store.write_internal(&small).unwrap();
        assert_eq!(store.read_internal().unwrap(), small);
    }

    #[test]
    fn reading_a_missing_file_propagates_the_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = DatasetStore::new(dir.path().join("nowhere"));
        assert!(store.read_internal().is_err());
    }
}
