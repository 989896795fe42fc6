//! File sink for rendered confirmations.

use crate::error::ConfirmError;
use crate::renderer::ConfirmationRenderer;
use recon_core::{ExternalDataset, ExternalRecord};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Writes one confirmation document per external record.
pub struct ConfirmationWriter {
    output_dir: PathBuf,
}

impl ConfirmationWriter {
    /// Creates a writer rooted at `output_dir`. The directory is created
    /// on first write.
    pub fn new(output_dir: impl AsRef<Path>) -> Self {
        Self {
            output_dir: output_dir.as_ref().to_path_buf(),
        }
    }

    /// Output directory documents land in.
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Renders and writes one record, returning the document path.
    pub fn write(
        &self,
        renderer: &ConfirmationRenderer,
        record: &ExternalRecord,
    ) -> Result<PathBuf, ConfirmError> {
        fs::create_dir_all(&self.output_dir)?;

        let document = renderer.render(record);
        let path = self
            .output_dir
            .join(format!("{}.txt", record.id.confirmation_id()));
        fs::write(&path, &document)?;

        info!(
            path = %path.display(),
            trade_id = %record.id.confirmation_id(),
            size = document.len(),
            "confirmation written"
        );
        Ok(path)
    }

    /// Renders and writes every record of a dataset, returning the number
    /// of documents produced.
    pub fn write_all(
        &self,
        renderer: &ConfirmationRenderer,
        dataset: &ExternalDataset,
    ) -> Result<usize, ConfirmError> {
        for record in dataset.iter() {
            self.write(renderer, record)?;
        }
        Ok(dataset.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use recon_core::{GroundTruthId, OptionStyle, OptionType, TradeRecord};

    fn record(id: u64) -> ExternalRecord {
        ExternalRecord {
            id: GroundTruthId(id),
            trade: TradeRecord {
                timestamp: Utc::now(),
                symbol: "MSFT".to_string(),
                quantity: 5,
                price: 380.0,
                style: OptionStyle::American,
                option_type: OptionType::Put,
                instrument_name: "Microsoft Corporation".to_string(),
                sector: "Technology".to_string(),
                market_cap: None,
            },
        }
    }

    #[test]
    fn writes_one_file_named_after_the_trade_id() {
        let dir = tempfile::tempdir().unwrap();
        let writer = ConfirmationWriter::new(dir.path());
        let renderer = ConfirmationRenderer::new("External");

        let path = writer.write(&renderer, &record(12)).unwrap();
        assert_eq!(path.file_name().unwrap(), "00012.txt");
        assert!(fs::read_to_string(path).unwrap().contains("Trade ID: 00012"));
    }

    #[test]
    fn write_all_produces_one_document_per_record() {
        let dir = tempfile::tempdir().unwrap();
        let writer = ConfirmationWriter::new(dir.path());
        let renderer = ConfirmationRenderer::new("External");

        let dataset = ExternalDataset::new((0..4).map(record).collect());
        let written = writer.write_all(&renderer, &dataset).unwrap();
        assert_eq!(written, 4);
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 4);
    }

    #[test]
    fn empty_dataset_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let writer = ConfirmationWriter::new(dir.path().join("confs"));
        let renderer = ConfirmationRenderer::new("External");

        let written = writer.write_all(&renderer, &ExternalDataset::default()).unwrap();
        assert_eq!(written, 0);
        // Directory is only created on an actual write.
        assert!(!dir.path().join("confs").exists());
    }
}
