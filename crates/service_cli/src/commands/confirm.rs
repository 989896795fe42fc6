//! Confirm command: render confirmation documents from an external CSV.

use crate::Result;
use infra_store::DatasetStore;
use service_confirm::{ConfirmationRenderer, ConfirmationWriter};
use std::path::Path;
use tracing::info;

/// Run the confirm command.
pub fn run(input: &Path, output_dir: &Path, party: &str) -> Result<()> {
    let dataset = DatasetStore::read_external_file(input)?;
    info!(
        input = %input.display(),
        records = dataset.len(),
        party,
        "rendering confirmations"
    );

    let renderer = ConfirmationRenderer::new(party);
    let writer = ConfirmationWriter::new(output_dir);
    let written = writer.write_all(&renderer, &dataset)?;

    info!(written, output_dir = %output_dir.display(), "confirmations built");
    Ok(())
}
