//! # infra_store: Dataset Persistence
//!
//! Writes and reads the two tabular datasets as comma-separated text, one
//! row per record, with a fixed header row. Internal and external files
//! share the same schema except the external file carries one extra
//! `groundTruthId` column, named to avoid collision with any in-domain
//! trade field.
//!
//! Unlike the upstream lookups, persistence failures are never swallowed:
//! every I/O or encoding problem propagates as [`StoreError`].

pub mod dataset_store;
pub mod error;

pub use dataset_store::{DatasetStore, EXTERNAL_FILE, INTERNAL_FILE};
pub use error::StoreError;
