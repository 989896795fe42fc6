//! # recon_core: Data Model for Paired Trade Dataset Simulation
//!
//! Foundation crate of the reconsim workspace, providing:
//! - Trade record and dataset types (`types::trade`, `types::dataset`)
//! - The ground-truth identifier linking external records to their
//!   internal source (`types::dataset::GroundTruthId`)
//! - Discrepancy classification types (`types::dataset`)
//! - The live-vs-fallback result union (`types::sourced`)
//! - A seeded, explicitly threaded random source (`rng::SimRng`)
//!
//! This crate has no dependencies on other reconsim crates. Everything
//! upstream of it (adapters, engine, stores, services) builds on these
//! types.

pub mod rng;
pub mod types;

pub use rng::SimRng;
pub use types::dataset::{
    DiscrepancyAssignment, DiscrepancyClass, ExternalDataset, ExternalRecord, GroundTruthId,
    InternalDataset, InternalRecord, MAX_CONFIRMATION_RECORDS,
};
pub use types::sourced::Sourced;
pub use types::trade::{round2, OptionStyle, OptionType, TradeRecord, UNKNOWN_SENTINEL};
