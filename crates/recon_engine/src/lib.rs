//! # recon_engine: Generation and Corruption Pipeline
//!
//! The core of reconsim:
//!
//! - [`TradeGenerator`]: builds the internal dataset by sampling symbols
//!   from the universe and quotes from a [`ReferenceDataSource`]
//! - [`DiscrepancyInjector`]: derives the external dataset, corrupting a
//!   target fraction of records with exactly one discrepancy class each
//!   while the ground-truth id travels untouched
//!
//! Both components take an explicit [`recon_core::SimRng`] handle; a fixed
//! seed against a deterministic reference source reproduces both datasets
//! byte-for-byte.
//!
//! [`ReferenceDataSource`]: adapter_feeds::ReferenceDataSource

pub mod error;
pub mod generator;
pub mod injector;

pub use error::EngineError;
pub use generator::TradeGenerator;
pub use injector::DiscrepancyInjector;
