//! Core type definitions.
//!
//! This module provides:
//! - `trade`: single trade records and option enums
//! - `dataset`: internal/external datasets and the ground-truth identity key
//! - `sourced`: the live-vs-fallback result union

pub mod dataset;
pub mod sourced;
pub mod trade;
