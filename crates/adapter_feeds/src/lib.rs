//! # adapter_feeds: External Data Adapters for reconsim
//!
//! Adapter layer between the generation engine and the outside world:
//!
//! - [`reference_data`]: per-symbol quote and metadata lookup
//!   ([`QuoteFeed`]), with a deterministic in-memory table ([`StaticFeed`])
//!   and an always-fallback variant ([`FallbackFeed`])
//! - [`symbol_universe`]: the instrument list trades are sampled from
//!
//! Both upstream boundaries share one failure philosophy: lookups never
//! raise. Any HTTP, parse or missing-data problem is logged and replaced
//! by a documented fallback value, surfaced to callers through
//! [`recon_core::Sourced`] so the two paths stay distinguishable.

pub mod error;
pub mod reference_data;
pub mod symbol_universe;

pub use error::FeedError;
pub use reference_data::{
    FallbackFeed, QuoteFeed, ReferenceDataSource, ReferenceQuote, StaticFeed,
    FALLBACK_PRICE_MAX, FALLBACK_PRICE_MIN,
};
pub use symbol_universe::{builtin_symbols, SymbolUniverse};
