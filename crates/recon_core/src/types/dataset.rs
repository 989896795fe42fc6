//! Dataset containers and the ground-truth identity key.
//!
//! An [`InternalDataset`] is built once per generation run and never
//! mutated afterwards. The derived [`ExternalDataset`] is constructed by
//! copying and perturbing, never by mutating internal records in place.
//! [`GroundTruthId`] is the sole channel linking a possibly-corrupted
//! external record back to its uncorrupted internal source.

use crate::types::trade::TradeRecord;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Largest dataset for which [`GroundTruthId::confirmation_id`] stays
/// within its 5-digit zero-padded format. Larger ids render with natural
/// width rather than truncating; this constant documents the guarantee.
pub const MAX_CONFIRMATION_RECORDS: u64 = 100_000;

/// Immutable sequential identifier assigned at generation time.
///
/// Dense and zero-based: a dataset of `n` records carries exactly the ids
/// `0..n` in generation order. The id travels with its record through
/// shuffling and corruption and is itself never corrupted; it is the
/// answer key for any downstream reconciliation checker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroundTruthId(pub u64);

impl GroundTruthId {
    /// Renders the id as the zero-padded 5-digit opaque identifier the
    /// confirmation layer expects. Ids at or beyond
    /// [`MAX_CONFIRMATION_RECORDS`] widen instead of truncating.
    pub fn confirmation_id(&self) -> String {
        format!("{:05}", self.0)
    }
}

impl fmt::Display for GroundTruthId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One internal record: a trade plus its identity key.
#[derive(Debug, Clone, PartialEq)]
pub struct InternalRecord {
    /// Identity key, equal to the record's 0-based generation position.
    pub id: GroundTruthId,
    /// The trade itself.
    pub trade: TradeRecord,
}

/// Ordered sequence of internal records, in generation order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InternalDataset {
    records: Vec<InternalRecord>,
}

impl InternalDataset {
    /// Wraps an ordered record sequence. Callers are responsible for the
    /// dense-id invariant; the engine's trade generator is the canonical
    /// producer.
    pub fn new(records: Vec<InternalRecord>) -> Self {
        Self { records }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when the dataset holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in generation order.
    pub fn records(&self) -> &[InternalRecord] {
        &self.records
    }

    /// Iterator over records in generation order.
    pub fn iter(&self) -> impl Iterator<Item = &InternalRecord> {
        self.records.iter()
    }
}

/// One external record: a possibly-corrupted copy of an internal trade,
/// still carrying the original uncorrupted [`GroundTruthId`].
#[derive(Debug, Clone, PartialEq)]
pub struct ExternalRecord {
    /// Identity key of the internal record this one derives from.
    pub id: GroundTruthId,
    /// The trade, possibly perturbed by exactly one discrepancy class.
    pub trade: TradeRecord,
}

/// Ordered sequence of external records. Order may be shuffled
/// independently of id order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExternalDataset {
    records: Vec<ExternalRecord>,
}

impl ExternalDataset {
    /// Wraps an ordered record sequence.
    pub fn new(records: Vec<ExternalRecord>) -> Self {
        Self { records }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when the dataset holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in persisted order.
    pub fn records(&self) -> &[ExternalRecord] {
        &self.records
    }

    /// Iterator over records in persisted order.
    pub fn iter(&self) -> impl Iterator<Item = &ExternalRecord> {
        self.records.iter()
    }
}

/// The single kind of corruption applied to a selected record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscrepancyClass {
    /// Integer drift on the quantity field, clamped at 1.
    Quantity,
    /// Real drift on the price field, clamped at 1.0.
    Price,
    /// One-character typo in the symbol.
    SymbolTypo,
}

impl DiscrepancyClass {
    /// All classes, in sampling order.
    pub const ALL: [DiscrepancyClass; 3] = [
        DiscrepancyClass::Quantity,
        DiscrepancyClass::Price,
        DiscrepancyClass::SymbolTypo,
    ];
}

impl fmt::Display for DiscrepancyClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiscrepancyClass::Quantity => write!(f, "Quantity"),
            DiscrepancyClass::Price => write!(f, "Price"),
            DiscrepancyClass::SymbolTypo => write!(f, "SymbolTypo"),
        }
    }
}

/// Mapping from a subset of ids to the one discrepancy class each selected
/// record receives. Built by the injector, never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiscrepancyAssignment {
    classes: BTreeMap<GroundTruthId, DiscrepancyClass>,
}

impl DiscrepancyAssignment {
    /// Creates an empty assignment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Assigns `class` to `id`. Each id carries at most one class; a second
    /// assignment replaces the first (the injector never does this).
    pub fn assign(&mut self, id: GroundTruthId, class: DiscrepancyClass) {
        self.classes.insert(id, class);
    }

    /// Class assigned to `id`, if selected.
    pub fn class_of(&self, id: GroundTruthId) -> Option<DiscrepancyClass> {
        self.classes.get(&id).copied()
    }

    /// Number of selected ids.
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// True when no ids were selected.
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Iterator over `(id, class)` pairs in id order.
    pub fn iter(&self) -> impl Iterator<Item = (GroundTruthId, DiscrepancyClass)> + '_ {
        self.classes.iter().map(|(id, class)| (*id, *class))
    }

    /// How many selected records fall into each class, in
    /// `DiscrepancyClass::ALL` order.
    pub fn class_counts(&self) -> [usize; 3] {
        let mut counts = [0usize; 3];
        for class in self.classes.values() {
            match class {
                DiscrepancyClass::Quantity => counts[0] += 1,
                DiscrepancyClass::Price => counts[1] += 1,
                DiscrepancyClass::SymbolTypo => counts[2] += 1,
            }
        }
        counts
    }
}
