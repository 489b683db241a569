//! Threat record types and construction.

use rust_decimal::Decimal;

/// Number of records in the dataset.
pub const DATASET_SIZE: u32 = 10_000;

/// Scores repeat every this many records.
pub const SCORE_CYCLE: u32 = 10;

/// One row of the synthetic threat dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThreatRecord {
    /// Sequential identifier, 1-based.
    pub id: u32,
    /// Derived score in {0.0, 0.1, ..., 0.9}.
    pub score: Decimal,
}

impl ThreatRecord {
    /// Create the record for the given id with its derived score.
    pub fn new(id: u32) -> Self {
        Self {
            id,
            score: threat_score(id),
        }
    }
}

/// Compute the score for an id: `(id mod 10) * 0.1`, exact to one decimal.
///
/// Built as a scale-1 `Decimal` so the value renders as `0.1`, never
/// `0.10000000000000001`.
pub fn threat_score(id: u32) -> Decimal {
    Decimal::new(i64::from(id % SCORE_CYCLE), 1)
}

/// Build the full dataset in ascending id order.
///
/// Pure and infallible; called once at startup.
pub fn build() -> Vec<ThreatRecord> {
    (1..=DATASET_SIZE).map(ThreatRecord::new).collect()
}
