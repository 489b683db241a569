//! Threat dataset module.
//!
//! This module handles:
//! - Record types and score derivation
//! - Building the full in-memory table
//! - Rendering the table as CSV text

pub mod csv;
pub mod record;

pub use csv::{render, write_file, CSV_HEADER};
pub use record::{build, threat_score, ThreatRecord, DATASET_SIZE};
