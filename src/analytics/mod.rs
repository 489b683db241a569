//! Threat score analytics module.
//!
//! Consumer side of the feed: fetches the CSV over HTTP the same way an
//! external analytics client would, parses the score column, and computes
//! aggregate statistics.
//!
//! This module handles:
//! - Fetching the CSV body from a running feed
//! - Parsing scores out of the CSV text
//! - Mean and variance over the score column

pub mod client;
pub mod stats;

pub use client::{fetch_threat_csv, parse_scores};
pub use stats::ScoreStats;
