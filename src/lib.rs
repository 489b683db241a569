//! Synthetic threat-score feed service.
//!
//! This library builds a fixed 10,000-row threat dataset in memory once at
//! startup and serves it as CSV over a single HTTP endpoint:
//!
//! ```text
//! GET /threat_data
//! ───────────────────────────
//! ThreatID,ThreatScore
//! 1,0.1
//! 2,0.2
//! ...
//! 10000,0.0
//! ```
//!
//! The dataset is immutable for the lifetime of the process, so every
//! response is byte-identical and no locking is needed.
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`dataset`]: Record construction and CSV rendering
//! - [`api`]: HTTP API for the feed, health and metrics
//! - [`analytics`]: Consumer-side fetch and score statistics
//! - [`utils`]: Utility functions

pub mod analytics;
pub mod api;
pub mod config;
pub mod dataset;
pub mod error;
pub mod metrics;
pub mod utils;

pub use config::Config;
pub use error::{AnalyticsError, FeedError, Result};
