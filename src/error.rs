//! Unified error types for the threat feed service.

use thiserror::Error;

/// Unified error type for the threat feed service.
///
/// The feed itself cannot fail once running; every variant here is a
/// startup, export or consumer-side surface.
#[derive(Error, Debug)]
pub enum FeedError {
    /// Configuration loading error.
    #[error("configuration error: {0}")]
    Config(#[from] envy::Error),

    /// Analytics consumer error.
    #[error("analytics error: {0}")]
    Analytics(#[from] AnalyticsError),

    /// Metrics recorder installation error.
    #[error("metrics error: {0}")]
    Metrics(#[from] metrics_exporter_prometheus::BuildError),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors from fetching and aggregating the feed as a consumer.
#[derive(Error, Debug)]
pub enum AnalyticsError {
    /// Feed responded with a non-success status.
    #[error("feed returned status {status}")]
    BadStatus {
        /// The HTTP status code received.
        status: u16,
    },

    /// A data line had no score column.
    #[error("line {line}: missing score column")]
    MissingScore {
        /// 1-based line number in the CSV body.
        line: usize,
    },

    /// A score field did not parse as a decimal.
    #[error("line {line}: invalid score {value:?}")]
    ParseScore {
        /// 1-based line number in the CSV body.
        line: usize,
        /// The offending field text.
        value: String,
    },

    /// HTTP request failed.
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, FeedError>;
