//! HTTP API module.
//!
//! This module handles:
//! - Shared application state around the pre-rendered CSV
//! - Handlers for the feed, health and metrics endpoints
//! - Router assembly

pub mod handlers;
pub mod routes;

pub use handlers::AppState;
pub use routes::create_router;
