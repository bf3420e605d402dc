//! Terminal UI - interactive filter panel and results table
//!
//! This module provides the interactive surface over the enriched catalog:
//! a free-text search box, exclusive owner and category chips, and a results
//! table, all driven by a synchronous crossterm event loop.

/// Application state and event loop
pub mod app;
/// UI rendering
pub mod ui;

pub use app::run;
