//! Pure domain logic for the clinboard placement dashboard.
//!
//! This crate has no database, async, or I/O dependencies. It provides:
//!
//! - Shift and employment-status enumerations with their wire codes.
//! - The placement filter model shared by every analytics/list endpoint.
//! - Pure spreadsheet-import row mapping (raw row -> tagged outcome).
//! - Analytics presentation helpers (timeline window, "Unknown" labelling).
//! - Pagination clamping.

pub mod analytics;
pub mod error;
pub mod filter;
pub mod import;
pub mod pagination;
pub mod placement;
pub mod types;
