//! Shared response envelope types for API handlers.
//!
//! List responses use a `{ "data": [...], "pagination": {...} }` envelope;
//! single resources serialize bare. Use these types instead of ad-hoc
//! `serde_json::json!` to get compile-time type safety and consistent
//! serialization.

use serde::Serialize;

/// Pagination metadata attached to list responses.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Pagination {
    /// 1-based page number.
    pub page: i64,
    /// Effective rows per page (after clamping to the allow-list).
    pub rows: i64,
    /// Total matching rows across all pages.
    pub total: i64,
}

/// `{ "data": [...], "pagination": {...} }` envelope for list endpoints.
#[derive(Debug, Serialize)]
pub struct PageResponse<T: Serialize> {
    pub data: Vec<T>,
    pub pagination: Pagination,
}
