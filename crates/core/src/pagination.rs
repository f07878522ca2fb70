//! Page-size and page-number clamping for list endpoints.

/// Allowed rows-per-page values for list screens.
pub const PAGE_SIZE_OPTIONS: [i64; 4] = [10, 25, 50, 100];

/// Default rows per page, also the fallback for unsupported values.
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Clamp a requested page size to the allow-list.
///
/// `None` and any value outside the allow-list fall back to the default;
/// the caller persists the effective value on the session so the fallback
/// carries over to later requests.
pub fn clamp_page_size(requested: Option<i64>) -> i64 {
    match requested {
        Some(size) if PAGE_SIZE_OPTIONS.contains(&size) => size,
        _ => DEFAULT_PAGE_SIZE,
    }
}

/// Clamp a 1-based page number.
pub fn clamp_page(requested: Option<i64>) -> i64 {
    requested.unwrap_or(1).max(1)
}

/// Offset for a 1-based page of the given size.
///
/// Saturating: `page` comes straight from the query string, so an
/// absurdly large value must yield an empty page, not an overflow or a
/// negative OFFSET.
pub fn page_offset(page: i64, page_size: i64) -> i64 {
    page.saturating_sub(1).saturating_mul(page_size)
}
