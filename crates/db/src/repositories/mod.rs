//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod placement_repo;
pub mod session_repo;
pub mod user_repo;

pub use placement_repo::PlacementRepo;
pub use session_repo::SessionRepo;
pub use user_repo::UserRepo;

/// `%term%` ILIKE pattern with `\`, `%`, and `_` escaped, so the term
/// matches as a literal substring rather than as a wildcard pattern.
pub(crate) fn contains_pattern(term: &str) -> String {
    let escaped = term
        .trim()
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{escaped}%")
}

#[cfg(test)]
mod tests {
    use super::contains_pattern;

    #[test]
    fn search_terms_escape_like_metacharacters() {
        assert_eq!(contains_pattern("smith"), "%smith%");
        assert_eq!(contains_pattern(" smith "), "%smith%");
        assert_eq!(contains_pattern("100%"), "%100\\%%");
        assert_eq!(contains_pattern("on_call"), "%on\\_call%");
        assert_eq!(contains_pattern(r"a\b"), r"%a\\b%");
    }
}
