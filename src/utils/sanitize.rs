//! Input validation for package names and search queries
//!
//! Arguments reach the manager without a shell, so the concern here is
//! argument confusion (a "package" that the manager would read as a flag)
//! rather than shell injection.

use crate::error::{PkgxError, Result};
use regex::Regex;
use std::sync::LazyLock;

const MAX_PACKAGE_NAME_LEN: usize = 256;

/// Whitespace and control characters never belong in a single package argument
static FORBIDDEN_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s\p{Cc}]").expect("Invalid regex pattern"));

/// Queries may contain spaces ("text editor") but not control characters
static QUERY_FORBIDDEN_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\p{Cc}").expect("Invalid regex pattern"));

/// Validate one package name or search query.
pub fn validate_package_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(PkgxError::InvalidPackageName(
            "package name cannot be empty".to_string(),
        ));
    }

    if name.chars().count() > MAX_PACKAGE_NAME_LEN {
        let head: String = name.chars().take(50).collect();
        return Err(PkgxError::InvalidPackageName(format!(
            "too long (max {} chars): {}...",
            MAX_PACKAGE_NAME_LEN, head
        )));
    }

    if name.starts_with('-') {
        return Err(PkgxError::InvalidPackageName(format!(
            "'{}' looks like an option",
            name
        )));
    }

    if FORBIDDEN_CHARS.is_match(name) {
        return Err(PkgxError::InvalidPackageName(format!(
            "'{}' contains whitespace or control characters",
            name.escape_debug()
        )));
    }

    Ok(())
}

/// Validate a search query. It reaches the manager as one argument, spaces
/// included.
pub fn validate_search_query(query: &str) -> Result<()> {
    if query.trim().is_empty() {
        return Err(PkgxError::InvalidSearchQuery(
            "search query cannot be empty".to_string(),
        ));
    }

    if query.chars().count() > MAX_PACKAGE_NAME_LEN {
        return Err(PkgxError::InvalidSearchQuery(format!(
            "too long (max {} chars)",
            MAX_PACKAGE_NAME_LEN
        )));
    }

    if query.starts_with('-') {
        return Err(PkgxError::InvalidSearchQuery(format!(
            "'{}' looks like an option",
            query
        )));
    }

    if QUERY_FORBIDDEN_CHARS.is_match(query) {
        return Err(PkgxError::InvalidSearchQuery(format!(
            "'{}' contains control characters",
            query.escape_debug()
        )));
    }

    Ok(())
}

/// Validate every entry, failing on the first bad one.
pub fn validate_package_names(names: &[String]) -> Result<()> {
    names.iter().try_for_each(|name| validate_package_name(name))
}
