//! Fragment references on in-page anchor links.

use crate::error::PageError;

/// Selector for every anchor whose `href` is a fragment reference.
pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";

/// Extract the element id from a fragment `href` such as `#projects`.
///
/// # Errors
///
/// Returns [`PageError::EmptyFragment`] for a bare `#` (or a non-fragment
/// href, which the anchor selector never yields).
pub fn fragment_id(href: &str) -> Result<&str, PageError> {
    match href.strip_prefix('#') {
        Some(id) if !id.is_empty() => Ok(id),
        _ => Err(PageError::EmptyFragment { href: href.to_string() }),
    }
}

#[cfg(test)]
#[path = "scroll_test.rs"]
mod tests;
