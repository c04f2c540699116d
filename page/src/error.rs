//! Page errors.

use wasm_bindgen::JsValue;

/// Errors raised while binding or running page behaviors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PageError {
    /// An element the page depends on is not in the document.
    #[error("missing element: {0}")]
    MissingElement(String),

    /// An anchor link points at `#` with no identifier after it.
    #[error("empty fragment in href {href:?}")]
    EmptyFragment { href: String },

    /// An anchor link's fragment does not name any element in the document.
    #[error("no element matches fragment #{id}")]
    FragmentNotFound { id: String },

    /// A DOM call threw.
    #[error("dom call failed: {0}")]
    Js(String),
}

impl From<JsValue> for PageError {
    fn from(value: JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

impl From<PageError> for JsValue {
    fn from(err: PageError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;
