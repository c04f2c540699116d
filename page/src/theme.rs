//! Presentation mode.
//!
//! The active theme lives in a single attribute on the document body. The
//! toggle rule is lopsided: only an exact `"dark"` flips to
//! light, everything else (absent, empty, unknown) flips to dark.

/// Attribute on `<body>` that carries the presentation mode.
pub const THEME_ATTR: &str = "data-theme";

/// Element id of the theme toggle control.
pub const TOGGLE_ID: &str = "theme-toggle";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Interpret the current attribute value. Anything but `"dark"` is light.
    #[must_use]
    pub fn from_attr(raw: Option<&str>) -> Self {
        match raw {
            Some("dark") => Self::Dark,
            _ => Self::Light,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Attribute value written back to the document.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

#[cfg(test)]
#[path = "theme_test.rs"]
mod tests;
