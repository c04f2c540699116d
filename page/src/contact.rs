//! Demo contact form.
//!
//! Nothing is sent. Submitting the form produces a confirmation paragraph
//! after the form that removes itself after [`CONFIRMATION_TTL_MS`].

/// Element id of the demo contact form.
pub const FORM_ID: &str = "contact-form";

/// Selector for the name field inside the form.
pub const NAME_FIELD_SELECTOR: &str = "input[name=\"name\"]";

/// How long a confirmation stays in the document.
pub const CONFIRMATION_TTL_MS: u32 = 5_000;

/// Inline styles applied to each confirmation paragraph.
pub const CONFIRMATION_STYLE: [(&str, &str); 3] = [
    ("text-align", "center"),
    ("margin-top", "20px"),
    ("color", "var(--secondary-color)"),
];

/// Acknowledgment text. The name is embedded verbatim as text content.
#[must_use]
pub fn confirmation_message(name: &str) -> String {
    format!(
        "Thank you, {name}! Your message has been \"sent\". (This is a demo and does not actually send emails)."
    )
}

#[cfg(test)]
#[path = "contact_test.rs"]
mod tests;
