//! README section extraction and markdown rendering.
//!
//! A section runs from just after its heading line marker to the next line
//! that starts with `#` (any heading level), or to the end of the document.

use pulldown_cmark::{Options, Parser, html};

/// Heading that introduces a project's overview in its README.
pub const OVERVIEW_HEADING: &str = "## Overview";

/// Overview markdown for a project README.
#[must_use]
pub fn extract_overview(markdown: &str) -> String {
    extract_after(markdown, OVERVIEW_HEADING).unwrap_or_else(|| "No overview section found.".to_string())
}

/// Body of the top-level `# {title}` section.
#[must_use]
pub fn extract_section(markdown: &str, title: &str) -> String {
    extract_after(markdown, &format!("# {title}")).unwrap_or_else(|| format!("No {title} section found."))
}

fn extract_after(markdown: &str, heading: &str) -> Option<String> {
    let start = markdown.find(heading)? + heading.len();
    let rest = &markdown[start..];
    let body = match rest.find("\n#") {
        Some(end) => &rest[..end],
        None => rest,
    };
    Some(body.trim().to_string())
}

/// Render README markdown to HTML for embedding in the page.
#[must_use]
pub fn render_markdown(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(markdown, options);
    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

#[cfg(test)]
#[path = "readme_test.rs"]
mod tests;
