//! Domain services for the site.
//!
//! DESIGN
//! ======
//! Services own the work behind the single page: talking to GitHub,
//! turning README markdown into HTML, and assembling the page data the
//! index template renders. Route handlers stay thin.

pub mod catalog;
pub mod github;
pub mod readme;
