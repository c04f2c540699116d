//! Client-side behavior for the personal site's single page.
//!
//! This crate is compiled to WebAssembly and started once when the page
//! loads. It attaches three independent behaviors to the document: a
//! light/dark theme toggle, smooth scrolling for in-page anchor links, and a
//! demo contact form that shows a short-lived confirmation instead of sending
//! anything.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`behavior`] | Browser-independent [`behavior::PageCore`] and the [`behavior::Action`]s it emits |
//! | [`theme`] | Presentation-mode values and the toggle rule |
//! | [`scroll`] | Fragment reference parsing for anchor links |
//! | [`contact`] | Confirmation text and removal delay for the demo form |
//! | [`web`] | DOM wiring: event listeners, action application, timers |
//! | [`error`] | [`error::PageError`] |

pub mod behavior;
pub mod contact;
pub mod error;
pub mod scroll;
pub mod theme;
pub mod web;

pub use crate::behavior::{Action, ConfirmationId, PageCore};
pub use crate::error::PageError;
pub use crate::theme::Theme;
