use std::collections::BTreeSet;

use crate::contact::{CONFIRMATION_TTL_MS, confirmation_message};
use crate::error::PageError;
use crate::scroll::fragment_id;
use crate::theme::Theme;

#[cfg(test)]
#[path = "behavior_test.rs"]
mod tests;

/// Identifies one confirmation paragraph between insertion and removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ConfirmationId(pub u64);

/// DOM changes returned from event handlers for the host to apply, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Cancel the browser's default handling of the current event.
    PreventDefault,
    /// Write the presentation-mode attribute.
    SetTheme(Theme),
    /// Scroll the element with this id into view.
    ScrollIntoView { id: String, smooth: bool },
    /// Insert a confirmation paragraph directly after the contact form.
    InsertConfirmation { id: ConfirmationId, text: String },
    /// Reset the contact form's fields to their defaults.
    ResetForm,
    /// Arrange for `on_removal_elapsed(id)` to run after `delay_ms`.
    ScheduleRemoval { id: ConfirmationId, delay_ms: u32 },
    /// Remove a confirmation paragraph from the document.
    RemoveConfirmation { id: ConfirmationId },
}

/// Decision logic for the page behaviors, independent of the browser.
///
/// Separated from the DOM layer in [`crate::web`] so it can be tested without
/// WASM/browser dependencies. The only state it carries is the set of
/// confirmations currently on the page.
#[derive(Debug, Default)]
pub struct PageCore {
    next_confirmation: u64,
    live: BTreeSet<ConfirmationId>,
}

impl PageCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Theme ---

    /// Click on the theme toggle, given the attribute's current value.
    #[must_use]
    pub fn on_theme_toggle(&self, current: Option<&str>) -> Action {
        Action::SetTheme(Theme::from_attr(current).toggled())
    }

    // --- Anchors ---

    /// Click on an in-page anchor.
    ///
    /// `exists` reports whether an element with the given id is in the
    /// document. The first action is always [`Action::PreventDefault`] and
    /// must be applied whatever the outcome; the outcome is the scroll, or
    /// an error when the fragment is empty or names no element.
    pub fn on_anchor_click(&self, href: &str, exists: impl Fn(&str) -> bool) -> (Action, Result<Action, PageError>) {
        let outcome = fragment_id(href).and_then(|id| {
            if exists(id) {
                Ok(Action::ScrollIntoView { id: id.to_string(), smooth: true })
            } else {
                Err(PageError::FragmentNotFound { id: id.to_string() })
            }
        });
        (Action::PreventDefault, outcome)
    }

    // --- Contact form ---

    /// Submission of the demo contact form.
    ///
    /// `read_name` yields the name field's value. As with anchors, the first
    /// action is always [`Action::PreventDefault`]; a form whose name field
    /// cannot be read is still never submitted.
    pub fn on_contact_submit(
        &mut self,
        read_name: impl FnOnce() -> Result<String, PageError>,
    ) -> (Action, Result<Vec<Action>, PageError>) {
        let outcome = read_name().map(|name| {
            let id = ConfirmationId(self.next_confirmation);
            self.next_confirmation += 1;
            self.live.insert(id);

            vec![
                Action::InsertConfirmation { id, text: confirmation_message(&name) },
                Action::ResetForm,
                Action::ScheduleRemoval { id, delay_ms: CONFIRMATION_TTL_MS },
            ]
        });
        (Action::PreventDefault, outcome)
    }

    /// Timer for a confirmation fired. Removal is unconditional.
    pub fn on_removal_elapsed(&mut self, id: ConfirmationId) -> Action {
        self.live.remove(&id);
        Action::RemoveConfirmation { id }
    }

    // --- Queries ---

    /// Confirmations inserted and not yet removed, oldest first.
    pub fn live_confirmations(&self) -> impl Iterator<Item = ConfirmationId> + '_ {
        self.live.iter().copied()
    }
}
