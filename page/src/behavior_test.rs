use std::collections::HashSet;

use super::*;

// =============================================================
// Fake document
// =============================================================

/// Sibling nodes around the contact form, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Node {
    Form,
    Confirmation(ConfirmationId, String),
}

/// Minimal stand-in for the browser: applies actions and runs timers.
struct FakeDocument {
    theme_attr: Option<String>,
    ids: HashSet<String>,
    nodes: Vec<Node>,
    name_field: String,
    default_prevented: bool,
    scrolls: Vec<(String, bool)>,
    timers: Vec<(u64, ConfirmationId)>,
    now_ms: u64,
}

impl FakeDocument {
    fn new() -> Self {
        Self {
            theme_attr: None,
            ids: ["about", "projects", "contact"].iter().map(ToString::to_string).collect(),
            nodes: vec![Node::Form],
            name_field: String::new(),
            default_prevented: false,
            scrolls: Vec::new(),
            timers: Vec::new(),
            now_ms: 0,
        }
    }

    fn apply(&mut self, actions: Vec<Action>) {
        for action in actions {
            match action {
                Action::PreventDefault => self.default_prevented = true,
                Action::SetTheme(theme) => self.theme_attr = Some(theme.as_str().to_string()),
                Action::ScrollIntoView { id, smooth } => self.scrolls.push((id, smooth)),
                Action::InsertConfirmation { id, text } => {
                    let form_at = self.nodes.iter().position(|n| *n == Node::Form).unwrap();
                    self.nodes.insert(form_at + 1, Node::Confirmation(id, text));
                }
                Action::ResetForm => self.name_field.clear(),
                Action::ScheduleRemoval { id, delay_ms } => {
                    self.timers.push((self.now_ms + u64::from(delay_ms), id));
                }
                Action::RemoveConfirmation { id } => {
                    self.nodes.retain(|n| !matches!(n, Node::Confirmation(c, _) if *c == id));
                }
            }
        }
    }

    fn click_toggle(&mut self, core: &PageCore) {
        let action = core.on_theme_toggle(self.theme_attr.as_deref());
        self.apply(vec![action]);
    }

    fn click_anchor(&mut self, core: &PageCore, href: &str) -> Result<(), PageError> {
        self.default_prevented = false;
        let ids = self.ids.clone();
        let (prevent, outcome) = core.on_anchor_click(href, |id| ids.contains(id));
        self.apply(vec![prevent]);
        self.apply(vec![outcome?]);
        Ok(())
    }

    fn submit(&mut self, core: &mut PageCore, name: &str) {
        self.default_prevented = false;
        self.name_field = name.to_string();
        let name = self.name_field.clone();
        let (prevent, outcome) = core.on_contact_submit(|| Ok(name));
        self.apply(vec![prevent]);
        self.apply(outcome.unwrap());
    }

    fn advance(&mut self, core: &mut PageCore, ms: u64) {
        self.now_ms += ms;
        let (due, pending): (Vec<_>, Vec<_>) = self.timers.drain(..).partition(|(at, _)| *at <= self.now_ms);
        self.timers = pending;
        for (_, id) in due {
            let action = core.on_removal_elapsed(id);
            self.apply(vec![action]);
        }
    }

    fn confirmations(&self) -> Vec<(ConfirmationId, String)> {
        self.nodes
            .iter()
            .filter_map(|n| match n {
                Node::Confirmation(id, text) => Some((*id, text.clone())),
                Node::Form => None,
            })
            .collect()
    }
}

fn submitted(core: &mut PageCore, name: &str) -> Vec<Action> {
    let name = name.to_string();
    core.on_contact_submit(|| Ok(name)).1.unwrap()
}

// =============================================================
// Theme
// =============================================================

#[test]
fn first_toggle_without_attribute_sets_dark() {
    let core = PageCore::new();
    let mut doc = FakeDocument::new();
    doc.click_toggle(&core);
    assert_eq!(doc.theme_attr.as_deref(), Some("dark"));
}

#[test]
fn toggle_alternates_strictly() {
    let core = PageCore::new();
    let mut doc = FakeDocument::new();
    let mut seen = Vec::new();
    for _ in 0..6 {
        doc.click_toggle(&core);
        seen.push(doc.theme_attr.clone().unwrap());
    }
    assert_eq!(seen, ["dark", "light", "dark", "light", "dark", "light"]);
}

#[test]
fn toggle_from_existing_light_sets_dark() {
    let core = PageCore::new();
    let mut doc = FakeDocument::new();
    doc.theme_attr = Some("light".into());
    doc.click_toggle(&core);
    assert_eq!(doc.theme_attr.as_deref(), Some("dark"));
}

#[test]
fn toggle_from_unknown_value_sets_dark() {
    let core = PageCore::new();
    assert_eq!(core.on_theme_toggle(Some("sepia")), Action::SetTheme(Theme::Dark));
}

// =============================================================
// Anchors
// =============================================================

#[test]
fn anchor_to_existing_section_prevents_default_and_scrolls_smoothly() {
    let core = PageCore::new();
    let mut doc = FakeDocument::new();
    doc.click_anchor(&core, "#projects").unwrap();
    assert!(doc.default_prevented);
    assert_eq!(doc.scrolls, vec![("projects".to_string(), true)]);
}

#[test]
fn anchor_click_prevents_default_and_scrolls() {
    let core = PageCore::new();
    let (prevent, outcome) = core.on_anchor_click("#about", |_| true);
    assert_eq!(prevent, Action::PreventDefault);
    assert_eq!(outcome, Ok(Action::ScrollIntoView { id: "about".into(), smooth: true }));
}

#[test]
fn anchor_to_missing_section_still_prevents_default() {
    let core = PageCore::new();
    let (prevent, outcome) = core.on_anchor_click("#nowhere", |_| false);
    assert_eq!(prevent, Action::PreventDefault);
    assert_eq!(outcome, Err(PageError::FragmentNotFound { id: "nowhere".into() }));
}

#[test]
fn anchor_to_missing_section_errors_without_scrolling() {
    let core = PageCore::new();
    let mut doc = FakeDocument::new();
    let err = doc.click_anchor(&core, "#nowhere").unwrap_err();
    assert_eq!(err, PageError::FragmentNotFound { id: "nowhere".into() });
    assert!(doc.scrolls.is_empty());
    assert!(doc.default_prevented);
}

#[test]
fn bare_hash_anchor_errors() {
    let core = PageCore::new();
    let (prevent, outcome) = core.on_anchor_click("#", |_| true);
    assert_eq!(prevent, Action::PreventDefault);
    assert!(matches!(outcome, Err(PageError::EmptyFragment { .. })));
}

#[test]
fn failed_anchor_does_not_affect_other_links() {
    let core = PageCore::new();
    let mut doc = FakeDocument::new();
    assert!(doc.click_anchor(&core, "#nowhere").is_err());
    doc.click_anchor(&core, "#contact").unwrap();
    assert_eq!(doc.scrolls, vec![("contact".to_string(), true)]);
}

// =============================================================
// Contact form
// =============================================================

#[test]
fn submit_inserts_confirmation_after_form_and_clears_fields() {
    let mut core = PageCore::new();
    let mut doc = FakeDocument::new();
    doc.submit(&mut core, "Ada");

    assert!(doc.default_prevented);
    assert_eq!(doc.nodes[0], Node::Form);
    let Node::Confirmation(_, text) = &doc.nodes[1] else {
        panic!("expected confirmation after form, got {:?}", doc.nodes);
    };
    assert!(text.contains("Thank you, Ada! Your message has been \"sent\"."));
    assert!(doc.name_field.is_empty());
}

#[test]
fn submit_emits_actions_in_order() {
    let mut core = PageCore::new();
    let (prevent, outcome) = core.on_contact_submit(|| Ok("Ada".into()));
    assert_eq!(prevent, Action::PreventDefault);
    let actions = outcome.unwrap();
    assert_eq!(actions.len(), 3);
    assert!(matches!(actions[0], Action::InsertConfirmation { .. }));
    assert_eq!(actions[1], Action::ResetForm);
    assert!(matches!(actions[2], Action::ScheduleRemoval { delay_ms: 5_000, .. }));
}

#[test]
fn unreadable_name_field_still_prevents_submission() {
    let mut core = PageCore::new();
    let (prevent, outcome) =
        core.on_contact_submit(|| Err(PageError::MissingElement("input[name=\"name\"]".into())));
    assert_eq!(prevent, Action::PreventDefault);
    assert!(matches!(outcome, Err(PageError::MissingElement(_))));
    assert_eq!(core.live_confirmations().count(), 0);
}

#[test]
fn confirmation_is_removed_after_delay() {
    let mut core = PageCore::new();
    let mut doc = FakeDocument::new();
    doc.submit(&mut core, "Ada");

    doc.advance(&mut core, 4_999);
    assert_eq!(doc.confirmations().len(), 1);

    doc.advance(&mut core, 1);
    assert!(doc.confirmations().is_empty());
    assert_eq!(core.live_confirmations().count(), 0);

    doc.advance(&mut core, 60_000);
    assert!(doc.confirmations().is_empty());
}

#[test]
fn two_submits_within_window_coexist_and_expire_independently() {
    let mut core = PageCore::new();
    let mut doc = FakeDocument::new();

    doc.submit(&mut core, "Ada");
    doc.advance(&mut core, 2_000);
    doc.submit(&mut core, "Grace");

    let both = doc.confirmations();
    assert_eq!(both.len(), 2);
    assert_ne!(both[0].0, both[1].0);
    assert_eq!(core.live_confirmations().count(), 2);

    // First expires at 5000, second at 7000.
    doc.advance(&mut core, 3_000);
    let left = doc.confirmations();
    assert_eq!(left.len(), 1);
    assert!(left[0].1.contains("Grace"));

    doc.advance(&mut core, 2_000);
    assert!(doc.confirmations().is_empty());
}

#[test]
fn newest_confirmation_sits_directly_after_form() {
    let mut core = PageCore::new();
    let mut doc = FakeDocument::new();
    doc.submit(&mut core, "Ada");
    doc.submit(&mut core, "Grace");

    let Node::Confirmation(_, text) = &doc.nodes[1] else {
        panic!("expected confirmation after form");
    };
    assert!(text.contains("Grace"));
}

#[test]
fn removal_of_already_removed_confirmation_is_harmless() {
    let mut core = PageCore::new();
    let actions = submitted(&mut core, "Ada");
    let Action::InsertConfirmation { id, .. } = actions[0] else {
        panic!("expected insert");
    };
    assert_eq!(core.on_removal_elapsed(id), Action::RemoveConfirmation { id });
    assert_eq!(core.on_removal_elapsed(id), Action::RemoveConfirmation { id });
    assert_eq!(core.live_confirmations().count(), 0);
}

#[test]
fn confirmation_ids_are_never_reused() {
    let mut core = PageCore::new();
    let mut ids = HashSet::new();
    for _ in 0..10 {
        let actions = submitted(&mut core, "x");
        if let Action::InsertConfirmation { id, .. } = actions[0] {
            let action = core.on_removal_elapsed(id);
            assert_eq!(action, Action::RemoveConfirmation { id });
            assert!(ids.insert(id));
        }
    }
    assert_eq!(ids.len(), 10);
}
