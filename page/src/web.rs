//! DOM wiring.
//!
//! Attaches the event listeners, feeds events into [`PageCore`], and applies
//! the returned [`Action`]s to the live document. Listener closures are
//! leaked with `forget()`: they live as long as the page.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, Event, EventTarget, HtmlElement, HtmlFormElement, HtmlInputElement, ScrollBehavior,
    ScrollIntoViewOptions,
};

use crate::behavior::{Action, ConfirmationId, PageCore};
use crate::contact::{CONFIRMATION_STYLE, FORM_ID, NAME_FIELD_SELECTOR};
use crate::error::PageError;
use crate::scroll::ANCHOR_SELECTOR;
use crate::theme::{THEME_ATTR, TOGGLE_ID};

type Listener = Closure<dyn FnMut(Event) -> Result<(), JsValue>>;

/// Entry point run once when the module is instantiated.
///
/// Behaviors are bound in page order: theme toggle, anchors, contact form. A
/// missing element aborts the remaining bindings.
///
/// # Errors
///
/// Returns the first binding failure as a JS exception.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&JsValue::from_str(&format!("logger already set: {e}")));
    }

    let page = Page::from_window()?;
    page.bind_all().map_err(|e| {
        log::error!("page init failed: {e}");
        JsValue::from(e)
    })
}

/// The live document plus the shared core behind every listener.
#[derive(Clone)]
pub struct Page {
    document: Document,
    core: Rc<RefCell<PageCore>>,
    confirmations: Rc<RefCell<HashMap<ConfirmationId, Element>>>,
}

impl Page {
    /// Bind to the current window's document.
    ///
    /// # Errors
    ///
    /// Fails outside a browser window.
    pub fn from_window() -> Result<Self, PageError> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| PageError::MissingElement("document".into()))?;
        Ok(Self::new(document))
    }

    #[must_use]
    pub fn new(document: Document) -> Self {
        Self {
            document,
            core: Rc::new(RefCell::new(PageCore::new())),
            confirmations: Rc::new(RefCell::new(HashMap::new())),
        }
    }

    /// Attach all three behaviors.
    ///
    /// # Errors
    ///
    /// Stops at the first behavior whose element is missing.
    pub fn bind_all(&self) -> Result<(), PageError> {
        self.bind_theme_toggle()?;
        let anchors = self.bind_smooth_scroll()?;
        self.bind_contact_form()?;
        log::info!("page behaviors attached ({anchors} anchor links)");
        Ok(())
    }

    /// Click handler on `#theme-toggle` that flips `data-theme` on `<body>`.
    ///
    /// # Errors
    ///
    /// Fails when the toggle control is not in the document.
    pub fn bind_theme_toggle(&self) -> Result<(), PageError> {
        let toggle = self.element_by_id(TOGGLE_ID)?;
        let page = self.clone();
        let listener: Listener = Closure::new(move |_event: Event| -> Result<(), JsValue> {
            let body = page.body()?;
            let action = page.core.borrow().on_theme_toggle(body.get_attribute(THEME_ATTR).as_deref());
            page.apply(action)?;
            Ok(())
        });
        listen(&toggle, "click", listener)
    }

    /// Click handlers on every `a[href^="#"]` that scroll smoothly instead of
    /// jumping. Returns how many links were bound.
    ///
    /// # Errors
    ///
    /// Fails when the selector query or a listener registration throws.
    pub fn bind_smooth_scroll(&self) -> Result<u32, PageError> {
        let anchors = self.document.query_selector_all(ANCHOR_SELECTOR)?;
        let mut bound = 0;
        for index in 0..anchors.length() {
            let Some(node) = anchors.item(index) else {
                continue;
            };
            let Ok(anchor) = node.dyn_into::<Element>() else {
                continue;
            };
            let page = self.clone();
            let link = anchor.clone();
            let listener: Listener = Closure::new(move |event: Event| -> Result<(), JsValue> {
                let href = link.get_attribute("href").unwrap_or_default();
                let document = page.document.clone();
                let (prevent, outcome) = page
                    .core
                    .borrow()
                    .on_anchor_click(&href, |id| document.get_element_by_id(id).is_some());
                page.apply_to_event(&event, prevent)?;
                match outcome {
                    Ok(scroll) => Ok(page.apply(scroll)?),
                    Err(e) => {
                        log::warn!("anchor {href:?} not scrolled: {e}");
                        Err(e.into())
                    }
                }
            });
            listen(&anchor, "click", listener)?;
            bound += 1;
        }
        Ok(bound)
    }

    /// Submit handler on `#contact-form` that shows a transient confirmation
    /// instead of submitting.
    ///
    /// # Errors
    ///
    /// Fails when the form is not in the document.
    pub fn bind_contact_form(&self) -> Result<(), PageError> {
        let form = self
            .element_by_id(FORM_ID)?
            .dyn_into::<HtmlFormElement>()
            .map_err(|_| PageError::MissingElement(format!("form#{FORM_ID}")))?;
        let page = self.clone();
        let target = form.clone();
        let listener: Listener = Closure::new(move |event: Event| -> Result<(), JsValue> {
            let (prevent, outcome) = page
                .core
                .borrow_mut()
                .on_contact_submit(|| name_field(&target).map(|field| field.value()));
            page.apply_to_event(&event, prevent)?;
            let actions = outcome.map_err(|e| {
                log::error!("contact form not handled: {e}");
                JsValue::from(e)
            })?;
            for action in actions {
                match action {
                    Action::InsertConfirmation { id, text } => page.insert_confirmation(&target, id, &text)?,
                    Action::ResetForm => target.reset(),
                    other => page.apply(other)?,
                }
            }
            Ok(())
        });
        listen(&form, "submit", listener)
    }

    // --- Action application ---

    fn apply_to_event(&self, event: &Event, action: Action) -> Result<(), PageError> {
        match action {
            Action::PreventDefault => {
                event.prevent_default();
                Ok(())
            }
            other => self.apply(other),
        }
    }

    /// Apply an action that needs no event or form context.
    fn apply(&self, action: Action) -> Result<(), PageError> {
        match action {
            Action::SetTheme(theme) => {
                self.body()?.set_attribute(THEME_ATTR, theme.as_str())?;
                log::debug!("theme set to {}", theme.as_str());
            }
            Action::ScrollIntoView { id, smooth } => {
                let target = self.element_by_id(&id)?;
                let options = ScrollIntoViewOptions::new();
                options.set_behavior(if smooth { ScrollBehavior::Smooth } else { ScrollBehavior::Auto });
                target.scroll_into_view_with_scroll_into_view_options(&options);
            }
            Action::ScheduleRemoval { id, delay_ms } => {
                let page = self.clone();
                Timeout::new(delay_ms, move || {
                    let action = page.core.borrow_mut().on_removal_elapsed(id);
                    if let Err(e) = page.apply(action) {
                        log::warn!("confirmation removal failed: {e}");
                    }
                })
                .forget();
            }
            Action::RemoveConfirmation { id } => {
                if let Some(node) = self.confirmations.borrow_mut().remove(&id) {
                    node.remove();
                }
            }
            Action::PreventDefault | Action::InsertConfirmation { .. } | Action::ResetForm => {
                log::warn!("{action:?} needs an event or form and was not applied");
            }
        }
        Ok(())
    }

    fn insert_confirmation(&self, form: &HtmlFormElement, id: ConfirmationId, text: &str) -> Result<(), PageError> {
        let node = self.document.create_element("p")?;
        node.set_text_content(Some(text));
        if let Some(styled) = node.dyn_ref::<HtmlElement>() {
            let style = styled.style();
            for (property, value) in CONFIRMATION_STYLE {
                style.set_property(property, value)?;
            }
        }
        form.insert_adjacent_element("afterend", &node)?;
        self.confirmations.borrow_mut().insert(id, node);
        Ok(())
    }

    // --- Lookups ---

    fn element_by_id(&self, id: &str) -> Result<Element, PageError> {
        self.document
            .get_element_by_id(id)
            .ok_or_else(|| PageError::MissingElement(format!("#{id}")))
    }

    fn body(&self) -> Result<HtmlElement, PageError> {
        self.document.body().ok_or_else(|| PageError::MissingElement("body".into()))
    }
}

fn name_field(form: &HtmlFormElement) -> Result<HtmlInputElement, PageError> {
    let missing = || PageError::MissingElement(NAME_FIELD_SELECTOR.into());
    form.query_selector(NAME_FIELD_SELECTOR)?
        .ok_or_else(missing)?
        .dyn_into::<HtmlInputElement>()
        .map_err(|_| missing())
}

fn listen(target: &EventTarget, event: &str, listener: Listener) -> Result<(), PageError> {
    target.add_event_listener_with_callback(event, listener.as_ref().unchecked_ref())?;
    listener.forget();
    Ok(())
}
