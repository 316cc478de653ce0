//! Page Binding
//!
//! Attaches a widget to counter markup that already exists in the page,
//! found by element id.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, HtmlElement};

use crate::api::HttpCounterApi;
use crate::config::WidgetConfig;
use crate::display::CounterDisplay;
use crate::error::BindError;
use crate::schedule::BrowserScheduler;
use crate::widget::CounterWidget;

/// Display backed by a real DOM element.
#[derive(Debug, Clone)]
pub struct ElementDisplay {
    element: HtmlElement,
}

impl ElementDisplay {
    pub fn new(element: HtmlElement) -> Self {
        Self { element }
    }
}

impl CounterDisplay for ElementDisplay {
    fn set_text(&self, text: &str) {
        self.element.set_text_content(Some(text));
    }

    fn add_class(&self, class: &str) {
        if let Err(e) = self.element.class_list().add_1(class) {
            log::warn!("[DOM] Failed to add class {}: {:?}", class, e);
        }
    }

    fn remove_class(&self, class: &str) {
        if let Err(e) = self.element.class_list().remove_1(class) {
            log::warn!("[DOM] Failed to remove class {}: {:?}", class, e);
        }
    }
}

pub fn document() -> Option<Document> {
    web_sys::window().and_then(|window| window.document())
}

/// How the widget is hosted on this page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Host {
    /// The page ships its own counter markup; bind to it.
    ExistingPage,
    /// No counter markup; render the Leptos app.
    SelfHosted,
}

/// Decide the hosting mode. Only meaningful once the document is parsed,
/// so call it from [`on_ready`].
pub fn choose_host(config: &WidgetConfig) -> Host {
    let has_counter = document()
        .and_then(|doc| doc.get_element_by_id(&config.value_element_id))
        .is_some();
    if has_counter {
        Host::ExistingPage
    } else {
        Host::SelfHosted
    }
}

/// Run `f` once the document has been parsed: immediately if it already
/// has, otherwise on `DOMContentLoaded`.
pub fn on_ready(f: impl FnOnce() + 'static) -> Result<(), BindError> {
    let document = document().ok_or(BindError::NoDocument)?;
    if document.ready_state() != "loading" {
        f();
        return Ok(());
    }
    let on_ready = Closure::once(f);
    document
        .add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref())
        .map_err(|e| BindError::Listener(format!("{:?}", e)))?;
    on_ready.forget();
    Ok(())
}

/// Wire the increment control's clicks to the widget and run the initial
/// load. Expects a parsed document; call it from [`on_ready`].
pub fn bind_page(config: &WidgetConfig) -> Result<(), BindError> {
    let document = document().ok_or(BindError::NoDocument)?;
    let value_element = find_element(&document, &config.value_element_id)?;
    let button = find_element(&document, &config.button_element_id)?;

    let widget = CounterWidget::new(
        HttpCounterApi::new(config),
        ElementDisplay::new(value_element),
        BrowserScheduler,
        config.clone(),
    );

    let on_click = {
        let widget = widget.clone();
        Closure::<dyn FnMut(web_sys::Event)>::new(move |_ev: web_sys::Event| {
            let widget = widget.clone();
            spawn_local(async move {
                let _ = widget.increment().await;
            });
        })
    };
    button
        .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
        .map_err(|e| BindError::Listener(format!("{:?}", e)))?;
    // Listener lives as long as the page.
    on_click.forget();

    log::debug!(
        "[DOM] Bound #{} and #{}",
        config.value_element_id,
        config.button_element_id
    );

    spawn_local(async move {
        let _ = widget.load().await;
    });
    Ok(())
}

fn find_element(document: &Document, id: &str) -> Result<HtmlElement, BindError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| BindError::MissingElement(id.to_string()))?
        .dyn_into::<HtmlElement>()
        .map_err(|_| BindError::NotHtmlElement(id.to_string()))
}
