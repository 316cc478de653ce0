//! Display Seam
//!
//! The element that mirrors the counter. Implemented over a raw DOM element
//! (`dom::ElementDisplay`) and over Leptos signals
//! (`components::SignalDisplay`).

/// Text sink plus class list of the counter element.
///
/// Methods take `&self`: DOM handles and signals are interior-mutable.
pub trait CounterDisplay {
    fn set_text(&self, text: &str);
    fn add_class(&self, class: &str);
    fn remove_class(&self, class: &str);
}
