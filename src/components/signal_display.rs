//! Signal-backed display for Leptos-rendered markup.

use std::collections::BTreeSet;

use leptos::prelude::*;

use crate::display::CounterDisplay;

/// Counter text and class set held in signals; the view reads them.
#[derive(Clone, Copy)]
pub struct SignalDisplay {
    text: RwSignal<String>,
    classes: RwSignal<BTreeSet<String>>,
}

impl SignalDisplay {
    /// `placeholder` is shown until the first load settles.
    pub fn new(placeholder: &str) -> Self {
        Self {
            text: RwSignal::new(placeholder.to_string()),
            classes: RwSignal::new(BTreeSet::new()),
        }
    }

    pub fn text(&self) -> String {
        self.text.get()
    }

    /// Space-separated class attribute, `base` first.
    pub fn class_attr(&self, base: &str) -> String {
        self.classes.with(|classes| {
            std::iter::once(base)
                .chain(classes.iter().map(String::as_str))
                .collect::<Vec<_>>()
                .join(" ")
        })
    }
}

impl CounterDisplay for SignalDisplay {
    fn set_text(&self, text: &str) {
        self.text.set(text.to_string());
    }

    fn add_class(&self, class: &str) {
        self.classes.update(|classes| {
            classes.insert(class.to_string());
        });
    }

    fn remove_class(&self, class: &str) {
        self.classes.update(|classes| {
            classes.remove(class);
        });
    }
}
