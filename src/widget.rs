//! Counter Widget
//!
//! Reads the server-held counter into the display on page load and
//! increments it on user activation, pulsing the display after each
//! successful increment.
//!
//! The widget never disables its control and never orders requests:
//! overlapping activations race, and the response that lands last wins the
//! display.

use std::rc::Rc;

use crate::api::CounterApi;
use crate::config::WidgetConfig;
use crate::display::CounterDisplay;
use crate::error::WidgetError;
use crate::schedule::Scheduler;

struct Inner<A, D, S> {
    api: A,
    display: D,
    scheduler: S,
    config: WidgetConfig,
}

/// Controller for one display element and one increment control.
///
/// Cheap to clone; clones share the same handles so click handlers and the
/// initial load can each own one.
pub struct CounterWidget<A, D, S> {
    inner: Rc<Inner<A, D, S>>,
}

impl<A, D, S> Clone for CounterWidget<A, D, S> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<A, D, S> CounterWidget<A, D, S>
where
    A: CounterApi + 'static,
    D: CounterDisplay + 'static,
    S: Scheduler + 'static,
{
    pub fn new(api: A, display: D, scheduler: S, config: WidgetConfig) -> Self {
        Self {
            inner: Rc::new(Inner {
                api,
                display,
                scheduler,
                config,
            }),
        }
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.inner.config
    }

    /// Fetch the counter once and render it. On failure the display shows
    /// the configured error text.
    ///
    /// The returned error has already been logged and rendered; callers may
    /// drop it.
    pub async fn load(&self) -> Result<u64, WidgetError> {
        let inner = &self.inner;
        match inner.api.fetch_counter().await {
            Ok(counter) => {
                log::info!("[COUNTER] Loaded value {}", counter.value);
                inner.display.set_text(&counter.value.to_string());
                Ok(counter.value)
            }
            Err(e) => {
                let err = WidgetError::Fetch(e);
                log::error!("[COUNTER] {}", err);
                inner.display.set_text(&inner.config.error_text);
                Err(err)
            }
        }
    }

    /// Request one increment. On success render the new value and pulse the
    /// display; on failure log and leave the display untouched.
    pub async fn increment(&self) -> Result<u64, WidgetError> {
        let inner = &self.inner;
        match inner.api.increment_counter().await {
            Ok(counter) => {
                log::info!("[COUNTER] Incremented to {}", counter.value);
                inner.display.set_text(&counter.value.to_string());
                self.pulse();
                Ok(counter.value)
            }
            Err(e) => {
                let err = WidgetError::Increment(e);
                log::error!("[COUNTER] {}", err);
                Err(err)
            }
        }
    }

    // Each pulse owns its removal timer; an earlier timer may clear the
    // class while a later pulse is still within its window.
    fn pulse(&self) {
        let inner = &self.inner;
        inner.display.add_class(&inner.config.updated_class);
        let delay = inner.config.pulse();
        let target = Rc::clone(inner);
        inner.scheduler.schedule(
            delay,
            Box::new(move || target.display.remove_class(&target.config.updated_class)),
        );
    }
}
