//! Deferred Work
//!
//! One-shot timers on the page's event loop.

use std::time::Duration;

pub trait Scheduler {
    /// Run `task` once after `delay`. Scheduled tasks are never cancelled.
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>);
}

/// `setTimeout`-backed scheduler.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserScheduler;

#[cfg(target_arch = "wasm32")]
impl Scheduler for BrowserScheduler {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) {
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        gloo_timers::callback::Timeout::new(millis, task).forget();
    }
}
