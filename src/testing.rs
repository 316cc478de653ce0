//! Test doubles for the widget seams.

use std::cell::{Cell, RefCell};
use std::collections::{BTreeSet, VecDeque};
use std::rc::Rc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::oneshot;

use crate::api::CounterApi;
use crate::display::CounterDisplay;
use crate::error::ApiError;
use crate::models::CounterValue;
use crate::schedule::Scheduler;

type Reply = Result<CounterValue, ApiError>;

enum Scripted {
    Ready(Reply),
    Pending(oneshot::Receiver<Reply>),
}

impl Scripted {
    async fn resolve(self) -> Reply {
        match self {
            Scripted::Ready(reply) => reply,
            Scripted::Pending(rx) => rx
                .await
                .unwrap_or_else(|_| Err(ApiError::Network("request dropped".to_string()))),
        }
    }
}

#[derive(Default)]
struct ScriptedState {
    fetches: RefCell<VecDeque<Scripted>>,
    increments: RefCell<VecDeque<Scripted>>,
    fetch_calls: Cell<usize>,
    increment_calls: Cell<usize>,
}

/// Answers each request with the next scripted reply. Pending replies are
/// resolved by the test through a oneshot sender.
#[derive(Clone, Default)]
pub struct ScriptedApi {
    state: Rc<ScriptedState>,
}

impl ScriptedApi {
    pub fn push_fetch(&self, reply: Reply) {
        self.state.fetches.borrow_mut().push_back(Scripted::Ready(reply));
    }

    pub fn push_pending_fetch(&self, rx: oneshot::Receiver<Reply>) {
        self.state.fetches.borrow_mut().push_back(Scripted::Pending(rx));
    }

    pub fn push_increment(&self, reply: Reply) {
        self.state.increments.borrow_mut().push_back(Scripted::Ready(reply));
    }

    pub fn push_pending_increment(&self, rx: oneshot::Receiver<Reply>) {
        self.state.increments.borrow_mut().push_back(Scripted::Pending(rx));
    }

    pub fn fetch_calls(&self) -> usize {
        self.state.fetch_calls.get()
    }

    pub fn increment_calls(&self) -> usize {
        self.state.increment_calls.get()
    }
}

fn next(queue: &RefCell<VecDeque<Scripted>>) -> Scripted {
    queue
        .borrow_mut()
        .pop_front()
        .unwrap_or_else(|| Scripted::Ready(Err(ApiError::Network("no scripted reply".to_string()))))
}

#[async_trait(?Send)]
impl CounterApi for ScriptedApi {
    async fn fetch_counter(&self) -> Result<CounterValue, ApiError> {
        self.state.fetch_calls.set(self.state.fetch_calls.get() + 1);
        next(&self.state.fetches).resolve().await
    }

    async fn increment_counter(&self) -> Result<CounterValue, ApiError> {
        self.state.increment_calls.set(self.state.increment_calls.get() + 1);
        next(&self.state.increments).resolve().await
    }
}

/// Stands in for the server: reads are side-effect free, increments add one.
#[derive(Clone)]
pub struct InMemoryCounter {
    value: Rc<Cell<u64>>,
}

impl InMemoryCounter {
    pub fn new(value: u64) -> Self {
        Self {
            value: Rc::new(Cell::new(value)),
        }
    }

    pub fn value(&self) -> u64 {
        self.value.get()
    }
}

#[async_trait(?Send)]
impl CounterApi for InMemoryCounter {
    async fn fetch_counter(&self) -> Result<CounterValue, ApiError> {
        Ok(CounterValue::new(self.value.get()))
    }

    async fn increment_counter(&self) -> Result<CounterValue, ApiError> {
        self.value.set(self.value.get() + 1);
        Ok(CounterValue::new(self.value.get()))
    }
}

#[derive(Default)]
struct DisplayState {
    text: String,
    text_writes: usize,
    classes: BTreeSet<String>,
    class_events: Vec<(&'static str, String)>,
}

/// In-memory element that records every class change.
#[derive(Clone, Default)]
pub struct RecordingDisplay {
    state: Rc<RefCell<DisplayState>>,
}

impl RecordingDisplay {
    pub fn text(&self) -> String {
        self.state.borrow().text.clone()
    }

    pub fn text_writes(&self) -> usize {
        self.state.borrow().text_writes
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.state.borrow().classes.contains(class)
    }

    pub fn class_events(&self) -> Vec<(&'static str, String)> {
        self.state.borrow().class_events.clone()
    }
}

impl CounterDisplay for RecordingDisplay {
    fn set_text(&self, text: &str) {
        let mut state = self.state.borrow_mut();
        state.text = text.to_string();
        state.text_writes += 1;
    }

    fn add_class(&self, class: &str) {
        let mut state = self.state.borrow_mut();
        state.classes.insert(class.to_string());
        state.class_events.push(("+", class.to_string()));
    }

    fn remove_class(&self, class: &str) {
        let mut state = self.state.borrow_mut();
        state.classes.remove(class);
        state.class_events.push(("-", class.to_string()));
    }
}

#[derive(Default)]
struct Clock {
    now: Duration,
    pending: Vec<(Duration, Box<dyn FnOnce()>)>,
}

/// Virtual clock; tasks fire only when the test advances time past their
/// deadline.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    clock: Rc<RefCell<Clock>>,
}

impl ManualScheduler {
    pub fn pending(&self) -> usize {
        self.clock.borrow().pending.len()
    }

    pub fn advance(&self, by: Duration) {
        let now = {
            let mut clock = self.clock.borrow_mut();
            clock.now += by;
            clock.now
        };
        loop {
            // Release the borrow before running the task.
            let due = {
                let mut clock = self.clock.borrow_mut();
                let earliest = clock
                    .pending
                    .iter()
                    .enumerate()
                    .filter(|(_, (deadline, _))| *deadline <= now)
                    .min_by_key(|(_, (deadline, _))| *deadline)
                    .map(|(index, _)| index);
                earliest.map(|index| clock.pending.remove(index).1)
            };
            match due {
                Some(task) => task(),
                None => break,
            }
        }
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) {
        let mut clock = self.clock.borrow_mut();
        let deadline = clock.now + delay;
        clock.pending.push((deadline, task));
    }
}
