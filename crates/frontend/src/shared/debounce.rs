use gloo_timers::callback::Timeout;
use leptos::prelude::*;

/// Cancellable deferred task. Scheduling replaces the pending task, and the
/// replaced [`Timeout`] is dropped, which cancels it.
#[derive(Clone, Copy)]
pub struct Debouncer {
    pending: StoredValue<Option<Timeout>, LocalStorage>,
    delay_ms: u32,
}

impl Debouncer {
    pub fn new(delay_ms: u32) -> Self {
        Self {
            pending: StoredValue::new_local(None),
            delay_ms,
        }
    }

    pub fn schedule(&self, task: impl FnOnce() + 'static) {
        let timeout = Timeout::new(self.delay_ms, task);
        self.pending.set_value(Some(timeout));
    }

    pub fn cancel(&self) {
        self.pending.set_value(None);
    }
}
