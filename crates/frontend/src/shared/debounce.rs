use gloo_timers::callback::Timeout;
use leptos::prelude::*;

/// Runs the latest scheduled callback once `delay_ms` pass without another
/// `schedule` call. Dropping a pending [`Timeout`] cancels it.
#[derive(Clone, Copy)]
pub struct Debouncer {
    delay_ms: u32,
    pending: StoredValue<Option<Timeout>, LocalStorage>,
}

impl Debouncer {
    pub fn new(delay_ms: u32) -> Self {
        Self {
            delay_ms,
            pending: StoredValue::new_local(None),
        }
    }

    pub fn schedule(&self, callback: impl FnOnce() + 'static) {
        let timeout = Timeout::new(self.delay_ms, callback);
        self.pending.set_value(Some(timeout));
    }

    /// Drops the pending callback, if any.
    pub fn cancel(&self) {
        self.pending.set_value(None);
    }
}
