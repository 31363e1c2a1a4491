//! Timers: simulated submit delay, notice auto-dismiss and the resize debouncer.

use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;

use super::platform;

/// Delays used by the survey and dashboard views. Hosts may override them by
/// providing their own value through Dioxus context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    /// Simulated network latency between "submit" and the form reset.
    pub submit_delay_ms: u64,
    /// How long the success notice stays visible.
    pub notice_dismiss_ms: u64,
    /// Quiet period before a chart redraw after the container resizes.
    pub resize_debounce_ms: u64,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            submit_delay_ms: 2_000,
            notice_dismiss_ms: 5_000,
            resize_debounce_ms: 300,
        }
    }
}

pub async fn sleep_ms(ms: u64) {
    #[cfg(target_arch = "wasm32")]
    {
        gloo_timers::future::TimeoutFuture::new(ms.min(u32::MAX as u64) as u32).await;
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
    }
}

/// One pending timer at most: arming hands out a new ticket and every older
/// ticket stops being current.
#[derive(Debug, Clone, Default)]
pub struct SingleSlot {
    generation: Rc<Cell<u64>>,
}

impl SingleSlot {
    pub fn arm(&self) -> u64 {
        let next = self.generation.get().wrapping_add(1);
        self.generation.set(next);
        next
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.generation.get() == ticket
    }

    /// Invalidate whatever is pending.
    pub fn cancel(&self) {
        self.arm();
    }
}

#[derive(Debug, Clone)]
pub struct Debouncer {
    slot: SingleSlot,
    delay_ms: u64,
}

impl Debouncer {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            slot: SingleSlot::default(),
            delay_ms,
        }
    }

    /// Run `action` after the quiet period unless another call supersedes it.
    pub fn schedule(&self, action: impl FnOnce() + 'static) {
        platform::spawn_future(self.deferred(action));
    }

    /// The future behind [`Debouncer::schedule`]; the slot is armed immediately.
    pub fn deferred(&self, action: impl FnOnce() + 'static) -> impl Future<Output = ()> + 'static {
        let ticket = self.slot.arm();
        let slot = self.slot.clone();
        let delay_ms = self.delay_ms;
        async move {
            sleep_ms(delay_ms).await;
            if slot.is_current(ticket) {
                action();
            }
        }
    }

    pub fn cancel(&self) {
        self.slot.cancel();
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    #[test]
    fn default_timings() {
        let timings = Timings::default();
        assert_eq!(timings.submit_delay_ms, 2_000);
        assert_eq!(timings.notice_dismiss_ms, 5_000);
        assert_eq!(timings.resize_debounce_ms, 300);
    }

    #[test]
    fn arming_supersedes_previous_ticket() {
        let slot = SingleSlot::default();
        let first = slot.arm();
        assert!(slot.is_current(first));
        let second = slot.arm();
        assert!(!slot.is_current(first));
        assert!(slot.is_current(second));
        slot.cancel();
        assert!(!slot.is_current(second));
    }

    #[test]
    fn clones_share_the_slot() {
        let slot = SingleSlot::default();
        let other = slot.clone();
        let ticket = slot.arm();
        other.arm();
        assert!(!slot.is_current(ticket));
    }

    #[tokio::test(flavor = "current_thread")]
    async fn only_latest_schedule_fires() {
        let debouncer = Debouncer::new(5);
        let hits = Rc::new(RefCell::new(Vec::new()));

        let first = {
            let hits = hits.clone();
            debouncer.deferred(move || hits.borrow_mut().push(1))
        };
        let second = {
            let hits = hits.clone();
            debouncer.deferred(move || hits.borrow_mut().push(2))
        };
        futures::join!(first, second);

        assert_eq!(*hits.borrow(), vec![2]);
    }

    #[tokio::test(flavor = "current_thread")]
    async fn cancel_drops_pending_action() {
        let debouncer = Debouncer::new(5);
        let fired = Rc::new(Cell::new(false));
        let pending = {
            let fired = fired.clone();
            debouncer.deferred(move || fired.set(true))
        };
        debouncer.cancel();
        pending.await;
        assert!(!fired.get());
    }
}
