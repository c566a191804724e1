//! Delayed-task scheduling.
//!
//! Toast dismissal and the simulated registration round trip run on short
//! one-shot timers. Everything schedules through the [`Scheduler`] trait so
//! tests can drive a virtual clock instead of sleeping through real delays.

/// One-shot task accepted by a scheduler.
pub type Task = Box<dyn FnOnce() + 'static>;

/// Handle to a scheduled task.
///
/// Dropping the handle detaches the timer: the task still fires. Only an
/// explicit [`TimerHandle::cancel`] stops it.
pub struct TimerHandle {
    state: Option<HandleState>,
}

struct HandleState {
    cancel: Box<dyn FnOnce()>,
    detach: Box<dyn FnOnce()>,
}

impl TimerHandle {
    pub fn new(cancel: impl FnOnce() + 'static, detach: impl FnOnce() + 'static) -> Self {
        Self {
            state: Some(HandleState {
                cancel: Box::new(cancel),
                detach: Box::new(detach),
            }),
        }
    }

    /// Stop the task from firing. No effect if it already ran.
    pub fn cancel(mut self) {
        if let Some(state) = self.state.take() {
            (state.cancel)();
        }
    }
}

impl Drop for TimerHandle {
    fn drop(&mut self) {
        if let Some(state) = self.state.take() {
            (state.detach)();
        }
    }
}

pub trait Scheduler {
    /// Milliseconds since an arbitrary epoch. Only differences are meaningful.
    fn now_ms(&self) -> f64;

    /// Run `task` on the UI event loop after `delay_ms`.
    fn schedule(&self, delay_ms: u32, task: Task) -> TimerHandle;
}

/// Scheduler backed by the browser event loop.
#[cfg(target_arch = "wasm32")]
#[derive(Clone, Copy, Default)]
pub struct BrowserScheduler;

#[cfg(target_arch = "wasm32")]
impl Scheduler for BrowserScheduler {
    fn now_ms(&self) -> f64 {
        js_sys::Date::now()
    }

    fn schedule(&self, delay_ms: u32, task: Task) -> TimerHandle {
        use std::cell::RefCell;
        use std::rc::Rc;

        let timeout = gloo_timers::callback::Timeout::new(delay_ms, task);
        let slot = Rc::new(RefCell::new(Some(timeout)));
        let cancel_slot = slot.clone();
        TimerHandle::new(
            move || {
                if let Some(timeout) = cancel_slot.borrow_mut().take() {
                    timeout.cancel();
                }
            },
            move || {
                if let Some(timeout) = slot.borrow_mut().take() {
                    timeout.forget();
                }
            },
        )
    }
}

/// Deterministic scheduler driven by a manually advanced clock.
#[cfg(test)]
#[derive(Clone, Default)]
pub struct VirtualScheduler {
    inner: std::rc::Rc<std::cell::RefCell<VirtualInner>>,
}

#[cfg(test)]
#[derive(Default)]
struct VirtualInner {
    now_ms: f64,
    next_id: u64,
    pending: Vec<PendingTask>,
}

#[cfg(test)]
struct PendingTask {
    id: u64,
    due_ms: f64,
    task: Task,
}

#[cfg(test)]
impl VirtualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the clock, running every task that comes due, in order.
    ///
    /// Tasks scheduled by other tasks run in the same pass when their
    /// deadline falls inside the window.
    pub fn advance(&self, delta_ms: f64) {
        let target = self.inner.borrow().now_ms + delta_ms;
        loop {
            let next = {
                let mut inner = self.inner.borrow_mut();
                let due = inner
                    .pending
                    .iter()
                    .enumerate()
                    .filter(|(_, t)| t.due_ms <= target)
                    .min_by(|(_, a), (_, b)| {
                        a.due_ms
                            .partial_cmp(&b.due_ms)
                            .expect("timer deadlines are finite")
                            .then(a.id.cmp(&b.id))
                    })
                    .map(|(index, _)| index);
                match due {
                    Some(index) => {
                        let pending = inner.pending.remove(index);
                        inner.now_ms = pending.due_ms;
                        Some(pending.task)
                    }
                    None => None,
                }
            };
            match next {
                Some(task) => task(),
                None => break,
            }
        }
        self.inner.borrow_mut().now_ms = target;
    }

    pub fn pending_count(&self) -> usize {
        self.inner.borrow().pending.len()
    }
}

#[cfg(test)]
impl Scheduler for VirtualScheduler {
    fn now_ms(&self) -> f64 {
        self.inner.borrow().now_ms
    }

    fn schedule(&self, delay_ms: u32, task: Task) -> TimerHandle {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        let due_ms = inner.now_ms + f64::from(delay_ms);
        inner.pending.push(PendingTask { id, due_ms, task });
        let slot = self.inner.clone();
        TimerHandle::new(
            move || slot.borrow_mut().pending.retain(|t| t.id != id),
            || {},
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn recorder() -> (Rc<RefCell<Vec<&'static str>>>, impl Fn(&'static str) + Clone) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = log.clone();
        (log, move |entry| sink.borrow_mut().push(entry))
    }

    #[test]
    fn tasks_run_in_deadline_order() {
        let scheduler = VirtualScheduler::new();
        let (log, record) = recorder();

        let late = record.clone();
        let early = record.clone();
        let _a = scheduler.schedule(300, Box::new(move || late("late")));
        let _b = scheduler.schedule(100, Box::new(move || early("early")));

        scheduler.advance(300.0);
        assert_eq!(*log.borrow(), vec!["early", "late"]);
        assert_eq!(scheduler.pending_count(), 0);
    }

    #[test]
    fn dropped_handle_still_fires() {
        let scheduler = VirtualScheduler::new();
        let (log, record) = recorder();

        drop(scheduler.schedule(50, Box::new(move || record("fired"))));
        scheduler.advance(50.0);
        assert_eq!(*log.borrow(), vec!["fired"]);
    }

    #[test]
    fn cancelled_handle_never_fires() {
        let scheduler = VirtualScheduler::new();
        let (log, record) = recorder();

        let handle = scheduler.schedule(50, Box::new(move || record("fired")));
        handle.cancel();
        scheduler.advance(100.0);
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn chained_tasks_respect_their_own_deadlines() {
        let scheduler = VirtualScheduler::new();
        let (log, record) = recorder();

        let chained = scheduler.clone();
        let inner_record = record.clone();
        drop(scheduler.schedule(
            100,
            Box::new(move || {
                record("outer");
                drop(chained.schedule(100, Box::new(move || inner_record("inner"))));
            }),
        ));

        scheduler.advance(150.0);
        assert_eq!(*log.borrow(), vec!["outer"]);
        scheduler.advance(50.0);
        assert_eq!(*log.borrow(), vec!["outer", "inner"]);
    }

    #[test]
    fn clock_tracks_advances() {
        let scheduler = VirtualScheduler::new();
        assert_eq!(scheduler.now_ms(), 0.0);
        scheduler.advance(1234.0);
        assert_eq!(scheduler.now_ms(), 1234.0);
    }
}
