//! Toast notification store.
//!
//! Owns the global stack of transient notifications, the severity styling
//! table and the timed dismissal chain: a toast stays fully visible for
//! 3000 ms, plays a 300 ms exit animation, then leaves the stack.

use dioxus::prelude::*;

use crate::services::scheduler::Scheduler;

/// How long a toast stays fully visible.
pub const TOAST_VISIBLE_MS: u32 = 3000;
/// Exit-animation duration before the entry is dropped.
pub const TOAST_EXIT_MS: u32 = 300;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

/// Visual row for one severity. Styling is data, not control flow.
#[derive(Debug, PartialEq, Eq)]
pub struct SeverityStyle {
    pub class: &'static str,
    pub gradient: &'static str,
    pub icon: &'static str,
}

const SUCCESS_STYLE: SeverityStyle = SeverityStyle {
    class: "toast-success",
    gradient: "linear-gradient(135deg, #10B981, #059669)",
    icon: "fa-check-circle",
};

const ERROR_STYLE: SeverityStyle = SeverityStyle {
    class: "toast-error",
    gradient: "linear-gradient(135deg, #E53935, #DC2626)",
    icon: "fa-exclamation-circle",
};

impl Severity {
    pub fn style(self) -> &'static SeverityStyle {
        match self {
            Severity::Success => &SUCCESS_STYLE,
            Severity::Error => &ERROR_STYLE,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastPhase {
    Visible,
    Closing,
}

pub type ToastId = u64;

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: ToastId,
    pub message: String,
    pub severity: Severity,
    pub phase: ToastPhase,
    pub created_at_ms: f64,
}

/// Whether a new toast replaces everything on screen or piles up.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StackPolicy {
    /// Remove every existing toast before showing the new one, so at most
    /// one is visible at a time.
    #[default]
    Replace,
    /// Let toasts accumulate; each dismisses on its own timers.
    Stack,
}

/// The set of currently mounted toasts.
///
/// Ids are never reused, so a dismissal timer that outlives its toast
/// finds nothing to touch.
#[derive(Debug, Default)]
pub struct ToastStack {
    policy: StackPolicy,
    next_id: ToastId,
    toasts: Vec<Toast>,
}

impl ToastStack {
    pub fn new(policy: StackPolicy) -> Self {
        Self {
            policy,
            next_id: 0,
            toasts: Vec::new(),
        }
    }

    pub fn push(&mut self, message: String, severity: Severity, now_ms: f64) -> ToastId {
        if self.policy == StackPolicy::Replace {
            self.toasts.clear();
        }
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast {
            id,
            message,
            severity,
            phase: ToastPhase::Visible,
            created_at_ms: now_ms,
        });
        id
    }

    /// Start the exit animation. No-op for ids already gone.
    pub fn begin_close(&mut self, id: ToastId) {
        if let Some(toast) = self.toasts.iter_mut().find(|toast| toast.id == id) {
            toast.phase = ToastPhase::Closing;
        }
    }

    /// Drop the entry. No-op for ids already gone.
    pub fn remove(&mut self, id: ToastId) {
        self.toasts.retain(|toast| toast.id != id);
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

/// Shared handle to a toast stack that timer callbacks can write through.
pub trait ToastSink: Clone + 'static {
    fn with_stack<R>(&self, f: impl FnOnce(&mut ToastStack) -> R) -> R;
}

/// Push a toast and schedule its dismissal chain.
///
/// Timer handles are dropped immediately, so the timers are fire-and-forget:
/// a toast evicted early under [`StackPolicy::Replace`] still has its old
/// timers fire, harmlessly, against an id that no longer exists.
pub fn deliver<S, K>(scheduler: &S, sink: K, message: String, severity: Severity) -> ToastId
where
    S: Scheduler + Clone + 'static,
    K: ToastSink,
{
    let id = sink.with_stack(|stack| stack.push(message, severity, scheduler.now_ms()));

    let close_sink = sink.clone();
    let exit_scheduler = scheduler.clone();
    drop(scheduler.schedule(
        TOAST_VISIBLE_MS,
        Box::new(move || {
            close_sink.with_stack(|stack| stack.begin_close(id));
            let remove_sink = close_sink.clone();
            drop(exit_scheduler.schedule(
                TOAST_EXIT_MS,
                Box::new(move || {
                    remove_sink.with_stack(|stack| stack.remove(id));
                }),
            ));
        }),
    ));
    id
}

/// Global toast state read by the `ToastHost` component.
pub static TOASTS: GlobalSignal<ToastStack> = Signal::global(ToastStack::default);

/// Write-through handle over [`TOASTS`].
#[derive(Clone, Copy)]
pub struct GlobalToasts;

impl ToastSink for GlobalToasts {
    fn with_stack<R>(&self, f: impl FnOnce(&mut ToastStack) -> R) -> R {
        f(&mut TOASTS.write())
    }
}

/// Surface a message to the user.
///
/// This is the whole user-visible reporting channel: callers never learn
/// whether anyone saw it.
#[cfg_attr(not(target_arch = "wasm32"), allow(unused_variables))]
pub fn show_toast(message: impl Into<String>, severity: Severity) {
    #[cfg(target_arch = "wasm32")]
    {
        use crate::services::scheduler::BrowserScheduler;
        deliver(&BrowserScheduler, GlobalToasts, message.into(), severity);
    }
}
