//! Cancellable delayed load scheduling.
//!
//! The debouncer is a pure data structure with no I/O: it records at most
//! one pending load and when it becomes due. The host event loop asks for
//! `next_deadline()` to size its poll timeout and calls `take_ready()` when
//! it wakes. Scheduling a new load cancels the pending one, so the last
//! request within the window wins.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Default debounce window in milliseconds.
pub const DEFAULT_DEBOUNCE_MS: u64 = 300;

/// Source of the current time, injected for testability.
pub trait Clock {
    /// The current instant.
    fn now(&self) -> Instant;
}

/// Wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Manually advanced clock for tests and scripted replays.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Rc<Cell<Instant>>,
}

impl ManualClock {
    /// Start at the current instant.
    pub fn new() -> Self {
        Self {
            now: Rc::new(Cell::new(Instant::now())),
        }
    }

    /// Move time forward.
    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.now.get()
    }
}

/// A fetch the host should run against the options loader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadRequest {
    /// Filter text captured when the load was initiated.
    pub filter_text: String,
}

/// Handle returned by [`Debouncer::schedule`], used to cancel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

struct Pending {
    handle: TimerHandle,
    due: Instant,
    request: LoadRequest,
}

/// Single-slot cancellable timer for debounced loads.
#[derive(Default)]
pub struct Debouncer {
    pending: Option<Pending>,
    next_handle: u64,
}

impl Debouncer {
    /// Create an idle debouncer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `request` to become ready `delay` after `now`.
    ///
    /// Any pending request is cancelled first.
    pub fn schedule(&mut self, request: LoadRequest, delay: Duration, now: Instant) -> TimerHandle {
        if let Some(previous) = self.pending.take() {
            tracing::trace!(
                superseded = %previous.request.filter_text,
                "Debounced load superseded"
            );
        }
        self.next_handle += 1;
        let handle = TimerHandle(self.next_handle);
        self.pending = Some(Pending {
            handle,
            due: now + delay,
            request,
        });
        handle
    }

    /// Cancel the pending request if `handle` still refers to it.
    ///
    /// Returns `true` if something was cancelled.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        match &self.pending {
            Some(pending) if pending.handle == handle => {
                self.pending = None;
                true
            }
            _ => false,
        }
    }

    /// Remove and return the pending request if it is due.
    pub fn take_ready(&mut self, now: Instant) -> Option<LoadRequest> {
        match &self.pending {
            Some(pending) if now >= pending.due => self.pending.take().map(|p| p.request),
            _ => None,
        }
    }

    /// When the pending request becomes due, if any.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|p| p.due)
    }

    /// Whether a request is waiting.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

impl fmt::Debug for Debouncer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Debouncer")
            .field(
                "pending",
                &self.pending.as_ref().map(|p| p.request.filter_text.as_str()),
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(text: &str) -> LoadRequest {
        LoadRequest {
            filter_text: text.to_string(),
        }
    }

    #[test]
    fn new_debouncer_is_idle() {
        let debouncer = Debouncer::new();
        assert!(!debouncer.is_pending());
        assert_eq!(debouncer.next_deadline(), None);
    }

    #[test]
    fn request_is_not_ready_before_delay() {
        let mut debouncer = Debouncer::new();
        let now = Instant::now();
        debouncer.schedule(request("a"), Duration::from_millis(300), now);

        assert_eq!(debouncer.take_ready(now), None);
        assert_eq!(
            debouncer.take_ready(now + Duration::from_millis(299)),
            None
        );
        assert!(debouncer.is_pending());
    }

    #[test]
    fn request_is_ready_after_delay_and_taken_once() {
        let mut debouncer = Debouncer::new();
        let now = Instant::now();
        debouncer.schedule(request("a"), Duration::from_millis(300), now);

        let later = now + Duration::from_millis(300);
        assert_eq!(debouncer.take_ready(later), Some(request("a")));
        assert_eq!(debouncer.take_ready(later), None);
    }

    #[test]
    fn rescheduling_supersedes_and_resets_window() {
        let mut debouncer = Debouncer::new();
        let now = Instant::now();
        debouncer.schedule(request("a"), Duration::from_millis(300), now);
        let second = now + Duration::from_millis(200);
        debouncer.schedule(request("ab"), Duration::from_millis(300), second);

        assert_eq!(debouncer.take_ready(now + Duration::from_millis(300)), None);
        assert_eq!(
            debouncer.take_ready(second + Duration::from_millis(300)),
            Some(request("ab"))
        );
    }

    #[test]
    fn cancel_only_affects_matching_handle() {
        let mut debouncer = Debouncer::new();
        let now = Instant::now();
        let first = debouncer.schedule(request("a"), Duration::from_millis(10), now);
        let second = debouncer.schedule(request("b"), Duration::from_millis(10), now);

        assert!(!debouncer.cancel(first));
        assert!(debouncer.is_pending());
        assert!(debouncer.cancel(second));
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn manual_clock_advances() {
        let clock = ManualClock::new();
        let start = clock.now();
        clock.advance(Duration::from_millis(50));
        assert_eq!(clock.now() - start, Duration::from_millis(50));
    }
}
