//! Deferred transitions over an injected timer capability.
//!
//! The engine never owns a timer. Auto-advance, misfire expiry and the
//! retry window each hold one [`DeferredAction`] slot and hand the
//! actual timing to whatever [`Scheduler`] the embedding layer provides.
//! [`ManualScheduler`] is the deterministic single-threaded reference
//! used in tests.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

/// Cancellation handle for one scheduled callback.
pub trait TimerHandle {
    /// Stop the callback from firing if it has not fired yet.
    fn cancel(&mut self);

    /// Whether the callback can still fire.
    fn is_active(&self) -> bool;
}

/// The timing capability the embedding layer injects.
pub trait Scheduler {
    type Handle: TimerHandle;

    /// Run `callback` once after `delay`.
    fn after(&mut self, delay: Duration, callback: Box<dyn FnOnce()>) -> Self::Handle;
}

/// One-slot holder for a deferred transition of a single kind.
///
/// Scheduling replaces whatever was outstanding (last writer wins), and
/// dropping the slot cancels it, so a discarded puzzle cannot fire a
/// stale transition into its successor.
pub struct DeferredAction<S: Scheduler> {
    handle: Option<S::Handle>,
}

impl<S: Scheduler> DeferredAction<S> {
    pub fn new() -> Self {
        Self { handle: None }
    }

    /// Schedule `action`, cancelling any previously scheduled one.
    pub fn schedule(
        &mut self,
        scheduler: &mut S,
        delay: Duration,
        action: impl FnOnce() + 'static,
    ) {
        self.cancel();
        self.handle = Some(scheduler.after(delay, Box::new(action)));
    }

    /// Cancel the outstanding action, if any.
    pub fn cancel(&mut self) {
        if let Some(mut handle) = self.handle.take() {
            handle.cancel();
        }
    }

    /// Whether a scheduled action is still waiting to fire.
    pub fn is_pending(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| h.is_active())
    }
}

impl<S: Scheduler> Default for DeferredAction<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Scheduler> Drop for DeferredAction<S> {
    fn drop(&mut self) {
        self.cancel();
    }
}

struct Timer {
    id: u64,
    due: Duration,
    callback: Box<dyn FnOnce()>,
}

#[derive(Default)]
struct QueueState {
    now: Duration,
    next_id: u64,
    timers: Vec<Timer>,
}

/// Virtual-clock scheduler; time moves only through [`Self::advance`].
///
/// Clones share the queue, so an engine holding one clone and a test
/// holding another see the same timers.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    queue: Rc<RefCell<QueueState>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move the clock forward, firing due callbacks in due order.
    ///
    /// Callbacks run with the queue unlocked, so a callback may schedule
    /// follow-ups; those also fire in this call when they fall inside
    /// the advanced window.
    pub fn advance(&mut self, elapsed: Duration) {
        let target = self.queue.borrow().now + elapsed;
        loop {
            let callback = self.pop_due(target);
            match callback {
                Some(callback) => callback(),
                None => break,
            }
        }
        self.queue.borrow_mut().now = target;
    }

    fn pop_due(&self, target: Duration) -> Option<Box<dyn FnOnce()>> {
        let mut queue = self.queue.borrow_mut();
        let mut earliest: Option<usize> = None;
        for (index, timer) in queue.timers.iter().enumerate() {
            if timer.due > target {
                continue;
            }
            match earliest {
                Some(best) if queue.timers[best].due <= timer.due => {}
                _ => earliest = Some(index),
            }
        }
        let index = earliest?;
        let timer = queue.timers.remove(index);
        queue.now = timer.due;
        Some(timer.callback)
    }

    /// Timers waiting to fire.
    pub fn pending(&self) -> usize {
        self.queue.borrow().timers.len()
    }

    /// Current virtual time.
    pub fn now(&self) -> Duration {
        self.queue.borrow().now
    }
}

impl Scheduler for ManualScheduler {
    type Handle = ManualHandle;

    fn after(&mut self, delay: Duration, callback: Box<dyn FnOnce()>) -> ManualHandle {
        let mut queue = self.queue.borrow_mut();
        let id = queue.next_id;
        queue.next_id += 1;
        let due = queue.now + delay;
        queue.timers.push(Timer { id, due, callback });
        ManualHandle {
            id,
            queue: Rc::clone(&self.queue),
        }
    }
}

/// Handle into a [`ManualScheduler`] queue.
pub struct ManualHandle {
    id: u64,
    queue: Rc<RefCell<QueueState>>,
}

impl TimerHandle for ManualHandle {
    fn cancel(&mut self) {
        self.queue.borrow_mut().timers.retain(|t| t.id != self.id);
    }

    fn is_active(&self) -> bool {
        self.queue.borrow().timers.iter().any(|t| t.id == self.id)
    }
}
