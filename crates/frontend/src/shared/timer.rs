//! Cancellable one-shot timers.
//!
//! Every timed state machine in the app owns at most one [`TimerHandle`]
//! and replaces it through `Option::take` + cancel, so a superseded timer
//! can never fire.

use std::fmt;
use std::time::Duration;

use gloo_timers::callback::Timeout;

/// Owned handle to a scheduled callback. Cancels the callback when dropped.
pub struct TimerHandle {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl TimerHandle {
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// Handle for a timer that was never scheduled
    pub fn inert() -> Self {
        Self { cancel: None }
    }

    pub fn cancel(mut self) {
        self.run_cancel();
    }

    fn run_cancel(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for TimerHandle {
    fn drop(&mut self) {
        self.run_cancel();
    }
}

impl fmt::Debug for TimerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimerHandle")
            .field("active", &self.cancel.is_some())
            .finish()
    }
}

/// Source of one-shot timers
pub trait Scheduler {
    fn schedule(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> TimerHandle;
}

/// `window.setTimeout` / `window.clearTimeout` through [`Timeout`].
///
/// The handle owns the `Timeout`; dropping it clears the browser timer and
/// frees the callback, whether or not it ever ran.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    fn schedule(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> TimerHandle {
        if web_sys::window().is_none() {
            log::warn!("no window: timer of {:?} not scheduled", delay);
            return TimerHandle::inert();
        }

        // setTimeout treats anything above i32::MAX as 0
        let millis = u32::try_from(delay.as_millis())
            .unwrap_or(u32::MAX)
            .min(i32::MAX as u32);
        let timeout = Timeout::new(millis, callback);
        TimerHandle::new(move || drop(timeout))
    }
}

#[cfg(test)]
pub(crate) mod manual {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct Task {
        id: u64,
        due: Duration,
        callback: Box<dyn FnOnce()>,
    }

    #[derive(Default)]
    struct Clock {
        now: Duration,
        next_id: u64,
        tasks: Vec<Task>,
    }

    /// Virtual clock: callbacks run only from [`ManualScheduler::advance`]
    #[derive(Clone, Default)]
    pub struct ManualScheduler {
        clock: Rc<RefCell<Clock>>,
    }

    impl ManualScheduler {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn pending(&self) -> usize {
            self.clock.borrow().tasks.len()
        }

        pub fn advance_ms(&self, millis: u64) {
            self.advance(Duration::from_millis(millis));
        }

        /// Moves time forward, firing due callbacks in (due, scheduling) order.
        /// Callbacks may schedule or cancel other timers.
        pub fn advance(&self, by: Duration) {
            let target = self.clock.borrow().now + by;
            loop {
                let next = {
                    let mut clock = self.clock.borrow_mut();
                    let index = clock
                        .tasks
                        .iter()
                        .enumerate()
                        .filter(|(_, task)| task.due <= target)
                        .min_by_key(|(_, task)| (task.due, task.id))
                        .map(|(index, _)| index);
                    index.map(|index| {
                        let task = clock.tasks.remove(index);
                        clock.now = task.due;
                        task
                    })
                };
                match next {
                    Some(task) => (task.callback)(),
                    None => break,
                }
            }
            self.clock.borrow_mut().now = target;
        }
    }

    impl Scheduler for ManualScheduler {
        fn schedule(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> TimerHandle {
            let mut clock = self.clock.borrow_mut();
            let id = clock.next_id;
            clock.next_id += 1;
            let due = clock.now + delay;
            clock.tasks.push(Task { id, due, callback });

            let clock = Rc::downgrade(&self.clock);
            TimerHandle::new(move || {
                if let Some(clock) = clock.upgrade() {
                    clock.borrow_mut().tasks.retain(|task| task.id != id);
                }
            })
        }
    }
}
