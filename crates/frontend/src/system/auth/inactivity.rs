use leptos::prelude::*;
use leptos::reactive::owner::LocalStorage;
use std::rc::Rc;
use std::time::Duration;

use crate::shared::timer::{Scheduler, TimerHandle};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InactivityPhase {
    /// Not counting (before `arm` or after `disarm`)
    Idle,
    Armed,
    /// The countdown elapsed and sign-out was triggered
    Expired,
}

/// Restartable countdown that fires `on_timeout` once after `timeout`
/// without recorded activity
#[derive(Clone, Copy)]
pub struct InactivityTimer {
    timeout: Duration,
    phase: StoredValue<InactivityPhase>,
    countdown: StoredValue<Option<TimerHandle>, LocalStorage>,
    scheduler: StoredValue<Rc<dyn Scheduler>, LocalStorage>,
    on_timeout: StoredValue<Rc<dyn Fn()>, LocalStorage>,
}

impl InactivityTimer {
    pub fn new(
        timeout: Duration,
        scheduler: Rc<dyn Scheduler>,
        on_timeout: impl Fn() + 'static,
    ) -> Self {
        Self {
            timeout,
            phase: StoredValue::new(InactivityPhase::Idle),
            countdown: StoredValue::new_local(None),
            scheduler: StoredValue::new_local(scheduler),
            on_timeout: StoredValue::new_local(Rc::new(on_timeout) as Rc<dyn Fn()>),
        }
    }

    pub fn phase(&self) -> InactivityPhase {
        self.phase.try_get_value().unwrap_or(InactivityPhase::Idle)
    }

    pub fn arm(&self) {
        self.phase.set_value(InactivityPhase::Armed);
        self.restart();
        log::debug!("inactivity: armed for {:?}", self.timeout);
    }

    /// Restart the full window. Ignored unless armed.
    pub fn record_activity(&self) {
        if self.phase() == InactivityPhase::Armed {
            self.restart();
        }
    }

    pub fn disarm(&self) {
        self.cancel_countdown();
        let _ = self.phase.try_set_value(InactivityPhase::Idle);
    }

    fn restart(&self) {
        self.cancel_countdown();
        let this = *self;
        let Some(scheduler) = self.scheduler.try_get_value() else {
            return;
        };
        let handle = scheduler.schedule(self.timeout, Box::new(move || this.expire()));
        self.countdown.set_value(Some(handle));
    }

    fn expire(&self) {
        self.cancel_countdown();
        if self.phase() != InactivityPhase::Armed {
            return;
        }
        self.phase.set_value(InactivityPhase::Expired);
        log::info!("inactivity: no activity for {:?}, signing out", self.timeout);
        if let Some(on_timeout) = self.on_timeout.try_get_value() {
            on_timeout();
        }
    }

    fn cancel_countdown(&self) {
        if let Some(handle) = self.countdown.try_update_value(Option::take).flatten() {
            handle.cancel();
        }
    }
}
