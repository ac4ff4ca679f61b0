use leptos::prelude::*;
use leptos::reactive::owner::LocalStorage;
use std::rc::Rc;
use std::time::Duration;

use crate::shared::timer::{Scheduler, TimerHandle};

/// Idle -> Navigating -> Idle.
///
/// Leaves `Navigating` on the first observed location change, or when the
/// fallback timer elapses for navigations that never change the location.
/// A single flag: overlapping navigations collapse into one.
#[derive(Clone, Copy)]
pub struct NavigationLoading {
    is_navigating: RwSignal<bool>,
    last_location: StoredValue<Option<String>>,
    fallback: StoredValue<Option<TimerHandle>, LocalStorage>,
    scheduler: StoredValue<Rc<dyn Scheduler>, LocalStorage>,
    fallback_after: Duration,
}

impl NavigationLoading {
    pub fn new(scheduler: Rc<dyn Scheduler>, fallback_after: Duration) -> Self {
        Self {
            is_navigating: RwSignal::new(false),
            last_location: StoredValue::new(None),
            fallback: StoredValue::new_local(None),
            scheduler: StoredValue::new_local(scheduler),
            fallback_after,
        }
    }

    pub fn is_navigating(&self) -> bool {
        self.is_navigating.get()
    }

    /// Called by navigation triggers right before the route is pushed
    pub fn start_navigation(&self) {
        self.cancel_fallback();

        let this = *self;
        let scheduler = self.scheduler.get_value();
        let handle = scheduler.schedule(
            self.fallback_after,
            Box::new(move || {
                log::debug!("navigation: no location change, fallback elapsed");
                this.finish_navigation();
            }),
        );
        self.fallback.set_value(Some(handle));
        self.is_navigating.set(true);
        log::debug!("navigation: started");
    }

    /// Feed every location the router reports. The first one only seeds
    /// the tracker.
    pub fn observe_location(&self, location: &str) {
        let changed = self
            .last_location
            .try_update_value(|last| {
                let changed = last.as_deref().is_some_and(|previous| previous != location);
                if last.as_deref() != Some(location) {
                    *last = Some(location.to_string());
                }
                changed
            })
            .unwrap_or(false);

        if changed && self.is_navigating.get_untracked() {
            log::debug!("navigation: arrived at {}", location);
            self.finish_navigation();
        }
    }

    fn finish_navigation(&self) {
        self.cancel_fallback();
        let _ = self.is_navigating.try_set(false);
    }

    fn cancel_fallback(&self) {
        if let Some(handle) = self.fallback.try_update_value(Option::take).flatten() {
            handle.cancel();
        }
    }
}

pub fn use_navigation_loading() -> NavigationLoading {
    use_context::<NavigationLoading>().expect("NavigationLoading not provided in context")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::timer::manual::ManualScheduler;

    fn coordinator() -> (NavigationLoading, ManualScheduler) {
        let scheduler = ManualScheduler::new();
        let nav = NavigationLoading::new(Rc::new(scheduler.clone()), Duration::from_millis(5000));
        nav.observe_location("/");
        (nav, scheduler)
    }

    #[test]
    fn test_location_change_clears_immediately() {
        let (nav, scheduler) = coordinator();
        nav.start_navigation();
        assert!(nav.is_navigating());

        scheduler.advance_ms(1200);
        nav.observe_location("/orders");
        assert!(!nav.is_navigating());
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn test_fallback_clears_at_exact_boundary() {
        let (nav, scheduler) = coordinator();
        nav.start_navigation();

        scheduler.advance_ms(4999);
        assert!(nav.is_navigating());
        scheduler.advance_ms(1);
        assert!(!nav.is_navigating());
    }

    #[test]
    fn test_same_location_is_not_a_transition() {
        let (nav, scheduler) = coordinator();
        nav.start_navigation();
        nav.observe_location("/");
        assert!(nav.is_navigating());

        scheduler.advance_ms(5000);
        assert!(!nav.is_navigating());
    }

    #[test]
    fn test_restart_rearms_single_fallback() {
        let (nav, scheduler) = coordinator();
        nav.start_navigation();
        scheduler.advance_ms(3000);
        nav.start_navigation();
        assert_eq!(scheduler.pending(), 1);

        scheduler.advance_ms(2000);
        assert!(nav.is_navigating());
        scheduler.advance_ms(3000);
        assert!(!nav.is_navigating());
    }

    #[test]
    fn test_first_observation_only_seeds() {
        let scheduler = ManualScheduler::new();
        let nav = NavigationLoading::new(Rc::new(scheduler.clone()), Duration::from_millis(5000));
        nav.start_navigation();
        nav.observe_location("/reports");
        assert!(nav.is_navigating());

        nav.observe_location("/vehicles");
        assert!(!nav.is_navigating());
    }

    #[test]
    fn test_location_change_while_idle_is_recorded() {
        let (nav, scheduler) = coordinator();
        nav.observe_location("/brands");
        assert!(!nav.is_navigating());

        nav.start_navigation();
        nav.observe_location("/brands");
        assert!(nav.is_navigating());
        nav.observe_location("/roles");
        assert!(!nav.is_navigating());
        assert_eq!(scheduler.pending(), 0);
    }
}
