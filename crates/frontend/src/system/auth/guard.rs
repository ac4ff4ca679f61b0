use leptos::ev;
use leptos::prelude::*;
use std::rc::Rc;
use std::time::Duration;

use super::inactivity::InactivityTimer;
use super::session;
use crate::shared::config::AppConfig;
use crate::shared::timer::BrowserScheduler;

/// Window listeners for user activity. Removed on `release` or drop,
/// whichever comes first.
pub struct ActivityListeners {
    handles: Vec<WindowListenerHandle>,
}

impl ActivityListeners {
    pub fn attach(on_activity: impl Fn() + Clone + Send + Sync + 'static) -> Self {
        let handles = vec![
            window_event_listener(ev::pointermove, {
                let on_activity = on_activity.clone();
                move |_| on_activity()
            }),
            window_event_listener(ev::pointerdown, {
                let on_activity = on_activity.clone();
                move |_| on_activity()
            }),
            window_event_listener(ev::keydown, {
                let on_activity = on_activity.clone();
                move |_| on_activity()
            }),
            window_event_listener(ev::touchstart, {
                let on_activity = on_activity.clone();
                move |_| on_activity()
            }),
            window_event_listener(ev::scroll, move |_| on_activity()),
        ];
        Self { handles }
    }

    pub fn release(&mut self) {
        for handle in self.handles.drain(..) {
            handle.remove();
        }
    }
}

impl Drop for ActivityListeners {
    fn drop(&mut self) {
        self.release();
    }
}

/// Signs the user out after a period without input.
///
/// Wrap the authenticated part of the app with it; the countdown and the
/// listeners live exactly as long as this component.
#[component]
pub fn InactivityGuard(
    /// Overrides `session.inactivity_timeout_secs` from the config
    #[prop(optional)]
    timeout: Option<Duration>,
    children: Children,
) -> impl IntoView {
    let config = use_context::<AppConfig>().unwrap_or_default();
    let timeout = timeout.unwrap_or_else(|| config.session.inactivity_timeout());

    let timer = InactivityTimer::new(
        timeout,
        Rc::new(BrowserScheduler),
        session::sign_out_to_login,
    );
    timer.arm();

    let listeners = StoredValue::new_local(ActivityListeners::attach(move || {
        timer.record_activity()
    }));

    on_cleanup(move || {
        timer.disarm();
        listeners.update_value(ActivityListeners::release);
    });

    children()
}
