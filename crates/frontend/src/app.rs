use crate::routes::routes::AppRoutes;
use crate::shared::config::load_browser_config;
use crate::shared::state::{FilterState, LoadingStore, NavigationLoading, Notifications};
use crate::shared::timer::BrowserScheduler;
use leptos::prelude::*;
use std::rc::Rc;

#[component]
pub fn App() -> impl IntoView {
    let config = load_browser_config();
    provide_context(config);

    // App-wide stores, one instance each, read through the use_* hooks
    provide_context(FilterState::new());
    provide_context(LoadingStore::new());
    provide_context(NavigationLoading::new(
        Rc::new(BrowserScheduler),
        config.navigation.fallback_timeout(),
    ));
    provide_context(Notifications::new());

    view! {
        <AppRoutes />
    }
}
