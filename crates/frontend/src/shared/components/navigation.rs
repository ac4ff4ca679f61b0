use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};
use thaw::*;

use crate::shared::state::use_navigation_loading;

/// Reports router location changes to [`NavigationLoading`].
/// Must be rendered inside the `<Router>`.
///
/// [`NavigationLoading`]: crate::shared::state::NavigationLoading
#[component]
pub fn NavigationWatcher() -> impl IntoView {
    let nav = use_navigation_loading();
    let location = use_location();
    let (pathname, search) = (location.pathname, location.search);

    Effect::new(move |_| {
        let current = format!("{}{}", pathname.get(), search.get());
        nav.observe_location(&current);
    });
}

/// Progress bar shown while a navigation is in flight
#[component]
pub fn NavigationOverlay(
    /// Also dim the page and show a spinner
    #[prop(optional)]
    full_screen: bool,
) -> impl IntoView {
    let nav = use_navigation_loading();

    view! {
        <style>
            ".nav-progress {
                position: fixed;
                top: 0;
                left: 0;
                right: 0;
                height: 3px;
                z-index: 1100;
                overflow: hidden;
                background: var(--colorBrandBackground2, rgba(59, 130, 246, 0.2));
            }
            .nav-progress__bar {
                width: 40%;
                height: 100%;
                background: var(--colorBrandBackground, #3b82f6);
                animation: nav-progress 1.2s ease-in-out infinite;
            }
            @keyframes nav-progress {
                from { transform: translateX(-100%); }
                to { transform: translateX(250%); }
            }
            .nav-overlay {
                position: fixed;
                inset: 0;
                z-index: 1090;
                display: flex;
                align-items: center;
                justify-content: center;
                background: rgba(255, 255, 255, 0.4);
            }"
        </style>
        <Show when=move || nav.is_navigating()>
            <div class="nav-progress">
                <div class="nav-progress__bar"></div>
            </div>
            {full_screen.then(|| view! {
                <div class="nav-overlay">
                    <Spinner />
                </div>
            })}
        </Show>
    }
}

/// Link that marks the navigation as started before pushing the route
#[component]
pub fn NavLink(#[prop(into)] href: String, children: Children) -> impl IntoView {
    let nav = use_navigation_loading();
    let navigate = use_navigate();
    let pathname = use_location().pathname;

    let is_active = {
        let href = href.clone();
        move || pathname.get() == href
    };

    let on_click = {
        let target = href.clone();
        move |ev: leptos::ev::MouseEvent| {
            ev.prevent_default();
            // same-route clicks never change the location
            if pathname.get_untracked() == target {
                return;
            }
            nav.start_navigation();
            navigate(&target, Default::default());
        }
    };

    view! {
        <a
            href=href
            class=move || if is_active() { "nav-link nav-link--active" } else { "nav-link" }
            on:click=on_click
        >
            {children()}
        </a>
    }
}
