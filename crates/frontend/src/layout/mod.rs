pub mod top_header;

use crate::system::auth::InactivityGuard;
use leptos::prelude::*;
use leptos_router::components::Outlet;
use top_header::TopHeader;

/// Authenticated part of the app.
///
/// ```text
/// +------------------------------------------+
/// |  TopHeader (links, period filter)        |
/// +------------------------------------------+
/// |  Routed page                             |
/// +------------------------------------------+
/// ```
///
/// The inactivity countdown runs while this layout is mounted.
#[component]
pub fn MainLayout() -> impl IntoView {
    view! {
        <InactivityGuard>
            <div class="app-layout">
                <TopHeader />
                <main class="app-main">
                    <Outlet />
                </main>
            </div>
        </InactivityGuard>
    }
}
