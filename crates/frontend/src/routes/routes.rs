use crate::dashboards::d100_period_overview::PeriodOverviewDashboard;
use crate::dashboards::d101_period_report::PeriodReportDashboard;
use crate::layout::MainLayout;
use crate::shared::components::{
    LoadingOverlay, NavigationOverlay, NavigationWatcher, NotificationHost,
};
use crate::system::pages::login::LoginPage;
use leptos::prelude::*;
use leptos_router::components::{ParentRoute, Route, Router, Routes};
use leptos_router::path;

#[component]
fn NotFoundPage() -> impl IntoView {
    view! { <div class="not-found">"Page not found"</div> }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <NavigationWatcher />
            <NavigationOverlay />
            <LoadingOverlay />
            <NotificationHost />
            <Routes fallback=|| view! { <NotFoundPage /> }>
                <Route path=path!("/login") view=LoginPage />
                <ParentRoute path=path!("/") view=MainLayout>
                    <Route path=path!("") view=PeriodOverviewDashboard />
                    <Route path=path!("reports") view=PeriodReportDashboard />
                </ParentRoute>
            </Routes>
        </Router>
    }
}
