use leptos::prelude::*;
use thaw::*;

use crate::shared::state::{use_filter_state, use_navigation_loading};

/// Landing page: what the selected period resolves to
#[component]
pub fn PeriodOverviewDashboard() -> impl IntoView {
    let filter = use_filter_state();
    let nav = use_navigation_loading();

    view! {
        <Flex vertical=true gap=FlexGap::Large>
            <h2>"Overview"</h2>
            <Flex gap=FlexGap::Large>
                <div class="stat-card">
                    <Label>"Period"</Label>
                    <div>{move || filter.display_text()}</div>
                </div>
                <div class="stat-card">
                    <Label>"From"</Label>
                    <div>{move || filter.date_range().start_date.format("%Y-%m-%d").to_string()}</div>
                </div>
                <div class="stat-card">
                    <Label>"To"</Label>
                    <div>{move || filter.date_range().end_date.format("%Y-%m-%d").to_string()}</div>
                </div>
                <div class="stat-card">
                    <Label>"Days"</Label>
                    <div>{move || filter.date_range().days()}</div>
                </div>
            </Flex>
            <Show when=move || nav.is_navigating()>
                <div class="page-hint">"Opening page…"</div>
            </Show>
        </Flex>
    }
}
