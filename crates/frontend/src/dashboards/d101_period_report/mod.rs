use leptos::prelude::*;
use thaw::*;

use crate::shared::state::use_filter_state;

/// Endpoint the report pages query with the resolved period
pub const REPORT_ENDPOINT: &str = "/api/reports/summary";

pub fn report_url(query: &str) -> String {
    if query.is_empty() {
        REPORT_ENDPOINT.to_string()
    } else {
        format!("{}?{}", REPORT_ENDPOINT, query)
    }
}

#[component]
pub fn PeriodReportDashboard() -> impl IntoView {
    let filter = use_filter_state();

    view! {
        <Flex vertical=true gap=FlexGap::Large>
            <h2>"Reports"</h2>
            <Show
                when=move || !filter.is_selecting()
                fallback=|| view! { <div>"Pick both dates of the custom period to build the report."</div> }
            >
                <Flex vertical=true gap=FlexGap::Small>
                    <Label>{move || format!("Report period: {}", filter.display_text())}</Label>
                    <code>{move || report_url(&filter.query_string())}</code>
                </Flex>
            </Show>
        </Flex>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_url() {
        assert_eq!(
            report_url("start_date=2024-04-01&end_date=2024-06-30"),
            "/api/reports/summary?start_date=2024-04-01&end_date=2024-06-30"
        );
        assert_eq!(report_url(""), "/api/reports/summary");
    }
}
