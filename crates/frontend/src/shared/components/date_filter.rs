use chrono::NaiveDateTime;
use contracts::shared::date_range::{CustomDateRange, FilterOption};
use leptos::prelude::*;
use thaw::*;

use crate::shared::state::use_filter_state;

fn input_value(bound: Option<NaiveDateTime>) -> String {
    bound
        .map(|dt| dt.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

/// Period preset buttons plus the custom from/to inputs.
///
/// Writes into the shared [`FilterState`]; pages read the resolved range
/// from there.
///
/// [`FilterState`]: crate::shared::state::FilterState
#[component]
pub fn DateFilterSelector() -> impl IntoView {
    let filter = use_filter_state();

    let is_custom = move || filter.selected_filter() == FilterOption::Custom;

    let on_from_input = move |ev: leptos::ev::Event| {
        let from = CustomDateRange::parse_bound(&event_target_value(&ev));
        let current = filter.custom_date_range().unwrap_or_default();
        filter.set_custom_date_range(CustomDateRange::new(from, current.to));
    };

    let on_to_input = move |ev: leptos::ev::Event| {
        let to = CustomDateRange::parse_bound(&event_target_value(&ev));
        let current = filter.custom_date_range().unwrap_or_default();
        filter.set_custom_date_range(CustomDateRange::new(current.from, to));
    };

    view! {
        <style>
            ".date-filter { display: flex; align-items: center; gap: 8px; }
            .date-filter__label { font-weight: 500; white-space: nowrap; }
            .date-filter__hint { font-size: 0.75rem; color: var(--colorNeutralForeground3, #707070); }
            .date-filter input[type=\"date\"] {
                padding: 0px 8px;
                height: 28px;
                font-size: 0.875rem;
                border: 1px solid var(--colorNeutralStroke1, #d1d1d1);
                border-radius: var(--borderRadiusMedium, 4px);
                cursor: pointer;
            }"
        </style>
        <div class="date-filter">
            <ButtonGroup>
                {FilterOption::ALL
                    .into_iter()
                    .map(|option| {
                        view! {
                            <Button
                                size=ButtonSize::Small
                                appearance=move || {
                                    if filter.selected_filter() == option {
                                        ButtonAppearance::Primary
                                    } else {
                                        ButtonAppearance::Subtle
                                    }
                                }
                                on_click=move |_| filter.set_selected_filter(option)
                            >
                                {option.label()}
                            </Button>
                        }
                    })
                    .collect_view()}
            </ButtonGroup>

            <Show when=is_custom>
                <input
                    type="date"
                    prop:value=move || input_value(filter.custom_date_range().and_then(|c| c.from))
                    on:input=on_from_input
                />
                <div>"—"</div>
                <input
                    type="date"
                    prop:value=move || input_value(filter.custom_date_range().and_then(|c| c.to))
                    on:input=on_to_input
                />
            </Show>

            <span class="date-filter__label">{move || filter.display_text()}</span>
            <Show when=move || filter.is_selecting()>
                <span class="date-filter__hint">"Pick both dates to apply"</span>
            </Show>
        </div>
    }
}
