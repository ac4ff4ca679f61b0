use chrono::{Local, NaiveDate};
use contracts::shared::date_range::{
    calculate_date_range_at, format_custom_date_range, CustomDateRange, DateRange, FilterOption,
};
use leptos::prelude::*;

/// Everything the filter selector owns, updated as one value
#[derive(Debug, Clone, PartialEq)]
pub struct FilterSnapshot {
    pub selected: FilterOption,
    pub custom: Option<CustomDateRange>,
    pub range: DateRange,
}

/// Period filter shared by the report and list pages.
///
/// Provided once from the app root and read through [`use_filter_state`].
#[derive(Clone, Copy)]
pub struct FilterState {
    state: RwSignal<FilterSnapshot>,
    clock: fn() -> NaiveDate,
}

fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

impl FilterState {
    pub fn new() -> Self {
        Self::with_clock(local_today)
    }

    /// Same store anchored on a fixed "today"
    pub fn with_clock(clock: fn() -> NaiveDate) -> Self {
        let selected = FilterOption::default();
        Self {
            state: RwSignal::new(FilterSnapshot {
                selected,
                custom: None,
                range: calculate_date_range_at(clock(), selected, None),
            }),
            clock,
        }
    }

    pub fn set_selected_filter(&self, option: FilterOption) {
        let today = (self.clock)();
        self.state.update(|state| {
            state.selected = option;
            if option != FilterOption::Custom {
                state.custom = None;
                state.range = calculate_date_range_at(today, option, None);
            }
        });
        log::debug!("filter: selected {}", option.key());
    }

    /// Store picked bounds. The derived range only moves once both are known.
    pub fn set_custom_date_range(&self, range: CustomDateRange) {
        let today = (self.clock)();
        self.state.update(|state| {
            state.custom = Some(range);
            if range.is_complete() {
                state.range = calculate_date_range_at(today, FilterOption::Custom, Some(&range));
            }
        });
    }

    pub fn selected_filter(&self) -> FilterOption {
        self.state.with(|state| state.selected)
    }

    pub fn custom_date_range(&self) -> Option<CustomDateRange> {
        self.state.with(|state| state.custom)
    }

    pub fn date_range(&self) -> DateRange {
        self.state.with(|state| state.range)
    }

    pub fn snapshot(&self) -> FilterSnapshot {
        self.state.get()
    }

    /// Custom is selected but the user has not picked both bounds yet
    pub fn is_selecting(&self) -> bool {
        self.state.with(|state| {
            state.selected == FilterOption::Custom
                && !state.custom.is_some_and(|custom| custom.is_complete())
        })
    }

    pub fn display_text(&self) -> String {
        self.state.with(|state| {
            match (state.selected, state.custom.and_then(|custom| custom.bounds())) {
                (FilterOption::Custom, Some((from, to))) => format_custom_date_range(&from, &to),
                (selected, _) => selected.label().to_string(),
            }
        })
    }

    /// `start_date=yyyy-MM-dd&end_date=yyyy-MM-dd` for report requests
    pub fn query_string(&self) -> String {
        match serde_qs::to_string(&self.date_range()) {
            Ok(query) => query,
            Err(err) => {
                log::warn!("filter: cannot encode date range: {}", err);
                String::new()
            }
        }
    }
}

impl Default for FilterState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_filter_state() -> FilterState {
    use_context::<FilterState>().expect("FilterState not provided in context")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feb_15_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 15).unwrap()
    }

    fn d(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn range(start: NaiveDate, end: NaiveDate) -> DateRange {
        DateRange {
            start_date: start,
            end_date: end,
        }
    }

    #[test]
    fn test_initial_state_is_this_month() {
        let store = FilterState::with_clock(feb_15_2024);
        assert_eq!(store.selected_filter(), FilterOption::ThisMonth);
        assert_eq!(store.date_range(), range(d(2024, 2, 1), d(2024, 2, 29)));
        assert_eq!(store.display_text(), "This Month");
        assert!(!store.is_selecting());
    }

    #[test]
    fn test_selecting_preset_clears_custom_range() {
        let store = FilterState::with_clock(feb_15_2024);
        store.set_selected_filter(FilterOption::Custom);
        store.set_custom_date_range(CustomDateRange::new(
            d(2024, 1, 3).and_hms_opt(0, 0, 0),
            d(2024, 1, 9).and_hms_opt(0, 0, 0),
        ));
        assert_eq!(store.date_range(), range(d(2024, 1, 3), d(2024, 1, 9)));

        store.set_selected_filter(FilterOption::ThisQuarter);
        assert_eq!(store.custom_date_range(), None);
        assert_eq!(store.date_range(), range(d(2024, 1, 1), d(2024, 3, 31)));
        assert_eq!(store.display_text(), "This Quarter");
    }

    #[test]
    fn test_partial_custom_range_keeps_previous_range() {
        let store = FilterState::with_clock(feb_15_2024);
        store.set_selected_filter(FilterOption::ThisWeek);
        let week = store.date_range();

        store.set_selected_filter(FilterOption::Custom);
        store.set_custom_date_range(CustomDateRange::new(d(2024, 1, 3).and_hms_opt(0, 0, 0), None));

        assert!(store.is_selecting());
        assert_eq!(store.date_range(), week);
        assert_eq!(store.display_text(), "Custom");
    }

    #[test]
    fn test_complete_custom_range_display() {
        let store = FilterState::with_clock(feb_15_2024);
        store.set_selected_filter(FilterOption::Custom);
        store.set_custom_date_range(CustomDateRange::new(
            d(2024, 1, 3).and_hms_opt(9, 0, 0),
            d(2024, 1, 9).and_hms_opt(18, 0, 0),
        ));

        assert!(!store.is_selecting());
        assert_eq!(store.display_text(), "Jan 03 - Jan 09, 2024");
        assert_eq!(store.query_string(), "start_date=2024-01-03&end_date=2024-01-09");
    }

    #[test]
    fn test_last_write_wins() {
        let store = FilterState::with_clock(feb_15_2024);
        store.set_selected_filter(FilterOption::AllTime);
        store.set_selected_filter(FilterOption::ThisWeek);
        assert_eq!(store.selected_filter(), FilterOption::ThisWeek);
        assert_eq!(store.date_range(), range(d(2024, 2, 12), d(2024, 2, 18)));
    }

    #[test]
    fn test_stores_are_isolated() {
        let a = FilterState::with_clock(feb_15_2024);
        let b = FilterState::with_clock(feb_15_2024);
        a.set_selected_filter(FilterOption::AllTime);
        assert_eq!(b.selected_filter(), FilterOption::ThisMonth);
        assert_eq!(a.snapshot().range, range(d(2020, 1, 1), d(2024, 2, 15)));
    }
}
