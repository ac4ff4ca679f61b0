//! Date-range presets used by report and list filters.
//!
//! A [`FilterOption`] together with an optional [`CustomDateRange`] resolves
//! to a concrete, inclusive [`DateRange`] anchored on the local calendar date.

use chrono::{DateTime, Datelike, Duration, Local, Months, NaiveDate, NaiveDateTime, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// First day covered by the "All Time" preset.
pub const ALL_TIME_START: (i32, u32, u32) = (2020, 1, 1);

/// Named time-window preset shown in the filter selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterOption {
    ThisWeek,
    #[default]
    ThisMonth,
    ThisQuarter,
    AllTime,
    Custom,
}

impl FilterOption {
    pub const ALL: [FilterOption; 5] = [
        FilterOption::ThisWeek,
        FilterOption::ThisMonth,
        FilterOption::ThisQuarter,
        FilterOption::AllTime,
        FilterOption::Custom,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FilterOption::ThisWeek => "This Week",
            FilterOption::ThisMonth => "This Month",
            FilterOption::ThisQuarter => "This Quarter",
            FilterOption::AllTime => "All Time",
            FilterOption::Custom => "Custom",
        }
    }

    /// Stable key, identical to the serialized form
    pub fn key(self) -> &'static str {
        match self {
            FilterOption::ThisWeek => "this_week",
            FilterOption::ThisMonth => "this_month",
            FilterOption::ThisQuarter => "this_quarter",
            FilterOption::AllTime => "all_time",
            FilterOption::Custom => "custom",
        }
    }
}

impl fmt::Display for FilterOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown filter option: {0}")]
pub struct UnknownFilterOption(pub String);

impl FromStr for FilterOption {
    type Err = UnknownFilterOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FilterOption::ALL
            .into_iter()
            .find(|option| option.key() == s)
            .ok_or_else(|| UnknownFilterOption(s.to_string()))
    }
}

/// Inclusive calendar-date range, serialized as `yyyy-MM-dd` strings.
///
/// `start_date <= end_date` always holds: [`DateRange::new`], the
/// calculator and deserialization all order the bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawDateRange")]
pub struct DateRange {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

#[derive(Deserialize)]
struct RawDateRange {
    start_date: NaiveDate,
    end_date: NaiveDate,
}

impl From<RawDateRange> for DateRange {
    fn from(raw: RawDateRange) -> Self {
        DateRange::new(raw.start_date, raw.end_date)
    }
}

impl DateRange {
    /// Builds a range from two bounds given in any order
    pub fn new(a: NaiveDate, b: NaiveDate) -> Self {
        if a <= b {
            Self {
                start_date: a,
                end_date: b,
            }
        } else {
            Self {
                start_date: b,
                end_date: a,
            }
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }

    /// Number of calendar days covered, bounds included
    pub fn days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }
}

/// User-picked bounds for [`FilterOption::Custom`].
///
/// Either bound may be missing while the user is still selecting; no range
/// is derived from an incomplete value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CustomDateRange {
    pub from: Option<NaiveDateTime>,
    pub to: Option<NaiveDateTime>,
}

impl CustomDateRange {
    pub fn new(from: Option<NaiveDateTime>, to: Option<NaiveDateTime>) -> Self {
        Self { from, to }
    }

    pub fn is_complete(&self) -> bool {
        self.from.is_some() && self.to.is_some()
    }

    pub fn bounds(&self) -> Option<(NaiveDateTime, NaiveDateTime)> {
        Some((self.from?, self.to?))
    }

    /// Parses one bound as typed or sent by a date input.
    ///
    /// Accepts `yyyy-MM-dd`, naive `yyyy-MM-ddTHH:MM[:SS[.f]]` and RFC 3339
    /// (converted to local time). Anything else is treated as "not picked".
    pub fn parse_bound(value: &str) -> Option<NaiveDateTime> {
        let value = value.trim();
        if value.is_empty() {
            return None;
        }
        if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
            return Some(dt.with_timezone(&Local).naive_local());
        }
        for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"] {
            if let Ok(dt) = NaiveDateTime::parse_from_str(value, fmt) {
                return Some(dt);
            }
        }
        NaiveDate::parse_from_str(value, "%Y-%m-%d")
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
    }
}

/// Resolves `filter` against today's local date
pub fn calculate_date_range(filter: FilterOption, custom: Option<&CustomDateRange>) -> DateRange {
    calculate_date_range_at(Local::now().date_naive(), filter, custom)
}

/// Resolves `filter` against an explicit "today".
///
/// An incomplete custom range falls back to the current week.
pub fn calculate_date_range_at(
    today: NaiveDate,
    filter: FilterOption,
    custom: Option<&CustomDateRange>,
) -> DateRange {
    match filter {
        FilterOption::ThisWeek => this_week(today),
        FilterOption::ThisMonth => month_span(today, today.month(), today.month()),
        FilterOption::ThisQuarter => {
            let quarter = today.month0() / 3;
            month_span(today, quarter * 3 + 1, quarter * 3 + 3)
        }
        FilterOption::AllTime => {
            let (year, month, day) = ALL_TIME_START;
            match NaiveDate::from_ymd_opt(year, month, day) {
                Some(start) if start <= today => DateRange::new(start, today),
                // a clock set before the first covered day
                _ => DateRange::new(today, today),
            }
        }
        FilterOption::Custom => match custom.and_then(CustomDateRange::bounds) {
            Some((from, to)) => DateRange::new(from.date(), to.date()),
            None => this_week(today),
        },
    }
}

/// Label for a picked custom range, e.g. `Jan 03 - Jan 09, 2024`
pub fn format_custom_date_range(from: &NaiveDateTime, to: &NaiveDateTime) -> String {
    format!("{} - {}", from.format("%b %d"), to.format("%b %d, %Y"))
}

fn this_week(today: NaiveDate) -> DateRange {
    // weeks start on Monday
    let offset = match today.weekday() {
        Weekday::Sun => -6,
        weekday => 1 - weekday.num_days_from_sunday() as i64,
    };
    let start = today.checked_add_signed(Duration::days(offset));
    let end = start.and_then(|start| start.checked_add_signed(Duration::days(6)));
    match (start, end) {
        (Some(start), Some(end)) => DateRange::new(start, end),
        // only reachable at the edge of the representable calendar
        _ => DateRange::new(today, today),
    }
}

/// First day of `first_month` through the last day of `last_month`,
/// both within `today`'s year.
fn month_span(today: NaiveDate, first_month: u32, last_month: u32) -> DateRange {
    let start = first_day_of_month(today, first_month);
    let end = first_day_of_month(today, last_month)
        .and_then(|first| first.checked_add_months(Months::new(1)))
        .and_then(|next| next.pred_opt());
    match (start, end) {
        (Some(start), Some(end)) => DateRange::new(start, end),
        // only reachable at the edge of the representable calendar
        _ => DateRange::new(today, today),
    }
}

fn first_day_of_month(date: NaiveDate, month: u32) -> Option<NaiveDate> {
    date.with_day(1)?.with_month(month)
}
