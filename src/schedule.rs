//! Monday-anchored schedule windows.
//!
//! Every calendar date maps to the 7-day window starting on the most recent
//! Monday, so any two dates in the same Monday-Sunday span produce the same
//! window. Navigation is just the reference date shifted by whole weeks.

use chrono::{Datelike, Duration, Local, NaiveDate};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleWindow {
    pub monday: NaiveDate,
    pub sunday: NaiveDate,
    pub label: String,
}

/// The window containing `reference`.
pub fn window_for(reference: NaiveDate) -> ScheduleWindow {
    let monday = reference - Duration::days(reference.weekday().num_days_from_monday() as i64);
    let sunday = monday + Duration::days(6);

    ScheduleWindow {
        monday,
        sunday,
        label: format!("{} - {}", short_date(monday), short_date(sunday)),
    }
}

/// The window containing today's local date.
pub fn current_window() -> ScheduleWindow {
    window_for(Local::now().date_naive())
}

pub fn next_week(reference: NaiveDate) -> NaiveDate {
    reference + Duration::days(7)
}

pub fn previous_week(reference: NaiveDate) -> NaiveDate {
    reference - Duration::days(7)
}

/// Label for the week starting at `start`, e.g. "Jan 6, 2025 - Jan 12, 2025".
/// Shown next to weeks that carry a date.
pub fn week_range_label(start: NaiveDate) -> String {
    format!("{} - {}", short_date(start), short_date(start + Duration::days(6)))
}

fn short_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}
