//! Calendar period helpers.

use chrono::{Datelike, Days, Months, NaiveDate};

/// First and last day of the calendar month containing `today`.
pub fn month_window(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    let first = today - Days::new(u64::from(today.day0()));
    let last = first
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .unwrap_or(NaiveDate::MAX);
    (first, last)
}

/// The window for "this month", using the server's local calendar.
pub(crate) fn current_month_window() -> (NaiveDate, NaiveDate) {
    month_window(chrono::Local::now().date_naive())
}
