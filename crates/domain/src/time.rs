//! Time and date helpers.

use chrono::{DateTime, NaiveDate, Utc};

/// UTC timestamp.
pub type Timestamp = DateTime<Utc>;

/// Return the current UTC time.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now()
}

/// Return the current UTC calendar date, used as a post's creation date.
#[must_use]
pub fn today() -> NaiveDate {
    now().date_naive()
}

/// Render a date the way post headers show it, e.g. `December 20, 2024`.
#[must_use]
pub fn long_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Render a date the way post cards show it, e.g. `Dec 20, 2024`.
#[must_use]
pub fn short_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}
