// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for event dates.

use chrono::{Local, NaiveDate};

/// Event dates travel as `YYYY-MM-DD`.
pub const EVENT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse an event date, `None` if it isn't `YYYY-MM-DD`.
pub fn parse_event_date(date: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date.trim(), EVENT_DATE_FORMAT).ok()
}

/// Today's date in the local timezone.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Whether `date` falls before `today`. Today itself is allowed.
pub fn is_past(date: NaiveDate, today: NaiveDate) -> bool {
    date < today
}
