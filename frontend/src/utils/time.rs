use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, Utc};
use chrono_tz::Tz;

use crate::config;

fn app_time_zone() -> Tz {
    config::current_time_zone()
}

pub fn now_in_app_tz() -> DateTime<Tz> {
    Utc::now().with_timezone(&app_time_zone())
}

pub fn today_in_app_tz() -> NaiveDate {
    now_in_app_tz().date_naive()
}

pub fn day_before(date: NaiveDate) -> NaiveDate {
    date - Duration::days(1)
}

/// `dd/mm/yyyy`, the format the console shows dates in.
pub fn format_display_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Check-in times are stored in UTC; reports show them on the school clock.
pub fn utc_to_app_tz(value: NaiveDateTime) -> NaiveDateTime {
    value.and_utc().with_timezone(&app_time_zone()).naive_local()
}
