//! Source of the service's calendar date.

use chrono::{DateTime, Duration, Local, NaiveDate, TimeZone, Timelike};

/// Supplies "today" for due queries and answer stamps.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Wall clock in local time with a configurable day rollover.
///
/// Before `daily_reset_hour`, today is still yesterday, so late-night reviews
/// count towards the previous study day.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock {
    daily_reset_hour: u32,
}

impl SystemClock {
    pub fn new(daily_reset_hour: u32) -> Self {
        Self { daily_reset_hour }
    }
}

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        adjusted_date(Local::now(), self.daily_reset_hour)
    }
}

/// Study date of `now` given the hour at which a new day begins.
pub fn adjusted_date<Tz: TimeZone>(now: DateTime<Tz>, daily_reset_hour: u32) -> NaiveDate {
    if now.hour() < daily_reset_hour {
        (now - Duration::days(1)).date_naive()
    } else {
        now.date_naive()
    }
}

/// Clock pinned to one date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
