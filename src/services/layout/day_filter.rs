//! Picks the events that belong to one calendar day.
//!
//! An event belongs to the day its `start_time` falls on in the display
//! zone. Events running past midnight are not repeated on the next day.

use chrono::{NaiveDate, TimeZone};

use crate::models::event::CalendarEvent;
use crate::utils::date::is_same_day;

/// Events of one day, split by lane. Both lists keep input order.
#[derive(Debug, Default)]
pub struct DayEvents<'a> {
    pub timed: Vec<&'a CalendarEvent>,
    pub all_day: Vec<&'a CalendarEvent>,
}

impl DayEvents<'_> {
    pub fn is_empty(&self) -> bool {
        self.timed.is_empty() && self.all_day.is_empty()
    }
}

pub fn filter_day<'a, Tz: TimeZone>(
    events: &'a [CalendarEvent],
    day: NaiveDate,
    tz: &Tz,
) -> DayEvents<'a> {
    let (all_day, timed): (Vec<_>, Vec<_>) = events
        .iter()
        .filter(|event| is_same_day(event.start_time, day, tz))
        .partition(|event| event.all_day);

    DayEvents { timed, all_day }
}
