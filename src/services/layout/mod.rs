//! Day-view layout pipeline: filter the day, assign lanes, compute rectangles.
//!
//! Every call is a fresh, stateless pass over already-fetched events. Bad
//! event data (inverted ranges, missing ends) degrades to a short or
//! default-length block and never stops the rest of the day from rendering.

pub mod day_filter;
pub mod geometry;
pub mod grid;
pub mod lanes;
pub mod now_indicator;

use chrono::{NaiveDate, TimeZone};

use crate::models::event::CalendarEvent;
use crate::models::layout::{DayLayout, Px, TimedPlacement};
use crate::models::settings::LayoutSettings;

pub use day_filter::{filter_day, DayEvents};
pub use geometry::{event_rect, horizontal_span, GridMetrics};
pub use grid::{HourLine, TimeGrid};
pub use lanes::assign_lanes;
pub use now_indicator::{now_indicator_top, Clock, FixedClock, NowIndicator, SystemClock};

/// Lay out one calendar day as seen in `tz`.
pub fn compute_day_layout<Tz: TimeZone>(
    events: &[CalendarEvent],
    day: NaiveDate,
    tz: &Tz,
    settings: &LayoutSettings,
) -> DayLayout {
    let DayEvents { timed, all_day } = filter_day(events, day, tz);

    let metrics = GridMetrics {
        hour_height: settings.hour_height(),
        width_ceiling: settings.width_ceiling(),
        default_duration: settings.default_duration(),
    };

    let lanes = assign_lanes(&timed, settings.lane_strategy, metrics.default_duration);

    let timed: Vec<TimedPlacement> = timed
        .iter()
        .zip(lanes)
        .map(|(event, lane)| {
            if matches!(event.end_time, Some(end) if end < event.start_time) {
                log::warn!(
                    "Event '{}' ends before it starts; drawing it as zero length",
                    event.id
                );
            }
            TimedPlacement {
                event_id: event.id.clone(),
                lane,
                rect: event_rect(event, lane, tz, &metrics),
            }
        })
        .collect();

    log::debug!(
        "Laid out {}: {} timed, {} all-day ({:?} lanes)",
        day,
        timed.len(),
        all_day.len(),
        settings.lane_strategy
    );

    DayLayout {
        day,
        timed,
        all_day: all_day.into_iter().cloned().collect(),
    }
}

/// Lay out several days independently, in the order requested.
pub fn compute_range_layout<Tz: TimeZone>(
    events: &[CalendarEvent],
    days: &[NaiveDate],
    tz: &Tz,
    settings: &LayoutSettings,
) -> Vec<DayLayout> {
    days.iter()
        .map(|&day| compute_day_layout(events, day, tz, settings))
        .collect()
}

/// Layout entry point bound to one set of settings, display zone and clock.
pub struct LayoutService<'a, Tz: TimeZone> {
    settings: &'a LayoutSettings,
    tz: Tz,
    clock: &'a dyn Clock,
}

impl<'a, Tz: TimeZone> LayoutService<'a, Tz> {
    pub fn new(settings: &'a LayoutSettings, tz: Tz, clock: &'a dyn Clock) -> Self {
        Self {
            settings,
            tz,
            clock,
        }
    }

    pub fn settings(&self) -> &LayoutSettings {
        self.settings
    }

    pub fn grid(&self) -> TimeGrid {
        TimeGrid::from_settings(self.settings)
    }

    pub fn day(&self, events: &[CalendarEvent], day: NaiveDate) -> DayLayout {
        compute_day_layout(events, day, &self.tz, self.settings)
    }

    pub fn range(&self, events: &[CalendarEvent], days: &[NaiveDate]) -> Vec<DayLayout> {
        compute_range_layout(events, days, &self.tz, self.settings)
    }

    /// Calendar date the clock currently reads in the display zone.
    pub fn today(&self) -> NaiveDate {
        self.clock.now().with_timezone(&self.tz).date_naive()
    }

    /// Now-line offset for `day`, or `None` unless `day` is today.
    pub fn now_indicator(&self, day: NaiveDate) -> Option<Px> {
        NowIndicator::sample(self.clock, day, &self.tz, self.settings.hour_height())
    }
}
