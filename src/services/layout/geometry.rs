//! Converts an event's time range and lane into a rectangle on the grid.

use chrono::{Duration, TimeZone};

use crate::models::event::CalendarEvent;
use crate::models::layout::{EventRect, LaneAssignment, Pct, Px};
use crate::utils::date::{duration_minutes, minutes_since_midnight};

/// Fixed inputs shared by every rectangle of one layout pass.
#[derive(Debug, Clone, Copy)]
pub struct GridMetrics {
    pub hour_height: Px,
    pub width_ceiling: Pct,
    pub default_duration: Duration,
}

impl GridMetrics {
    /// Shortest block drawn: half an hour.
    pub fn min_height(&self) -> Px {
        self.hour_height / 2.0
    }

    pub fn top_for_minutes(&self, minutes: f64) -> Px {
        self.hour_height * minutes / 60.0
    }
}

pub fn event_rect<Tz: TimeZone>(
    event: &CalendarEvent,
    lane: LaneAssignment,
    tz: &Tz,
    metrics: &GridMetrics,
) -> EventRect {
    let top = metrics.top_for_minutes(minutes_since_midnight(event.start_time, tz));

    let minutes = duration_minutes(event.duration(metrics.default_duration));
    let height = metrics.top_for_minutes(minutes).max(metrics.min_height());

    let (left, width) = horizontal_span(lane, metrics.width_ceiling);

    EventRect {
        top,
        height,
        left,
        width,
    }
}

/// `left` and `width` of a lane inside the usable column width.
pub fn horizontal_span(lane: LaneAssignment, width_ceiling: Pct) -> (Pct, Pct) {
    let total = lane.total_lanes.max(1) as f64;
    let width = width_ceiling / total;
    let left = width_ceiling * lane.lane_index as f64 / total;
    (left, width)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, FixedOffset, Utc};
    use test_case::test_case;

    fn metrics() -> GridMetrics {
        GridMetrics {
            hour_height: Px(60.0),
            width_ceiling: Pct(90.0),
            default_duration: Duration::minutes(60),
        }
    }

    fn event(start: &str, end: Option<&str>) -> CalendarEvent {
        let parse = |s: &str| DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc);
        let mut builder = CalendarEvent::builder().id("e").start(parse(start));
        if let Some(end) = end {
            builder = builder.end(parse(end));
        }
        builder.build().unwrap()
    }

    #[test]
    fn test_hour_long_event_at_nine() {
        let rect = event_rect(
            &event("2024-01-01T09:00:00Z", Some("2024-01-01T10:00:00Z")),
            LaneAssignment::SOLO,
            &Utc,
            &metrics(),
        );

        assert_eq!(rect.top, Px(540.0));
        assert_eq!(rect.height, Px(60.0));
        assert_eq!(rect.left, Pct(0.0));
        assert_eq!(rect.width, Pct(90.0));
    }

    #[test_case("2024-01-01T09:10:00Z" ; "ten minutes")]
    #[test_case("2024-01-01T09:29:00Z" ; "just under half an hour")]
    #[test_case("2024-01-01T09:00:00Z" ; "zero length")]
    #[test_case("2024-01-01T08:00:00Z" ; "inverted range")]
    fn test_short_events_get_half_hour_floor(end: &str) {
        let rect = event_rect(
            &event("2024-01-01T09:00:00Z", Some(end)),
            LaneAssignment::SOLO,
            &Utc,
            &metrics(),
        );
        assert_eq!(rect.height, Px(30.0));
    }

    #[test]
    fn test_missing_end_draws_default_duration() {
        let rect = event_rect(
            &event("2024-01-01T13:15:00Z", None),
            LaneAssignment::SOLO,
            &Utc,
            &metrics(),
        );
        assert_eq!(rect.top, Px(795.0));
        assert_eq!(rect.height, Px(60.0));
    }

    #[test]
    fn test_top_uses_display_zone() {
        let brisbane = FixedOffset::east_opt(10 * 3600).unwrap();
        let rect = event_rect(
            &event("2024-01-01T00:30:00Z", Some("2024-01-01T02:00:00Z")),
            LaneAssignment::SOLO,
            &brisbane,
            &metrics(),
        );
        assert_eq!(rect.top, Px(630.0));
        assert_eq!(rect.height, Px(90.0));
    }

    #[test_case(0, 2, 0.0, 45.0)]
    #[test_case(1, 2, 45.0, 45.0)]
    #[test_case(2, 3, 60.0, 30.0)]
    fn test_horizontal_span(lane_index: usize, total_lanes: usize, left: f64, width: f64) {
        let (l, w) = horizontal_span(
            LaneAssignment {
                lane_index,
                total_lanes,
            },
            Pct(90.0),
        );
        assert_eq!(l, Pct(left));
        assert_eq!(w, Pct(width));
    }
}
