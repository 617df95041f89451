// Property-based tests for the day layout
// Random days of events checked against the layout guarantees

use calendar_layout::models::event::CalendarEvent;
use calendar_layout::models::layout::{Pct, Px};
use calendar_layout::models::settings::{LaneStrategy, LayoutSettings};
use calendar_layout::services::layout::compute_day_layout;
use calendar_layout::utils::date::local_date;
use chrono::{Duration, NaiveDate, TimeZone, Utc};
use proptest::prelude::*;

const EPSILON: f64 = 1e-9;

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

/// (start minute over two days, duration minutes possibly negative, all-day)
fn raw_events() -> impl Strategy<Value = Vec<(i64, i64, bool)>> {
    prop::collection::vec((0i64..2880, -30i64..240, prop::bool::weighted(0.1)), 0..25)
}

fn build(raw: &[(i64, i64, bool)]) -> Vec<CalendarEvent> {
    let midnight = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    raw.iter()
        .enumerate()
        .map(|(i, &(start, length, all_day))| {
            let start_time = midnight + Duration::minutes(start);
            CalendarEvent::builder()
                .id(format!("e{:02}", i))
                .start(start_time)
                .end(start_time + Duration::minutes(length))
                .all_day(all_day)
                .build()
                .unwrap()
        })
        .collect()
}

fn settings(lane_strategy: LaneStrategy) -> LayoutSettings {
    LayoutSettings {
        lane_strategy,
        ..Default::default()
    }
}

fn timed_on_day(events: &[CalendarEvent]) -> Vec<&CalendarEvent> {
    events
        .iter()
        .filter(|e| !e.all_day && local_date(e.start_time, &Utc) == day())
        .collect()
}

proptest! {
    /// Property: overlapping events never share horizontal space
    #[test]
    fn prop_overlapping_events_do_not_collide(raw in raw_events()) {
        let events = build(&raw);
        let settings = settings(LaneStrategy::Clustered);
        let layout = compute_day_layout(&events, day(), &Utc, &settings);
        let timed = timed_on_day(&events);

        for a in &timed {
            for b in &timed {
                if a.id == b.id || !a.overlaps(b, settings.default_duration()) {
                    continue;
                }
                let ra = layout.rect_for(&a.id).unwrap();
                let rb = layout.rect_for(&b.id).unwrap();
                let disjoint = ra.right().value() <= rb.left.value() + EPSILON
                    || rb.right().value() <= ra.left.value() + EPSILON;
                prop_assert!(disjoint, "{} and {} collide: {:?} vs {:?}", a.id, b.id, ra, rb);
            }
        }
    }

    /// Property: an event with no concurrent neighbour spans the full usable width
    #[test]
    fn prop_isolated_events_are_full_width(raw in raw_events()) {
        let events = build(&raw);
        for strategy in [LaneStrategy::Clustered, LaneStrategy::PerEvent] {
            let settings = settings(strategy);
            let layout = compute_day_layout(&events, day(), &Utc, &settings);
            let timed = timed_on_day(&events);

            for e in &timed {
                let isolated = timed
                    .iter()
                    .all(|o| o.id == e.id || !e.overlaps(o, settings.default_duration()));
                if isolated {
                    let rect = layout.rect_for(&e.id).unwrap();
                    prop_assert_eq!(rect.left, Pct(0.0));
                    prop_assert_eq!(rect.width, Pct(90.0));
                }
            }
        }
    }

    /// Property: lanes in a cluster never exceed the peak number of concurrent events
    #[test]
    fn prop_clustered_lanes_are_not_fragmented(raw in raw_events()) {
        let events = build(&raw);
        let settings = settings(LaneStrategy::Clustered);
        let layout = compute_day_layout(&events, day(), &Utc, &settings);
        let timed = timed_on_day(&events);
        let default = settings.default_duration();

        let peak = timed
            .iter()
            .map(|e| {
                timed
                    .iter()
                    .filter(|o| {
                        o.id == e.id
                            || (o.start_time <= e.start_time
                                && o.effective_end(default) > e.start_time)
                    })
                    .count()
            })
            .max()
            .unwrap_or(0);

        for placement in &layout.timed {
            prop_assert!(placement.lane.total_lanes <= peak.max(1));
            prop_assert!(placement.lane.lane_index < placement.lane.total_lanes);
        }
    }

    /// Property: identical input gives identical output
    #[test]
    fn prop_layout_is_idempotent(raw in raw_events()) {
        let events = build(&raw);
        for strategy in [LaneStrategy::Clustered, LaneStrategy::PerEvent] {
            let settings = settings(strategy);
            let first = compute_day_layout(&events, day(), &Utc, &settings);
            let second = compute_day_layout(&events, day(), &Utc, &settings);
            prop_assert_eq!(first, second);
        }
    }

    /// Property: nothing is drawn shorter than half an hour, and short events sit exactly on the floor
    #[test]
    fn prop_minimum_height_floor(raw in raw_events()) {
        let events = build(&raw);
        let settings = settings(LaneStrategy::Clustered);
        let layout = compute_day_layout(&events, day(), &Utc, &settings);

        for e in timed_on_day(&events) {
            let rect = layout.rect_for(&e.id).unwrap();
            prop_assert!(rect.height >= Px(30.0));
            if e.duration(settings.default_duration()) < Duration::minutes(30) {
                prop_assert_eq!(rect.height, Px(30.0));
            }
        }
    }

    /// Property: the day holds exactly the events that start on it
    #[test]
    fn prop_day_filter_is_exact(raw in raw_events()) {
        let events = build(&raw);
        let layout = compute_day_layout(&events, day(), &Utc, &settings(LaneStrategy::Clustered));

        let expected_timed: Vec<_> = timed_on_day(&events).iter().map(|e| e.id.clone()).collect();
        let actual_timed: Vec<_> = layout.timed.iter().map(|p| p.event_id.clone()).collect();
        prop_assert_eq!(actual_timed, expected_timed);

        for e in &layout.all_day {
            prop_assert!(e.all_day);
            prop_assert_eq!(local_date(e.start_time, &Utc), day());
        }
    }
}
