// Test fixtures - reusable test data
// Provides consistent calendar days across the integration and property tests

#![allow(dead_code)]

use calendar_layout::models::event::CalendarEvent;
use chrono::{DateTime, NaiveDate, TimeZone, Utc};

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Returns Jan 1, 2024
    pub fn jan_1_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    /// Returns Jan 2, 2024
    pub fn jan_2_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 2).unwrap()
    }

    /// Returns an instant on Jan 1, 2024 (UTC)
    pub fn jan_1_at(hour: u32, minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, hour, minute, 0).unwrap()
    }
}

/// Sample events for testing
pub mod events {
    use super::*;

    pub fn timed(id: &str, start: DateTime<Utc>, end: DateTime<Utc>) -> CalendarEvent {
        CalendarEvent::builder()
            .id(id)
            .title(format!("Event {}", id))
            .start(start)
            .end(end)
            .build()
            .unwrap()
    }

    /// Two overlapping morning showings and an afternoon listing meeting
    pub fn showing_day() -> Vec<CalendarEvent> {
        vec![
            timed("1", dates::jan_1_at(9, 0), dates::jan_1_at(10, 0)),
            timed("2", dates::jan_1_at(9, 30), dates::jan_1_at(10, 30)),
            timed("3", dates::jan_1_at(14, 0), dates::jan_1_at(15, 0)),
        ]
    }

    /// A late event on Jan 1 and an early one on Jan 2, an hour apart
    pub fn around_midnight() -> Vec<CalendarEvent> {
        vec![
            timed(
                "A",
                dates::jan_1_at(23, 30),
                dates::jan_1_at(23, 30) + chrono::Duration::minutes(45),
            ),
            timed(
                "B",
                Utc.with_ymd_and_hms(2024, 1, 2, 0, 30, 0).unwrap(),
                Utc.with_ymd_and_hms(2024, 1, 2, 1, 0, 0).unwrap(),
            ),
        ]
    }

    /// Events exported by the CRM, as raw JSON records
    pub const CRM_EXPORT: &str = r#"[
        {"id": "1", "title": "Showing - 12 Elm St", "start_time": "2024-01-01T09:00:00Z", "end_time": "2024-01-01T10:00:00Z"},
        {"id": "2", "title": "Showing - 4 Oak Ave", "start_time": "2024-01-01T09:30:00Z", "end_time": "2024-01-01T10:30:00Z"},
        {"id": "3", "title": "Listing meeting", "start_time": "2024-01-01T14:00:00Z", "end_time": "2024-01-01T15:00:00Z", "location": "Office"},
        {"id": "4", "title": "Public holiday", "start_time": "2024-01-01", "all_day": true},
        {"id": "5", "title": "Bad row", "start_time": "not a time"}
    ]"#;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_events_are_valid() {
        let events = events::showing_day();
        assert_eq!(events.len(), 3);
        assert!(events.iter().all(|e| e.end_time.is_some()));
    }
}
