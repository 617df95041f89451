// Event module
// Read-only calendar event as delivered by the CRM data layer

use std::fmt;

use chrono::{DateTime, Duration, LocalResult, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Opaque event identifier. Ordered by plain string ordering.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(pub String);

impl EventId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EventId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for EventId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Calendar event consumed by the day layout.
///
/// `end_time` may be missing, in which case the event is drawn with the
/// configured default duration. An `end_time` before `start_time` is kept
/// as-is and treated as a zero-length event when laid out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub id: EventId,
    pub title: String,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    pub all_day: bool,
    pub location: Option<String>,
}

impl CalendarEvent {
    /// Create a builder for constructing events with optional fields
    ///
    /// # Examples
    /// ```
    /// use calendar_layout::models::event::CalendarEvent;
    /// use chrono::{TimeZone, Utc};
    ///
    /// let start = Utc.with_ymd_and_hms(2024, 3, 4, 9, 0, 0).unwrap();
    /// let event = CalendarEvent::builder()
    ///     .id("showing-12")
    ///     .title("Open house")
    ///     .start(start)
    ///     .build()
    ///     .unwrap();
    /// assert!(event.end_time.is_none());
    /// ```
    pub fn builder() -> CalendarEventBuilder {
        CalendarEventBuilder::new()
    }

    /// End instant used for overlap tests: the real end, or start plus
    /// `default_duration` when the event has none. Never earlier than start.
    pub fn effective_end(&self, default_duration: Duration) -> DateTime<Utc> {
        match self.end_time {
            Some(end) if end >= self.start_time => end,
            Some(_) => self.start_time,
            None => self.start_time + default_duration,
        }
    }

    /// Length of the event, clamped to zero for inverted ranges.
    pub fn duration(&self, default_duration: Duration) -> Duration {
        self.effective_end(default_duration) - self.start_time
    }

    /// Half-open interval overlap: `start < other_end && end > other_start`.
    pub fn overlaps(&self, other: &CalendarEvent, default_duration: Duration) -> bool {
        self.start_time < other.effective_end(default_duration)
            && self.effective_end(default_duration) > other.start_time
    }
}

/// Builder for creating events with optional fields
pub struct CalendarEventBuilder {
    id: Option<EventId>,
    title: Option<String>,
    start: Option<DateTime<Utc>>,
    end: Option<DateTime<Utc>>,
    all_day: bool,
    location: Option<String>,
}

impl CalendarEventBuilder {
    pub fn new() -> Self {
        Self {
            id: None,
            title: None,
            start: None,
            end: None,
            all_day: false,
            location: None,
        }
    }

    pub fn id(mut self, id: impl Into<EventId>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn start(mut self, start: DateTime<Utc>) -> Self {
        self.start = Some(start);
        self
    }

    pub fn end(mut self, end: DateTime<Utc>) -> Self {
        self.end = Some(end);
        self
    }

    pub fn all_day(mut self, all_day: bool) -> Self {
        self.all_day = all_day;
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Build the event
    pub fn build(self) -> Result<CalendarEvent, String> {
        let id = self.id.ok_or("Event id is required")?;
        let start_time = self.start.ok_or("Event start time is required")?;

        if id.as_str().trim().is_empty() {
            return Err("Event id cannot be empty".to_string());
        }

        Ok(CalendarEvent {
            id,
            title: self.title.unwrap_or_default(),
            start_time,
            end_time: self.end,
            all_day: self.all_day,
            location: self.location,
        })
    }
}

impl Default for CalendarEventBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Event as it arrives from the data layer, timestamps still textual.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    pub id: String,
    #[serde(default)]
    pub title: String,
    pub start_time: String,
    #[serde(default)]
    pub end_time: Option<String>,
    #[serde(default)]
    pub all_day: bool,
    #[serde(default)]
    pub location: Option<String>,
}

impl EventRecord {
    /// Convert into a [`CalendarEvent`], reading naive timestamps in `tz`.
    ///
    /// A bad `start_time` is an error since the event cannot be placed on
    /// any day. A bad `end_time` only drops the end, so the event falls
    /// back to the default duration.
    pub fn into_event<Tz: TimeZone>(self, tz: &Tz) -> Result<CalendarEvent, String> {
        let start_time = parse_timestamp(&self.start_time, tz).ok_or_else(|| {
            format!(
                "Event '{}' has an unreadable start time '{}'",
                self.id, self.start_time
            )
        })?;

        let end_time = match self.end_time.as_deref() {
            Some(raw) if !raw.trim().is_empty() => {
                let parsed = parse_timestamp(raw, tz);
                if parsed.is_none() {
                    log::warn!(
                        "Event '{}' has an unreadable end time '{}'; using default duration",
                        self.id,
                        raw
                    );
                }
                parsed
            }
            _ => None,
        };

        Ok(CalendarEvent {
            id: EventId(self.id),
            title: self.title,
            start_time,
            end_time,
            all_day: self.all_day,
            location: self.location,
        })
    }
}

/// Parse RFC 3339, a naive `YYYY-MM-DDTHH:MM[:SS]` (or space separated)
/// local timestamp, or a bare `YYYY-MM-DD` date taken as local midnight.
pub fn parse_timestamp<Tz: TimeZone>(raw: &str, tz: &Tz) -> Option<DateTime<Utc>> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    const NAIVE_FORMATS: [&str; 4] = [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%d %H:%M",
    ];
    let naive = NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })?;

    let local = match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) => dt,
        LocalResult::Ambiguous(earliest, _) => earliest,
        LocalResult::None => {
            // Wall time skipped by a DST change; move it past the gap.
            let shifted = tz.from_local_datetime(&(naive + Duration::hours(1))).earliest()?;
            log::warn!(
                "Local time '{}' falls in a DST gap; shifting it forward an hour",
                raw
            );
            shifted
        }
    };

    Some(local.with_timezone(&Utc))
}
