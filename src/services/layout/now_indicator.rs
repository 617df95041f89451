//! Offset of the "now" line on the day grid.
//!
//! The wall clock is injected through [`Clock`] so a layout pass stays a
//! pure function of its inputs. How often the caller re-samples is up to
//! the UI.

use chrono::{DateTime, NaiveDate, TimeZone, Timelike, Utc};

use crate::models::layout::Px;

#[cfg_attr(test, mockall::automock)]
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Reads the host clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Always returns the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// `((hour * 60 + minute) / 60) * hour_height`; seconds are ignored.
pub fn now_indicator_top<Tz: TimeZone>(now: &DateTime<Tz>, hour_height: Px) -> Px {
    let minutes = (now.hour() * 60 + now.minute()) as f64;
    hour_height * minutes / 60.0
}

pub struct NowIndicator;

impl NowIndicator {
    /// Offset of the now line when `day` is today in `tz`, otherwise `None`.
    pub fn sample<Tz: TimeZone>(
        clock: &dyn Clock,
        day: NaiveDate,
        tz: &Tz,
        hour_height: Px,
    ) -> Option<Px> {
        let now = clock.now().with_timezone(tz);
        if now.date_naive() != day {
            return None;
        }
        Some(now_indicator_top(&now, hour_height))
    }
}
