//! Time-grid model: 24 hour rows of fixed pixel height.

use chrono::NaiveTime;
use serde::Serialize;

use crate::models::layout::Px;
use crate::models::settings::{LayoutSettings, TimeFormat};
use crate::utils::date::time_to_minutes;

const HOURS_PER_DAY: u32 = 24;
const MINUTES_PER_DAY: u32 = HOURS_PER_DAY * 60;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HourLine {
    pub hour: u32,
    pub label: String,
    pub top: Px,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeGrid {
    pub hour_height: Px,
    pub slot_minutes: u32,
}

impl TimeGrid {
    pub fn new(hour_height: Px, slot_minutes: u32) -> Self {
        Self {
            hour_height,
            slot_minutes: slot_minutes.clamp(1, 60),
        }
    }

    pub fn from_settings(settings: &LayoutSettings) -> Self {
        Self::new(settings.hour_height(), settings.slot_minutes)
    }

    pub fn total_height(&self) -> Px {
        self.hour_height * HOURS_PER_DAY as f64
    }

    pub fn slot_height(&self) -> Px {
        self.hour_height * self.slot_minutes as f64 / 60.0
    }

    pub fn offset_for(&self, time: NaiveTime) -> Px {
        self.hour_height * time_to_minutes(time) / 60.0
    }

    /// Time at a vertical offset, snapped down to the slot interval.
    /// Offsets outside the grid clamp to the first or last slot.
    pub fn time_at(&self, offset: Px) -> NaiveTime {
        let raw_minutes = offset.value() / self.hour_height.value() * 60.0;
        let last_slot = MINUTES_PER_DAY - self.slot_minutes;

        let minutes = if raw_minutes.is_nan() || raw_minutes <= 0.0 {
            0
        } else {
            let snapped = (raw_minutes as u32 / self.slot_minutes) * self.slot_minutes;
            snapped.min(last_slot)
        };

        NaiveTime::from_num_seconds_from_midnight_opt(minutes * 60, 0).unwrap_or(NaiveTime::MIN)
    }

    /// One labelled line per hour, top to bottom.
    pub fn hour_lines(&self, format: TimeFormat) -> Vec<HourLine> {
        (0..HOURS_PER_DAY)
            .map(|hour| HourLine {
                hour,
                label: hour_label(hour, format),
                top: self.hour_height * hour as f64,
            })
            .collect()
    }
}

fn hour_label(hour: u32, format: TimeFormat) -> String {
    match format {
        TimeFormat::TwentyFourHour => format!("{:02}:00", hour),
        TimeFormat::TwelveHour => {
            let suffix = if hour < 12 { "AM" } else { "PM" };
            let display = match hour % 12 {
                0 => 12,
                h => h,
            };
            format!("{} {}", display, suffix)
        }
    }
}
