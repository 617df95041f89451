// Settings module
// Tunables for the day-view grid and lane assignment

use chrono::Duration;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::error::{LayoutError, LayoutResult};
use crate::models::layout::{Pct, Px};

/// How concurrent events are split into horizontal lanes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LaneStrategy {
    /// Each event sizes its lanes from its own overlap set and picks its
    /// lane by counting overlapping events with a smaller id.
    PerEvent,
    /// Overlapping events are grouped into clusters; every member of a
    /// cluster shares one lane count and lanes are reused inside it.
    #[default]
    Clustered,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TimeFormat {
    #[serde(rename = "12h")]
    TwelveHour,
    #[default]
    #[serde(rename = "24h")]
    TwentyFourHour,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutSettings {
    /// Pixel height of one hour of wall-clock time.
    pub hour_height: f64,
    /// Duration assumed for events with no end time.
    pub default_duration_minutes: u32,
    /// Share of the column width events may occupy; the rest is margin.
    pub width_ceiling_pct: f64,
    pub lane_strategy: LaneStrategy,
    /// IANA zone used to decide calendar days; `None` means the host zone.
    pub timezone: Option<String>,
    pub time_format: TimeFormat,
    /// Snap interval for grid hit-testing.
    pub slot_minutes: u32,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            hour_height: 60.0,
            default_duration_minutes: 60,
            width_ceiling_pct: 90.0,
            lane_strategy: LaneStrategy::Clustered,
            timezone: None,
            time_format: TimeFormat::TwentyFourHour,
            slot_minutes: 15,
        }
    }
}

impl LayoutSettings {
    pub fn validate(&self) -> Result<(), String> {
        if !(self.hour_height.is_finite() && self.hour_height > 0.0) {
            return Err("Hour height must be a positive number of pixels".to_string());
        }

        if !(self.width_ceiling_pct > 0.0 && self.width_ceiling_pct <= 100.0) {
            return Err("Width ceiling must be within (0, 100] percent".to_string());
        }

        if self.default_duration_minutes == 0 {
            return Err("Default event duration must be at least one minute".to_string());
        }

        if self.slot_minutes == 0 || 60 % self.slot_minutes != 0 {
            return Err("Slot interval must divide an hour evenly".to_string());
        }

        if let Some(ref name) = self.timezone {
            if name.parse::<Tz>().is_err() {
                return Err(format!("Unknown timezone '{}'", name));
            }
        }

        Ok(())
    }

    pub fn hour_height(&self) -> Px {
        Px(self.hour_height)
    }

    pub fn width_ceiling(&self) -> Pct {
        Pct(self.width_ceiling_pct)
    }

    pub fn default_duration(&self) -> Duration {
        Duration::minutes(self.default_duration_minutes as i64)
    }

    /// Configured IANA zone, if any.
    pub fn resolve_timezone(&self) -> LayoutResult<Option<Tz>> {
        match self.timezone.as_deref() {
            None => Ok(None),
            Some(name) => name
                .parse::<Tz>()
                .map(Some)
                .map_err(|_| LayoutError::UnknownTimezone(name.to_string())),
        }
    }
}
