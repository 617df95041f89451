// Layout module
// Geometry produced for a single day column

use std::collections::BTreeMap;
use std::fmt;
use std::ops::{Add, Div, Mul};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::event::{CalendarEvent, EventId};

/// Vertical distance in pixels.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Px(pub f64);

/// Horizontal distance as a percentage of the day column width.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pct(pub f64);

impl Px {
    pub fn value(self) -> f64 {
        self.0
    }

    pub fn max(self, other: Px) -> Px {
        Px(self.0.max(other.0))
    }
}

impl Pct {
    pub fn value(self) -> f64 {
        self.0
    }
}

impl Add for Px {
    type Output = Px;

    fn add(self, rhs: Px) -> Px {
        Px(self.0 + rhs.0)
    }
}

impl Mul<f64> for Px {
    type Output = Px;

    fn mul(self, rhs: f64) -> Px {
        Px(self.0 * rhs)
    }
}

impl Div<f64> for Px {
    type Output = Px;

    fn div(self, rhs: f64) -> Px {
        Px(self.0 / rhs)
    }
}

impl Add for Pct {
    type Output = Pct;

    fn add(self, rhs: Pct) -> Pct {
        Pct(self.0 + rhs.0)
    }
}

impl Mul<f64> for Pct {
    type Output = Pct;

    fn mul(self, rhs: f64) -> Pct {
        Pct(self.0 * rhs)
    }
}

impl Div<f64> for Pct {
    type Output = Pct;

    fn div(self, rhs: f64) -> Pct {
        Pct(self.0 / rhs)
    }
}

impl fmt::Display for Px {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}px", self.0)
    }
}

impl fmt::Display for Pct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// Horizontal slot of a timed event among its concurrent neighbours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaneAssignment {
    pub lane_index: usize,
    pub total_lanes: usize,
}

impl LaneAssignment {
    pub const SOLO: LaneAssignment = LaneAssignment {
        lane_index: 0,
        total_lanes: 1,
    };
}

/// Box of one event in the day column: vertical in pixels, horizontal in
/// percent of the column.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EventRect {
    pub top: Px,
    pub height: Px,
    pub left: Pct,
    pub width: Pct,
}

impl EventRect {
    pub fn bottom(&self) -> Px {
        self.top + self.height
    }

    pub fn right(&self) -> Pct {
        self.left + self.width
    }

    /// Inline style for an absolutely positioned block.
    pub fn to_css(&self) -> String {
        format!(
            "top: {}; height: {}; left: {}; width: {}",
            self.top, self.height, self.left, self.width
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimedPlacement {
    pub event_id: EventId,
    pub lane: LaneAssignment,
    pub rect: EventRect,
}

/// Result of laying out one calendar day.
///
/// `timed` follows the input order of the events; `all_day` events are
/// handed back untouched for the separate all-day lane.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayLayout {
    pub day: NaiveDate,
    pub timed: Vec<TimedPlacement>,
    pub all_day: Vec<CalendarEvent>,
}

impl DayLayout {
    pub fn empty(day: NaiveDate) -> Self {
        Self {
            day,
            timed: Vec::new(),
            all_day: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.timed.is_empty() && self.all_day.is_empty()
    }

    pub fn placement(&self, id: &EventId) -> Option<&TimedPlacement> {
        self.timed.iter().find(|p| &p.event_id == id)
    }

    pub fn rect_for(&self, id: &EventId) -> Option<&EventRect> {
        self.placement(id).map(|p| &p.rect)
    }

    /// Timed rectangles keyed by event id.
    pub fn timed_positions(&self) -> BTreeMap<EventId, EventRect> {
        self.timed
            .iter()
            .map(|p| (p.event_id.clone(), p.rect))
            .collect()
    }
}
