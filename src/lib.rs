// Calendar Layout Library
// Day-view event layout for the brokerage calendar: lanes, geometry, now line

pub mod error;
pub mod models;
pub mod services;
pub mod utils;

pub use error::{LayoutError, LayoutResult};
pub use models::event::{CalendarEvent, EventId, EventRecord};
pub use models::layout::{DayLayout, EventRect, LaneAssignment, Pct, Px, TimedPlacement};
pub use models::settings::{LaneStrategy, LayoutSettings, TimeFormat};
pub use services::layout::{compute_day_layout, compute_range_layout, LayoutService};
