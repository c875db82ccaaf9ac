//! Plan formatting: time-of-day bucketing and the deterministic formatter.

pub mod bucket;
pub mod format;

pub use bucket::{Bucket, DEFAULT_HOUR, parse_hour, partition};
pub use format::{
    CLOSING_REMINDER, FOCUS_TIP, NO_TASKS_LINE, format_plan, journal_takeaway, wants_focus_tip,
};
