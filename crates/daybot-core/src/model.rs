//! Data model: tasks, habits, and the immutable plan context.
//!
//! Field names serialize in camelCase so a context produced by the browser
//! client (`durationMin`, ...) deserializes without translation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Task
// ---------------------------------------------------------------------------

/// A single item on the day's agenda.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Opaque identifier, unique within the day's task list.
    pub id: String,
    /// Display title. Never empty for tasks created through [`crate::day::DayState`].
    pub title: String,
    /// Time of day as `HH:MM`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    /// Planned duration in minutes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_min: Option<u32>,
    /// Completion flag.
    #[serde(default)]
    pub done: bool,
    /// Free-form category label (e.g. "Deep Work", "Errand").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl Task {
    /// A task still to be done.
    pub fn is_pending(&self) -> bool {
        !self.done
    }

    /// Duration worth displaying. Zero counts as absent.
    pub fn display_duration(&self) -> Option<u32> {
        self.duration_min.filter(|m| *m > 0)
    }
}

/// User-submitted fields for a new task. Identifier and completion flag are
/// assigned by [`crate::day::DayState::add_task`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewTask {
    pub title: String,
    pub time: Option<String>,
    pub duration_min: Option<u32>,
    pub category: Option<String>,
}

// ---------------------------------------------------------------------------
// Habit
// ---------------------------------------------------------------------------

/// A recurring daily habit with a per-day completion flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Habit {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub done: bool,
}

impl Habit {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            done: false,
        }
    }
}

// ---------------------------------------------------------------------------
// PlanContext
// ---------------------------------------------------------------------------

/// Immutable snapshot of a day's state, assembled at request time and used
/// only as input to plan formatting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanContext {
    #[serde(default = "today")]
    pub date: NaiveDate,
    #[serde(default)]
    pub tasks: Vec<Task>,
    #[serde(default)]
    pub habits: Vec<Habit>,
    #[serde(default)]
    pub journal: String,
}

impl PlanContext {
    /// A context with no tasks, no habits, and an empty journal.
    pub fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            tasks: Vec::new(),
            habits: Vec::new(),
            journal: String::new(),
        }
    }
}

/// Today's date in UTC, the default for contexts that omit one.
pub fn today() -> NaiveDate {
    chrono::Utc::now().date_naive()
}
