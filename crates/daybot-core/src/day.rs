//! Mutable per-day state: the collections a user edits during the day.
//!
//! [`DayState`] owns tasks, habits, and the journal. Callers mutate it through
//! the operations below and hand [`DayState::snapshot`] to the formatter; the
//! formatter never sees the mutable state itself.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;
use uuid::Uuid;

use crate::model::{Habit, NewTask, PlanContext, Task};

/// Title used when a task is submitted with a blank title.
pub const UNTITLED: &str = "Untitled";

const TASK_ID_PREFIX: &str = "task_";
const TASK_ID_LEN: usize = 7;

/// Errors from day-state operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DayError {
    #[error("task not found: {0:?}")]
    TaskNotFound(String),

    #[error("habit not found: {0:?}")]
    HabitNotFound(String),

    #[error("invalid time {0:?} (expected HH:MM)")]
    InvalidTime(String),
}

/// The editable state for one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayState {
    #[serde(default)]
    pub tasks: Vec<Task>,
    #[serde(default = "seed_habits")]
    pub habits: Vec<Habit>,
    #[serde(default)]
    pub journal: String,
}

impl Default for DayState {
    fn default() -> Self {
        Self::new()
    }
}

/// The habit set every new day starts with.
pub fn seed_habits() -> Vec<Habit> {
    vec![
        Habit::new("habit_water", "Hydration"),
        Habit::new("habit_move", "Exercise"),
        Habit::new("habit_read", "Reading"),
    ]
}

impl DayState {
    /// A fresh day: no tasks, the seed habits, an empty journal.
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            habits: seed_habits(),
            journal: String::new(),
        }
    }

    /// Add a task from user input and return it.
    ///
    /// Blank titles become [`UNTITLED`], a zero duration and a blank category
    /// are dropped, and a present time must be a valid `HH:MM`.
    pub fn add_task(&mut self, new: NewTask) -> Result<&Task, DayError> {
        let time = match new.time.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(t) if is_valid_time(t) => Some(t.to_string()),
            Some(t) => return Err(DayError::InvalidTime(t.to_string())),
        };

        let title = match new.title.trim() {
            "" => UNTITLED.to_string(),
            t => t.to_string(),
        };

        let category = new
            .category
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty());

        let task = Task {
            id: self.next_task_id(),
            title,
            time,
            duration_min: new.duration_min.filter(|m| *m > 0),
            done: false,
            category,
        };
        debug!(task_id = %task.id, "task added");
        self.tasks.push(task);
        Ok(&self.tasks[self.tasks.len() - 1])
    }

    /// Flip a task's completion flag and return the new value.
    pub fn toggle_task(&mut self, id: &str) -> Result<bool, DayError> {
        let task = self
            .tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| DayError::TaskNotFound(id.to_string()))?;
        task.done = !task.done;
        Ok(task.done)
    }

    /// Remove a task by identifier and return it.
    pub fn delete_task(&mut self, id: &str) -> Result<Task, DayError> {
        let pos = self
            .tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| DayError::TaskNotFound(id.to_string()))?;
        Ok(self.tasks.remove(pos))
    }

    /// Flip a habit's completion flag and return the new value.
    pub fn toggle_habit(&mut self, id: &str) -> Result<bool, DayError> {
        let habit = self
            .habits
            .iter_mut()
            .find(|h| h.id == id)
            .ok_or_else(|| DayError::HabitNotFound(id.to_string()))?;
        habit.done = !habit.done;
        Ok(habit.done)
    }

    /// Replace the journal text.
    pub fn set_journal(&mut self, text: impl Into<String>) {
        self.journal = text.into();
    }

    /// Number of tasks not yet done.
    pub fn pending_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.is_pending()).count()
    }

    /// Freeze the current state into a [`PlanContext`] for `date`.
    pub fn snapshot(&self, date: NaiveDate) -> PlanContext {
        PlanContext {
            date,
            tasks: self.tasks.clone(),
            habits: self.habits.clone(),
            journal: self.journal.clone(),
        }
    }

    fn next_task_id(&self) -> String {
        loop {
            let raw = Uuid::new_v4().simple().to_string();
            let id = format!("{TASK_ID_PREFIX}{}", &raw[..TASK_ID_LEN]);
            if !self.tasks.iter().any(|t| t.id == id) {
                return id;
            }
        }
    }
}

/// `HH:MM` with a 24-hour clock.
pub fn is_valid_time(s: &str) -> bool {
    let bytes = s.as_bytes();
    if bytes.len() != 5 || bytes[2] != b':' {
        return false;
    }
    let digits = |a: u8, b: u8| -> Option<u32> {
        if a.is_ascii_digit() && b.is_ascii_digit() {
            Some(u32::from(a - b'0') * 10 + u32::from(b - b'0'))
        } else {
            None
        }
    };
    match (digits(bytes[0], bytes[1]), digits(bytes[3], bytes[4])) {
        (Some(h), Some(m)) => h < 24 && m < 60,
        _ => false,
    }
}
