//! Shared fixtures for daybot tests.
//!
//! Builders for tasks, habits, and contexts so integration tests can state
//! only the fields they care about.

use chrono::NaiveDate;

use daybot_core::{Habit, PlanContext, Task};

/// Fixed date used by fixtures, so formatted headers are stable.
pub fn fixed_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 5, 1).expect("valid fixture date")
}

/// A pending task with the given title and optional `HH:MM` time.
pub fn task(title: &str, time: Option<&str>) -> Task {
    Task {
        id: format!("task_{}", title.to_lowercase().replace(' ', "_")),
        title: title.to_string(),
        time: time.map(str::to_string),
        duration_min: None,
        done: false,
        category: None,
    }
}

/// A pending task with a duration.
pub fn timed_task(title: &str, time: &str, duration_min: u32) -> Task {
    Task {
        duration_min: Some(duration_min),
        ..task(title, Some(time))
    }
}

/// A completed task.
pub fn done_task(title: &str, time: Option<&str>) -> Task {
    Task {
        done: true,
        ..task(title, time)
    }
}

/// A habit with an explicit completion flag.
pub fn habit(name: &str, done: bool) -> Habit {
    Habit {
        id: format!("habit_{}", name.to_lowercase()),
        name: name.to_string(),
        done,
    }
}

/// A context on [`fixed_date`] with the given tasks and nothing else.
pub fn context_with_tasks(tasks: Vec<Task>) -> PlanContext {
    PlanContext {
        tasks,
        ..PlanContext::empty(fixed_date())
    }
}

/// A context exercising every section of the plan.
pub fn sample_context() -> PlanContext {
    PlanContext {
        date: fixed_date(),
        tasks: vec![
            timed_task("Deep work", "09:00", 90),
            task("Standup", Some("10:30")),
            task("Groceries", None),
            done_task("Email triage", Some("08:00")),
            timed_task("Gym", "18:15", 60),
        ],
        habits: vec![
            habit("Hydration", false),
            habit("Exercise", true),
            habit("Reading", false),
        ],
        journal: "Ship the report. Then rest.".to_string(),
    }
}
