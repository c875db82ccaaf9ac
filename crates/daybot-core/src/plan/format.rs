//! Deterministic plan formatting.
//!
//! [`format_plan`] turns a [`PlanContext`] into a plain-text plan. It is the
//! single implementation shared by every fallback path: the HTTP endpoint
//! when no assistant answer is available, and the CLI `plan` command.
//!
//! The output layout is:
//!
//! ```text
//! Plan for 2024-05-01
//! Morning:
//!   - 09:00  Write report (45m)
//!
//! Afternoon:
//!   - --:--  Groceries
//!
//! Habits to hit: Hydration, Reading
//!
//! Journal takeaway: Ship the report
//!
//! Remember to schedule breaks and hydrate.
//! ```

use once_cell::sync::Lazy;
use regex::Regex;

use super::bucket::{Bucket, partition};
use crate::model::{PlanContext, Task};

/// Shown instead of bucket sections when nothing is pending.
pub const NO_TASKS_LINE: &str = "- No tasks yet. Add a few high-impact items.";

/// Appended when the prompt mentions focus or stress.
pub const FOCUS_TIP: &str =
    "Focus tip: Block 25-50m deep-work sprints, mute notifications, and batch shallow work.";

/// Always the last line of a plan.
pub const CLOSING_REMINDER: &str = "Remember to schedule breaks and hydrate.";

const MISSING_TIME: &str = "--:--";

static FOCUS_KEYWORDS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)focus|overwhelm|busy|stress").expect("valid focus keyword regex"));

/// Format a day plan from `ctx`, using `prompt` only for keyword detection.
///
/// Pure: no I/O, no clock, no randomness. Identical inputs always give
/// byte-identical output.
pub fn format_plan(prompt: &str, ctx: &PlanContext) -> String {
    let mut blocks = vec![format!("Plan for {}", ctx.date)];

    let pending = ctx.tasks.iter().filter(|t| t.is_pending());
    let groups = partition(pending);
    if groups.is_empty() {
        blocks.push(NO_TASKS_LINE.to_string());
    } else {
        for (i, (bucket, tasks)) in groups.iter().enumerate() {
            let section = render_bucket(*bucket, tasks);
            // The first section sits directly under the header.
            blocks.push(if i == 0 { section } else { format!("\n{section}") });
        }
    }

    let todo_habits: Vec<&str> = ctx
        .habits
        .iter()
        .filter(|h| !h.done)
        .map(|h| h.name.as_str())
        .collect();
    if !todo_habits.is_empty() {
        blocks.push(format!("\nHabits to hit: {}", todo_habits.join(", ")));
    }

    if let Some(takeaway) = journal_takeaway(&ctx.journal) {
        blocks.push(format!("\nJournal takeaway: {takeaway}"));
    }

    if wants_focus_tip(prompt) {
        blocks.push(format!("\n{FOCUS_TIP}"));
    }

    blocks.push(format!("\n{CLOSING_REMINDER}"));
    blocks.join("\n")
}

/// First sentence of the journal, trimmed.
///
/// Sentences end at `.`, `!`, `?`, or a newline. Returns `None` for a blank
/// journal or one with no non-blank sentence.
pub fn journal_takeaway(journal: &str) -> Option<&str> {
    journal
        .split(['.', '!', '?', '\n'])
        .map(str::trim)
        .find(|s| !s.is_empty())
}

/// Whether the prompt asks for help focusing.
pub fn wants_focus_tip(prompt: &str) -> bool {
    FOCUS_KEYWORDS.is_match(prompt)
}

fn render_bucket(bucket: Bucket, tasks: &[&Task]) -> String {
    let lines: Vec<String> = tasks.iter().map(|t| render_task(t)).collect();
    format!("{bucket}:\n{}", lines.join("\n"))
}

fn render_task(task: &Task) -> String {
    let time = task.time.as_deref().unwrap_or(MISSING_TIME);
    match task.display_duration() {
        Some(min) => format!("  - {time}  {} ({min}m)", task.title),
        None => format!("  - {time}  {}", task.title),
    }
}
