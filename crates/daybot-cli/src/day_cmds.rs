//! CLI handlers for editing a day file.
//!
//! Implements:
//! - `daybot task add|done|rm|list`
//! - `daybot habit list|toggle`
//! - `daybot journal set|show`

use std::path::Path;

use anyhow::Result;

use daybot_core::{DayState, NewTask, Task};

use crate::day_file::{load_day, save_day};
use crate::{HabitCommands, JournalCommands, TaskCommands};

// -----------------------------------------------------------------------
// daybot task ...
// -----------------------------------------------------------------------

/// Dispatch a `TaskCommands` variant against the day file at `path`.
pub fn run_task_command(command: TaskCommands, path: &Path) -> Result<()> {
    let mut day = load_day(path)?;
    match command {
        TaskCommands::Add {
            title,
            time,
            duration,
            category,
        } => {
            let task = day.add_task(NewTask {
                title,
                time,
                duration_min: duration,
                category,
            })?;
            let id = task.id.clone();
            let description = describe_task(task);
            save_day(path, &day)?;
            println!("Task added: {id}");
            println!("  {description}");
        }
        TaskCommands::Done { id } => {
            let done = day.toggle_task(&id)?;
            let state = if done { "done" } else { "pending" };
            save_day(path, &day)?;
            println!("Task {id} marked {state}.");
        }
        TaskCommands::Rm { id } => {
            let removed = day.delete_task(&id)?;
            save_day(path, &day)?;
            println!("Task {id} deleted ({}).", removed.title);
        }
        TaskCommands::List => print_tasks(&day),
    }
    Ok(())
}

fn print_tasks(day: &DayState) {
    if day.tasks.is_empty() {
        println!("No tasks yet. Use `daybot task add <title>` to add one.");
        return;
    }
    println!("Tasks ({} pending):", day.pending_count());
    for task in &day.tasks {
        let mark = if task.done { "x" } else { " " };
        println!("  [{mark}] {}  {}", task.id, describe_task(task));
    }
}

/// One-line summary: `09:00  Write report (45m) [Deep Work]`.
fn describe_task(task: &Task) -> String {
    let mut line = format!("{}  {}", task.time.as_deref().unwrap_or("--:--"), task.title);
    if let Some(min) = task.display_duration() {
        line.push_str(&format!(" ({min}m)"));
    }
    if let Some(ref category) = task.category {
        line.push_str(&format!(" [{category}]"));
    }
    line
}

// -----------------------------------------------------------------------
// daybot habit ...
// -----------------------------------------------------------------------

/// Dispatch a `HabitCommands` variant against the day file at `path`.
pub fn run_habit_command(command: HabitCommands, path: &Path) -> Result<()> {
    let mut day = load_day(path)?;
    match command {
        HabitCommands::List => {
            for habit in &day.habits {
                let mark = if habit.done { "x" } else { " " };
                println!("  [{mark}] {}  {}", habit.id, habit.name);
            }
        }
        HabitCommands::Toggle { id } => {
            let done = day.toggle_habit(&id)?;
            let state = if done { "done" } else { "not done" };
            save_day(path, &day)?;
            println!("Habit {id} marked {state}.");
        }
    }
    Ok(())
}

// -----------------------------------------------------------------------
// daybot journal ...
// -----------------------------------------------------------------------

/// Dispatch a `JournalCommands` variant against the day file at `path`.
pub fn run_journal_command(command: JournalCommands, path: &Path) -> Result<()> {
    let mut day = load_day(path)?;
    match command {
        JournalCommands::Set { text } => {
            day.set_journal(text);
            save_day(path, &day)?;
            println!("Journal saved.");
        }
        JournalCommands::Show => {
            if day.journal.trim().is_empty() {
                println!("Journal is empty.");
            } else {
                println!("{}", day.journal);
            }
        }
    }
    Ok(())
}
