//! `daybot plan`: print the deterministic plan for a day.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;

use daybot_core::{PlanContext, format_plan};

use crate::day_file::load_day;

/// Where the plan's context comes from.
pub enum ContextSource<'a> {
    /// A JSON `PlanContext` file, as the browser client would send it.
    File(&'a Path),
    /// The day file for `date`.
    Day { path: &'a Path, date: NaiveDate },
}

/// Build the context from `source` and print the formatted plan.
pub fn run_plan(prompt: &str, source: ContextSource<'_>) -> Result<()> {
    let ctx = load_context(source)?;
    println!("{}", format_plan(prompt, &ctx));
    Ok(())
}

fn load_context(source: ContextSource<'_>) -> Result<PlanContext> {
    match source {
        ContextSource::File(path) => {
            let contents = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read context file: {}", path.display()))?;
            serde_json::from_str(&contents)
                .with_context(|| format!("failed to parse context file: {}", path.display()))
        }
        ContextSource::Day { path, date } => Ok(load_day(path)?.snapshot(date)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_file_is_parsed() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("ctx.json");
        std::fs::write(
            &path,
            r#"{"date": "2024-05-01", "tasks": [{"id": "t1", "title": "Run", "time": "06:30", "done": false}]}"#,
        )
        .unwrap();

        let ctx = load_context(ContextSource::File(&path)).unwrap();
        assert_eq!(ctx.date.to_string(), "2024-05-01");
        assert_eq!(ctx.tasks[0].title, "Run");
        assert!(format_plan("", &ctx).contains("Morning:\n  - 06:30  Run"));
    }

    #[test]
    fn missing_day_file_gives_seeded_snapshot() {
        let tmp = tempfile::TempDir::new().unwrap();
        let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        let ctx = load_context(ContextSource::Day {
            path: &tmp.path().join("day.json"),
            date,
        })
        .unwrap();
        assert_eq!(ctx.date, date);
        assert!(ctx.tasks.is_empty());
        assert_eq!(ctx.habits.len(), 3);
    }

    #[test]
    fn bad_context_file_is_an_error() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("ctx.json");
        std::fs::write(&path, r#"{"tasks": [{"title": 5}]}"#).unwrap();

        let err = load_context(ContextSource::File(&path)).unwrap_err();
        assert!(err.to_string().contains("failed to parse context file"));
    }
}
