//! End-to-end tests for the `daybot` binary.
//!
//! Each test points config and data directories at a fresh temp dir, so no
//! test touches the real home directory.

use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

/// Run `daybot` with config and data isolated under `home`.
fn run_daybot(args: &[&str], home: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_daybot"))
        .args(args)
        .env("XDG_CONFIG_HOME", home.join("config"))
        .env("DAYBOT_DATA_DIR", home.join("data"))
        .env_remove("DAYBOT_BIND")
        .env_remove("DAYBOT_PORT")
        .output()
        .expect("failed to execute daybot")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

/// Append `--date 2024-05-01` to `args`.
fn on_day<'a>(args: &[&'a str]) -> Vec<&'a str> {
    let mut full = args.to_vec();
    full.extend(["--date", "2024-05-01"]);
    full
}

fn assert_success(output: &Output) {
    assert!(
        output.status.success(),
        "daybot failed: {}",
        stderr(output)
    );
}

// =============================================================================
// Basic commands
// =============================================================================

#[test]
fn help_lists_subcommands() {
    let tmp = TempDir::new().unwrap();
    let output = run_daybot(&["--help"], tmp.path());
    assert_success(&output);
    let out = stdout(&output);
    for cmd in ["plan", "task", "habit", "journal", "serve", "init"] {
        assert!(out.contains(cmd), "help should mention {cmd}:\n{out}");
    }
}

#[test]
fn init_writes_config_and_refuses_overwrite() {
    let tmp = TempDir::new().unwrap();
    let output = run_daybot(&["init"], tmp.path());
    assert_success(&output);
    assert!(tmp.path().join("config/daybot/config.toml").exists());

    let again = run_daybot(&["init"], tmp.path());
    assert!(!again.status.success());
    assert!(stderr(&again).contains("already exists"));

    let forced = run_daybot(&["init", "--force"], tmp.path());
    assert_success(&forced);
}

// =============================================================================
// Plan
// =============================================================================

#[test]
fn plan_for_fresh_day() {
    let tmp = TempDir::new().unwrap();
    let output = run_daybot(&["plan", "--date", "2024-05-01"], tmp.path());
    assert_success(&output);
    let out = stdout(&output);
    assert!(out.starts_with("Plan for 2024-05-01\n"));
    assert!(out.contains("No tasks yet"));
    assert!(out.contains("Habits to hit: Hydration, Exercise, Reading"));
    assert!(out.contains("Remember to schedule breaks and hydrate."));
}

#[test]
fn plan_from_context_file() {
    let tmp = TempDir::new().unwrap();
    let ctx_path = tmp.path().join("ctx.json");
    std::fs::write(
        &ctx_path,
        r#"{
            "date": "2024-06-02",
            "tasks": [
                {"id": "a", "title": "Late", "time": "10:30", "done": false},
                {"id": "b", "title": "Early", "time": "09:00", "durationMin": 25, "done": false}
            ],
            "habits": [],
            "journal": ""
        }"#,
    )
    .unwrap();

    let output = run_daybot(
        &[
            "plan",
            "--context",
            ctx_path.to_str().unwrap(),
            "--prompt",
            "I feel overwhelmed today",
        ],
        tmp.path(),
    );
    assert_success(&output);
    let out = stdout(&output);
    assert!(out.contains("Plan for 2024-06-02\nMorning:\n  - 09:00  Early (25m)\n  - 10:30  Late"));
    assert!(out.contains("Focus tip:"));
}

// =============================================================================
// Day editing
// =============================================================================

#[test]
fn task_habit_journal_flow() {
    let tmp = TempDir::new().unwrap();

    let add = run_daybot(
        &on_day(&["task", "add", "Write report", "--time", "09:00", "--duration", "45"]),
        tmp.path(),
    );
    assert_success(&add);
    let add_out = stdout(&add);
    let id = add_out
        .lines()
        .next()
        .and_then(|l| l.strip_prefix("Task added: "))
        .expect("add should print the new task id")
        .trim()
        .to_string();
    assert!(tmp.path().join("data/days/2024-05-01.json").exists());

    assert_success(&run_daybot(&on_day(&["habit", "toggle", "habit_move"]), tmp.path()));
    assert_success(&run_daybot(
        &on_day(&["journal", "set", "Ship the report. Then rest."]),
        tmp.path(),
    ));

    let plan = run_daybot(&on_day(&["plan"]), tmp.path());
    assert_success(&plan);
    let out = stdout(&plan);
    assert!(out.contains("Morning:\n  - 09:00  Write report (45m)"));
    assert!(out.contains("Habits to hit: Hydration, Reading"));
    assert!(out.contains("Journal takeaway: Ship the report"));

    assert_success(&run_daybot(&on_day(&["task", "done", id.as_str()]), tmp.path()));
    let plan = run_daybot(&on_day(&["plan"]), tmp.path());
    assert!(stdout(&plan).contains("No tasks yet"));

    let list = run_daybot(&on_day(&["task", "list"]), tmp.path());
    assert!(stdout(&list).contains(&format!("[x] {id}")));

    assert_success(&run_daybot(&on_day(&["task", "rm", id.as_str()]), tmp.path()));
    let list = run_daybot(&on_day(&["task", "list"]), tmp.path());
    assert!(stdout(&list).contains("No tasks yet"));
}

#[test]
fn invalid_time_fails() {
    let tmp = TempDir::new().unwrap();
    let output = run_daybot(&["task", "add", "Bad", "--time", "7pm"], tmp.path());
    assert!(!output.status.success());
    assert!(stderr(&output).contains("invalid time"));
}

#[test]
fn unknown_habit_fails() {
    let tmp = TempDir::new().unwrap();
    let output = run_daybot(&["habit", "toggle", "habit_nope"], tmp.path());
    assert!(!output.status.success());
    assert!(stderr(&output).contains("habit not found"));
}

#[test]
fn explicit_day_file_is_used() {
    let tmp = TempDir::new().unwrap();
    let day_file = tmp.path().join("custom.json");
    let day_file = day_file.to_str().unwrap();

    assert_success(&run_daybot(&["journal", "set", "Custom.", "--day-file", day_file], tmp.path()));
    assert!(Path::new(day_file).exists());

    let show = run_daybot(&["journal", "show", "--day-file", day_file], tmp.path());
    assert_eq!(stdout(&show).trim(), "Custom.");
}

#[test]
fn failed_save_reports_no_success() {
    let tmp = TempDir::new().unwrap();
    let blocker = tmp.path().join("not-a-dir");
    std::fs::write(&blocker, "").unwrap();
    let day_file = blocker.join("day.json");
    let day_file = day_file.to_str().unwrap();

    let output = run_daybot(&["task", "add", "Write", "--day-file", day_file], tmp.path());
    assert!(!output.status.success());
    assert!(!stdout(&output).contains("Task added"));
    assert!(stderr(&output).contains("failed to create directory"));
}
