mod config;
mod day_cmds;
mod day_file;
mod plan_cmd;
mod serve_cmd;
#[cfg(test)]
mod test_util;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use daybot_core::assistant::LocalPlanner;
use daybot_core::model::today;

use config::{CliOverrides, DaybotConfig};
use plan_cmd::ContextSource;

#[derive(Parser)]
#[command(name = "daybot", about = "Daily planner: tasks, habits, journal, and a plan for the day")]
struct Cli {
    /// Directory holding day files (overrides DAYBOT_DATA_DIR env var)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Use this day file instead of <data-dir>/days/<date>.json
    #[arg(long, global = true)]
    day_file: Option<PathBuf>,

    /// Day to operate on, as YYYY-MM-DD (defaults to today, UTC)
    #[arg(long, global = true)]
    date: Option<NaiveDate>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a daybot config file with default settings
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },
    /// Print the plan for the day
    Plan {
        /// Prompt text; mentioning focus or stress adds a focus tip
        #[arg(long, default_value = "Plan my day")]
        prompt: String,
        /// Read the context from a JSON file instead of the day file
        #[arg(long)]
        context: Option<PathBuf>,
    },
    /// Task management
    Task {
        #[command(subcommand)]
        command: TaskCommands,
    },
    /// Habit tracking
    Habit {
        #[command(subcommand)]
        command: HabitCommands,
    },
    /// Journal notes
    Journal {
        #[command(subcommand)]
        command: JournalCommands,
    },
    /// Serve the assistant endpoint over HTTP
    Serve {
        /// Address to bind (overrides DAYBOT_BIND env var)
        #[arg(long)]
        bind: Option<String>,
        /// Port to listen on (overrides DAYBOT_PORT env var)
        #[arg(long)]
        port: Option<u16>,
    },
}

#[derive(Subcommand)]
pub enum TaskCommands {
    /// Add a task
    Add {
        /// Task title
        title: String,
        /// Time of day as HH:MM
        #[arg(long)]
        time: Option<String>,
        /// Duration in minutes
        #[arg(long)]
        duration: Option<u32>,
        /// Category label (e.g. "Deep Work", "Errand")
        #[arg(long)]
        category: Option<String>,
    },
    /// Toggle a task between done and pending
    Done {
        /// Task ID
        id: String,
    },
    /// Delete a task
    Rm {
        /// Task ID
        id: String,
    },
    /// List the day's tasks
    List,
}

#[derive(Subcommand)]
pub enum HabitCommands {
    /// List habits and whether they are done
    List,
    /// Toggle a habit between done and not done
    Toggle {
        /// Habit ID (e.g. habit_water)
        id: String,
    },
}

#[derive(Subcommand)]
pub enum JournalCommands {
    /// Replace the journal text
    Set {
        /// New journal text
        text: String,
    },
    /// Print the journal
    Show,
}

/// Pick the day file: `--day-file` if given, else `<data-dir>/days/<date>.json`.
fn resolve_day_path(
    overrides: &CliOverrides,
    day_file: Option<&Path>,
    date: NaiveDate,
) -> anyhow::Result<PathBuf> {
    if let Some(path) = day_file {
        return Ok(path.to_path_buf());
    }
    let resolved = DaybotConfig::resolve(overrides)?;
    Ok(day_file::day_file_path(&resolved.data_dir, date))
}

/// Execute the `daybot init` command: write config file.
fn cmd_init(force: bool) -> anyhow::Result<()> {
    let path = config::config_path();

    if path.exists() && !force {
        anyhow::bail!(
            "config file already exists at {}\nUse --force to overwrite.",
            path.display()
        );
    }

    let cfg = config::ConfigFile::default();
    config::save_config(&cfg)?;

    println!("Config written to {}", path.display());
    println!("  server.bind = {}", cfg.server.bind);
    println!("  server.port = {}", cfg.server.port);

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let date = cli.date.unwrap_or_else(today);
    let overrides = CliOverrides {
        data_dir: cli.data_dir.clone(),
        ..Default::default()
    };

    match cli.command {
        Commands::Init { force } => {
            cmd_init(force)?;
        }
        Commands::Plan { prompt, context } => match context {
            Some(path) => plan_cmd::run_plan(&prompt, ContextSource::File(&path))?,
            None => {
                let path = resolve_day_path(&overrides, cli.day_file.as_deref(), date)?;
                plan_cmd::run_plan(&prompt, ContextSource::Day { path: &path, date })?;
            }
        },
        Commands::Task { command } => {
            let path = resolve_day_path(&overrides, cli.day_file.as_deref(), date)?;
            day_cmds::run_task_command(command, &path)?;
        }
        Commands::Habit { command } => {
            let path = resolve_day_path(&overrides, cli.day_file.as_deref(), date)?;
            day_cmds::run_habit_command(command, &path)?;
        }
        Commands::Journal { command } => {
            let path = resolve_day_path(&overrides, cli.day_file.as_deref(), date)?;
            day_cmds::run_journal_command(command, &path)?;
        }
        Commands::Serve { bind, port } => {
            let resolved = DaybotConfig::resolve(&CliOverrides {
                bind,
                port,
                ..overrides
            })?;
            serve_cmd::run_serve(Arc::new(LocalPlanner::new()), &resolved.bind, resolved.port)
                .await?;
        }
    }

    Ok(())
}
