//! On-disk day files: one JSON-serialized [`DayState`] per date.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use tracing::debug;

use daybot_core::DayState;

/// `<data_dir>/days/<YYYY-MM-DD>.json`
pub fn day_file_path(data_dir: &Path, date: NaiveDate) -> PathBuf {
    data_dir.join("days").join(format!("{date}.json"))
}

/// Load a day file. A missing file is a fresh day.
pub fn load_day(path: &Path) -> Result<DayState> {
    if !path.exists() {
        debug!(path = %path.display(), "no day file, starting fresh");
        return Ok(DayState::new());
    }
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read day file at {}", path.display()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("failed to parse day file at {}", path.display()))
}

/// Write a day file, creating parent dirs as needed.
pub fn save_day(path: &Path, day: &DayState) -> Result<()> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("failed to create directory {}", dir.display()))?;
    }
    let contents = serde_json::to_string_pretty(day).context("failed to serialize day state")?;
    std::fs::write(path, contents)
        .with_context(|| format!("failed to write day file at {}", path.display()))?;
    debug!(path = %path.display(), tasks = day.tasks.len(), "day file saved");
    Ok(())
}
