//! Time-of-day buckets for pending tasks.

use std::fmt;

use crate::model::Task;

/// Hour assumed for bucketing when a task has no time.
pub const DEFAULT_HOUR: i32 = 13;

/// Sort key for tasks without a time, so they land after timed tasks.
const MISSING_TIME_SORT_KEY: &str = "23:59";

/// Part of the day a task is scheduled in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Bucket {
    Morning,
    Afternoon,
    Evening,
}

impl Bucket {
    /// All buckets in rendering order.
    pub const ALL: [Bucket; 3] = [Bucket::Morning, Bucket::Afternoon, Bucket::Evening];

    /// Bucket for an hour of the day: `< 12` morning, `< 17` afternoon,
    /// otherwise evening.
    pub fn for_hour(hour: i32) -> Self {
        match hour {
            ..12 => Self::Morning,
            12..17 => Self::Afternoon,
            _ => Self::Evening,
        }
    }

    /// Bucket for a task's optional `HH:MM` time.
    ///
    /// A missing time counts as [`DEFAULT_HOUR`]. A time with no readable
    /// hour goes to the evening.
    pub fn for_time(time: Option<&str>) -> Self {
        match time {
            None => Self::for_hour(DEFAULT_HOUR),
            Some(t) => parse_hour(t).map_or(Self::Evening, Self::for_hour),
        }
    }
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Morning => "Morning",
            Self::Afternoon => "Afternoon",
            Self::Evening => "Evening",
        };
        f.write_str(s)
    }
}

/// Parse the hour from the first two characters of `time`.
///
/// Leading whitespace is skipped and a sign is allowed, then the leading
/// digits are read: `"09:30"`, `"9:30"` and `" 9:00"` all give 9, `"-1:00"`
/// gives -1. Returns `None` when no digit follows.
pub fn parse_hour(time: &str) -> Option<i32> {
    let prefix: String = time.chars().take(2).collect();
    let rest = prefix.trim_start();
    let (negative, rest) = match rest.strip_prefix('-') {
        Some(r) => (true, r),
        None => (false, rest.strip_prefix('+').unwrap_or(rest)),
    };
    let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
    let hour: i32 = digits.parse().ok()?;
    Some(if negative { -hour } else { hour })
}

/// Group tasks into non-empty buckets, each sorted by time ascending.
///
/// Buckets come back in [`Bucket::ALL`] order. The sort is stable, so tasks
/// sharing a time keep their input order.
pub fn partition<'a>(tasks: impl IntoIterator<Item = &'a Task>) -> Vec<(Bucket, Vec<&'a Task>)> {
    let mut grouped: [Vec<&'a Task>; 3] = Default::default();
    for task in tasks {
        let idx = match Bucket::for_time(task.time.as_deref()) {
            Bucket::Morning => 0,
            Bucket::Afternoon => 1,
            Bucket::Evening => 2,
        };
        grouped[idx].push(task);
    }

    Bucket::ALL
        .into_iter()
        .zip(grouped)
        .filter(|(_, tasks)| !tasks.is_empty())
        .map(|(bucket, mut tasks)| {
            tasks.sort_by(|a, b| sort_key(a).cmp(sort_key(b)));
            (bucket, tasks)
        })
        .collect()
}

fn sort_key(task: &Task) -> &str {
    task.time.as_deref().unwrap_or(MISSING_TIME_SORT_KEY)
}
