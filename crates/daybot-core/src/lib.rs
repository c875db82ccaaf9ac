//! Core of the daybot planner: the day's data model, the operations that
//! edit it, the deterministic plan formatter, and the assistant seam the
//! server answers through.

pub mod assistant;
pub mod day;
pub mod model;
pub mod plan;

pub use day::{DayError, DayState};
pub use model::{Habit, NewTask, PlanContext, Task};
pub use plan::format_plan;
