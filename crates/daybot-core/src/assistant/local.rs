//! Deterministic assistant backed by the plan formatter.

use anyhow::Result;
use async_trait::async_trait;
use tracing::debug;

use super::trait_def::Assistant;
use crate::model::PlanContext;
use crate::plan::format_plan;

/// Answers every message with [`format_plan`]. Never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalPlanner;

impl LocalPlanner {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Assistant for LocalPlanner {
    fn name(&self) -> &str {
        "local"
    }

    async fn reply(&self, message: &str, ctx: &PlanContext) -> Result<String> {
        debug!(
            date = %ctx.date,
            tasks = ctx.tasks.len(),
            habits = ctx.habits.len(),
            "formatting local plan"
        );
        Ok(format_plan(message, ctx))
    }
}
