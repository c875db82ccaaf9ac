//! The `Assistant` trait.
//!
//! The trait is object-safe so the server can hold an `Arc<dyn Assistant>`
//! chosen at startup.

use anyhow::Result;
use async_trait::async_trait;

use crate::model::PlanContext;

/// Something that answers a user message given the day's context.
#[async_trait]
pub trait Assistant: Send + Sync {
    /// Short name for logs and the health endpoint (e.g. "local").
    fn name(&self) -> &str;

    /// Produce a reply to `message`.
    ///
    /// Errors are recoverable: callers fall back to
    /// [`crate::plan::format_plan`].
    async fn reply(&self, message: &str, ctx: &PlanContext) -> Result<String>;
}

// Compile-time assertion: Assistant must be usable as `dyn Assistant`.
const _: () = {
    fn _assert_object_safe(_: &dyn Assistant) {}
};
