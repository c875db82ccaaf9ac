//! Assistant interface: the seam between a request for a plan and whatever
//! produces the reply.
//!
//! ```text
//! POST /api/ai
//!     |
//!     v
//! Arc<dyn Assistant> --reply(message, ctx)--> String
//!     |
//!     +-- LocalPlanner: format_plan(message, ctx)
//! ```

pub mod local;
pub mod trait_def;

pub use local::LocalPlanner;
pub use trait_def::Assistant;
