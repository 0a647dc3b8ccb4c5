//! View module - transient UI state and the queries derived from it.
//!
//! Nothing here is persisted. `visible_tasks` and `summarize` are pure
//! functions of the task list and the current `ViewState`.

mod deletion;
mod query;
mod state;

pub use deletion::DeletionWorkflow;
pub use query::{matches_filter, matches_search, summarize, visible_tasks, TaskStats};
pub use state::{FilterMode, ViewState};
