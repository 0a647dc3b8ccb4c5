//! Task module - the task record and the repository that owns the list.
//!
//! - `Task` enforces its own invariants on construction (trimmed, non-empty title)
//! - `TaskRepository` is the only place tasks are mutated, and it writes
//!   through to storage at the end of every mutation

mod repository;
mod seed;
pub mod task;

pub use repository::TaskRepository;
pub use seed::onboarding_tasks;
pub use task::{Task, TaskError, TaskId};
