//! # taskdeck
//!
//! State and persistence core of a single-user to-do list.
//!
//! This library provides:
//! - A task repository that writes through to key-value storage on every change
//! - Filter and search over the task list
//! - A two-step delete confirmation workflow
//! - A persisted light/dark theme preference
//!
//! ## Architecture
//!
//! ```text
//!   display layer ──Intent──▶ ┌──────────────────────────────┐
//!                             │          TaskBoard           │
//!                             │  TaskRepository  ViewState   │
//!                             │  ThemePreference             │
//!                             └──────┬──────────────┬────────┘
//!   visible_tasks / stats ◀──────────┘              │
//!                                                   ▼
//!                                          ┌─────────────────┐
//!                                          │ PersistentStore │
//!                                          └────────┬────────┘
//!                                                   ▼
//!                                          StorageBackend
//!                                       (memory / JSON files)
//! ```
//!
//! ## Modules
//! - `task`: Task type, errors, repository, onboarding seed
//! - `view`: filter/search state, list derivation, delete workflow
//! - `storage`: backends and best-effort JSON persistence
//! - `theme`: light/dark preference
//! - `board`: the owned application state and intent dispatch
//! - `config`, `logging`: environment configuration and tracing setup

pub mod board;
pub mod config;
pub mod logging;
pub mod storage;
pub mod task;
pub mod theme;
pub mod view;

pub use board::{Intent, TaskBoard};
pub use config::{Config, TaskBoardConfig};
pub use storage::{FileStorage, MemoryStorage, PersistentStore, SharedStorage, StorageBackend};
pub use task::{Task, TaskError, TaskId, TaskRepository};
pub use theme::{Theme, ThemePreference};
pub use view::{DeletionWorkflow, FilterMode, TaskStats, ViewState};
