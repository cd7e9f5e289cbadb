//! Todo: a single-file JSON task list.
//!
//! Tasks live in one JSON array on disk and are addressed by their 1-based
//! position. Every change rewrites the whole file.
//!
//! # Example
//!
//! ```no_run
//! use todo::{NewTask, StoreConfig, TaskChanges, TaskStore};
//!
//! let mut store = TaskStore::open(&StoreConfig::new(".")).unwrap();
//!
//! store.add(NewTask::new("Buy milk")).unwrap();
//! store.add(NewTask::new("Write report")).unwrap();
//!
//! // Mark the second task as done
//! let changes = TaskChanges {
//!     completed: Some(true),
//!     ..TaskChanges::default()
//! };
//! store.edit(2, &changes).unwrap();
//!
//! // Remove the first; "Write report" becomes task 1
//! store.delete(1).unwrap();
//! ```

mod config;
mod index;
mod storage;
mod store;
mod types;

pub mod builder;

// Re-export public API
pub use builder::{StoreBuilderExt, TaskBuilder};
pub use config::{StoreConfig, TODO_FILE};
pub use index::{ordinal, resolve as resolve_index};
pub use storage::Storage;
pub use store::{StoreError, TaskStore, format_task};
pub use types::{DEFAULT_TEXT, NewTask, Task, TaskChanges, ValidationError};
