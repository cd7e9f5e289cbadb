//! High-level store API over the task list.

use crate::config::StoreConfig;
use crate::index;
use crate::storage::Storage;
use crate::types::{NewTask, Task, TaskChanges, ValidationError};
use eyre::{Context, Result};
use std::path::PathBuf;

/// Errors that can occur during store operations.
#[derive(Debug)]
pub enum StoreError {
    /// The backing file holds something other than a task list.
    Corrupt { path: PathBuf, source: serde_json::Error },
    /// Listing an empty store.
    NoTasks(PathBuf),
    /// Edit or delete without an index.
    MissingIndex,
    /// Index past the end of the list.
    IndexOutOfRange { index: i64, len: usize },
    /// Index that matches no task.
    TaskNotFound(i64),
    /// Validation error.
    Validation(ValidationError),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Corrupt { path, .. } => write!(f, "failed to load file \"{}\"", path.display()),
            StoreError::NoTasks(path) => write!(f, "no tasks found in file \"{}\"", path.display()),
            StoreError::MissingIndex => {
                write!(f, "task index is required, e.g. --edit --indice=3")
            }
            StoreError::IndexOutOfRange { index, len } => {
                write!(f, "index {} is greater than the number of tasks ({})", index, len)
            }
            StoreError::TaskNotFound(index) => write!(f, "no task has index {}", index),
            StoreError::Validation(e) => write!(f, "validation error: {}", e),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::Corrupt { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// The task list, loaded into memory.
///
/// Every mutation rewrites the whole backing file before returning. A
/// mutation that fails leaves both memory and disk untouched.
pub struct TaskStore {
    storage: Storage,
    tasks: Vec<Task>,
    created: bool,
}

impl TaskStore {
    /// Open the store, creating an empty backing file if there is none.
    pub fn open(config: &StoreConfig) -> Result<Self> {
        let storage = Storage::new(config.path());
        let created = storage.ensure_exists()?;
        let tasks = storage.load()?;

        Ok(Self {
            storage,
            tasks,
            created,
        })
    }

    /// Whether `open` had to create the backing file.
    pub fn was_created(&self) -> bool {
        self.created
    }

    pub fn path(&self) -> &std::path::Path {
        self.storage.path()
    }

    /// All tasks in stored order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Get a task by its 1-based index.
    pub fn get(&self, index: i64) -> Result<&Task> {
        let position = index::resolve(index, self.tasks.len()).map_err(|e| eyre::eyre!(e))?;
        Ok(&self.tasks[position])
    }

    /// Append a new task and persist.
    pub fn add(&mut self, new_task: NewTask) -> Result<&Task> {
        let task = new_task.into_task();

        // Validate before persisting
        task.validate().map_err(|e| eyre::eyre!(StoreError::Validation(e)))?;

        self.tasks.push(task);
        if let Err(e) = self.storage.save(&self.tasks) {
            self.tasks.pop();
            return Err(e).context("Failed to persist new task");
        }

        log::info!("Added task {}", self.tasks.len());
        Ok(&self.tasks[self.tasks.len() - 1])
    }

    /// All tasks paired with their ordinals. Fails on an empty store.
    pub fn list(&self) -> Result<Vec<(usize, &Task)>> {
        if self.tasks.is_empty() {
            return Err(eyre::eyre!(StoreError::NoTasks(self.storage.path().to_path_buf())));
        }

        Ok(self
            .tasks
            .iter()
            .enumerate()
            .map(|(position, task)| (index::ordinal(position), task))
            .collect())
    }

    /// Apply `changes` to the task at `index` and persist.
    pub fn edit(&mut self, index: i64, changes: &TaskChanges) -> Result<&Task> {
        let position = index::resolve(index, self.tasks.len()).map_err(|e| eyre::eyre!(e))?;

        if changes.is_noop() {
            log::warn!("Edit of task {} changes nothing", index);
        }

        let previous = self.tasks[position].clone();
        changes.apply_to(&mut self.tasks[position]);
        if let Err(e) = self.storage.save(&self.tasks) {
            self.tasks[position] = previous;
            return Err(e).context("Failed to persist edited task");
        }

        log::info!("Edited task {}", index);
        Ok(&self.tasks[position])
    }

    /// Remove the task at `index` and persist. Later tasks move up by one.
    pub fn delete(&mut self, index: i64) -> Result<Task> {
        let position = index::resolve(index, self.tasks.len()).map_err(|e| eyre::eyre!(e))?;

        let removed = self.tasks.remove(position);
        if let Err(e) = self.storage.save(&self.tasks) {
            self.tasks.insert(position, removed);
            return Err(e).context("Failed to persist deletion");
        }

        log::info!("Deleted task {}", index);
        Ok(removed)
    }
}

/// One line of `list` output.
pub fn format_task(ordinal: usize, task: &Task) -> String {
    format!(
        "{} - {}, {}, {}, {}, {}",
        ordinal, task.title, task.description, task.priority, task.category, task.completed
    )
}
