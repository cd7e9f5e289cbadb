//! Builder pattern API for adding tasks.

use crate::store::TaskStore;
use crate::types::{NewTask, Task};
use eyre::{Context, Result};

/// Builder for adding tasks with a fluent API.
///
/// # Example
///
/// ```ignore
/// let task = store.build("Buy milk")
///     .priority(2)
///     .category("errands")
///     .description("Two litres")
///     .add()?;
/// ```
pub struct TaskBuilder<'a> {
    store: &'a mut TaskStore,
    new_task: NewTask,
}

impl<'a> TaskBuilder<'a> {
    /// Create a new builder with the given title.
    pub fn new(store: &'a mut TaskStore, title: impl Into<String>) -> Self {
        Self {
            store,
            new_task: NewTask::new(title),
        }
    }

    /// Set the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.new_task.description = Some(description.into());
        self
    }

    pub fn priority(mut self, priority: i64) -> Self {
        self.new_task.priority = Some(priority);
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.new_task.category = Some(category.into());
        self
    }

    /// Mark the task as already done (or not).
    pub fn completed(mut self, completed: bool) -> Self {
        self.new_task.completed = Some(completed);
        self
    }

    /// Add the task, returning a copy of what was stored.
    pub fn add(self) -> Result<Task> {
        self.store
            .add(self.new_task)
            .cloned()
            .context("Failed to add task")
    }
}

/// Extension trait to add builder method to TaskStore.
pub trait StoreBuilderExt {
    /// Start building a new task with the given title.
    fn build(&mut self, title: impl Into<String>) -> TaskBuilder<'_>;
}

impl StoreBuilderExt for TaskStore {
    fn build(&mut self, title: impl Into<String>) -> TaskBuilder<'_> {
        TaskBuilder::new(self, title)
    }
}
