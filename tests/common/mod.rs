//! Shared test infrastructure for todo integration tests.
//!
//! Provides TestEnv helper for consistent test setup/teardown.

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;
use todo::{NewTask, StoreConfig, Task, TaskChanges, TaskStore};

/// Test environment with automatic cleanup.
pub struct TestEnv {
    pub temp_dir: TempDir,
    pub store: TaskStore,
}

impl TestEnv {
    /// Create a new test environment with an empty task file.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let store = TaskStore::open(&StoreConfig::new(temp_dir.path())).expect("Failed to open store");
        Self { temp_dir, store }
    }

    /// Create a test environment whose task file already holds `content`.
    pub fn with_content(content: &str) -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        fs::write(temp_dir.path().join("todo.json"), content).expect("Failed to write task file");
        let store = TaskStore::open(&StoreConfig::new(temp_dir.path())).expect("Failed to open store");
        Self { temp_dir, store }
    }

    pub fn config(&self) -> StoreConfig {
        StoreConfig::new(self.temp_dir.path())
    }

    pub fn file_path(&self) -> PathBuf {
        self.config().path()
    }

    /// Raw content of the task file.
    pub fn file_content(&self) -> String {
        fs::read_to_string(self.file_path()).expect("Failed to read task file")
    }

    /// Open a fresh store over the same file, as a new invocation would.
    pub fn reopen(&self) -> TaskStore {
        TaskStore::open(&self.config()).expect("Failed to reopen store")
    }

    /// Add a task with default fields.
    pub fn add_task(&mut self, title: &str) -> Task {
        self.store
            .add(NewTask::new(title))
            .expect("Failed to add task")
            .clone()
    }

    /// Add a task with every field set.
    pub fn add_full_task(&mut self, title: &str, priority: i64, category: &str) -> Task {
        let new_task = NewTask {
            title: title.to_string(),
            description: Some(format!("{} description", title)),
            priority: Some(priority),
            category: Some(category.to_string()),
            completed: Some(false),
        };
        self.store.add(new_task).expect("Failed to add task").clone()
    }

    /// Add tasks titled "Task 1".."Task n".
    pub fn add_numbered(&mut self, n: usize) -> Vec<Task> {
        (1..=n).map(|i| self.add_task(&format!("Task {}", i))).collect()
    }

    /// Edit a task, expecting success.
    pub fn edit_task(&mut self, index: i64, changes: TaskChanges) -> Task {
        self.store
            .edit(index, &changes)
            .expect("Failed to edit task")
            .clone()
    }

    /// Titles in stored order.
    pub fn titles(&self) -> Vec<String> {
        self.store.tasks().iter().map(|t| t.title.clone()).collect()
    }

    /// Assert that memory and a freshly loaded store agree.
    pub fn assert_persisted(&self) {
        let reopened = self.reopen();
        assert_eq!(
            reopened.tasks(),
            self.store.tasks(),
            "Task file does not match the in-memory list"
        );
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
