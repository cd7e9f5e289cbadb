//! Core data types for the task list.

use serde::{Deserialize, Serialize};

/// Placeholder used for text fields a new task was added without.
pub const DEFAULT_TEXT: &str = "default";

/// A single to-do record.
///
/// Field names on disk are fixed by the file format; a missing key decodes
/// to the field's zero value.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Task {
    /// Short description of the work
    #[serde(rename = "titulo")]
    pub title: String,

    /// Longer description
    #[serde(rename = "descricao")]
    pub description: String,

    /// Priority, 0 when unset
    #[serde(rename = "prioridade")]
    pub priority: i64,

    /// Grouping label
    #[serde(rename = "categoria")]
    pub category: String,

    /// Whether the task is done
    #[serde(rename = "finalizada")]
    pub completed: bool,
}

/// Fields for a task about to be added. Unset fields get their defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewTask {
    pub title: String,
    pub description: Option<String>,
    pub priority: Option<i64>,
    pub category: Option<String>,
    pub completed: Option<bool>,
}

impl NewTask {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Build the stored task, filling in defaults.
    pub fn into_task(self) -> Task {
        Task {
            title: self.title,
            description: self.description.unwrap_or_else(|| DEFAULT_TEXT.to_string()),
            priority: self.priority.unwrap_or(0),
            category: self.category.unwrap_or_else(|| DEFAULT_TEXT.to_string()),
            completed: self.completed.unwrap_or(false),
        }
    }
}

/// Overrides applied by an edit.
///
/// Only "set" values take effect: a non-empty string, a non-zero priority,
/// or `completed == Some(true)`. Empty, zero and false are treated the same
/// as absent, so an edit cannot clear a text field, reset priority to 0 or
/// reopen a finished task.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskChanges {
    pub title: Option<String>,
    pub description: Option<String>,
    pub priority: Option<i64>,
    pub category: Option<String>,
    pub completed: Option<bool>,
}

impl TaskChanges {
    /// True if applying these changes would leave any task untouched.
    pub fn is_noop(&self) -> bool {
        set_text(&self.title).is_none()
            && set_text(&self.description).is_none()
            && self.priority.unwrap_or(0) == 0
            && set_text(&self.category).is_none()
            && !self.completed.unwrap_or(false)
    }

    pub fn apply_to(&self, task: &mut Task) {
        if let Some(title) = set_text(&self.title) {
            task.title = title.to_string();
        }
        if let Some(description) = set_text(&self.description) {
            task.description = description.to_string();
        }
        if let Some(priority) = self.priority.filter(|p| *p != 0) {
            task.priority = priority;
        }
        if let Some(category) = set_text(&self.category) {
            task.category = category.to_string();
        }
        if self.completed == Some(true) {
            task.completed = true;
        }
    }
}

fn set_text(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// Validation errors for tasks.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    EmptyTitle,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::EmptyTitle => {
                write!(f, "task title is required, e.g. --add --titulo=\"some task\"")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

impl Task {
    /// Validate the task's fields.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        Ok(())
    }
}
