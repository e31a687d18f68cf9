//! Task list state and persistence
//!
//! The [`TaskStore`] is the sole owner of the list. It mutates only through
//! [`TaskStore::apply`], which matches preconditions exactly and treats
//! anything else as a no-op, so a partially-valid instruction can never
//! corrupt the list. Every mutation rewrites the full list on disk.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::command::{Action, CommandResult};
use crate::Result;

/// One to-do entry
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Task {
    /// Opaque unique identifier, assigned at creation
    pub id: String,

    /// Human-readable description
    pub text: String,

    /// Completion flag
    #[serde(default)]
    pub completed: bool,

    /// Creation timestamp, informational only
    #[serde(rename = "createdAt", default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Create a new pending task with a fresh id
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            text: text.into(),
            completed: false,
            created_at: Utc::now(),
        }
    }
}

/// What applying a [`CommandResult`] did to the list
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Mutation {
    /// A task was appended
    Added,
    /// A task was removed
    Removed,
    /// A task's completion flag was flipped
    Toggled,
    /// The list was emptied
    Cleared,
    /// Preconditions not met, or the action carries no mutation
    None,
}

/// Ordered task list, persisted to one JSON file on every mutation
pub struct TaskStore {
    tasks: Vec<Task>,
    path: PathBuf,
}

impl TaskStore {
    /// Load previously persisted state, starting empty when the file is
    /// missing or unreadable
    #[must_use]
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let tasks = match std::fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(tasks) => tasks,
                Err(e) => {
                    tracing::warn!(
                        path = %path.display(),
                        error = %e,
                        "corrupt task state, starting empty"
                    );
                    Vec::new()
                }
            },
            Err(_) => Vec::new(),
        };

        Self { tasks, path }
    }

    /// Current tasks in insertion order
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Number of tasks
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether the list is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Apply a validated result to the list.
    ///
    /// Mutates only on an exact precondition match: out-of-range or
    /// negative indexes and missing or blank text are silent no-ops.
    /// Mutations are persisted before returning; a persistence failure is
    /// logged and does not roll the in-memory change back.
    pub fn apply(&mut self, result: &CommandResult) -> Mutation {
        let mutation = match result.action {
            Action::Add => match result.task_text.as_deref().map(str::trim) {
                Some(text) if !text.is_empty() => {
                    self.tasks.push(Task::new(text));
                    Mutation::Added
                }
                _ => Mutation::None,
            },
            Action::Delete => match self.resolve_index(result.task_index) {
                Some(i) => {
                    self.tasks.remove(i);
                    Mutation::Removed
                }
                None => Mutation::None,
            },
            Action::Complete => match self.resolve_index(result.task_index) {
                Some(i) => {
                    self.tasks[i].completed = !self.tasks[i].completed;
                    Mutation::Toggled
                }
                None => Mutation::None,
            },
            Action::Clear => {
                self.tasks.clear();
                Mutation::Cleared
            }
            Action::List | Action::Impossible | Action::Unknown => Mutation::None,
        };

        if mutation != Mutation::None {
            if let Err(e) = self.persist() {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "failed to persist tasks"
                );
            }
        }

        mutation
    }

    /// Resolve a wire index against the current list
    fn resolve_index(&self, index: Option<i64>) -> Option<usize> {
        index
            .and_then(|i| usize::try_from(i).ok())
            .filter(|&i| i < self.tasks.len())
    }

    /// Write the full list to disk
    fn persist(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&self.tasks)?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }
}
