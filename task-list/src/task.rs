use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Identifier of a task within a [`crate::TaskList`].
///
/// Ids are handed out by the list that owns the task and are never reused,
/// even after the task is deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct TaskId(u64);

impl TaskId {
    pub(crate) fn new(raw: u64) -> Self {
        TaskId(raw)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("'{input}' is not a valid task id")]
pub struct ParseTaskIdError {
    input: String,
}

impl FromStr for TaskId {
    type Err = ParseTaskIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(TaskId)
            .map_err(|_| ParseTaskIdError {
                input: s.to_string(),
            })
    }
}

/// A single to-do entry.
///
/// Only the owning list can change a task; callers see it read-only.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Task {
    id: TaskId,
    text: String,
    checked: bool,
    created_at: chrono::DateTime<chrono::Utc>,
}

impl Task {
    /// Creates an unchecked task. `text` must already be trimmed and non-empty.
    pub(crate) fn new(id: TaskId, text: String) -> Self {
        Task {
            id,
            text,
            checked: false,
            created_at: chrono::Utc::now(),
        }
    }

    pub fn id(&self) -> TaskId {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_checked(&self) -> bool {
        self.checked
    }

    pub fn created_at(&self) -> chrono::DateTime<chrono::Utc> {
        self.created_at
    }

    pub(crate) fn set_checked(&mut self, checked: bool) {
        self.checked = checked;
    }

    pub(crate) fn toggle(&mut self) {
        self.checked = !self.checked;
    }
}
