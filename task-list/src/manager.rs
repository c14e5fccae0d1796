use crate::task::{Task, TaskId};
use tracing::{debug, trace};

/// Hands out task ids from a monotonically increasing counter.
#[derive(Debug, Clone)]
struct IdGenerator {
    next_id: u64,
}

impl Default for IdGenerator {
    fn default() -> Self {
        IdGenerator { next_id: 1 }
    }
}

impl IdGenerator {
    fn next(&mut self) -> TaskId {
        let id = TaskId::new(self.next_id);
        self.next_id += 1;
        id
    }
}

/// The ordered collection of tasks and every mutation allowed on it.
///
/// Tasks keep their insertion order (oldest first). Operations that target a
/// task by id treat an unknown id as a no-op, so a caller holding a stale id
/// from an older snapshot can never fail.
#[derive(Debug, Clone, Default)]
pub struct TaskList {
    tasks: Vec<Task>,
    ids: IdGenerator,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a list holding one task per non-blank entry of `texts`.
    pub fn with_tasks<I, S>(texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut list = Self::new();
        for text in texts {
            list.add_task(text.as_ref());
        }
        list
    }

    /// Appends an unchecked task holding the trimmed `text`.
    ///
    /// Blank text is ignored and `None` is returned.
    pub fn add_task(&mut self, text: &str) -> Option<TaskId> {
        let text = text.trim();
        if text.is_empty() {
            trace!("Ignoring blank task text");
            return None;
        }

        let id = self.ids.next();
        self.tasks.push(Task::new(id, text.to_string()));
        debug!(%id, "Added task");
        Some(id)
    }

    /// Flips the checked state of the task with `id`, if present.
    pub fn toggle_task(&mut self, id: TaskId) -> &[Task] {
        match self.tasks.iter_mut().find(|task| task.id() == id) {
            Some(task) => {
                task.toggle();
                debug!(%id, checked = task.is_checked(), "Toggled task");
            }
            None => trace!(%id, "Toggle ignored, no such task"),
        }
        &self.tasks
    }

    /// Sets every task's checked state to `checked`.
    pub fn set_all_checked(&mut self, checked: bool) -> &[Task] {
        for task in &mut self.tasks {
            task.set_checked(checked);
        }
        debug!(checked, count = self.tasks.len(), "Set all tasks");
        &self.tasks
    }

    /// Checks everything, or unchecks everything when all tasks are already checked.
    pub fn toggle_all_checked(&mut self) -> &[Task] {
        let checked = !self.all_checked();
        self.set_all_checked(checked)
    }

    /// Removes the task with `id`, if present.
    pub fn delete_task(&mut self, id: TaskId) -> &[Task] {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id() != id);
        if self.tasks.len() < before {
            debug!(%id, "Deleted task");
        } else {
            trace!(%id, "Delete ignored, no such task");
        }
        &self.tasks
    }

    /// Removes every checked task. Only unchecked tasks remain afterwards.
    pub fn delete_checked_tasks(&mut self) -> &[Task] {
        let before = self.tasks.len();
        self.tasks.retain(|task| !task.is_checked());
        debug!(removed = before - self.tasks.len(), "Deleted checked tasks");
        &self.tasks
    }

    pub fn count_checked(&self) -> usize {
        self.tasks.iter().filter(|task| task.is_checked()).count()
    }

    /// Whether the list is non-empty and every task in it is checked.
    pub fn all_checked(&self) -> bool {
        !self.tasks.is_empty() && self.tasks.iter().all(Task::is_checked)
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
