use std::fmt::{Display, Formatter, Result as FmtResult};

/// Identifier of a task within a [`TaskList`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(u64);

impl From<u64> for TaskId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl Display for TaskId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.0)
    }
}

/// Whether a task is still pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskStatus {
    Todo,
    Done,
}

impl Display for TaskStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Todo => f.write_str("todo"),
            Self::Done => f.write_str("done"),
        }
    }
}

/// One entry in a [`TaskList`]: a free-text label and its status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    id: TaskId,
    label: String,
    status: TaskStatus,
}

impl Task {
    /// Returns the id of this [`Task`].
    pub fn id(&self) -> TaskId {
        self.id
    }

    /// Returns a reference to the label of this [`Task`].
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the status of this [`Task`].
    pub fn status(&self) -> TaskStatus {
        self.status
    }
}

/// An in-memory, insertion-ordered to-do list with an optional "current"
/// task designation.
///
/// Labels are unvalidated free text and need not be unique. The only
/// invariant is that the current designation, if any, refers to a task that
/// is still in the list.
#[derive(Debug, Clone)]
pub struct TaskList {
    tasks: Vec<Task>,
    next_id: u64,
    current: Option<TaskId>,
}

impl TaskList {
    /// Creates a new, empty [`TaskList`].
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            next_id: 1,
            current: None,
        }
    }

    /// Appends a task and returns its id. Empty and whitespace-only labels
    /// are ignored.
    pub fn add(&mut self, label: &str) -> Option<TaskId> {
        let label = label.trim();
        if label.is_empty() {
            return None;
        }

        let id = TaskId(self.next_id);
        self.next_id += 1;
        self.tasks.push(Task {
            id,
            label: label.to_owned(),
            status: TaskStatus::Todo,
        });
        Some(id)
    }

    /// Removes a task. The current designation is cleared when it pointed
    /// at the removed task; unknown ids are ignored.
    pub fn remove(&mut self, id: TaskId) {
        self.tasks.retain(|task| task.id != id);
        if self.current == Some(id) {
            self.current = None;
        }
    }

    /// Marks a task as done. Unknown ids are ignored.
    pub fn mark_done(&mut self, id: TaskId) {
        if let Some(task) = self.tasks.iter_mut().find(|task| task.id == id) {
            task.status = TaskStatus::Done;
        }
    }

    /// Records which task is shown as current. Unknown ids are ignored.
    pub fn select_current(&mut self, id: TaskId) {
        if self.tasks.iter().any(|task| task.id == id) {
            self.current = Some(id);
        }
    }

    /// Returns the task currently designated as current, if any.
    pub fn current(&self) -> Option<&Task> {
        self.current.and_then(|id| self.get(id))
    }

    /// Returns the task with the given id, if it exists.
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Iterates over the tasks in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }

    /// Returns the number of tasks.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns `true` if the list holds no tasks.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

impl Default for TaskList {
    fn default() -> Self {
        Self::new()
    }
}
