use crate::model::Task;

/// Snapshot-based undo/redo log. Each entry is a full copy of the task set.
#[derive(Debug, Clone, Default)]
pub struct UndoHistory {
    undo_stack: Vec<Vec<Task>>,
    redo_stack: Vec<Vec<Task>>,
    /// Maximum undo depth; `0` keeps everything.
    limit: usize,
}

impl UndoHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limit(limit: usize) -> Self {
        Self {
            limit,
            ..Self::default()
        }
    }

    /// Record the state *before* a mutation. Invalidates any redo entries.
    pub fn push(&mut self, tasks: &[Task]) {
        self.undo_stack.push(tasks.to_vec());
        self.redo_stack.clear();
        if self.limit > 0 && self.undo_stack.len() > self.limit {
            let excess = self.undo_stack.len() - self.limit;
            self.undo_stack.drain(..excess);
        }
    }

    /// Step back. `current` is saved for redo; the returned snapshot replaces it.
    pub fn undo(&mut self, current: &[Task]) -> Option<Vec<Task>> {
        let snapshot = self.undo_stack.pop()?;
        self.redo_stack.push(current.to_vec());
        Some(snapshot)
    }

    /// Step forward again after an undo.
    pub fn redo(&mut self, current: &[Task]) -> Option<Vec<Task>> {
        let snapshot = self.redo_stack.pop()?;
        self.undo_stack.push(current.to_vec());
        Some(snapshot)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }

    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}
