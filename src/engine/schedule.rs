use log::{debug, info, warn};

use super::dates;
use super::drag::{DragController, DragOutcome, DragState, PointerTarget};
use super::history::UndoHistory;
use super::layout::{self, LaneLayout, LayoutMetrics};
use crate::error::ScheduleResult;
use crate::model::{LaneId, NewTask, Task, TaskId, WeekWindow};

/// The single owner of the live task set.
///
/// Exactly one mutator runs at a time: a drag gesture, a task submission, or
/// undo/redo. Undo and redo are refused while a gesture is active.
#[derive(Debug, Clone)]
pub struct Schedule {
    tasks: Vec<Task>,
    week: WeekWindow,
    metrics: LayoutMetrics,
    history: UndoHistory,
    drag: DragController,
}

impl Schedule {
    /// Build a schedule around `tasks`, dropping any that break `start <= end`.
    pub fn new(tasks: Vec<Task>, week: WeekWindow, metrics: LayoutMetrics) -> Self {
        let tasks = tasks
            .into_iter()
            .filter(|task| match task.validate() {
                Ok(()) => true,
                Err(e) => {
                    warn!("ignoring task '{}': {}", task.id, e);
                    false
                }
            })
            .collect();
        Self {
            tasks,
            week,
            metrics,
            history: UndoHistory::new(),
            drag: DragController::new(metrics.day_width),
        }
    }

    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history = UndoHistory::with_limit(limit);
        self
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn task(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| &t.id == id)
    }

    pub fn week(&self) -> &WeekWindow {
        &self.week
    }

    pub fn metrics(&self) -> &LayoutMetrics {
        &self.metrics
    }

    pub fn drag(&self) -> &DragController {
        &self.drag
    }

    pub fn drag_state(&self) -> Option<&DragState> {
        self.drag.state()
    }

    pub fn can_undo(&self) -> bool {
        !self.drag.is_dragging() && self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        !self.drag.is_dragging() && self.history.can_redo()
    }

    /// Row assignments and geometry for every lane, recomputed from scratch.
    pub fn layout(&self) -> Vec<LaneLayout> {
        layout::layout_week(&self.tasks, &self.week)
    }

    pub fn lane_layout(&self, lane: LaneId) -> LaneLayout {
        layout::layout_lane(lane, &self.tasks, &self.week)
    }

    // --- Week navigation ---

    pub fn next_week(&mut self) {
        self.week.next();
        info!("showing week of {}", dates::format(self.week.week_start));
    }

    pub fn previous_week(&mut self) {
        self.week.previous();
        info!("showing week of {}", dates::format(self.week.week_start));
    }

    pub fn set_week(&mut self, week: WeekWindow) {
        self.week = week;
        info!("showing week of {}", dates::format(self.week.week_start));
    }

    // --- Mutations ---

    /// Validate and append a submitted task. One undo point per submission.
    pub fn add_task(&mut self, new_task: NewTask) -> ScheduleResult<TaskId> {
        let task = new_task.into_task().inspect_err(|e| {
            warn!("rejected new task: {}", e);
        })?;
        self.history.push(&self.tasks);
        let id = task.id.clone();
        info!(
            "task '{}' added to {} ({} -> {})",
            task.title,
            task.lane,
            dates::format(task.start),
            dates::format(task.end)
        );
        self.tasks.push(task);
        Ok(id)
    }

    pub fn pointer_down(&mut self, target: &PointerTarget, client_x: f32) -> bool {
        self.drag.pointer_down(
            target,
            client_x,
            &self.tasks,
            &self.week,
            &mut self.history,
        )
    }

    pub fn pointer_move<F>(&mut self, client_x: f32, client_y: f32, resolve_lane: F) -> bool
    where
        F: FnOnce(f32, f32) -> Option<LaneId>,
    {
        self.drag
            .pointer_move(client_x, client_y, &mut self.tasks, resolve_lane)
    }

    pub fn pointer_up(&mut self) -> Option<DragOutcome> {
        self.drag.pointer_up(&mut self.tasks)
    }

    /// Restore the previous snapshot. Returns false when nothing changed.
    pub fn undo(&mut self) -> bool {
        if self.drag.is_dragging() {
            debug!("undo ignored during an active gesture");
            return false;
        }
        match self.history.undo(&self.tasks) {
            Some(snapshot) => {
                self.tasks = snapshot;
                info!("undo");
                true
            }
            None => {
                debug!("undo ignored: history is empty");
                false
            }
        }
    }

    /// Re-apply the most recently undone state. Returns false when nothing changed.
    pub fn redo(&mut self) -> bool {
        if self.drag.is_dragging() {
            debug!("redo ignored during an active gesture");
            return false;
        }
        match self.history.redo(&self.tasks) {
            Some(snapshot) => {
                self.tasks = snapshot;
                info!("redo");
                true
            }
            None => {
                debug!("redo ignored: nothing to redo");
                false
            }
        }
    }
}
