//! Pointer-driven move/resize state machine.
//!
//! `Idle` is `state == None`; `Dragging` holds a [`DragState`]. The UI feeds
//! pointer-down, pointer-move and pointer-up events in delivery order. Deltas
//! are always measured from the pointer position at gesture start and snapped
//! to whole days, so repeated moves never accumulate rounding error.

use chrono::NaiveDate;
use log::{debug, info};

use super::dates;
use super::history::UndoHistory;
use crate::model::{LaneId, Task, TaskId, WeekWindow};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragMode {
    Move,
    Resize,
}

/// What the pointer went down on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PointerTarget {
    TaskBody(TaskId),
    /// The trailing resize handle. Takes precedence over the body beneath it.
    ResizeHandle(TaskId),
    LaneBackground,
}

/// An active gesture.
#[derive(Debug, Clone, PartialEq)]
pub struct DragState {
    pub task_id: TaskId,
    pub mode: DragMode,
    pub start_client_x: f32,
    pub latest_client_x: f32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub start_index: i64,
    pub end_index: i64,
    /// Lane the task was in when the gesture began.
    pub lane: LaneId,
}

/// What a finished gesture did to its task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragOutcome {
    pub task_id: TaskId,
    pub mode: DragMode,
    pub delta_days: i64,
    /// False when the task ended up exactly where it started.
    pub changed: bool,
}

/// Snap a horizontal pixel delta to whole days.
pub fn snap_days(delta_x: f32, day_width: f32) -> i64 {
    if day_width <= 0.0 {
        return 0;
    }
    (delta_x / day_width).round() as i64
}

#[derive(Debug, Clone)]
pub struct DragController {
    state: Option<DragState>,
    day_width: f32,
}

impl DragController {
    pub fn new(day_width: f32) -> Self {
        Self {
            state: None,
            day_width,
        }
    }

    pub fn day_width(&self) -> f32 {
        self.day_width
    }

    pub fn state(&self) -> Option<&DragState> {
        self.state.as_ref()
    }

    pub fn is_dragging(&self) -> bool {
        self.state.is_some()
    }

    pub fn is_dragging_task(&self, id: &TaskId) -> bool {
        self.state.as_ref().is_some_and(|s| &s.task_id == id)
    }

    /// Whole-day delta of the active gesture, or 0 when idle.
    pub fn delta_days(&self) -> i64 {
        self.state.as_ref().map_or(0, |s| {
            snap_days(s.latest_client_x - s.start_client_x, self.day_width)
        })
    }

    /// Begin a gesture. Pushes one undo snapshot of `tasks` immediately, so
    /// even a drag that ends where it began leaves an undo point.
    ///
    /// Returns false (and changes nothing) when a gesture is already active,
    /// the target is the lane background, or the task no longer exists.
    pub fn pointer_down(
        &mut self,
        target: &PointerTarget,
        client_x: f32,
        tasks: &[Task],
        week: &WeekWindow,
        history: &mut UndoHistory,
    ) -> bool {
        if self.state.is_some() {
            debug!("pointer down ignored: a gesture is already active");
            return false;
        }
        let (task_id, mode) = match target {
            PointerTarget::TaskBody(id) => (id, DragMode::Move),
            PointerTarget::ResizeHandle(id) => (id, DragMode::Resize),
            PointerTarget::LaneBackground => return false,
        };
        let Some(task) = tasks.iter().find(|t| &t.id == task_id) else {
            debug!("pointer down ignored: task '{}' not found", task_id);
            return false;
        };

        history.push(tasks);
        self.state = Some(DragState {
            task_id: task.id.clone(),
            mode,
            start_client_x: client_x,
            latest_client_x: client_x,
            start_date: task.start,
            end_date: task.end,
            start_index: week.day_index(task.start),
            end_index: week.day_index(task.end),
            lane: task.lane,
        });
        debug!("{:?} gesture started on '{}'", mode, task.id);
        true
    }

    /// Track the pointer. In move mode the task's dates (and lane, when
    /// `resolve_lane` finds one under the pointer) follow immediately; in
    /// resize mode only the preview changes.
    ///
    /// Returns true when the task set was modified.
    pub fn pointer_move<F>(
        &mut self,
        client_x: f32,
        client_y: f32,
        tasks: &mut [Task],
        resolve_lane: F,
    ) -> bool
    where
        F: FnOnce(f32, f32) -> Option<LaneId>,
    {
        let Some(state) = self.state.as_mut() else {
            return false;
        };
        state.latest_client_x = client_x;
        if state.mode == DragMode::Resize {
            return false;
        }

        let delta = snap_days(client_x - state.start_client_x, self.day_width);
        let Some(task) = tasks.iter_mut().find(|t| t.id == state.task_id) else {
            debug!("pointer move ignored: task '{}' not found", state.task_id);
            return false;
        };

        let (Some(start), Some(end)) = (
            dates::checked_add_days(state.start_date, delta),
            dates::checked_add_days(state.end_date, delta),
        ) else {
            debug!("pointer move ignored: {} days is outside the calendar", delta);
            return false;
        };
        let lane = resolve_lane(client_x, client_y).unwrap_or(task.lane);
        if task.start == start && task.end == end && task.lane == lane {
            return false;
        }
        task.start = start;
        task.end = end;
        task.lane = lane;
        true
    }

    /// End the gesture, committing a resize. There is no cancel: releasing
    /// always commits the current position.
    pub fn pointer_up(&mut self, tasks: &mut [Task]) -> Option<DragOutcome> {
        let state = self.state.take()?;
        let delta_days = snap_days(
            state.latest_client_x - state.start_client_x,
            self.day_width,
        );
        let Some(task) = tasks.iter_mut().find(|t| t.id == state.task_id) else {
            debug!("pointer up ignored: task '{}' not found", state.task_id);
            return None;
        };

        let changed = match state.mode {
            DragMode::Move => {
                task.start != state.start_date
                    || task.end != state.end_date
                    || task.lane != state.lane
            }
            DragMode::Resize => {
                match dates::checked_add_days(state.end_date, delta_days) {
                    Some(end) => {
                        let next_end = end.max(state.start_date);
                        task.end = next_end;
                        next_end != state.end_date
                    }
                    None => {
                        debug!("resize of {} days is outside the calendar", delta_days);
                        false
                    }
                }
            }
        };
        info!(
            "{:?} committed on '{}': {} -> {} ({})",
            state.mode,
            task.id,
            dates::format(task.start),
            dates::format(task.end),
            task.lane
        );
        Some(DragOutcome {
            task_id: state.task_id,
            mode: state.mode,
            delta_days,
            changed,
        })
    }

    /// Pixel delta to add to the bar width while resizing.
    pub fn resize_preview_delta(&self) -> Option<f32> {
        self.state
            .as_ref()
            .filter(|s| s.mode == DragMode::Resize)
            .map(|s| s.latest_client_x - s.start_client_x)
    }

    /// Bar width while resizing `id`, never narrower than one day.
    pub fn resize_preview_width(&self, id: &TaskId, base_width: f32) -> f32 {
        match self.resize_preview_delta() {
            Some(delta) if self.is_dragging_task(id) => {
                (base_width + delta).max(self.day_width)
            }
            _ => base_width,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapping_rounds_to_nearest_day() {
        assert_eq!(snap_days(59.0, 120.0), 0);
        assert_eq!(snap_days(60.0, 120.0), 1);
        assert_eq!(snap_days(-61.0, 120.0), -1);
        assert_eq!(snap_days(250.0, 120.0), 2);
        assert_eq!(snap_days(500.0, 0.0), 0);
    }
}
