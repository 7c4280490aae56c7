//! Row packing and pixel geometry for one lane of the week grid.
//!
//! Tasks are clipped to the visible window, sorted by visible start (stable,
//! so ties keep input order) and assigned greedily to the first row whose last
//! occupied day ends strictly before the task's first visible day. Greedy by
//! start time uses exactly as many rows as the largest set of tasks that
//! overlap on a single day.

use crate::model::{LaneId, Task, TaskId, WeekWindow, LANES, WEEK_DAYS};

const LAST_INDEX: i64 = WEEK_DAYS - 1;

/// Pixel constants shared by the header grid, the lane layout and the drag
/// machine. Header columns and bars must use the same `day_width`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutMetrics {
    pub day_width: f32,
    pub row_height: f32,
    pub row_gap: f32,
    /// Total vertical padding of a lane, split evenly above and below the rows.
    pub row_offset: f32,
}

impl Default for LayoutMetrics {
    fn default() -> Self {
        Self {
            day_width: 120.0,
            row_height: 44.0,
            row_gap: 8.0,
            row_offset: 24.0,
        }
    }
}

impl LayoutMetrics {
    /// Width of the whole 7-day grid.
    pub fn week_width(&self) -> f32 {
        self.day_width * WEEK_DAYS as f32
    }

    /// Height of a lane holding `rows` occupied rows. Empty lanes keep one row.
    pub fn lane_height(&self, rows: usize) -> f32 {
        let rows = rows.max(1) as f32;
        rows * self.row_height + (rows - 1.0) * self.row_gap + self.row_offset
    }

    /// Top of `row` relative to the lane's top edge.
    pub fn row_top(&self, row: usize) -> f32 {
        self.row_offset / 2.0 + row as f32 * (self.row_height + self.row_gap)
    }
}

/// Where one visible task sits inside its lane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskPlacement {
    pub task_id: TaskId,
    pub row: usize,
    pub visible_start: i64,
    pub visible_end: i64,
    pub start_index: i64,
    pub end_index: i64,
    pub continues_before: bool,
    pub continues_after: bool,
}

impl TaskPlacement {
    /// Place `task` against `week`, or `None` when no part of it is visible.
    /// The row is left at 0 until packing assigns it.
    pub fn clip(task: &Task, week: &WeekWindow) -> Option<Self> {
        let start_index = week.day_index(task.start);
        let end_index = week.day_index(task.end);
        let visible_start = start_index.max(0);
        let visible_end = end_index.min(LAST_INDEX);
        if visible_end < 0 || visible_start > LAST_INDEX {
            return None;
        }
        Some(Self {
            task_id: task.id.clone(),
            row: 0,
            visible_start,
            visible_end,
            start_index,
            end_index,
            continues_before: start_index < 0,
            continues_after: end_index > LAST_INDEX,
        })
    }

    /// Inclusive number of visible days.
    pub fn visible_days(&self) -> i64 {
        self.visible_end - self.visible_start + 1
    }

    pub fn left(&self, metrics: &LayoutMetrics) -> f32 {
        self.visible_start as f32 * metrics.day_width
    }

    pub fn width(&self, metrics: &LayoutMetrics) -> f32 {
        self.visible_days() as f32 * metrics.day_width
    }

    pub fn top(&self, metrics: &LayoutMetrics) -> f32 {
        metrics.row_top(self.row)
    }
}

/// Packed layout of one lane for the current window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaneLayout {
    pub lane: LaneId,
    /// Visible tasks in packing order (by visible start, input order on ties).
    pub placements: Vec<TaskPlacement>,
    /// Number of occupied rows; zero for a lane with nothing visible.
    pub row_count: usize,
}

impl LaneLayout {
    pub fn height(&self, metrics: &LayoutMetrics) -> f32 {
        metrics.lane_height(self.row_count)
    }

    pub fn placement(&self, id: &TaskId) -> Option<&TaskPlacement> {
        self.placements.iter().find(|p| &p.task_id == id)
    }
}

/// Assign rows to already-clipped placements. Returns the number of rows used.
pub fn pack_rows(placements: &mut [TaskPlacement]) -> usize {
    // `sort_by_key` is stable, which keeps same-day starts in input order.
    placements.sort_by_key(|p| p.visible_start);

    let mut row_ends: Vec<i64> = Vec::new();
    for placement in placements.iter_mut() {
        let free = row_ends
            .iter()
            .position(|&end| end < placement.visible_start);
        let row = match free {
            Some(row) => {
                row_ends[row] = placement.visible_end;
                row
            }
            None => {
                row_ends.push(placement.visible_end);
                row_ends.len() - 1
            }
        };
        placement.row = row;
    }
    row_ends.len()
}

/// Lay out the tasks of `lane`, ignoring tasks assigned to other lanes.
pub fn layout_lane(lane: LaneId, tasks: &[Task], week: &WeekWindow) -> LaneLayout {
    let mut placements: Vec<TaskPlacement> = tasks
        .iter()
        .filter(|task| task.lane == lane)
        .filter_map(|task| TaskPlacement::clip(task, week))
        .collect();
    let row_count = pack_rows(&mut placements);
    LaneLayout {
        lane,
        placements,
        row_count,
    }
}

/// Lay out every lane in display order.
pub fn layout_week(tasks: &[Task], week: &WeekWindow) -> Vec<LaneLayout> {
    LANES
        .iter()
        .map(|lane| layout_lane(lane.id, tasks, week))
        .collect()
}
