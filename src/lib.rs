//! Week-lane planner engine: date math, row packing, the drag/resize state
//! machine and the undo log. Rendering lives in the binary.

pub mod config;
pub mod engine;
pub mod error;
pub mod logging;
pub mod model;

pub use config::{Settings, SettingsError};
pub use engine::{
    DragController, DragMode, DragOutcome, DragState, LaneLayout, LayoutMetrics,
    PointerTarget, Schedule, TaskPlacement, UndoHistory,
};
pub use error::{ScheduleError, ScheduleResult};
pub use model::{Lane, LaneId, NewTask, Task, TaskId, WeekWindow, LANES, WEEK_DAYS};
