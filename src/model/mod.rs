pub mod seed;
pub mod task;
pub mod week;

pub use task::{Lane, LaneId, NewTask, Task, TaskId, LANES};
pub use week::{WeekWindow, WEEK_DAYS};
