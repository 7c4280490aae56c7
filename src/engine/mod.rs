pub mod dates;
pub mod drag;
pub mod history;
pub mod layout;
pub mod schedule;

pub use drag::{DragController, DragMode, DragOutcome, DragState, PointerTarget};
pub use history::UndoHistory;
pub use layout::{LaneLayout, LayoutMetrics, TaskPlacement};
pub use schedule::Schedule;
