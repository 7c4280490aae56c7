pub mod dialogs;
pub mod lane_grid;
pub mod theme;
pub mod toolbar;
pub mod week_header;
