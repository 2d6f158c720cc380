pub mod actions;
pub mod camera;
pub mod clock;
pub mod status_table;
