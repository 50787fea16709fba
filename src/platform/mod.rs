pub mod desktop;
pub mod task;
