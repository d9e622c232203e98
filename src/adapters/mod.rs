// Adapters layer: concrete implementations for external systems (GitHub, disk, runner output).

pub mod actions;
pub mod file_list;
pub mod github;
pub mod workspace;
