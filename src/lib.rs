pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{
    actions::ActionsOutput, file_list::StaticChangeList, github::GitHubChangeList,
    workspace::LocalWorkspace,
};
pub use config::Settings;
pub use crate::core::{engine::ModuleScopeEngine, resolver::ModuleResolver};
pub use utils::error::{Result, ScopeError};
