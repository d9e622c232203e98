pub mod aggregator;
pub mod descriptor;
pub mod engine;
pub mod resolver;

pub use crate::domain::model::{ModuleId, ModuleSet, PullRequestFile, PullRequestRef};
pub use crate::domain::ports::{ChangeListProvider, ConfigProvider, OutputSink, Workspace};
pub use crate::utils::error::Result;
