use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::Path;

/// Read-only view of the checked-out tree. Paths are relative to its root.
pub trait Workspace: Send + Sync {
    fn is_file(&self, path: &Path) -> impl std::future::Future<Output = bool> + Send;
    fn read_to_string(
        &self,
        path: &Path,
    ) -> impl std::future::Future<Output = Result<String>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn descriptor_file(&self) -> &str;
    fn output_name(&self) -> &str;
    fn workspace_root(&self) -> &str;
    fn api_url(&self) -> &str;
}

#[async_trait]
pub trait ChangeListProvider: Send + Sync {
    /// Paths of every file touched by the change, relative to the repository root.
    async fn changed_files(&self) -> Result<Vec<String>>;
}

#[async_trait]
impl<T: ChangeListProvider + ?Sized> ChangeListProvider for Box<T> {
    async fn changed_files(&self) -> Result<Vec<String>> {
        (**self).changed_files().await
    }
}

/// Receives the single result of a run.
pub trait OutputSink {
    fn set_output(&mut self, name: &str, value: &str) -> Result<()>;
    fn set_failed(&mut self, message: &str);
}
