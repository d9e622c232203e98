use crate::core::ChangeListProvider;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Change list supplied up front, e.g. from `--changed-files` on a local run.
#[derive(Debug, Clone, Default)]
pub struct StaticChangeList {
    files: Vec<String>,
}

impl StaticChangeList {
    pub fn new(files: Vec<String>) -> Self {
        let files = files
            .into_iter()
            .map(|f| f.trim().to_string())
            .filter(|f| !f.is_empty())
            .collect();
        Self { files }
    }
}

#[async_trait]
impl ChangeListProvider for StaticChangeList {
    async fn changed_files(&self) -> Result<Vec<String>> {
        tracing::info!("Using {} changed files supplied on the command line", self.files.len());
        Ok(self.files.clone())
    }
}
