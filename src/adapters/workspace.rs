use crate::core::Workspace;
use crate::utils::error::Result;
use std::path::{Path, PathBuf};

/// Checked-out repository on local disk.
#[derive(Debug, Clone)]
pub struct LocalWorkspace {
    base_path: PathBuf,
}

impl LocalWorkspace {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }
}

impl Workspace for LocalWorkspace {
    async fn is_file(&self, path: &Path) -> bool {
        let full_path = self.base_path.join(path);
        tokio::fs::metadata(full_path)
            .await
            .map(|m| m.is_file())
            .unwrap_or(false)
    }

    async fn read_to_string(&self, path: &Path) -> Result<String> {
        // Descriptors may declare a non-UTF-8 encoding; only the ASCII tags matter here.
        let full_path = self.base_path.join(path);
        let bytes = tokio::fs::read(full_path).await?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::resolver::ModuleResolver;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_paths_are_relative_to_base() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::create_dir_all(temp_dir.path().join("core")).unwrap();
        std::fs::write(temp_dir.path().join("core/pom.xml"), "<project/>").unwrap();

        let ws = LocalWorkspace::new(temp_dir.path());

        assert!(ws.is_file(Path::new("core/pom.xml")).await);
        assert!(!ws.is_file(Path::new("core/missing.xml")).await);
        assert_eq!(
            ws.read_to_string(Path::new("core/pom.xml")).await.unwrap(),
            "<project/>"
        );
    }

    #[tokio::test]
    async fn test_directories_are_not_files() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::create_dir_all(temp_dir.path().join("core/pom.xml")).unwrap();

        let ws = LocalWorkspace::new(temp_dir.path());

        assert!(!ws.is_file(Path::new("core/pom.xml")).await);
    }

    #[tokio::test]
    async fn test_latin1_descriptor_still_resolves() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::create_dir_all(temp_dir.path().join("app/src")).unwrap();
        let mut pom = b"<?xml version=\"1.0\" encoding=\"ISO-8859-1\"?><project><name>Caf".to_vec();
        pom.push(0xE9);
        pom.extend_from_slice(b"</name><artifactId>app</artifactId></project>");
        std::fs::write(temp_dir.path().join("app/pom.xml"), pom).unwrap();

        let resolver = ModuleResolver::new(LocalWorkspace::new(temp_dir.path()), "pom.xml");

        let module = resolver.resolve("app/src/A.java").await;
        assert_eq!(module.unwrap().as_str(), "app");
    }

    #[tokio::test]
    async fn test_read_missing_file_is_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let ws = LocalWorkspace::new(temp_dir.path());

        let err = ws.read_to_string(Path::new("nope/pom.xml")).await.unwrap_err();
        assert!(matches!(err, crate::utils::error::ScopeError::IoError(_)));
    }
}
