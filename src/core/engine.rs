use crate::core::aggregator::determine_modules_to_build;
use crate::core::resolver::ModuleResolver;
use crate::domain::ports::{ChangeListProvider, OutputSink, Workspace};
use crate::utils::error::{Result, ScopeError};

pub const FAILURE_PREFIX: &str = "Build custom modules failed: ";

pub struct ModuleScopeEngine<P: ChangeListProvider, W: Workspace> {
    provider: P,
    resolver: ModuleResolver<W>,
    output_name: String,
}

impl<P: ChangeListProvider, W: Workspace> ModuleScopeEngine<P, W> {
    pub fn new(provider: P, resolver: ModuleResolver<W>, output_name: impl Into<String>) -> Self {
        Self {
            provider,
            resolver,
            output_name: output_name.into(),
        }
    }

    /// Fetches the change list and returns the comma-joined module list.
    pub async fn run(&self) -> Result<String> {
        let changed_files = self.provider.changed_files().await?;
        let modules = determine_modules_to_build(&self.resolver, &changed_files).await;
        Ok(modules.to_param())
    }

    /// Runs once and reports to `sink`. Returns `true` on success.
    pub async fn execute<O: OutputSink>(&self, sink: &mut O) -> bool {
        let outcome = match self.run().await {
            Ok(modules_param) => {
                tracing::info!(
                    "Final {} to be set as output: {}",
                    self.output_name,
                    modules_param
                );
                sink.set_output(&self.output_name, &modules_param)
            }
            Err(e) => Err(e),
        };

        match outcome {
            Ok(()) => {
                tracing::info!("Build custom modules successfully.");
                true
            }
            Err(e) => {
                report_failure(sink, &e);
                false
            }
        }
    }
}

pub fn report_failure<O: OutputSink>(sink: &mut O, error: &ScopeError) {
    let message = format!("{}{}", FAILURE_PREFIX, error);
    tracing::error!("{}", message);
    sink.set_failed(&message);
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::path::{Path, PathBuf};
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct MockProvider {
        result: std::result::Result<Vec<String>, String>,
        calls: AtomicUsize,
    }

    impl MockProvider {
        fn files(files: &[&str]) -> Self {
            Self {
                result: Ok(files.iter().map(|f| f.to_string()).collect()),
                calls: AtomicUsize::new(0),
            }
        }

        fn failing(message: &str) -> Self {
            Self {
                result: Err(message.to_string()),
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl ChangeListProvider for MockProvider {
        async fn changed_files(&self) -> Result<Vec<String>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.result.clone().map_err(|message| ScopeError::GitHubApiError {
                status: 500,
                message,
            })
        }
    }

    struct MockWorkspace {
        files: HashMap<PathBuf, String>,
    }

    impl Workspace for MockWorkspace {
        async fn is_file(&self, path: &Path) -> bool {
            self.files.contains_key(path)
        }

        async fn read_to_string(&self, path: &Path) -> Result<String> {
            Ok(self.files.get(path).cloned().unwrap_or_default())
        }
    }

    fn workspace() -> MockWorkspace {
        let mut files = HashMap::new();
        files.insert(
            PathBuf::from("module-a/pom.xml"),
            "<project><artifactId>module-a</artifactId></project>".to_string(),
        );
        files.insert(
            PathBuf::from("module-b/pom.xml"),
            "<project><parent><groupId>org.x</groupId></parent><artifactId>module-b</artifactId></project>"
                .to_string(),
        );
        MockWorkspace { files }
    }

    #[derive(Default)]
    struct RecordingSink {
        outputs: Vec<(String, String)>,
        failures: Vec<String>,
        reject_output: bool,
    }

    impl OutputSink for RecordingSink {
        fn set_output(&mut self, name: &str, value: &str) -> Result<()> {
            if self.reject_output {
                return Err(ScopeError::IoError(std::io::Error::new(
                    std::io::ErrorKind::PermissionDenied,
                    "output file is read-only",
                )));
            }
            self.outputs.push((name.to_string(), value.to_string()));
            Ok(())
        }

        fn set_failed(&mut self, message: &str) {
            self.failures.push(message.to_string());
        }
    }

    fn engine(provider: MockProvider) -> ModuleScopeEngine<MockProvider, MockWorkspace> {
        ModuleScopeEngine::new(
            provider,
            ModuleResolver::new(workspace(), "pom.xml"),
            "modulesParam",
        )
    }

    #[tokio::test]
    async fn test_single_module_output() {
        let engine = engine(MockProvider::files(&["module-a/src/Main.java"]));
        let mut sink = RecordingSink::default();

        assert!(engine.execute(&mut sink).await);

        assert_eq!(
            sink.outputs,
            vec![("modulesParam".to_string(), "module-a".to_string())]
        );
        assert!(sink.failures.is_empty());
    }

    #[tokio::test]
    async fn test_multiple_modules_are_comma_joined() {
        let engine = engine(MockProvider::files(&[
            "module-b/src/B.java",
            "module-a/src/A.java",
            "module-a/src/A2.java",
        ]));

        assert_eq!(engine.run().await.unwrap(), "module-a,org.x:module-b");
    }

    #[tokio::test]
    async fn test_no_modules_sets_empty_output() {
        let engine = engine(MockProvider::files(&["file.txt"]));
        let mut sink = RecordingSink::default();

        assert!(engine.execute(&mut sink).await);

        assert_eq!(sink.outputs, vec![("modulesParam".to_string(), String::new())]);
        assert!(sink.failures.is_empty());
    }

    #[tokio::test]
    async fn test_provider_failure_reports_single_message() {
        let engine = engine(MockProvider::failing("Failed to get files"));
        let mut sink = RecordingSink::default();

        assert!(!engine.execute(&mut sink).await);

        assert_eq!(engine.provider.calls.load(Ordering::SeqCst), 1);
        assert!(sink.outputs.is_empty());
        assert_eq!(
            sink.failures,
            vec!["Build custom modules failed: GitHub API returned 500: Failed to get files".to_string()]
        );
    }

    #[tokio::test]
    async fn test_output_write_failure_is_reported() {
        let engine = engine(MockProvider::files(&["module-a/x.java"]));
        let mut sink = RecordingSink {
            reject_output: true,
            ..Default::default()
        };

        assert!(!engine.execute(&mut sink).await);

        assert_eq!(sink.failures.len(), 1);
        assert!(sink.failures[0].starts_with(FAILURE_PREFIX));
        assert!(sink.failures[0].contains("output file is read-only"));
    }
}
