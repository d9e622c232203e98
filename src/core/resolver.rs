use crate::core::descriptor::parse_module_id;
use crate::domain::model::ModuleId;
use crate::domain::ports::Workspace;
use std::path::{Component, Path};

/// Maps a changed file to the module owning it by walking up to the
/// nearest build descriptor.
pub struct ModuleResolver<W: Workspace> {
    workspace: W,
    descriptor_file: String,
}

impl<W: Workspace> ModuleResolver<W> {
    pub fn new(workspace: W, descriptor_file: impl Into<String>) -> Self {
        Self {
            workspace,
            descriptor_file: descriptor_file.into(),
        }
    }

    /// Returns the identifier of the nearest descriptor that yields one.
    pub async fn resolve(&self, file_path: &str) -> Option<ModuleId> {
        let mut current = Path::new(file_path).parent();
        tracing::debug!(
            "Starting module search for file: {} in directory: {}",
            file_path,
            current.map(|d| d.display().to_string()).unwrap_or_default()
        );

        while let Some(dir) = current {
            if is_search_boundary(dir) {
                break;
            }

            let descriptor_path = dir.join(&self.descriptor_file);
            tracing::debug!("Checking descriptor at: {}", descriptor_path.display());

            if self.workspace.is_file(&descriptor_path).await {
                tracing::debug!("Found descriptor at: {}", descriptor_path.display());
                if let Some(module) = self.read_module_id(&descriptor_path).await {
                    return Some(module);
                }
            }

            match dir.parent() {
                Some(parent) if parent != dir => {
                    tracing::debug!("Moving up to: {}", parent.display());
                    current = Some(parent);
                }
                _ => {
                    tracing::debug!("Reached root or stalled at {}, stopping search.", dir.display());
                    break;
                }
            }
        }

        tracing::debug!("No descriptor found for file: {}", file_path);
        None
    }

    /// Unreadable or malformed descriptors are logged and treated as absent.
    pub async fn read_module_id(&self, descriptor_path: &Path) -> Option<ModuleId> {
        let parsed = match self.workspace.read_to_string(descriptor_path).await {
            Ok(content) => parse_module_id(&content),
            Err(e) => Err(e),
        };

        match parsed {
            Ok(Some(module)) => {
                tracing::debug!("Module name: {} from {}", module, descriptor_path.display());
                Some(module)
            }
            Ok(None) => {
                tracing::warn!("No artifactId found in {}", descriptor_path.display());
                None
            }
            Err(e) => {
                tracing::error!("Error parsing {}: {}", descriptor_path.display(), e);
                None
            }
        }
    }
}

/// The tree root itself (`""` or `.`) and the filesystem root end the ascent.
fn is_search_boundary(dir: &Path) -> bool {
    let mut components = dir.components();
    match (components.next(), components.next()) {
        (None, _) => true,
        (Some(Component::CurDir), None) => true,
        (Some(Component::RootDir), None) => true,
        (Some(Component::Prefix(_)), None) => true,
        (Some(Component::Prefix(_)), Some(Component::RootDir)) => components.next().is_none(),
        _ => false,
    }
}
