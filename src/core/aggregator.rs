use crate::core::resolver::ModuleResolver;
use crate::domain::model::ModuleSet;
use crate::domain::ports::Workspace;

/// Resolves every changed file, one at a time, into a deduplicated set.
pub async fn determine_modules_to_build<W: Workspace>(
    resolver: &ModuleResolver<W>,
    changed_files: &[String],
) -> ModuleSet {
    let mut modules = ModuleSet::new();

    for file in changed_files {
        tracing::debug!("Processing changed file: {}", file);
        if let Some(module) = resolver.resolve(file).await {
            modules.insert(module);
        }
    }

    tracing::info!("Modules to build: {}", modules.join(", "));
    modules
}
