#[cfg(feature = "cli")]
pub mod cli;
pub mod event;
pub mod toml_config;

use crate::adapters::github::DEFAULT_API_URL;
use crate::core::descriptor::DEFAULT_DESCRIPTOR_FILE;
use crate::core::{ConfigProvider, PullRequestRef};
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use std::path::PathBuf;
use toml_config::TomlConfig;

#[cfg(feature = "cli")]
pub use cli::CliConfig;

pub const DEFAULT_OUTPUT_NAME: &str = "modulesParam";
pub const DEFAULT_WORKSPACE: &str = ".";
pub const TOKEN_INPUT: &str = "github-token";

/// Effective settings after layering flags over the TOML file over defaults.
#[derive(Debug, Clone)]
pub struct Settings {
    pub github_token: Option<String>,
    pub api_url: String,
    pub repository: Option<String>,
    pub event_name: Option<String>,
    pub event_path: Option<PathBuf>,
    pub pr_number: Option<u64>,
    pub workspace: String,
    pub descriptor_file: String,
    pub output_name: String,
    pub output_file: Option<PathBuf>,
    pub changed_files: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            github_token: None,
            api_url: DEFAULT_API_URL.to_string(),
            repository: None,
            event_name: None,
            event_path: None,
            pr_number: None,
            workspace: DEFAULT_WORKSPACE.to_string(),
            descriptor_file: DEFAULT_DESCRIPTOR_FILE.to_string(),
            output_name: DEFAULT_OUTPUT_NAME.to_string(),
            output_file: None,
            changed_files: Vec::new(),
        }
    }
}

impl Settings {
    pub fn apply_file(mut self, file: &TomlConfig) -> Self {
        if let Some(api_url) = file.api_url() {
            self.api_url = api_url.to_string();
        }
        if let Some(repository) = file.repository() {
            self.repository = Some(repository.to_string());
        }
        if let Some(workspace) = file.workspace() {
            self.workspace = workspace.to_string();
        }
        if let Some(descriptor_file) = file.descriptor_file() {
            self.descriptor_file = descriptor_file.to_string();
        }
        if let Some(name) = file.output_name() {
            self.output_name = name.to_string();
        }
        self
    }

    #[cfg(feature = "cli")]
    pub fn apply_cli(mut self, cli: &CliConfig) -> Self {
        if cli.github_token.is_some() {
            self.github_token = cli.github_token.clone();
        }
        if let Some(api_url) = &cli.api_url {
            self.api_url = api_url.clone();
        }
        if cli.repository.is_some() {
            self.repository = cli.repository.clone();
        }
        if cli.event_name.is_some() {
            self.event_name = cli.event_name.clone();
        }
        if cli.event_path.is_some() {
            self.event_path = cli.event_path.clone();
        }
        if cli.pr_number.is_some() {
            self.pr_number = cli.pr_number;
        }
        if let Some(workspace) = &cli.workspace {
            self.workspace = workspace.clone();
        }
        if let Some(descriptor_file) = &cli.descriptor_file {
            self.descriptor_file = descriptor_file.clone();
        }
        if let Some(name) = &cli.output_name {
            self.output_name = name.clone();
        }
        if cli.output_file.is_some() {
            self.output_file = cli.output_file.clone();
        }
        if !cli.changed_files.is_empty() {
            self.changed_files = cli.changed_files.clone();
        }
        self
    }

    /// Used only when no token was given explicitly, e.g. `GITHUB_TOKEN`.
    pub fn with_token_fallback(mut self, token: Option<String>) -> Self {
        if self.github_token.as_deref().map_or(true, |t| t.trim().is_empty()) {
            self.github_token = token.filter(|t| !t.trim().is_empty());
        }
        self
    }

    /// Explicit `--changed-files` bypass the GitHub API entirely.
    pub fn uses_github(&self) -> bool {
        self.changed_files.is_empty()
    }

    pub fn pull_request(&self) -> Result<Option<PullRequestRef>> {
        event::resolve_pull_request(
            self.event_name.as_deref(),
            self.event_path.as_deref(),
            self.repository.as_deref(),
            self.pr_number,
        )
    }

    pub fn require_token(&self) -> Result<&String> {
        validation::validate_required_field(TOKEN_INPUT, &self.github_token)
    }
}

impl ConfigProvider for Settings {
    fn descriptor_file(&self) -> &str {
        &self.descriptor_file
    }

    fn output_name(&self) -> &str {
        &self.output_name
    }

    fn workspace_root(&self) -> &str {
        &self.workspace
    }

    fn api_url(&self) -> &str {
        &self.api_url
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validation::validate_file_name("descriptor_file", &self.descriptor_file)?;
        validation::validate_non_empty_string("output_name", &self.output_name)?;
        validation::validate_path("workspace", &self.workspace)?;

        if self.uses_github() {
            validation::validate_url("api_url", &self.api_url)?;
            self.require_token()?;
            if let Some(repository) = &self.repository {
                validation::parse_repository_slug("repository", repository)?;
            }
        }
        Ok(())
    }
}

/// Builds settings from flags, the optional TOML file and `GITHUB_TOKEN`.
#[cfg(feature = "cli")]
pub fn load(cli: &CliConfig) -> Result<Settings> {
    let mut settings = Settings::default();

    if let Some(path) = &cli.config {
        tracing::info!("Loading configuration from: {}", path.display());
        settings = settings.apply_file(&TomlConfig::from_file(path)?);
    }

    let settings = settings
        .apply_cli(cli)
        .with_token_fallback(std::env::var("GITHUB_TOKEN").ok());

    settings.validate()?;
    Ok(settings)
}
