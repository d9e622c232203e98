use clap::Parser;
use std::path::PathBuf;

/// Command-line flags. Unset flags fall through to the TOML file, then defaults.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "pr-modules")]
#[command(about = "Determine the Maven modules touched by a pull request")]
pub struct CliConfig {
    /// Token for the GitHub API (falls back to GITHUB_TOKEN)
    #[arg(long, env = "INPUT_GITHUB-TOKEN", hide_env_values = true)]
    pub github_token: Option<String>,

    #[arg(long, env = "GITHUB_API_URL")]
    pub api_url: Option<String>,

    /// Repository as owner/repo
    #[arg(long, env = "GITHUB_REPOSITORY")]
    pub repository: Option<String>,

    #[arg(long, env = "GITHUB_EVENT_NAME")]
    pub event_name: Option<String>,

    /// Path to the JSON payload of the triggering event
    #[arg(long, env = "GITHUB_EVENT_PATH")]
    pub event_path: Option<PathBuf>,

    /// Treat the run as this pull request regardless of the event
    #[arg(long)]
    pub pr_number: Option<u64>,

    /// Root of the checked-out repository
    #[arg(long, env = "GITHUB_WORKSPACE")]
    pub workspace: Option<String>,

    /// Build descriptor looked up in each directory
    #[arg(long)]
    pub descriptor_file: Option<String>,

    #[arg(long)]
    pub output_name: Option<String>,

    #[arg(long, env = "GITHUB_OUTPUT")]
    pub output_file: Option<PathBuf>,

    /// Use these files instead of asking GitHub
    #[arg(long, value_delimiter = ',')]
    pub changed_files: Vec<String>,

    /// Optional TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}
