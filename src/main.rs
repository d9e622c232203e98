use clap::Parser;
use pr_modules::core::engine::report_failure;
use pr_modules::core::{ChangeListProvider, ConfigProvider};
use pr_modules::utils::logger::{self, LogFormat};
use pr_modules::{
    config, ActionsOutput, CliConfig, GitHubChangeList, LocalWorkspace, ModuleResolver,
    ModuleScopeEngine, Settings, StaticChangeList,
};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = CliConfig::parse();

    logger::init_logger(cli.verbose, LogFormat::from_flag(cli.json_logs));

    tracing::info!("Starting pr-modules");

    let settings = match config::load(&cli) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("Configuration validation failed: {}", e);
            let mut output = ActionsOutput::new(cli.output_file.clone());
            report_failure(&mut output, &e);
            return ExitCode::FAILURE;
        }
    };

    let mut output = ActionsOutput::new(settings.output_file.clone());

    let provider = match build_provider(&settings) {
        Ok(provider) => provider,
        Err(e) => {
            report_failure(&mut output, &e);
            return ExitCode::FAILURE;
        }
    };

    let workspace = LocalWorkspace::new(settings.workspace_root());
    let resolver = ModuleResolver::new(workspace, settings.descriptor_file());
    let engine = ModuleScopeEngine::new(provider, resolver, settings.output_name());

    if engine.execute(&mut output).await {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn build_provider(settings: &Settings) -> pr_modules::Result<Box<dyn ChangeListProvider>> {
    if !settings.uses_github() {
        return Ok(Box::new(StaticChangeList::new(settings.changed_files.clone())));
    }

    let token = settings.require_token()?.clone();
    let pull_request = settings.pull_request()?;
    Ok(Box::new(GitHubChangeList::new(
        settings.api_url(),
        token,
        pull_request,
    )))
}
