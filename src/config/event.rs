//! Pull request context of a GitHub Actions run.

use crate::domain::model::PullRequestRef;
use crate::utils::error::{Result, ScopeError};
use crate::utils::validation::parse_repository_slug;
use serde::Deserialize;
use std::path::Path;

pub const PULL_REQUEST_EVENT: &str = "pull_request";

/// The parts of the webhook payload this tool needs.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventPayload {
    #[serde(default)]
    pub pull_request: Option<PullRequestPayload>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PullRequestPayload {
    pub number: u64,
}

impl EventPayload {
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ScopeError::ConfigError {
            message: format!("cannot read event payload {}: {}", path.display(), e),
        })?;
        Ok(serde_json::from_str(&content)?)
    }
}

/// Decides which pull request, if any, this run is about.
///
/// An explicit `pr_number` wins. Otherwise only a `pull_request` event with a
/// `pull_request` object in its payload counts; anything else is `Ok(None)`.
pub fn resolve_pull_request(
    event_name: Option<&str>,
    event_path: Option<&Path>,
    repository: Option<&str>,
    pr_number: Option<u64>,
) -> Result<Option<PullRequestRef>> {
    let number = match pr_number {
        Some(number) => number,
        None => {
            if event_name != Some(PULL_REQUEST_EVENT) {
                return Ok(None);
            }
            let Some(path) = event_path else {
                return Ok(None);
            };
            match EventPayload::from_file(path)?.pull_request {
                Some(pr) => pr.number,
                None => return Ok(None),
            }
        }
    };

    let slug = repository.ok_or_else(|| ScopeError::ConfigError {
        message: "repository is unknown; set GITHUB_REPOSITORY or pass --repository owner/repo"
            .to_string(),
    })?;
    let (owner, repo) = parse_repository_slug("repository", slug)?;

    Ok(Some(PullRequestRef {
        owner,
        repo,
        number,
    }))
}
