//! Change list of a pull request from the GitHub REST API.

use crate::core::{ChangeListProvider, PullRequestFile, PullRequestRef};
use crate::utils::error::{Result, ScopeError};
use async_trait::async_trait;
use reqwest::header::{ACCEPT, USER_AGENT};
use reqwest::Client;

/// Largest page the pull request files endpoint serves.
pub const PAGE_SIZE: usize = 100;
pub const DEFAULT_API_URL: &str = "https://api.github.com";

const API_VERSION: &str = "2022-11-28";
const CLIENT_USER_AGENT: &str = concat!("pr-modules/", env!("CARGO_PKG_VERSION"));

pub struct GitHubChangeList {
    client: Client,
    api_url: String,
    token: String,
    pull_request: Option<PullRequestRef>,
}

impl GitHubChangeList {
    /// `pull_request` is `None` when the run was not triggered by a pull request.
    pub fn new(api_url: &str, token: String, pull_request: Option<PullRequestRef>) -> Self {
        Self {
            client: Client::new(),
            api_url: api_url.trim_end_matches('/').to_string(),
            token,
            pull_request,
        }
    }

    async fn fetch_all(&self, pr: &PullRequestRef) -> Result<Vec<String>> {
        let mut files = Vec::new();
        let mut page = 1;

        // A full page may be the last one; the next request then comes back empty.
        loop {
            let batch = self.fetch_page(pr, page).await?;
            let count = batch.len();

            if count > 0 {
                let listing: Vec<String> = batch.iter().map(describe_file).collect();
                tracing::debug!("Found {} files on page {}: {}", count, page, listing.join(", "));
                files.extend(batch.into_iter().map(|f| f.filename));
            } else {
                tracing::debug!("No files found on page {}.", page);
            }

            page += 1;
            if count != PAGE_SIZE {
                break;
            }
        }

        Ok(files)
    }

    async fn fetch_page(&self, pr: &PullRequestRef, page: usize) -> Result<Vec<PullRequestFile>> {
        let url = format!(
            "{}/repos/{}/{}/pulls/{}/files",
            self.api_url, pr.owner, pr.repo, pr.number
        );
        tracing::debug!("Requesting page {} from {}", page, url);

        let response = self
            .client
            .get(&url)
            .query(&[("per_page", PAGE_SIZE), ("page", page)])
            .bearer_auth(&self.token)
            .header(ACCEPT, "application/vnd.github+json")
            .header("X-GitHub-Api-Version", API_VERSION)
            .header(USER_AGENT, CLIENT_USER_AGENT)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ScopeError::GitHubApiError {
                status: status.as_u16(),
                message: error_message(&body, status.canonical_reason()),
            });
        }

        Ok(response.json().await?)
    }
}

/// `path (status)` for the page debug line.
fn describe_file(file: &PullRequestFile) -> String {
    match &file.status {
        Some(status) => format!("{} ({})", file.filename, status),
        None => file.filename.clone(),
    }
}

/// GitHub error bodies look like `{"message": "...", "documentation_url": "..."}`.
fn error_message(body: &str, reason: Option<&str>) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(str::to_string))
        .or_else(|| (!body.trim().is_empty()).then(|| body.trim().to_string()))
        .unwrap_or_else(|| reason.unwrap_or("request failed").to_string())
}

#[async_trait]
impl ChangeListProvider for GitHubChangeList {
    async fn changed_files(&self) -> Result<Vec<String>> {
        let Some(pr) = &self.pull_request else {
            tracing::warn!(
                "Not a pull request event or pull_request payload is missing. No files will be returned."
            );
            return Ok(Vec::new());
        };

        tracing::info!(
            "Fetching changed files for PR #{} in {}/{}",
            pr.number,
            pr.owner,
            pr.repo
        );

        match self.fetch_all(pr).await {
            Ok(files) => {
                tracing::info!(
                    "Found a total of {} changed files in the pull request.",
                    files.len()
                );
                tracing::debug!("Changed files list: {}", files.join(", "));
                Ok(files)
            }
            Err(e) => {
                tracing::error!("Error fetching changed files: {}", e);
                Err(e)
            }
        }
    }
}
