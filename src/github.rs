use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{info, instrument};

use crate::config::RepoRef;
use crate::error::{Error, Result};

const USER_AGENT: &str = concat!("issue-recommender/", env!("CARGO_PKG_VERSION"));
const API_VERSION: &str = "2022-11-28";

/// Longest error body kept in an error message
const MAX_ERROR_BODY: usize = 500;

/// A comment about to be created on an issue
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentPayload {
    pub issue_number: u64,
    pub owner: String,
    pub repo: String,
    pub body: String,
}

impl CommentPayload {
    pub fn new(repo: &RepoRef, issue_number: u64, body: impl Into<String>) -> Self {
        Self {
            issue_number,
            owner: repo.owner.clone(),
            repo: repo.repo.clone(),
            body: body.into(),
        }
    }
}

/// The part of GitHub's comment response we care about
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CreatedComment {
    pub id: u64,
    pub html_url: String,
}

/// Minimal GitHub REST client for issue comments
pub struct GithubClient {
    http: reqwest::Client,
    api_url: String,
    token: String,
}

impl GithubClient {
    pub fn new(api_url: &str, token: impl Into<String>) -> Result<Self> {
        let http = reqwest::Client::builder().user_agent(USER_AGENT).build()?;

        Ok(Self {
            http,
            api_url: api_url.trim_end_matches('/').to_string(),
            token: token.into(),
        })
    }

    /// Create a comment on an issue
    ///
    /// # Arguments
    /// * `comment` - Target issue and comment body
    #[instrument(skip(self, comment), fields(repo = %format!("{}/{}", comment.owner, comment.repo), issue = comment.issue_number))]
    pub async fn create_comment(&self, comment: &CommentPayload) -> Result<CreatedComment> {
        let url = format!(
            "{}/repos/{}/{}/issues/{}/comments",
            self.api_url, comment.owner, comment.repo, comment.issue_number
        );

        let response = self
            .http
            .post(&url)
            .bearer_auth(self.token.trim())
            .header(reqwest::header::ACCEPT, "application/vnd.github+json")
            .header("X-GitHub-Api-Version", API_VERSION)
            .json(&json!({ "body": comment.body }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::GitHubApi {
                status: status.as_u16(),
                message: truncate(&body, MAX_ERROR_BODY),
            });
        }

        let created: CreatedComment = response.json().await?;
        info!(comment_id = created.id, "comment created");
        Ok(created)
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    let mut chars = text.chars();
    let head: String = chars.by_ref().take(max_chars).collect();
    if chars.next().is_some() {
        format!("{}...", head)
    } else {
        head
    }
}
