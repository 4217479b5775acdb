use std::io::Write;

use colored::Colorize;
use tracing::{info, warn};

use crate::ci;
use crate::cli::Args;
use crate::config::{Config, RepoRef};
use crate::error::Result;
use crate::github::{CommentPayload, GithubClient};
use crate::issue::IssueContext;
use crate::recommend::{FailureReason, RecommendationClient, RecommendationRequest};
use crate::template;

/// Where the comment goes
pub enum Delivery {
    /// Create the comment on GitHub
    Post { client: GithubClient, repo: RepoRef },
    /// Write the comment to the output instead
    DryRun,
}

impl Delivery {
    pub fn from_config(config: &Config, dry_run: bool) -> Result<Self> {
        if dry_run {
            return Ok(Delivery::DryRun);
        }

        let repo = config.repository()?;
        let client = GithubClient::new(&config.github.api_url, config.token()?)?;
        Ok(Delivery::Post { client, repo })
    }
}

/// What a single run did
#[derive(Debug, Clone)]
pub struct Outcome {
    pub issue_number: u64,
    /// The comment body that was posted (or printed on a dry run)
    pub body: String,
    /// URL of the created comment, `None` on a dry run
    pub comment_url: Option<String>,
    /// Set when the fallback comment was used
    pub failure: Option<FailureReason>,
}

impl Outcome {
    /// Whether the CI step should be reported as failed
    pub fn step_failed(&self) -> bool {
        self.failure.is_some()
    }
}

/// Main application entry point
pub async fn run(args: Args) -> Result<Outcome> {
    let config = Config::resolve(&args)?;
    let issue = IssueContext::from_args(&args)?;

    // Resolve the comment target before calling the service so a bad setup
    // fails without sending anything
    let delivery = Delivery::from_config(&config, args.dry_run)?;
    let recommender = RecommendationClient::from_config(&config.recommender)?;

    notify(&issue, &recommender, &delivery, &mut std::io::stdout()).await
}

/// Ask for a recommendation and post exactly one comment about it
///
/// Workflow commands, the summary line and dry-run output are written to `out`.
pub async fn notify<W: Write>(
    issue: &IssueContext,
    recommender: &RecommendationClient,
    delivery: &Delivery,
    out: &mut W,
) -> Result<Outcome> {
    info!(
        issue = issue.number,
        endpoint = recommender.endpoint(),
        "requesting recommendation"
    );

    let request = RecommendationRequest::new(&issue.title, &issue.description);
    let recommendation = recommender.recommend(&request).await;

    if let Err(reason) = &recommendation {
        warn!(issue = issue.number, %reason, "falling back to unavailable notice");
        // The comment must still go out when stdout is unusable
        let detail = format!("issue #{}: {}", issue.number, reason);
        if let Err(err) = ci::mark_failed(out, &detail) {
            warn!(%err, "could not write workflow command");
        }
    }

    let body = template::make_body(issue, &recommendation);

    let comment_url = match delivery {
        Delivery::Post { client, repo } => {
            let payload = CommentPayload::new(repo, issue.number, body.clone());
            let created = client.create_comment(&payload).await?;
            if let Err(err) = writeln!(
                out,
                "{} Commented on {}#{}: {}",
                ">".bright_green(),
                repo,
                issue.number,
                created.html_url.bright_cyan()
            ) {
                warn!(%err, "could not write summary");
            }
            Some(created.html_url)
        }
        Delivery::DryRun => {
            write!(out, "{}", body)?;
            None
        }
    };

    Ok(Outcome {
        issue_number: issue.number,
        body,
        comment_url,
        failure: recommendation.err(),
    })
}
