use std::path::PathBuf;

use clap::Parser;

/// Post component and assignee recommendations on a newly opened issue.
///
/// Every input can also be supplied through the environment, which is how
/// a CI workflow normally provides them.
#[derive(Parser, Debug, Default, Clone)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    #[clap(long, env = "ISSUE_NUMBER")]
    pub issue_number: Option<u64>,

    #[clap(long, env = "ISSUE_TITLE")]
    pub issue_title: Option<String>,

    #[clap(long, env = "ISSUE_DESCRIPTION")]
    pub issue_description: Option<String>,

    #[clap(long, env = "ISSUE_STATUS")]
    pub issue_status: Option<String>,

    /// Repository as `owner/repo`
    #[clap(long, env = "GITHUB_REPOSITORY")]
    pub repository: Option<String>,

    #[clap(long)]
    pub owner: Option<String>,

    #[clap(long)]
    pub repo: Option<String>,

    #[clap(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Recommendation service URL
    #[clap(long, env = "RECOMMENDER_ENDPOINT")]
    pub endpoint: Option<String>,

    #[clap(long, env = "GITHUB_API_URL")]
    pub api_url: Option<String>,

    /// Seconds to wait for the recommendation service
    #[clap(long, env = "RECOMMENDER_TIMEOUT_SECS")]
    pub timeout_secs: Option<u64>,

    /// GitHub event payload to read the issue from
    #[clap(long, env = "GITHUB_EVENT_PATH")]
    pub event_path: Option<PathBuf>,

    /// YAML configuration file
    #[clap(short, long, env = "RECOMMENDER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Print the comment instead of posting it
    #[clap(short, long, value_parser, default_value_t = false)]
    pub dry_run: bool,
}
