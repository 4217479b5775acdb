//! Configuration management for issue-recommender
//!
//! Values are layered: built-in defaults, then an optional YAML file, then
//! command-line flags and environment variables.

use std::path::Path;

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::cli::Args;
use crate::error::{Error, Result};

/// Recommendation service used when nothing else is configured
pub const DEFAULT_ENDPOINT: &str = "http://localhost:5000/recommend";

/// Public GitHub REST API
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Seconds to wait for the recommendation service before falling back
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

lazy_static! {
    static ref SLUG: Regex = Regex::new(r"^([A-Za-z0-9_.-]+)/([A-Za-z0-9_.-]+)$").unwrap();
}

/// The repository hosting the issue
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoRef {
    pub owner: String,
    pub repo: String,
}

impl RepoRef {
    /// Parse an `owner/repo` slug (the format of `GITHUB_REPOSITORY`)
    pub fn parse(slug: &str) -> Result<Self> {
        let caps = SLUG.captures(slug.trim()).ok_or_else(|| {
            Error::InvalidInput(format!(
                "repository must look like owner/repo, got {:?}",
                slug
            ))
        })?;

        Ok(Self {
            owner: caps[1].to_string(),
            repo: caps[2].to_string(),
        })
    }
}

impl std::fmt::Display for RepoRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RecommenderConfig {
    pub endpoint: String,
    pub timeout_secs: u64,
}

impl Default for RecommenderConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GithubConfig {
    pub api_url: String,
    pub owner: Option<String>,
    pub repo: Option<String>,
    /// Only ever taken from the command line or environment
    #[serde(skip)]
    pub token: Option<String>,
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            owner: None,
            repo: None,
            token: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub recommender: RecommenderConfig,
    pub github: GithubConfig,
}

impl Config {
    /// Load the YAML file at `path`, falling back to defaults when it doesn't exist
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "config file not found, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    /// Build the effective configuration for one invocation
    pub fn resolve(args: &Args) -> Result<Self> {
        let config = match &args.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        config.with_args(args)
    }

    /// Override file values with whatever was given on the command line
    pub fn with_args(mut self, args: &Args) -> Result<Self> {
        if let Some(endpoint) = &args.endpoint {
            self.recommender.endpoint = endpoint.clone();
        }
        if let Some(timeout) = args.timeout_secs {
            self.recommender.timeout_secs = timeout;
        }
        if let Some(api_url) = &args.api_url {
            self.github.api_url = api_url.clone();
        }
        if let Some(slug) = &args.repository {
            let repo = RepoRef::parse(slug)?;
            self.github.owner = Some(repo.owner);
            self.github.repo = Some(repo.repo);
        }
        if let Some(owner) = &args.owner {
            self.github.owner = Some(owner.clone());
        }
        if let Some(repo) = &args.repo {
            self.github.repo = Some(repo.clone());
        }
        self.github.token = args.token.clone().filter(|t| !t.trim().is_empty());

        self.validate()?;
        Ok(self)
    }

    fn validate(&self) -> Result<()> {
        if self.recommender.endpoint.trim().is_empty() {
            return Err(Error::Config("recommender endpoint cannot be empty".into()));
        }
        if self.recommender.timeout_secs == 0 {
            return Err(Error::Config("timeout_secs must be greater than 0".into()));
        }
        if self.github.api_url.trim().is_empty() {
            return Err(Error::Config("github api_url cannot be empty".into()));
        }
        Ok(())
    }

    /// The repository comments are posted to
    pub fn repository(&self) -> Result<RepoRef> {
        match (&self.github.owner, &self.github.repo) {
            (Some(owner), Some(repo)) if !owner.is_empty() && !repo.is_empty() => Ok(RepoRef {
                owner: owner.clone(),
                repo: repo.clone(),
            }),
            _ => Err(Error::MissingInput(
                "repository (--repository owner/repo or GITHUB_REPOSITORY)".into(),
            )),
        }
    }

    pub fn token(&self) -> Result<&str> {
        self.github
            .token
            .as_deref()
            .ok_or_else(|| Error::MissingInput("GitHub token (--token or GITHUB_TOKEN)".into()))
    }
}
