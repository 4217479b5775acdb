//! # issue-recommender
//!
//! Posts component and assignee recommendations as a comment on newly opened issues.

pub mod app;
pub mod ci;
pub mod cli;
pub mod config;
pub mod error;
pub mod github;
pub mod issue;
pub mod logging;
pub mod recommend;
pub mod template;

// Re-export commonly used types
pub use config::Config;
pub use error::{Error, Result};
pub use issue::IssueContext;
