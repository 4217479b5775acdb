use std::path::Path;

use serde::Deserialize;

use crate::cli::Args;
use crate::error::{Error, Result};

/// Status assumed when neither the inputs nor the event carry one
const DEFAULT_STATUS: &str = "open";

/// The issue a single run is about
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct IssueContext {
    /// The issue number (e.g., 42)
    pub number: u64,
    /// The issue title
    pub title: String,
    /// The issue body, empty when the issue has none
    pub description: String,
    /// Raw status text as supplied (e.g., "open")
    pub status: String,
}

impl IssueContext {
    /// Creates a new IssueContext with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number and returns self for chaining
    pub fn with_number(mut self, number: u64) -> Self {
        self.number = number;
        self
    }

    /// Sets the title and returns self for chaining
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the description and returns self for chaining
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the status and returns self for chaining
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Status as shown in the comment (e.g., "open" -> "Open")
    pub fn display_status(&self) -> String {
        capitalize_status(&self.status)
    }

    /// Build the context from explicit inputs, filling gaps from the event payload
    ///
    /// Explicit values always win. The event file is only read when at least
    /// one value is missing.
    pub fn from_args(args: &Args) -> Result<Self> {
        let complete = args.issue_number.is_some()
            && args.issue_title.is_some()
            && args.issue_description.is_some()
            && args.issue_status.is_some();

        let event = match &args.event_path {
            Some(path) if !complete => Some(EventIssue::from_file(path)?),
            _ => None,
        };
        let event = event.flatten();

        let number = args
            .issue_number
            .or(event.as_ref().map(|e| e.number))
            .ok_or_else(|| {
                Error::MissingInput("issue number (--issue-number or ISSUE_NUMBER)".into())
            })?;

        let title = args
            .issue_title
            .clone()
            .or_else(|| event.as_ref().map(|e| e.title.clone()))
            .unwrap_or_default();

        let description = args
            .issue_description
            .clone()
            .or_else(|| event.as_ref().and_then(|e| e.body.clone()))
            .unwrap_or_default();

        let status = args
            .issue_status
            .clone()
            .or_else(|| event.as_ref().and_then(|e| e.state.clone()))
            .unwrap_or_else(|| DEFAULT_STATUS.to_string());

        Ok(Self::new()
            .with_number(number)
            .with_title(title)
            .with_description(description)
            .with_status(status))
    }
}

/// Upper-case the first character, leaving the rest untouched
pub fn capitalize_status(status: &str) -> String {
    let mut chars = status.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[derive(Deserialize)]
struct EventPayload {
    issue: Option<EventIssue>,
}

/// The `issue` object of a GitHub `issues` event
#[derive(Deserialize, Debug, Clone)]
struct EventIssue {
    number: u64,
    #[serde(default)]
    title: String,
    body: Option<String>,
    state: Option<String>,
}

impl EventIssue {
    /// Read the event payload, returning `None` when it isn't an issue event
    fn from_file(path: &Path) -> Result<Option<Self>> {
        let content = std::fs::read_to_string(path)?;
        let payload: EventPayload = serde_json::from_str(&content)?;
        if payload.issue.is_none() {
            tracing::warn!(path = %path.display(), "event payload has no issue object");
        }
        Ok(payload.issue)
    }
}
