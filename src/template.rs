//! Comment body generation
//!
//! A run produces exactly one of two bodies: the four-line recommendation
//! summary, or the fixed fallback text when no recommendation is available.

use crate::issue::IssueContext;
use crate::recommend::{Recommendation, RecommendationResponse};

/// Posted in place of recommendations when the service can't be used
pub const FALLBACK_MESSAGE: &str = "The recommendation model is not responding. \
No components or assignees could be recommended for this issue.";

/// Build the comment body for whichever way the recommendation call went
pub fn make_body(issue: &IssueContext, recommendation: &Recommendation) -> String {
    match recommendation {
        Ok(response) => recommendation_body(issue, response),
        Err(_) => fallback_body(issue.number),
    }
}

/// The four-line summary, one `\n` after each line
pub fn recommendation_body(issue: &IssueContext, response: &RecommendationResponse) -> String {
    format!(
        "Issue Number: {}\nStatus: {}\nRecommended Components: {}\nRecommended Assignees: {}\n",
        issue.number,
        issue.display_status(),
        response.recommended_components.join(", "),
        response.recommended_developers.join(", "),
    )
}

pub fn fallback_body(issue_number: u64) -> String {
    format!("Issue Number: {}\n{}\n", issue_number, FALLBACK_MESSAGE)
}
