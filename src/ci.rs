//! CI failure signalling through GitHub Actions workflow commands
//!
//! Writing `::error title=...::message` to stdout annotates the run and, with
//! a non-zero exit status, marks the step as failed.

use std::io::{self, Write};

/// Title of the annotation raised when no recommendation could be made
pub const FAILURE_TITLE: &str = "Recommendation unavailable";

/// Escape a workflow command message
pub fn escape_data(value: &str) -> String {
    value
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// Escape a workflow command property value
pub fn escape_property(value: &str) -> String {
    escape_data(value).replace(':', "%3A").replace(',', "%2C")
}

pub fn error_command(title: &str, message: &str) -> String {
    format!(
        "::error title={}::{}",
        escape_property(title),
        escape_data(message)
    )
}

/// Report a failed recommendation to the invoking workflow
pub fn mark_failed<W: Write>(out: &mut W, detail: &str) -> io::Result<()> {
    writeln!(out, "{}", error_command(FAILURE_TITLE, detail))?;
    out.flush()
}
