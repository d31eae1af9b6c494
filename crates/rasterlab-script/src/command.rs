//! Command line parsing
//!
//! One line of text is one command: whitespace-separated tokens, the
//! first of which is the verb. Blank lines and lines whose first
//! non-space character is `#` carry no command.

/// A parsed command line: a verb plus its operands, not yet validated
/// against the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub verb: String,
    pub args: Vec<String>,
}

/// Split a line into a [`Request`].
///
/// Returns `None` for blank and comment lines.
pub fn parse_line(line: &str) -> Option<Request> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return None;
    }
    let mut tokens = trimmed.split_whitespace().map(str::to_string);
    let verb = tokens.next()?;
    Some(Request {
        verb,
        args: tokens.collect(),
    })
}
