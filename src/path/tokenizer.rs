//! Splitting a raw property path into ordered segments.

use crate::error::{Error, Result};
use crate::path::token::Token;

/// Tokenizes a property path into an ordered sequence of segments.
///
/// The path grammar is the one used by relaxed configuration binders:
/// dotted identifiers with optional bracketed literals, e.g.
/// `agent.instrumentation.scopes[my-scope].interfaces[0]`. Everything
/// between a `[` and the first following `]` is taken verbatim, so dots and
/// backslashes inside brackets do not split segments. An empty path yields
/// an empty token sequence.
///
/// # Errors
///
/// Returns [`Error::InvalidPath`] if a `[` has no matching `]`. This is the
/// only failure mode; empty segments (from consecutive dots) are emitted
/// as-is and left for the resolver to reject.
///
/// # Examples
///
/// ```
/// use confpath::tokenize;
///
/// let tokens = tokenize("a.b[c][d]").unwrap();
/// let texts: Vec<_> = tokens.iter().map(|t| t.text()).collect();
/// assert_eq!(texts, ["a", "b", "c", "d"]);
///
/// let tokens = tokenize("a[b.c]").unwrap();
/// let texts: Vec<_> = tokens.iter().map(|t| t.text()).collect();
/// assert_eq!(texts, ["a", "b.c"]);
///
/// assert!(tokenize("a[b").is_err());
/// ```
pub fn tokenize(path: &str) -> Result<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut remainder = path;
    while !remainder.is_empty() {
        remainder = extract_segment(path, remainder, &mut tokens)?;
    }
    Ok(tokens)
}

/// Extracts the first segment of `input`, appends it to `tokens`, and
/// returns the rest of the string with at most one leading dot removed.
///
/// A remainder starting with `[` keeps its bracket so the next round emits
/// a bracketed segment; only a `.` separator is consumed.
fn extract_segment<'a>(path: &str, input: &'a str, tokens: &mut Vec<Token>) -> Result<&'a str> {
    if let Some(rest) = input.strip_prefix('[') {
        match rest.find(']') {
            Some(end) => {
                tokens.push(Token::bracketed(&rest[..end]));
                Ok(strip_leading_dot(&rest[end + 1..]))
            }
            None => Err(Error::InvalidPath {
                path: path.to_string(),
                reason: "unmatched '['".to_string(),
            }),
        }
    } else {
        match input.find(['.', '[']) {
            Some(end) => {
                tokens.push(Token::dotted(&input[..end]));
                Ok(strip_leading_dot(&input[end..]))
            }
            None => {
                tokens.push(Token::dotted(input));
                Ok("")
            }
        }
    }
}

fn strip_leading_dot(input: &str) -> &str {
    input.strip_prefix('.').unwrap_or(input)
}
