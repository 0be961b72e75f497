//! Core types for property-path segments.

use std::fmt;

/// Syntactic kind of a path segment.
///
/// Dotted segments are plain identifiers between separators, written in
/// kebab-case. Bracketed segments are literal keys or indices taken
/// verbatim, used to address map keys and list indices.
///
/// # Examples
///
/// ```
/// use confpath::{tokenize, SegmentKind};
///
/// let tokens = tokenize("agent.tags[my.key]").unwrap();
/// assert_eq!(tokens[0].kind(), SegmentKind::Dotted);
/// assert_eq!(tokens[2].kind(), SegmentKind::Bracketed);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentKind {
    /// Plain identifier between `.` separators.
    Dotted,
    /// Literal key or index inside `[` and `]`.
    Bracketed,
}

/// One segment of a property path.
///
/// Tokens are produced in left-to-right order by [`tokenize`](crate::tokenize);
/// the order is significant and never reordered.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    text: String,
    kind: SegmentKind,
}

impl Token {
    pub(crate) fn dotted(text: &str) -> Self {
        Self {
            text: text.to_string(),
            kind: SegmentKind::Dotted,
        }
    }

    pub(crate) fn bracketed(text: &str) -> Self {
        Self {
            text: text.to_string(),
            kind: SegmentKind::Bracketed,
        }
    }

    /// The segment text, without any surrounding brackets.
    ///
    /// # Examples
    ///
    /// ```
    /// use confpath::tokenize;
    ///
    /// let tokens = tokenize("a[b.c]").unwrap();
    /// assert_eq!(tokens[1].text(), "b.c");
    /// ```
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The syntactic kind of this segment.
    #[must_use]
    pub fn kind(&self) -> SegmentKind {
        self.kind
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            SegmentKind::Dotted => write!(f, "{}", self.text),
            SegmentKind::Bracketed => write!(f, "[{}]", self.text),
        }
    }
}
