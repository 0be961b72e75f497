//! Property-path tokenization.
//!
//! A property path addresses a location in a nested configuration schema:
//! dotted segments name bean fields (kebab-case), bracketed segments carry
//! literal map keys or list indices. This module turns a raw path string
//! into the ordered token sequence the resolver walks.
//!
//! # Examples
//!
//! ```
//! use confpath::{tokenize, SegmentKind};
//!
//! let tokens = tokenize("agent.instrumentation.scopes[jdbc].interfaces[0]").unwrap();
//! assert_eq!(tokens.len(), 6);
//! assert_eq!(tokens[3].text(), "jdbc");
//! assert_eq!(tokens[3].kind(), SegmentKind::Bracketed);
//! ```

pub mod token;
pub mod tokenizer;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export key types
pub use token::{SegmentKind, Token};
pub use tokenizer::tokenize;
