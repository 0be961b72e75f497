//! Tri-state classification of property paths against the schema model.
//!
//! The resolver answers whether a full path corresponds to a real,
//! reachable location in the schema. It is one of two consumers of the
//! schema model; the other is the [`Autocompleter`](crate::Autocompleter),
//! which walks the same traversal but reports candidates instead of a
//! verdict.

use serde::Serialize;

use crate::case::kebab_to_camel;
use crate::error::Result;
use crate::path::{tokenize, Token};
use crate::schema::{NodeId, SchemaModel, SchemaNode};

/// Verdict of resolving a full token sequence against the schema.
///
/// Computed fresh per resolution call and never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Classification {
    /// The path is fully valid and terminates at a leaf-equivalent point.
    PathEnd,
    /// The path is a valid prefix but lands on a bean with further
    /// addressable fields.
    NonPathEnd,
    /// The path diverges from the schema at some token.
    NotExists,
}

/// Walks property paths against an immutable [`SchemaModel`].
///
/// Resolution is pure and synchronous: no I/O, no mutation, no shared
/// state beyond the borrowed model, so one resolver (or many) may serve
/// unlimited concurrent calls.
///
/// # Examples
///
/// ```
/// use confpath::{Classification, PathResolver, PropertySchema, SchemaBuilder,
///     SchemaModel, SchemaNode};
///
/// struct ServerConfig;
///
/// impl PropertySchema for ServerConfig {
///     fn describe(builder: &mut SchemaBuilder) -> SchemaNode {
///         builder
///             .bean()
///             .field::<String>("host")
///             .field::<u16>("port")
///             .finish()
///     }
/// }
///
/// let model = SchemaModel::build::<ServerConfig>("server");
/// let resolver = PathResolver::new(&model);
///
/// assert_eq!(resolver.resolve("server.host").unwrap(), Classification::PathEnd);
/// assert_eq!(resolver.resolve("server").unwrap(), Classification::NonPathEnd);
/// assert_eq!(resolver.resolve("server.hots").unwrap(), Classification::NotExists);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PathResolver<'a> {
    model: &'a SchemaModel,
}

impl<'a> PathResolver<'a> {
    /// Creates a resolver over a schema model.
    #[must_use]
    pub fn new(model: &'a SchemaModel) -> Self {
        Self { model }
    }

    /// The schema model this resolver walks.
    #[must_use]
    pub fn model(&self) -> &'a SchemaModel {
        self.model
    }

    /// Quick namespace pre-check: the path is non-empty and starts with the
    /// schema-root identifier followed by a `.` separator.
    ///
    /// # Examples
    ///
    /// ```
    /// # use confpath::{PathResolver, PropertySchema, SchemaBuilder, SchemaModel, SchemaNode};
    /// # struct C;
    /// # impl PropertySchema for C {
    /// #     fn describe(b: &mut SchemaBuilder) -> SchemaNode { b.bean().finish() }
    /// # }
    /// let model = SchemaModel::build::<C>("server");
    /// let resolver = PathResolver::new(&model);
    /// assert!(resolver.is_in_namespace("server.anything"));
    /// assert!(!resolver.is_in_namespace("server"));
    /// assert!(!resolver.is_in_namespace("serverless.x"));
    /// ```
    #[must_use]
    pub fn is_in_namespace(&self, path: &str) -> bool {
        let namespace = self.model.namespace();
        path.len() > namespace.len()
            && path.starts_with(namespace)
            && path[namespace.len()..].starts_with('.')
    }

    /// Resolves a raw path to its classification.
    ///
    /// The first token must equal the schema-root identifier; otherwise the
    /// path is classified [`Classification::NotExists`] without touching
    /// the schema. All other anomalies (unknown field, extra tokens past a
    /// leaf, empty path) also fold into `NotExists` rather than erroring.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPath`](crate::Error::InvalidPath) if the
    /// path cannot be tokenized (unmatched `[`). This is fatal only to
    /// this single resolution call.
    pub fn resolve(&self, path: &str) -> Result<Classification> {
        let tokens = tokenize(path)?;
        match tokens.split_first() {
            Some((root, rest)) if root.text() == self.model.namespace() => {
                Ok(self.classify(rest, self.model.root()))
            }
            _ => Ok(Classification::NotExists),
        }
    }

    /// Classifies a token sequence against a schema node.
    ///
    /// Pure function of `(tokens, node)`; the model is never mutated.
    #[must_use]
    pub fn classify(&self, tokens: &[Token], node: NodeId) -> Classification {
        match self.model.node(node) {
            SchemaNode::Terminal => {
                if tokens.is_empty() {
                    Classification::PathEnd
                } else {
                    // Nothing can be addressed beneath a leaf.
                    Classification::NotExists
                }
            }
            SchemaNode::Map { value } => self.classify_container(tokens, *value),
            SchemaNode::List { element } => self.classify_container(tokens, *element),
            SchemaNode::Bean(bean) => match tokens.split_first() {
                None => Classification::NonPathEnd,
                Some((head, rest)) => {
                    let field_name = kebab_to_camel(head.text());
                    match bean.field(&field_name) {
                        None => Classification::NotExists,
                        Some(field) => match field.node() {
                            // Opaque field: its internal shape cannot be
                            // checked, so whatever follows is accepted.
                            None => Classification::PathEnd,
                            Some(child) => self.classify(rest, child),
                        },
                    }
                }
            },
        }
    }

    /// Shared Map/List step. The key or index is never validated; it only
    /// consumes one token. A terminal value type ends the walk successfully
    /// whether or not a key was supplied, since content beneath an
    /// unconstrained value type cannot be checked further.
    fn classify_container(&self, tokens: &[Token], value: NodeId) -> Classification {
        if self.model.is_terminal(value) {
            return Classification::PathEnd;
        }
        match tokens.split_first() {
            None => Classification::NonPathEnd,
            Some((_, rest)) => self.classify(rest, value),
        }
    }
}
