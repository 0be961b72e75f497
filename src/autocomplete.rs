//! Suggestion of valid next-level field names for a property path.
//!
//! The autocompleter is a thin layer over the same token/schema traversal
//! the [`PathResolver`](crate::PathResolver) performs; instead of a
//! tri-state verdict it reports the valid next-level field names at the
//! point where resolution stops.

use crate::case::{camel_to_kebab, kebab_to_camel};
use crate::error::Result;
use crate::path::tokenize;
use crate::resolver::PathResolver;
use crate::schema::{NodeId, SchemaModel, SchemaNode};

/// Produces autocomplete candidates for property paths.
///
/// Candidates are the kebab-case field names of the bean reached by the
/// path, in schema declaration order. Paths that leave the namespace,
/// diverge from the schema, or end on anything that is not a bean yield an
/// empty list; only a syntactically broken path is an error.
///
/// # Examples
///
/// ```
/// use confpath::{Autocompleter, PropertySchema, SchemaBuilder, SchemaModel, SchemaNode};
///
/// struct ServerConfig;
///
/// impl PropertySchema for ServerConfig {
///     fn describe(builder: &mut SchemaBuilder) -> SchemaNode {
///         builder
///             .bean()
///             .field::<String>("bindAddress")
///             .field::<u16>("port")
///             .finish()
///     }
/// }
///
/// let model = SchemaModel::build::<ServerConfig>("server");
/// let completer = Autocompleter::new(&model);
///
/// assert_eq!(completer.suggest("server.").unwrap(), ["bind-address", "port"]);
/// assert!(completer.suggest("server.port").unwrap().is_empty());
/// assert!(completer.suggest("elsewhere.port").unwrap().is_empty());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Autocompleter<'a> {
    model: &'a SchemaModel,
}

impl<'a> Autocompleter<'a> {
    /// Creates an autocompleter over a schema model.
    #[must_use]
    pub fn new(model: &'a SchemaModel) -> Self {
        Self { model }
    }

    /// Suggests the valid next-level field names for a raw path.
    ///
    /// The walk consumes one token per hop exactly like classification
    /// does: map keys and list indices pass unvalidated, bean fields are
    /// looked up after the kebab-to-camel conversion. A failed lookup, a
    /// token at a leaf, or an opaque field ends the walk with no
    /// candidates, mirroring the resolver's verdict for the same path.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPath`](crate::Error::InvalidPath) if the
    /// path cannot be tokenized (unmatched `[`).
    pub fn suggest(&self, path: &str) -> Result<Vec<String>> {
        if !PathResolver::new(self.model).is_in_namespace(path) {
            return Ok(Vec::new());
        }
        let tokens = tokenize(path)?;
        let mut node = self.model.root();
        for token in &tokens[1..] {
            node = match self.model.node(node) {
                // Key/index tokens are consumed, never checked.
                SchemaNode::Map { value } => *value,
                SchemaNode::List { element } => *element,
                SchemaNode::Bean(bean) => {
                    let field_name = kebab_to_camel(token.text());
                    match bean.field(&field_name).and_then(|f| f.node()) {
                        Some(child) => child,
                        None => return Ok(Vec::new()),
                    }
                }
                SchemaNode::Terminal => return Ok(Vec::new()),
            };
        }
        Ok(self.candidates(node))
    }

    /// Field names of a bean node, kebab-cased, in declaration order.
    /// Anything that is not a bean has nothing further to suggest.
    fn candidates(&self, node: NodeId) -> Vec<String> {
        match self.model.node(node) {
            SchemaNode::Bean(bean) => bean
                .fields()
                .iter()
                .map(|field| camel_to_kebab(field.name()))
                .collect(),
            _ => Vec::new(),
        }
    }
}
