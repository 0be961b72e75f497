//! Core types for the schema model.
//!
//! The schema model is an immutable, arena-backed description of a
//! configuration type graph. Nodes live in a flat vector owned by
//! [`SchemaModel`] and reference each other by [`NodeId`], which lets
//! recursive type graphs share nodes instead of expanding forever.

use crate::schema::build::{PropertySchema, SchemaBuilder};

/// Index of a node inside a [`SchemaModel`] arena.
///
/// Ids are only meaningful for the model that produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

/// One node of the configuration schema tree.
#[derive(Debug)]
pub enum SchemaNode {
    /// A structured record with a fixed, declaration-ordered set of named
    /// fields.
    Bean(BeanNode),
    /// A map container; keys are free-form and never validated, only the
    /// value type is described.
    Map {
        /// Schema node of the map's value type.
        value: NodeId,
    },
    /// A list container; indices are free-form and never validated, only
    /// the element type is described.
    List {
        /// Schema node of the list's element type.
        element: NodeId,
    },
    /// A leaf: scalar, enumeration, or designated opaque value type. Any
    /// path continuing past a terminal addresses unconstrained,
    /// author-defined content.
    Terminal,
}

/// A bean node: declaration-ordered named fields.
#[derive(Debug)]
pub struct BeanNode {
    fields: Vec<FieldSpec>,
}

impl BeanNode {
    pub(crate) fn new(fields: Vec<FieldSpec>) -> Self {
        Self { fields }
    }

    /// All fields in declaration order.
    #[must_use]
    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// Looks up a field by its camelCase name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name() == name)
    }
}

/// A single bean field: a camelCase name plus the node of its declared type.
///
/// An *opaque* field is declared but has no introspectable shape; it is
/// treated as a terminal for resolution purposes regardless of its declared
/// structural type.
#[derive(Debug)]
pub struct FieldSpec {
    name: String,
    node: Option<NodeId>,
}

impl FieldSpec {
    pub(crate) fn readable(name: &str, node: NodeId) -> Self {
        Self {
            name: name.to_string(),
            node: Some(node),
        }
    }

    pub(crate) fn opaque(name: &str) -> Self {
        Self {
            name: name.to_string(),
            node: None,
        }
    }

    /// The field name, in camelCase.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The schema node of the field's type, or `None` for an opaque field.
    #[must_use]
    pub fn node(&self) -> Option<NodeId> {
        self.node
    }

    /// Whether this field has no introspectable shape.
    #[must_use]
    pub fn is_opaque(&self) -> bool {
        self.node.is_none()
    }
}

/// The immutable schema model a resolver walks.
///
/// Built exactly once from the root configuration type and shared read-only
/// by all resolution calls; nothing is ever mutated during a walk, so a
/// `&SchemaModel` can be used from any number of threads without
/// coordination.
///
/// # Examples
///
/// ```
/// use confpath::{PropertySchema, SchemaBuilder, SchemaModel, SchemaNode};
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
/// assert_eq!(model.namespace(), "server");
/// ```
#[derive(Debug)]
pub struct SchemaModel {
    nodes: Vec<SchemaNode>,
    root: NodeId,
    namespace: String,
}

impl SchemaModel {
    /// Builds the schema model for a root configuration type.
    ///
    /// `namespace` is the fixed leading identifier all valid paths must
    /// start with. The type graph is introspected exactly once; recursive
    /// types terminate because every concrete type maps to one shared node.
    #[must_use]
    pub fn build<T: PropertySchema>(namespace: impl Into<String>) -> Self {
        let mut builder = SchemaBuilder::new();
        let root = builder.resolve::<T>();
        Self {
            nodes: builder.into_nodes(),
            root,
            namespace: namespace.into(),
        }
    }

    /// The root node, corresponding to the configuration root type.
    #[must_use]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// The namespace prefix all valid paths must start with.
    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Returns the node behind an id.
    ///
    /// # Panics
    ///
    /// Panics if `id` did not come from this model.
    #[must_use]
    pub fn node(&self, id: NodeId) -> &SchemaNode {
        &self.nodes[id.0]
    }

    /// Whether a node is a terminal (leaf) node.
    ///
    /// This is the single terminal predicate of the model; call sites never
    /// re-derive terminality from concrete types.
    #[must_use]
    pub fn is_terminal(&self, id: NodeId) -> bool {
        matches!(self.node(id), SchemaNode::Terminal)
    }

    /// Number of nodes in the model arena.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Iterates over the ids of every node in the model.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> {
        (0..self.nodes.len()).map(NodeId)
    }
}
