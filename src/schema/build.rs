//! One-shot construction of the schema model.
//!
//! Schema construction is the only introspection pass in the crate: each
//! configuration type describes its own shape through the [`PropertySchema`]
//! trait, and [`SchemaBuilder`] memoizes one node per concrete type so that
//! shared and recursive types resolve to shared nodes. After
//! [`SchemaModel::build`](crate::SchemaModel::build) returns, resolution is
//! pure tree traversal with no further type inspection.

use std::any::TypeId;
use std::collections::HashMap;
use std::time::Duration;

use crate::schema::node::{BeanNode, FieldSpec, NodeId, SchemaNode};

/// Structural description of a configuration type.
///
/// Implementations state what kind of schema node the type is. Beans list
/// their fields in declaration order through [`SchemaBuilder::bean`];
/// enumerations and other leaf types return [`SchemaNode::Terminal`].
/// Containers are covered by the blanket impls for `Vec`, `HashMap` and
/// `BTreeMap`.
///
/// # Examples
///
/// ```
/// use confpath::{PropertySchema, SchemaBuilder, SchemaNode};
/// use std::collections::HashMap;
///
/// struct EndpointConfig;
///
/// impl PropertySchema for EndpointConfig {
///     fn describe(builder: &mut SchemaBuilder) -> SchemaNode {
///         builder
///             .bean()
///             .field::<String>("url")
///             .field::<HashMap<String, String>>("headers")
///             .opaque("internalState")
///             .finish()
///     }
/// }
/// ```
pub trait PropertySchema: 'static {
    /// Describes this type's schema node, resolving child types through the
    /// builder.
    fn describe(builder: &mut SchemaBuilder) -> SchemaNode;
}

/// Builder that assembles the node arena for a [`SchemaModel`](crate::SchemaModel).
///
/// Handed to [`PropertySchema::describe`] implementations; not constructed
/// directly.
#[derive(Debug, Default)]
pub struct SchemaBuilder {
    nodes: Vec<SchemaNode>,
    visited: HashMap<TypeId, NodeId>,
}

impl SchemaBuilder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Resolves the schema node for a type, building it on first use.
    ///
    /// The node slot is reserved before the type is described, so cyclic
    /// type graphs terminate: a type that (transitively) contains itself
    /// receives the id reserved for it instead of re-expanding.
    pub fn resolve<T: PropertySchema>(&mut self) -> NodeId {
        let key = TypeId::of::<T>();
        if let Some(&id) = self.visited.get(&key) {
            return id;
        }
        let id = NodeId(self.nodes.len());
        self.nodes.push(SchemaNode::Terminal);
        self.visited.insert(key, id);
        let node = T::describe(self);
        self.nodes[id.0] = node;
        id
    }

    /// Starts describing a bean node.
    #[must_use]
    pub fn bean(&mut self) -> BeanBuilder<'_> {
        BeanBuilder {
            schema: self,
            fields: Vec::new(),
        }
    }

    pub(crate) fn into_nodes(self) -> Vec<SchemaNode> {
        self.nodes
    }
}

/// Fluent builder for the fields of a bean node.
///
/// Field names are given in camelCase, the convention of the schema side of
/// the case bridge; paths address them in kebab-case. Fields keep their
/// declaration order, which is also the order autocomplete candidates are
/// reported in.
#[derive(Debug)]
pub struct BeanBuilder<'a> {
    schema: &'a mut SchemaBuilder,
    fields: Vec<FieldSpec>,
}

impl BeanBuilder<'_> {
    /// Adds a readable field of type `T`.
    #[must_use]
    pub fn field<T: PropertySchema>(mut self, name: &str) -> Self {
        let node = self.schema.resolve::<T>();
        self.fields.push(FieldSpec::readable(name, node));
        self
    }

    /// Adds a declared field without an introspectable shape.
    ///
    /// Such a field ends structural validation: any path reaching it is
    /// accepted as a path end no matter what follows.
    #[must_use]
    pub fn opaque(mut self, name: &str) -> Self {
        self.fields.push(FieldSpec::opaque(name));
        self
    }

    /// Finishes the bean node.
    #[must_use]
    pub fn finish(self) -> SchemaNode {
        SchemaNode::Bean(BeanNode::new(self.fields))
    }
}

macro_rules! terminal_schema {
    ($($ty:ty),* $(,)?) => {
        $(
            impl PropertySchema for $ty {
                fn describe(_builder: &mut SchemaBuilder) -> SchemaNode {
                    SchemaNode::Terminal
                }
            }
        )*
    };
}

// The terminal set: scalars plus the designated opaque value type.
terminal_schema!(
    String,
    bool,
    char,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    f32,
    f64,
    Duration,
);

impl<T: PropertySchema> PropertySchema for Vec<T> {
    fn describe(builder: &mut SchemaBuilder) -> SchemaNode {
        SchemaNode::List {
            element: builder.resolve::<T>(),
        }
    }
}

impl<V: PropertySchema, S: 'static> PropertySchema for HashMap<String, V, S> {
    fn describe(builder: &mut SchemaBuilder) -> SchemaNode {
        SchemaNode::Map {
            value: builder.resolve::<V>(),
        }
    }
}

impl<V: PropertySchema> PropertySchema for std::collections::BTreeMap<String, V> {
    fn describe(builder: &mut SchemaBuilder) -> SchemaNode {
        SchemaNode::Map {
            value: builder.resolve::<V>(),
        }
    }
}
