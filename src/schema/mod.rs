//! The schema model: an immutable description of the configuration type graph.
//!
//! The model is built exactly once from the root configuration type (see
//! [`SchemaModel::build`]) and then shared read-only by every resolution
//! call. Four node kinds cover the whole graph:
//!
//! - **Bean**: a record with declaration-ordered, camelCase-named fields.
//! - **Map**: one value type, reached through an unvalidated key.
//! - **List**: one element type, reached through an unvalidated index.
//! - **Terminal**: a leaf — scalar, enumeration, or opaque value type.
//!
//! A bean field may additionally be *opaque* (declared but without an
//! introspectable shape); resolution treats it as a terminal.

pub mod build;
pub mod node;

// Re-export key types
pub use build::{BeanBuilder, PropertySchema, SchemaBuilder};
pub use node::{BeanNode, FieldSpec, NodeId, SchemaModel, SchemaNode};
