#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # confpath
//!
//! A library for resolving, validating, and completing configuration
//! property paths.
//!
//! A deeply nested configuration schema (beans, maps, lists, scalar leaves)
//! is addressed with dotted/bracketed path strings written in kebab-case,
//! e.g. `agent.instrumentation.scopes[jdbc].interfaces[0].matcher-mode`.
//! This crate answers two questions about such a path:
//!
//! - **Validation**: does the path, as a whole, correspond to a real,
//!   reachable location in the schema? ([`PathResolver`] yields a
//!   tri-state [`Classification`].)
//! - **Autocompletion**: what are the valid next-level segments at the
//!   point where the path stops? ([`Autocompleter`] yields kebab-case
//!   candidates in declaration order.)
//!
//! Both walk the same immutable [`SchemaModel`], built exactly once from
//! the root configuration type via the [`PropertySchema`] trait and shared
//! read-only by any number of concurrent calls.
//!
//! ## Core Types
//!
//! - [`SchemaModel`], [`SchemaNode`], [`PropertySchema`]: the schema tree
//! - [`Token`] and [`tokenize`]: path tokenization
//! - [`PathResolver`] and [`Classification`]: tri-state path validation
//! - [`Autocompleter`]: next-segment suggestions
//! - [`KeyValidator`] and [`PropertySource`]: scanning loaded
//!   configuration keys for typos
//! - [`Error`] and [`Result`]: error handling types
//!
//! ## Examples
//!
//! ```
//! use confpath::{Autocompleter, Classification, PathResolver, PropertySchema,
//!     SchemaBuilder, SchemaModel, SchemaNode};
//! use std::collections::HashMap;
//!
//! struct HttpConfig;
//!
//! impl PropertySchema for HttpConfig {
//!     fn describe(builder: &mut SchemaBuilder) -> SchemaNode {
//!         builder
//!             .bean()
//!             .field::<String>("bindAddress")
//!             .field::<u16>("port")
//!             .finish()
//!     }
//! }
//!
//! struct AppConfig;
//!
//! impl PropertySchema for AppConfig {
//!     fn describe(builder: &mut SchemaBuilder) -> SchemaNode {
//!         builder
//!             .bean()
//!             .field::<HttpConfig>("http")
//!             .field::<HashMap<String, String>>("tags")
//!             .finish()
//!     }
//! }
//!
//! let model = SchemaModel::build::<AppConfig>("app");
//!
//! let resolver = PathResolver::new(&model);
//! assert_eq!(resolver.resolve("app.http.bind-address").unwrap(), Classification::PathEnd);
//! assert_eq!(resolver.resolve("app.http").unwrap(), Classification::NonPathEnd);
//! assert_eq!(resolver.resolve("app.httpp").unwrap(), Classification::NotExists);
//!
//! let completer = Autocompleter::new(&model);
//! assert_eq!(completer.suggest("app.http").unwrap(), ["bind-address", "port"]);
//! ```

pub mod autocomplete;
pub mod case;
pub mod error;
pub mod logging;
pub mod path;
pub mod resolver;
pub mod schema;
pub mod validation;

// Re-export key types at crate root for convenience
pub use autocomplete::Autocompleter;
pub use case::{camel_to_kebab, kebab_to_camel};
pub use error::{Error, Result};
pub use logging::{LogLevel, Logger};
pub use path::{tokenize, SegmentKind, Token};
pub use resolver::{Classification, PathResolver};
pub use schema::{
    BeanBuilder, BeanNode, FieldSpec, NodeId, PropertySchema, SchemaBuilder, SchemaModel,
    SchemaNode,
};
pub use validation::{JsonPropertySource, KeyValidator, PropertySource, YamlPropertySource};
