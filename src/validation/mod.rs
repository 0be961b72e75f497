//! Validation of loaded configuration keys against the schema model.
//!
//! Configuration files are merged from several sources (files, overrides,
//! environment-derived documents); a mistyped key silently falls through
//! the binder instead of failing. This module closes that gap: property
//! sources enumerate every key actually present in the loaded
//! configuration, and the key validator resolves each one against the
//! schema, surfacing every key that does not correspond to a real,
//! reachable location.
//!
//! # Examples
//!
//! ```
//! use confpath::{KeyValidator, Logger, PropertySchema, PropertySource,
//!     SchemaBuilder, SchemaModel, SchemaNode, YamlPropertySource};
//!
//! struct ServerConfig;
//!
//! impl PropertySchema for ServerConfig {
//!     fn describe(builder: &mut SchemaBuilder) -> SchemaNode {
//!         builder
//!             .bean()
//!             .field::<String>("host")
//!             .field::<u16>("port")
//!             .finish()
//!     }
//! }
//!
//! let model = SchemaModel::build::<ServerConfig>("server");
//! let source = YamlPropertySource::from_str(
//!     "overrides",
//!     "server:\n  host: localhost\n  prot: 8080\n",
//! )
//! .unwrap();
//!
//! let validator = KeyValidator::new(&model);
//! let unmapped = validator.report_unmapped(
//!     &[&source as &dyn PropertySource],
//!     &Logger::default(),
//! );
//! assert_eq!(unmapped, ["server.prot"]);
//! ```

pub mod sources;
pub mod validator;

// Re-export key types
pub use sources::{JsonPropertySource, PropertySource, YamlPropertySource};
pub use validator::KeyValidator;
