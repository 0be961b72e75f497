//! Validation of loaded configuration keys against the schema.
//!
//! Every key a property source enumerates is resolved against the schema
//! model; keys inside the namespace that do not correspond to a reachable
//! location are reported as unmapped. A typo in a loaded configuration file
//! shows up here as one warning line per offending key.

use crate::logging::Logger;
use crate::resolver::{Classification, PathResolver};
use crate::schema::SchemaModel;
use crate::validation::sources::PropertySource;

/// Validates enumerated configuration keys against a schema model.
///
/// Unmapped keys are an expected, non-fatal outcome: enumeration always
/// continues past an offending or even syntactically broken key.
///
/// # Examples
///
/// ```
/// use confpath::{KeyValidator, PropertySchema, SchemaBuilder, SchemaModel,
///     SchemaNode, YamlPropertySource};
///
/// struct ServerConfig;
///
/// impl PropertySchema for ServerConfig {
///     fn describe(builder: &mut SchemaBuilder) -> SchemaNode {
///         builder.bean().field::<String>("host").finish()
///     }
/// }
///
/// let model = SchemaModel::build::<ServerConfig>("server");
/// let source = YamlPropertySource::from_str(
///     "demo",
///     "server:\n  host: localhost\n  hots: typo\n",
/// )
/// .unwrap();
///
/// let validator = KeyValidator::new(&model);
/// assert_eq!(validator.find_unmapped(&source), ["server.hots"]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct KeyValidator<'a> {
    resolver: PathResolver<'a>,
}

impl<'a> KeyValidator<'a> {
    /// Creates a validator over a schema model.
    #[must_use]
    pub fn new(model: &'a SchemaModel) -> Self {
        Self {
            resolver: PathResolver::new(model),
        }
    }

    /// Returns the keys of a source that cannot be resolved to a property.
    ///
    /// Keys outside the namespace are skipped entirely; keys inside it are
    /// unmapped when classification is [`Classification::NotExists`] or
    /// when the key cannot even be tokenized. Order follows the source's
    /// enumeration order.
    #[must_use]
    pub fn find_unmapped(&self, source: &dyn PropertySource) -> Vec<String> {
        let namespace = self.resolver.model().namespace();
        let mut unmapped = Vec::new();
        for key in source.property_names() {
            if !self.resolver.is_in_namespace(&key) {
                log::debug!("skipping key outside the '{namespace}' namespace: {key}");
                continue;
            }
            match self.resolver.resolve(&key) {
                Ok(Classification::NotExists) => unmapped.push(key),
                Ok(_) => {}
                // A key that does not even tokenize cannot address a real
                // location; report it and keep enumerating.
                Err(err) => {
                    log::debug!("key '{key}' is not a well-formed property path: {err}");
                    unmapped.push(key);
                }
            }
        }
        unmapped
    }

    /// Scans all sources, logging one warning line per unmapped key.
    ///
    /// Returns the accumulated unmapped keys across every source, in scan
    /// order.
    pub fn report_unmapped(
        &self,
        sources: &[&dyn PropertySource],
        logger: &Logger,
    ) -> Vec<String> {
        let mut all = Vec::new();
        for source in sources {
            for key in self.find_unmapped(*source) {
                logger.warn(&format!(
                    "{}: expression could not be resolved to a property: {key}",
                    source.name()
                ));
                all.push(key);
            }
        }
        all
    }
}
