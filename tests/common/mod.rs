//! Common test fixtures for integration tests.
//!
//! Defines the example schema the integration suites resolve against: an
//! observability agent configuration with nested beans, bean-valued and
//! terminal-valued maps, lists of beans, enumerations, durations, and one
//! opaque field. The namespace prefix is `agent`.

use std::collections::HashMap;
use std::time::Duration;

use confpath::{PropertySchema, SchemaBuilder, SchemaModel, SchemaNode};

/// Root of the example schema.
pub struct AgentConfig;

impl PropertySchema for AgentConfig {
    fn describe(builder: &mut SchemaBuilder) -> SchemaNode {
        builder
            .bean()
            .field::<ConfigSettings>("config")
            .field::<ExporterSettings>("exporters")
            .field::<InstrumentationSettings>("instrumentation")
            .field::<LoggingSettings>("logging")
            .field::<MetricsSettings>("metrics")
            .field::<String>("serviceName")
            .field::<HashMap<String, String>>("tags")
            .field::<i64>("threadPoolSize")
            .field::<TracingSettings>("tracing")
            .finish()
    }
}

pub struct ConfigSettings;

impl PropertySchema for ConfigSettings {
    fn describe(builder: &mut SchemaBuilder) -> SchemaNode {
        builder.bean().field::<FileBasedSettings>("fileBased").finish()
    }
}

pub struct FileBasedSettings;

impl PropertySchema for FileBasedSettings {
    fn describe(builder: &mut SchemaBuilder) -> SchemaNode {
        builder
            .bean()
            .field::<bool>("enabled")
            .field::<String>("path")
            .field::<bool>("watch")
            .finish()
    }
}

pub struct ExporterSettings;

impl PropertySchema for ExporterSettings {
    fn describe(builder: &mut SchemaBuilder) -> SchemaNode {
        builder
            .bean()
            .field::<MetricsExporterSettings>("metrics")
            .finish()
    }
}

pub struct MetricsExporterSettings;

impl PropertySchema for MetricsExporterSettings {
    fn describe(builder: &mut SchemaBuilder) -> SchemaNode {
        builder
            .bean()
            .field::<PrometheusExporterSettings>("prometheus")
            .finish()
    }
}

pub struct PrometheusExporterSettings;

impl PropertySchema for PrometheusExporterSettings {
    fn describe(builder: &mut SchemaBuilder) -> SchemaNode {
        builder
            .bean()
            .field::<bool>("enabled")
            .field::<String>("host")
            .field::<u16>("port")
            .finish()
    }
}

pub struct InstrumentationSettings;

impl PropertySchema for InstrumentationSettings {
    fn describe(builder: &mut SchemaBuilder) -> SchemaNode {
        builder
            .bean()
            .field::<HashMap<String, ActionSettings>>("actions")
            .field::<HashMap<String, DataSettings>>("data")
            .field::<Vec<String>>("ignoredPackages")
            .field::<HashMap<String, RuleSettings>>("rules")
            .field::<HashMap<String, ScopeSettings>>("scopes")
            .field::<SpecialSettings>("special")
            .finish()
    }
}

pub struct ActionSettings;

impl PropertySchema for ActionSettings {
    fn describe(builder: &mut SchemaBuilder) -> SchemaNode {
        builder
            .bean()
            .field::<Vec<String>>("imports")
            .field::<HashMap<String, String>>("input")
            .field::<String>("value")
            .field::<bool>("isVoid")
            .finish()
    }
}

pub struct DataSettings;

impl PropertySchema for DataSettings {
    fn describe(builder: &mut SchemaBuilder) -> SchemaNode {
        builder
            .bean()
            .field::<PropagationMode>("downPropagation")
            // Declared but not readable; resolution treats it as a leaf.
            .opaque("isTag")
            .field::<PropagationMode>("upPropagation")
            .finish()
    }
}

pub struct RuleSettings;

impl PropertySchema for RuleSettings {
    fn describe(builder: &mut SchemaBuilder) -> SchemaNode {
        builder
            .bean()
            .field::<bool>("enabled")
            .field::<HashMap<String, bool>>("include")
            .field::<HashMap<String, bool>>("scopes")
            .finish()
    }
}

pub struct ScopeSettings;

impl PropertySchema for ScopeSettings {
    fn describe(builder: &mut SchemaBuilder) -> SchemaNode {
        builder
            .bean()
            .field::<AdvancedScopeSettings>("advanced")
            .field::<Vec<MatcherSettings>>("interfaces")
            .field::<Vec<MatcherSettings>>("methods")
            .field::<MatcherSettings>("superclass")
            .field::<MatcherSettings>("type")
            .finish()
    }
}

pub struct AdvancedScopeSettings;

impl PropertySchema for AdvancedScopeSettings {
    fn describe(builder: &mut SchemaBuilder) -> SchemaNode {
        builder
            .bean()
            .field::<bool>("instrumentOnlyInheritedMethods")
            .finish()
    }
}

pub struct MatcherSettings;

impl PropertySchema for MatcherSettings {
    fn describe(builder: &mut SchemaBuilder) -> SchemaNode {
        builder
            .bean()
            .field::<MatcherMode>("matcherMode")
            .field::<String>("name")
            .finish()
    }
}

pub struct SpecialSettings;

impl PropertySchema for SpecialSettings {
    fn describe(builder: &mut SchemaBuilder) -> SchemaNode {
        builder
            .bean()
            .field::<bool>("executorContextPropagation")
            .field::<bool>("scheduledExecutorContextPropagation")
            .finish()
    }
}

pub struct LoggingSettings;

impl PropertySchema for LoggingSettings {
    fn describe(builder: &mut SchemaBuilder) -> SchemaNode {
        builder
            .bean()
            .field::<bool>("debug")
            .field::<bool>("trace")
            .finish()
    }
}

pub struct MetricsSettings;

impl PropertySchema for MetricsSettings {
    fn describe(builder: &mut SchemaBuilder) -> SchemaNode {
        builder
            .bean()
            // Metric definitions are free-form expressions: the value type
            // is terminal, so anything beneath a definition key passes.
            .field::<HashMap<String, String>>("definitions")
            .field::<bool>("enabled")
            .field::<Duration>("frequency")
            .finish()
    }
}

pub struct TracingSettings;

impl PropertySchema for TracingSettings {
    fn describe(builder: &mut SchemaBuilder) -> SchemaNode {
        builder
            .bean()
            .field::<bool>("enabled")
            .field::<Duration>("exportInterval")
            .field::<f64>("sampleRate")
            .finish()
    }
}

/// Context propagation direction, a terminal enumeration.
#[allow(dead_code)]
pub enum PropagationMode {
    None,
    JvmLocal,
    Global,
}

impl PropertySchema for PropagationMode {
    fn describe(_builder: &mut SchemaBuilder) -> SchemaNode {
        SchemaNode::Terminal
    }
}

/// Matching strategy of a scope matcher, a terminal enumeration.
#[allow(dead_code)]
pub enum MatcherMode {
    Equals,
    StartsWith,
    EndsWith,
    Contains,
    Matches,
}

impl PropertySchema for MatcherMode {
    fn describe(_builder: &mut SchemaBuilder) -> SchemaNode {
        SchemaNode::Terminal
    }
}

/// Builds the shared example schema model with the `agent` namespace.
pub fn agent_model() -> SchemaModel {
    SchemaModel::build::<AgentConfig>("agent")
}
