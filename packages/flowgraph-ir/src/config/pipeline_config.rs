//! Pipeline configuration
//!
//! One value configures a whole analysis: the classifier's operator lists,
//! graph assembly knobs and the extraction cache size. Everything has a
//! default, so `PipelineConfig::default()` is a working configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::{ConfigError, ConfigResult};
use super::io::{ConfigFileV1, CONFIG_SCHEMA_VERSION};
use super::operator_config::OperatorConfig;
use super::validation::Validatable;

// ═══════════════════════════════════════════════════════════════════════════
// Sections
// ═══════════════════════════════════════════════════════════════════════════

/// Graph assembly settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Characters kept in a node's full label before truncation with "..."
    pub max_label_length: usize,

    /// Weight of one line of distance when matching type annotations by
    /// proximity (`|dline| * weight + |dcol|`)
    pub type_match_line_weight: u32,

    /// Proximity matches at or beyond this distance are rejected
    pub type_match_max_distance: u32,

    /// Whether operators after a temporal operator inherit its tick variable
    /// until one whose type sits outside any tick. Off by default: only the
    /// temporal operator itself carries the binding.
    pub propagate_tick_variables: bool,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            max_label_length: 80,
            type_match_line_weight: 100,
            type_match_max_distance: 300,
            propagate_tick_variables: false,
        }
    }
}

/// Extraction cache settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Maximum number of cached analysis results
    pub capacity: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self { capacity: 50 }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// PipelineConfig
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PipelineConfig {
    /// Host-supplied operator lists; `None` means built-in defaults
    pub operators: Option<OperatorConfig>,
    pub graph: GraphConfig,
    pub cache: CacheConfig,
}

impl PipelineConfig {
    pub fn operators(mut self, operators: OperatorConfig) -> Self {
        self.operators = Some(operators);
        self
    }

    pub fn max_label_length(mut self, length: usize) -> Self {
        self.graph.max_label_length = length;
        self
    }

    pub fn type_matching(mut self, line_weight: u32, max_distance: u32) -> Self {
        self.graph.type_match_line_weight = line_weight;
        self.graph.type_match_max_distance = max_distance;
        self
    }

    pub fn propagate_tick_variables(mut self, enabled: bool) -> Self {
        self.graph.propagate_tick_variables = enabled;
        self
    }

    pub fn cache_capacity(mut self, capacity: usize) -> Self {
        self.cache.capacity = capacity;
        self
    }

    /// Operator lists the classifier should use
    pub fn resolved_operators(&self) -> OperatorConfig {
        OperatorConfig::resolve(self.operators.clone())
    }

    /// Validate and return self
    pub fn build(self) -> ConfigResult<Self> {
        self.validate()?;
        Ok(self)
    }

    /// Load from YAML file (v1 schema)
    pub fn from_yaml(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_yaml_str(&content)?;
        tracing::info!(path = %path.display(), "loaded pipeline configuration");
        Ok(config)
    }

    /// Parse YAML text (v1 schema)
    pub fn from_yaml_str(content: &str) -> ConfigResult<Self> {
        let file: ConfigFileV1 = serde_yaml::from_str(content)?;

        let version = file.version.ok_or(ConfigError::MissingVersion)?;
        if version != CONFIG_SCHEMA_VERSION {
            return Err(ConfigError::UnsupportedVersion {
                found: version,
                supported: vec![CONFIG_SCHEMA_VERSION],
            });
        }

        Self {
            operators: file.operators,
            graph: file.graph.unwrap_or_default(),
            cache: file.cache.unwrap_or_default(),
        }
        .build()
    }

    /// Serialize to YAML (v1 schema)
    pub fn to_yaml(&self) -> ConfigResult<String> {
        let file = ConfigFileV1 {
            version: Some(CONFIG_SCHEMA_VERSION),
            operators: self.operators.clone(),
            graph: Some(self.graph.clone()),
            cache: Some(self.cache.clone()),
        };
        Ok(serde_yaml::to_string(&file)?)
    }
}
