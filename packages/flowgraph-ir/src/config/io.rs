//! Configuration I/O (YAML schema)
//!
//! Defines the on-disk schema. Loading and saving live in pipeline_config.rs.

use super::operator_config::OperatorConfig;
use super::pipeline_config::{CacheConfig, GraphConfig};
use serde::{Deserialize, Serialize};

/// Current schema version
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// YAML Schema v1
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFileV1 {
    /// Schema version (always 1 for v1). Optional so a missing field can be
    /// reported as such instead of as a generic parse error.
    #[serde(default)]
    pub version: Option<u32>,

    /// Operator lists; built-in defaults apply when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operators: Option<OperatorConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub graph: Option<GraphConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache: Option<CacheConfig>,
}
