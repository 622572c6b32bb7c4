//! Configuration validation
//!
//! Every configuration section implements `Validatable`; `PipelineConfig`
//! validates its sections in order and stops at the first failure.

use super::error::{ConfigError, ConfigResult};
use super::pipeline_config::{CacheConfig, GraphConfig, PipelineConfig};

// ═══════════════════════════════════════════════════════════════════════════
// Validatable Trait
// ═══════════════════════════════════════════════════════════════════════════

/// Trait for validatable configuration objects
///
/// # Example
/// ```rust,ignore
/// use flowgraph_ir::config::{GraphConfig, Validatable};
///
/// let graph = GraphConfig::default();
/// graph.validate()?;
/// ```
pub trait Validatable {
    /// Returns `Ok(())` if valid, `Err(ConfigError)` with details if invalid.
    fn validate(&self) -> ConfigResult<()>;

    /// Configuration name for error messages
    fn config_name(&self) -> &'static str {
        "Config"
    }
}

/// Extension trait for validating optional or repeated sections
pub trait ValidatableCollection {
    fn validate_all(&self) -> ConfigResult<()>;
}

impl<T: Validatable> ValidatableCollection for Vec<T> {
    fn validate_all(&self) -> ConfigResult<()> {
        for config in self {
            config.validate()?;
        }
        Ok(())
    }
}

impl<T: Validatable> ValidatableCollection for Option<T> {
    fn validate_all(&self) -> ConfigResult<()> {
        if let Some(config) = self {
            config.validate()?;
        }
        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Section rules
// ═══════════════════════════════════════════════════════════════════════════

pub const MIN_LABEL_LENGTH: usize = 8;
pub const MAX_LABEL_LENGTH: usize = 1000;
pub const MIN_CACHE_CAPACITY: usize = 1;
pub const MAX_CACHE_CAPACITY: usize = 100_000;

impl Validatable for GraphConfig {
    fn validate(&self) -> ConfigResult<()> {
        if !(MIN_LABEL_LENGTH..=MAX_LABEL_LENGTH).contains(&self.max_label_length) {
            return Err(ConfigError::range_with_hint(
                "graph.max_label_length",
                self.max_label_length,
                MIN_LABEL_LENGTH,
                MAX_LABEL_LENGTH,
                "Labels shorter than 8 characters cannot hold an operator name and '...'",
            ));
        }

        if self.type_match_line_weight == 0 {
            return Err(ConfigError::range_with_hint(
                "graph.type_match_line_weight",
                self.type_match_line_weight,
                1,
                u32::MAX,
                "A zero line weight would match annotations from any line",
            ));
        }

        if self.type_match_max_distance == 0 {
            return Err(ConfigError::Validation(
                "graph.type_match_max_distance must be positive; use exact positions only by setting it to 1".to_string(),
            ));
        }

        Ok(())
    }

    fn config_name(&self) -> &'static str {
        "GraphConfig"
    }
}

impl Validatable for CacheConfig {
    fn validate(&self) -> ConfigResult<()> {
        if !(MIN_CACHE_CAPACITY..=MAX_CACHE_CAPACITY).contains(&self.capacity) {
            return Err(ConfigError::range_with_hint(
                "cache.capacity",
                self.capacity,
                MIN_CACHE_CAPACITY,
                MAX_CACHE_CAPACITY,
                "The extraction cache must hold at least one document",
            ));
        }
        Ok(())
    }

    fn config_name(&self) -> &'static str {
        "CacheConfig"
    }
}

impl Validatable for PipelineConfig {
    fn validate(&self) -> ConfigResult<()> {
        self.operators.validate_all()?;
        self.graph.validate()?;
        self.cache.validate()?;
        Ok(())
    }

    fn config_name(&self) -> &'static str {
        "PipelineConfig"
    }
}
