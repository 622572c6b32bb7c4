//! Operator classification lists
//!
//! Four name lists drive the Operator Classifier. A host may supply its own
//! lists; when it does not, the built-in defaults below are used. The
//! defaults alone must classify every operator of the Hydro API correctly.

use serde::{Deserialize, Serialize};

use super::error::{ConfigError, ConfigResult};
use super::validation::Validatable;

/// Operators that move data between locations
pub const DEFAULT_NETWORKING_OPERATORS: &[&str] = &[
    "send_bincode",
    "send_bincode_external",
    "send_bytes",
    "send_bytes_external",
    "send_bincode_anonymous",
    "send_partitioned",
    "broadcast_bincode",
    "broadcast_bincode_anonymous",
    "broadcast_bytes",
    "demux_bincode",
    "demux_bytes",
    "round_robin_bincode",
    "round_robin_bytes",
    "decouple_process",
    "decouple_cluster",
    "source_external_bincode",
    "source_external_bytes",
];

/// Operators that transform, combine or re-scope collections
pub const DEFAULT_CORE_DATAFLOW_OPERATORS: &[&str] = &[
    // sources
    "source_iter",
    "source_stream",
    "source_interval",
    "source_cluster_members",
    "spin",
    "spin_batch",
    // element-wise
    "map",
    "flat_map",
    "flat_map_ordered",
    "flat_map_unordered",
    "flatten_ordered",
    "flatten_unordered",
    "filter",
    "filter_map",
    "filter_if_some",
    "filter_if_none",
    "inspect",
    "enumerate",
    "cloned",
    "clone",
    "tee",
    // keyed
    "into_keyed",
    "keys",
    "values",
    "entries",
    "key_count",
    "get",
    // aggregation
    "fold",
    "fold_commutative",
    "fold_keyed",
    "fold_keyed_commutative",
    "reduce",
    "reduce_commutative",
    "reduce_keyed",
    "reduce_keyed_commutative",
    "reduce_idempotent",
    "reduce_watermark",
    "scan",
    "count",
    "max",
    "min",
    "max_by_key",
    "first",
    "last",
    "unique",
    "sort",
    "collect_vec",
    // joins & merges
    "join",
    "cross_product",
    "cross_singleton",
    "anti_join",
    "difference",
    "zip",
    "union",
    "chain",
    "interleave",
    // temporal scoping
    "batch",
    "snapshot",
    "tick_batch",
    "timestamped",
    "all_ticks",
    "all_ticks_atomic",
    "latest",
    "latest_tick",
    "persist",
    "defer_tick",
    "continue_if",
    "continue_unless",
    "into_stream",
    "into_singleton",
    "assume_ordering",
    "assume_retries",
    "sample_every",
    "timeout",
    "atomic",
    "end_atomic",
    "resolve_futures",
    "resolve_futures_ordered",
    "complete",
    "complete_next_tick",
];

/// Terminal operators
pub const DEFAULT_SINK_OPERATORS: &[&str] = &[
    "for_each",
    "dest_sink",
    "dest_file",
    "assert",
    "assert_eq",
    "complete",
    "complete_next_tick",
];

/// Type prefixes identifying live collections in return types
pub const DEFAULT_COLLECTION_TYPES: &[&str] = &[
    "Stream<",
    "KeyedStream<",
    "Singleton<",
    "Optional<",
    "KeyedSingleton<",
];

/// Operator name and type lists consumed by the classifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OperatorConfig {
    pub networking_operators: Vec<String>,
    pub core_dataflow_operators: Vec<String>,
    pub sink_operators: Vec<String>,
    pub collection_types: Vec<String>,
}

fn owned(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

impl Default for OperatorConfig {
    fn default() -> Self {
        Self {
            networking_operators: owned(DEFAULT_NETWORKING_OPERATORS),
            core_dataflow_operators: owned(DEFAULT_CORE_DATAFLOW_OPERATORS),
            sink_operators: owned(DEFAULT_SINK_OPERATORS),
            collection_types: owned(DEFAULT_COLLECTION_TYPES),
        }
    }
}

impl OperatorConfig {
    /// Host-supplied lists if present, otherwise the built-in defaults
    pub fn resolve(explicit: Option<OperatorConfig>) -> OperatorConfig {
        match explicit {
            Some(config) => config,
            None => {
                tracing::debug!("no operator configuration supplied; using built-in defaults");
                OperatorConfig::default()
            }
        }
    }

    pub fn with_networking_operator(mut self, name: impl Into<String>) -> Self {
        self.networking_operators.push(name.into());
        self
    }

    pub fn with_core_operator(mut self, name: impl Into<String>) -> Self {
        self.core_dataflow_operators.push(name.into());
        self
    }

    pub fn with_sink_operator(mut self, name: impl Into<String>) -> Self {
        self.sink_operators.push(name.into());
        self
    }
}

impl Validatable for OperatorConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.collection_types.is_empty() {
            return Err(ConfigError::Validation(
                "collection_types must list at least one collection type prefix".to_string(),
            ));
        }

        let lists = [
            ("networking_operators", &self.networking_operators),
            ("core_dataflow_operators", &self.core_dataflow_operators),
            ("sink_operators", &self.sink_operators),
            ("collection_types", &self.collection_types),
        ];
        for (field, names) in lists {
            if let Some(blank) = names.iter().position(|n| n.trim().is_empty()) {
                return Err(ConfigError::Validation(format!(
                    "{}[{}] is empty",
                    field, blank
                )));
            }
        }

        Ok(())
    }

    fn config_name(&self) -> &'static str {
        "OperatorConfig"
    }
}
