/*
 * Operator Classifier
 *
 * Pure lookup over the four operator lists:
 * - is this call a pipeline stage? (name + return type)
 * - which node type does it render as? (ordered category patterns)
 *
 * Networking operators are accepted even when their return type is missing,
 * partial, or looks like a bare location. Under partial type inference their
 * return types often fail to resolve, so the name alone is trusted. This
 * trades some precision for recall.
 */

use ahash::AHashSet;

use crate::config::OperatorConfig;
use crate::features::operator_classifier::domain::default_category_patterns;
use crate::features::type_parsing::{base_type_name, LocationConstructor};
use crate::shared::models::NodeType;

const IMPL_INTO: &str = "impl Into<";

#[derive(Debug, Clone)]
pub struct OperatorClassifier {
    networking: AHashSet<String>,
    core: AHashSet<String>,
    sinks: AHashSet<String>,
    collection_types: Vec<String>,
}

impl OperatorClassifier {
    pub fn new(config: &OperatorConfig) -> Self {
        Self {
            networking: config.networking_operators.iter().cloned().collect(),
            core: config.core_dataflow_operators.iter().cloned().collect(),
            sinks: config.sink_operators.iter().cloned().collect(),
            collection_types: config.collection_types.clone(),
        }
    }

    pub fn is_networking_operator(&self, name: &str) -> bool {
        self.networking.contains(name)
    }

    pub fn is_sink_operator(&self, name: &str) -> bool {
        self.sinks.contains(name)
    }

    /// Member of any operator list
    pub fn is_known_operator(&self, name: &str) -> bool {
        self.networking.contains(name) || self.core.contains(name) || self.sinks.contains(name)
    }

    fn mentions_collection(&self, ty: &str) -> bool {
        self.collection_types.iter().any(|prefix| ty.contains(prefix.as_str()))
    }

    fn is_impl_into_collection(&self, ty: &str) -> bool {
        ty.strip_prefix(IMPL_INTO)
            .map(|inner| {
                let inner = inner.trim_start();
                self.collection_types
                    .iter()
                    .any(|prefix| inner.starts_with(prefix.as_str()))
            })
            .unwrap_or(false)
    }

    /// Whether a call is a pipeline stage, given its return type if known
    pub fn is_valid_dataflow_operator(&self, name: &str, return_type: Option<&str>) -> bool {
        let ty = match return_type.map(str::trim) {
            Some(ty) if !ty.is_empty() => ty,
            _ => return self.is_known_operator(name),
        };

        if self.mentions_collection(ty) {
            return true;
        }
        if ty == "()" && self.is_sink_operator(name) {
            return true;
        }
        if self.is_impl_into_collection(ty) {
            return true;
        }

        if self.is_networking_operator(name) {
            if looks_like_location(ty) {
                tracing::debug!(
                    operator = name,
                    return_type = ty,
                    "accepting networking operator with location-like return type"
                );
            }
            return true;
        }

        tracing::debug!(operator = name, return_type = ty, "not a dataflow operator");
        false
    }

    /// First matching category. Names no pattern matches render as Network
    /// when configured as networking operators, otherwise Transform.
    pub fn infer_node_type(&self, name: &str) -> NodeType {
        default_category_patterns()
            .iter()
            .find(|category| category.matches(name))
            .map(|category| category.node_type)
            .unwrap_or_else(|| {
                if self.is_networking_operator(name) {
                    NodeType::Network
                } else {
                    NodeType::Transform
                }
            })
    }
}

impl Default for OperatorClassifier {
    fn default() -> Self {
        Self::new(&OperatorConfig::default())
    }
}

fn looks_like_location(ty: &str) -> bool {
    let mut base = base_type_name(ty);
    let mut rest = ty;
    while base == "Tick" || base == "Atomic" {
        rest = match rest.find('<') {
            Some(i) => &rest[i + 1..],
            None => return false,
        };
        base = base_type_name(rest);
    }
    LocationConstructor::from_name(base).is_some()
}
