//! Node-type categories
//!
//! Category patterns are tried in order and the first match wins. The
//! alternations are written so that no operator name in the default lists
//! matches two categories.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::shared::models::NodeType;

/// One node-type category and its name pattern
#[derive(Debug, Clone)]
pub struct CategoryPattern {
    pub node_type: NodeType,
    pub pattern: String,
    pub regex: Option<Regex>,
}

impl CategoryPattern {
    pub fn new(node_type: NodeType, pattern: &str) -> Self {
        let regex = Regex::new(pattern).ok();
        if regex.is_none() {
            tracing::warn!(pattern, "invalid category pattern; falling back to substring match");
        }
        CategoryPattern {
            node_type,
            pattern: pattern.to_string(),
            regex,
        }
    }

    pub fn matches(&self, name: &str) -> bool {
        if let Some(ref re) = self.regex {
            re.is_match(name)
        } else {
            name.contains(&self.pattern)
        }
    }
}

static DEFAULT_PATTERNS: Lazy<Vec<CategoryPattern>> = Lazy::new(|| {
    vec![
        CategoryPattern::new(NodeType::Source, r"^(source|spin)(_\w+)?$"),
        CategoryPattern::new(
            NodeType::Sink,
            r"^(for_each|dest_sink|dest_\w+|assert(_\w+)?|complete(_next_tick)?)$",
        ),
        CategoryPattern::new(
            NodeType::Join,
            r"(^|_)(join|cross_product|cross_singleton|difference|zip)($|_)",
        ),
        CategoryPattern::new(
            NodeType::Network,
            r"(^|_)(bincode|bytes)($|_)|^(broadcast|demux|round_robin|decouple|send|recv)(_\w+)?$",
        ),
        CategoryPattern::new(
            NodeType::Aggregation,
            r"^(fold|reduce|scan|count|sum|max|min|unique|sort|first|last|collect|key_count)(_\w+)?$",
        ),
        CategoryPattern::new(NodeType::Tee, r"^(tee|clone)$"),
    ]
});

/// Category patterns in match order (Source, Sink, Join, Network,
/// Aggregation, Tee); anything else is a Transform
pub fn default_category_patterns() -> &'static [CategoryPattern] {
    &DEFAULT_PATTERNS
}
