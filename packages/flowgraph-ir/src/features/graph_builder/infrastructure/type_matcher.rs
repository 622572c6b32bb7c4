// Type Annotation Matcher
//
// The type oracle reports positions that do not always agree with the
// extractor's (hover points vs. method-name starts, multi-line calls). Exact
// `(line, column, name)` hits win; otherwise the closest annotation for the
// same operator name is used when it lies within the distance bound.

use ahash::AHashMap;

use crate::config::GraphConfig;
use crate::shared::models::{OperatorKey, TypeAnnotation};

#[derive(Debug, Clone, Default)]
pub struct TypeAnnotationIndex {
    annotations: Vec<TypeAnnotation>,
    exact: AHashMap<OperatorKey, usize>,
    by_name: AHashMap<String, Vec<usize>>,
    line_weight: u64,
    max_distance: u64,
}

impl TypeAnnotationIndex {
    pub fn new(annotations: &[TypeAnnotation], config: &GraphConfig) -> Self {
        let mut annotations = annotations.to_vec();
        annotations.sort_by(|a, b| {
            (a.line, a.column, &a.operator_name).cmp(&(b.line, b.column, &b.operator_name))
        });

        let mut exact = AHashMap::with_capacity(annotations.len());
        let mut by_name: AHashMap<String, Vec<usize>> = AHashMap::new();
        for (i, annotation) in annotations.iter().enumerate() {
            // First report for a position wins
            exact
                .entry(OperatorKey::new(
                    annotation.line,
                    annotation.column,
                    &annotation.operator_name,
                ))
                .or_insert(i);
            by_name
                .entry(annotation.operator_name.clone())
                .or_default()
                .push(i);
        }

        Self {
            annotations,
            exact,
            by_name,
            line_weight: u64::from(config.type_match_line_weight),
            max_distance: u64::from(config.type_match_max_distance),
        }
    }

    pub fn len(&self) -> usize {
        self.annotations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.annotations.is_empty()
    }

    /// Type string for an operator occurrence, if one matches
    pub fn lookup(&self, key: &OperatorKey) -> Option<&str> {
        if let Some(&i) = self.exact.get(key) {
            return Some(self.annotations[i].type_string.as_str());
        }

        let candidates = self.by_name.get(&key.name)?;
        let (distance, best) = candidates
            .iter()
            .map(|&i| (self.distance(key, &self.annotations[i]), i))
            .min_by_key(|(distance, _)| *distance)?;

        if distance < self.max_distance {
            tracing::debug!(
                operator = %key.name,
                line = key.line,
                column = key.column,
                distance,
                "matched type annotation by proximity"
            );
            Some(self.annotations[best].type_string.as_str())
        } else {
            None
        }
    }

    fn distance(&self, key: &OperatorKey, annotation: &TypeAnnotation) -> u64 {
        let dl = u64::from(key.line.abs_diff(annotation.line));
        let dc = u64::from(key.column.abs_diff(annotation.column));
        dl.saturating_mul(self.line_weight).saturating_add(dc)
    }
}
