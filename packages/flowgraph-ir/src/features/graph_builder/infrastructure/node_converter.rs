// Node Converter - OperatorCall → Node
//
// Labels, node type, and the type-derived facts (location, collection
// shape) for one retained operator occurrence.

use crate::features::operator_classifier::OperatorClassifier;
use crate::features::type_parsing::{parse_collection_semantics, parse_location_type};
use crate::shared::models::{Node, NodeId, OperatorCall};
use crate::shared::ports::FunctionResolver;

const ELLIPSIS: &str = "...";

pub struct NodeConverter<'a> {
    classifier: &'a OperatorClassifier,
    max_label_length: usize,
}

impl<'a> NodeConverter<'a> {
    pub fn new(classifier: &'a OperatorClassifier, max_label_length: usize) -> Self {
        Self {
            classifier,
            max_label_length,
        }
    }

    pub fn convert(
        &self,
        id: NodeId,
        call: &OperatorCall,
        return_type: Option<&str>,
        tick_variable: Option<String>,
    ) -> Node {
        let mut node = Node::new(id, self.classifier.infer_node_type(&call.name), &call.name);
        node.full_label = full_label(&call.name, call.call_text.as_deref(), self.max_label_length);
        node.position = Some(call.location());
        node.tick_variable = tick_variable;

        if let Some(ty) = return_type {
            node.location_kind = parse_location_type(ty);
            node.semantics = parse_collection_semantics(ty);
            if node.location_kind.is_none() {
                tracing::debug!(operator = %call.name, return_type = ty, "no location in return type");
            }
        }

        node
    }
}

/// Operator name followed by its call-site text, whitespace collapsed and
/// truncated to `max_len` characters
pub fn full_label(name: &str, call_text: Option<&str>, max_len: usize) -> String {
    let text = match call_text.map(collapse_whitespace) {
        Some(text) if !text.is_empty() => text,
        _ => return truncate_label(name, max_len),
    };

    // Drop any receiver text in front of the method name
    let label = match method_start(&text, name) {
        Some(start) => text[start..].to_string(),
        None => format!("{} {}", name, text),
    };
    truncate_label(&label, max_len)
}

/// Byte offset of `name` as a called method: `.name` first, then a bare
/// `name` at an identifier boundary
fn method_start(text: &str, name: &str) -> Option<usize> {
    if name.is_empty() {
        return None;
    }
    let dotted = format!(".{}", name);
    let is_ident = |c: char| c.is_alphanumeric() || c == '_';

    let bounded = |start: usize| {
        let after = text[start + name.len()..].chars().next();
        !after.map_or(false, is_ident)
    };

    if let Some(start) = text
        .match_indices(&dotted)
        .map(|(i, _)| i + 1)
        .find(|&i| bounded(i))
    {
        return Some(start);
    }

    text.match_indices(name)
        .map(|(i, _)| i)
        .find(|&i| {
            let before = text[..i].chars().next_back();
            !before.map_or(false, is_ident) && bounded(i)
        })
}

pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn truncate_label(label: &str, max_len: usize) -> String {
    if label.chars().count() <= max_len {
        return label.to_string();
    }
    let keep = max_len.saturating_sub(ELLIPSIS.len());
    let mut out: String = label.chars().take(keep).collect();
    out.push_str(ELLIPSIS);
    out
}

/// `tick` inside `fn leader` -> `leader::tick`; plain `tick` at top level
pub fn qualify_tick_variable(
    argument: &str,
    line: u32,
    resolver: &dyn FunctionResolver,
) -> String {
    let argument = argument.trim().trim_start_matches('&').trim();
    match resolver.enclosing_function(line) {
        Some(function) => format!("{}::{}", function, argument),
        None => argument.to_string(),
    }
}
