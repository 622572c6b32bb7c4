// Graph Assembler - Main Entry Point
//
// Operator-chain records + type annotations → deduplicated nodes and edges:
// - one node per `(line, column, name)` occurrence, reused across chains
// - unclassifiable operators skipped, edges bridge the gap
// - consecutive retained nodes in a chain linked in source order
// - `let y = x.filter(..)` linked to the chain that produced `x`
//
// Deterministic: the same records always give the same ids and edges.

use ahash::{AHashMap, AHashSet};
use std::collections::BTreeMap;

use super::node_converter::{qualify_tick_variable, NodeConverter};
use super::type_matcher::TypeAnnotationIndex;
use crate::config::GraphConfig;
use crate::features::graph_builder::domain::{
    AssembledGraph, BuildStats, ChainNodes, ChainOwner, NodeTable,
};
use crate::features::operator_classifier::OperatorClassifier;
use crate::features::type_parsing::{parse_location_label, parse_location_type};
use crate::shared::models::{
    Edge, EdgeId, Location, NodeId, OperatorChainRecord, VariableBinding,
};
use crate::shared::ports::FunctionResolver;

// ============================================================
// Graph Builder
// ============================================================

/// Graph Assembler
///
/// ## Usage
/// ```text
/// let classifier = OperatorClassifier::new(&config.resolved_operators());
/// let builder = GraphBuilder::new(classifier, config.graph.clone());
/// let types = TypeAnnotationIndex::new(&input.type_annotations, &config.graph);
/// let graph = builder.build(&input.bindings, &input.standalone_chains, &types, &resolver);
/// ```
#[derive(Debug, Clone)]
pub struct GraphBuilder {
    classifier: OperatorClassifier,
    config: GraphConfig,
}

/// A chain waiting to be processed, with its source position
struct PendingChain<'r> {
    order: (Location, usize),
    owner: ChainOwner,
    record: &'r OperatorChainRecord,
}

/// Mutable assembly state for one `build` call
struct Assembly {
    table: NodeTable,
    edges: Vec<Edge>,
    seen_edges: AHashSet<(NodeId, NodeId)>,
    producers: AHashMap<String, NodeId>,
    stats: BuildStats,
}

impl Assembly {
    fn new() -> Self {
        Self {
            table: NodeTable::new(),
            edges: Vec::new(),
            seen_edges: AHashSet::new(),
            producers: AHashMap::new(),
            stats: BuildStats::default(),
        }
    }

    /// Adds `source -> target` unless it is a self-loop or already present
    fn link(&mut self, source: NodeId, target: NodeId) -> bool {
        if source == target || !self.seen_edges.insert((source, target)) {
            return false;
        }
        let id = EdgeId(self.edges.len() as u32);
        self.edges.push(Edge::new(id, source, target));
        true
    }
}

impl GraphBuilder {
    pub fn new(classifier: OperatorClassifier, config: GraphConfig) -> Self {
        Self { classifier, config }
    }

    pub fn classifier(&self) -> &OperatorClassifier {
        &self.classifier
    }

    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    /// Assemble the dataflow graph for one document
    pub fn build(
        &self,
        bindings: &[VariableBinding],
        standalone_chains: &[OperatorChainRecord],
        types: &TypeAnnotationIndex,
        resolver: &dyn FunctionResolver,
    ) -> AssembledGraph {
        let mut state = Assembly::new();
        let converter = NodeConverter::new(&self.classifier, self.config.max_label_length);

        let mut chains = Vec::with_capacity(bindings.len() + standalone_chains.len());
        for pending in self.pending_chains(bindings, standalone_chains) {
            let chain_nodes = self.process_chain(&pending, &mut state, &converter, types, resolver);
            if let ChainOwner::Binding { variable, .. } = &pending.owner {
                if let Some(&last) = chain_nodes.nodes.last() {
                    state.producers.insert(variable.clone(), last);
                }
            }
            chains.push(chain_nodes);
        }

        state.stats.chains = chains.len();
        state.stats.nodes = state.table.len();
        state.stats.edges = state.edges.len();
        state.stats.typed_nodes = state.table.iter().filter(|n| n.has_location()).count();

        tracing::info!(
            chains = state.stats.chains,
            nodes = state.stats.nodes,
            edges = state.stats.edges,
            skipped = state.stats.operators_skipped,
            "assembled dataflow graph"
        );

        AssembledGraph {
            nodes: state.table.into_nodes(),
            edges: state.edges,
            chains,
            producers: state.producers.into_iter().collect::<BTreeMap<_, _>>(),
            stats: state.stats,
        }
    }

    /// Bindings and standalone chains interleaved by first operator position.
    /// Chains without operators sort by declaration line, bindings first on ties.
    fn pending_chains<'r>(
        &self,
        bindings: &'r [VariableBinding],
        standalone_chains: &'r [OperatorChainRecord],
    ) -> Vec<PendingChain<'r>> {
        let mut pending: Vec<PendingChain<'r>> = bindings
            .iter()
            .enumerate()
            .map(|(i, binding)| PendingChain {
                order: (
                    binding
                        .chain
                        .first_location()
                        .unwrap_or(Location::new(binding.declaration_line, 0)),
                    i,
                ),
                owner: ChainOwner::Binding {
                    variable: binding.variable_name.clone(),
                    declaration_line: binding.declaration_line,
                },
                record: &binding.chain,
            })
            .collect();

        let offset = bindings.len();
        pending.extend(standalone_chains.iter().enumerate().map(|(i, record)| {
            PendingChain {
                order: (
                    record.first_location().unwrap_or(Location::new(u32::MAX, 0)),
                    offset + i,
                ),
                owner: ChainOwner::Standalone,
                record,
            }
        }));

        pending.sort_by_key(|p| p.order);
        pending
    }

    fn process_chain(
        &self,
        pending: &PendingChain<'_>,
        state: &mut Assembly,
        converter: &NodeConverter<'_>,
        types: &TypeAnnotationIndex,
        resolver: &dyn FunctionResolver,
    ) -> ChainNodes {
        let record = pending.record;
        let line = match &pending.owner {
            ChainOwner::Binding {
                declaration_line, ..
            } => *declaration_line,
            ChainOwner::Standalone => pending.order.0.line,
        };

        let mut retained: Vec<NodeId> = Vec::with_capacity(record.operators.len());
        let mut current_tick: Option<String> = None;

        for call in &record.operators {
            state.stats.operators_seen += 1;

            if let Some(arg) = call.tick_argument.as_deref() {
                current_tick = Some(qualify_tick_variable(arg, call.line(), resolver));
            }

            let key = call.key();
            let return_type = types.lookup(&key);
            if !self.classifier.is_valid_dataflow_operator(&call.name, return_type) {
                state.stats.operators_skipped += 1;
                tracing::debug!(operator = %call.name, line = call.line(), "skipping non-dataflow call");
                continue;
            }

            // A typed operator outside any tick ends propagation for the rest of the chain
            if call.tick_argument.is_none() && leaves_tick(return_type) {
                current_tick = None;
            }
            let tick = if call.tick_argument.is_some() || self.config.propagate_tick_variables {
                current_tick.clone()
            } else {
                None
            };

            let (id, _) = state
                .table
                .get_or_insert_with(&key, |id| converter.convert(id, call, return_type, tick));

            if let Some(&previous) = retained.last() {
                state.link(previous, id);
            }
            if retained.last() != Some(&id) {
                retained.push(id);
            }
        }

        if let Some(&first) = retained.first() {
            if let Some((variable, producer)) = referenced_variable(record, &state.producers) {
                if state.link(producer, first) {
                    state.stats.cross_chain_edges += 1;
                    tracing::debug!(variable = %variable, "linked chain to producer");
                }
            }
        }

        ChainNodes {
            owner: pending.owner.clone(),
            line,
            nodes: retained,
        }
    }
}

fn leaves_tick(return_type: Option<&str>) -> bool {
    return_type
        .and_then(parse_location_type)
        .map(|kind| parse_location_label(&kind).tick_depth == 0)
        .unwrap_or(false)
}

/// Longest previously recorded variable the chain starts from, with its producer
fn referenced_variable(
    record: &OperatorChainRecord,
    producers: &AHashMap<String, NodeId>,
) -> Option<(String, NodeId)> {
    let call_text = record
        .operators
        .first()
        .and_then(|call| call.call_text.as_deref())
        .map(str::trim_start);
    let preceding = record
        .preceding_text
        .as_deref()
        .map(|text| text.trim_end().trim_end_matches('.').trim_end());

    producers
        .iter()
        .filter(|(name, _)| {
            call_text.is_some_and(|text| starts_with_identifier(text, name))
                || preceding.is_some_and(|text| ends_with_identifier(text, name))
        })
        .max_by(|(a, _), (b, _)| a.len().cmp(&b.len()).then_with(|| b.cmp(a)))
        .map(|(name, id)| (name.clone(), *id))
}

fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn starts_with_identifier(text: &str, name: &str) -> bool {
    text.strip_prefix(name)
        .is_some_and(|rest| !rest.starts_with(is_ident_char))
}

fn ends_with_identifier(text: &str, name: &str) -> bool {
    text.strip_suffix(name)
        .is_some_and(|rest| !rest.ends_with(is_ident_char))
}

// ============================================================
// Tests
// ============================================================
