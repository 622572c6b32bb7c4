//! Pipeline orchestrator
//!
//! Wires the assembler, edge tagger and hierarchy builder into one pass
//! over an `ExtractionInput`, validates the result, and short-circuits
//! through the extraction cache when the caller supplies a key.

use rayon::prelude::*;
use serde::Serialize;
use std::sync::Arc;

use super::validation::{validate_graph, ValidationIssue};
use crate::config::PipelineConfig;
use crate::errors::Result;
use crate::features::cache::{CacheKey, CacheStats, ExtractionCache};
use crate::features::graph_builder::{
    tag_collection_edges, tag_network_edges, BuildStats, GraphBuilder, TypeAnnotationIndex,
};
use crate::features::hierarchy::HierarchyBuilder;
use crate::features::operator_classifier::OperatorClassifier;
use crate::shared::models::{tags, ExtractionInput, VisualizationGraph};
use crate::shared::ports::{FunctionResolver, FunctionSpanIndex};

/// Per-pass counters
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AnalysisStats {
    pub build: BuildStats,
    pub network_edges: usize,
    pub location_containers: usize,
    pub code_containers: usize,
    pub issues: usize,
}

/// Result of one uncached pass
#[derive(Debug, Clone)]
pub struct AnalysisOutput {
    pub graph: VisualizationGraph,
    /// Structural problems found in `graph`; the graph is returned regardless
    pub issues: Vec<ValidationIssue>,
    pub stats: AnalysisStats,
}

impl AnalysisOutput {
    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Graph Construction & Hierarchical Clustering pipeline
///
/// ## Usage
/// ```text
/// let pipeline = GraphPipeline::new(PipelineConfig::default())?;
/// let resolver = FunctionSpanIndex::new(&input.function_spans);
/// let output = pipeline.analyze(&input, &resolver);
/// ```
pub struct GraphPipeline {
    config: PipelineConfig,
    builder: GraphBuilder,
    hierarchies: HierarchyBuilder,
    cache: Arc<ExtractionCache<VisualizationGraph>>,
}

impl GraphPipeline {
    pub fn new(config: PipelineConfig) -> Result<Self> {
        let config = config.build()?;
        let cache = Arc::new(ExtractionCache::new(&config.cache)?);
        Ok(Self::assemble(config, cache))
    }

    /// Pipeline sharing an existing cache, e.g. one registered on a
    /// prometheus registry by the host
    pub fn with_cache(
        config: PipelineConfig,
        cache: Arc<ExtractionCache<VisualizationGraph>>,
    ) -> Result<Self> {
        let config = config.build()?;
        Ok(Self::assemble(config, cache))
    }

    fn assemble(config: PipelineConfig, cache: Arc<ExtractionCache<VisualizationGraph>>) -> Self {
        let classifier = OperatorClassifier::new(&config.resolved_operators());
        let builder = GraphBuilder::new(classifier, config.graph.clone());
        Self {
            config,
            builder,
            hierarchies: HierarchyBuilder::new(),
            cache,
        }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    pub fn cache(&self) -> &Arc<ExtractionCache<VisualizationGraph>> {
        &self.cache
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// Run every stage over one document. Never fails: malformed input
    /// degrades the graph and shows up in `issues`.
    #[tracing::instrument(skip_all, fields(file = %input.file_path))]
    pub fn analyze(
        &self,
        input: &ExtractionInput,
        resolver: &dyn FunctionResolver,
    ) -> AnalysisOutput {
        let types = TypeAnnotationIndex::new(&input.type_annotations, &self.config.graph);
        let assembled = self.builder.build(
            &input.bindings,
            &input.standalone_chains,
            &types,
            resolver,
        );

        let edges = tag_network_edges(
            assembled.edges.clone(),
            &assembled.nodes,
            self.builder.classifier(),
        );
        let edges = tag_collection_edges(edges, &assembled.nodes);

        let (location, location_assignment) = self.hierarchies.location(&assembled.nodes);
        let (code, code_assignment) = self.hierarchies.code(&input.file_path, &assembled, resolver);

        let mut stats = AnalysisStats {
            build: assembled.stats.clone(),
            network_edges: edges.iter().filter(|e| e.has_tag(tags::NETWORK)).count(),
            location_containers: location.container_count(),
            code_containers: code.container_count(),
            issues: 0,
        };

        let mut graph = VisualizationGraph::new(assembled.nodes, edges);
        graph.push_hierarchy(location, location_assignment);
        graph.push_hierarchy(code, code_assignment);

        let issues = validate_graph(&graph);
        for issue in &issues {
            tracing::warn!(%issue, "graph validation issue");
        }
        stats.issues = issues.len();

        tracing::info!(
            nodes = graph.nodes.len(),
            edges = graph.edges.len(),
            network_edges = stats.network_edges,
            issues = stats.issues,
            "analysis complete"
        );

        AnalysisOutput {
            graph,
            issues,
            stats,
        }
    }

    /// `analyze`, reusing the cached graph for `key` when present
    #[tracing::instrument(skip_all, fields(key = %key))]
    pub fn analyze_cached(
        &self,
        key: &CacheKey,
        input: &ExtractionInput,
        resolver: &dyn FunctionResolver,
    ) -> Arc<VisualizationGraph> {
        self.cache
            .get_or_insert_with(key, || self.analyze(input, resolver).graph)
    }

    /// Analyze independent documents in parallel, sharing the cache.
    ///
    /// Each document resolves functions through its own `function_spans`.
    /// Results come back in input order.
    #[tracing::instrument(skip_all, fields(documents = jobs.len()))]
    pub fn analyze_batch(
        &self,
        jobs: &[(CacheKey, ExtractionInput)],
    ) -> Vec<Arc<VisualizationGraph>> {
        jobs.par_iter()
            .map(|(key, input)| {
                let resolver = FunctionSpanIndex::new(&input.function_spans);
                self.analyze_cached(key, input, &resolver)
            })
            .collect()
    }

    /// Drop cached graphs for a document after it changes
    pub fn invalidate_document(&self, document_uri: &str) -> usize {
        self.cache.invalidate_document(document_uri)
    }
}
