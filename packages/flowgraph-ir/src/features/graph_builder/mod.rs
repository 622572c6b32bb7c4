// Graph Builder - Operator Chains to Dataflow Graph
//
// Turns extractor records into a deduplicated node/edge graph and tags the
// edges with network direction and collection shape.
//
// ## Architecture
// - Domain: NodeTable, AssembledGraph, chain membership
// - Infrastructure: GraphBuilder (assembler), TypeAnnotationIndex,
//   NodeConverter, edge tagger

pub mod domain;
pub mod infrastructure;

pub use domain::{AssembledGraph, BuildStats, ChainNodes, ChainOwner, NodeTable};
pub use infrastructure::{
    tag_collection_edges, tag_network_edges, GraphBuilder, TypeAnnotationIndex,
};
