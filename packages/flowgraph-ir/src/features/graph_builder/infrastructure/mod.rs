// Graph Builder Infrastructure

pub mod builder;
pub mod edge_tagger;
pub mod node_converter;
pub mod type_matcher;

pub use builder::GraphBuilder;
pub use edge_tagger::{tag_collection_edges, tag_network_edges};
pub use node_converter::{collapse_whitespace, full_label, qualify_tick_variable, NodeConverter};
pub use type_matcher::TypeAnnotationIndex;
