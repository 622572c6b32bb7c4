// Hierarchy Builder
//
// Partitions the assembled nodes two ways for the renderer:
// - location: runtime location, nested by tick scope
// - code: file → function → variable, with single-child spines collapsed
//
// ## Architecture
// - Domain: ContainerArena addressed by ContainerId
// - Infrastructure: the two builders and the prune/collapse passes
// - Application: HierarchyBuilder (renders both)

pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::{HierarchyBuilder, CODE_HIERARCHY_NAME, LOCATION_HIERARCHY_NAME};
pub use domain::{Container, ContainerArena, ContainerId};
pub use infrastructure::{
    build_code_hierarchy, build_location_hierarchy, collapse_single_child_chains, prune_empty,
    COLLAPSE_SEPARATOR, DEFAULT_CONTAINER, TOP_LEVEL, UNKNOWN_LOCATION, UNNAMED_FILE,
};
