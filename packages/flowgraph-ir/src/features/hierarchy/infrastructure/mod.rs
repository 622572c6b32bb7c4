mod code_hierarchy;
mod collapse;
mod location_hierarchy;

pub use code_hierarchy::{build_code_hierarchy, TOP_LEVEL, UNNAMED_FILE};
pub use collapse::{collapse_single_child_chains, prune_empty, COLLAPSE_SEPARATOR};
pub use location_hierarchy::{build_location_hierarchy, DEFAULT_CONTAINER, UNKNOWN_LOCATION};
