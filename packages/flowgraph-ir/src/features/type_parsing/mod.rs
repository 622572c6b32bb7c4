// Type-String Parser
//
// Balanced-bracket parsing of generic type strings reported by the type
// oracle, plus the facts derived from them:
// - top-level parameter lists (`parse_type_parameters`)
// - boundedness / ordering (`extract_boundedness`, `extract_ordering`)
// - normalized location with exact tick depth (`parse_location_type`)
// - location grouping labels (`parse_location_label`)
//
// ## Architecture
// - Domain: value types (Boundedness, StreamOrder, CollectionKind, ...)
// - Infrastructure: pure parsing functions, no state

pub mod domain;
pub mod infrastructure;

pub use domain::{
    Boundedness, CollectionKind, CollectionSemantics, LocationConstructor, LocationLabel,
    StreamOrder,
};
pub use infrastructure::{
    base_type_name, extract_boundedness, extract_ordering, parse_collection_semantics,
    parse_location_label, parse_location_type, parse_type_parameters,
};
