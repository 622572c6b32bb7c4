mod location;
mod semantics;
mod type_params;

pub use location::{parse_location_label, parse_location_type};
pub use semantics::parse_collection_semantics;
pub use type_params::{
    base_type_name, extract_boundedness, extract_ordering, parse_type_parameters,
};
