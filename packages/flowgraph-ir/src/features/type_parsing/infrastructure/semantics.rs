//! Collection shape facts for edge tagging

use super::type_params::{
    base_type_name, extract_boundedness, extract_ordering, parse_type_parameters,
};
use crate::features::type_parsing::domain::{CollectionKind, CollectionSemantics};

/// Kind, boundedness and ordering of a collection-typed stage.
///
/// Boundedness and ordering are read from the parameters after the location
/// parameter so an element type can never be mistaken for either.
pub fn parse_collection_semantics(type_string: &str) -> Option<CollectionSemantics> {
    let mut ty = type_string.trim().trim_start_matches('&').trim();
    if let Some(rest) = ty.strip_prefix("impl Into<") {
        ty = rest.rfind('>').map(|end| rest[..end].trim()).unwrap_or(rest);
    }

    let kind = CollectionKind::from_name(base_type_name(ty))?;
    let params = parse_type_parameters(ty);
    let tail = params
        .get(kind.location_param_index() + 1..)
        .unwrap_or_default();

    Some(CollectionSemantics {
        kind,
        boundedness: extract_boundedness(tail),
        ordering: extract_ordering(tail),
    })
}
