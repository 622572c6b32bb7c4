//! Location type normalization
//!
//! Recovers where a stage's data lives from its full collection type:
//!
//! ```text
//! Stream<String, Tick<Process<'a, Leader>>, Bounded, TotalOrder>
//!   -> Tick<Process<Leader>>            (parse_location_type)
//!   -> base "Leader", tick depth 1      (parse_location_label)
//! ```
//!
//! `Tick<..>` wrappers are stripped and counted on the way in and the same
//! number is reattached on the way out, so tick depth survives
//! normalization exactly.

use super::type_params::{base_type_name, parse_type_parameters};
use crate::features::type_parsing::domain::{
    CollectionKind, LocationConstructor, LocationLabel,
};

const TICK: &str = "Tick";
const ATOMIC: &str = "Atomic";

/// Guards against pathological recursion on adversarial input
const MAX_NESTING: usize = 64;

/// Normalized location of a collection or location type, if recognizable
pub fn parse_location_type(full_type: &str) -> Option<String> {
    normalize(full_type, 0)
}

fn normalize(type_string: &str, nesting: usize) -> Option<String> {
    if nesting > MAX_NESTING {
        tracing::warn!(type_string, "location type nested too deeply");
        return None;
    }

    let ty = peel_wrappers(type_string);
    let base = base_type_name(ty);

    if let Some(kind) = CollectionKind::from_name(base) {
        let params = parse_type_parameters(ty);
        let location = params.get(kind.location_param_index())?;
        return normalize(location, nesting + 1);
    }

    if base == TICK || base == ATOMIC || LocationConstructor::from_name(base).is_some() {
        let (depth, inner) = strip_ticks(ty);
        let inner = normalize_constructor(inner)?;
        return Some(wrap_ticks(&inner, depth));
    }

    None
}

/// `&`, `&mut`, `impl Into<..>`
fn peel_wrappers(type_string: &str) -> &str {
    let mut ty = type_string.trim();
    loop {
        if let Some(rest) = ty.strip_prefix('&') {
            ty = rest.trim_start();
            ty = ty.strip_prefix("mut ").unwrap_or(ty).trim_start();
            continue;
        }
        if let Some(rest) = ty.strip_prefix("impl Into<") {
            match rest.rfind('>') {
                Some(end) => {
                    ty = rest[..end].trim();
                    continue;
                }
                None => return ty,
            }
        }
        return ty;
    }
}

/// Strip nested `Tick<..>` (and transparent `Atomic<..>`) wrappers,
/// returning how many ticks were removed and the innermost type text
fn strip_ticks(type_string: &str) -> (usize, &str) {
    let mut depth = 0;
    let mut ty = type_string.trim();

    for _ in 0..MAX_NESTING {
        let base = base_type_name(ty);
        if base != TICK && base != ATOMIC {
            break;
        }
        let open = match ty.find('<') {
            Some(i) => i,
            None => break,
        };
        let close = match ty.rfind('>') {
            Some(i) if i > open => i,
            _ => {
                tracing::warn!(type_string, "unterminated Tick wrapper");
                break;
            }
        };
        if base == TICK {
            depth += 1;
        }
        ty = ty[open + 1..close].trim();
    }

    (depth, ty)
}

fn wrap_ticks(inner: &str, depth: usize) -> String {
    let mut out = String::with_capacity(inner.len() + depth * 6);
    for _ in 0..depth {
        out.push_str("Tick<");
    }
    out.push_str(inner);
    for _ in 0..depth {
        out.push('>');
    }
    out
}

/// `Process<'a, Leader>` -> `Process<Leader>`, `Cluster<'a>` -> `Cluster`
fn normalize_constructor(type_string: &str) -> Option<String> {
    let base = base_type_name(type_string);
    let constructor = LocationConstructor::from_name(base)?;
    let params: Vec<String> = parse_type_parameters(type_string)
        .into_iter()
        .filter(|p| !is_lifetime(p))
        .collect();

    if params.is_empty() {
        Some(constructor.as_str().to_string())
    } else {
        Some(format!("{}<{}>", constructor.as_str(), params.join(", ")))
    }
}

fn is_lifetime(param: &str) -> bool {
    param.trim_start().starts_with('\'')
}

/// Grouping label and tick depth of a (normalized or raw) location type
pub fn parse_location_label(location_kind: &str) -> LocationLabel {
    let (tick_depth, inner) = strip_ticks(location_kind);

    let first_param = parse_type_parameters(inner)
        .into_iter()
        .find(|p| !is_lifetime(p));

    let base = match first_param {
        Some(param) => param,
        None => {
            let constructor = base_type_name(inner);
            if constructor.is_empty() {
                location_kind.trim().to_string()
            } else {
                constructor.to_string()
            }
        }
    };

    LocationLabel::new(base, tick_depth)
}
