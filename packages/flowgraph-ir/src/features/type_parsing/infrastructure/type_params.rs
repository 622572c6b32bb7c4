/*
 * Generic parameter splitting
 *
 * Splits `Name<A, B, C>` into `["A", "B", "C"]` at top-level commas only.
 * `<...>` and `(...)` nesting is tracked separately so tuple parameters such
 * as `(String, i32)` stay intact, and the `>` of a `->` arrow never closes a
 * bracket.
 *
 * Malformed input never fails: whatever was collected is returned and a
 * warning is logged.
 */

use crate::features::type_parsing::domain::{Boundedness, StreamOrder};

/// Top-level parameters of the outermost generic in `type_string`
pub fn parse_type_parameters(type_string: &str) -> Vec<String> {
    let trimmed = type_string.trim();
    let open = match trimmed.find('<') {
        Some(i) => i,
        None => return Vec::new(),
    };

    let mut params = Vec::new();
    let mut current = String::new();
    let mut angle_depth: usize = 0;
    let mut paren_depth: usize = 0;
    let mut closed = false;
    let mut prev: Option<char> = None;

    for ch in trimmed[open + 1..].chars() {
        match ch {
            '<' => {
                angle_depth += 1;
                current.push(ch);
            }
            '>' if prev == Some('-') => current.push(ch),
            '>' => {
                if angle_depth == 0 {
                    if paren_depth > 0 {
                        tracing::warn!(
                            type_string,
                            "generic closed inside an open parenthesis; keeping partial parameters"
                        );
                    }
                    closed = true;
                    break;
                }
                angle_depth -= 1;
                current.push(ch);
            }
            '(' => {
                paren_depth += 1;
                current.push(ch);
            }
            ')' => {
                if paren_depth == 0 {
                    tracing::warn!(type_string, "unbalanced ')' in type string");
                } else {
                    paren_depth -= 1;
                }
                current.push(ch);
            }
            ',' if angle_depth == 0 && paren_depth == 0 => {
                push_param(&mut params, &current);
                current.clear();
            }
            _ => current.push(ch),
        }
        prev = Some(ch);
    }

    push_param(&mut params, &current);

    if !closed {
        tracing::warn!(
            type_string,
            parsed = params.len(),
            "unbalanced '<' in type string; returning best-effort parameters"
        );
    }

    params
}

fn push_param(params: &mut Vec<String>, raw: &str) {
    let param = raw.trim();
    if !param.is_empty() {
        params.push(param.to_string());
    }
}

/// Name before the first `<`, with any path qualifier removed
/// (`hydro_lang::Stream<..>` -> `Stream`)
pub fn base_type_name(type_string: &str) -> &str {
    let trimmed = type_string.trim();
    let head = match trimmed.find('<') {
        Some(i) => &trimmed[..i],
        None => trimmed,
    };
    let head = head.trim();
    match head.rfind("::") {
        Some(i) => &head[i + 2..],
        None => head,
    }
}

/// First parameter naming a boundedness wins; a bare `B` generic means `Unbounded`
pub fn extract_boundedness<S: AsRef<str>>(params: &[S]) -> Option<Boundedness> {
    params.iter().find_map(|p| {
        let param = p.as_ref().trim();
        if param.starts_with("Unbounded") {
            Some(Boundedness::Unbounded)
        } else if param.starts_with("Bounded") {
            Some(Boundedness::Bounded)
        } else if param == "B" {
            Some(Boundedness::Unbounded)
        } else {
            None
        }
    })
}

/// First parameter naming an ordering wins; a bare `O` generic means `NoOrder`.
///
/// Associated-type projections `<X as Trait<Y>>::Z` are resolved by looking
/// at `Y`.
pub fn extract_ordering<S: AsRef<str>>(params: &[S]) -> Option<StreamOrder> {
    params.iter().find_map(|p| {
        let param = p.as_ref().trim();
        if param.starts_with("TotalOrder") {
            Some(StreamOrder::TotalOrder)
        } else if param.starts_with("NoOrder") {
            Some(StreamOrder::NoOrder)
        } else if param == "O" {
            Some(StreamOrder::NoOrder)
        } else if param.starts_with('<') {
            ordering_from_projection(param)
        } else {
            None
        }
    })
}

fn ordering_from_projection(param: &str) -> Option<StreamOrder> {
    let after_as = &param[param.find(" as ")? + 4..];
    let trait_args = parse_type_parameters(after_as);
    trait_args.iter().find_map(|arg| {
        if arg.contains("TotalOrder") {
            Some(StreamOrder::TotalOrder)
        } else if arg.contains("NoOrder") {
            Some(StreamOrder::NoOrder)
        } else {
            None
        }
    })
}
