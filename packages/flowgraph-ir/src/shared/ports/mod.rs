//! Ports implemented by external collaborators

mod function_resolver;

pub use function_resolver::{FunctionResolver, FunctionSpanIndex, TopLevelOnly};
