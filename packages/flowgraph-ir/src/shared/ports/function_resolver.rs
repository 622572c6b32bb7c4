//! Function-name resolution port
//!
//! The syntactic extractor owns the parse tree; the core only asks it which
//! function encloses a given line.

use crate::shared::models::FunctionSpan;

/// `(line) -> enclosing function name`
pub trait FunctionResolver {
    fn enclosing_function(&self, line: u32) -> Option<String>;
}

impl<F> FunctionResolver for F
where
    F: Fn(u32) -> Option<String>,
{
    fn enclosing_function(&self, line: u32) -> Option<String> {
        self(line)
    }
}

/// Resolver for documents with no function information
#[derive(Debug, Clone, Copy, Default)]
pub struct TopLevelOnly;

impl FunctionResolver for TopLevelOnly {
    fn enclosing_function(&self, _line: u32) -> Option<String> {
        None
    }
}

/// Resolver over extractor-reported function extents.
///
/// The innermost (shortest) span containing the line wins; ties go to the
/// span that starts later.
#[derive(Debug, Clone, Default)]
pub struct FunctionSpanIndex {
    spans: Vec<FunctionSpan>,
}

impl FunctionSpanIndex {
    pub fn new(spans: &[FunctionSpan]) -> Self {
        let mut spans = spans.to_vec();
        spans.sort_by_key(|f| (f.span.start_line, f.span.end_line));
        Self { spans }
    }

    pub fn len(&self) -> usize {
        self.spans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }
}

impl FunctionResolver for FunctionSpanIndex {
    fn enclosing_function(&self, line: u32) -> Option<String> {
        self.spans
            .iter()
            .filter(|f| f.span.contains_line(line))
            .min_by_key(|f| (f.span.line_count(), std::cmp::Reverse(f.span.start_line)))
            .map(|f| f.name.clone())
    }
}
