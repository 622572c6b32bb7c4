//! Extractor input records
//!
//! Operator chains, variable bindings and type annotations as produced by
//! the syntactic extractor and the type oracle. Everything here is plain
//! data and deserializes from the extractor's camelCase JSON.

use serde::{Deserialize, Serialize};

use super::span::{Location, Span};

/// One method call in a syntactic operator chain
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperatorCall {
    /// Operator (method) name, e.g. `map`
    pub name: String,

    /// Position of the method name through the end of the call
    pub span: Span,

    /// First call argument of a temporal operator (`batch(&tick, ..)` -> `tick`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tick_argument: Option<String>,

    /// Call-site source text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub call_text: Option<String>,
}

impl OperatorCall {
    pub fn new(name: impl Into<String>, line: u32, column: u32) -> Self {
        let name = name.into();
        let end_col = column + name.len() as u32;
        Self {
            name,
            span: Span::new(line, column, line, end_col),
            tick_argument: None,
            call_text: None,
        }
    }

    pub fn with_end(mut self, end_line: u32, end_col: u32) -> Self {
        self.span.end_line = end_line;
        self.span.end_col = end_col;
        self
    }

    pub fn with_tick_argument(mut self, arg: impl Into<String>) -> Self {
        self.tick_argument = Some(arg.into());
        self
    }

    pub fn with_call_text(mut self, text: impl Into<String>) -> Self {
        self.call_text = Some(text.into());
        self
    }

    pub fn line(&self) -> u32 {
        self.span.start_line
    }

    pub fn column(&self) -> u32 {
        self.span.start_col
    }

    pub fn location(&self) -> Location {
        self.span.start()
    }

    /// Identity of the operator occurrence
    pub fn key(&self) -> OperatorKey {
        OperatorKey::new(self.line(), self.column(), &self.name)
    }
}

/// `(line, column, name)` identity of an operator occurrence
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OperatorKey {
    pub line: u32,
    pub column: u32,
    pub name: String,
}

impl OperatorKey {
    pub fn new(line: u32, column: u32, name: impl Into<String>) -> Self {
        Self {
            line,
            column,
            name: name.into(),
        }
    }
}

/// One syntactic method-call chain
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperatorChainRecord {
    /// Operators in source order
    pub operators: Vec<OperatorCall>,

    /// Text immediately preceding the chain when it starts on a continuation line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preceding_text: Option<String>,
}

impl OperatorChainRecord {
    pub fn new(operators: Vec<OperatorCall>) -> Self {
        Self {
            operators,
            preceding_text: None,
        }
    }

    pub fn with_preceding_text(mut self, text: impl Into<String>) -> Self {
        self.preceding_text = Some(text.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.operators.is_empty()
    }

    pub fn first_location(&self) -> Option<Location> {
        self.operators.first().map(OperatorCall::location)
    }
}

/// `let <variable_name> = <chain>;`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariableBinding {
    pub variable_name: String,
    pub declaration_line: u32,
    pub chain: OperatorChainRecord,
}

impl VariableBinding {
    pub fn new(
        variable_name: impl Into<String>,
        declaration_line: u32,
        chain: OperatorChainRecord,
    ) -> Self {
        Self {
            variable_name: variable_name.into(),
            declaration_line,
            chain,
        }
    }
}

/// Raw type string reported by the type oracle for a position
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeAnnotation {
    pub line: u32,
    pub column: u32,
    pub operator_name: String,
    pub type_string: String,
}

impl TypeAnnotation {
    pub fn new(
        line: u32,
        column: u32,
        operator_name: impl Into<String>,
        type_string: impl Into<String>,
    ) -> Self {
        Self {
            line,
            column,
            operator_name: operator_name.into(),
            type_string: type_string.into(),
        }
    }
}

/// Extent of a named function, used to answer "which function encloses line N"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionSpan {
    pub name: String,
    pub span: Span,
}

impl FunctionSpan {
    pub fn new(name: impl Into<String>, start_line: u32, end_line: u32) -> Self {
        Self {
            name: name.into(),
            span: Span::new(start_line, 0, end_line, 0),
        }
    }
}

/// Everything the extractor and the type oracle captured for one document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionInput {
    pub file_path: String,

    #[serde(default)]
    pub bindings: Vec<VariableBinding>,

    #[serde(default)]
    pub standalone_chains: Vec<OperatorChainRecord>,

    #[serde(default)]
    pub type_annotations: Vec<TypeAnnotation>,

    #[serde(default)]
    pub function_spans: Vec<FunctionSpan>,
}

impl ExtractionInput {
    pub fn new(file_path: impl Into<String>) -> Self {
        Self {
            file_path: file_path.into(),
            ..Default::default()
        }
    }

    pub fn operator_count(&self) -> usize {
        self.bindings
            .iter()
            .map(|b| b.chain.operators.len())
            .chain(self.standalone_chains.iter().map(|c| c.operators.len()))
            .sum()
    }
}
